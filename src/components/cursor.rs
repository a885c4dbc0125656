use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::cursor::CursorSession;

const CURSOR_CSS: &str = r#"
    .custom-cursor,
    .custom-cursor-follower {
        position: fixed;
        top: 0;
        left: 0;
        pointer-events: none;
        z-index: 9999;
        border-radius: 50%;
        will-change: transform;
    }
    .custom-cursor {
        width: 6px;
        height: 6px;
        background: #fff;
        mix-blend-mode: difference;
    }
    .custom-cursor-follower {
        width: 34px;
        height: 34px;
        border: 1px solid rgba(255, 255, 255, 0.5);
        background-color: transparent;
    }
    .custom-cursor-inner {
        position: absolute;
        inset: 35%;
        border-radius: 50%;
        background: rgba(147, 51, 234, 0.35);
    }
    @media (pointer: fine) {
        body, a, button, input, [role="button"] {
            cursor: none;
        }
    }
    @media (pointer: coarse), (max-width: 767px) {
        .custom-cursor,
        .custom-cursor-follower {
            display: none;
        }
    }
"#;

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    // Mount once; the destructor releases the listener, interval and frame loop
    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with_deps(
            move |_| {
                let session = match (dot_ref.cast::<HtmlElement>(), ring_ref.cast::<HtmlElement>()) {
                    (Some(dot), Some(ring)) => CursorSession::mount(dot, ring),
                    _ => {
                        warn!("Cursor elements were not rendered, skipping custom cursor");
                        None
                    }
                };
                move || {
                    if let Some(mut session) = session {
                        session.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>{CURSOR_CSS}</style>
            <div ref={dot_ref} class="custom-cursor"></div>
            <div ref={ring_ref} class="custom-cursor-follower">
                <div class="custom-cursor-inner"></div>
            </div>
        </>
    }
}
