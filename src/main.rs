use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::info;
use web_sys::MouseEvent;

mod config;
mod cursor;
mod gemini;
mod lifecycle;
mod models;
mod trends;
mod components {
    pub mod ai_strategist;
    pub mod cursor;
    pub mod ticker;
}
mod pages {
    pub mod landing;
}

use components::cursor::CustomCursor;
use pages::landing::Landing;

const NAV_SCROLL_THRESHOLD: f64 = 80.0;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#work", "Work"),
    ("#process", "Process"),
    ("#strategist", "Strategist"),
    ("#team", "Team"),
    ("#faq", "FAQ"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404 / BLOCK NOT FOUND"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Return to genesis"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.4s, padding 0.4s;
                        padding: 1.75rem 0;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.85);
                        backdrop-filter: blur(12px);
                        padding: 1rem 0;
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        text-decoration: none;
                    }
                    .nav-right { display: flex; gap: 2rem; }
                    .nav-link {
                        color: #9ca3af;
                        font-size: 0.65rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        text-decoration: none;
                    }
                    .nav-link:hover { color: #fff; }
                    .burger-menu { display: none; background: none; border: none; }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 2rem 1.5rem;
                            background: #000;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"NODEFORGE"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                            { *label }
                        </a>
                    }) }
                    <a href="#contact" class="nav-link cursor-grow" onclick={close_menu.clone()}>
                        {"Contact_"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CustomCursor />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
