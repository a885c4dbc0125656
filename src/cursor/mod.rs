//! Custom two-part cursor: a dot glued to the pointer and a ring trailing behind it.
//!
//! [`CursorSession`] is the per-mount owner of everything that touches the browser:
//! the window `mousemove` listener, the hover rescan interval, the hover callbacks
//! and the animation frame loop. Dropping or tearing it down releases all of them.

mod animator;
mod easing;
mod hover;
mod tracker;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Performance, Window};

use crate::config;
use crate::lifecycle::MountToken;
use animator::{CursorAnimator, FollowerId, FollowerSink, FollowerState};
use hover::{DomHoverHost, HoverEdge, HoverObserver};
use tracker::{PointerSample, PointerTracker};

pub use tracker::PointerClass;

/// Writes follower state straight into the two elements' inline styles.
struct ElementSink {
    dot: HtmlElement,
    ring: HtmlElement,
}

impl FollowerSink for ElementSink {
    fn apply(&self, id: FollowerId, state: &FollowerState) {
        let style = match id {
            FollowerId::Dot => self.dot.style(),
            FollowerId::Ring => self.ring.style(),
        };
        let _ = style.set_property("transform", &state.transform());
        match id {
            FollowerId::Dot => {
                let _ = style.set_property("opacity", &format!("{:.3}", state.opacity));
            }
            FollowerId::Ring => {
                let _ = style.set_property("background-color", &state.background());
                let _ = style.set_property("border-width", &format!("{:.2}px", state.border_width));
            }
        }
    }
}

struct CursorRuntime {
    token: MountToken,
    animator: RefCell<CursorAnimator>,
    sink: ElementSink,
    frame: RefCell<Option<AnimationFrame>>,
    performance: Option<Performance>,
}

impl CursorRuntime {
    fn now(&self) -> f64 {
        self.performance.as_ref().map(|p| p.now()).unwrap_or(0.0)
    }

    /// At most one frame is ever pending.
    fn request_frame(self: &Rc<Self>) {
        if !self.token.is_live() || self.frame.borrow().is_some() {
            return;
        }
        let runtime = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            runtime.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if !self.token.is_live() {
            return;
        }
        let running = self.animator.borrow_mut().tick(timestamp);
        self.animator.borrow().render(&self.sink);
        if running {
            self.request_frame();
        }
    }

    fn hover(self: &Rc<Self>, edge: HoverEdge) {
        if !self.token.is_live() {
            return;
        }
        let now = self.now();
        {
            let mut animator = self.animator.borrow_mut();
            match edge {
                HoverEdge::Enter => animator.enter_hover(now),
                HoverEdge::Leave => animator.exit_hover(now),
            }
        }
        self.request_frame();
    }
}

/// Holds the runtime weakly: the JS side may keep these callbacks after the session is gone.
fn hover_callback(runtime: &Rc<CursorRuntime>, edge: HoverEdge) -> Closure<dyn FnMut()> {
    let runtime: Weak<CursorRuntime> = Rc::downgrade(runtime);
    Closure::wrap(Box::new(move || {
        if let Some(runtime) = runtime.upgrade() {
            runtime.hover(edge);
        }
    }) as Box<dyn FnMut()>)
}

pub struct CursorSession {
    token: MountToken,
    window: Window,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    hover: Rc<HoverObserver<DomHoverHost>>,
    rescan: Option<Interval>,
    runtime: Rc<CursorRuntime>,
}

impl CursorSession {
    /// Wires the cursor up, or returns `None` on touch devices and headless documents.
    pub fn mount(dot: HtmlElement, ring: HtmlElement) -> Option<Self> {
        let window = web_sys::window()?;
        Self::mount_with(PointerClass::detect(&window), dot, ring)
    }

    pub fn mount_with(class: PointerClass, dot: HtmlElement, ring: HtmlElement) -> Option<Self> {
        let window = web_sys::window()?;
        if !class.wants_custom_cursor() {
            info!("Coarse pointer detected, custom cursor disabled");
            return None;
        }
        let document = window.document()?;

        let token = MountToken::new();
        let runtime = Rc::new(CursorRuntime {
            token: token.clone(),
            animator: RefCell::new(CursorAnimator::new()),
            sink: ElementSink { dot, ring },
            frame: RefCell::new(None),
            performance: window.performance(),
        });

        let on_move = {
            let runtime = Rc::clone(&runtime);
            let tracker = PointerTracker::new(token.clone());
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let now = runtime.now();
                let tracked = {
                    let mut animator = runtime.animator.borrow_mut();
                    tracker.track(PointerSample::from_event(&event), &mut animator, now)
                };
                if tracked {
                    runtime.request_frame();
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        if let Err(err) =
            window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        {
            warn!("Could not listen for pointer movement: {:?}", err);
            return None;
        }

        let host = DomHoverHost::new(
            document,
            hover_callback(&runtime, HoverEdge::Enter),
            hover_callback(&runtime, HoverEdge::Leave),
        );
        let hover = Rc::new(HoverObserver::new(host, token.clone()));
        hover.scan();
        let rescan = {
            let hover = Rc::clone(&hover);
            Interval::new(config::HOVER_RESCAN_MS, move || {
                hover.scan();
            })
        };

        info!("Custom cursor mounted");
        Some(Self {
            token,
            window,
            on_move,
            hover,
            rescan: Some(rescan),
            runtime,
        })
    }

    /// Releases the listener, the interval, hover bindings and any pending frame.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.token.revoke() {
            return;
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        if let Some(interval) = self.rescan.take() {
            drop(interval);
        }
        self.hover.release();
        self.runtime.frame.borrow_mut().take();
        info!("Custom cursor unmounted");
    }
}

impl Drop for CursorSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
