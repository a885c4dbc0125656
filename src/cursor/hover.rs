use std::cell::{Cell, RefCell};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Document, Element};

use crate::lifecycle::MountToken;

/// Everything the ring should swell over.
pub const INTERACTIVE_SELECTOR: &str =
    r#"button, a, .group, input, .cursor-grow, [role="button"]"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverEdge {
    Enter,
    Leave,
}

impl HoverEdge {
    pub const BOTH: [HoverEdge; 2] = [HoverEdge::Enter, HoverEdge::Leave];

    pub fn event_name(self) -> &'static str {
        match self {
            HoverEdge::Enter => "mouseenter",
            HoverEdge::Leave => "mouseleave",
        }
    }
}

/// The document as seen by the hover observer.
///
/// `attach` and `detach` always refer to the same shared callback per edge, so
/// detaching before attaching keeps exactly one binding per element and edge.
pub trait HoverHost {
    type Element;

    fn query(&self, selector: &str) -> Vec<Self::Element>;
    fn detach(&self, element: &Self::Element, edge: HoverEdge);
    fn attach(&self, element: &Self::Element, edge: HoverEdge);
}

pub struct HoverObserver<H: HoverHost> {
    host: H,
    token: MountToken,
    bound: RefCell<Vec<H::Element>>,
    released: Cell<bool>,
}

impl<H: HoverHost> HoverObserver<H> {
    pub fn new(host: H, token: MountToken) -> Self {
        Self {
            host,
            token,
            bound: RefCell::new(Vec::new()),
            released: Cell::new(false),
        }
    }

    /// Rebinds enter/leave on every interactive element currently in the document.
    pub fn scan(&self) -> usize {
        if self.released.get() || !self.token.is_live() {
            return 0;
        }
        let elements = self.host.query(INTERACTIVE_SELECTOR);
        for element in &elements {
            for edge in HoverEdge::BOTH {
                self.host.detach(element, edge);
                self.host.attach(element, edge);
            }
        }
        let count = elements.len();
        *self.bound.borrow_mut() = elements;
        debug!("Hover scan bound {} interactive elements", count);
        count
    }

    /// Unbinds from the last scanned set and from whatever matches right now.
    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        let last = std::mem::take(&mut *self.bound.borrow_mut());
        let current = self.host.query(INTERACTIVE_SELECTOR);
        for element in last.iter().chain(current.iter()) {
            for edge in HoverEdge::BOTH {
                self.host.detach(element, edge);
            }
        }
    }
}

/// Binds the two shared hover callbacks onto live DOM elements.
///
/// The callbacks are handed to the JS GC rather than owned here: an element that
/// left the document before the last scan keeps its binding, and must still find
/// a valid function if it is ever re-inserted and hovered.
pub struct DomHoverHost {
    document: Document,
    on_enter: Function,
    on_leave: Function,
}

impl DomHoverHost {
    pub fn new(
        document: Document,
        on_enter: Closure<dyn FnMut()>,
        on_leave: Closure<dyn FnMut()>,
    ) -> Self {
        Self {
            document,
            on_enter: on_enter.into_js_value().unchecked_into(),
            on_leave: on_leave.into_js_value().unchecked_into(),
        }
    }

    fn callback(&self, edge: HoverEdge) -> &Function {
        match edge {
            HoverEdge::Enter => &self.on_enter,
            HoverEdge::Leave => &self.on_leave,
        }
    }
}

impl HoverHost for DomHoverHost {
    type Element = Element;

    fn query(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(nodes) => (0..nodes.length())
                .filter_map(|index| nodes.item(index))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(err) => {
                warn!("Interactive element query failed: {:?}", err);
                Vec::new()
            }
        }
    }

    fn detach(&self, element: &Element, edge: HoverEdge) {
        let _ = element.remove_event_listener_with_callback(edge.event_name(), self.callback(edge));
    }

    fn attach(&self, element: &Element, edge: HoverEdge) {
        if let Err(err) =
            element.add_event_listener_with_callback(edge.event_name(), self.callback(edge))
        {
            warn!("Failed to bind {} listener: {:?}", edge.event_name(), err);
        }
    }
}
