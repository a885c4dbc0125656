use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag shared between a mounted component and the callbacks it hands out.
///
/// Clones observe the same flag. Anything that may complete after unmount (timer
/// ticks, DOM events already queued, a pending request) captures a clone and checks
/// [`MountToken::is_live`] before writing.
#[derive(Clone, Debug)]
pub struct MountToken {
    live: Rc<Cell<bool>>,
}

impl MountToken {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Returns true only for the call that actually flipped the flag.
    pub fn revoke(&self) -> bool {
        self.live.replace(false)
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}
