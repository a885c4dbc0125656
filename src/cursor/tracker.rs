use log::debug;
use web_sys::Window;

use super::animator::{CursorAnimator, FollowerId};
use crate::lifecycle::MountToken;

/// Half the dot's size, so the dot centres on the pointer.
pub const DOT_OFFSET: f64 = 3.0;
/// Half the ring's size.
pub const RING_OFFSET: f64 = 17.0;

const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn from_event(event: &web_sys::MouseEvent) -> Self {
        Self {
            x: f64::from(event.client_x()),
            y: f64::from(event.client_y()),
        }
    }

    pub fn targets(self) -> [(FollowerId, f64, f64); 2] {
        [
            (FollowerId::Dot, self.x - DOT_OFFSET, self.y - DOT_OFFSET),
            (FollowerId::Ring, self.x - RING_OFFSET, self.y - RING_OFFSET),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerClass {
    Fine,
    /// Touch and other inputs without hover precision.
    Coarse,
}

impl PointerClass {
    pub fn detect(window: &Window) -> Self {
        let coarse = window
            .match_media(COARSE_POINTER_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        if coarse {
            PointerClass::Coarse
        } else {
            PointerClass::Fine
        }
    }

    pub fn wants_custom_cursor(self) -> bool {
        matches!(self, PointerClass::Fine)
    }
}

/// Turns raw pointer samples into follower move commands for one mount.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    token: MountToken,
}

impl PointerTracker {
    pub fn new(token: MountToken) -> Self {
        Self { token }
    }

    /// Returns false once the owning mount is gone; the animator is left untouched.
    pub fn track(&self, sample: PointerSample, animator: &mut CursorAnimator, now: f64) -> bool {
        if !self.token.is_live() {
            debug!("Dropping pointer sample after unmount");
            return false;
        }
        for (id, x, y) in sample.targets() {
            animator.move_to(id, x, y, now);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::animator::RING_MOVE_MS;

    #[test]
    fn followers_settle_on_offset_positions() {
        let token = MountToken::new();
        let tracker = PointerTracker::new(token);
        let mut animator = CursorAnimator::new();

        let sample = PointerSample { x: 640.0, y: 360.0 };
        assert!(tracker.track(sample, &mut animator, 0.0));
        animator.tick(RING_MOVE_MS);

        let dot = animator.state(FollowerId::Dot);
        let ring = animator.state(FollowerId::Ring);
        assert_eq!((dot.x, dot.y), (637.0, 357.0));
        assert_eq!((ring.x, ring.y), (623.0, 343.0));
    }

    #[test]
    fn later_samples_win() {
        let tracker = PointerTracker::new(MountToken::new());
        let mut animator = CursorAnimator::new();

        tracker.track(PointerSample { x: 100.0, y: 100.0 }, &mut animator, 0.0);
        animator.tick(50.0);
        tracker.track(PointerSample { x: 20.0, y: 40.0 }, &mut animator, 50.0);
        animator.tick(50.0 + RING_MOVE_MS);

        let ring = animator.state(FollowerId::Ring);
        assert_eq!((ring.x, ring.y), (3.0, 23.0));
    }

    #[test]
    fn samples_after_unmount_are_ignored() {
        let token = MountToken::new();
        let tracker = PointerTracker::new(token.clone());
        let mut animator = CursorAnimator::new();
        token.revoke();

        assert!(!tracker.track(PointerSample { x: 500.0, y: 500.0 }, &mut animator, 0.0));
        assert!(!animator.tick(RING_MOVE_MS));
        assert_eq!(animator.state(FollowerId::Dot).x, 0.0);
    }

    #[test]
    fn only_fine_pointers_get_a_cursor() {
        assert!(PointerClass::Fine.wants_custom_cursor());
        assert!(!PointerClass::Coarse.wants_custom_cursor());
    }
}
