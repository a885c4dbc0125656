use super::easing::{Ease, Tween};

pub const DOT_MOVE_MS: f64 = 100.0;
pub const RING_MOVE_MS: f64 = 400.0;
pub const DOT_HOVER_MS: f64 = 200.0;
pub const RING_HOVER_MS: f64 = 300.0;

const MOVE_EASE: Ease = Ease::Power3Out;
const HOVER_EASE: Ease = Ease::Power1Out;

const RING_HOVER_SCALE: f64 = 2.0;
const RING_HOVER_FILL_ALPHA: f64 = 0.1;
const RING_BORDER_WIDTH: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FollowerId {
    /// Small dot sitting right under the pointer.
    Dot,
    /// Larger ring trailing behind the dot.
    Ring,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub fill_alpha: f64,
    pub border_width: f64,
}

impl FollowerState {
    fn resting(id: FollowerId) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            fill_alpha: 0.0,
            border_width: match id {
                FollowerId::Dot => 0.0,
                FollowerId::Ring => RING_BORDER_WIDTH,
            },
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
            self.x, self.y, self.scale
        )
    }

    pub fn background(&self) -> String {
        if self.fill_alpha <= 0.0 {
            "transparent".to_string()
        } else {
            format!("rgba(255, 255, 255, {:.3})", self.fill_alpha)
        }
    }
}

/// Receives the sampled state of a follower once per animation frame.
pub trait FollowerSink {
    fn apply(&self, id: FollowerId, state: &FollowerState);
}

#[derive(Clone, Debug)]
struct Follower {
    id: FollowerId,
    x: Tween,
    y: Tween,
    scale: Tween,
    opacity: Tween,
    fill_alpha: Tween,
    border_width: Tween,
    state: FollowerState,
}

impl Follower {
    fn new(id: FollowerId) -> Self {
        let state = FollowerState::resting(id);
        let (move_ms, hover_ms) = match id {
            FollowerId::Dot => (DOT_MOVE_MS, DOT_HOVER_MS),
            FollowerId::Ring => (RING_MOVE_MS, RING_HOVER_MS),
        };
        Self {
            id,
            x: Tween::settled(state.x, move_ms, MOVE_EASE),
            y: Tween::settled(state.y, move_ms, MOVE_EASE),
            scale: Tween::settled(state.scale, hover_ms, HOVER_EASE),
            opacity: Tween::settled(state.opacity, hover_ms, HOVER_EASE),
            fill_alpha: Tween::settled(state.fill_alpha, hover_ms, HOVER_EASE),
            border_width: Tween::settled(state.border_width, hover_ms, HOVER_EASE),
            state,
        }
    }

    fn tweens(&self) -> [&Tween; 6] {
        [
            &self.x,
            &self.y,
            &self.scale,
            &self.opacity,
            &self.fill_alpha,
            &self.border_width,
        ]
    }

    fn sample(&mut self, now: f64) -> bool {
        self.state.x = self.x.value_at(now);
        self.state.y = self.y.value_at(now);
        self.state.scale = self.scale.value_at(now);
        self.state.opacity = self.opacity.value_at(now);
        self.state.fill_alpha = self.fill_alpha.value_at(now);
        self.state.border_width = self.border_width.value_at(now);
        self.tweens().iter().any(|tween| tween.is_running(now))
    }
}

/// Owns both followers and every tween acting on them.
///
/// All operations take the current frame clock in milliseconds; the caller decides
/// where time comes from (`performance.now()` in the browser, plain numbers in tests).
#[derive(Clone, Debug)]
pub struct CursorAnimator {
    dot: Follower,
    ring: Follower,
}

impl CursorAnimator {
    pub fn new() -> Self {
        Self {
            dot: Follower::new(FollowerId::Dot),
            ring: Follower::new(FollowerId::Ring),
        }
    }

    fn follower_mut(&mut self, id: FollowerId) -> &mut Follower {
        match id {
            FollowerId::Dot => &mut self.dot,
            FollowerId::Ring => &mut self.ring,
        }
    }

    pub fn state(&self, id: FollowerId) -> FollowerState {
        match id {
            FollowerId::Dot => self.dot.state,
            FollowerId::Ring => self.ring.state,
        }
    }

    pub fn move_to(&mut self, id: FollowerId, x: f64, y: f64, now: f64) {
        let follower = self.follower_mut(id);
        follower.x.retarget(x, now);
        follower.y.retarget(y, now);
    }

    pub fn enter_hover(&mut self, now: f64) {
        self.ring.scale.retarget(RING_HOVER_SCALE, now);
        self.ring.fill_alpha.retarget(RING_HOVER_FILL_ALPHA, now);
        self.ring.border_width.retarget(0.0, now);
        self.dot.scale.retarget(0.0, now);
        self.dot.opacity.retarget(0.0, now);
    }

    pub fn exit_hover(&mut self, now: f64) {
        self.ring.scale.retarget(1.0, now);
        self.ring.fill_alpha.retarget(0.0, now);
        self.ring.border_width.retarget(RING_BORDER_WIDTH, now);
        self.dot.scale.retarget(1.0, now);
        self.dot.opacity.retarget(1.0, now);
    }

    /// Samples every tween at `now`. Returns whether another frame is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        let dot_running = self.dot.sample(now);
        let ring_running = self.ring.sample(now);
        dot_running || ring_running
    }

    pub fn render(&self, sink: &impl FollowerSink) {
        for follower in [&self.dot, &self.ring] {
            sink.apply(follower.id, &follower.state);
        }
    }
}

impl Default for CursorAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const EPSILON: f64 = 1e-9;

    #[derive(Default)]
    struct RecordingSink {
        applied: RefCell<Vec<(FollowerId, FollowerState)>>,
    }

    impl FollowerSink for RecordingSink {
        fn apply(&self, id: FollowerId, state: &FollowerState) {
            self.applied.borrow_mut().push((id, *state));
        }
    }

    #[test]
    fn dot_settles_before_ring() {
        let mut animator = CursorAnimator::new();
        animator.move_to(FollowerId::Dot, 97.0, 47.0, 0.0);
        animator.move_to(FollowerId::Ring, 83.0, 33.0, 0.0);

        assert!(animator.tick(DOT_MOVE_MS));
        let dot = animator.state(FollowerId::Dot);
        let ring = animator.state(FollowerId::Ring);
        assert_eq!((dot.x, dot.y), (97.0, 47.0));
        assert!(ring.x < 83.0);

        assert!(!animator.tick(RING_MOVE_MS));
        let ring = animator.state(FollowerId::Ring);
        assert_eq!((ring.x, ring.y), (83.0, 33.0));
    }

    #[test]
    fn hover_round_trip_restores_resting_state() {
        let mut animator = CursorAnimator::new();
        animator.enter_hover(0.0);
        animator.tick(RING_HOVER_MS);

        let ring = animator.state(FollowerId::Ring);
        assert_eq!(ring.scale, RING_HOVER_SCALE);
        assert_eq!(ring.border_width, 0.0);
        assert!((ring.fill_alpha - RING_HOVER_FILL_ALPHA).abs() < EPSILON);
        let dot = animator.state(FollowerId::Dot);
        assert_eq!((dot.scale, dot.opacity), (0.0, 0.0));

        animator.exit_hover(1_000.0);
        assert!(!animator.tick(1_000.0 + RING_HOVER_MS));
        assert_eq!(animator.state(FollowerId::Ring), FollowerState::resting(FollowerId::Ring));
        assert_eq!(animator.state(FollowerId::Dot), FollowerState::resting(FollowerId::Dot));
    }

    #[test]
    fn dot_hover_is_faster_than_ring() {
        let mut animator = CursorAnimator::new();
        animator.enter_hover(0.0);
        animator.tick(DOT_HOVER_MS);
        assert_eq!(animator.state(FollowerId::Dot).opacity, 0.0);
        assert!(animator.state(FollowerId::Ring).scale < RING_HOVER_SCALE);
    }

    #[test]
    fn exit_during_enter_reverses_without_snapping() {
        let mut animator = CursorAnimator::new();
        animator.enter_hover(0.0);
        animator.tick(150.0);
        let midway = animator.state(FollowerId::Ring).scale;
        assert!(midway > 1.0 && midway < RING_HOVER_SCALE);

        animator.exit_hover(150.0);
        animator.tick(150.0);
        assert_eq!(animator.state(FollowerId::Ring).scale, midway);

        animator.tick(170.0);
        let reversing = animator.state(FollowerId::Ring).scale;
        assert!(reversing < midway && reversing > 1.0);
    }

    #[test]
    fn repeated_enter_is_idempotent() {
        let mut once = CursorAnimator::new();
        once.enter_hover(0.0);
        once.tick(100.0);

        let mut twice = CursorAnimator::new();
        twice.enter_hover(0.0);
        twice.enter_hover(50.0);
        twice.tick(100.0);

        assert_eq!(once.state(FollowerId::Ring), twice.state(FollowerId::Ring));
        assert_eq!(once.state(FollowerId::Dot), twice.state(FollowerId::Dot));
    }

    #[test]
    fn render_pushes_both_followers() {
        let mut animator = CursorAnimator::new();
        animator.move_to(FollowerId::Dot, 10.0, 20.0, 0.0);
        animator.tick(DOT_MOVE_MS);

        let sink = RecordingSink::default();
        animator.render(&sink);

        let applied = sink.applied.borrow();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].0, FollowerId::Dot);
        assert_eq!(applied[0].1.transform(), "translate3d(10.00px, 20.00px, 0) scale(1.000)");
        assert_eq!(applied[1].0, FollowerId::Ring);
    }

    #[test]
    fn background_is_transparent_at_rest() {
        let mut animator = CursorAnimator::new();
        assert_eq!(animator.state(FollowerId::Ring).background(), "transparent");

        animator.enter_hover(0.0);
        animator.tick(RING_HOVER_MS);
        assert_eq!(
            animator.state(FollowerId::Ring).background(),
            "rgba(255, 255, 255, 0.100)"
        );
    }
}
