//! Time-based tweens for the cursor followers.
//!
//! A [`Tween`] interpolates one scalar from where it currently is toward a target
//! over a fixed duration. Retargeting mid-flight restarts the clock from the value
//! sampled at that instant, so the motion bends toward the new target instead of
//! jumping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Quadratic ease-out, the default for one-off hover transitions.
    Power1Out,
    /// Quartic ease-out (GSAP's `power3.out`), used for pointer following.
    Power3Out,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    started_at: f64,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    /// A tween already at rest on `value`.
    pub fn settled(value: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            started_at: f64::NEG_INFINITY,
            duration_ms,
            ease,
        }
    }

    pub fn value_at(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = (now - self.started_at) / self.duration_ms;
        if progress >= 1.0 {
            return self.to;
        }
        if progress <= 0.0 {
            return self.from;
        }
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.from != self.to && now - self.started_at < self.duration_ms
    }

    /// Points the tween at `to`, starting from wherever it is at `now`.
    ///
    /// Asking for the target it is already heading to leaves the running clock alone.
    pub fn retarget(&mut self, to: f64, now: f64) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for ease in [Ease::Power1Out, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_out_curves_lead_linear() {
        assert!(Ease::Power1Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power1Out.apply(0.5));
    }

    #[test]
    fn settled_tween_is_idle() {
        let tween = Tween::settled(4.0, 100.0, Ease::Power3Out);
        assert_eq!(tween.value_at(0.0), 4.0);
        assert!(!tween.is_running(0.0));
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut tween = Tween::settled(0.0, 100.0, Ease::Power3Out);
        tween.retarget(50.0, 1_000.0);

        assert!(tween.is_running(1_050.0));
        let mid = tween.value_at(1_050.0);
        assert!(mid > 0.0 && mid < 50.0);

        assert_eq!(tween.value_at(1_100.0), 50.0);
        assert!(!tween.is_running(1_100.0));
    }

    #[test]
    fn retarget_mid_flight_continues_from_current_value() {
        let mut tween = Tween::settled(0.0, 100.0, Ease::Power1Out);
        tween.retarget(100.0, 0.0);
        let before = tween.value_at(40.0);

        tween.retarget(-100.0, 40.0);
        assert_eq!(tween.value_at(40.0), before);
        assert!(tween.value_at(41.0) < before);
        assert_eq!(tween.value_at(140.0), -100.0);
    }

    #[test]
    fn repeating_the_same_target_keeps_the_clock() {
        let mut tween = Tween::settled(0.0, 100.0, Ease::Power1Out);
        tween.retarget(10.0, 0.0);
        tween.retarget(10.0, 90.0);
        assert_eq!(tween.value_at(100.0), 10.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tween = Tween::settled(0.0, 0.0, Ease::Power1Out);
        tween.retarget(3.0, 5.0);
        assert_eq!(tween.value_at(5.0), 3.0);
    }
}
