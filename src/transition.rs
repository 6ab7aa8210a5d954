//! Per-frame scalar animation primitive.
//!
//! Camera pan and zoom are each driven by one of these: a linear ramp that
//! walks its current value toward a target by a fixed step every frame. The
//! step is recomputed whenever the target (or the duration) changes, so a
//! transition can be redirected mid-flight without a jump in position.

/// A scalar that approaches its target at a constant per-frame step.
#[derive(Debug, Clone)]
pub struct TransitionValue {
    current: f32,
    target: f32,
    transition_frames: f32,
    step: f32,
}

impl TransitionValue {
    pub fn new(initial: f32, transition_frames: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            transition_frames,
            step: 0.0,
        }
    }

    /// Set a new destination. The step is derived from the current (possibly
    /// mid-transition) value, so convergence takes `transition_frames` frames
    /// from wherever the value is now.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.step = step_size(self.current, target, self.transition_frames);
    }

    /// Change the duration, recomputing the step against the existing target.
    pub fn set_transition_frames(&mut self, frames: f32) {
        self.transition_frames = frames;
        self.step = step_size(self.current, self.target, frames);
    }

    /// Advance one frame. Once within a single step of the target the value
    /// snaps onto it exactly, so the ramp terminates without overshoot.
    pub fn update(&mut self) {
        let delta = self.target - self.current;
        if delta.abs() < self.step {
            self.current = self.target;
        } else if delta > 0.0 {
            self.current += self.step;
        } else {
            self.current -= self.step;
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

// A non-positive duration means "snap on the next update".
fn step_size(current: f32, target: f32, frames: f32) -> f32 {
    if frames <= 0.0 {
        f32::INFINITY
    } else {
        (target - current).abs() / frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_in_exact_frame_count() {
        let mut t = TransitionValue::new(0.0, 5.0);
        t.set_target(10.0);
        for _ in 0..5 {
            t.update();
        }
        assert_eq!(t.value(), 10.0);
    }

    #[test]
    fn never_overshoots() {
        let mut t = TransitionValue::new(0.0, 5.0);
        t.set_target(10.0);
        let mut last = t.value();
        for _ in 0..20 {
            t.update();
            assert!(t.value() >= last);
            assert!(t.value() <= 10.0);
            last = t.value();
        }
        assert_eq!(t.value(), 10.0);
    }

    #[test]
    fn descends_toward_lower_target() {
        let mut t = TransitionValue::new(10.0, 5.0);
        t.set_target(0.0);
        for _ in 0..5 {
            t.update();
        }
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn retarget_mid_transition_keeps_position() {
        let mut t = TransitionValue::new(0.0, 5.0);
        t.set_target(10.0);
        t.update();
        t.update();
        assert_eq!(t.value(), 4.0);

        // Redirecting onto the current value must hold it there.
        t.set_target(4.0);
        t.update();
        assert_eq!(t.value(), 4.0);
    }

    #[test]
    fn retarget_restarts_full_duration() {
        let mut t = TransitionValue::new(0.0, 5.0);
        t.set_target(10.0);
        t.update();
        t.update();

        // 4.0 -> -6.0 is a fresh 5-frame ramp from the in-flight value.
        t.set_target(-6.0);
        for _ in 0..5 {
            t.update();
        }
        assert_eq!(t.value(), -6.0);
    }

    #[test]
    fn same_target_is_stationary() {
        let mut t = TransitionValue::new(3.0, 5.0);
        t.set_target(3.0);
        t.update();
        t.update();
        assert_eq!(t.value(), 3.0);
    }

    #[test]
    fn zero_duration_snaps_on_next_update() {
        let mut t = TransitionValue::new(0.0, 0.0);
        t.set_target(7.0);
        t.update();
        assert_eq!(t.value(), 7.0);
    }

    #[test]
    fn set_transition_frames_rescales_remaining_ramp() {
        let mut t = TransitionValue::new(0.0, 5.0);
        t.set_target(10.0);
        t.set_transition_frames(2.0);
        t.update();
        t.update();
        assert_eq!(t.value(), 10.0);
    }
}
