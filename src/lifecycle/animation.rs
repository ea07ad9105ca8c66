// SPDX-License-Identifier: MPL-2.0
//! Entrance/exit transitions and a clock-driven driver for them.
//!
//! The lifecycle controller only depends on [`AnimationDriver`]; renderers
//! read interpolated [`Frame`]s back from whichever driver is in use.

use crate::toast::ToastId;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curves for toast transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Cubic ease-in (accelerating).
    EaseIn,
    /// Cubic ease-out (decelerating).
    #[default]
    EaseOut,
    /// Cubic S-curve.
    EaseInOut,
    Bounce,
}

impl Easing {
    /// Applies the curve to a progress value in `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::Bounce => {
                let n1 = 7.5625;
                let d1 = 2.75;
                let mut t = t;
                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    t -= 1.5 / d1;
                    n1 * t * t + 0.75
                } else if t < 2.5 / d1 {
                    t -= 2.25 / d1;
                    n1 * t * t + 0.9375
                } else {
                    t -= 2.625 / d1;
                    n1 * t * t + 0.984_375
                }
            }
        }
    }
}

/// Animated visual state of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    /// Vertical offset from the resting position, in pixels.
    pub translate_y: f32,
}

impl Frame {
    /// Fully visible at the resting position.
    pub const REST: Frame = Frame {
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// Invisible, displaced by `translate_y`.
    #[must_use]
    pub fn hidden(translate_y: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y,
        }
    }

    #[must_use]
    pub fn lerp(self, to: Frame, t: f32) -> Frame {
        Frame {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * t,
        }
    }
}

/// A single `from -> to` animation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Frame,
    pub to: Frame,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    /// Samples the transition `elapsed` after its start.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Frame {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, self.easing.apply(t))
    }
}

/// Handle to a running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// Completion signal for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub handle: AnimationHandle,
    pub owner: ToastId,
    /// `false` when the transition was interrupted before reaching its end.
    pub finished: bool,
}

/// Capability to run transitions.
///
/// Completion is reported asynchronously by the driver as a [`Completion`];
/// a stopped transition must never be reported as finished.
pub trait AnimationDriver {
    fn animate(&mut self, owner: &ToastId, transition: Transition) -> AnimationHandle;

    fn stop(&mut self, handle: AnimationHandle);

    /// Current frame of a running transition.
    fn frame(&self, handle: AnimationHandle) -> Option<Frame>;
}

#[derive(Debug, Clone)]
struct Running {
    handle: AnimationHandle,
    owner: ToastId,
    transition: Transition,
    started: Instant,
}

impl Running {
    fn ends_at(&self) -> Instant {
        self.started + self.transition.duration
    }
}

/// Animation driver advanced by an external clock.
#[derive(Debug, Clone)]
pub struct TimedAnimator {
    now: Instant,
    next_handle: u64,
    running: Vec<Running>,
}

impl TimedAnimator {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_handle: 0,
            running: Vec::new(),
        }
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward. Earlier instants are ignored.
    pub fn advance_to(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Instant at which the earliest running transition ends.
    #[must_use]
    pub fn next_completion(&self) -> Option<Instant> {
        self.running.iter().map(Running::ends_at).min()
    }

    /// Removes and reports every transition that has ended by the current
    /// clock, earliest first.
    pub fn pop_finished(&mut self) -> Vec<Completion> {
        let now = self.now;
        let mut done: Vec<Running> = Vec::new();
        self.running.retain(|running| {
            if running.ends_at() <= now {
                done.push(running.clone());
                false
            } else {
                true
            }
        });
        done.sort_by_key(Running::ends_at);
        done.into_iter()
            .map(|running| Completion {
                handle: running.handle,
                owner: running.owner,
                finished: true,
            })
            .collect()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    #[must_use]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}

impl AnimationDriver for TimedAnimator {
    fn animate(&mut self, owner: &ToastId, transition: Transition) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.running.push(Running {
            handle,
            owner: owner.clone(),
            transition,
            started: self.now,
        });
        handle
    }

    fn stop(&mut self, handle: AnimationHandle) {
        self.running.retain(|running| running.handle != handle);
    }

    fn frame(&self, handle: AnimationHandle) -> Option<Frame> {
        self.running
            .iter()
            .find(|running| running.handle == handle)
            .map(|running| {
                running
                    .transition
                    .sample(self.now.saturating_duration_since(running.started))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn fade_in(duration_ms: u64) -> Transition {
        Transition {
            from: Frame::hidden(24.0),
            to: Frame::REST,
            duration: Duration::from_millis(duration_ms),
            easing: Easing::Linear,
        }
    }

    #[test]
    fn easings_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Bounce,
        ] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        assert_abs_diff_eq!(Easing::Linear.apply(2.0), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(Easing::Linear.apply(-1.0), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn zero_duration_transition_jumps_to_target() {
        let transition = fade_in(0);
        assert_eq!(transition.sample(Duration::ZERO), Frame::REST);
    }

    #[test]
    fn frame_is_interpolated_while_running() {
        let start = Instant::now();
        let mut animator = TimedAnimator::new(start);
        let owner = ToastId::from_raw("a");
        let handle = animator.animate(&owner, fade_in(200));

        animator.advance_to(start + Duration::from_millis(100));
        let frame = animator.frame(handle).expect("running");
        assert_abs_diff_eq!(frame.opacity, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(frame.translate_y, 12.0, epsilon = 1e-2);
    }

    #[test]
    fn completions_are_reported_once_in_end_order() {
        let start = Instant::now();
        let mut animator = TimedAnimator::new(start);
        let slow = animator.animate(&ToastId::from_raw("slow"), fade_in(300));
        let fast = animator.animate(&ToastId::from_raw("fast"), fade_in(100));
        assert_eq!(
            animator.next_completion(),
            Some(start + Duration::from_millis(100))
        );

        animator.advance_to(start + Duration::from_millis(400));
        let done = animator.pop_finished();
        let handles: Vec<AnimationHandle> = done.iter().map(|c| c.handle).collect();
        assert_eq!(handles, vec![fast, slow]);
        assert!(done.iter().all(|c| c.finished));

        assert!(animator.pop_finished().is_empty());
        assert!(animator.is_idle());
    }

    #[test]
    fn stopped_transition_never_completes() {
        let start = Instant::now();
        let mut animator = TimedAnimator::new(start);
        let handle = animator.animate(&ToastId::from_raw("a"), fade_in(100));
        animator.stop(handle);

        animator.advance_to(start + Duration::from_secs(1));
        assert!(animator.pop_finished().is_empty());
        assert!(animator.frame(handle).is_none());
    }

    #[test]
    fn clock_never_moves_backwards() {
        let start = Instant::now();
        let mut animator = TimedAnimator::new(start + Duration::from_millis(50));
        animator.advance_to(start);
        assert_eq!(animator.now(), start + Duration::from_millis(50));
    }
}
