// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle: entrance, auto-dismiss, press-to-dismiss and exit.
//!
//! A [`LifecycleController`] owns one toast's timer and transitions. It never
//! touches the stack itself: when the exit transition finishes it hands the
//! id back so the caller can remove the entry, and it does so at most once.
//!
//! ```text
//! Entering --(entrance done)--> Visible
//!     |                            |
//!     +----(timer fires / press)---+--> Dismissing --(exit done)--> Removed
//! ```

pub mod animation;
pub mod timer;

pub use animation::{
    AnimationDriver, AnimationHandle, Completion, Easing, Frame, TimedAnimator, Transition,
};
pub use timer::{Scheduler, TimerHandle, TimerQueue};

use crate::config::{AnimationSettings, Placement, ToastConfig};
use crate::haptics::{HapticFeedback, HapticPattern};
use crate::toast::{ToastEntry, ToastId};

/// Visibility phase of a mounted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Dismissing,
    /// Terminal. Reached after the exit finished or on teardown.
    Removed,
}

/// State of the auto-dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTimer {
    Scheduled(TimerHandle),
    Cancelled,
    Fired,
}

/// Drives one toast from mount to removal.
#[derive(Debug)]
pub struct LifecycleController {
    id: ToastId,
    phase: Phase,
    /// `None` for persistent toasts.
    timer: Option<DismissTimer>,
    transition: Option<AnimationHandle>,
    /// Frame shown when no transition is running.
    rest: Frame,
    /// Set once an exit has been requested; never cleared.
    dismissing: bool,
    hidden: Frame,
    animation: AnimationSettings,
}

impl LifecycleController {
    /// Mounts a toast: starts the entrance transition and, unless the toast
    /// is persistent, schedules its auto-dismiss timer.
    pub fn mount(
        entry: &ToastEntry,
        config: &ToastConfig,
        scheduler: &mut impl Scheduler,
        animator: &mut impl AnimationDriver,
    ) -> Self {
        let id = entry.id().clone();
        let animation = config.animation;
        let hidden = Frame::hidden(entrance_offset(&animation, config.vertical()));

        let transition = animator.animate(
            &id,
            Transition {
                from: hidden,
                to: Frame::REST,
                duration: animation.appear(),
                easing: animation.easing,
            },
        );

        let timer = entry
            .effective_duration(config.time_to_dismiss)
            .map(|after| DismissTimer::Scheduled(scheduler.schedule(&id, after)));

        tracing::trace!(%id, persistent = timer.is_none(), "toast mounted");

        Self {
            id,
            phase: Phase::Entering,
            timer,
            transition: Some(transition),
            rest: hidden,
            dismissing: false,
            hidden,
            animation,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn timer(&self) -> Option<DismissTimer> {
        self.timer
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.dismissing
    }

    /// Current visual frame.
    #[must_use]
    pub fn frame(&self, animator: &impl AnimationDriver) -> Frame {
        self.transition
            .and_then(|handle| animator.frame(handle))
            .unwrap_or(self.rest)
    }

    /// Starts the exit transition. Returns `false` if an exit was already
    /// requested or the toast has been torn down.
    pub fn begin_dismiss(
        &mut self,
        scheduler: &mut impl Scheduler,
        animator: &mut impl AnimationDriver,
    ) -> bool {
        if self.dismissing || self.phase == Phase::Removed {
            return false;
        }
        self.dismissing = true;

        if let Some(DismissTimer::Scheduled(handle)) = self.timer {
            scheduler.cancel(handle);
            self.timer = Some(DismissTimer::Cancelled);
        }

        // Exit starts from wherever the entrance got to.
        let from = self.frame(animator);
        if let Some(handle) = self.transition.take() {
            animator.stop(handle);
        }
        self.rest = from;

        self.transition = Some(animator.animate(
            &self.id,
            Transition {
                from,
                to: self.hidden,
                duration: self.animation.disappear(),
                easing: self.animation.easing,
            },
        ));
        self.phase = Phase::Dismissing;
        tracing::trace!(id = %self.id, "toast dismissing");
        true
    }

    /// Handles a fired auto-dismiss timer. Stale handles are ignored.
    pub fn on_timer_fired(
        &mut self,
        handle: TimerHandle,
        scheduler: &mut impl Scheduler,
        animator: &mut impl AnimationDriver,
    ) -> bool {
        if self.timer != Some(DismissTimer::Scheduled(handle)) {
            return false;
        }
        self.timer = Some(DismissTimer::Fired);
        self.begin_dismiss(scheduler, animator)
    }

    /// Handles a user press.
    ///
    /// Plays `haptic`, then invokes the entry's press callback, then starts
    /// the exit. A toast that is already leaving ignores presses.
    pub fn press(
        &mut self,
        entry: &ToastEntry,
        haptic: Option<HapticPattern>,
        haptics: &mut dyn HapticFeedback,
        scheduler: &mut impl Scheduler,
        animator: &mut impl AnimationDriver,
    ) -> bool {
        if self.dismissing || self.phase == Phase::Removed {
            return false;
        }
        if let Some(pattern) = haptic {
            haptics.trigger(pattern);
        }
        if let Some(callback) = entry.on_press() {
            callback.call();
        }
        self.begin_dismiss(scheduler, animator)
    }

    /// Handles a transition completion.
    ///
    /// Returns the toast id exactly once, when the exit transition finishes.
    /// Interrupted or stale completions never remove the toast.
    pub fn on_transition_finished(&mut self, completion: &Completion) -> Option<ToastId> {
        if self.transition != Some(completion.handle) {
            return None;
        }
        self.transition = None;
        if !completion.finished {
            return None;
        }

        match self.phase {
            Phase::Entering => {
                self.rest = Frame::REST;
                self.phase = Phase::Visible;
                None
            }
            Phase::Dismissing => {
                self.rest = self.hidden;
                self.phase = Phase::Removed;
                tracing::trace!(id = %self.id, "toast exit finished");
                Some(self.id.clone())
            }
            Phase::Visible | Phase::Removed => None,
        }
    }

    /// Releases the timer and any running transition without removing the
    /// toast. Used when the stack goes away or the entry was removed
    /// externally.
    pub fn teardown(
        &mut self,
        scheduler: &mut impl Scheduler,
        animator: &mut impl AnimationDriver,
    ) {
        if let Some(DismissTimer::Scheduled(handle)) = self.timer {
            scheduler.cancel(handle);
            self.timer = Some(DismissTimer::Cancelled);
        }
        if let Some(handle) = self.transition.take() {
            animator.stop(handle);
        }
        self.dismissing = true;
        self.phase = Phase::Removed;
    }
}

/// Signed entrance displacement: toasts at the top slide down from above,
/// toasts at the bottom slide up from below.
fn entrance_offset(animation: &AnimationSettings, placement: Placement) -> f32 {
    match placement {
        Placement::Top => -animation.initial_translation,
        Placement::Bottom => animation.initial_translation,
    }
}
