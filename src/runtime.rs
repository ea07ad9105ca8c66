// SPDX-License-Identifier: MPL-2.0
//! Reconciles per-toast lifecycles with the stack and drives them in time.
//!
//! The runtime owns one [`LifecycleController`] per mounted toast, the timer
//! queue and the animator they share, and the measured heights. Time only
//! moves in [`ToastRuntime::tick`]: every timer expiry and transition end
//! that falls before the new instant is replayed in chronological order, so
//! an exit starts exactly when its timer was due even if ticks are sparse.

use crate::config::ToastConfig;
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::layout::{
    accumulate, base_offset, toast_alignment, HeightMap, HorizontalSlot, ScreenMetrics,
};
use crate::lifecycle::{Frame, LifecycleController, Phase, TimedAnimator, TimerQueue};
use crate::store::ToastStore;
use crate::toast::{ToastEntry, ToastId};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// A toast with its computed position and current animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedToast {
    pub id: ToastId,
    /// Position in the stack's list order.
    pub index: usize,
    /// Distance from the anchor edge.
    pub offset: f32,
    pub height: f32,
    pub horizontal: HorizontalSlot,
    pub frame: Frame,
    /// `None` until the toast has been mounted by a tick.
    pub phase: Option<Phase>,
}

pub struct ToastRuntime {
    controllers: HashMap<ToastId, LifecycleController>,
    timers: TimerQueue,
    animator: TimedAnimator,
    heights: HeightMap,
    haptics: Box<dyn HapticFeedback>,
}

impl fmt::Debug for ToastRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRuntime")
            .field("controllers", &self.controllers.len())
            .field("timers", &self.timers.len())
            .field("animations", &self.animator.running_count())
            .field("heights", &self.heights)
            .finish_non_exhaustive()
    }
}

impl ToastRuntime {
    /// Creates a runtime whose clock starts at `start`.
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self::with_haptics(start, NoHaptics)
    }

    #[must_use]
    pub fn with_haptics(start: Instant, haptics: impl HapticFeedback + 'static) -> Self {
        Self {
            controllers: HashMap::new(),
            timers: TimerQueue::new(start),
            animator: TimedAnimator::new(start),
            heights: HeightMap::new(),
            haptics: Box::new(haptics),
        }
    }

    /// Current runtime clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.timers.now()
    }

    /// Tears down controllers whose toast left the stack and mounts the
    /// ones that joined it. Returns `true` if anything changed.
    pub fn sync(&mut self, store: &ToastStore) -> bool {
        let pruned = self.prune(store);
        let mounted = self.mount_new(store);
        pruned || mounted
    }

    /// Advances the clock to `now`, replaying due timers and finished
    /// transitions in order and removing toasts whose exit completed.
    ///
    /// Returns `true` if the visible state changed.
    pub fn tick(&mut self, store: &mut ToastStore, now: Instant) -> bool {
        let mut changed = self.prune(store);

        while let Some(at) = self.next_event().filter(|at| *at <= now) {
            self.timers.advance_to(at);
            self.animator.advance_to(at);

            for completion in self.animator.pop_finished() {
                let Some(controller) = self.controllers.get_mut(&completion.owner) else {
                    continue;
                };
                changed = true;
                if let Some(id) = controller.on_transition_finished(&completion) {
                    self.controllers.remove(&id);
                    store.remove_toast(Some(&id));
                }
            }

            for (handle, owner) in self.timers.pop_due() {
                if let Some(controller) = self.controllers.get_mut(&owner) {
                    changed |=
                        controller.on_timer_fired(handle, &mut self.timers, &mut self.animator);
                }
            }
        }

        self.timers.advance_to(now);
        self.animator.advance_to(now);

        changed |= self.prune(store);
        changed |= self.mount_new(store);
        changed || self.is_animating()
    }

    /// Handles a press on the toast with `id`. Unknown ids are ignored.
    pub fn press(&mut self, store: &ToastStore, id: &ToastId) -> bool {
        match store.get(id) {
            Some(entry) => self.press_entry(entry, store.config()),
            None => false,
        }
    }

    /// Handles a press on `entry`, a snapshot taken from the stack.
    ///
    /// Callers sharing the stack behind a `RefCell` pass a clone so that the
    /// press callback may add or remove toasts.
    pub fn press_entry(&mut self, entry: &ToastEntry, config: &ToastConfig) -> bool {
        let haptic = entry.haptic().or_else(|| {
            config
                .accessibility
                .haptic_feedback
                .pattern_for(entry.kind())
        });

        if !self.controllers.contains_key(entry.id()) {
            self.mount(entry, config);
        }
        let Some(controller) = self.controllers.get_mut(entry.id()) else {
            return false;
        };
        controller.press(
            entry,
            haptic,
            self.haptics.as_mut(),
            &mut self.timers,
            &mut self.animator,
        )
    }

    /// Records a renderer measurement. Returns `true` if the layout changed.
    pub fn on_measured(&mut self, id: &ToastId, height: f32) -> bool {
        if !self.controllers.contains_key(id) {
            tracing::trace!(%id, "ignoring measurement for unmounted toast");
            return false;
        }
        self.heights.record(id, height)
    }

    /// Computes positions and frames for every toast in list order.
    #[must_use]
    pub fn layout(&self, store: &ToastStore, metrics: &ScreenMetrics) -> Vec<PlacedToast> {
        let config = store.config();
        let base = base_offset(
            config.vertical(),
            &metrics.insets,
            config.offset,
            metrics.keyboard_height,
        );
        let horizontal =
            toast_alignment(config.horizontal(), config.margin_horizontal, metrics.width);
        let ids = store.entries().iter().map(ToastEntry::id);

        accumulate(ids, base, config.spacing, &self.heights)
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                let controller = self.controllers.get(&slot.id);
                PlacedToast {
                    frame: controller
                        .map(|c| c.frame(&self.animator))
                        .unwrap_or(Frame::hidden(0.0)),
                    phase: controller.map(LifecycleController::phase),
                    id: slot.id,
                    index,
                    offset: slot.offset,
                    height: slot.height,
                    horizontal,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    /// Whether any timer or transition is still pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_animating() || !self.timers.is_empty()
    }

    /// Instant of the next timer expiry or transition end.
    #[must_use]
    pub fn next_event(&self) -> Option<Instant> {
        match (self.timers.next_due(), self.animator.next_completion()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub fn phase(&self, id: &ToastId) -> Option<Phase> {
        self.controllers.get(id).map(LifecycleController::phase)
    }

    #[must_use]
    pub fn heights(&self) -> &HeightMap {
        &self.heights
    }

    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.controllers.len()
    }

    /// Cancels every timer and transition. No toast is removed afterwards
    /// by anything this runtime had scheduled.
    pub fn teardown(&mut self) {
        for controller in self.controllers.values_mut() {
            controller.teardown(&mut self.timers, &mut self.animator);
        }
        tracing::debug!(count = self.controllers.len(), "toast runtime torn down");
        self.controllers.clear();
        self.heights = HeightMap::new();
        self.haptics.cancel();
    }

    fn mount(&mut self, entry: &ToastEntry, config: &ToastConfig) {
        let controller =
            LifecycleController::mount(entry, config, &mut self.timers, &mut self.animator);
        self.controllers.insert(entry.id().clone(), controller);
    }

    fn mount_new(&mut self, store: &ToastStore) -> bool {
        let mut mounted = false;
        for entry in store.entries() {
            if !self.controllers.contains_key(entry.id()) {
                self.mount(entry, store.config());
                mounted = true;
            }
        }
        mounted
    }

    fn prune(&mut self, store: &ToastStore) -> bool {
        let before = self.controllers.len();
        let timers = &mut self.timers;
        let animator = &mut self.animator;
        self.controllers.retain(|id, controller| {
            let live = store.contains(id);
            if !live {
                tracing::trace!(%id, "toast removed externally");
                controller.teardown(&mut *timers, &mut *animator);
            }
            live
        });
        self.heights
            .retain_ids(store.entries().iter().map(ToastEntry::id));
        self.controllers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessibilityPatch, ConfigPatch, Placement};
    use crate::haptics::{HapticPattern, HapticSetting, RecordingHaptics};
    use crate::layout::ESTIMATED_HEIGHT;
    use crate::toast::ToastData;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn setup() -> (Instant, ToastStore, ToastRuntime) {
        let start = Instant::now();
        (start, ToastStore::new(None), ToastRuntime::new(start))
    }

    #[test]
    fn auto_dismiss_removes_after_timer_and_exit() {
        let (start, mut store, mut runtime) = setup();
        let id = store.add_toast(ToastData::info("hi").with_duration(1000));
        runtime.tick(&mut store, start);

        runtime.tick(&mut store, start + ms(1000));
        assert_eq!(runtime.phase(&id), Some(Phase::Dismissing));
        assert!(store.contains(&id));

        runtime.tick(&mut store, start + ms(1179));
        assert!(store.contains(&id));

        runtime.tick(&mut store, start + ms(1180));
        assert!(!store.contains(&id));
        assert_eq!(runtime.mounted_count(), 0);
    }

    #[test]
    fn sparse_ticks_replay_events_in_order() {
        let (start, mut store, mut runtime) = setup();
        let id = store.add_toast(ToastData::info("hi").with_duration(1000));
        runtime.tick(&mut store, start);

        // One late tick covers entrance end, timer and exit end.
        runtime.tick(&mut store, start + ms(5000));
        assert!(!store.contains(&id));
    }

    #[test]
    fn persistent_toast_stays() {
        let (start, mut store, mut runtime) = setup();
        let id = store.add_toast(ToastData::info("stay").persistent());
        runtime.tick(&mut store, start);
        runtime.tick(&mut store, start + Duration::from_secs(3600));

        assert!(store.contains(&id));
        assert_eq!(runtime.phase(&id), Some(Phase::Visible));
        assert!(!runtime.is_active());
    }

    #[test]
    fn press_dismisses_persistent_toast() {
        let (start, mut store, mut runtime) = setup();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = store.add_toast(ToastData::info("tap").persistent().on_press(move || {
            counter.set(counter.get() + 1);
        }));
        runtime.tick(&mut store, start);

        assert!(runtime.press(&store, &id));
        assert!(!runtime.press(&store, &id));
        assert_eq!(hits.get(), 1);

        runtime.tick(&mut store, start + ms(180));
        assert!(!store.contains(&id));
    }

    #[test]
    fn press_before_first_tick_mounts_and_dismisses() {
        let (start, mut store, mut runtime) = setup();
        let id = store.add_toast(ToastData::info("quick"));
        assert!(runtime.press(&store, &id));
        runtime.tick(&mut store, start + ms(200));
        assert!(!store.contains(&id));
    }

    #[test]
    fn external_removal_tears_down_without_side_effects() {
        let (start, mut store, mut runtime) = setup();
        let a = store.add_toast(ToastData::info("A"));
        let b = store.add_toast(ToastData::info("B"));
        runtime.tick(&mut store, start);
        runtime.on_measured(&a, 50.0);

        store.remove_toast(Some(&a));
        runtime.tick(&mut store, start + ms(10));
        assert_eq!(runtime.mounted_count(), 1);
        assert_eq!(runtime.heights().get(&a), None);
        assert!(store.contains(&b));
    }

    #[test]
    fn teardown_before_exit_completion_keeps_entry() {
        let (start, mut store, mut runtime) = setup();
        let id = store.add_toast(ToastData::info("hi").with_duration(100));
        runtime.tick(&mut store, start);
        runtime.tick(&mut store, start + ms(150));
        assert_eq!(runtime.phase(&id), Some(Phase::Dismissing));

        runtime.teardown();
        assert!(!runtime.is_active());
        assert!(store.contains(&id));
    }

    #[test]
    fn layout_stacks_in_list_order() {
        let (start, mut store, mut runtime) = setup();
        let a = store.add_toast(ToastData::info("A"));
        store.add_toast(ToastData::info("B"));
        runtime.tick(&mut store, start);
        runtime.on_measured(&a, 40.0);

        let placed = runtime.layout(&store, &ScreenMetrics::new(375.0, 812.0));
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].offset, 20.0);
        assert_eq!(placed[1].offset, 72.0);
        assert_eq!(placed[1].height, ESTIMATED_HEIGHT);
        assert_eq!(placed[1].index, 1);
    }

    #[test]
    fn layout_frames_follow_entrance() {
        let (start, mut store, mut runtime) = setup();
        store.add_toast(ToastData::info("A"));
        let before = runtime.layout(&store, &ScreenMetrics::new(375.0, 812.0));
        assert_eq!(before[0].phase, None);
        assert_eq!(before[0].frame.opacity, 0.0);

        runtime.tick(&mut store, start);
        runtime.tick(&mut store, start + ms(220));
        let after = runtime.layout(&store, &ScreenMetrics::new(375.0, 812.0));
        assert_eq!(after[0].phase, Some(Phase::Visible));
        assert_eq!(after[0].frame, Frame::REST);
    }

    #[test]
    fn measurements_for_unknown_ids_are_ignored() {
        let (_, _, mut runtime) = setup();
        assert!(!runtime.on_measured(&ToastId::from_raw("ghost"), 10.0));
        assert!(runtime.heights().is_empty());
    }

    #[test]
    fn press_plays_haptic_from_accessibility_setting() {
        let start = Instant::now();
        let mut store = ToastStore::new(Some(&ConfigPatch::default().accessibility(
            AccessibilityPatch {
                haptic_feedback: Some(HapticSetting::Auto),
                ..AccessibilityPatch::default()
            },
        )));
        let haptics = RecordingHaptics::new();
        let mut runtime = ToastRuntime::with_haptics(start, haptics.clone());
        let error = store.add_toast(ToastData::error("boom"));
        let custom = store.add_toast(ToastData::info("tap").with_haptic(HapticPattern::Medium));
        runtime.tick(&mut store, start);

        runtime.press(&store, &error);
        runtime.press(&store, &custom);
        assert_eq!(
            haptics.triggered(),
            vec![HapticPattern::Error, HapticPattern::Medium]
        );
    }

    #[test]
    fn haptics_are_silent_by_default() {
        let (start, mut store, _) = setup();
        let haptics = RecordingHaptics::new();
        let mut runtime = ToastRuntime::with_haptics(start, haptics.clone());
        let id = store.add_toast(ToastData::success("saved"));
        runtime.tick(&mut store, start);

        runtime.press(&store, &id);
        assert!(haptics.triggered().is_empty());
    }

    #[test]
    fn top_placement_layout_uses_top_inset() {
        let start = Instant::now();
        let mut store = ToastStore::new(Some(&ConfigPatch::default().placement(Placement::Top)));
        let mut runtime = ToastRuntime::new(start);
        store.add_toast(ToastData::info("A"));
        runtime.tick(&mut store, start);

        let metrics = ScreenMetrics {
            width: 375.0,
            height: 812.0,
            insets: crate::layout::SafeAreaInsets {
                top: 44.0,
                bottom: 34.0,
                ..Default::default()
            },
            keyboard_height: 300.0,
        };
        assert_eq!(runtime.layout(&store, &metrics)[0].offset, 64.0);
    }
}
