use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMode {
    Idle,
    Rendering,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    /// Run one fractal render pass.
    Render,
    /// Run one automaton step over the published buffer.
    Tick,
    /// Nothing to do before `until`, or until woken if `None`.
    Wait { until: Option<Instant> },
}

/// Decides whether the single writer renders, ticks or sleeps.
///
/// Any parameter or viewport change stops the automaton and queues a fresh
/// render. Turning the automaton on only starts ticking once a rendered
/// buffer exists and no render is queued or running; with no buffer at all
/// it queues one.
#[derive(Debug)]
pub struct RenderScheduler {
    mode: SchedulerMode,
    tick_interval: Duration,
    automaton_active: bool,
    render_pending: bool,
    has_frame: bool,
    next_tick: Option<Instant>,
}

impl RenderScheduler {
    /// Starts with a render queued so the first frame is drawn immediately.
    #[must_use]
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            mode: SchedulerMode::Idle,
            tick_interval,
            automaton_active: false,
            render_pending: true,
            has_frame: false,
            next_tick: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> SchedulerMode {
        self.mode
    }

    #[must_use]
    pub fn automaton_active(&self) -> bool {
        self.automaton_active
    }

    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn parameters_changed(&mut self) {
        self.automaton_active = false;
        self.next_tick = None;
        self.render_pending = true;

        if self.mode == SchedulerMode::Animating {
            self.set_mode(SchedulerMode::Idle);
        }
    }

    pub fn set_automaton_active(&mut self, active: bool, now: Instant) {
        self.automaton_active = active;

        if active {
            if !self.has_frame && self.mode == SchedulerMode::Idle {
                self.render_pending = true;
            }
            self.start_animating_if_ready(now);
        } else if self.mode == SchedulerMode::Animating {
            self.next_tick = None;
            self.set_mode(SchedulerMode::Idle);
        }
    }

    pub fn next_action(&mut self, now: Instant) -> SchedulerAction {
        if self.render_pending && self.mode != SchedulerMode::Rendering {
            self.render_pending = false;
            self.next_tick = None;
            self.set_mode(SchedulerMode::Rendering);
            return SchedulerAction::Render;
        }

        match (self.mode, self.next_tick) {
            (SchedulerMode::Animating, Some(deadline)) if now >= deadline => SchedulerAction::Tick,
            (SchedulerMode::Animating, deadline) => SchedulerAction::Wait { until: deadline },
            _ => SchedulerAction::Wait { until: None },
        }
    }

    /// Called once a render pass ends, whether it was published or not.
    pub fn render_finished(&mut self, published: bool, now: Instant) {
        if self.mode != SchedulerMode::Rendering {
            return;
        }

        self.has_frame |= published;
        self.set_mode(SchedulerMode::Idle);
        self.start_animating_if_ready(now);
    }

    /// Fixed-delay ticking: the next tick is due one interval after this one
    /// started, or immediately if the step overran the interval.
    pub fn tick_finished(&mut self, started: Instant, now: Instant) {
        if self.mode != SchedulerMode::Animating {
            return;
        }

        self.next_tick = Some((started + self.tick_interval).max(now));
    }

    fn start_animating_if_ready(&mut self, now: Instant) {
        if self.automaton_active
            && self.has_frame
            && !self.render_pending
            && self.mode == SchedulerMode::Idle
        {
            self.next_tick = Some(now + self.tick_interval);
            self.set_mode(SchedulerMode::Animating);
        }
    }

    fn set_mode(&mut self, mode: SchedulerMode) {
        if self.mode != mode {
            info!(from = ?self.mode, to = ?mode, "scheduler mode changed");
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    fn rendered(now: Instant) -> RenderScheduler {
        let mut scheduler = RenderScheduler::new(PERIOD);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);
        scheduler.render_finished(true, now);
        scheduler
    }

    fn animating(now: Instant) -> RenderScheduler {
        let mut scheduler = rendered(now);
        scheduler.set_automaton_active(true, now);
        scheduler
    }

    #[test]
    fn initial_render_is_queued() {
        let now = Instant::now();
        let mut scheduler = RenderScheduler::new(PERIOD);

        assert_eq!(scheduler.mode(), SchedulerMode::Idle);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);
        assert_eq!(scheduler.mode(), SchedulerMode::Rendering);
    }

    #[test]
    fn render_then_idle() {
        let now = Instant::now();
        let mut scheduler = rendered(now);

        assert_eq!(scheduler.mode(), SchedulerMode::Idle);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Wait { until: None });
    }

    #[test]
    fn parameter_change_while_idle_renders_once() {
        let now = Instant::now();
        let mut scheduler = rendered(now);

        scheduler.parameters_changed();

        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);
        scheduler.render_finished(true, now);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Wait { until: None });
    }

    #[test]
    fn toggle_on_starts_periodic_tick() {
        let now = Instant::now();
        let mut scheduler = animating(now);

        assert_eq!(scheduler.mode(), SchedulerMode::Animating);
        assert_eq!(
            scheduler.next_action(now),
            SchedulerAction::Wait {
                until: Some(now + PERIOD)
            }
        );
        assert_eq!(scheduler.next_action(now + PERIOD), SchedulerAction::Tick);
    }

    #[test]
    fn tick_reschedules_one_period_after_start() {
        let now = Instant::now();
        let mut scheduler = animating(now);
        let started = now + PERIOD;

        scheduler.tick_finished(started, started + Duration::from_millis(30));

        assert_eq!(
            scheduler.next_action(started + Duration::from_millis(30)),
            SchedulerAction::Wait {
                until: Some(started + PERIOD)
            }
        );
    }

    #[test]
    fn overrunning_tick_is_due_immediately() {
        let now = Instant::now();
        let mut scheduler = animating(now);
        let started = now + PERIOD;
        let finished = started + Duration::from_millis(250);

        scheduler.tick_finished(started, finished);

        assert_eq!(scheduler.next_action(finished), SchedulerAction::Tick);
    }

    #[test]
    fn toggle_off_stops_ticking() {
        let now = Instant::now();
        let mut scheduler = animating(now);

        scheduler.set_automaton_active(false, now);

        assert_eq!(scheduler.mode(), SchedulerMode::Idle);
        assert_eq!(
            scheduler.next_action(now + PERIOD * 5),
            SchedulerAction::Wait { until: None }
        );
    }

    #[test]
    fn parameter_change_while_animating_stops_automaton_and_renders() {
        let now = Instant::now();
        let mut scheduler = animating(now);

        scheduler.parameters_changed();

        assert!(!scheduler.automaton_active());
        assert_eq!(scheduler.next_action(now + PERIOD), SchedulerAction::Render);
        scheduler.render_finished(true, now + PERIOD);
        assert_eq!(scheduler.mode(), SchedulerMode::Idle);
        assert_eq!(
            scheduler.next_action(now + PERIOD * 3),
            SchedulerAction::Wait { until: None }
        );
    }

    #[test]
    fn toggle_on_during_render_waits_for_publication() {
        let now = Instant::now();
        let mut scheduler = RenderScheduler::new(PERIOD);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);

        scheduler.set_automaton_active(true, now);
        assert_eq!(scheduler.mode(), SchedulerMode::Rendering);

        scheduler.render_finished(true, now);
        assert_eq!(scheduler.mode(), SchedulerMode::Animating);
    }

    #[test]
    fn toggle_on_without_any_frame_renders_first() {
        let now = Instant::now();
        let mut scheduler = RenderScheduler::new(PERIOD);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);
        scheduler.render_finished(false, now);

        scheduler.set_automaton_active(true, now);

        assert_eq!(scheduler.mode(), SchedulerMode::Idle);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);
        scheduler.render_finished(true, now);
        assert_eq!(scheduler.mode(), SchedulerMode::Animating);
    }

    #[test]
    fn change_during_render_queues_another_render() {
        let now = Instant::now();
        let mut scheduler = RenderScheduler::new(PERIOD);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);

        scheduler.parameters_changed();
        assert_eq!(scheduler.next_action(now), SchedulerAction::Wait { until: None });

        scheduler.render_finished(false, now);
        assert_eq!(scheduler.next_action(now), SchedulerAction::Render);
    }

    #[test]
    fn late_tick_completion_after_stop_is_ignored() {
        let now = Instant::now();
        let mut scheduler = animating(now);

        scheduler.set_automaton_active(false, now);
        scheduler.tick_finished(now, now);

        assert_eq!(
            scheduler.next_action(now + PERIOD),
            SchedulerAction::Wait { until: None }
        );
    }
}
