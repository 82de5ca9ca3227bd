use crate::controllers::interactive::data::frame_data::{FrameData, FrameSource};
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::pointer_drag::PointerDrag;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::controllers::interactive::scheduler::{RenderScheduler, SchedulerAction, SchedulerMode};
use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::render_fractal::render_fractal::render_fractal_cancelable;
use crate::core::actions::step_automaton::step_automaton::{
    StepAutomatonError, step_automaton_cancelable,
};
use crate::core::data::cell_layout::CellLayout;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    MandelbrotColourMapKinds, UnknownColourMapError,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::params::RenderParameters;
use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace, warn};

struct ControlState {
    viewport: Viewport,
    params: RenderParameters,
    scheduler: RenderScheduler,
    drag: PointerDrag,
    frame: Option<Arc<PixelBuffer>>,
    automaton_step: u64,
    shutdown: bool,
}

struct SharedState {
    generation: Arc<AtomicU64>,
    last_completed_generation: AtomicU64,
    state: Mutex<ControlState>,
    wake: Condvar,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

enum Job {
    Render {
        generation: u64,
        request: RenderRequest,
    },
    Tick {
        generation: u64,
        frame: Arc<PixelBuffer>,
        layout: CellLayout,
        step: u64,
        started: Instant,
    },
}

fn lock_state(shared: &SharedState) -> MutexGuard<'_, ControlState> {
    shared.state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the viewport, the render parameters and the published frame.
///
/// Input handlers mutate state synchronously on the caller's thread. A single
/// worker thread is the only writer of the published buffer: it renders after
/// every change and, while the automaton is on, steps it once per tick. Every
/// change bumps a generation counter that cancels whatever pass is in flight,
/// so a superseded pass is never published.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        config: MandelbrotConfig,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Result<Self, MandelbrotError> {
        let params = config.build_render_parameters()?;

        let shared = Arc::new(SharedState {
            generation: Arc::new(AtomicU64::new(1)),
            last_completed_generation: AtomicU64::new(0),
            state: Mutex::new(ControlState {
                viewport: config.build_viewport(),
                params,
                scheduler: RenderScheduler::new(config.tick_interval),
                drag: PointerDrag::default(),
                frame: None,
                automaton_step: 0,
                shutdown: false,
            }),
            wake: Condvar::new(),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    pub fn pan(&self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        self.change(|state| state.viewport.pan(dx, dy))
    }

    pub fn zoom_at(&self, screen_x: f64, screen_y: f64, factor: f64) -> Result<(), ViewportError> {
        self.change(|state| state.viewport.zoom_at(screen_x, screen_y, factor))
    }

    pub fn wheel(&self, delta_y: f64, screen_x: f64, screen_y: f64) -> Result<(), ViewportError> {
        self.change(|state| state.viewport.wheel(delta_y, screen_x, screen_y))
    }

    pub fn pointer_down(&self, x: f64, y: f64) {
        lock_state(&self.shared).drag.press(x, y);
    }

    /// Pans by the distance moved since the last pointer event while dragging.
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<(), ViewportError> {
        self.change_if(|state| {
            let Some((dx, dy)) = state.drag.delta(x, y) else {
                return Ok(false);
            };

            state.viewport.pan(dx, dy)?;
            state.drag.move_to(x, y);

            Ok(true)
        })
    }

    pub fn pointer_up(&self) {
        lock_state(&self.shared).drag.release();
    }

    pub fn pointer_leave(&self) {
        self.pointer_up();
    }

    pub fn set_max_iterations(&self, max_iterations: u32) -> Result<(), MandelbrotError> {
        self.change(|state| state.params.set_max_iterations(max_iterations))
    }

    pub fn set_palette(&self, kind: MandelbrotColourMapKinds) {
        let _ = self.change::<Infallible>(|state| {
            state.params.set_colour_map_kind(kind);
            Ok(())
        });
    }

    pub fn set_palette_by_name(&self, name: &str) -> Result<(), UnknownColourMapError> {
        let kind = name.parse()?;
        self.set_palette(kind);

        Ok(())
    }

    pub fn reset_view(&self) {
        let _ = self.change::<Infallible>(|state| {
            state.viewport.reset_view();
            Ok(())
        });
    }

    pub fn set_automaton_active(&self, active: bool) {
        lock_state(&self.shared)
            .scheduler
            .set_automaton_active(active, Instant::now());
        self.shared.wake.notify_one();
    }

    /// Flips the automaton toggle and returns the new setting.
    pub fn toggle_automaton(&self) -> bool {
        let active = {
            let mut state = lock_state(&self.shared);
            let active = !state.scheduler.automaton_active();
            state.scheduler.set_automaton_active(active, Instant::now());
            active
        };
        self.shared.wake.notify_one();

        active
    }

    #[must_use]
    pub fn automaton_active(&self) -> bool {
        lock_state(&self.shared).scheduler.automaton_active()
    }

    #[must_use]
    pub fn mode(&self) -> SchedulerMode {
        lock_state(&self.shared).scheduler.mode()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        lock_state(&self.shared).viewport
    }

    #[must_use]
    pub fn render_parameters(&self) -> RenderParameters {
        lock_state(&self.shared).params
    }

    /// The most recently published buffer, if any pass has completed.
    #[must_use]
    pub fn current_frame(&self) -> Option<Arc<PixelBuffer>> {
        lock_state(&self.shared).frame.clone()
    }

    /// Plane coordinate under a canvas position, for cursor readouts.
    #[must_use]
    pub fn screen_to_plane(&self, screen_x: f64, screen_y: f64) -> Complex {
        lock_state(&self.shared)
            .viewport
            .screen_to_plane(screen_x, screen_y)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        lock_state(&self.shared).shutdown = true;
        self.shared.generation.fetch_add(1, Ordering::AcqRel);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn change<E>(
        &self,
        apply: impl FnOnce(&mut ControlState) -> Result<(), E>,
    ) -> Result<(), E> {
        self.change_if(|state| apply(state).map(|()| true))
    }

    /// Applies a mutation and, if it reports a change, cancels the pass in
    /// flight and queues a fresh render. A rejected mutation changes nothing.
    fn change_if<E>(
        &self,
        apply: impl FnOnce(&mut ControlState) -> Result<bool, E>,
    ) -> Result<(), E> {
        let mut state = lock_state(&self.shared);

        if apply(&mut *state)? {
            let generation = self.shared.generation.fetch_add(1, Ordering::AcqRel) + 1;
            state.scheduler.parameters_changed();
            drop(state);

            debug!(generation, "view or parameters changed");
            self.shared.wake.notify_one();
        }

        Ok(())
    }

    fn worker_loop(shared: &SharedState) {
        while let Some(job) = Self::next_job(shared) {
            match job {
                Job::Render {
                    generation,
                    request,
                } => Self::run_render(shared, generation, &request),
                Job::Tick {
                    generation,
                    frame,
                    layout,
                    step,
                    started,
                } => Self::run_tick(shared, generation, &frame, layout, step, started),
            }
        }
    }

    fn next_job(shared: &SharedState) -> Option<Job> {
        let mut state = lock_state(shared);

        loop {
            if state.shutdown {
                return None;
            }

            let now = Instant::now();
            let generation = shared.generation.load(Ordering::Acquire);

            match state.scheduler.next_action(now) {
                SchedulerAction::Render => {
                    return Some(Job::Render {
                        generation,
                        request: RenderRequest {
                            viewport: state.viewport,
                            params: state.params,
                        },
                    });
                }
                SchedulerAction::Tick => {
                    if let Some(frame) = state.frame.clone() {
                        return Some(Job::Tick {
                            generation,
                            frame,
                            layout: state.viewport.layout(),
                            step: state.automaton_step + 1,
                            started: now,
                        });
                    }
                    state.scheduler.set_automaton_active(false, now);
                }
                SchedulerAction::Wait {
                    until: Some(deadline),
                } => {
                    let timeout = deadline.saturating_duration_since(now);
                    state = shared
                        .wake
                        .wait_timeout(state, timeout)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0;
                }
                SchedulerAction::Wait { until: None } => {
                    state = shared
                        .wake
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
    }

    fn run_render(shared: &SharedState, generation: u64, request: &RenderRequest) {
        let cancel = GenerationToken::new(Arc::clone(&shared.generation), generation);

        let start = Instant::now();
        let result = render_fractal_cancelable(&request.viewport, &request.params, &cancel);
        let render_duration = start.elapsed();

        let event = {
            let mut state = lock_state(shared);
            let current = shared.generation.load(Ordering::Acquire) == generation;

            let event = match result {
                Ok(pixel_buffer) if current => {
                    let pixel_buffer = Arc::new(pixel_buffer);
                    state.frame = Some(Arc::clone(&pixel_buffer));
                    state.automaton_step = 0;

                    Some(RenderEvent::Frame(FrameData {
                        generation,
                        pixel_buffer,
                        source: FrameSource::Fractal,
                        render_duration,
                    }))
                }
                Err(err) if current && !err.is_cancelled() => {
                    warn!(generation, error = %err, "fractal render failed");

                    Some(RenderEvent::Error(RenderError {
                        generation,
                        message: err.to_string(),
                    }))
                }
                _ => None,
            };

            let published = matches!(event, Some(RenderEvent::Frame(_)));
            state.scheduler.render_finished(published, Instant::now());

            event
        };

        Self::publish(shared, generation, event);
    }

    fn run_tick(
        shared: &SharedState,
        generation: u64,
        frame: &PixelBuffer,
        layout: CellLayout,
        step: u64,
        started: Instant,
    ) {
        let cancel = GenerationToken::new(Arc::clone(&shared.generation), generation);
        let result = step_automaton_cancelable(frame, layout, &cancel);
        let render_duration = started.elapsed();

        let event = {
            let mut state = lock_state(shared);
            let current = shared.generation.load(Ordering::Acquire) == generation
                && state.scheduler.mode() == SchedulerMode::Animating;

            match result {
                Ok(next) if current => {
                    let pixel_buffer = Arc::new(next);
                    state.frame = Some(Arc::clone(&pixel_buffer));
                    state.automaton_step = step;
                    state.scheduler.tick_finished(started, Instant::now());
                    trace!(generation, step, "automaton tick");

                    Some(RenderEvent::Frame(FrameData {
                        generation,
                        pixel_buffer,
                        source: FrameSource::Automaton { step },
                        render_duration,
                    }))
                }
                Err(err) if current && !matches!(err, StepAutomatonError::Cancelled(_)) => {
                    warn!(generation, step, error = %err, "automaton step failed");
                    state.scheduler.set_automaton_active(false, Instant::now());

                    Some(RenderEvent::Error(RenderError {
                        generation,
                        message: err.to_string(),
                    }))
                }
                _ => None,
            }
        };

        Self::publish(shared, generation, event);
    }

    fn publish(shared: &SharedState, generation: u64, event: Option<RenderEvent>) {
        let Some(event) = event else {
            trace!(generation, "discarded superseded pass");
            return;
        };

        if let Some(frame) = event.frame() {
            debug!(
                generation = event.generation(),
                source = ?frame.source,
                duration_ms = frame.render_duration.as_millis() as u64,
                "frame published"
            );
        }

        shared
            .last_completed_generation
            .store(generation, Ordering::Release);
        shared.presenter_port.present(event);
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
