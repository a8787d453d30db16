use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::actions::render_view::ViewRenderer;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, info};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Renders the most recently submitted request on a dedicated thread.
///
/// Each submission bumps a generation counter. An in-flight render whose
/// generation is no longer current is cancelled and emits nothing, so only
/// the newest view ever reaches the presenter.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || Self::worker_loop(&worker_shared));

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.last_completed_generation.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState) {
        let mut renderer = ViewRenderer::new();

        while let Some((job_generation, request)) = Self::next_job(shared) {
            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = renderer.render(&request.snapshot, &request.settings, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Err(err) if err.is_cancelled() => {
                    debug!(generation = job_generation, "render cancelled");
                    continue;
                }
                Err(err) => RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message: err.to_string(),
                }),
                Ok(view) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    snapshot: request.snapshot,
                    pixel_buffer: view.pixel_buffer,
                    render_duration,
                }),
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            info!(
                generation = job_generation,
                elapsed_ms = render_duration.as_secs_f64() * 1000.0,
                max_iterations = request.snapshot.max_iterations,
                escape_passes = renderer.escape_passes(),
                "render finished"
            );

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn next_job(shared: &SharedState) -> Option<(u64, Arc<RenderRequest>)> {
        let mut guard = shared
            .latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(job) = guard.take() {
                return Some(job);
            }

            guard = shared
                .wake
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
