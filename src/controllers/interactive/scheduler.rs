use crate::controllers::interactive::data::render_request::RenderRequest;
use std::sync::Arc;

/// Paces submissions to the render worker.
///
/// While continuous zoom is running every tick produces a new request; those
/// are held back until the in-flight generation completes so each presented
/// frame shows exactly one animation step. Outside that mode requests are
/// submitted immediately and the worker cancels whatever is stale.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    pending_request: Option<Arc<RenderRequest>>,
    in_flight_generation: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Submitted { generation: u64 },
    Coalesced,
    NothingToDo,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        desired: Arc<RenderRequest>,
        continuous_zoom_active: bool,
        last_completed_gen: u64,
        submit: impl FnOnce(Arc<RenderRequest>) -> u64,
    ) -> SchedulerAction {
        self.mark_completed(last_completed_gen);
        self.pending_request = Some(desired);

        if self.in_flight_generation.is_none() || !continuous_zoom_active {
            return self.submit_pending(submit);
        }

        SchedulerAction::Coalesced
    }

    /// Submits a held-back request once the in-flight one has finished.
    pub fn poll(
        &mut self,
        last_completed_gen: u64,
        submit: impl FnOnce(Arc<RenderRequest>) -> u64,
    ) -> SchedulerAction {
        self.mark_completed(last_completed_gen);

        if self.in_flight_generation.is_some() {
            return SchedulerAction::NothingToDo;
        }

        self.submit_pending(submit)
    }

    pub fn reset(&mut self) {
        self.pending_request = None;
        self.in_flight_generation = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    #[must_use]
    pub fn in_flight_generation(&self) -> Option<u64> {
        self.in_flight_generation
    }

    /// True when nothing is rendering, so the next animation step may start.
    #[must_use]
    pub fn is_idle(&self, last_completed_gen: u64) -> bool {
        self.in_flight_generation
            .is_none_or(|generation| last_completed_gen >= generation)
    }

    fn mark_completed(&mut self, last_completed_gen: u64) {
        if self
            .in_flight_generation
            .is_some_and(|generation| last_completed_gen >= generation)
        {
            self.in_flight_generation = None;
        }
    }

    fn submit_pending(
        &mut self,
        submit: impl FnOnce(Arc<RenderRequest>) -> u64,
    ) -> SchedulerAction {
        let Some(request) = self.pending_request.take() else {
            return SchedulerAction::NothingToDo;
        };

        let generation = submit(request);
        self.in_flight_generation = Some(generation);

        SchedulerAction::Submitted { generation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_view::RenderSettings;
    use crate::core::explorer::config::ExplorerConfig;
    use crate::core::explorer::controller::ViewportController;

    fn request(max_iterations: u32) -> Arc<RenderRequest> {
        let mut snapshot = ViewportController::new(ExplorerConfig::default())
            .unwrap()
            .snapshot();
        snapshot.max_iterations = max_iterations;

        Arc::new(RenderRequest {
            snapshot,
            settings: RenderSettings::default(),
        })
    }

    #[test]
    fn submits_immediately_when_nothing_is_in_flight() {
        let mut scheduler = RenderScheduler::new();

        let action = scheduler.update(request(10), true, 0, |_| 1);

        assert_eq!(action, SchedulerAction::Submitted { generation: 1 });
        assert_eq!(scheduler.in_flight_generation(), Some(1));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn submits_immediately_outside_continuous_zoom() {
        let mut scheduler = RenderScheduler::new();
        scheduler.update(request(10), true, 0, |_| 1);

        let action = scheduler.update(request(11), false, 0, |_| 2);

        assert_eq!(action, SchedulerAction::Submitted { generation: 2 });
        assert_eq!(scheduler.in_flight_generation(), Some(2));
    }

    #[test]
    fn coalesces_during_continuous_zoom_and_keeps_newest() {
        let mut scheduler = RenderScheduler::new();
        scheduler.update(request(10), true, 0, |_| 1);

        let newest = request(12);
        let second = scheduler.update(request(11), true, 0, |_| panic!("must not submit"));
        let third = scheduler.update(Arc::clone(&newest), true, 0, |_| panic!("must not submit"));

        assert_eq!(second, SchedulerAction::Coalesced);
        assert_eq!(third, SchedulerAction::Coalesced);
        assert!(Arc::ptr_eq(
            scheduler.pending_request.as_ref().expect("pending exists"),
            &newest
        ));
    }

    #[test]
    fn poll_submits_pending_after_completion() {
        let mut scheduler = RenderScheduler::new();
        scheduler.update(request(10), true, 0, |_| 1);
        scheduler.update(request(11), true, 0, |_| panic!("must not submit"));

        assert_eq!(
            scheduler.poll(0, |_| panic!("must not submit")),
            SchedulerAction::NothingToDo
        );

        let mut submitted = None;
        let action = scheduler.poll(1, |request| {
            submitted = Some(request.snapshot.max_iterations);
            2
        });

        assert_eq!(action, SchedulerAction::Submitted { generation: 2 });
        assert_eq!(submitted, Some(11));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn poll_without_pending_does_nothing() {
        let mut scheduler = RenderScheduler::new();

        assert_eq!(
            scheduler.poll(0, |_| panic!("must not submit")),
            SchedulerAction::NothingToDo
        );
    }

    #[test]
    fn completion_mismatch_keeps_in_flight_generation() {
        let mut scheduler = RenderScheduler::new();
        scheduler.update(request(10), true, 0, |_| 5);

        let action = scheduler.update(request(11), true, 4, |_| panic!("must not submit"));

        assert_eq!(action, SchedulerAction::Coalesced);
        assert_eq!(scheduler.in_flight_generation(), Some(5));
        assert!(!scheduler.is_idle(4));
        assert!(scheduler.is_idle(5));
    }

    #[test]
    fn reset_clears_pending_and_in_flight_state() {
        let mut scheduler = RenderScheduler::new();
        scheduler.update(request(10), true, 0, |_| 1);
        scheduler.update(request(11), true, 0, |_| panic!("must not submit"));

        scheduler.reset();

        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.in_flight_generation(), None);
        assert!(scheduler.is_idle(0));
    }
}
