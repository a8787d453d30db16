use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::explorer::budget::IterationBudget;
use crate::core::explorer::command::{CommandReport, ExplorerCommand, PanDirection, ZoomRefusal};
use crate::core::explorer::config::{ExplorerConfig, ExplorerConfigError};
use crate::core::explorer::snapshot::ViewSnapshot;
use crate::core::util::coordinate_mapper::CoordinateMapper;
use tracing::{info, warn};

/// Pixel sizes below this multiple of `f64::EPSILON` (relative to the centre
/// magnitude) no longer resolve distinct points.
const PRECISION_FLOOR_ULPS: f64 = 8.0;

#[must_use]
pub fn precision_floor(center: Complex) -> f64 {
    center.max_abs_component().max(1.0) * f64::EPSILON * PRECISION_FLOOR_ULPS
}

/// Owns the viewport, the iteration budget and the continuous-zoom mode, and
/// applies commands to them.
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ExplorerConfig,
    pixel_rect: PixelRect,
    initial_viewport: Viewport,
    viewport: Viewport,
    budget: IterationBudget,
    continuous_zoom: bool,
}

impl ViewportController {
    pub fn new(config: ExplorerConfig) -> Result<Self, ExplorerConfigError> {
        config.validate()?;

        let pixel_rect = config.pixel_rect()?;
        let initial_viewport = config.initial_viewport()?;

        Ok(Self {
            config,
            pixel_rect,
            initial_viewport,
            viewport: initial_viewport,
            budget: IterationBudget::new(config.initial_iterations),
            continuous_zoom: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.budget.current()
    }

    #[must_use]
    pub fn is_continuous_zooming(&self) -> bool {
        self.continuous_zoom
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            pixel_rect: self.pixel_rect,
            viewport: self.viewport,
            max_iterations: self.budget.current(),
        }
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.pixel_rect, self.viewport)
    }

    pub fn apply(&mut self, command: ExplorerCommand) -> CommandReport {
        let report = match command {
            ExplorerCommand::Pan(direction) => self.pan(direction),
            ExplorerCommand::ZoomIn { x, y } => {
                self.zoom_with_budget(x, y, self.config.zoom_in_factor, |budget, config| {
                    budget.increase(config.zoom_in_iteration_step);
                })
            }
            ExplorerCommand::ZoomOut { x, y } => {
                self.zoom_with_budget(x, y, self.config.zoom_out_factor, |budget, config| {
                    budget.decrease(config.zoom_out_iteration_step);
                })
            }
            ExplorerCommand::Recenter { x, y } => {
                self.zoom_with_budget(x, y, self.config.recenter_factor, |_, _| {})
            }
            ExplorerCommand::StartContinuousZoom => {
                self.continuous_zoom = true;
                CommandReport::no_redraw()
            }
            ExplorerCommand::StopContinuousZoom => {
                self.continuous_zoom = false;
                CommandReport::no_redraw()
            }
            ExplorerCommand::Tick => self.tick(),
            ExplorerCommand::Reset => self.reset(),
            ExplorerCommand::Quit => CommandReport::quit(),
            ExplorerCommand::Unrecognized => CommandReport::no_redraw(),
        };

        match report.refusal {
            Some(refusal) => warn!(%command, %refusal, "zoom refused"),
            None if report.needs_redraw() => info!(
                %command,
                center = %self.viewport.center(),
                span = self.viewport.height(),
                max_iterations = self.budget.current(),
                "applied"
            ),
            None => {}
        }

        report
    }

    /// Shifts the viewport by `pan_fraction` of the span on one axis.
    pub fn pan(&mut self, direction: PanDirection) -> CommandReport {
        let (dx, dy) = direction.offsets();
        let d_real = dx * self.viewport.width() * self.config.pan_fraction;
        let d_imag = dy * self.viewport.height() * self.config.pan_fraction;

        match self.viewport.translated(d_real, d_imag) {
            Ok(viewport) => {
                self.viewport = viewport;
                CommandReport::redraw()
            }
            Err(_) => CommandReport::refused(ZoomRefusal::OutOfRange),
        }
    }

    /// Centres a new viewport on the complex point under `(x, y)` with both
    /// spans scaled by `factor`. The budget is left alone.
    pub fn zoom_at_point(&mut self, x: f64, y: f64, factor: f64) -> Result<(), ZoomRefusal> {
        let target = self.mapper().to_complex(x, y);
        self.viewport = self.scaled_viewport(target, factor)?;
        Ok(())
    }

    /// Advances continuous zoom by one step. Hitting the precision floor
    /// stops the mode.
    pub fn tick(&mut self) -> CommandReport {
        if !self.continuous_zoom {
            return CommandReport::no_redraw();
        }

        let factor = 1.0 - self.config.continuous_zoom_fraction;

        match self.scaled_viewport(self.viewport.center(), factor) {
            Ok(viewport) => {
                self.viewport = viewport;
                self.budget
                    .increase(self.config.continuous_zoom_iteration_step);
                CommandReport::redraw()
            }
            Err(refusal) => {
                self.continuous_zoom = false;
                warn!(%refusal, "continuous zoom stopped");
                CommandReport {
                    continuous_zoom_stopped: true,
                    ..CommandReport::refused(refusal)
                }
            }
        }
    }

    pub fn reset(&mut self) -> CommandReport {
        self.viewport = self.initial_viewport;
        self.budget.reset();
        self.continuous_zoom = false;
        CommandReport::redraw()
    }

    fn zoom_with_budget(
        &mut self,
        x: f64,
        y: f64,
        factor: f64,
        adjust: impl FnOnce(&mut IterationBudget, &ExplorerConfig),
    ) -> CommandReport {
        match self.zoom_at_point(x, y, factor) {
            Ok(()) => {
                adjust(&mut self.budget, &self.config);
                CommandReport::redraw()
            }
            Err(refusal) => CommandReport::refused(refusal),
        }
    }

    fn scaled_viewport(&self, center: Complex, factor: f64) -> Result<Viewport, ZoomRefusal> {
        let half_width = self.viewport.width() / 2.0 * factor;
        let half_height = self.viewport.height() / 2.0 * factor;

        let viewport = Viewport::centered(center, half_width, half_height)
            .map_err(|_| ZoomRefusal::OutOfRange)?;

        if factor < 1.0 {
            let pixel_size = viewport.height() / f64::from(self.pixel_rect.height());
            let floor = precision_floor(center);

            if pixel_size < floor {
                return Err(ZoomRefusal::PrecisionExhausted { pixel_size, floor });
            }
        }

        Ok(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::explorer::command::CommandOutcome;
    use crate::core::fractals::mandelbrot::algorithm::escape_time;

    const TOLERANCE: f64 = 1e-9;

    fn controller() -> ViewportController {
        ViewportController::new(ExplorerConfig::default()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn starts_from_configured_viewport_and_budget() {
        let controller = controller();

        assert_close(controller.viewport().real_min(), -10.0 / 3.0);
        assert_close(controller.viewport().real_max(), 10.0 / 3.0);
        assert_eq!(controller.viewport().imag_min(), -2.0);
        assert_eq!(controller.viewport().imag_max(), 2.0);
        assert_eq!(controller.max_iterations(), 50);
        assert!(!controller.is_continuous_zooming());
    }

    #[test]
    fn default_scenario_classifies_known_points() {
        let budget = controller().max_iterations();

        assert_eq!(escape_time(Complex::new(2.0, 0.0), budget), 1);
        assert_eq!(escape_time(Complex::new(2.5, 0.0), budget), 0);
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), budget), 50);
    }

    #[test]
    fn zoom_centres_on_point_under_cursor() {
        let mut controller = controller();
        let target = controller.mapper().to_complex(500.0, 300.0);

        let report = controller.apply(ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 });

        assert_eq!(report.outcome, CommandOutcome::Redraw);
        assert_close(controller.viewport().center().real, target.real);
        assert_close(controller.viewport().center().imag, target.imag);
    }

    #[test]
    fn zoom_in_off_centre_moves_the_centre() {
        let mut controller = controller();
        let target = controller.mapper().to_complex(100.0, 50.0);

        controller.apply(ExplorerCommand::ZoomIn { x: 100.0, y: 50.0 });

        assert_close(controller.viewport().center().real, target.real);
        assert_close(controller.viewport().center().imag, target.imag);
        assert_close(controller.viewport().height(), 4.0 * 0.25);
        assert_eq!(controller.max_iterations(), 70);
    }

    #[test]
    fn zoom_out_doubles_spans_and_floors_budget() {
        let mut controller = controller();

        controller.apply(ExplorerCommand::ZoomOut { x: 500.0, y: 300.0 });

        assert_close(controller.viewport().height(), 8.0);
        assert_eq!(controller.max_iterations(), 50);
    }

    #[test]
    fn repeated_zoom_outs_never_drop_below_initial_budget() {
        let mut controller = controller();
        controller.apply(ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 });

        for _ in 0..10 {
            controller.apply(ExplorerCommand::ZoomOut { x: 500.0, y: 300.0 });
            assert!(controller.max_iterations() >= 50);
        }

        assert_eq!(controller.max_iterations(), 50);
    }

    #[test]
    fn zooming_out_without_limit_is_refused_before_spans_overflow() {
        let mut controller = controller();
        let mut refusal = None;

        for _ in 0..2000 {
            let report = controller.apply(ExplorerCommand::ZoomOut { x: 500.0, y: 300.0 });
            if report.refusal.is_some() {
                refusal = report.refusal;
                break;
            }
        }

        assert_eq!(refusal, Some(ZoomRefusal::OutOfRange));
        assert!(controller.viewport().width().is_finite());
        assert!(controller.viewport().height().is_finite());
    }

    #[test]
    fn recenter_halves_spans_without_touching_budget() {
        let mut controller = controller();
        let target = controller.mapper().to_complex(750.0, 150.0);

        controller.apply(ExplorerCommand::Recenter { x: 750.0, y: 150.0 });

        assert_close(controller.viewport().height(), 2.0);
        assert_close(controller.viewport().width(), 20.0 / 6.0);
        assert_close(controller.viewport().center().real, target.real);
        assert_eq!(controller.max_iterations(), 50);
    }

    #[test]
    fn pan_shifts_one_axis_by_a_quarter_span() {
        let mut controller = controller();
        let before = controller.viewport();

        assert!(controller.apply(ExplorerCommand::Pan(PanDirection::Right)).needs_redraw());
        assert_close(controller.viewport().real_min(), before.real_min() + before.width() / 4.0);
        assert_eq!(controller.viewport().imag_min(), before.imag_min());

        controller.apply(ExplorerCommand::Pan(PanDirection::Up));
        assert_close(controller.viewport().imag_min(), before.imag_min() - 1.0);
        assert_eq!(controller.max_iterations(), 50);
    }

    #[test]
    fn pan_left_then_right_restores_viewport() {
        let mut controller = controller();
        let before = controller.viewport();

        controller.apply(ExplorerCommand::Pan(PanDirection::Left));
        controller.apply(ExplorerCommand::Pan(PanDirection::Right));

        assert_close(controller.viewport().real_min(), before.real_min());
        assert_close(controller.viewport().real_max(), before.real_max());
    }

    #[test]
    fn continuous_tick_contracts_spans_and_raises_budget() {
        let mut controller = controller();
        let before = controller.viewport();

        controller.apply(ExplorerCommand::StartContinuousZoom);
        let report = controller.apply(ExplorerCommand::Tick);

        assert!(report.needs_redraw());
        assert_close(controller.viewport().width(), before.width() * 0.8);
        assert_close(controller.viewport().height(), before.height() * 0.8);
        assert!(controller.viewport().width() < before.width());
        assert_eq!(controller.max_iterations(), 51);
        assert!(controller.is_continuous_zooming());
    }

    #[test]
    fn continuous_zoom_persists_until_stopped() {
        let mut controller = controller();
        controller.apply(ExplorerCommand::StartContinuousZoom);

        for _ in 0..5 {
            controller.tick();
        }
        assert!(controller.is_continuous_zooming());
        assert_eq!(controller.max_iterations(), 55);

        let viewport = controller.viewport();
        let report = controller.apply(ExplorerCommand::StopContinuousZoom);

        assert_eq!(report.outcome, CommandOutcome::NoRedraw);
        assert_eq!(controller.viewport(), viewport);
        assert_eq!(controller.max_iterations(), 55);
        assert!(!controller.tick().needs_redraw());
    }

    #[test]
    fn tick_without_mode_changes_nothing() {
        let mut controller = controller();
        let viewport = controller.viewport();

        let report = controller.tick();

        assert_eq!(report.outcome, CommandOutcome::NoRedraw);
        assert_eq!(controller.viewport(), viewport);
        assert_eq!(controller.max_iterations(), 50);
    }

    #[test]
    fn unrecognized_and_quit_leave_state_unchanged() {
        let mut controller = controller();
        let snapshot = controller.snapshot();

        assert_eq!(
            controller.apply(ExplorerCommand::Unrecognized).outcome,
            CommandOutcome::NoRedraw
        );
        assert_eq!(controller.apply(ExplorerCommand::Quit).outcome, CommandOutcome::Quit);
        assert_eq!(controller.snapshot(), snapshot);
    }

    #[test]
    fn continuous_zoom_stops_at_precision_floor() {
        let mut controller = controller();
        controller.apply(ExplorerCommand::StartContinuousZoom);

        let mut stopped = None;
        for _ in 0..500 {
            let report = controller.tick();
            if report.continuous_zoom_stopped {
                stopped = Some(report);
                break;
            }
        }

        let report = stopped.expect("continuous zoom should hit the precision floor");
        assert!(matches!(
            report.refusal,
            Some(ZoomRefusal::PrecisionExhausted { .. })
        ));
        assert!(!controller.is_continuous_zooming());
        assert!(controller.viewport().real_min() < controller.viewport().real_max());
        assert!(controller.viewport().imag_min() < controller.viewport().imag_max());
    }

    #[test]
    fn zoom_in_is_refused_at_precision_floor() {
        let mut controller = controller();

        let mut refusal = None;
        for _ in 0..100 {
            let report = controller.apply(ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 });
            if report.refusal.is_some() {
                refusal = Some(report);
                break;
            }
        }

        let report = refusal.expect("zoom-in should eventually be refused");
        let viewport = controller.viewport();
        let budget = controller.max_iterations();

        assert_eq!(report.outcome, CommandOutcome::NoRedraw);
        controller.apply(ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 });
        assert_eq!(controller.viewport(), viewport);
        assert_eq!(controller.max_iterations(), budget);
    }

    #[test]
    fn reset_restores_startup_state() {
        let mut controller = controller();
        controller.apply(ExplorerCommand::ZoomIn { x: 10.0, y: 10.0 });
        controller.apply(ExplorerCommand::StartContinuousZoom);
        controller.tick();

        assert!(controller.apply(ExplorerCommand::Reset).needs_redraw());
        assert_eq!(
            controller.viewport(),
            ExplorerConfig::default().initial_viewport().unwrap()
        );
        assert_eq!(controller.max_iterations(), 50);
        assert!(!controller.is_continuous_zooming());
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut controller = controller();
        controller.apply(ExplorerCommand::ZoomIn { x: 500.0, y: 300.0 });

        let snapshot = controller.snapshot();

        assert_eq!(snapshot.viewport, controller.viewport());
        assert_eq!(snapshot.max_iterations, 70);
        assert_eq!(snapshot.pixel_rect.width(), 1000);
        assert_eq!(snapshot.pixel_rect.height(), 600);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ExplorerConfig {
            height: 0,
            ..ExplorerConfig::default()
        };

        assert!(ViewportController::new(config).is_err());
    }
}
