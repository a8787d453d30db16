use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::session_presenter::{LatestFrame, SessionFrame};
use crate::controllers::session::{ExplorerSession, SessionError, SessionStatus};
use crate::core::explorer::command::ExplorerCommand;
use crate::core::explorer::config::{ExplorerConfig, ExplorerConfigError};
use crate::core::explorer::controller::ViewportController;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CliExploreError {
    #[error(transparent)]
    Config(#[from] ExplorerConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("no frame has been rendered")]
    NoFrame,
}

/// Replays a command script headlessly and writes the final frame to a file.
pub struct CliExploreController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<SessionFrame>,
}

impl<P: FilePresenterPort> CliExploreController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&SessionFrame> {
        self.frame.as_ref()
    }

    /// Renders the start view, then applies `commands` one step at a time.
    /// Continuous zoom advances only on explicit `tick`s.
    pub fn explore(
        &mut self,
        config: ExplorerConfig,
        commands: impl IntoIterator<Item = ExplorerCommand>,
    ) -> Result<SessionStatus, CliExploreError> {
        let controller = ViewportController::new(config)?;
        let mut session = ExplorerSession::new(controller, config.render_settings(), LatestFrame::default())
            .with_auto_tick(false);

        session.step()?;
        let status = session.run_script(commands)?;

        let controller = session.controller();
        info!(
            frames = session.frames_rendered(),
            center = %controller.viewport().center(),
            span = controller.viewport().height(),
            max_iterations = controller.max_iterations(),
            "exploration finished"
        );

        self.frame = session.into_presenter().into_frame();

        Ok(status)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliExploreError> {
        let frame = self.frame.as_ref().ok_or(CliExploreError::NoFrame)?;
        self.presenter
            .present(&frame.view.pixel_buffer, filepath.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::explorer::command::parse_script;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        writes: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.writes
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            width: 40,
            height: 24,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn empty_script_renders_start_view() {
        let mut controller = CliExploreController::new(RecordingPresenter::default());

        let status = controller.explore(config(), []).unwrap();

        assert_eq!(status, SessionStatus::Running);
        let frame = controller.frame().unwrap();
        assert_eq!(frame.snapshot.max_iterations, 50);
        assert_eq!(frame.sequence, 1);
    }

    #[test]
    fn script_result_is_written_through_presenter() {
        let mut controller = CliExploreController::new(RecordingPresenter::default());
        let commands = parse_script("zoom-in@20,12 continuous-start tick tick").unwrap();

        controller.explore(config(), commands).unwrap();
        controller.write("out/frame.ppm").unwrap();

        assert_eq!(controller.frame().unwrap().snapshot.max_iterations, 72);
        assert_eq!(
            *controller.presenter.writes.borrow(),
            vec![(PathBuf::from("out/frame.ppm"), 40 * 24 * 3)]
        );
    }

    #[test]
    fn write_before_explore_fails() {
        let controller = CliExploreController::new(RecordingPresenter::default());

        assert!(matches!(
            controller.write("never.ppm"),
            Err(CliExploreError::NoFrame)
        ));
    }

    #[test]
    fn invalid_config_is_reported() {
        let mut controller = CliExploreController::new(RecordingPresenter::default());
        let config = ExplorerConfig {
            zoom_out_factor: 0.5,
            ..config()
        };

        assert!(matches!(
            controller.explore(config, []),
            Err(CliExploreError::Config(_))
        ));
    }
}
