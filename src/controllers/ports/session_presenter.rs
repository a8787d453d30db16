use crate::core::actions::render_view::RenderedView;
use crate::core::explorer::snapshot::ViewSnapshot;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SessionFrame {
    pub sequence: u64,
    pub snapshot: ViewSnapshot,
    pub view: RenderedView,
    pub render_duration: Duration,
}

/// Receives every frame rendered by an [`ExplorerSession`].
///
/// [`ExplorerSession`]: crate::controllers::session::ExplorerSession
pub trait SessionPresenterPort {
    fn present(&mut self, frame: SessionFrame);
}

/// Keeps only the newest frame.
#[derive(Debug, Default)]
pub struct LatestFrame {
    frame: Option<SessionFrame>,
    presented: u64,
}

impl LatestFrame {
    #[must_use]
    pub fn frame(&self) -> Option<&SessionFrame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    #[must_use]
    pub fn into_frame(self) -> Option<SessionFrame> {
        self.frame
    }
}

impl SessionPresenterPort for LatestFrame {
    fn present(&mut self, frame: SessionFrame) {
        self.frame = Some(frame);
        self.presented += 1;
    }
}
