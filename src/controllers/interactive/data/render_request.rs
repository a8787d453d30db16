use crate::core::actions::render_view::RenderSettings;
use crate::core::explorer::snapshot::ViewSnapshot;

/// One render job: the view to compute and how to shade it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub snapshot: ViewSnapshot,
    pub settings: RenderSettings,
}
