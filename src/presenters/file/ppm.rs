use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::ppm::write_ppm;
use std::path::Path;
use tracing::info;

#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        write_ppm(buffer, filepath)?;
        info!(path = %filepath.display(), "wrote PPM");
        Ok(())
    }
}
