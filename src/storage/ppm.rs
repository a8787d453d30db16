use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn encode_ppm(buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    write!(writer, "P6\n{width} {height}\n255\n")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

/// Creates missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(filepath)?);
    encode_ppm(buffer, &mut writer)?;
    writer.flush()
}
