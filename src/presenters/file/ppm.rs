use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;

/// Writes a raster as binary PPM (P6, 8 bits per channel).
pub fn write_ppm<W: Write>(raster: &Raster, mut writer: W) -> std::io::Result<()> {
    let pixel_rect = raster.pixel_rect();

    // P6 header: magic, width height, max channel value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", pixel_rect.width(), pixel_rect.height())?;
    writeln!(writer, "255")?;
    writer.write_all(raster.buffer())?;
    writer.flush()
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        write_ppm(raster, BufWriter::new(File::create(filepath)?))?;
        info!("wrote {}", filepath.display());

        Ok(())
    }
}
