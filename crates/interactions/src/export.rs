//! Drawing the grid onto a canvas and encoding it as PNG.

mod grid;
mod legend;

pub use grid::GridRenderer;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{ExtendedColorType, ImageEncoder, ImageError, codecs::png::PngEncoder};
use log::debug;

use interactions_core::draw::Canvas;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Encode(ImageError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to create output file: {err}"),
            Self::Encode(err) => write!(f, "Failed to encode PNG: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Encodes `canvas` as an RGBA PNG and writes it to `path`.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(Error::Io)?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(
            canvas.image().as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(Error::Encode)?;
    writer.flush().map_err(Error::Io)?;

    debug!(path = path.display().to_string(); "PNG written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use interactions_core::color::Color;
    use tempfile::tempdir;

    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_write_png_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut canvas = Canvas::new(7, 5);
        canvas.fill(Color::rgb(240, 240, 240));
        canvas.set_pixel(3, 2, Color::rgb(20, 40, 120));
        write_png(&canvas, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (7, 5));
        assert_eq!(decoded.get_pixel(3, 2).0, [20, 40, 120, 255]);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = write_png(&Canvas::new(1, 1), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("Failed to create output file"));
    }
}
