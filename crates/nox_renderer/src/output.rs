//! Image output.
//!
//! `.ppm` paths are written as plain-text P3 by hand; any other extension is
//! handed to the `image` crate, which picks the encoder from it.

use crate::renderer::{color_to_rgb, ImageBuffer};
use crate::RenderResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an image as a plain-text PPM (P3) stream, rows top to bottom.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        ::image::save_buffer(
            path,
            &image.to_rgb(),
            image.width,
            image.height,
            ::image::ColorType::Rgb8,
        )?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, RenderError};

    fn two_by_one() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::ONE);
        image.set(1, 0, Color::new(0.25, 0.0, 1.0));
        image
    }

    #[test]
    fn test_ppm_layout() {
        let mut bytes = Vec::new();
        write_ppm(&two_by_one(), &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n128 0 255\n");
    }

    #[test]
    fn test_ppm_rows_top_to_bottom() {
        let mut image = ImageBuffer::new(1, 2);
        image.set(0, 0, Color::ONE);

        let mut bytes = Vec::new();
        write_ppm(&image, &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1 2");
        assert_eq!(lines[3], "255 255 255");
        assert_eq!(lines[4], "0 0 0");
    }

    #[test]
    fn test_save_ppm_file() {
        let path = std::env::temp_dir().join(format!("nox_output_{}.ppm", std::process::id()));
        save_image(&two_by_one(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P3\n2 1\n255\n"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let err = save_image(&two_by_one(), "/nonexistent/nox/out.ppm").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
