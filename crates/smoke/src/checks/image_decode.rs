use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoad {
    Loaded {
        width: u32,
        height: u32,
        channels: u8,
    },
    /// The decoder ran and reported why it could not produce an image.
    Unavailable { reason: String },
}

/// Tries to decode `path`. Both outcomes prove the decoder is linked in.
pub fn decode_image(path: &Path) -> ImageLoad {
    match image::open(path) {
        Ok(decoded) => ImageLoad::Loaded {
            width: decoded.width(),
            height: decoded.height(),
            channels: decoded.color().channel_count(),
        },
        Err(error) => ImageLoad::Unavailable {
            reason: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    #[test]
    fn missing_file_is_unavailable_not_a_panic() {
        let dir = tempfile::tempdir().expect("tempdir");
        let outcome = decode_image(&dir.path().join("non_existent_image.png"));

        assert!(matches!(outcome, ImageLoad::Unavailable { .. }));
    }

    #[test]
    fn real_png_reports_dimensions_and_channels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tiny.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]))
            .save(&path)
            .expect("save png");

        assert_eq!(
            decode_image(&path),
            ImageLoad::Loaded {
                width: 3,
                height: 2,
                channels: 3,
            }
        );
    }
}
