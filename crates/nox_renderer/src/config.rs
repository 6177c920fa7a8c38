//! Render configuration.
//!
//! Defaults reproduce the classic night scene render: 1200 pixels wide at
//! 3:2, 20 samples per pixel, 50 bounces.

use crate::{Camera, RenderError, RenderResult, SceneKind};
use nox_math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted image width or height, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Camera placement and lens, stored as plain arrays for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    pub vup: [f32; 3],
    /// Vertical field of view in degrees
    pub vfov: f32,
    pub aperture: f32,
    pub focus_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: [13.0, 2.0, 3.0],
            look_at: [0.0, 0.0, 0.0],
            vup: [0.0, 1.0, 0.0],
            vfov: 20.0,
            aperture: 0.1,
            focus_dist: 10.0,
        }
    }
}

impl CameraConfig {
    /// Build and initialize a camera for the given aspect ratio.
    pub fn to_camera(&self, aspect_ratio: f32) -> Camera {
        let mut camera = Camera::new()
            .with_position(
                Vec3::from_array(self.look_from),
                Vec3::from_array(self.look_at),
                Vec3::from_array(self.vup),
            )
            .with_lens(self.vfov, self.aperture, self.focus_dist)
            .with_aspect_ratio(aspect_ratio);
        camera.initialize();
        camera
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Image width over height
    pub aspect_ratio: f32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Seed for scene layout and sampling; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Which built-in scene to render
    pub scene: SceneKind,
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 1200,
            aspect_ratio: 3.0 / 2.0,
            samples_per_pixel: 20,
            max_depth: 50,
            seed: None,
            scene: SceneKind::Night,
            camera: CameraConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        log::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Image height derived from width and aspect ratio (truncated).
    pub fn image_height(&self) -> u32 {
        (self.image_width as f32 / self.aspect_ratio) as u32
    }

    /// Reject settings the render loop cannot work with.
    pub fn validate(&self) -> RenderResult<()> {
        if self.aspect_ratio.is_nan() || self.aspect_ratio <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "aspect_ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        // Pixel coordinates are divided by (size - 1)
        if self.image_width < 2 || self.image_height() < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.image_width,
                self.image_height()
            )));
        }
        if self.image_width > MAX_IMAGE_DIMENSION || self.image_height() > MAX_IMAGE_DIMENSION {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at most {MAX_IMAGE_DIMENSION} pixels per side, got {}x{}",
                self.image_width,
                self.image_height()
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the camera described by this config.
    pub fn camera(&self) -> Camera {
        self.camera.to_camera(self.aspect_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();

        assert_eq!(config.image_width, 1200);
        assert_eq!(config.image_height(), 800);
        assert_eq!(config.samples_per_pixel, 20);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.scene, SceneKind::Night);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "samples_per_pixel": 4, "camera": { "vfov": 45.0 } }"#)
                .unwrap();

        assert_eq!(config.samples_per_pixel, 4);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.camera.vfov, 45.0);
        assert_eq!(config.camera.look_from, [13.0, 2.0, 3.0]);
    }

    #[test]
    fn test_json_scene_name() {
        let json = r#"{ "scene": "swirl", "seed": 7 }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.scene, SceneKind::Swirl);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = serde_json::from_str::<RenderConfig>(r#"{ "max_depth": "deep" }"#)
            .map_err(RenderError::from)
            .unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RenderConfig::from_json_file("/nonexistent/nox/render.json").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_validate_rejects_degenerate_settings() {
        let tiny = RenderConfig {
            image_width: 1,
            ..RenderConfig::default()
        };
        assert!(matches!(tiny.validate(), Err(RenderError::InvalidConfig(_))));

        let no_samples = RenderConfig {
            samples_per_pixel: 0,
            ..RenderConfig::default()
        };
        assert!(no_samples.validate().is_err());

        let no_depth = RenderConfig {
            max_depth: 0,
            ..RenderConfig::default()
        };
        assert!(no_depth.validate().is_err());

        let flat = RenderConfig {
            aspect_ratio: 0.0,
            ..RenderConfig::default()
        };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_image() {
        let wide = RenderConfig {
            image_width: 1_000_000,
            ..RenderConfig::default()
        };
        assert!(matches!(wide.validate(), Err(RenderError::InvalidConfig(_))));

        // Height blows up instead of width
        let tall = RenderConfig {
            aspect_ratio: 1e-6,
            ..RenderConfig::default()
        };
        assert!(tall.validate().is_err());

        let largest = RenderConfig {
            image_width: MAX_IMAGE_DIMENSION,
            aspect_ratio: 1.0,
            ..RenderConfig::default()
        };
        assert!(largest.validate().is_ok());
    }
}
