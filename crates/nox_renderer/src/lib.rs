//! Nox renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for sphere scenes lit only by a constant
//! ambient term that is gathered at every bounce.

mod camera;
mod config;
mod error;
mod hittable;
mod material;
mod moon;
mod output;
mod renderer;
mod sampling;
mod scene;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use config::{CameraConfig, RenderConfig, MAX_IMAGE_DIMENSION};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult, Swirl};
pub use moon::MoonSphere;
pub use output::{save_image, write_ppm};
pub use renderer::{
    color_to_rgb, radiance, render, render_pixel, ImageBuffer, AMBIENT_LIGHT, HIT_EPSILON,
};
pub use sampling::{gen_f32, gen_range_f32, random_in_unit_disk, random_unit_vector};
pub use scene::{night_scene, swirl_showcase_scene, SceneKind};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from nox_math
pub use nox_math::{Color, Interval, Ray, Vec3};
