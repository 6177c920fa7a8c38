//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a bounce depth
//! - A constant ambient term gathered at every bounce
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction

use crate::sampling::gen_f32;
use crate::{Camera, Hittable, RenderConfig};
use nox_math::{Color, Interval, Ray};
use rand::RngCore;
use std::time::Instant;

/// Ambient light added at every scattering event.
pub const AMBIENT_LIGHT: Color = Color::new(0.1, 0.1, 0.1);

/// Lower bound of the hit search window; keeps a scattered ray from
/// re-hitting the surface it just left.
pub const HIT_EPSILON: f32 = 0.001;

/// Output intensity range before scaling to 8 bits.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Estimate the radiance arriving along a ray.
///
/// Misses and absorbed rays contribute black; the background is black. Each
/// scattering event multiplies its attenuation into the ambient term plus the
/// light gathered by the scattered ray.
pub fn radiance(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded the ray bounce limit, no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(HIT_EPSILON, f32::INFINITY)) else {
        return Color::ZERO;
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let incoming = radiance(&result.scattered, world, depth - 1, rng);
            result.attenuation * (AMBIENT_LIGHT + incoming)
        }
        None => Color::ZERO,
    }
}

/// Render a single pixel with multi-sampling.
///
/// `i` counts columns from the left, `j` counts rows from the bottom.
/// Returns the average of `samples_per_pixel` radiance estimates.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width;
    let height = config.image_height();
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / (width - 1) as f32;
        let v = (j as f32 + gen_f32(rng)) / (height - 1) as f32;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += radiance(&ray, world, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let encode = |c: f32| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Image buffer for storing render output, rows top to bottom.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y = 0 being the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Convert to packed 8-bit RGB bytes, row-major.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; all randomness comes from `rng`.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let width = config.image_width;
    let height = config.image_height();
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    for j in (0..height).rev() {
        log::debug!("Scanlines remaining: {}", j);
        for i in 0..width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, height - 1 - j, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
