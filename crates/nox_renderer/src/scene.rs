//! Built-in scenes.

use crate::sampling::{gen_f32, gen_range_f32};
use crate::{
    Color, Dielectric, HittableList, Lambertian, Material, Metal, MoonSphere, RenderError,
    Sphere, Swirl, Triangle, Vec3,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const GRASS_COUNT: usize = 500;
const STAR_COUNT: usize = 100;
const SMALL_RADIUS: f32 = 0.05;
const FIELD_EXTENT: f32 = 15.0;

/// Selects one of the built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Night field with grass, stars and the moon
    #[default]
    Night,
    /// One sphere per material plus a triangle
    Swirl,
}

impl SceneKind {
    /// Build the scene. Scene layout draws from `rng`.
    pub fn build(self, rng: &mut dyn RngCore) -> HittableList {
        match self {
            SceneKind::Night => night_scene(rng),
            SceneKind::Swirl => swirl_showcase_scene(),
        }
    }
}

impl FromStr for SceneKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "night" => Ok(SceneKind::Night),
            "swirl" => Ok(SceneKind::Swirl),
            other => Err(RenderError::InvalidConfig(format!("unknown scene '{}'", other))),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Night => write!(f, "night"),
            SceneKind::Swirl => write!(f, "swirl"),
        }
    }
}

/// Random (x, z) position on the field, x drawn before z, both in [-15, 15).
fn field_xz(rng: &mut dyn RngCore) -> (f32, f32) {
    let x = gen_range_f32(rng, -FIELD_EXTENT, FIELD_EXTENT);
    let z = gen_range_f32(rng, -FIELD_EXTENT, FIELD_EXTENT);
    (x, z)
}

/// The night scene: a green field scattered with small yellow "grass"
/// spheres, bright "stars" overhead, a moon, and three feature spheres
/// (glass, brown diffuse, polished metal) at the origin.
pub fn night_scene(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.8, 0.3)));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    // Grass: one shared yellow material
    let grass: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(1.0, 1.0, 0.0)));
    for _ in 0..GRASS_COUNT {
        let (x, z) = field_xz(rng);
        let y = SMALL_RADIUS + 0.1 * gen_f32(rng);
        world.add(Box::new(Sphere::new(
            Vec3::new(x, y, z),
            SMALL_RADIUS,
            grass.clone(),
        )));
    }

    // Stars: albedo above one makes them glow against the black sky
    for _ in 0..STAR_COUNT {
        let x = gen_range_f32(rng, -FIELD_EXTENT, FIELD_EXTENT);
        let y = gen_range_f32(rng, 5.0, 20.0);
        let z = gen_range_f32(rng, -FIELD_EXTENT, FIELD_EXTENT);
        let brightness = gen_range_f32(rng, 2.0, 5.0);
        let star: Arc<dyn Material> = Arc::new(Lambertian::new(Color::ONE * brightness));
        world.add(Box::new(Sphere::new(Vec3::new(x, y, z), SMALL_RADIUS, star)));
    }

    let moon: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.8)));
    world.add(Box::new(MoonSphere::new(Vec3::new(0.0, 10.0, 0.0), 3.0, moon)));

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.5, 0.5, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.5, 0.5, 0.0),
        1.0,
        Arc::new(Metal::polished(Color::new(0.7, 0.6, 0.5))),
    )));

    // High grass: more yellow spheres lifted into the sky as extra stars
    for _ in 0..GRASS_COUNT {
        let (x, z) = field_xz(rng);
        let y = SMALL_RADIUS + gen_range_f32(rng, 10.0, 50.0);
        world.add(Box::new(Sphere::new(
            Vec3::new(x, y, z),
            SMALL_RADIUS,
            grass.clone(),
        )));
    }

    log::info!("Built night scene with {} objects", world.len());
    world
}

/// One sphere per material variant on a gray ground, plus a triangle.
///
/// The triangle does not render: its intersection is a stub.
pub fn swirl_showcase_scene() -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.5)));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground.clone(),
    )));

    let materials: [Arc<dyn Material>; 4] = [
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.3)),
        Arc::new(Dielectric::new(1.5)),
        Arc::new(Swirl::new(Color::new(0.9, 0.3, 0.6), 4.0)),
    ];
    for (i, material) in materials.into_iter().enumerate() {
        let x = -3.0 + 2.0 * i as f32;
        world.add(Box::new(Sphere::new(Vec3::new(x, 1.0, 0.0), 1.0, material)));
    }

    world.add(Box::new(Triangle::new(
        Vec3::new(-2.0, 0.0, -3.0),
        Vec3::new(2.0, 0.0, -3.0),
        Vec3::new(0.0, 3.0, -3.0),
        ground,
    )));

    log::info!("Built swirl showcase scene with {} objects", world.len());
    world
}
