//! The moon primitive: a sphere-like surface with its own root policy.
//!
//! Unlike [`Sphere`](crate::Sphere) it reports the outward normal as-is,
//! even when the ray arrives from inside, and treats a grazing ray
//! (zero discriminant) as a miss.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use nox_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// Sphere-like primitive used for the moon in the night scene.
pub struct MoonSphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl MoonSphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    fn record_at(&self, ray: &Ray, t: f32) -> HitRecord<'_> {
        let p = ray.at(t);
        let normal = (p - self.center) / self.radius;

        HitRecord {
            p,
            normal,
            material: self.material.as_ref(),
            t,
            front_face: ray.direction().dot(normal) < 0.0,
        }
    }
}

impl Hittable for MoonSphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;

        if discriminant <= 0.0 {
            return None;
        }

        let root = discriminant.sqrt();

        // Near root first so the closest visible surface wins
        let near = (-half_b - root) / a;
        if ray_t.surrounds(near) {
            return Some(self.record_at(ray, near));
        }

        // Checked even when the near root fell below t_min
        let far = (-half_b + root) / a;
        if ray_t.surrounds(far) {
            return Some(self.record_at(ray, far));
        }

        None
    }
}
