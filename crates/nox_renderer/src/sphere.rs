//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use nox_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive whose normals always face the incoming ray.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::with_face_normal(
            ray,
            root,
            outward_normal,
            self.material.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Arc::new(Lambertian::new(Vec3::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Vec3::new(0.5, 0.5, 0.5))),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("should hit");

        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -3.0));

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_hit_distance_and_normal() {
        let center = Vec3::new(1.0, 2.0, -6.0);
        let sphere = unit_sphere_at(center);
        let origin = Vec3::new(-2.0, 0.0, 1.0);
        let ray = Ray::new(origin, (center - origin).normalize());

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("aimed at center");

        let expected_t = origin.distance(center) - 1.0;
        assert!((rec.t - expected_t).abs() < 1e-4);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!(rec.normal.cross(rec.p - center).length() < 1e-4);
        assert!((rec.p - ray.at(rec.t)).length() < 1e-6);
    }

    #[test]
    fn test_sphere_from_inside_flips_normal() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("should hit far side");

        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_tangent_counts_as_hit() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z);

        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_some());
    }
}
