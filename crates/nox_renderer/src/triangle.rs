//! Triangle primitive.
//!
//! **Intersection is not implemented.** [`Triangle::hit`] always reports a
//! miss, so triangles placed in a scene are invisible. Winding, the
//! barycentric test and culling policy are still undecided.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use nox_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A triangle primitive (intersection stub).
// Fields are unread until `hit` gains a real intersection test
#[allow(dead_code)]
pub struct Triangle {
    vertices: [Vec3; 3],
    material: Arc<dyn Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<dyn Material>) -> Self {
        Self {
            vertices: [v0, v1, v2],
            material,
        }
    }

}

impl Hittable for Triangle {
    fn hit(&self, _ray: &Ray, _ray_t: Interval) -> Option<HitRecord<'_>> {
        // TODO: ray-triangle intersection once winding and culling are specified
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    #[test]
    fn test_triangle_never_hits() {
        let [v0, v1, v2] = [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        ];
        let tri = Triangle::new(v0, v1, v2, Arc::new(Lambertian::new(Vec3::splat(0.5))));

        // Ray through the centroid, either side
        let centroid = (v0 + v1 + v2) / 3.0;
        let toward = Ray::new(Vec3::ZERO, centroid);
        let away = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::Z);
        let interval = Interval::new(0.001, f32::INFINITY);

        assert!(tri.hit(&toward, interval).is_none());
        assert!(tri.hit(&away, interval).is_none());
    }
}
