// Re-export glam for convenience
pub use glam::*;

// Nox math types
mod interval;
mod near_zero;
mod ray;

pub use interval::Interval;
pub use near_zero::NearZero;
pub use ray::Ray;

/// RGB color with linear components, typically in 0-1.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_componentwise() {
        let a = Color::new(0.5, 1.0, 0.25);
        let b = Color::new(0.5, 0.5, 4.0);
        assert_eq!(a * b, Color::new(0.25, 0.5, 1.0));
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
    }
}
