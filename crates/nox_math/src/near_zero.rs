use crate::Vec3;

/// Threshold below which every component counts as zero.
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Degenerate-vector test used before a direction gets normalized downstream.
pub trait NearZero {
    /// Returns true if the vector is close to zero in all dimensions.
    fn near_zero(&self) -> bool;
}

impl NearZero for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.abs().max_element() < NEAR_ZERO_EPSILON
    }
}
