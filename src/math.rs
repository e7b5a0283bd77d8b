//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::color::{Component, Components};

type Vector = Vector3D<Component>;

/// Sum of each component multiplied by its weight, accumulated left to right.
pub fn weighted_sum(components: Components, weights: Components) -> Component {
    let Components(x, y, z) = components;
    let Components(wx, wy, wz) = weights;
    Vector::new(x, y, z).dot(Vector::new(wx, wy, wz))
}

/// The largest of three values.
pub fn max3<T: Float>(a: T, b: T, c: T) -> T {
    a.max(b).max(c)
}

/// The smallest of three values.
pub fn min3<T: Float>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}
