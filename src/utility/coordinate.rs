//! Two- and three-dimensional coordinates with an optional payload.
//!
//! Only the axes take part in equality and arithmetic; the payload rides
//! along. A sum or difference gets a default payload.

use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A point on two axes of type `A`, carrying a `V`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinate2D<A, V = ()> {
    /// First axis.
    pub x: A,
    /// Second axis.
    pub y: A,
    /// Payload.
    pub value: V,
}

/// A point on three axes of type `A`, carrying a `V`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinate3D<A, V = ()> {
    /// First axis.
    pub x: A,
    /// Second axis.
    pub y: A,
    /// Third axis.
    pub z: A,
    /// Payload.
    pub value: V,
}

impl<A, V: Default> Coordinate2D<A, V> {
    /// A coordinate with a default payload.
    pub fn new(x: A, y: A) -> Self {
        Self::with_value(x, y, V::default())
    }
}

impl<A, V> Coordinate2D<A, V> {
    /// A coordinate carrying `value`.
    pub const fn with_value(x: A, y: A, value: V) -> Self {
        Self { x, y, value }
    }

    /// The axes as a tuple.
    pub fn axes(&self) -> (A, A)
    where
        A: Copy,
    {
        (self.x, self.y)
    }
}

impl<A: Zero, V: Default> Coordinate2D<A, V> {
    /// Both axes zero.
    pub fn origin() -> Self {
        Self::new(A::zero(), A::zero())
    }
}

impl<A: Zero, V: Default> Default for Coordinate2D<A, V> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<A: PartialEq, V> PartialEq for Coordinate2D<A, V> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<A: Eq, V> Eq for Coordinate2D<A, V> {}

impl<A: Hash, V> Hash for Coordinate2D<A, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<A: Add<Output = A>, V: Default> Add for Coordinate2D<A, V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<A: Sub<Output = A>, V: Default> Sub for Coordinate2D<A, V> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<A: AddAssign, V> AddAssign for Coordinate2D<A, V> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<A: SubAssign, V> SubAssign for Coordinate2D<A, V> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<A, V: Default> Coordinate3D<A, V> {
    /// A coordinate with a default payload.
    pub fn new(x: A, y: A, z: A) -> Self {
        Self::with_value(x, y, z, V::default())
    }
}

impl<A, V> Coordinate3D<A, V> {
    /// A coordinate carrying `value`.
    pub const fn with_value(x: A, y: A, z: A, value: V) -> Self {
        Self { x, y, z, value }
    }

    /// The axes as a tuple.
    pub fn axes(&self) -> (A, A, A)
    where
        A: Copy,
    {
        (self.x, self.y, self.z)
    }
}

impl<A: Zero, V: Default> Coordinate3D<A, V> {
    /// All axes zero.
    pub fn origin() -> Self {
        Self::new(A::zero(), A::zero(), A::zero())
    }
}

impl<A: Zero, V: Default> Default for Coordinate3D<A, V> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<A: PartialEq, V> PartialEq for Coordinate3D<A, V> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<A: Eq, V> Eq for Coordinate3D<A, V> {}

impl<A: Hash, V> Hash for Coordinate3D<A, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
    }
}

impl<A: Add<Output = A>, V: Default> Add for Coordinate3D<A, V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<A: Sub<Output = A>, V: Default> Sub for Coordinate3D<A, V> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<A: AddAssign, V> AddAssign for Coordinate3D<A, V> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<A: SubAssign, V> SubAssign for Coordinate3D<A, V> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let origin: Coordinate3D<i16> = Coordinate3D::default();
        assert_eq!(origin.axes(), (0, 0, 0));
    }

    #[test]
    fn test_equality_ignores_payload() {
        let a = Coordinate2D::with_value(1, 2, 'a');
        let b = Coordinate2D::with_value(1, 2, 'b');
        assert_eq!(a, b);
        assert_ne!(a, Coordinate2D::with_value(2, 1, 'a'));
    }

    #[test]
    fn test_arithmetic_keeps_or_resets_payload() {
        let mut a = Coordinate2D::with_value(5, 7, 9u8);
        let b = Coordinate2D::with_value(1, 2, 3u8);

        let sum = a + b;
        assert_eq!(sum.axes(), (6, 9));
        assert_eq!(sum.value, 0);

        a -= b;
        assert_eq!(a.axes(), (4, 5));
        assert_eq!(a.value, 9);
    }

    #[test]
    fn test_three_axes() {
        let a: Coordinate3D<f32> = Coordinate3D::new(1.0, 2.0, 3.0);
        let b = Coordinate3D::new(0.5, 0.5, 0.5);
        assert_eq!((a - b).axes(), (0.5, 1.5, 2.5));
    }
}
