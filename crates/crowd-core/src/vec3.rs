//! Planar-biased 3D vector math.
//!
//! The simulation plane is XZ: agents carry a full 3D position so scenes with
//! terrain offsets round-trip cleanly, but all steering math operates on the
//! horizontal components.  `Vec3` uses `f32` throughout — centimetre-level
//! precision at world scales of a few hundred metres, and half the memory of
//! `f64` across SoA arrays of thousands of agents.
//!
//! Degenerate geometry (zero-length directions, coincident positions) is
//! handled here once: [`Vec3::normalized_or_zero`] returns `Vec3::ZERO`
//! instead of propagating a NaN, so every steering contribution built on it
//! degrades to "no force" locally.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Minimum squared length below which a vector is treated as zero-length.
const EPSILON_SQ: f32 = 1e-12;

/// A 3D vector / point in simulation space (XZ horizontal, Y up).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Squared length — prefer for comparisons, avoids the sqrt.
    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Copy with the vertical component zeroed — projection onto the
    /// simulation plane.
    #[inline]
    pub fn planar(self) -> Vec3 {
        Vec3 { y: 0.0, ..self }
    }

    /// Distance to `other` measured in the XZ plane only.
    #[inline]
    pub fn planar_distance(self, other: Vec3) -> f32 {
        (other - self).planar().length()
    }

    /// Unit vector in the same direction, or `Vec3::ZERO` when the length is
    /// effectively zero.  The zero fallback is what keeps NaNs out of the
    /// steering pipeline.
    #[inline]
    pub fn normalized_or_zero(self) -> Vec3 {
        let len_sq = self.length_sq();
        if len_sq <= EPSILON_SQ {
            Vec3::ZERO
        } else {
            self / len_sq.sqrt()
        }
    }

    /// Rescale to `max` if the length exceeds it; otherwise unchanged.
    pub fn limit(self, max: f32) -> Vec3 {
        let len_sq = self.length_sq();
        if len_sq > max * max && len_sq > EPSILON_SQ {
            self * (max / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Heading angle in radians around the vertical axis (`atan2(x, z)`),
    /// matching the convention "yaw 0 faces +Z".  Meaningless for vectors
    /// with no horizontal component — guard with a length check first.
    #[inline]
    pub fn yaw(self) -> f32 {
        self.x.atan2(self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
