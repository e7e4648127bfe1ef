//! Two-dimensional displacement vector with rounded coordinates.
use core::{
    f64::consts::PI,
    fmt,
    ops::{Add, Mul, Sub},
};

use libm::{acos, cos, sin, sqrt};

use crate::error::{Operation, ZeroLengthError};
use crate::util::{round_coordinate, round_to, ANGLE_PRECISION, DOT_PRECISION};

const DEG_TO_RAD: f64 = PI / 180.;
const RAD_TO_DEG: f64 = 180. / PI;

/// A point in the plane, `(x, y)`.
pub type Point = (f64, f64);

/// Coordinates are always rounded to two decimal places.
///
/// Axes follow the mathematical convention, y pointing up, so positive
/// rotations turn counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
    // Block construction so the rounding invariant is upheld
    _private: (),
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D {
        x: 0.,
        y: 0.,
        _private: (),
    };

    /// Reference direction for [`Vector2D::angle`].
    pub const UP: Vector2D = Vector2D {
        x: 0.,
        y: 1.,
        _private: (),
    };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D {
            x: round_coordinate(x),
            y: round_coordinate(y),
            _private: (),
        }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Vector2D::new(end.0 - start.0, end.1 - start.1)
    }

    pub fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product, rounded to four decimal places.
    pub fn dot(self, other: Self) -> f64 {
        round_to(self.x * other.x + self.y * other.y, DOT_PRECISION)
    }

    pub fn length(self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    /// Only a length of exactly zero is rejected
    pub fn normalized(self) -> Result<Self, ZeroLengthError> {
        let length = self.length();
        if length == 0. {
            log::warn!("Refusing to normalize zero-length vector");
            return Err(ZeroLengthError::new(Operation::Normalize));
        }
        Ok(Vector2D::new(self.x / length, self.y / length))
    }

    /// Unsigned angle to `other` in whole degrees, within `[0, 180]`.
    pub fn angle_between(self, other: Self) -> Result<i32, ZeroLengthError> {
        let dot_product = self.dot(other);
        let length_product = self.length() * other.length();
        if length_product == 0. {
            log::warn!(
                "Refusing angle between {} and {}, zero-length operand",
                self,
                other
            );
            return Err(ZeroLengthError::new(Operation::Angle));
        }
        // The rounded dot product can drift just outside the domain of acos
        let cos_angle = (dot_product / length_product).clamp(-1., 1.);
        let degrees = round_to(acos(cos_angle) * RAD_TO_DEG, ANGLE_PRECISION);
        Ok(degrees as i32)
    }

    pub fn angle(self) -> Result<i32, ZeroLengthError> {
        self.angle_between(Vector2D::UP)
    }

    /// Rotates counter-clockwise by `degrees`; negative values turn clockwise.
    pub fn rotate(self, degrees: i32) -> Self {
        let radians = degrees as f64 * DEG_TO_RAD;
        let (sin_theta, cos_theta) = (sin(radians), cos(radians));
        Vector2D::new(
            self.x * cos_theta - self.y * sin_theta,
            self.x * sin_theta + self.y * cos_theta,
        )
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Self) -> Self::Output {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
