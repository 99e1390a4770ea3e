//! 26.6 fixed point numbers, the coordinate format of the rasterizer.

use crate::math::{point, Point};

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A signed fixed point number with 26 integer bits and 6 fractional bits.
///
/// One unit of the underlying integer is 1/64th of a pixel.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Fixed(i32);

impl Fixed {
    pub const FRACTION_BITS: u32 = 6;
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << Self::FRACTION_BITS);
    pub const MAX: Fixed = Fixed(i32::MAX);
    pub const MIN: Fixed = Fixed(-i32::MAX);

    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Fixed(bits)
    }

    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Fixed(value << Self::FRACTION_BITS)
    }

    /// Rounds `value` to the nearest 1/64th.
    ///
    /// The magnitude is rounded with halves going up and the sign is restored
    /// afterwards, so `from_f64(-x) == -from_f64(x)`. Out of range values saturate
    /// and NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if value < 0.0 {
            -Self::from_positive(-value)
        } else {
            Self::from_positive(value)
        }
    }

    fn from_positive(value: f64) -> Self {
        if value.is_nan() {
            return Fixed::ZERO;
        }

        let integer = value.trunc();
        if integer * 64.0 >= i32::MAX as f64 {
            return Fixed::MAX;
        }

        let fraction = ((value - integer) * 64.0 + 0.5).floor();
        let bits = integer * 64.0 + fraction;
        if bits >= i32::MAX as f64 {
            return Fixed::MAX;
        }

        Fixed(bits as i32)
    }

    #[inline]
    pub const fn bits(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 64.0
    }

    /// The largest integer less than or equal to this number.
    #[inline]
    pub const fn floor(self) -> i32 {
        self.0 >> Self::FRACTION_BITS
    }

    /// The smallest integer greater than or equal to this number.
    #[inline]
    pub const fn ceil(self) -> i32 {
        ((self.0 as i64 + 63) >> Self::FRACTION_BITS) as i32
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(other.0))
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(other.0))
    }
}

// Integer part and 64ths, for example `-1:16` for -1.25.
impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}:{:02}", sign, magnitude >> 6, magnitude & 0x3f)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

/// A position in 26.6 fixed point coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FixedPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedPoint {
    #[inline]
    pub fn new(x: Fixed, y: Fixed) -> Self {
        FixedPoint { x, y }
    }

    pub fn from_point(p: Point) -> Self {
        FixedPoint {
            x: Fixed::from_f64(p.x),
            y: Fixed::from_f64(p.y),
        }
    }

    pub fn to_point(self) -> Point {
        point(self.x.to_f64(), self.y.to_f64())
    }
}

#[test]
fn fixed_from_f64() {
    fn check(value: f64, bits: i32) {
        assert_eq!(Fixed::from_f64(value), Fixed::from_bits(bits), "{}", value);
        assert_eq!(Fixed::from_f64(-value), Fixed::from_bits(-bits), "{}", -value);
    }

    check(42.375, (42 << 6) + (1 << 4) + (1 << 3));
    check(1.5, (1 << 6) + (1 << 5));
    check(1.0, Fixed::from_int(1).bits());
    check(0.5, 1 << 5);
    check(0.25, 1 << 4);
    check(0.0, 0);
    check(3.0 / 128.0, 2);
    check(1.0 / 256.0, 0);
    // Rounding the fraction up carries into the integer part.
    check(2.999, 3 << 6);
}

#[test]
fn fixed_saturates() {
    assert_eq!(Fixed::from_f64(1e20), Fixed::MAX);
    assert_eq!(Fixed::from_f64(-1e20), Fixed::MIN);
    assert_eq!(Fixed::from_f64(f64::INFINITY), Fixed::MAX);
    assert_eq!(Fixed::from_f64(f64::NAN), Fixed::ZERO);
}

#[test]
fn fixed_helpers() {
    let v = Fixed::from_f64(-1.25);
    assert_eq!(v.bits(), -80);
    assert_eq!(v.to_f64(), -1.25);
    assert_eq!(v.floor(), -2);
    assert_eq!(v.ceil(), -1);
    assert_eq!(Fixed::from_int(3).floor(), 3);
    assert_eq!(Fixed::from_int(3).ceil(), 3);
    assert_eq!(format!("{:?}", v), "-1:16");
    assert_eq!(v.to_string(), "-1.25");
    assert_eq!(Fixed::ONE + Fixed::ONE - Fixed::from_int(2), Fixed::ZERO);

    let p = FixedPoint::from_point(point(0.5, -2.0));
    assert_eq!(p, FixedPoint::new(Fixed::from_bits(32), Fixed::from_int(-2)));
    assert_eq!(p.to_point(), point(0.5, -2.0));
}
