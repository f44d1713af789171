use std::fmt;
use std::ops::Neg;
use derive_more::derive::From;

/// A numeric value tagged with its concrete type.
///
/// The tag and the width/signedness of the payload always agree; once
/// constructed a value is never widened or converted implicitly.
#[derive(Debug, Clone, Copy, PartialEq, From)]
pub enum Numeric {
    I32(i32),
    I64(i64),
    U8(u8),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Numeric {
    /// The canonical boolean truth value. Total for every variant.
    ///
    /// Integers are truthy iff nonzero; the sign and bit pattern beyond
    /// that do not matter, so the minimum signed value is truthy.
    /// Floats are falsy for zero of either sign and for any NaN payload,
    /// truthy otherwise, including both infinities. This relies on IEEE
    /// comparison (0.0 == -0.0) and is_nan, not on bit equality.
    pub fn to_bool(&self) -> bool {
        match self {
            Numeric::I32(v) => *v != 0,
            Numeric::I64(v) => *v != 0,
            Numeric::U8(v) => *v != 0,
            Numeric::U32(v) => *v != 0,
            Numeric::U64(v) => *v != 0,
            Numeric::F32(v) => !(*v == 0.0 || v.is_nan()),
            Numeric::F64(v) => !(*v == 0.0 || v.is_nan()),
        }
    }
}

impl Neg for Numeric {
    type Output = Numeric;

    /// Negation stays within the variant. Integers negate with
    /// two's-complement wrapping, so the operation is total even at MIN
    /// and for the unsigned widths. Floats negate by flipping the IEEE
    /// sign bit: magnitude and NaN-ness are preserved, and negating
    /// MAX or MIN_POSITIVE neither overflows nor underflows.
    fn neg(self) -> Numeric {
        match self {
            Numeric::I32(v) => Numeric::I32(v.wrapping_neg()),
            Numeric::I64(v) => Numeric::I64(v.wrapping_neg()),
            Numeric::U8(v) => Numeric::U8(v.wrapping_neg()),
            Numeric::U32(v) => Numeric::U32(v.wrapping_neg()),
            Numeric::U64(v) => Numeric::U64(v.wrapping_neg()),
            Numeric::F32(v) => Numeric::F32(-v),
            Numeric::F64(v) => Numeric::F64(-v),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Numeric::I32(v) => write!(f, "{}i32", v),
            Numeric::I64(v) => write!(f, "{}i64", v),
            Numeric::U8(v) => write!(f, "{}u8", v),
            Numeric::U32(v) => write!(f, "{}u32", v),
            Numeric::U64(v) => write!(f, "{}u64", v),
            Numeric::F32(v) => write!(f, "{}f32", v),
            Numeric::F64(v) => write!(f, "{}f64", v),
        }
    }
}
