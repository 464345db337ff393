//! Binary arithmetic with an explicit division policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use tracing::{debug, trace};

use crate::error::Error;
use crate::Result;

/// Which quotient `divide_with` computes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMode {
    /// Exact real-valued quotient.
    #[default]
    TrueQuotient,
    /// Integer quotient floored toward negative infinity.
    FloorQuotient,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Quotient {
    Exact(f64),
    Floored(i64),
}

impl Quotient {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Quotient::Exact(value) => value,
            Quotient::Floored(value) => value as f64,
        }
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quotient::Exact(value) => write!(f, "{}", value),
            Quotient::Floored(value) => write!(f, "{}", value),
        }
    }
}

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Operand types accepted by [`divide`].
///
/// `i64` has no lossless `Into<f64>`, so the widening is spelled out here.
pub trait Operand: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_operand {
    ($($ty:ty),*) => {
        $(
            impl Operand for $ty {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_operand!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// True quotient of `a / b`.
///
/// A zero divisor, positive or negative, is an error rather than an
/// infinity or NaN.
pub fn divide<T: Operand>(a: T, b: T) -> Result<f64> {
    let (a, b) = (a.to_f64(), b.to_f64());
    if b == 0.0 {
        debug!(a, "refusing true division by zero");
        return Err(Error::DivisionByZero);
    }

    let quotient = a / b;
    trace!(a, b, quotient, "true division");
    Ok(quotient)
}

/// Integer quotient of `a / b`, floored toward negative infinity.
///
/// `floor_divide(-3, 5)` is `-1`, not the `0` that Rust's `/` yields.
/// `i64::MIN / -1` has no `i64` result and fails with [`Error::Overflow`].
pub fn floor_divide<T: Into<i64>>(a: T, b: T) -> Result<i64> {
    let (a, b) = (a.into(), b.into());
    if b == 0 {
        debug!(a, "refusing floor division by zero");
        return Err(Error::DivisionByZero);
    }

    let (Some(mut quotient), Some(remainder)) = (a.checked_div(b), a.checked_rem(b)) else {
        debug!(a, b, "floor division overflows i64");
        return Err(Error::Overflow);
    };
    if remainder != 0 && ((a < 0) != (b < 0)) {
        quotient -= 1;
    }
    trace!(a, b, quotient, "floor division");
    Ok(quotient)
}

pub fn divide_with<T: Into<i64>>(mode: DivisionMode, a: T, b: T) -> Result<Quotient> {
    let (a, b) = (a.into(), b.into());
    match mode {
        DivisionMode::TrueQuotient => divide(a, b).map(Quotient::Exact),
        DivisionMode::FloorQuotient => floor_divide(a, b).map(Quotient::Floored),
    }
}
