use num_complex::Complex64;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Numeric domain a formula is parsed and evaluated over.
///
/// Mirrors what the built-in symbol set needs from a scalar: arithmetic, the
/// trigonometric/hyperbolic/exponential family, and construction from the real
/// or imaginary magnitude of a literal. Implemented for `f64` and
/// [`Complex64`].
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Value of a real literal or constant.
    fn from_re(value: f64) -> Self;

    /// Value of an imaginary literal of the given magnitude.
    fn from_im(value: f64) -> Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;
    fn pow(self, exponent: Self) -> Self;
}

impl Scalar for f64 {
    fn from_re(value: f64) -> Self {
        value
    }

    /// An imaginary literal has no value in the real domain; it yields NaN,
    /// the same way `(-1.0f64).sqrt()` does.
    fn from_im(_value: f64) -> Self {
        f64::NAN
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }
    fn cos(self) -> Self {
        f64::cos(self)
    }
    fn tan(self) -> Self {
        f64::tan(self)
    }
    fn asin(self) -> Self {
        f64::asin(self)
    }
    fn acos(self) -> Self {
        f64::acos(self)
    }
    fn atan(self) -> Self {
        f64::atan(self)
    }
    fn sinh(self) -> Self {
        f64::sinh(self)
    }
    fn cosh(self) -> Self {
        f64::cosh(self)
    }
    fn tanh(self) -> Self {
        f64::tanh(self)
    }
    fn asinh(self) -> Self {
        f64::asinh(self)
    }
    fn acosh(self) -> Self {
        f64::acosh(self)
    }
    fn atanh(self) -> Self {
        f64::atanh(self)
    }
    fn exp(self) -> Self {
        f64::exp(self)
    }
    fn ln(self) -> Self {
        f64::ln(self)
    }
    fn log10(self) -> Self {
        f64::log10(self)
    }
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    fn pow(self, exponent: Self) -> Self {
        f64::powf(self, exponent)
    }
}

impl Scalar for Complex64 {
    fn from_re(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn from_im(value: f64) -> Self {
        Complex64::new(0.0, value)
    }

    fn sin(self) -> Self {
        Complex64::sin(self)
    }
    fn cos(self) -> Self {
        Complex64::cos(self)
    }
    fn tan(self) -> Self {
        Complex64::tan(self)
    }
    fn asin(self) -> Self {
        Complex64::asin(self)
    }
    fn acos(self) -> Self {
        Complex64::acos(self)
    }
    fn atan(self) -> Self {
        Complex64::atan(self)
    }
    fn sinh(self) -> Self {
        Complex64::sinh(self)
    }
    fn cosh(self) -> Self {
        Complex64::cosh(self)
    }
    fn tanh(self) -> Self {
        Complex64::tanh(self)
    }
    fn asinh(self) -> Self {
        Complex64::asinh(self)
    }
    fn acosh(self) -> Self {
        Complex64::acosh(self)
    }
    fn atanh(self) -> Self {
        Complex64::atanh(self)
    }
    fn exp(self) -> Self {
        Complex64::exp(self)
    }
    fn ln(self) -> Self {
        Complex64::ln(self)
    }
    fn log10(self) -> Self {
        self.ln() * Complex64::new(std::f64::consts::LOG10_E, 0.0)
    }
    fn sqrt(self) -> Self {
        Complex64::sqrt(self)
    }
    fn pow(self, exponent: Self) -> Self {
        self.powc(exponent)
    }
}
