//! Stateless arithmetic helpers.
//!
//! Division by zero is a normal, typed outcome ([`ArithError::DivideByZero`])
//! rather than a panic or a non-numeric value.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("cannot divide by 0")]
    DivideByZero,
    #[error("{0} needs a second operand")]
    MissingOperand(Operation),
    #[error("{0} takes a single operand")]
    UnexpectedOperand(Operation),
    #[error("{0} overflows a 128-bit integer")]
    Overflow(Operation),
    #[error("unknown operation '{0}' (expected add, subtract, multiply, divide or square)")]
    UnknownOperation(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

pub fn add<T: Add<Output = T>>(x: T, y: T) -> T {
    x + y
}

pub fn subtract<T: Sub<Output = T>>(x: T, y: T) -> T {
    x - y
}

pub fn multiply<T: Mul<Output = T>>(x: T, y: T) -> T {
    x * y
}

/// Widening conversion used by [`divide`].
///
/// Integers wider than 53 bits may round, as with an `as f64` cast.
pub trait ToF64: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_to_f64 {
    ($($ty:ty),*) => {
        $(impl ToF64 for $ty {
            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_to_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// True division of `x` by `y`.
///
/// Any primitive number is accepted and widened to `f64`, so `divide(7, 2)`
/// is `3.5` and `divide(10_i64, 2_i64)` is `5.0`.
pub fn divide<X: ToF64, Y: ToF64>(x: X, y: Y) -> Result<f64, ArithError> {
    let (x, y) = (x.to_f64(), y.to_f64());
    if y == 0.0 {
        return Err(ArithError::DivideByZero);
    }
    Ok(x / y)
}

pub fn square<T: Mul<Output = T> + Copy>(x: T) -> T {
    x * x
}

/// A command-line operand: exact when whole, floating otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn to_f64(self) -> f64 {
        match self {
            Number::Int(value) => value.to_f64(),
            Number::Float(value) => value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

impl FromStr for Number {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i128>() {
            return Ok(Number::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ArithError::InvalidNumber(s.to_string()))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// One of the helpers, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Square,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Square => "square",
        }
    }

    /// Number of operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Square => 1,
            _ => 2,
        }
    }

    /// Apply the operation; `y` must be present exactly when `arity() == 2`.
    ///
    /// Whole operands stay exact (`Overflow` past `i128`); a float on either
    /// side makes the result a float. `divide` always yields a float.
    pub fn apply(self, x: Number, y: Option<Number>) -> Result<Number, ArithError> {
        let y = match (self, y) {
            (Operation::Square, Some(_)) => return Err(ArithError::UnexpectedOperand(self)),
            (Operation::Square, None) => x,
            (_, None) => return Err(ArithError::MissingOperand(self)),
            (_, Some(y)) => y,
        };
        match (x, y) {
            (Number::Int(x), Number::Int(y)) => self.apply_int(x, y),
            _ => self.apply_float(x.to_f64(), y.to_f64()),
        }
    }

    fn apply_int(self, x: i128, y: i128) -> Result<Number, ArithError> {
        let value = match self {
            Operation::Add => x.checked_add(y),
            Operation::Subtract => x.checked_sub(y),
            Operation::Multiply | Operation::Square => x.checked_mul(y),
            Operation::Divide => return divide(x, y).map(Number::Float),
        };
        value.map(Number::Int).ok_or(ArithError::Overflow(self))
    }

    fn apply_float(self, x: f64, y: f64) -> Result<Number, ArithError> {
        let value = match self {
            Operation::Add => add(x, y),
            Operation::Subtract => subtract(x, y),
            Operation::Multiply => multiply(x, y),
            Operation::Square => square(x),
            Operation::Divide => divide(x, y)?,
        };
        Ok(Number::Float(value))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ArithError::UnknownOperation(s.to_string()))
    }
}
