//! Arithmetic and scientific functions.
//!
//! Nothing here signals errors: undefined results (division by zero,
//! logarithm of a non-positive number, and so on) are mapped to 0.

use super::format::format_number;
use super::state::{AngleMode, Operator};
use std::fmt;

/// Largest `n` whose factorial still fits in an `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

/// Apply a binary operator. Division by zero yields 0.
pub fn perform_calculation(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b != 0.0 {
                a / b
            } else {
                0.0
            }
        }
        Operator::Power => a.powf(b),
    }
}

/// Recursive factorial.
///
/// Returns 0 outside `0..=170` (the result would overflow) and for
/// non-finite input.
pub fn factorial(n: f64) -> f64 {
    if !n.is_finite() || !(0.0..=MAX_FACTORIAL).contains(&n) {
        return 0.0;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    n * factorial(n - 1.0)
}

/// A single-operand function applied to the display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Square,
    Reciprocal,
    Factorial,
    Pi,
    E,
}

impl ScientificFunction {
    /// The button label.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
            Self::Factorial => "!",
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// Compute the function for `value`.
    ///
    /// Trigonometric functions interpret `value` in `angle_mode`.
    pub fn apply(self, value: f64, angle_mode: AngleMode) -> f64 {
        match self {
            Self::Sin => angle_mode.to_radians(value).sin(),
            Self::Cos => angle_mode.to_radians(value).cos(),
            Self::Tan => angle_mode.to_radians(value).tan(),
            Self::Ln => {
                if value > 0.0 {
                    value.ln()
                } else {
                    0.0
                }
            }
            Self::Log => {
                if value > 0.0 {
                    value.log10()
                } else {
                    0.0
                }
            }
            Self::Sqrt => {
                if value >= 0.0 {
                    value.sqrt()
                } else {
                    0.0
                }
            }
            Self::Square => value * value,
            Self::Reciprocal => {
                if value != 0.0 {
                    1.0 / value
                } else {
                    0.0
                }
            }
            Self::Factorial => factorial(value.abs().floor()),
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// The calculation text recorded in the history.
    pub fn label(self, value: f64) -> String {
        let v = format_number(value);
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Ln | Self::Log => {
                format!("{}({})", self.symbol(), v)
            }
            Self::Sqrt => format!("√({})", v),
            Self::Square => format!("{}²", v),
            Self::Reciprocal => format!("1/({})", v),
            Self::Factorial => format!("{}!", format_number(value.abs().floor())),
            Self::Pi => "π".to_string(),
            Self::E => "e".to_string(),
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
