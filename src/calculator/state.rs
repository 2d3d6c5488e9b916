//! Calculator state: the display, the pending operation and the registers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Angle unit used by the trigonometric functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Convert an angle in this mode to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => value * std::f64::consts::PI / 180.0,
        }
    }

    /// Short label shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Radians => "RAD",
            Self::Degrees => "DEG",
        }
    }
}

/// A binary operator that can be pending between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    /// The symbol used in calculation labels.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Snapshot of everything the calculator shows and remembers,
/// apart from the history log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed or the last result. Never empty.
    pub display: String,
    /// Left operand of the pending operation.
    pub previous_value: Option<f64>,
    /// Pending binary operation.
    pub operation: Option<Operator>,
    /// When set, the next digit replaces the display instead of appending.
    pub waiting_for_operand: bool,
    /// Memory register.
    pub memory: f64,
    pub angle_mode: AngleMode,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            memory: 0.0,
            angle_mode: AngleMode::default(),
        }
    }
}

impl CalculatorState {
    /// Fresh state with the given angle mode.
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CalculatorState::default();
        assert_eq!(state.display, "0");
        assert_eq!(state.previous_value, None);
        assert_eq!(state.operation, None);
        assert!(!state.waiting_for_operand);
        assert_eq!(state.memory, 0.0);
        assert_eq!(state.angle_mode, AngleMode::Radians);
    }

    #[test]
    fn test_angle_mode_toggle() {
        assert_eq!(AngleMode::Radians.toggled(), AngleMode::Degrees);
        assert_eq!(AngleMode::Degrees.toggled(), AngleMode::Radians);
        assert!((AngleMode::Degrees.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    }

    #[test]
    fn test_operator_symbols() {
        let symbols: Vec<String> = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Power,
        ]
        .iter()
        .map(|op| op.to_string())
        .collect();
        assert_eq!(symbols, vec!["+", "-", "×", "÷", "^"]);
    }

    #[test]
    fn test_state_serializes_symbols() {
        let state = CalculatorState {
            operation: Some(Operator::Multiply),
            previous_value: Some(2.0),
            ..CalculatorState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"operation\":\"×\""));
        assert!(json.contains("\"angle_mode\":\"radians\""));

        let back: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
