//! Calculator core.
//!
//! This module provides:
//! - The calculator state and the [`Calculator`] controller that reduces
//!   digit, operator, function and memory events into it
//! - Arithmetic and scientific functions
//! - Lenient reading and consistent formatting of display numbers
//! - Copying results to the clipboard

mod action;
mod clipboard;
mod detection;
mod engine;
mod evaluation;
mod format;
mod state;

pub use action::Action;
pub use clipboard::copy_to_clipboard;
pub use detection::{is_well_formed, parse_operand};
pub use engine::Calculator;
pub use evaluation::{MAX_FACTORIAL, ScientificFunction, factorial, perform_calculation};
pub use format::{format_grouped, format_number};
pub use state::{AngleMode, CalculatorState, Operator};
