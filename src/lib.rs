//! scical - a scientific calculator with memory and a bounded history.
//!
//! The [`Calculator`] reduces digit, operator, function and memory events
//! into a [`CalculatorState`]. Completed calculations are recorded in a
//! newest-first [`History`]. Events come from key names and button labels
//! through the static tables in [`keymap`].
//!
//! ```
//! use scical::{Calculator, keymap};
//!
//! let mut calc = Calculator::new();
//! keymap::apply_line(&mut calc, "5 + 3 =").unwrap();
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history().latest().unwrap().calculation(), "5 + 3");
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod keymap;
pub mod logging;
pub mod ui;

pub use calculator::{Action, AngleMode, Calculator, CalculatorState, Operator, ScientificFunction};
pub use config::Config;
pub use error::{Result, ScicalError};
pub use history::{History, HistoryEntry};
