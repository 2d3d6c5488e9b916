//! Text rendering of the calculator screen and the history list.

use crate::calculator::{CalculatorState, format_grouped, format_number, is_well_formed};
use crate::history::History;

/// Render the calculator screen.
///
/// The first line is the status: angle mode, the memory indicator when
/// memory is non-zero, and the pending operation. The second line is the
/// display with an `= ` prefix, like a calculator result.
pub fn render_screen(state: &CalculatorState, group_digits: bool) -> String {
    let mut status = format!("[{}]", state.angle_mode.label());

    if state.memory != 0.0 {
        status.push_str(&format!(" M: {}", format_number(state.memory)));
    }

    if let (Some(previous), Some(op)) = (state.previous_value, state.operation) {
        status.push_str(&format!("  {} {}", format_number(previous), op));
    }

    let display = if group_digits {
        format_grouped(&state.display)
    } else {
        state.display.clone()
    };

    // Flag displays that will not read back as typed
    let marker = if is_well_formed(&state.display) {
        ""
    } else {
        "  (?)"
    };

    format!("{}\n= {}{}", status, display, marker)
}

/// Render the history, newest first, numbered from 1.
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "No calculations yet".to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>2}. {} = {}  [{}]",
                i + 1,
                entry.calculation(),
                entry.result(),
                entry.timestamp()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub const HELP: &str = "\
Type keys or buttons, separated by spaces where they would run together:
  digits . ( )        enter the operand
  + - * / × ÷ ^       operators
  = Enter             calculate
  AC C Escape         clear
  ⌫ BS Backspace      delete last character
  RAD DEG             toggle angle mode
  sin cos tan ln log ! √ sqrt x² x^2 1/x π pi e
  MS MR M+ MC         memory
Write `21 1/x` for the reciprocal of 21; `21/x` reads as 21 then `/`.
Commands:
  :history [--json]   list calculations
  :pick N             reuse the result of history entry N
  :clear-history      forget all calculations
  :state              show the calculator state as JSON
  :copy               copy the display to the clipboard
  :help               this text
  :quit               exit";
