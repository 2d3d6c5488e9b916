//! Events the calculator reacts to.

use super::evaluation::ScientificFunction;
use super::state::Operator;

/// One user event, already resolved from a key press or button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Append a digit, `.`, `(` or `)` to the display.
    Input(char),
    /// Press a binary operator.
    Operation(Operator),
    /// `=`
    Calculate,
    Clear,
    Backspace,
    ToggleAngleMode,
    Function(ScientificFunction),
    MemoryStore,
    MemoryRecall,
    MemoryAdd,
    MemoryClear,
    /// Reuse the result of the history entry at this position (0 = newest).
    SelectHistory(usize),
    ClearHistory,
}
