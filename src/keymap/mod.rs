//! Mapping from key names and button labels to calculator actions.
//!
//! Both mappings are plain lookup tables; a line of terminal input is split
//! into tokens against the union of the two.

mod bindings;
mod tokenize;

pub use bindings::{BUTTON_BINDINGS, KEY_BINDINGS};
pub use tokenize::{Token, tokenize};

use crate::calculator::{Action, Calculator};
use crate::error::{Result, ScicalError};

/// Action for a keyboard key, e.g. `"7"`, `"*"` or `"Enter"`.
pub fn key_action(key: &str) -> Option<Action> {
    lookup(KEY_BINDINGS, key)
}

/// Action for a button label or alias, e.g. `"√"`, `"sqrt"` or `"M+"`.
pub fn button_action(label: &str) -> Option<Action> {
    lookup(BUTTON_BINDINGS, label)
}

/// Resolve a single token, trying buttons before keys.
pub fn resolve(token: &str) -> Result<Action> {
    button_action(token)
        .or_else(|| key_action(token))
        .ok_or_else(|| ScicalError::unknown_token(token))
}

/// Tokenize `line` and apply every known token to `calculator`.
///
/// Unknown tokens are skipped and returned in input order so the caller
/// can report them.
pub fn apply_line<'a>(calculator: &mut Calculator, line: &'a str) -> Result<Vec<&'a str>> {
    let mut unknown = Vec::new();
    for token in tokenize(line) {
        match token.action {
            Some(action) => calculator.dispatch(action)?,
            None => unknown.push(token.text),
        }
    }
    Ok(unknown)
}

fn lookup(table: &[(&str, Action)], name: &str) -> Option<Action> {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, action)| *action)
}
