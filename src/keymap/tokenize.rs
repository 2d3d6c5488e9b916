//! Splitting a line of terminal input into key and button tokens.
//!
//! Whitespace separates tokens. Inside a run of non-space text the longest
//! known name wins, so `16 1/x` is sixteen followed by reciprocal and
//! `5+3=` is four tokens. A digit directly after another digit is always a
//! digit: `21/x` is `2`, `1`, `/` and an unknown `x`, never `2` then `1/x`.

use super::bindings::{BUTTON_BINDINGS, KEY_BINDINGS};
use super::resolve;
use crate::calculator::Action;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Every known name, longest first so that `log` beats `l` and
    /// `1/x` beats `1`.
    static ref KNOWN_NAME: Regex = {
        let mut names: Vec<&str> = KEY_BINDINGS
            .iter()
            .chain(BUTTON_BINDINGS.iter())
            .map(|(name, _)| *name)
            .collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        names.dedup();

        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("^(?:{})", alternation)).unwrap()
    };
}

/// One piece of input and the action it maps to, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub action: Option<Action>,
}

/// Split a line into tokens. Unknown characters become tokens without an
/// action so the caller can report them.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for word in line.split_whitespace() {
        let mut rest = word;
        let mut after_digit = false;
        while !rest.is_empty() {
            let first = rest.chars().next().map_or(rest.len(), char::len_utf8);
            let starts_with_digit = rest.starts_with(|c: char| c.is_ascii_digit());
            let len = match KNOWN_NAME.find(rest) {
                Some(_) if after_digit && starts_with_digit => first,
                Some(m) => m.end(),
                None => first,
            };
            let (text, tail) = rest.split_at(len);
            after_digit = len == 1 && starts_with_digit;
            tokens.push(Token {
                text,
                action: resolve(text).ok(),
            });
            rest = tail;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Operator, ScientificFunction};

    fn actions(line: &str) -> Vec<Option<Action>> {
        tokenize(line).into_iter().map(|t| t.action).collect()
    }

    #[test]
    fn test_compact_expression() {
        assert_eq!(
            actions("5+3="),
            vec![
                Some(Action::Input('5')),
                Some(Action::Operation(Operator::Add)),
                Some(Action::Input('3')),
                Some(Action::Calculate),
            ]
        );
    }

    #[test]
    fn test_longest_name_wins() {
        let tokens = tokenize("16 1/x");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["1", "6", "1/x"]);
        assert_eq!(
            tokens[2].action,
            Some(Action::Function(ScientificFunction::Reciprocal))
        );
    }

    #[test]
    fn test_digit_run_is_not_split_into_reciprocal() {
        let tokens = tokenize("21/x");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["2", "1", "/", "x"]);
        assert_eq!(tokens[1].action, Some(Action::Input('1')));
        assert_eq!(tokens[2].action, Some(Action::Operation(Operator::Divide)));
        assert_eq!(tokens[3].action, None);

        // After an operator the reciprocal button is still recognised
        assert_eq!(
            actions("2+1/x")[2],
            Some(Action::Function(ScientificFunction::Reciprocal))
        );
    }

    #[test]
    fn test_named_keys_and_buttons() {
        assert_eq!(
            actions("Enter Escape log ln e"),
            vec![
                Some(Action::Calculate),
                Some(Action::Clear),
                Some(Action::Function(ScientificFunction::Log)),
                Some(Action::Function(ScientificFunction::Ln)),
                Some(Action::Function(ScientificFunction::E)),
            ]
        );
    }

    #[test]
    fn test_unicode_buttons() {
        assert_eq!(
            actions("2×√"),
            vec![
                Some(Action::Input('2')),
                Some(Action::Operation(Operator::Multiply)),
                Some(Action::Function(ScientificFunction::Sqrt)),
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = tokenize("2 ? 3");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "?");
        assert_eq!(tokens[1].action, None);
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("   ").is_empty());
    }
}
