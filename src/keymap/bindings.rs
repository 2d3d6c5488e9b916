//! Static binding tables.

use crate::calculator::{Action, Operator, ScientificFunction};

/// Keyboard keys, named as a browser or terminal key event reports them.
pub const KEY_BINDINGS: &[(&str, Action)] = &[
    ("0", Action::Input('0')),
    ("1", Action::Input('1')),
    ("2", Action::Input('2')),
    ("3", Action::Input('3')),
    ("4", Action::Input('4')),
    ("5", Action::Input('5')),
    ("6", Action::Input('6')),
    ("7", Action::Input('7')),
    ("8", Action::Input('8')),
    ("9", Action::Input('9')),
    (".", Action::Input('.')),
    ("(", Action::Input('(')),
    (")", Action::Input(')')),
    ("+", Action::Operation(Operator::Add)),
    ("-", Action::Operation(Operator::Subtract)),
    ("*", Action::Operation(Operator::Multiply)),
    ("/", Action::Operation(Operator::Divide)),
    ("Enter", Action::Calculate),
    ("=", Action::Calculate),
    ("Escape", Action::Clear),
    ("Backspace", Action::Backspace),
];

/// Calculator buttons by label, plus plain-ASCII aliases for typing them.
pub const BUTTON_BINDINGS: &[(&str, Action)] = &[
    ("AC", Action::Clear),
    ("⌫", Action::Backspace),
    ("RAD", Action::ToggleAngleMode),
    ("DEG", Action::ToggleAngleMode),
    ("^", Action::Operation(Operator::Power)),
    ("÷", Action::Operation(Operator::Divide)),
    ("×", Action::Operation(Operator::Multiply)),
    ("-", Action::Operation(Operator::Subtract)),
    ("+", Action::Operation(Operator::Add)),
    ("=", Action::Calculate),
    ("sin", Action::Function(ScientificFunction::Sin)),
    ("cos", Action::Function(ScientificFunction::Cos)),
    ("tan", Action::Function(ScientificFunction::Tan)),
    ("ln", Action::Function(ScientificFunction::Ln)),
    ("log", Action::Function(ScientificFunction::Log)),
    ("!", Action::Function(ScientificFunction::Factorial)),
    ("√", Action::Function(ScientificFunction::Sqrt)),
    ("x²", Action::Function(ScientificFunction::Square)),
    ("1/x", Action::Function(ScientificFunction::Reciprocal)),
    ("π", Action::Function(ScientificFunction::Pi)),
    ("e", Action::Function(ScientificFunction::E)),
    ("(", Action::Input('(')),
    (")", Action::Input(')')),
    ("0", Action::Input('0')),
    ("1", Action::Input('1')),
    ("2", Action::Input('2')),
    ("3", Action::Input('3')),
    ("4", Action::Input('4')),
    ("5", Action::Input('5')),
    ("6", Action::Input('6')),
    ("7", Action::Input('7')),
    ("8", Action::Input('8')),
    ("9", Action::Input('9')),
    (".", Action::Input('.')),
    ("MS", Action::MemoryStore),
    ("MR", Action::MemoryRecall),
    ("M+", Action::MemoryAdd),
    ("MC", Action::MemoryClear),
    // ASCII aliases
    ("C", Action::Clear),
    ("BS", Action::Backspace),
    ("sqrt", Action::Function(ScientificFunction::Sqrt)),
    ("x^2", Action::Function(ScientificFunction::Square)),
    ("pi", Action::Function(ScientificFunction::Pi)),
    ("fact", Action::Function(ScientificFunction::Factorial)),
];
