//! The calculator controller: owns the state and the history and applies
//! one event at a time.
//!
//! Operators are evaluated left to right as they are pressed, with no
//! precedence: `2 + 3 × 4 =` gives 20.

use super::action::Action;
use super::detection::parse_operand;
use super::evaluation::{ScientificFunction, perform_calculation};
use super::format::format_number;
use super::state::{AngleMode, CalculatorState, Operator};
use crate::error::{Result, ScicalError};
use crate::history::{History, HistoryEntry};
use tracing::debug;

/// Scientific calculator with memory and history.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calculator around an existing history, starting in `angle_mode`.
    pub fn with_history(angle_mode: AngleMode, history: History) -> Self {
        Self {
            state: CalculatorState::with_angle_mode(angle_mode),
            history,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn memory(&self) -> f64 {
        self.state.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode
    }

    /// Apply one event.
    ///
    /// Only selecting a history position that does not exist fails; every
    /// other event always succeeds.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, display = %self.state.display, "dispatch");

        match action {
            Action::Input(c) => self.input_digit_or_symbol(c),
            Action::Operation(op) => self.input_operation(op),
            Action::Calculate => self.calculate(),
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::ToggleAngleMode => self.toggle_angle_mode(),
            Action::Function(f) => self.scientific_function(f),
            Action::MemoryStore => self.memory_store(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemoryClear => self.memory_clear(),
            Action::SelectHistory(index) => self.select_history(index)?,
            Action::ClearHistory => self.clear_history(),
        }

        Ok(())
    }

    /// Type a digit, decimal point or parenthesis.
    ///
    /// Nothing is validated: `1.2.3` and `(5` are accepted as typed.
    pub fn input_digit_or_symbol(&mut self, token: char) {
        let state = &mut self.state;
        if state.waiting_for_operand {
            state.display = token.to_string();
            state.waiting_for_operand = false;
        } else if state.display == "0" {
            state.display = token.to_string();
        } else {
            state.display.push(token);
        }
    }

    /// Press a binary operator, folding any pending operation first.
    pub fn input_operation(&mut self, op: Operator) {
        let input = parse_operand(&self.state.display);

        match (self.state.previous_value, self.state.operation) {
            (None, _) => self.state.previous_value = Some(input),
            (Some(previous), Some(pending)) => {
                // A NaN or zero (either sign) left operand folds as plain 0
                let previous = if previous.is_nan() || previous == 0.0 {
                    0.0
                } else {
                    previous
                };
                let value = perform_calculation(previous, input, pending);
                self.state.display = format_number(value);
                self.state.previous_value = Some(value);
            }
            (Some(_), None) => {}
        }

        self.state.operation = Some(op);
        self.state.waiting_for_operand = true;
    }

    /// `=`: finish the pending operation and record it.
    ///
    /// Does nothing when no operation is pending.
    pub fn calculate(&mut self) {
        let (Some(previous), Some(op)) = (self.state.previous_value, self.state.operation) else {
            return;
        };

        let input = parse_operand(&self.state.display);
        let value = perform_calculation(previous, input, op);
        let calculation = format!(
            "{} {} {}",
            format_number(previous),
            op,
            format_number(input)
        );
        let result = format_number(value);

        self.history.record(calculation, result.clone());
        self.state.display = result;
        self.state.previous_value = None;
        self.state.operation = None;
        self.state.waiting_for_operand = true;
    }

    /// Reset the display and the pending operation. Memory, angle mode
    /// and history are kept.
    pub fn clear(&mut self) {
        self.state.display = "0".to_string();
        self.state.previous_value = None;
        self.state.operation = None;
        self.state.waiting_for_operand = false;
    }

    /// Remove the last character of the display.
    pub fn backspace(&mut self) {
        let display = &mut self.state.display;
        if display.chars().count() > 1 {
            display.pop();
        } else {
            *display = "0".to_string();
        }
    }

    pub fn toggle_angle_mode(&mut self) {
        self.state.angle_mode = self.state.angle_mode.toggled();
    }

    /// Apply a single-operand function to the display value and record it.
    pub fn scientific_function(&mut self, function: ScientificFunction) {
        let value = parse_operand(&self.state.display);
        let result = format_number(function.apply(value, self.state.angle_mode));

        self.history.record(function.label(value), result.clone());
        self.state.display = result;
        self.state.waiting_for_operand = true;
    }

    /// MS: store the display value in memory.
    pub fn memory_store(&mut self) {
        self.state.memory = parse_operand(&self.state.display);
    }

    /// MR: show the memory value.
    pub fn memory_recall(&mut self) {
        self.state.display = format_number(self.state.memory);
        self.state.waiting_for_operand = true;
    }

    /// M+: add the display value to memory.
    pub fn memory_add(&mut self) {
        self.state.memory += parse_operand(&self.state.display);
    }

    /// MC
    pub fn memory_clear(&mut self) {
        self.state.memory = 0.0;
    }

    /// Put a history result back on the display as the next operand.
    pub fn select_entry(&mut self, entry: &HistoryEntry) {
        self.state.display = entry.result().to_string();
        self.state.waiting_for_operand = true;
    }

    /// Like [`select_entry`](Self::select_entry), by position (0 = newest).
    pub fn select_history(&mut self, index: usize) -> Result<()> {
        let entry = self
            .history
            .get(index)
            .cloned()
            .ok_or(ScicalError::HistoryIndex {
                index,
                len: self.history.len(),
            })?;
        self.select_entry(&entry);
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            calc.input_digit_or_symbol(c);
        }
    }

    #[test]
    fn test_digit_entry_concatenates() {
        let mut calc = Calculator::new();
        press(&mut calc, "0123");
        assert_eq!(calc.display(), "123");
    }

    #[test]
    fn test_digit_replaces_after_operator() {
        let mut calc = Calculator::new();
        press(&mut calc, "12");
        calc.input_operation(Operator::Add);
        press(&mut calc, "7");
        assert_eq!(calc.display(), "7");
        assert!(!calc.state().waiting_for_operand);
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        press(&mut calc, "5");
        calc.input_operation(Operator::Add);
        press(&mut calc, "3");
        calc.calculate();

        assert_eq!(calc.display(), "8");
        let entry = calc.history().latest().unwrap();
        assert_eq!(entry.calculation(), "5 + 3");
        assert_eq!(entry.result(), "8");
        assert_eq!(calc.state().previous_value, None);
        assert_eq!(calc.state().operation, None);
        assert!(calc.state().waiting_for_operand);
    }

    #[test]
    fn test_chained_operators_fold_left_to_right() {
        let mut calc = Calculator::new();
        press(&mut calc, "2");
        calc.input_operation(Operator::Add);
        press(&mut calc, "3");
        calc.input_operation(Operator::Multiply);
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.state().previous_value, Some(5.0));

        press(&mut calc, "4");
        calc.calculate();
        assert_eq!(calc.display(), "20");
        assert_eq!(calc.history().latest().unwrap().calculation(), "5 × 4");
        // Operators alone never record history
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_repeated_operator_reapplies_pending() {
        let mut calc = Calculator::new();
        press(&mut calc, "6");
        calc.input_operation(Operator::Add);
        calc.input_operation(Operator::Subtract);
        // 6 + 6 folded, now subtracting
        assert_eq!(calc.display(), "12");
        assert_eq!(calc.state().operation, Some(Operator::Subtract));
    }

    #[test]
    fn test_calculate_without_pending_is_noop() {
        let mut calc = Calculator::new();
        press(&mut calc, "42");
        calc.calculate();
        assert_eq!(calc.display(), "42");
        assert!(calc.history().is_empty());
        assert!(!calc.state().waiting_for_operand);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        let mut calc = Calculator::new();
        press(&mut calc, "9");
        calc.input_operation(Operator::Divide);
        press(&mut calc, "0");
        calc.calculate();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history().latest().unwrap().calculation(), "9 ÷ 0");
    }

    #[test]
    fn test_power() {
        let mut calc = Calculator::new();
        press(&mut calc, "2");
        calc.input_operation(Operator::Power);
        press(&mut calc, "10");
        calc.calculate();
        assert_eq!(calc.display(), "1024");
    }

    #[test]
    fn test_clear_keeps_memory_and_history() {
        let mut calc = Calculator::new();
        press(&mut calc, "4");
        calc.memory_store();
        calc.input_operation(Operator::Add);
        press(&mut calc, "4");
        calc.calculate();
        calc.input_operation(Operator::Multiply);
        calc.clear();

        assert_eq!(calc.display(), "0");
        assert_eq!(calc.state().previous_value, None);
        assert_eq!(calc.state().operation, None);
        assert!(!calc.state().waiting_for_operand);
        assert_eq!(calc.memory(), 4.0);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        press(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.display(), "12");
        calc.backspace();
        calc.backspace();
        assert_eq!(calc.display(), "0");
        calc.backspace();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_backspace_on_result_text() {
        let mut calc = Calculator::new();
        calc.scientific_function(ScientificFunction::Pi);
        calc.backspace();
        assert_eq!(calc.display(), "3.14159265358979");
    }

    #[test]
    fn test_scientific_functions_record_history() {
        let mut calc = Calculator::new();
        calc.scientific_function(ScientificFunction::Sqrt);
        assert_eq!(calc.display(), "0");
        let entry = calc.history().latest().unwrap();
        assert_eq!(entry.calculation(), "√(0)");
        assert_eq!(entry.result(), "0");
        assert!(calc.state().waiting_for_operand);
    }

    #[test]
    fn test_reciprocal() {
        let mut calc = Calculator::new();
        press(&mut calc, "16");
        calc.scientific_function(ScientificFunction::Reciprocal);
        assert_eq!(calc.display(), "0.0625");
        assert_eq!(calc.history().latest().unwrap().calculation(), "1/(16)");
    }

    #[test]
    fn test_factorial_function() {
        let mut calc = Calculator::new();
        press(&mut calc, "9");
        calc.scientific_function(ScientificFunction::Factorial);
        assert_eq!(calc.display(), "362880");
        assert_eq!(calc.history().latest().unwrap().calculation(), "9!");
    }

    #[test]
    fn test_function_result_is_replaced_by_next_digit() {
        let mut calc = Calculator::new();
        press(&mut calc, "3");
        calc.scientific_function(ScientificFunction::Square);
        assert_eq!(calc.display(), "9");
        press(&mut calc, "2");
        assert_eq!(calc.display(), "2");
    }

    #[test]
    fn test_degrees_mode() {
        let mut calc = Calculator::new();
        calc.toggle_angle_mode();
        assert_eq!(calc.angle_mode(), AngleMode::Degrees);
        press(&mut calc, "90");
        calc.scientific_function(ScientificFunction::Sin);
        assert_eq!(calc.display(), "1");
        assert_eq!(calc.history().latest().unwrap().calculation(), "sin(90)");
    }

    #[test]
    fn test_memory_operations() {
        let mut calc = Calculator::new();
        press(&mut calc, "7");
        calc.memory_store();
        calc.clear();
        calc.memory_recall();
        assert_eq!(calc.display(), "7");
        assert!(calc.state().waiting_for_operand);

        press(&mut calc, "3");
        calc.memory_add();
        assert_eq!(calc.memory(), 10.0);

        calc.memory_clear();
        assert_eq!(calc.memory(), 0.0);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_select_history_entry() {
        let mut calc = Calculator::new();
        press(&mut calc, "5");
        calc.input_operation(Operator::Multiply);
        press(&mut calc, "5");
        calc.calculate();
        calc.clear();

        calc.select_history(0).unwrap();
        assert_eq!(calc.display(), "25");
        assert!(calc.state().waiting_for_operand);

        press(&mut calc, "1");
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_select_missing_history_entry() {
        let mut calc = Calculator::new();
        let err = calc.dispatch(Action::SelectHistory(3)).unwrap_err();
        assert!(matches!(err, ScicalError::HistoryIndex { index: 3, len: 0 }));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_malformed_display_propagates_nan() {
        let mut calc = Calculator::new();
        press(&mut calc, "(5");
        calc.input_operation(Operator::Add);
        press(&mut calc, "1");
        calc.calculate();
        assert_eq!(calc.display(), "NaN");
        assert_eq!(calc.history().latest().unwrap().calculation(), "NaN + 1");
    }

    #[test]
    fn test_nan_pending_operand_folds_as_zero() {
        let mut calc = Calculator::new();
        press(&mut calc, "(");
        calc.input_operation(Operator::Add);
        press(&mut calc, "4");
        calc.input_operation(Operator::Add);
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_negative_zero_pending_operand_folds_as_zero() {
        let mut calc = Calculator::new();
        press(&mut calc, "0");
        calc.input_operation(Operator::Subtract);
        press(&mut calc, "1");
        calc.calculate();
        calc.memory_store();
        calc.clear();

        // -1 × 0 leaves -0 pending under ^
        calc.memory_recall();
        calc.input_operation(Operator::Multiply);
        press(&mut calc, "0");
        calc.input_operation(Operator::Power);
        assert_eq!(calc.state().previous_value, Some(0.0));

        calc.memory_recall();
        calc.input_operation(Operator::Add);
        assert_eq!(calc.display(), "Infinity");
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut calc = Calculator::new();
        for action in [
            Action::Input('1'),
            Action::Input('2'),
            Action::Operation(Operator::Subtract),
            Action::Input('2'),
            Action::Calculate,
        ] {
            calc.dispatch(action).unwrap();
        }
        assert_eq!(calc.display(), "10");

        calc.dispatch(Action::ClearHistory).unwrap();
        assert!(calc.history().is_empty());
    }
}
