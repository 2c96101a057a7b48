//! Statement execution and expression evaluation.

use loxi_lex::TokenKind;
use loxi_par::{BinaryExpr, Expr, Literal, Stmt, UnaryExpr};

use crate::error::RuntimeError;
use crate::value::Value;

/// Runs statements in order, sending `print` output to a sink.
///
/// ```
/// use loxi_eval::Interpreter;
/// use loxi_par::{Expr, Literal, Stmt};
///
/// let mut lines = Vec::new();
/// let mut interpreter = Interpreter::new(|line: &str| lines.push(line.to_string()));
/// let program = [Stmt::Print(Expr::Literal(Literal::Bool(true)))];
/// interpreter.run(&program).unwrap();
/// assert_eq!(lines, vec!["true"]);
/// ```
pub struct Interpreter<F> {
    sink: F,
}

impl<F: FnMut(&str)> Interpreter<F> {
    /// Creates an interpreter that emits output lines through `sink`.
    pub fn new(sink: F) -> Self {
        Self { sink }
    }

    /// Executes statements sequentially, stopping at the first runtime
    /// error. Statements after the failing one do not run.
    pub fn run(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    fn execute(&mut self, statement: &Stmt) -> Result<(), RuntimeError> {
        match statement {
            Stmt::Expression(expr) => {
                eval_expr(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = eval_expr(expr)?;
                (self.sink)(&value.to_string());
                Ok(())
            }
        }
    }
}

/// Evaluates an expression to a value.
///
/// Evaluation is pure and strict: both operands of a binary operator are
/// evaluated, left first, before the operator is applied. The order is
/// observable - it decides which operand a [`RuntimeError::WrongType`]
/// reports.
pub fn eval_expr(expr: &Expr) -> Result<Value, RuntimeError> {
    match expr {
        Expr::Literal(literal) => Ok(literal_value(literal)),
        Expr::Grouping(inner) => eval_expr(inner),
        Expr::Unary(unary) => eval_unary(unary),
        Expr::Binary(binary) => eval_binary(binary),
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Number(value) => Value::Number(*value),
        Literal::Str(text) => Value::Str(text.clone()),
        Literal::Bool(value) => Value::Bool(*value),
        Literal::Nil => Value::Nil,
    }
}

fn eval_unary(unary: &UnaryExpr) -> Result<Value, RuntimeError> {
    let value = eval_expr(&unary.expr)?;
    match unary.operator.kind {
        TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
        TokenKind::Minus => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => Err(RuntimeError::WrongType {
                expected: "number",
                got: other,
            }),
        },
        // The parser only builds unary nodes for these two operators.
        ref kind => unreachable!("unary operator token {kind:?}"),
    }
}

fn eval_binary(binary: &BinaryExpr) -> Result<Value, RuntimeError> {
    let left = eval_expr(&binary.left)?;
    let right = eval_expr(&binary.right)?;

    match binary.operator.kind {
        TokenKind::Plus => add(left, right),
        TokenKind::Minus => {
            let (l, r) = numeric_operands(left, right)?;
            Ok(Value::Number(l - r))
        }
        TokenKind::Star => {
            let (l, r) = numeric_operands(left, right)?;
            Ok(Value::Number(l * r))
        }
        TokenKind::Slash => {
            let (l, r) = numeric_operands(left, right)?;
            if r == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(l / r))
            }
        }
        TokenKind::Greater => {
            let (l, r) = numeric_operands(left, right)?;
            Ok(Value::Bool(l > r))
        }
        TokenKind::GreaterEqual => {
            let (l, r) = numeric_operands(left, right)?;
            Ok(Value::Bool(l >= r))
        }
        TokenKind::Less => {
            let (l, r) = numeric_operands(left, right)?;
            Ok(Value::Bool(l < r))
        }
        TokenKind::LessEqual => {
            let (l, r) = numeric_operands(left, right)?;
            Ok(Value::Bool(l <= r))
        }
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        // The parser only builds binary nodes for operator tokens.
        ref kind => unreachable!("binary operator token {kind:?}"),
    }
}

/// Requires both operands to be numbers, reporting the left one first
/// when either fails.
fn numeric_operands(left: Value, right: Value) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((l, r)),
        (Value::Number(_), other) => Err(RuntimeError::WrongType {
            expected: "number",
            got: other,
        }),
        (other, _) => Err(RuntimeError::WrongType {
            expected: "number",
            got: other,
        }),
    }
}

/// The typing table for `+`: numbers add, strings concatenate, and a
/// mixed pair reports the operand that breaks the dominant type.
fn add(left: Value, right: Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
        (Value::Number(_), other) | (other, Value::Number(_)) => Err(RuntimeError::WrongType {
            expected: "number",
            got: other,
        }),
        (Value::Str(_), other) | (other, Value::Str(_)) => Err(RuntimeError::WrongType {
            expected: "string",
            got: other,
        }),
        (other, _) => Err(RuntimeError::WrongType {
            expected: "number or string",
            got: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluates a single expression from source.
    fn eval_source(source: &str) -> Result<Value, RuntimeError> {
        let statement = format!("{source};");
        let (tokens, scan_errors) = loxi_lex::scan(&statement);
        assert!(scan_errors.is_empty(), "scan errors: {scan_errors:?}");
        let mut results = loxi_par::parse(tokens);
        assert_eq!(results.len(), 1);
        match results.remove(0).expect("parse error") {
            Stmt::Expression(expr) => eval_expr(&expr),
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    /// Runs a full program, capturing printed lines.
    fn run_source(source: &str) -> (Vec<String>, Result<(), RuntimeError>) {
        let (tokens, scan_errors) = loxi_lex::scan(source);
        assert!(scan_errors.is_empty(), "scan errors: {scan_errors:?}");
        let statements: Vec<_> = loxi_par::parse(tokens)
            .into_iter()
            .collect::<Result<_, _>>()
            .expect("parse error");

        let mut lines = Vec::new();
        let mut interpreter = Interpreter::new(|line: &str| lines.push(line.to_string()));
        let result = interpreter.run(&statements);
        (lines, result)
    }

    // =========================================================================
    // LITERALS AND GROUPING
    // =========================================================================

    #[test]
    fn test_literals_evaluate_to_themselves() {
        assert_eq!(eval_source("true"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("false"), Ok(Value::Bool(false)));
        assert_eq!(eval_source("nil"), Ok(Value::Nil));
        assert_eq!(eval_source("2.5"), Ok(Value::Number(2.5)));
        assert_eq!(eval_source("\"hi\""), Ok(Value::Str("hi".into())));
    }

    #[test]
    fn test_grouping_is_transparent() {
        assert_eq!(eval_source("(((42)))"), Ok(Value::Number(42.0)));
    }

    // =========================================================================
    // UNARY OPERATORS
    // =========================================================================

    #[test]
    fn test_negation() {
        assert_eq!(eval_source("-3"), Ok(Value::Number(-3.0)));
        assert_eq!(eval_source("--3"), Ok(Value::Number(3.0)));
    }

    #[test]
    fn test_negation_requires_a_number() {
        assert_eq!(
            eval_source("-\"x\""),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Str("x".into()),
            })
        );
        assert_eq!(
            eval_source("-nil"),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Nil,
            })
        );
    }

    #[test]
    fn test_bang_applies_truthiness() {
        assert_eq!(eval_source("!true"), Ok(Value::Bool(false)));
        assert_eq!(eval_source("!nil"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("!0"), Ok(Value::Bool(false)));
        assert_eq!(eval_source("!\"\""), Ok(Value::Bool(false)));
    }

    #[test]
    fn test_double_bang_is_truthiness() {
        // !!e is the truthiness of e, for every variant.
        for (source, truthy) in [
            ("1", true),
            ("0", true),
            ("\"\"", true),
            ("true", true),
            ("false", false),
            ("nil", false),
        ] {
            assert_eq!(
                eval_source(&format!("!!{source}")),
                Ok(Value::Bool(truthy)),
                "source: {source}"
            );
        }
    }

    // =========================================================================
    // ARITHMETIC
    // =========================================================================

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_source("1 + 2"), Ok(Value::Number(3.0)));
        assert_eq!(eval_source("5 - 2.5"), Ok(Value::Number(2.5)));
        assert_eq!(eval_source("4 * 2.5"), Ok(Value::Number(10.0)));
        assert_eq!(eval_source("7 / 2"), Ok(Value::Number(3.5)));
    }

    #[test]
    fn test_left_associative_subtraction_result() {
        assert_eq!(eval_source("1 - 2 - 3"), Ok(Value::Number(-4.0)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_source("1 / 0"), Err(RuntimeError::DivisionByZero));
        assert_eq!(eval_source("0 / 0"), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn test_arithmetic_reports_first_non_number() {
        assert_eq!(
            eval_source("nil - 1"),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Nil,
            })
        );
        assert_eq!(
            eval_source("1 * true"),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Bool(true),
            })
        );
    }

    // =========================================================================
    // THE + TYPING TABLE
    // =========================================================================

    #[test]
    fn test_plus_concatenates_strings() {
        assert_eq!(
            eval_source("\"foo\" + \"bar\""),
            Ok(Value::Str("foobar".into()))
        );
    }

    #[test]
    fn test_plus_number_with_non_number() {
        assert_eq!(
            eval_source("1 + \"x\""),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Str("x".into()),
            })
        );
        assert_eq!(
            eval_source("nil + 1"),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Nil,
            })
        );
    }

    #[test]
    fn test_plus_string_with_non_string() {
        assert_eq!(
            eval_source("\"x\" + true"),
            Err(RuntimeError::WrongType {
                expected: "string",
                got: Value::Bool(true),
            })
        );
        assert_eq!(
            eval_source("nil + \"x\""),
            Err(RuntimeError::WrongType {
                expected: "string",
                got: Value::Nil,
            })
        );
    }

    #[test]
    fn test_plus_with_neither_number_nor_string() {
        assert_eq!(
            eval_source("nil + true"),
            Err(RuntimeError::WrongType {
                expected: "number or string",
                got: Value::Nil,
            })
        );
    }

    // =========================================================================
    // COMPARISON AND EQUALITY
    // =========================================================================

    #[test]
    fn test_comparisons() {
        assert_eq!(eval_source("1 < 2"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("2 <= 2"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("1 > 2"), Ok(Value::Bool(false)));
        assert_eq!(eval_source("2 >= 3"), Ok(Value::Bool(false)));
    }

    #[test]
    fn test_comparisons_require_numbers() {
        assert_eq!(
            eval_source("\"a\" < \"b\""),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Str("a".into()),
            })
        );
    }

    #[test]
    fn test_equality_never_errors() {
        assert_eq!(eval_source("1 == 1"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("1 == \"1\""), Ok(Value::Bool(false)));
        assert_eq!(eval_source("nil == nil"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("nil != false"), Ok(Value::Bool(true)));
        assert_eq!(eval_source("\"a\" == \"a\""), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_left_operand_evaluates_first() {
        // Both operands are bad, but the left one is reported.
        assert_eq!(
            eval_source("nil - true"),
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Nil,
            })
        );
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let statement = "(1 + 2) * 3 == 9";
        assert_eq!(eval_source(statement), eval_source(statement));
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    #[test]
    fn test_print_emits_one_line() {
        let (lines, result) = run_source("print true;");
        assert!(result.is_ok());
        assert_eq!(lines, vec!["true"]);
    }

    #[test]
    fn test_print_number_rendering() {
        let (lines, _) = run_source("print 1 + 2; print 7 / 2;");
        assert_eq!(lines, vec!["3.0", "3.5"]);
    }

    #[test]
    fn test_print_string_has_no_quotes() {
        let (lines, _) = run_source("print \"hi\" + \" there\";");
        assert_eq!(lines, vec!["hi there"]);
    }

    #[test]
    fn test_expression_statement_discards_value() {
        let (lines, result) = run_source("1 + 2; print nil;");
        assert!(result.is_ok());
        assert_eq!(lines, vec!["nil"]);
    }

    #[test]
    fn test_runtime_error_stops_execution() {
        let (lines, result) = run_source("print 1; print 1 / 0; print 2;");
        assert_eq!(result, Err(RuntimeError::DivisionByZero));
        // The failing print emits nothing, and the third never runs.
        assert_eq!(lines, vec!["1.0"]);
    }

    #[test]
    fn test_failed_print_emits_nothing() {
        let (lines, result) = run_source("print 1 + \"x\";");
        assert_eq!(
            result,
            Err(RuntimeError::WrongType {
                expected: "number",
                got: Value::Str("x".into()),
            })
        );
        assert!(lines.is_empty());
    }
}
