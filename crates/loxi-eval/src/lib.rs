//! loxi-eval - Tree-walking evaluator for Lox.
//!
//! Statements execute in source order and stop at the first runtime
//! error. Expression evaluation is pure - this core has no variables and
//! no environment - so [`eval_expr`] is a free function, and only the
//! [`Interpreter`] holding the output sink carries state.
//!
//! ```
//! use loxi_eval::{eval_expr, Value};
//! use loxi_par::{Expr, Literal};
//!
//! let expr = Expr::Literal(Literal::Number(2.5));
//! assert_eq!(eval_expr(&expr), Ok(Value::Number(2.5)));
//! ```

mod error;
mod interp;
mod value;

pub use error::RuntimeError;
pub use interp::{eval_expr, Interpreter};
pub use value::Value;
