//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, dispatch, and the `scan` entry point
//! - `comment` - whitespace and line-comment skipping
//! - `operator` - one- and two-character operators (maximal munch)
//! - `number` - number literals
//! - `string` - string literals
//! - `identifier` - identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, Scanner};
