//! Edge case tests for loxi-lex
