//! Edge case tests for loxi-par, mostly around panic-mode recovery.
