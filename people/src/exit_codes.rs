//! Stable exit codes for people CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid roster, unknown name, bad operands, or any other error.
pub const INVALID: i32 = 1;
/// `people calc` result is undefined (division by zero).
pub const UNDEFINED: i32 = 2;
