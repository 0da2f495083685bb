// Constants for the register interpreter

/// Default limit on nested register resolution during a single drain
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 256;

/// Keyword that prints a register's evaluated value
pub const PRINT_KEYWORD: &str = "print";

/// Keyword that stops processing further lines
pub const QUIT_KEYWORD: &str = "quit";
