//! Command definitions
//!
//! Each input line is classified into exactly one [`Command`] by its shape.

/// A single classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `print <register>`
    Print { register: String },

    /// `<register> <operator> <operand>`; operator and operand stay uninterpreted
    Define {
        register: String,
        operator: String,
        operand: String,
    },

    /// `quit`
    Quit,

    /// Empty or whitespace-only line
    Blank,
}
