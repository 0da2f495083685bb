//! Line tokenizer
//!
//! Lowercases a raw input line and splits it on whitespace. Keywords and
//! operator names are matched case-sensitively downstream, so every token
//! leaving this module is already lowercase.

/// Split a line into lowercase whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
