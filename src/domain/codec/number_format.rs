//! Locale-style rendering of integer and decimal digit strings

use serde::{Deserialize, Serialize};

/// Separators and precision used when rendering amounts for humans.
///
/// The default matches the `en-US` convention: `1,234,567.8912`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub group_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            max_fraction_digits: 4,
        }
    }
}

impl NumberFormat {
    /// Insert a group separator every three digits, counting from the right.
    pub fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        out
    }

    /// Render an integer part and an (already trimmed) fraction part.
    pub fn render(&self, integer: &str, fraction: &str) -> String {
        let mut out = self.group(integer);
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}
