//! The two named line formatters and the static table pairing each with
//! its label.

use std::fmt::Display;

/// Format a text value as a `first` line.
pub fn first(x: &str) -> String {
    format!("first {x}")
}

/// Format a value as a `second` line.
///
/// Numeric by intent, but any [`Display`] value renders unchanged, so the
/// fixed text input the binary supplies comes out as `second hi`.
pub fn second(y: impl Display) -> String {
    format!("second {y}")
}

/// A label paired with one of the line formatters.
#[derive(Clone, Copy, Debug)]
pub struct NamedFormatter {
    /// Identity of the formatter within [`FORMATTERS`]. Nothing else reads
    /// it at runtime.
    pub name: &'static str,
    run: fn(&str) -> String,
}

impl NamedFormatter {
    /// Run the underlying formatter on `input`.
    pub fn apply(&self, input: &str) -> String {
        (self.run)(input)
    }
}

fn second_text(y: &str) -> String {
    second(y)
}

/// The two formatters, in draw order: `first`, then `second`. Both live
/// for the whole process.
pub static FORMATTERS: [NamedFormatter; 2] = [
    NamedFormatter {
        name: "first",
        run: first,
    },
    NamedFormatter {
        name: "second",
        run: second_text,
    },
];
