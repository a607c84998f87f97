//! # Conversion
//!
//! Single-pass scanner that hides LaTeX source in HTML comments so a markdown
//! renderer shows only the prose around it.
//!
//! ## Architecture
//!
//! The scanner walks the input one code point at a time. At every position a
//! fixed chain of recognizers gets first refusal; the first to accept
//! consumes its span and emits its replacement. Unclaimed characters are
//! copied through.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` over decoded code points with clamped lookahead
//! - **`sink`**: `Sink`, the append-only output buffer
//! - **`scanner`**: `Scanner`, the state every recognizer shares
//! - **`kinds`**: delimiter constants owned by each construct
//! - **`recognizers`**: `try_*` recognizers and their priority order
//! - **`converter`**: `Converter`, the driver loop
//!
//! ## Priority
//!
//! Comments (`<!-- -->`) and drop blocks (`<![CDATA[ ]]>`) are claimed before
//! macros, so `<!--\foo-->` is passed through rather than hidden twice. Inside
//! inline math no macro is hidden at all: ` $\alpha$ ` is left as is.
//!
//! ## Leniency
//!
//! Malformed input never fails. Unterminated comments get a synthetic `-->`,
//! unterminated argument groups are closed at end of input, and an
//! unterminated `\begin` block runs to the end without a closing marker.

pub mod converter;
pub mod cursor;
pub mod kinds;
pub mod recognizers;
pub mod scanner;
pub mod sink;

pub use converter::Converter;

/// Converts a document, hiding macro source in comments.
pub fn convert(input: &str) -> String {
    Converter::new(input).convert()
}

/// Byte-oriented [`convert`]. Invalid UTF-8 is replaced with U+FFFD.
pub fn convert_bytes(input: &[u8]) -> Vec<u8> {
    Converter::from_bytes(input).convert().into_bytes()
}
