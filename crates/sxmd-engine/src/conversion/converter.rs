use super::{cursor::Cursor, recognizers::CHAIN, scanner::Scanner};

/// Single-pass converter for one document.
///
/// Each step offers the cursor position to the recognizer chain in priority
/// order. The first recognizer to accept governs the step; if none accept,
/// the current character is copied through.
#[derive(Debug)]
pub struct Converter {
    scanner: Scanner,
}

impl Converter {
    pub fn new(input: &str) -> Self {
        Self::from_cursor(Cursor::new(input))
    }

    /// Invalid UTF-8 is replaced with U+FFFD before scanning.
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::from_cursor(Cursor::from_bytes(input))
    }

    fn from_cursor(cur: Cursor) -> Self {
        Self {
            scanner: Scanner::new(cur),
        }
    }

    /// Number of code points in the input.
    pub fn input_len(&self) -> usize {
        self.scanner.cur.len()
    }

    /// Runs one step. Returns `false` once the input is exhausted.
    fn step(&mut self) -> bool {
        if self.scanner.cur.at_end() {
            return false;
        }

        if !CHAIN.iter().any(|recognize| recognize(&mut self.scanner)) {
            self.scanner.copy_current();
        }

        true
    }

    pub fn convert(mut self) -> String {
        while self.step() {}
        self.scanner.out.finish()
    }
}
