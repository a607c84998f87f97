//! Append-only output buffer for the scanner.

/// Collects emitted text in input order. Never truncated or rewritten.
#[derive(Debug, Default)]
pub struct Sink {
    out: String,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, c: char) {
        self.out.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Consume the sink and return everything emitted.
    pub fn finish(self) -> String {
        self.out
    }
}
