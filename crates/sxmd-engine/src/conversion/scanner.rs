use super::{cursor::Cursor, sink::Sink};

/// Mutable state shared by every recognizer during one conversion.
///
/// Created fresh for each document and dropped when the conversion ends.
#[derive(Debug)]
pub struct Scanner {
    pub cur: Cursor,
    /// True while the cursor is inside an inline math span. Only the two
    /// inline math recognizers change it.
    pub in_inline_math: bool,
    pub out: Sink,
}

impl Scanner {
    pub fn new(cur: Cursor) -> Self {
        // Output is the input plus a handful of comment markers.
        let out = Sink::with_capacity(cur.len() + cur.len() / 4);
        Self {
            cur,
            in_inline_math: false,
            out,
        }
    }

    /// Emits the current character (if any) and advances past it.
    pub fn copy_current(&mut self) {
        if let Some(c) = self.cur.current() {
            self.out.push(c);
        }
        self.cur.bump();
    }
}
