/// A cursor for character-by-character scanning over decoded code points.
///
/// Out-of-range queries return `None` rather than panicking, so recognizers
/// can look ahead and behind without separate bounds checks. `None` never
/// equals any trigger character.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    i: usize,
}

impl Cursor {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            i: 0,
        }
    }

    /// Creates a cursor from raw bytes, replacing invalid UTF-8 with U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(bytes))
    }

    /// Number of code points in the input (not bytes).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current index into the input.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at (or past) the end of the input.
    pub fn at_end(&self) -> bool {
        self.i >= self.chars.len()
    }

    /// The character at an absolute index, or `None` outside the input.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn current(&self) -> Option<char> {
        self.char_at(self.i)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<char> {
        self.char_at(self.i + 1)
    }

    pub fn prev(&self) -> Option<char> {
        self.i.checked_sub(1).and_then(|i| self.char_at(i))
    }

    /// The `n` characters strictly after the cursor, clamped at the input end.
    pub fn lookahead(&self, n: usize) -> &[char] {
        self.lookahead_at(n, self.i)
    }

    /// The `n` characters strictly after `index`, clamped at the input end.
    pub fn lookahead_at(&self, n: usize, index: usize) -> &[char] {
        let start = (index + 1).min(self.chars.len());
        let end = (start + n).min(self.chars.len());
        &self.chars[start..end]
    }

    /// The `n` characters strictly before the cursor, clamped at the input start.
    pub fn lookback(&self, n: usize) -> &[char] {
        let end = self.i.min(self.chars.len());
        &self.chars[end.saturating_sub(n)..end]
    }

    /// Checks if the characters after the cursor spell out `pat`.
    pub fn lookahead_is(&self, pat: &str) -> bool {
        let mut ahead = self.chars[(self.i + 1).min(self.chars.len())..].iter();
        pat.chars().all(|c| ahead.next() == Some(&c))
    }

    /// Checks if the remaining input, starting at the cursor, begins with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        let mut rest = self.chars[self.i.min(self.chars.len())..].iter();
        pat.chars().all(|c| rest.next() == Some(&c))
    }

    /// Advances by one character.
    pub fn bump(&mut self) {
        self.bump_n(1);
    }

    /// Advances by `n` characters, stopping at the end of the input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.chars.len());
    }
}
