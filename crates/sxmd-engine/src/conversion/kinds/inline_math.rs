/// Inline math delimiters.
///
/// A bare `$` only opens math right after a space; the `•` marker toggles
/// unconditionally and is rewritten into a hidden `$` pair.
pub struct InlineMath;

impl InlineMath {
    pub const DELIMITER: char = '$';
    /// The only character a bare [`InlineMath::DELIMITER`] may follow to open math.
    pub const OPENS_AFTER: char = ' ';
    /// U+2022 BULLET. Matched exactly; no other bullet-like characters.
    pub const ALT_MARKER: char = '\u{2022}';
    /// Replacement for an opening [`InlineMath::ALT_MARKER`].
    pub const ALT_OPEN: &'static str = "<!--$";
    /// Replacement for a closing [`InlineMath::ALT_MARKER`].
    pub const ALT_CLOSE: &'static str = "$-->";
}
