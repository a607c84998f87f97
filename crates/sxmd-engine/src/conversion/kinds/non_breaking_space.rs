/// LaTeX non-breaking space.
pub struct NonBreakingSpace;

impl NonBreakingSpace {
    pub const TILDE: char = '~';
    /// Emitted in place of the tilde so its position survives rendering.
    pub const MARKER: &'static str = "<!--~-->";
}
