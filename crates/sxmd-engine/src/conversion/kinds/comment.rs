/// Renderer comment. Everything inside is treated as already-hidden source
/// and copied through untouched.
pub struct Comment;

impl Comment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";
}
