/// Typesetting macro syntax.
pub struct Macro;

impl Macro {
    pub const ESCAPE: char = '\\';
    /// Block opener name, matched directly after [`Macro::ESCAPE`].
    pub const BEGIN: &'static str = "begin";
    /// Block closer name, matched directly after [`Macro::ESCAPE`].
    /// Any name starting with it counts (`\endgroup` closes too).
    pub const END: &'static str = "end";

    /// Argument group openers. Both kinds share one nesting counter.
    pub fn is_arg_open(c: char) -> bool {
        matches!(c, '{' | '[')
    }

    pub fn is_arg_close(c: char) -> bool {
        matches!(c, '}' | ']')
    }

    /// Characters that end a command name: ASCII whitespace or an argument opener.
    pub fn ends_name(c: char) -> bool {
        c.is_ascii_whitespace() || Self::is_arg_open(c)
    }
}
