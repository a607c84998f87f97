/// CDATA section. Dropped from the output together with its delimiters.
pub struct DropBlock;

impl DropBlock {
    pub const OPEN: &'static str = "<![CDATA[";
    pub const CLOSE: &'static str = "]]>";
}
