/// Lines starting with `<` pass through untouched.
pub struct RawHtml;

impl RawHtml {
    pub const MARK: u8 = b'<';
}
