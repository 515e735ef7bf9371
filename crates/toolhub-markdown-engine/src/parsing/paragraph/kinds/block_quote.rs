/// Single-line blockquote type with owned delimiter constant.
///
/// Only one level is recognised; `> > x` is a quote whose text is `> x`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker and its space.
    pub const PREFIX: &'static str = "> ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip("> hello"), Some("hello"));
    }

    #[test]
    fn marker_without_space_is_not_a_quote() {
        assert_eq!(BlockQuote::strip(">hello"), None);
    }

    #[test]
    fn nested_marker_stays_in_text() {
        assert_eq!(BlockQuote::strip("> > hello"), Some("> hello"));
    }
}
