/// Bullet list item: `-` or `*` followed by one or more spaces.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Returns the item text with the marker and its spacing removed.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKERS)?;
        let text = rest.trim_start_matches([' ', '\t']);
        if text.len() == rest.len() {
            return None;
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- a", Some("a"))]
    #[case("* a", Some("a"))]
    #[case("-    spaced", Some("spaced"))]
    #[case("-\ttabbed", Some("tabbed"))]
    #[case("- ", Some(""))]
    #[case("-a", None)]
    #[case("**bold**", None)]
    #[case("*italic*", None)]
    #[case(" - indented", None)]
    #[case("+ plus", None)]
    fn strips_markers(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListItem::strip(line), expected);
    }
}
