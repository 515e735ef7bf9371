/// ATX-style heading, levels 1 to 3.
///
/// Each level has its own exact prefix, so at most one can match a line;
/// `#### x` and `#x` are not headings.
pub struct Heading;

impl Heading {
    pub const PREFIXES: [(u8, &'static str); 3] = [(1, "# "), (2, "## "), (3, "### ")];

    /// Returns `(level, text)` if `line` starts with a heading prefix.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|&(level, prefix)| line.strip_prefix(prefix).map(|t| (level, t.trim())))
    }
}
