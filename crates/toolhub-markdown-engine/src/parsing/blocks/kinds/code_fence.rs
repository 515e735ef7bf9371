/// Fenced code block type with owned delimiter constant.
///
/// A fence line is exactly three backticks, optionally followed by a single
/// language tag, with nothing else on the line. Surrounding whitespace is
/// ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the (possibly empty) language tag if `line` is a fence line.
    pub fn tag(line: &str) -> Option<&str> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        let tag = rest.trim_start();
        if tag.chars().any(|c| c.is_whitespace() || c == '`') {
            return None;
        }
        Some(tag)
    }

    /// True if `line` opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        Self::tag(line).is_some()
    }
}
