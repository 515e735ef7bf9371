/// Single-row table: a line fully wrapped in `|...|`.
///
/// Rows are independent; there is no header/separator handling, so a
/// `|---|---|` line is just a row of dashes.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Returns the trimmed cells if `line` is wrapped in pipes.
    pub fn cells(line: &str) -> Option<Vec<&str>> {
        let t = line.trim();
        let inner = t.strip_prefix(Self::PIPE)?.strip_suffix(Self::PIPE)?;
        Some(inner.split(Self::PIPE).map(str::trim).collect())
    }
}
