/// Literal key of the checklist directive.
const CHECKLIST_KEY: &str = "Checklist";

/// Extract a checklist override from the directive line.
///
/// Recognised only when the first cell reads `Checklist=<accession>` with a
/// non-empty accession; anything else yields `None`.
pub fn parse_checklist_directive(line: &str, delimiter: u8) -> Option<String> {
    let first_cell = line
        .trim_start_matches('\u{feff}')
        .split(char::from(delimiter))
        .next()?
        .trim()
        .trim_matches('"');
    let (key, value) = first_cell.split_once('=')?;
    let value = value.trim();
    if key.trim() != CHECKLIST_KEY || value.is_empty() {
        return None;
    }
    Some(value.to_string())
}
