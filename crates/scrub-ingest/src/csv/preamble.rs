//! Removal of non-data rows above the CSV header.

/// Drops leading lines that contain a preamble marker, plus blank lines among them.
///
/// Stops at the first line that is neither blank nor a marker line; that line
/// is taken to be the real header. Returns the remaining text and how many
/// marker lines were removed. Rows below the header are never touched, even
/// if they contain a marker.
pub fn strip_preamble<'a, S: AsRef<str>>(text: &'a str, markers: &[S]) -> (&'a str, usize) {
    let mut offset = 0;
    let mut removed = 0;
    for line in lines_inclusive(text) {
        let is_marker = markers
            .iter()
            .map(AsRef::as_ref)
            .any(|marker| !marker.is_empty() && line.contains(marker));
        if is_marker {
            removed += 1;
        } else if !line.trim().is_empty() {
            break;
        }
        offset += line.len();
    }
    (&text[offset..], removed)
}

/// Splits after each `\r\n`, `\n` or lone `\r`, keeping the terminator.
fn lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let mut end = start;
        while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
            end += 1;
        }
        if end < bytes.len() {
            if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                end += 1;
            }
            end += 1;
        }
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKERS: [&str; 2] = ["Key Dates", "Select Y if applies"];

    #[test]
    fn test_strips_category_rows() {
        let text = ",,Key Dates,,\r\n,Select Y if applies,,\r\nFirst Name,Last Name\r\nJo,Lee\r\n";
        let (rest, removed) = strip_preamble(text, &MARKERS);
        assert_eq!(rest, "First Name,Last Name\r\nJo,Lee\r\n");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_strips_category_rows_with_cr_endings() {
        let text = ",,Key Dates,\r,,Select Y if applies,\rFirst Name,Last Name\rJo,Lee\r";
        let (rest, removed) = strip_preamble(text, &MARKERS);
        assert_eq!(rest, "First Name,Last Name\rJo,Lee\r");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_lines_inclusive_mixed_endings() {
        let lines: Vec<&str> = lines_inclusive("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a\r\n", "b\r", "c\n", "d"]);
    }

    #[test]
    fn test_no_preamble() {
        let text = "First Name,Last Name\nJo,Lee\n";
        assert_eq!(strip_preamble(text, &MARKERS), (text, 0));
    }

    #[test]
    fn test_marker_in_data_kept() {
        let text = "Key Dates,,\nFirst Name,Notes\nJo,Key Dates matter\n";
        let (rest, removed) = strip_preamble(text, &MARKERS);
        assert_eq!(rest, "First Name,Notes\nJo,Key Dates matter\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_only_preamble() {
        let text = "Key Dates\n\nSelect Y if applies\n";
        let (rest, removed) = strip_preamble(text, &MARKERS);
        assert_eq!(rest, "");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_empty_markers_ignored() {
        let text = "First Name\nJo\n";
        let markers: [&str; 1] = [""];
        assert_eq!(strip_preamble(text, &markers), (text, 0));
    }
}
