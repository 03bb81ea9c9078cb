//! Documentation comments.

/// Width of the `/// ` marker the parser leaves on each doc line.
const DOC_MARKER_WIDTH: usize = 4;

/// Join `///` comment lines into a documentation string.
///
/// Each line loses its marker and trailing line break. Returns `None` when
/// there are no lines.
pub(crate) fn join_doc_lines(lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    let joined = lines
        .iter()
        .map(|line| {
            let text: String = line.chars().skip(DOC_MARKER_WIDTH).collect();
            text.trim_end_matches(['\n', '\r']).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_lines_no_doc() {
        assert_eq!(join_doc_lines(&[]), None);
    }

    #[test]
    fn strips_marker_and_line_breaks() {
        let doc = join_doc_lines(&lines(&["/// First line\n", "/// second\r\n"]));
        assert_eq!(doc.as_deref(), Some("First line\nsecond"));
    }

    #[test]
    fn empty_doc_line_is_kept() {
        let doc = join_doc_lines(&lines(&["/// a\n", "///\n", "/// b"]));
        assert_eq!(doc.as_deref(), Some("a\n\nb"));
    }

    #[test]
    fn marker_removal_counts_characters() {
        let doc = join_doc_lines(&lines(&["/// λx"]));
        assert_eq!(doc.as_deref(), Some("λx"));
    }
}
