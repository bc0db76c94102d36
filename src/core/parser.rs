use crate::domain::model::{Record, BEGIN_MARKER, END_MARKER};
use crate::utils::error::Result;
use std::io::BufRead;

/// Scans one input for `BEGIN:VCARD` .. `END:VCARD` blocks.
///
/// Lines outside an open record are dropped, a new start marker discards any
/// partial record, and a record still open at end of input is discarded.
pub fn parse_records<R: BufRead>(mut reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<Vec<String>> = None;
    let mut dropped_lines = 0usize;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        if line.starts_with(BEGIN_MARKER) {
            if let Some(partial) = current.replace(vec![line.clone()]) {
                tracing::debug!(
                    "Discarding unterminated record ({} lines) at new start marker",
                    partial.len()
                );
            }
        } else if line.starts_with(END_MARKER) {
            match current.take() {
                Some(mut lines) => {
                    lines.push(line.clone());
                    records.push(Record::new(lines));
                }
                None => dropped_lines += 1,
            }
        } else {
            match current.as_mut() {
                Some(lines) => lines.push(line.clone()),
                None => dropped_lines += 1,
            }
        }
    }

    if let Some(partial) = current {
        tracing::debug!(
            "Discarding unterminated record ({} lines) at end of input",
            partial.len()
        );
    }
    if dropped_lines > 0 {
        tracing::debug!("Dropped {} lines outside of any record", dropped_lines);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Vec<Record> {
        parse_records(Cursor::new(input.as_bytes())).unwrap()
    }

    #[test]
    fn test_parse_single_record_keeps_lines_verbatim() {
        let records = parse("BEGIN:VCARD\nVERSION:3.0\nFN:Alice\nEND:VCARD\n");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].lines,
            vec!["BEGIN:VCARD\n", "VERSION:3.0\n", "FN:Alice\n", "END:VCARD\n"]
        );
    }

    #[test]
    fn test_parse_multiple_records_in_order() {
        let records = parse(
            "BEGIN:VCARD\nFN:Alice\nEND:VCARD\nBEGIN:VCARD\nFN:Bob\nEND:VCARD\nBEGIN:VCARD\nFN:Carol\nEND:VCARD\n",
        );

        let names: Vec<&str> = records.iter().map(|r| r.lines[1].as_str()).collect();
        assert_eq!(names, vec!["FN:Alice\n", "FN:Bob\n", "FN:Carol\n"]);
    }

    #[test]
    fn test_lines_before_first_record_are_dropped() {
        let records = parse("junk header\n\nBEGIN:VCARD\nFN:Alice\nEND:VCARD\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines[0], "BEGIN:VCARD\n");
        assert!(!records[0].to_text().contains("junk"));
    }

    #[test]
    fn test_lines_between_records_are_dropped() {
        let records = parse("BEGIN:VCARD\nFN:A\nEND:VCARD\nstray\nBEGIN:VCARD\nFN:B\nEND:VCARD\n");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.to_text().contains("stray")));
    }

    #[test]
    fn test_unterminated_record_is_discarded() {
        let records = parse("BEGIN:VCARD\nFN:Alice\nEND:VCARD\nBEGIN:VCARD\nFN:Bob\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines[1], "FN:Alice\n");
    }

    #[test]
    fn test_stray_end_marker_emits_nothing() {
        let records = parse("FN:Ghost\nEND:VCARD\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_nested_begin_restarts_record() {
        let records = parse("BEGIN:VCARD\nFN:Lost\nBEGIN:VCARD\nFN:Kept\nEND:VCARD\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines, vec!["BEGIN:VCARD\n", "FN:Kept\n", "END:VCARD\n"]);
    }

    #[test]
    fn test_markers_match_by_prefix() {
        let records = parse("BEGIN:VCARD\r\nFN:Alice\r\nEND:VCARD\r\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines[2], "END:VCARD\r\n");
    }

    #[test]
    fn test_last_line_without_terminator() {
        let records = parse("BEGIN:VCARD\nFN:Alice\nEND:VCARD");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines[2], "END:VCARD");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let bytes: &[u8] = b"BEGIN:VCARD\nFN:\xff\xfe\nEND:VCARD\n";
        let result = parse_records(Cursor::new(bytes));
        assert!(matches!(
            result,
            Err(crate::utils::error::MergeError::IoError(_))
        ));
    }
}
