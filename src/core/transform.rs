use crate::domain::model::{Record, TransformOptions, FN_TAG, N_TAG};

/// Rewrites one line. Lines that are neither `FN:` nor `N:` come back unchanged.
pub fn rewrite_line(line: &str, options: &TransformOptions) -> String {
    if let Some(name) = line.strip_prefix(FN_TAG) {
        return format!("{}{} {}\n", FN_TAG, name.trim(), options.suffix);
    }

    if let Some(payload) = line.strip_prefix(N_TAG) {
        let payload = payload.trim_end_matches(['\r', '\n']);

        // split 會保留結尾的空欄位
        let mut parts: Vec<String> = payload.split(';').map(str::to_string).collect();
        if let Some(surname) = parts.first_mut() {
            surname.push(' ');
            surname.push_str(&options.suffix);
        }

        let mut rewritten = format!("{}{}", N_TAG, parts.join(";"));
        if options.terminate_structured_name {
            rewritten.push('\n');
        }
        return rewritten;
    }

    line.to_string()
}

/// Builds a new record with every name field rewritten.
pub fn transform_record(record: &Record, options: &TransformOptions) -> Record {
    Record::new(
        record
            .lines
            .iter()
            .map(|line| rewrite_line(line, options))
            .collect(),
    )
}
