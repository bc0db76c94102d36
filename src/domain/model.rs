use serde::{Deserialize, Serialize};

pub const BEGIN_MARKER: &str = "BEGIN:VCARD";
pub const END_MARKER: &str = "END:VCARD";

/// Formatted-name field tag.
pub const FN_TAG: &str = "FN:";
/// Structured-name field tag (`surname;given;additional;prefix;suffix`).
pub const N_TAG: &str = "N:";

/// One contact card, `BEGIN:VCARD` through `END:VCARD` inclusive.
///
/// Lines are kept exactly as read, terminators included, so that untouched
/// lines serialize byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub lines: Vec<String>,
}

impl Record {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// 序列化後的內容
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransformOptions {
    pub suffix: String,
    /// Re-append `\n` to rewritten `N:` lines. Off by default: the rewritten
    /// structured name is emitted without a terminator.
    #[serde(default)]
    pub terminate_structured_name: bool,
}

impl TransformOptions {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            terminate_structured_name: false,
        }
    }
}
