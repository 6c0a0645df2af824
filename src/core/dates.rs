use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Default display pattern, e.g. "March 4, 2025"
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Renders stored UTC timestamps in the store's local offset
///
/// All timestamps are stored as UTC; only presentation shifts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormatter {
    pub pattern: String,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            utc_offset_minutes: 0,
        }
    }
}

impl DateFormatter {
    pub fn new(pattern: impl Into<String>, utc_offset_minutes: i32) -> Self {
        Self {
            pattern: pattern.into(),
            utc_offset_minutes,
        }
    }

    /// Whether the pattern contains only valid strftime specifiers
    pub fn is_valid_pattern(pattern: &str) -> bool {
        !pattern.is_empty() && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
    }

    /// Whether the offset is less than a full day either way
    pub fn has_valid_offset(&self) -> bool {
        self.fixed_offset().is_some()
    }

    fn fixed_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }

    fn offset(&self) -> FixedOffset {
        self.fixed_offset().unwrap_or_else(|| Utc.fix())
    }

    /// Format a timestamp with the configured pattern and offset
    pub fn format(&self, utc_time: DateTime<Utc>) -> String {
        let local = utc_time.with_timezone(&self.offset());
        // chrono panics while rendering an invalid pattern
        let pattern = if Self::is_valid_pattern(&self.pattern) {
            self.pattern.as_str()
        } else {
            DEFAULT_DATE_FORMAT
        };
        local.format(pattern).to_string()
    }
}
