//! Number formatting for log lines

use num_format::{Locale, ToFormattedString};

/// Format a whole number with comma thousands separators (`1234567` → `"1,234,567"`)
pub fn format_whole(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
