use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Typeahead results shown at once.
pub const SEARCH_RESULT_LIMIT: usize = 6;

/// Distinct labels kept in a frequency table before the rest fold into "Other".
pub const FREQUENCY_TABLE_THRESHOLD: usize = 8;
pub const OTHER_LABEL: &str = "Other";

pub const CONTACT_SUCCESS_RESET_SECS: u64 = 5;
pub const MIN_MESSAGE_LENGTH: usize = 10;

pub const WORDS_PER_MINUTE: usize = 200;

pub const RELATED_ITEMS_LIMIT: usize = 2;
