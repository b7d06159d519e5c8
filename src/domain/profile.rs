//! Profile domain model.
//!
//! A [`ProfileRecord`] is one person's directory entry as delivered by the
//! profile API. Records are immutable once fetched; every display string the UI
//! needs (full name, "City, State", street address, birthday) is derived on
//! demand rather than stored.

use chrono::NaiveDate;

/// Length of the `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
const ISO_DATE_LEN: usize = 10;

/// One fetched person's directory entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    /// Medium-size picture, used on cards.
    pub thumbnail_url: String,
    /// Large picture, used in the detail modal.
    pub picture_url: String,
    /// ISO-8601 birth timestamp, e.g. `1990-05-17T08:12:45.912Z`.
    pub birth_date: String,
}

impl ProfileRecord {
    /// Returns `"First Last"` exactly as fetched (no case normalization).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rolodex::domain::ProfileRecord;
    /// # let mut profile = ProfileRecord::default();
    /// profile.first_name = "alice".to_string();
    /// profile.last_name = "smith".to_string();
    /// assert_eq!(profile.full_name(), "alice smith");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns `"City, State"`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Returns the full postal address, `"<number> <street>, <city>, <state> <postcode>"`.
    #[must_use]
    pub fn street_address(&self) -> String {
        format!(
            "{} {}, {}, {} {}",
            self.street_number, self.street_name, self.city, self.state, self.postcode
        )
    }

    /// Returns the birth date formatted as `MM-DD-YYYY`.
    ///
    /// See [`format_birth_date`] for the failure mode.
    #[must_use]
    pub fn birthday(&self) -> String {
        format_birth_date(&self.birth_date)
    }

    /// Returns the uppercase initials used for the card avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Reformats an ISO-8601 date or timestamp into `MM-DD-YYYY`.
///
/// Only the leading `YYYY-MM-DD` is parsed; anything after it (time, zone) is
/// ignored. Input whose prefix is not a valid calendar date is returned
/// unchanged, so a malformed value still displays as something.
///
/// # Examples
///
/// ```
/// use rolodex::domain::format_birth_date;
///
/// assert_eq!(format_birth_date("1990-05-17T00:00:00Z"), "05-17-1990");
/// assert_eq!(format_birth_date("unknown"), "unknown");
/// ```
#[must_use]
pub fn format_birth_date(raw: &str) -> String {
    raw.get(..ISO_DATE_LEN)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map_or_else(
            || {
                tracing::debug!(birth_date = %raw, "unparseable birth date, showing as-is");
                raw.to_string()
            },
            |date| date.format("%m-%d-%Y").to_string(),
        )
}
