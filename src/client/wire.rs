//! Wire format of the profile API.
//!
//! These types mirror the JSON document returned by the provider and exist
//! only to be converted into [`ProfileRecord`]s. Fields the directory does not
//! use are ignored by serde.

use crate::domain::ProfileRecord;
use serde::{Deserialize, Deserializer};

/// Top-level response body: `{ "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub results: Vec<ProfileJson>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileJson {
    pub name: NameJson,
    pub email: String,
    pub phone: String,
    pub dob: DobJson,
    pub location: LocationJson,
    pub picture: PictureJson,
}

#[derive(Debug, Deserialize)]
pub struct NameJson {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct DobJson {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationJson {
    pub street: StreetJson,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "string_or_number")]
    pub postcode: String,
}

#[derive(Debug, Deserialize)]
pub struct StreetJson {
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PictureJson {
    pub medium: String,
    pub large: String,
}

/// Accepts either a JSON string or a JSON number and yields a string.
///
/// The provider sends US postcodes as numbers and others as strings.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

impl From<ProfileJson> for ProfileRecord {
    fn from(json: ProfileJson) -> Self {
        Self {
            first_name: json.name.first,
            last_name: json.name.last,
            email: json.email,
            phone: json.phone,
            street_number: json.location.street.number,
            street_name: json.location.street.name,
            city: json.location.city,
            state: json.location.state,
            postcode: json.location.postcode,
            thumbnail_url: json.picture.medium,
            picture_url: json.picture.large,
            birth_date: json.dob.date,
        }
    }
}
