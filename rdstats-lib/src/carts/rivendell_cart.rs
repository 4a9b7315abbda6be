use crate::Result;
use crate::stats::DurationRecord;
use ohno::IntoAppError;
use serde::{Deserialize, Deserializer};
use strum::IntoStaticStr;

/// Kind of content held by a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CartType {
    #[serde(rename = "audio")]
    Audio,

    /// Anything that isn't audio is treated as a macro cart
    #[serde(other)]
    Macro,
}

/// One row of the RDLibrary "Cart Data Dump (CSV)" export.
///
/// Descriptive text columns are trimmed of surrounding whitespace; the remaining
/// columns are kept exactly as exported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RivendellCart {
    pub cart_number: String,
    pub cut_number: String,
    #[serde(rename = "TYPE")]
    pub cart_type: CartType,
    pub group_name: String,
    #[serde(deserialize_with = "trimmed")]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    pub artist: String,
    #[serde(deserialize_with = "trimmed")]
    pub album: String,
    #[serde(deserialize_with = "trimmed")]
    pub year: String,
    #[serde(deserialize_with = "trimmed")]
    pub isrc: String,
    #[serde(deserialize_with = "trimmed")]
    pub isci: String,
    #[serde(deserialize_with = "trimmed")]
    pub label: String,
    #[serde(deserialize_with = "trimmed")]
    pub client: String,
    #[serde(deserialize_with = "trimmed")]
    pub agency: String,
    #[serde(deserialize_with = "trimmed")]
    pub publisher: String,
    #[serde(deserialize_with = "trimmed")]
    pub composer: String,
    #[serde(deserialize_with = "trimmed")]
    pub conductor: String,
    #[serde(deserialize_with = "trimmed")]
    pub song_id: String,
    #[serde(deserialize_with = "trimmed")]
    pub user_defined: String,
    #[serde(deserialize_with = "trimmed")]
    pub description: String,
    #[serde(deserialize_with = "trimmed")]
    pub outcue: String,
    pub filename: String,
    pub length: String,
    pub start_point: String,
    pub end_point: String,
    pub segue_start_point: String,
    pub segue_end_point: String,
    pub hook_start_point: String,
    pub hook_end_point: String,
    pub talk_start_point: String,
    pub talk_end_point: String,
    pub fadeup_point: String,
    pub fadedown_point: String,
    pub sched_codes: String,
}

fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let s = String::deserialize(deserializer)?;
    let t = s.trim();
    Ok(if t.len() == s.len() { s } else { t.to_string() })
}

impl RivendellCart {
    /// Length of the cart's audio in whole seconds.
    ///
    /// Accepts `H:MM:SS`, `M:SS` and `:SS`.
    pub fn length_in_seconds(&self) -> Result<u32> {
        parse_length(&self.length)
            .into_app_err_with(|| format!("invalid length '{}' for cart '{}'", self.length, self.cart_number))
    }

    /// The record the statistics engine consumes for this cart.
    pub fn to_duration_record(&self) -> Result<DurationRecord> {
        Ok(DurationRecord::new(self.group_name.as_str(), self.length_in_seconds()?))
    }

    /// Look up a column value by its export name, ignoring case.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name.to_ascii_lowercase().as_str() {
            "cart_number" => &self.cart_number,
            "cut_number" => &self.cut_number,
            "type" => return Some(self.cart_type.into()),
            "group_name" => &self.group_name,
            "title" => &self.title,
            "artist" => &self.artist,
            "album" => &self.album,
            "year" => &self.year,
            "isrc" => &self.isrc,
            "isci" => &self.isci,
            "label" => &self.label,
            "client" => &self.client,
            "agency" => &self.agency,
            "publisher" => &self.publisher,
            "composer" => &self.composer,
            "conductor" => &self.conductor,
            "song_id" => &self.song_id,
            "user_defined" => &self.user_defined,
            "description" => &self.description,
            "outcue" => &self.outcue,
            "filename" => &self.filename,
            "length" => &self.length,
            "start_point" => &self.start_point,
            "end_point" => &self.end_point,
            "segue_start_point" => &self.segue_start_point,
            "segue_end_point" => &self.segue_end_point,
            "hook_start_point" => &self.hook_start_point,
            "hook_end_point" => &self.hook_end_point,
            "talk_start_point" => &self.talk_start_point,
            "talk_end_point" => &self.talk_end_point,
            "fadeup_point" => &self.fadeup_point,
            "fadedown_point" => &self.fadedown_point,
            "sched_codes" => &self.sched_codes,
            _ => return None,
        };

        Some(value.as_str())
    }
}

fn parse_length(length: &str) -> Option<u32> {
    let parts: Vec<&str> = length.trim().split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (h.parse::<u32>().ok()?, parse_minutes(m)?, s.parse::<u32>().ok()?),
        [m, s] => (0, parse_minutes(m)?, s.parse::<u32>().ok()?),
        _ => return None,
    };

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

fn parse_minutes(m: &str) -> Option<u32> {
    if m.is_empty() { Some(0) } else { m.parse().ok() }
}
