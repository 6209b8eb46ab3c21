use chrono::{DateTime, Datelike, Local, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_TIME_ZONE: &str = "America/Toronto";

/// One of the seven weekday keys. Ordering is calendar order, Sunday first.
/// Serialized lowercase; parsed case-insensitively, in paths and bodies alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayKey {
    pub const ALL: [DayKey; 7] = [
        DayKey::Sunday,
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
    ];

    /// Maps a Sunday-based weekday index (0..=6) to its key.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Sunday => "sunday",
            DayKey::Monday => "monday",
            DayKey::Tuesday => "tuesday",
            DayKey::Wednesday => "wednesday",
            DayKey::Thursday => "thursday",
            DayKey::Friday => "friday",
            DayKey::Saturday => "saturday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayKey::Sunday => "Sunday",
            DayKey::Monday => "Monday",
            DayKey::Tuesday => "Tuesday",
            DayKey::Wednesday => "Wednesday",
            DayKey::Thursday => "Thursday",
            DayKey::Friday => "Friday",
            DayKey::Saturday => "Saturday",
        }
    }

    pub fn tab_id(self) -> String {
        format!("tab-{}", self.as_str())
    }

    pub fn panel_id(self) -> String {
        format!("panel-{}", self.as_str())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day key '{0}'")]
pub struct UnknownDay(pub String);

impl FromStr for DayKey {
    type Err = UnknownDay;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|day| day.as_str() == needle)
            .ok_or_else(|| UnknownDay(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Weekday of `reference` in the named IANA zone. Falls back to the system
/// local weekday when the zone name does not resolve.
pub fn current_day(reference: DateTime<Utc>, time_zone: &str) -> DayKey {
    let index = match time_zone.parse::<Tz>() {
        Ok(tz) => reference.with_timezone(&tz).weekday().num_days_from_sunday(),
        Err(err) => {
            warn!("unknown time zone '{time_zone}', using local time: {err}");
            reference.with_timezone(&Local).weekday().num_days_from_sunday()
        }
    };

    // num_days_from_sunday is always 0..=6
    DayKey::from_index(index).unwrap_or(DayKey::Sunday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn resolves_weekday_in_named_zone() {
        // 2026-01-05 03:00 UTC is still Sunday evening in Toronto.
        let instant = Utc.with_ymd_and_hms(2026, 1, 5, 3, 0, 0).unwrap();
        assert_eq!(current_day(instant, "America/Toronto"), DayKey::Sunday);
        assert_eq!(current_day(instant, "UTC"), DayKey::Monday);
    }

    #[test]
    fn unknown_zone_falls_back_to_local() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 7, 12, 0, 0).unwrap();
        let local = instant.with_timezone(&Local).weekday().num_days_from_sunday();
        assert_eq!(
            current_day(instant, "Not/AZone"),
            DayKey::from_index(local).unwrap()
        );
    }

    #[test]
    fn keys_parse_and_order_by_calendar() {
        assert_eq!("Friday".parse::<DayKey>(), Ok(DayKey::Friday));
        assert!("funday".parse::<DayKey>().is_err());
        assert!(DayKey::Sunday < DayKey::Saturday);
        assert_eq!(DayKey::Wednesday.tab_id(), "tab-wednesday");
        assert_eq!(DayKey::Wednesday.panel_id(), "panel-wednesday");
        assert_eq!(DayKey::from_index(7), None);
    }

    #[test]
    fn deserializes_any_case_and_serializes_lowercase() {
        let day: DayKey = serde_json::from_str("\"Friday\"").unwrap();
        assert_eq!(day, DayKey::Friday);
        assert_eq!(serde_json::from_str::<DayKey>("\"SUNDAY\"").unwrap(), DayKey::Sunday);
        assert!(serde_json::from_str::<DayKey>("\"funday\"").is_err());
        assert_eq!(serde_json::to_string(&DayKey::Friday).unwrap(), "\"friday\"");
    }
}
