//! Weekly calendar vocabulary.
//!
//! The timetable covers a five-day teaching week split into eight
//! one-hour slots, 9:00 through 17:00. Both are closed sets: parsing
//! anything else fails instead of falling back to a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Lowercase canonical name (e.g. `"monday"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::Day(s.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.as_str().to_string()
    }
}

/// A one-hour teaching slot.
///
/// Variants are named after the starting hour and ordered through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl TimeSlot {
    /// All slots from 9:00-10:00 to 16:00-17:00.
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::Nine,
        TimeSlot::Ten,
        TimeSlot::Eleven,
        TimeSlot::Twelve,
        TimeSlot::Thirteen,
        TimeSlot::Fourteen,
        TimeSlot::Fifteen,
        TimeSlot::Sixteen,
    ];

    /// Hour (24h clock) at which the slot starts.
    pub fn start_hour(self) -> u8 {
        9 + self as u8
    }

    /// Hour (24h clock) at which the slot ends.
    #[inline]
    pub fn end_hour(self) -> u8 {
        self.start_hour() + 1
    }

    /// Looks up the slot starting at `hour`.
    pub fn from_start_hour(hour: u8) -> Option<Self> {
        TimeSlot::ALL.into_iter().find(|s| s.start_hour() == hour)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00-{}:00", self.start_hour(), self.end_hour())
    }
}

impl FromStr for TimeSlot {
    type Err = ParseError;

    /// Accepts `"9:00-10:00"` as well as the spaced `"9:00 - 10:00"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::TimeSlot(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(err)?;
        let start = parse_hour(start.trim()).ok_or_else(err)?;
        let end = parse_hour(end.trim()).ok_or_else(err)?;

        let slot = TimeSlot::from_start_hour(start).ok_or_else(err)?;
        if slot.end_hour() != end {
            return Err(err());
        }
        Ok(slot)
    }
}

/// Parses `"H:00"` / `"HH:00"` into the hour.
fn parse_hour(text: &str) -> Option<u8> {
    let (hour, minutes) = text.split_once(':')?;
    if minutes != "00"
        || hour.is_empty()
        || hour.len() > 2
        || !hour.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    hour.parse().ok()
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_round_trip_names() {
        for day in Day::ALL {
            assert_eq!(day.as_str().parse::<Day>().unwrap(), day);
        }
        assert_eq!("Friday".parse::<Day>().unwrap(), Day::Friday);
    }

    #[test]
    fn test_day_rejects_weekend() {
        assert_eq!(
            "saturday".parse::<Day>(),
            Err(ParseError::Day("saturday".into()))
        );
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_slot_hours() {
        assert_eq!(TimeSlot::Nine.start_hour(), 9);
        assert_eq!(TimeSlot::Sixteen.end_hour(), 17);
        assert_eq!(TimeSlot::from_start_hour(12), Some(TimeSlot::Twelve));
        assert_eq!(TimeSlot::from_start_hour(17), None);
        assert_eq!(TimeSlot::from_start_hour(8), None);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(TimeSlot::Nine.to_string(), "9:00-10:00");
        assert_eq!(TimeSlot::Sixteen.to_string(), "16:00-17:00");
    }

    #[test]
    fn test_slot_parse_both_spellings() {
        assert_eq!("9:00-10:00".parse::<TimeSlot>().unwrap(), TimeSlot::Nine);
        assert_eq!(
            "13:00 - 14:00".parse::<TimeSlot>().unwrap(),
            TimeSlot::Thirteen
        );
    }

    #[test]
    fn test_slot_parse_rejects_out_of_range() {
        assert!("8:00-9:00".parse::<TimeSlot>().is_err());
        assert!("17:00-18:00".parse::<TimeSlot>().is_err());
        assert!("9:00-11:00".parse::<TimeSlot>().is_err());
        assert!("9:30-10:30".parse::<TimeSlot>().is_err());
        assert!("nine".parse::<TimeSlot>().is_err());
        assert!("+9:00-10:00".parse::<TimeSlot>().is_err());
        assert!("9:00-+10:00".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_slots_ordered() {
        let mut sorted = TimeSlot::ALL;
        sorted.sort();
        assert_eq!(sorted, TimeSlot::ALL);
        assert!(TimeSlot::Nine < TimeSlot::Ten);
    }

    #[test]
    fn test_serde_uses_canonical_strings() {
        let json = serde_json::to_string(&(Day::Tuesday, TimeSlot::Ten)).unwrap();
        assert_eq!(json, r#"["tuesday","10:00-11:00"]"#);

        let back: (Day, TimeSlot) = serde_json::from_str(r#"["TUESDAY","10:00 - 11:00"]"#).unwrap();
        assert_eq!(back, (Day::Tuesday, TimeSlot::Ten));

        assert!(serde_json::from_str::<Day>(r#""sunday""#).is_err());
    }
}
