//! Weekly time slot model: days, periods, and the cells they form.

use std::str::FromStr;

use jiff::civil::{time, Time};
use serde::{Deserialize, Serialize};

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in grid column order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Three-letter abbreviation used in compact grid headers.
    pub fn short(&self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_lowercase();
                lower == name || lower == name[..3]
            })
            .ok_or_else(|| format!("Invalid day: {s}"))
    }
}

/// Fixed teaching period of the day, in chronological order.
///
/// `Lunch` is a sentinel row: it is shown in the grid but can never be
/// booked by a course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    #[serde(rename = "8:30am-10:00am")]
    EarlyMorning,
    #[serde(rename = "10:00am-11:30am")]
    LateMorning,
    #[serde(rename = "11:30am-1:00pm")]
    Midday,
    #[serde(rename = "LUNCH")]
    Lunch,
    #[serde(rename = "2:00pm-3:30pm")]
    EarlyAfternoon,
    #[serde(rename = "3:30pm-5:00pm")]
    LateAfternoon,
}

impl Period {
    /// All periods in grid row order, including the lunch sentinel.
    pub const ALL: [Period; 6] = [
        Period::EarlyMorning,
        Period::LateMorning,
        Period::Midday,
        Period::Lunch,
        Period::EarlyAfternoon,
        Period::LateAfternoon,
    ];

    /// Label shown in the grid and accepted on input.
    pub fn label(&self) -> &'static str {
        match self {
            Period::EarlyMorning => "8:30am-10:00am",
            Period::LateMorning => "10:00am-11:30am",
            Period::Midday => "11:30am-1:00pm",
            Period::Lunch => "LUNCH",
            Period::EarlyAfternoon => "2:00pm-3:30pm",
            Period::LateAfternoon => "3:30pm-5:00pm",
        }
    }

    pub fn is_bookable(&self) -> bool {
        !matches!(self, Period::Lunch)
    }

    /// Wall-clock start and end of the period.
    pub fn clock_range(&self) -> (Time, Time) {
        match self {
            Period::EarlyMorning => (time(8, 30, 0, 0), time(10, 0, 0, 0)),
            Period::LateMorning => (time(10, 0, 0, 0), time(11, 30, 0, 0)),
            Period::Midday => (time(11, 30, 0, 0), time(13, 0, 0, 0)),
            Period::Lunch => (time(13, 0, 0, 0), time(14, 0, 0, 0)),
            Period::EarlyAfternoon => (time(14, 0, 0, 0), time(15, 30, 0, 0)),
            Period::LateAfternoon => (time(15, 30, 0, 0), time(17, 0, 0, 0)),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    /// Accepts the period label (case-insensitive) or its 1-based row number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(row) = trimmed.parse::<usize>() {
            return row
                .checked_sub(1)
                .and_then(|index| Period::ALL.get(index).copied())
                .ok_or_else(|| format!("Invalid period row: {s}"));
        }
        Period::ALL
            .into_iter()
            .find(|period| period.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Invalid period: {s}"))
    }
}

/// One cell of the weekly grid. Two slots are equal only when both the day
/// and the period match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    pub day: Day,
    pub period: Period,
}

impl TimeSlot {
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }
}
