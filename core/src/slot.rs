// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::civil::Time;
use serde::de;

/// Number of slots in a day.
pub const SLOTS_PER_DAY: usize = 96;

/// Length of a slot in minutes.
pub const SLOT_MINUTES: i8 = 15;

const SLOTS_PER_HOUR: u8 = 4;

static ALL: [TimeSlot; SLOTS_PER_DAY] = {
    let mut slots = [TimeSlot(0); SLOTS_PER_DAY];
    let mut i = 0;
    while i < SLOTS_PER_DAY {
        slots[i] = TimeSlot(i as u8);
        i += 1;
    }
    slots
};

/// A quarter-hour time of day, one of the 96 fixed slots from `00:00` to `23:45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// The slot selected when nothing else is known, `10:00`.
    pub const DEFAULT: TimeSlot = TimeSlot(10 * SLOTS_PER_HOUR);

    /// All slots of a day in ascending order.
    pub fn all() -> &'static [TimeSlot] {
        &ALL
    }

    /// Returns the slot at the given position in the day, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL.get(index).copied()
    }

    /// Returns the slot starting exactly at `hour:minute`, if there is one.
    pub fn from_hm(hour: i8, minute: i8) -> Option<Self> {
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) || minute % SLOT_MINUTES != 0 {
            return None;
        }
        let index = hour as usize * SLOTS_PER_HOUR as usize + (minute / SLOT_MINUTES) as usize;
        Self::from_index(index)
    }

    /// The slot that contains the given time of day.
    pub fn containing(time: Time) -> Self {
        let index = time.hour() as u8 * SLOTS_PER_HOUR + time.minute() as u8 / SLOT_MINUTES as u8;
        TimeSlot(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn hour(self) -> i8 {
        (self.0 / SLOTS_PER_HOUR) as i8
    }

    pub fn minute(self) -> i8 {
        (self.0 % SLOTS_PER_HOUR) as i8 * SLOT_MINUTES
    }

    /// The start of the slot as a time of day, seconds and sub-seconds zeroed.
    pub fn time(self) -> Time {
        Time::constant(self.hour(), self.minute(), 0, 0)
    }

    /// The following slot, `None` after `23:45`.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding slot, `None` before `00:00`.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl Default for TimeSlot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid time slot: {s}, expected HH:MM"))?;

        let hour: i8 = h
            .parse()
            .map_err(|_| format!("Invalid hour in time slot: {s}"))?;
        let minute: i8 = m
            .parse()
            .map_err(|_| format!("Invalid minute in time slot: {s}"))?;

        Self::from_hm(hour, minute)
            .ok_or_else(|| format!("Not a quarter-hour slot between 00:00 and 23:45: {s}"))
    }
}

impl serde::Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SlotVisitor;

        impl<'de> de::Visitor<'de> for SlotVisitor {
            type Value = TimeSlot;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a quarter-hour time like "09:15" or "23:45""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(SlotVisitor)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn has_96_slots_in_quarter_hour_steps() {
        let slots = TimeSlot::all();
        assert_eq!(slots.len(), SLOTS_PER_DAY);
        assert_eq!(slots.first().unwrap().to_string(), "00:00");
        assert_eq!(slots.last().unwrap().to_string(), "23:45");

        for pair in slots.windows(2) {
            let a = pair[0].time();
            let b = pair[1].time();
            assert!(a < b);
            assert_eq!(b.since(a).unwrap().get_minutes(), 15);
        }
    }

    #[test]
    fn default_is_ten_o_clock() {
        assert_eq!(TimeSlot::default().to_string(), "10:00");
        assert_eq!(TimeSlot::default().time(), time(10, 0, 0, 0));
    }

    #[test]
    fn parses_quarter_hours() {
        assert_eq!("09:15".parse::<TimeSlot>().unwrap().time(), time(9, 15, 0, 0));
        assert_eq!("0:45".parse::<TimeSlot>().unwrap().to_string(), "00:45");
        assert_eq!(" 23:45 ".parse::<TimeSlot>().unwrap().index(), 95);
    }

    #[test]
    fn rejects_invalid_slots() {
        assert!("09:10".parse::<TimeSlot>().is_err());
        assert!("24:00".parse::<TimeSlot>().is_err());
        assert!("-1:00".parse::<TimeSlot>().is_err());
        assert!("10".parse::<TimeSlot>().is_err());
        assert!("ab:cd".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn containing_floors_to_slot_start() {
        assert_eq!(TimeSlot::containing(time(14, 44, 59, 999)).to_string(), "14:30");
        assert_eq!(TimeSlot::containing(time(0, 0, 0, 0)).to_string(), "00:00");
        assert_eq!(TimeSlot::containing(time(23, 59, 59, 0)).to_string(), "23:45");
    }

    #[test]
    fn steps_without_wrapping() {
        let first = TimeSlot::all()[0];
        let last = TimeSlot::all()[SLOTS_PER_DAY - 1];
        assert_eq!(first.prev(), None);
        assert_eq!(last.next(), None);
        assert_eq!(first.next().unwrap().to_string(), "00:15");
        assert_eq!(last.prev().unwrap().to_string(), "23:30");
    }

    #[test]
    fn deserializes_from_string() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            slot: TimeSlot,
        }

        let w: Wrapper = toml::from_str(r#"slot = "14:30""#).unwrap();
        assert_eq!(w.slot.to_string(), "14:30");
        assert!(toml::from_str::<Wrapper>(r#"slot = "14:31""#).is_err());
    }
}
