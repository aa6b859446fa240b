//! Three-axis energy state and its estimator.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::profile::PersonalProfile;

const AXIS_START: i32 = 50;
const AXIS_MIN: i32 = 10;
const AXIS_MAX: i32 = 90;

/// Short-term direction of the energy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Declining,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Rising, Trend::Stable, Trend::Declining];

    /// Rising 6-12, declining 18-23, otherwise stable.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=12 => Trend::Rising,
            18..=23 => Trend::Declining,
            _ => Trend::Stable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }
}

/// Part of the day used for time-sensitive affinity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::Morning,
        TimeBucket::Afternoon,
        TimeBucket::Evening,
        TimeBucket::Night,
    ];

    /// Morning 5-11, afternoon 12-17, evening 18-22, night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeBucket::Morning,
            12..=17 => TimeBucket::Afternoon,
            18..=22 => TimeBucket::Evening,
            _ => TimeBucket::Night,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::Evening => "evening",
            TimeBucket::Night => "night",
        }
    }
}

/// Finer hour bands that drive the time-of-day axis deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPhase {
    Morning,
    Midday,
    MidAfternoon,
    Evening,
    Night,
}

impl DayPhase {
    fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => DayPhase::Morning,
            11..=13 => DayPhase::Midday,
            14..=17 => DayPhase::MidAfternoon,
            18..=21 => DayPhase::Evening,
            _ => DayPhase::Night,
        }
    }

    /// (physical, mental, spiritual) deltas
    fn deltas(&self) -> (i32, i32, i32) {
        match self {
            DayPhase::Morning => (20, 10, 0),
            DayPhase::Midday => (10, 20, 0),
            DayPhase::MidAfternoon => (-5, -10, 0),
            DayPhase::Evening => (-10, 0, 15),
            DayPhase::Night => (-20, -15, 10),
        }
    }
}

/// Transient physical/mental/spiritual state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyState3D {
    /// Physical axis (10-90)
    pub physical: u8,
    /// Mental axis (10-90)
    pub mental: u8,
    /// Spiritual axis (10-90)
    pub spiritual: u8,
    /// Mean of the three axes
    pub balance: f64,
    pub trend: Trend,
    pub time_bucket: TimeBucket,
    /// Day of week (0-6, Sunday=0)
    pub day_of_week: u8,
}

impl EnergyState3D {
    /// Build a state from raw axis values, clamping each into range.
    pub fn from_axes(
        physical: i32,
        mental: i32,
        spiritual: i32,
        trend: Trend,
        time_bucket: TimeBucket,
        day_of_week: u8,
    ) -> Self {
        let physical = physical.clamp(AXIS_MIN, AXIS_MAX);
        let mental = mental.clamp(AXIS_MIN, AXIS_MAX);
        let spiritual = spiritual.clamp(AXIS_MIN, AXIS_MAX);
        Self {
            physical: physical as u8,
            mental: mental as u8,
            spiritual: spiritual as u8,
            balance: f64::from(physical + mental + spiritual) / 3.0,
            trend,
            time_bucket,
            day_of_week,
        }
    }

    pub fn is_weekend(&self) -> bool {
        is_weekend(self.day_of_week)
    }
}

fn is_weekend(day_of_week: u8) -> bool {
    day_of_week == 0 || day_of_week == 6
}

/// Estimate the energy state at `now`, optionally shaped by a profile.
///
/// Pure: the caller supplies the timestamp.
pub fn estimate_energy_state(
    now: NaiveDateTime,
    profile: Option<&PersonalProfile>,
) -> EnergyState3D {
    let hour = now.hour();
    let day_of_week = now.weekday().num_days_from_sunday() as u8;

    let (mut physical, mut mental, mut spiritual) = (AXIS_START, AXIS_START, AXIS_START);

    let (dp, dm, ds) = DayPhase::from_hour(hour).deltas();
    physical += dp;
    mental += dm;
    spiritual += ds;

    if let Some(profile) = profile {
        if profile.has_axis('E') {
            physical += 10;
            mental += 5;
        }
        if profile.has_axis('I') {
            spiritual += 10;
            mental += 5;
        }
        if profile.has_axis('N') {
            spiritual += 10;
        }
        if profile.has_axis('S') {
            physical += 10;
        }
    }

    if is_weekend(day_of_week) {
        physical += 5;
        spiritual += 10;
        mental -= 5;
    }

    EnergyState3D::from_axes(
        physical,
        mental,
        spiritual,
        Trend::from_hour(hour),
        TimeBucket::from_hour(hour),
        day_of_week,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::parse_profile;
    use chrono::NaiveDate;

    // 2026-10-14 is a Wednesday, 2026-10-17 a Saturday.
    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_weekday_morning_without_profile() {
        let state = estimate_energy_state(at(14, 8), None);
        assert_eq!((state.physical, state.mental, state.spiritual), (70, 60, 50));
        assert_eq!(state.balance, 60.0);
        assert_eq!(state.trend, Trend::Rising);
        assert_eq!(state.time_bucket, TimeBucket::Morning);
        assert_eq!(state.day_of_week, 3);
    }

    #[test]
    fn test_midday_and_mid_afternoon_deltas() {
        let noon = estimate_energy_state(at(14, 12), None);
        assert_eq!((noon.physical, noon.mental, noon.spiritual), (60, 70, 50));
        assert_eq!(noon.time_bucket, TimeBucket::Afternoon);

        let slump = estimate_energy_state(at(14, 15), None);
        assert_eq!((slump.physical, slump.mental, slump.spiritual), (45, 40, 50));
        assert_eq!(slump.trend, Trend::Stable);
    }

    #[test]
    fn test_night_with_introvert_profile() {
        let profile = parse_profile(Some("INFJ"), None, None);
        let state = estimate_energy_state(at(14, 23), Some(&profile));
        // physical 50-20, mental 50-15+5, spiritual 50+10+10+10
        assert_eq!((state.physical, state.mental, state.spiritual), (30, 40, 80));
        assert_eq!(state.trend, Trend::Declining);
        assert_eq!(state.time_bucket, TimeBucket::Night);
    }

    #[test]
    fn test_weekend_adjustment() {
        let state = estimate_energy_state(at(17, 19), None);
        // evening: physical -10, spiritual +15; weekend: +5, -5, +10
        assert_eq!((state.physical, state.mental, state.spiritual), (45, 45, 75));
        assert!(state.is_weekend());
        assert_eq!(state.day_of_week, 6);
    }

    #[test]
    fn test_axes_are_clamped() {
        let profile = parse_profile(Some("ESTP"), None, None);
        let state = estimate_energy_state(at(17, 8), Some(&profile));
        // physical 50+20+10+10+5 = 95 -> 90
        assert_eq!(state.physical, 90);

        let low = EnergyState3D::from_axes(-40, 5, 200, Trend::Stable, TimeBucket::Night, 1);
        assert_eq!((low.physical, low.mental, low.spiritual), (10, 10, 90));
        assert!((low.balance - 110.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(TimeBucket::from_hour(4), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(5), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(11), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(17), TimeBucket::Afternoon);
        assert_eq!(TimeBucket::from_hour(22), TimeBucket::Evening);
        assert_eq!(TimeBucket::from_hour(23), TimeBucket::Night);
        assert_eq!(Trend::from_hour(5), Trend::Stable);
        assert_eq!(Trend::from_hour(12), Trend::Rising);
        assert_eq!(Trend::from_hour(18), Trend::Declining);
    }
}
