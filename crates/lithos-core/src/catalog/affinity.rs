//! Preferred-id tables for time-bucket and trend affinity.
//!
//! Loaded from the `[affinity]` table of the catalog document so tuning
//! does not require code changes.

use serde::{Deserialize, Serialize};

use crate::energy::{TimeBucket, Trend};

/// Preferred ids for each time bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeBucketAffinity {
    #[serde(default)]
    pub morning: Vec<String>,
    #[serde(default)]
    pub afternoon: Vec<String>,
    #[serde(default)]
    pub evening: Vec<String>,
    #[serde(default)]
    pub night: Vec<String>,
}

/// Preferred ids for each energy trend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAffinity {
    #[serde(default)]
    pub rising: Vec<String>,
    #[serde(default)]
    pub stable: Vec<String>,
    #[serde(default)]
    pub declining: Vec<String>,
}

/// Both affinity tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffinityTables {
    #[serde(default)]
    pub time_bucket: TimeBucketAffinity,
    #[serde(default)]
    pub trend: TrendAffinity,
}

impl AffinityTables {
    pub fn for_time_bucket(&self, bucket: TimeBucket) -> &[String] {
        match bucket {
            TimeBucket::Morning => &self.time_bucket.morning,
            TimeBucket::Afternoon => &self.time_bucket.afternoon,
            TimeBucket::Evening => &self.time_bucket.evening,
            TimeBucket::Night => &self.time_bucket.night,
        }
    }

    pub fn for_trend(&self, trend: Trend) -> &[String] {
        match trend {
            Trend::Rising => &self.trend.rising,
            Trend::Stable => &self.trend.stable,
            Trend::Declining => &self.trend.declining,
        }
    }

    pub fn prefers_in_bucket(&self, bucket: TimeBucket, id: &str) -> bool {
        self.for_time_bucket(bucket).iter().any(|p| p == id)
    }

    pub fn prefers_in_trend(&self, trend: Trend, id: &str) -> bool {
        self.for_trend(trend).iter().any(|p| p == id)
    }

    /// Every (table name, id) pair, for validation against the catalog.
    pub fn references(&self) -> Vec<(String, &str)> {
        let mut refs = Vec::new();
        for bucket in TimeBucket::ALL {
            for id in self.for_time_bucket(bucket) {
                refs.push((format!("time_bucket.{}", bucket.name()), id.as_str()));
            }
        }
        for trend in Trend::ALL {
            for id in self.for_trend(trend) {
                refs.push((format!("trend.{}", trend.name()), id.as_str()));
            }
        }
        refs
    }
}
