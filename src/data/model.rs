use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Season labels
// ---------------------------------------------------------------------------

pub const WINTER: &str = "winter";
pub const SPRING: &str = "spring";
pub const SUMMER: &str = "summer";
pub const AUTUMN: &str = "autumn";

/// The four labels in calendar order.
pub const SEASONS: [&str; 4] = [WINTER, SPRING, SUMMER, AUTUMN];

/// Position of a season label in the calendar year.
/// Unknown labels sort after the known ones.
pub fn calendar_rank(season: &str) -> usize {
    SEASONS
        .iter()
        .position(|s| *s == season)
        .unwrap_or(SEASONS.len())
}

// ---------------------------------------------------------------------------
// TemperatureRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single daily temperature observation.
///
/// `timestamp` keeps the textual form found in the source file; year
/// filtering operates on that text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub city: String,
    pub season: String,
    pub timestamp: String,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl TemperatureRecord {
    pub fn new(city: &str, season: &str, timestamp: &str, temperature: f64) -> Self {
        Self {
            city: city.to_string(),
            season: season.to_string(),
            timestamp: timestamp.to_string(),
            temperature,
        }
    }
}

// ---------------------------------------------------------------------------
// TemperatureDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct TemperatureDataset {
    records: Vec<TemperatureRecord>,
    /// Distinct cities in order of first appearance.
    cities: Vec<String>,
}

impl TemperatureDataset {
    /// Build the city index from the loaded records.
    pub fn from_records(records: Vec<TemperatureRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut cities = Vec::new();
        for rec in &records {
            if seen.insert(rec.city.as_str()) {
                cities.push(rec.city.clone());
            }
        }
        TemperatureDataset { records, cities }
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_keep_first_appearance_order() {
        let ds = TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Moscow", SPRING, "2019-03-01", 1.0),
            TemperatureRecord::new("Berlin", SPRING, "2019-03-01", 8.0),
            TemperatureRecord::new("Moscow", SUMMER, "2019-07-01", 21.0),
            TemperatureRecord::new("Cairo", WINTER, "2019-01-01", 15.0),
        ]);
        assert_eq!(ds.cities(), ["Moscow", "Berlin", "Cairo"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn calendar_rank_orders_known_seasons_first() {
        let mut labels = vec!["monsoon", AUTUMN, WINTER, SUMMER, SPRING];
        labels.sort_by_key(|s| calendar_rank(s));
        assert_eq!(labels, [WINTER, SPRING, SUMMER, AUTUMN, "monsoon"]);
    }
}
