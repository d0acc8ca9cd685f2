use std::collections::BTreeMap;

use super::stats::SeasonBounds;
use crate::data::filter::city_rows;
use crate::data::model::{TemperatureDataset, calendar_rank};

/// Mean and population σ of one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonStats {
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// Per-season statistics for one city, keyed by season label.
///
/// Iteration follows label order (alphabetical). Use
/// [`SeasonalProfile::in_calendar_order`] for winter → autumn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalProfile {
    pub seasons: BTreeMap<String, SeasonStats>,
}

impl SeasonalProfile {
    pub fn get(&self, season: &str) -> Option<&SeasonStats> {
        self.seasons.get(season)
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// Entries sorted winter, spring, summer, autumn; other labels last.
    pub fn in_calendar_order(&self) -> Vec<(&str, &SeasonStats)> {
        let mut entries: Vec<(&str, &SeasonStats)> = self
            .seasons
            .iter()
            .map(|(season, stats)| (season.as_str(), stats))
            .collect();
        entries.sort_by_key(|(season, _)| calendar_rank(season));
        entries
    }
}

/// Group the rows of `city` by season and compute mean and population σ of
/// each group. Rows without a finite temperature are not counted. A city
/// with no rows yields an empty profile.
pub fn aggregate_profiles(dataset: &TemperatureDataset, city: &str) -> SeasonalProfile {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for row in city_rows(dataset, city).filter(|r| r.temperature.is_finite()) {
        groups
            .entry(row.season.clone())
            .or_default()
            .push(row.temperature);
    }

    let seasons = groups
        .into_iter()
        .filter_map(|(season, temps)| {
            let bounds = SeasonBounds::from_sample(&temps)?;
            Some((
                season,
                SeasonStats {
                    mean: bounds.mean,
                    std_dev: bounds.std_dev,
                    count: temps.len(),
                },
            ))
        })
        .collect();

    SeasonalProfile { seasons }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::data::model::TemperatureRecord;

    #[test]
    fn one_entry_per_season_present() {
        let ds = TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Moscow", "winter", "2019-01-01", -10.0),
            TemperatureRecord::new("Moscow", "summer", "2019-07-01", 20.0),
            TemperatureRecord::new("Moscow", "winter", "2019-01-02", -6.0),
            TemperatureRecord::new("Berlin", "autumn", "2019-10-01", 9.0),
        ]);
        let profile = aggregate_profiles(&ds, "Moscow");
        assert_eq!(profile.len(), 2);

        let winter = profile.get("winter").unwrap();
        assert_relative_eq!(winter.mean, -8.0);
        assert_relative_eq!(winter.std_dev, 2.0);
        assert_eq!(winter.count, 2);
        assert!(profile.get("autumn").is_none());
    }

    #[test]
    fn single_record_season_has_zero_std_dev() {
        let ds = TemperatureDataset::from_records(vec![TemperatureRecord::new(
            "Lima", "summer", "2019-01-05", 22.5,
        )]);
        let profile = aggregate_profiles(&ds, "Lima");
        assert_eq!(profile.len(), 1);
        assert_eq!(
            profile.get("summer"),
            Some(&SeasonStats {
                mean: 22.5,
                std_dev: 0.0,
                count: 1
            })
        );
    }

    #[test]
    fn calendar_order_is_explicit() {
        let ds = TemperatureDataset::from_records(
            ["autumn", "spring", "winter", "summer"]
                .iter()
                .map(|s| TemperatureRecord::new("Oslo", s, "2019-01-01", 1.0))
                .collect(),
        );
        let profile = aggregate_profiles(&ds, "Oslo");
        let keys: Vec<&str> = profile.seasons.keys().map(String::as_str).collect();
        assert_eq!(keys, ["autumn", "spring", "summer", "winter"]);

        let calendar: Vec<&str> = profile.in_calendar_order().into_iter().map(|(s, _)| s).collect();
        assert_eq!(calendar, ["winter", "spring", "summer", "autumn"]);
    }

    #[test]
    fn nan_rows_are_not_counted() {
        let ds = TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Oslo", "spring", "2019-03-01", 4.0),
            TemperatureRecord::new("Oslo", "spring", "2019-03-02", f64::NAN),
            TemperatureRecord::new("Oslo", "spring", "2019-03-03", 6.0),
            TemperatureRecord::new("Oslo", "winter", "2019-01-01", f64::NAN),
        ]);
        let profile = aggregate_profiles(&ds, "Oslo");
        assert_eq!(
            profile.get("spring"),
            Some(&SeasonStats {
                mean: 5.0,
                std_dev: 1.0,
                count: 2
            })
        );
        assert!(profile.get("winter").is_none());
    }

    #[test]
    fn unknown_city_has_an_empty_profile() {
        assert!(aggregate_profiles(&TemperatureDataset::default(), "Nowhere").is_empty());
    }
}
