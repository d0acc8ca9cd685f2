use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::model::{TemperatureDataset, TemperatureRecord};

// ---------------------------------------------------------------------------
// Year predicate
// ---------------------------------------------------------------------------

/// How a record's timestamp is matched against a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearFilter {
    /// The timestamp text contains the given string anywhere.
    /// `"2019-07-01"` matches `"2019"`, `"19"` and `"01"` alike.
    Contains(String),
    /// The timestamp parses as a date whose calendar year equals the value.
    /// Unparseable timestamps never match.
    Calendar(i32),
}

impl YearFilter {
    pub fn matches(&self, record: &TemperatureRecord) -> bool {
        match self {
            YearFilter::Contains(text) => record.timestamp.contains(text.as_str()),
            YearFilter::Calendar(year) => {
                parse_timestamp(&record.timestamp).is_some_and(|d| d.year() == *year)
            }
        }
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a `HH:MM:SS` time part.
pub fn parse_timestamp(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Rows for one city, in dataset order. Matching is exact and case-sensitive.
pub fn city_rows<'a>(
    dataset: &'a TemperatureDataset,
    city: &'a str,
) -> impl Iterator<Item = &'a TemperatureRecord> + 'a {
    dataset.records().iter().filter(move |r| r.city == city)
}

/// Rows for one (city, season) pair, in dataset order.
pub fn season_rows<'a>(
    dataset: &'a TemperatureDataset,
    city: &'a str,
    season: &'a str,
) -> impl Iterator<Item = &'a TemperatureRecord> + 'a {
    city_rows(dataset, city).filter(move |r| r.season == season)
}

/// Rows for one (city, season) pair restricted by a year predicate.
pub fn season_year_rows<'a>(
    dataset: &'a TemperatureDataset,
    city: &'a str,
    season: &'a str,
    year: &'a YearFilter,
) -> impl Iterator<Item = &'a TemperatureRecord> + 'a {
    season_rows(dataset, city, season).filter(move |r| year.matches(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SPRING, SUMMER};

    fn rec(timestamp: &str) -> TemperatureRecord {
        TemperatureRecord::new("Moscow", SUMMER, timestamp, 20.0)
    }

    #[test]
    fn contains_matches_any_substring_of_the_timestamp() {
        let r = rec("2019-07-01");
        assert!(YearFilter::Contains("2019".into()).matches(&r));
        assert!(YearFilter::Contains("19".into()).matches(&r));
        assert!(YearFilter::Contains("01".into()).matches(&r));
        assert!(!YearFilter::Contains("2018".into()).matches(&r));
    }

    #[test]
    fn calendar_matches_only_the_parsed_year() {
        let r = rec("2019-07-01");
        assert!(YearFilter::Calendar(2019).matches(&r));
        assert!(!YearFilter::Calendar(2001).matches(&r));
        assert!(YearFilter::Calendar(2020).matches(&rec("2020-01-05 12:00:00")));
        assert!(!YearFilter::Calendar(2019).matches(&rec("not a date 2019")));
    }

    #[test]
    fn season_rows_keep_dataset_order_and_are_case_sensitive() {
        let ds = TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Moscow", SPRING, "2019-03-01", 1.0),
            TemperatureRecord::new("Moscow", SUMMER, "2019-07-01", 21.0),
            TemperatureRecord::new("moscow", SPRING, "2019-03-02", 99.0),
            TemperatureRecord::new("Moscow", SPRING, "2019-03-03", 3.0),
        ]);
        let temps: Vec<f64> = season_rows(&ds, "Moscow", SPRING)
            .map(|r| r.temperature)
            .collect();
        assert_eq!(temps, [1.0, 3.0]);
    }

    #[test]
    fn season_year_rows_apply_the_year_predicate() {
        let ds = TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Moscow", SPRING, "2018-03-01", 1.0),
            TemperatureRecord::new("Moscow", SPRING, "2019-03-01", 2.0),
        ]);
        let year = YearFilter::Contains("2019".into());
        let temps: Vec<f64> = season_year_rows(&ds, "Moscow", SPRING, &year)
            .map(|r| r.temperature)
            .collect();
        assert_eq!(temps, [2.0]);
    }
}
