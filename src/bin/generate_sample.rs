use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, NaiveDate};
use parquet::arrow::ArrowWriter;

use season_watch::data::model::{AUTUMN, SPRING, SUMMER, TemperatureRecord, WINTER};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Seasonal mean temperatures: winter, spring, summer, autumn.
const CITIES: [(&str, [f64; 4]); 10] = [
    ("New York", [0.0, 10.0, 25.0, 15.0]),
    ("London", [5.0, 11.0, 18.0, 12.0]),
    ("Paris", [4.0, 12.0, 20.0, 13.0]),
    ("Tokyo", [6.0, 15.0, 27.0, 18.0]),
    ("Moscow", [-10.0, 5.0, 18.0, 8.0]),
    ("Sydney", [12.0, 18.0, 25.0, 20.0]),
    ("Berlin", [0.0, 10.0, 20.0, 11.0]),
    ("Cairo", [15.0, 25.0, 35.0, 25.0]),
    ("Dubai", [20.0, 30.0, 40.0, 30.0]),
    ("Singapore", [27.0, 28.0, 28.0, 27.0]),
];

fn season_of(month: u32) -> (&'static str, usize) {
    match month {
        12 | 1 | 2 => (WINTER, 0),
        3..=5 => (SPRING, 1),
        6..=8 => (SUMMER, 2),
        _ => (AUTUMN, 3),
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let start = NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid start date");
    let end = NaiveDate::from_ymd_opt(2019, 12, 31).expect("valid end date");

    let mut records = Vec::new();
    for (city, means) in &CITIES {
        for date in start.iter_days().take_while(|d| *d <= end) {
            let (season, idx) = season_of(date.month());
            let temperature = (rng.gauss(means[idx], 5.0) * 100.0).round() / 100.0;
            records.push(TemperatureRecord {
                city: city.to_string(),
                season: season.to_string(),
                timestamp: date.format("%Y-%m-%d").to_string(),
                temperature,
            });
        }
    }

    // Write CSV
    let csv_path = "sample_temperatures.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    for rec in &records {
        writer.serialize(rec).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV file");

    // Write Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("city", DataType::Utf8, false),
        Field::new("season", DataType::Utf8, false),
        Field::new("timestamp", DataType::Utf8, false),
        Field::new("temperature", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.city.as_str()))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.season.as_str()))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.timestamp.as_str()))),
            Arc::new(Float64Array::from_iter_values(records.iter().map(|r| r.temperature))),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "sample_temperatures.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} readings for {} cities to {csv_path} and {parquet_path}",
        records.len(),
        CITIES.len()
    );
}
