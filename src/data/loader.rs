use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{TemperatureDataset, TemperatureRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a temperature history from a file.  Dispatch by extension.
///
/// Every format carries the columns `city`, `season`, `timestamp` and
/// `temperature`; any other columns are ignored.
///
/// Supported formats:
/// * `.csv`     – header row plus one observation per line (recommended)
/// * `.json`    – `[{ "city": "...", "season": "...", "timestamp": "...", "temperature": 1.5 }, ...]`
/// * `.parquet` – one row per observation
pub fn load_file(path: &Path) -> Result<TemperatureDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:
///
/// ```text
/// city,timestamp,temperature,season
/// New York,2010-01-01,-2.41,winter
/// ```
///
/// Column order does not matter; `timestamp` is kept verbatim.
fn load_csv(path: &Path) -> Result<TemperatureDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<TemperatureRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(TemperatureDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')` with
/// the timestamp column stored as text.
fn load_json(path: &Path) -> Result<TemperatureDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<TemperatureRecord> =
        serde_json::from_str(&text).context("parsing JSON records")?;
    Ok(TemperatureDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one observation per row.
///
/// Column types are normalised with Arrow casts:
/// - `city`, `season`: any string type
/// - `timestamp`: string, Date32/Date64 or Timestamp (rendered as ISO text)
/// - `temperature`: any numeric type
fn load_parquet(path: &Path) -> Result<TemperatureDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut row_offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let city = column_as(&batch, "city", &DataType::Utf8)?;
        let season = column_as(&batch, "season", &DataType::Utf8)?;
        let timestamp = column_as(&batch, "timestamp", &DataType::Utf8)?;
        let temperature = column_as(&batch, "temperature", &DataType::Float64)?;

        let city = city.as_string::<i32>();
        let season = season.as_string::<i32>();
        let timestamp = timestamp.as_string::<i32>();
        let temperature = temperature.as_primitive::<Float64Type>();

        for row in 0..batch.num_rows() {
            let row_no = row_offset + row;
            if city.is_null(row)
                || season.is_null(row)
                || timestamp.is_null(row)
                || temperature.is_null(row)
            {
                bail!("Row {row_no}: null value in a required column");
            }
            records.push(TemperatureRecord {
                city: city.value(row).to_string(),
                season: season.value(row).to_string(),
                timestamp: timestamp.value(row).to_string(),
                temperature: temperature.value(row),
            });
        }
        row_offset += batch.num_rows();
    }

    Ok(TemperatureDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Look a column up by name and cast it to `target`.
fn column_as(batch: &RecordBatch, name: &str, target: &DataType) -> Result<ArrayRef> {
    let col = batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))?;
    if col.data_type() == target {
        return Ok(col.clone());
    }
    cast(col.as_ref(), target).with_context(|| {
        format!("column '{name}' ({:?}) cannot be read as {target:?}", col.data_type())
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{Date32Array, Float32Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    #[test]
    fn loads_csv_in_any_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temps.csv");
        std::fs::write(
            &path,
            "city,timestamp,temperature,season\n\
             Moscow,2019-03-01,-1.5,spring\n\
             Berlin, 2019-07-01 ,21.25,summer\n",
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0], TemperatureRecord::new("Moscow", "spring", "2019-03-01", -1.5));
        assert_eq!(ds.records()[1].timestamp, "2019-07-01");
        assert_eq!(ds.cities(), ["Moscow", "Berlin"]);
    }

    #[test]
    fn csv_with_bad_temperature_reports_the_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temps.csv");
        std::fs::write(
            &path,
            "city,season,timestamp,temperature\nMoscow,spring,2019-03-01,warm\n",
        )
        .unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temps.JSON");
        std::fs::write(
            &path,
            r#"[{"city":"Cairo","season":"winter","timestamp":"2019-01-02","temperature":14.0,"extra":1}]"#,
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records(), [TemperatureRecord::new("Cairo", "winter", "2019-01-02", 14.0)]);
    }

    #[test]
    fn loads_parquet_with_date_and_float32_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temps.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("city", DataType::Utf8, false),
            Field::new("season", DataType::Utf8, false),
            Field::new("timestamp", DataType::Date32, false),
            Field::new("temperature", DataType::Float32, false),
        ]));
        // 17_713 days after the epoch is 2018-07-01.
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Oslo", "Oslo"])),
                Arc::new(StringArray::from(vec!["summer", "winter"])),
                Arc::new(Date32Array::from(vec![17_713, 17_532])),
                Arc::new(Float32Array::from(vec![18.5_f32, -4.0])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].timestamp, "2018-07-01");
        assert_eq!(ds.records()[0].temperature, 18.5);
        assert_eq!(ds.records()[1].timestamp, "2018-01-01");
        assert_eq!(ds.records()[1].season, "winter");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_file(Path::new("temps.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
