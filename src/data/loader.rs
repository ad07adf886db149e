use std::borrow::Cow;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::model::{AuctionTable, Cell, RawRow};
use super::normalize::{NormalizeOptions, NormalizeStats, normalize};

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Accepted header spellings per logical column (compared lower-cased).
const NAME_HEADERS: &[&str] = &["players", "player", "name"];
const TEAM_HEADERS: &[&str] = &["team"];
const KIND_HEADERS: &[&str] = &["type", "role", "kind"];
const BASE_HEADERS: &[&str] = &["base", "base_price", "base price"];
const SOLD_HEADERS: &[&str] = &["sold", "sold_price", "sold price"];

/// Positions of the five required columns in a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    team: usize,
    kind: usize,
    base: usize,
    sold: usize,
}

impl ColumnMap {
    fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |aliases: &[&str], label: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| {
                    let h = h.as_ref().trim().to_ascii_lowercase();
                    aliases.contains(&h.as_str())
                })
                .with_context(|| format!("missing '{label}' column (expected one of {aliases:?})"))
        };
        Ok(ColumnMap {
            name: find(NAME_HEADERS, "Players")?,
            team: find(TEAM_HEADERS, "Team")?,
            kind: find(KIND_HEADERS, "Type")?,
            base: find(BASE_HEADERS, "Base")?,
            sold: find(SOLD_HEADERS, "Sold")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalize an auction table. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Players,Team,Type,Base,Sold` (recommended)
/// * `.json`    – `[{ "Players": ..., "Team": ..., ... }, ...]`
/// * `.parquet` – flat table with the same five columns
pub fn load_table(path: &Path, options: &NormalizeOptions) -> Result<(AuctionTable, NormalizeStats)> {
    let rows = load_rows(path).with_context(|| format!("loading {}", path.display()))?;
    let (table, stats) = normalize(rows, options);
    log::info!(
        "Loaded {} of {} rows from {} ({} placeholders dropped, {} team sentinels relabelled)",
        table.len(),
        stats.rows_read,
        path.display(),
        stats.placeholders_dropped,
        stats.teams_relabelled
    );
    if table.is_empty() {
        log::warn!("{} contains no players", path.display());
    }
    if stats.bad_price_cells > 0 {
        log::warn!(
            "{}: {} price cells were not numeric",
            path.display(),
            stats.bad_price_cells
        );
    }
    Ok((table, stats))
}

/// Read raw rows from a file without normalizing them.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            read_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            read_json(&text)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Read CSV rows. Short rows are padded with empty cells and fields that are
/// not valid UTF-8 are decoded lossily, so one bad cell never fails the
/// whole load.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let columns = ColumnMap::resolve(&headers)?;

    let mut rows = Vec::new();
    let mut lossy = 0;
    for (row_no, result) in reader.byte_records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut cell = |idx: usize| decode_field(record.get(idx), &mut lossy);
        rows.push(RawRow {
            name: cell(columns.name),
            team: cell(columns.team),
            kind: cell(columns.kind),
            base: cell(columns.base),
            sold: cell(columns.sold),
        });
    }
    if lossy > 0 {
        log::warn!("{lossy} CSV fields were not valid UTF-8 and were decoded lossily");
    }
    Ok(rows)
}

fn decode_field(bytes: Option<&[u8]>, lossy: &mut usize) -> Cell {
    let Some(bytes) = bytes else {
        return Cell::Null;
    };
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        *lossy += 1;
    }
    Cell::from(text.as_ref())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
///
/// A column must appear in at least one record. A record that lacks it gets
/// an empty cell.
pub fn read_json(text: &str) -> Result<Vec<RawRow>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let objects = records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            rec.as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))
        })
        .collect::<Result<Vec<_>>>()?;

    if !objects.is_empty() {
        let keys: BTreeSet<&String> = objects.iter().flat_map(|obj| obj.keys()).collect();
        let keys: Vec<&String> = keys.into_iter().collect();
        ColumnMap::resolve(&keys)?;
    }

    let mut missing = 0;
    let mut rows = Vec::with_capacity(objects.len());
    for obj in objects {
        let mut cell = |aliases: &[&str]| match json_field(obj, aliases) {
            Some(value) => json_to_cell(value),
            None => {
                missing += 1;
                Cell::Null
            }
        };
        rows.push(RawRow {
            name: cell(NAME_HEADERS),
            team: cell(TEAM_HEADERS),
            kind: cell(KIND_HEADERS),
            base: cell(BASE_HEADERS),
            sold: cell(SOLD_HEADERS),
        });
    }
    if missing > 0 {
        log::warn!("{missing} JSON fields were missing and left empty");
    }
    Ok(rows)
}

fn json_field<'a>(obj: &'a JsonMap<String, JsonValue>, aliases: &[&str]) -> Option<&'a JsonValue> {
    obj.iter()
        .find(|(key, _)| aliases.contains(&key.trim().to_ascii_lowercase().as_str()))
        .map(|(_, value)| value)
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::String(s) => Cell::from(s.as_str()),
        JsonValue::Number(n) => n.as_f64().map_or(Cell::Null, Cell::Number),
        JsonValue::Null => Cell::Null,
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet
// ---------------------------------------------------------------------------

/// Every required column is cast to UTF-8 first, so numeric and text
/// encodings of the price columns go through the same coercion path.
fn load_parquet(path: &Path) -> Result<Vec<RawRow>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let headers: Vec<&String> = schema.fields().iter().map(|f| f.name()).collect();
        let columns = ColumnMap::resolve(&headers)?;

        let text_column = |idx: usize| -> Result<ArrayRef> {
            cast(batch.column(idx), &DataType::Utf8)
                .with_context(|| format!("casting column '{}' to text", headers[idx]))
        };
        let name = text_column(columns.name)?;
        let team = text_column(columns.team)?;
        let kind = text_column(columns.kind)?;
        let base = text_column(columns.base)?;
        let sold = text_column(columns.sold)?;

        for row in 0..batch.num_rows() {
            rows.push(RawRow {
                name: text_cell(&name, row)?,
                team: text_cell(&team, row)?,
                kind: text_cell(&kind, row)?,
                base: text_cell(&base, row)?,
                sold: text_cell(&sold, row)?,
            });
        }
    }
    Ok(rows)
}

fn text_cell(col: &ArrayRef, row: usize) -> Result<Cell> {
    if col.is_null(row) {
        return Ok(Cell::Null);
    }
    let strings = col
        .as_any()
        .downcast_ref::<StringArray>()
        .context("expected a UTF-8 column after cast")?;
    Ok(Cell::from(strings.value(row)))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SAMPLE_CSV: &str = "\
Players,Team,Type,Base,Sold
Virat Kohli,Royal Challengers Bangalore,BAT,-,21
TBA,Royal Challengers Bangalore,BAT,-,-
Rishabh Pant,Lucknow Super Giants,BAT,2,27
Prithvi Shaw,-,BAT,0.75,-
";

    #[test]
    fn csv_rows_are_read_in_order() {
        let rows = read_csv(Cursor::new(SAMPLE_CSV)).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].name, Cell::Text("Virat Kohli".into()));
        assert_eq!(rows[3].team, Cell::Text("-".into()));
    }

    #[test]
    fn csv_end_to_end_normalization() {
        let rows = read_csv(Cursor::new(SAMPLE_CSV)).unwrap();
        let (table, stats) = normalize(rows, &NormalizeOptions::default());

        assert_eq!(table.len(), 3);
        assert_eq!(stats.placeholders_dropped, 1);
        assert_eq!(table.players[2].team, "Unsold Players");
        assert_eq!(table.players[2].base_price, Some(0.75));
        assert_eq!(table.players[0].base_price, None);
    }

    #[test]
    fn headers_are_matched_case_insensitively() {
        let csv = "player,TEAM,role,base price,Sold_Price\nA,X,BAT,1,2\n";
        let rows = read_csv(Cursor::new(csv)).unwrap();
        assert_eq!(rows[0].sold, Cell::Text("2".into()));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Players,Team,Type,Base\nA,X,BAT,1\n";
        let err = read_csv(Cursor::new(csv)).unwrap_err();
        assert!(format!("{err:#}").contains("Sold"));
    }

    #[test]
    fn short_rows_are_padded_not_rejected() {
        let csv = "Players,Team,Type,Base,Sold\nA,X,BAT\n";
        let rows = read_csv(Cursor::new(csv)).unwrap();
        assert_eq!(rows[0].base, Cell::Null);
        assert_eq!(rows[0].sold, Cell::Null);
    }

    #[test]
    fn json_records_accept_numbers_and_nulls() {
        let json = r#"[
            {"Players": "A", "Team": "X", "Type": "BAT", "Base": null, "Sold": 18},
            {"Players": "B", "Team": "-", "Type": "AR", "Base": 1.5, "Sold": "-"}
        ]"#;
        let rows = read_json(json).unwrap();
        assert_eq!(rows[0].base, Cell::Null);
        assert_eq!(rows[0].sold, Cell::Number(18.0));
        assert_eq!(rows[1].base, Cell::Number(1.5));
    }

    #[test]
    fn invalid_utf8_cell_does_not_fail_the_load() {
        let mut bytes = b"Players,Team,Type,Base,Sold\nA,X,BAT,1,2\nB,X,BAT,1,".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\nC,Y,AR,0.5,3\n");

        let rows = read_csv(Cursor::new(bytes)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, Cell::Text("B".into()));
        assert_eq!(rows[1].sold.as_f64(), None);

        let (table, stats) = normalize(rows, &NormalizeOptions::default());
        assert_eq!(table.len(), 3);
        assert_eq!(table.players[1].sold_price, 0.0);
        assert_eq!(stats.bad_price_cells, 1);
    }

    #[test]
    fn json_record_missing_a_key_keeps_the_row() {
        let json = r#"[
            {"Players": "A", "Team": "X", "Type": "BAT", "Base": 1.0, "Sold": 4},
            {"Players": "B", "Team": "X", "Type": "AR", "Base": 2.0}
        ]"#;
        let rows = read_json(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].sold, Cell::Null);
        assert_eq!(rows[1].base, Cell::Number(2.0));
    }

    #[test]
    fn json_column_absent_everywhere_is_reported() {
        let json = r#"[{"Players": "A", "Team": "X", "Type": "BAT", "Base": 1.0}]"#;
        let err = read_json(json).unwrap_err();
        assert!(format!("{err:#}").contains("Sold"));
    }

    #[test]
    fn empty_json_array_is_an_empty_table() {
        assert!(read_json("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_table(Path::new("no_such_dir/players.csv"), &NormalizeOptions::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("no_such_dir/players.csv"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_rows(Path::new("players.xlsx")).is_err());
    }
}
