use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const TEAMS: [&str; 10] = [
    "Chennai Super Kings",
    "Mumbai Indians",
    "Royal Challengers Bangalore",
    "Kolkata Knight Riders",
    "Rajasthan Royals",
    "Punjab Kings",
    "Delhi Capitals",
    "Sunrisers Hyderabad",
    "Lucknow Super Giants",
    "Gujarat Titans",
];

const KINDS: [&str; 3] = ["BAT", "AR", "BOWL"];

const BASE_PRICES: [f64; 6] = [0.3, 0.5, 0.75, 1.0, 1.5, 2.0];

/// Minimal deterministic PRNG (splitmix64).
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// One generated row; `None` prices are written as `-` like the real data.
struct Row {
    player: String,
    team: String,
    kind: String,
    base: Option<f64>,
    sold: Option<f64>,
}

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut n = 0;
    let mut next_name = || {
        n += 1;
        format!("Player {n:03}")
    };

    for team in TEAMS {
        // Retentions: no base price, a fixed retention fee.
        let retained = 1 + (rng.next_u64() % 5) as usize;
        for _ in 0..retained {
            let fee = [4.0, 11.0, 14.0, 18.0][(rng.next_u64() % 4) as usize];
            rows.push(Row {
                player: next_name(),
                team: team.to_string(),
                kind: rng.pick(&KINDS).to_string(),
                base: None,
                sold: Some(fee),
            });
        }
        // Auction buys: sold at a multiple of the base price.
        for _ in 0..15 {
            let base = *rng.pick(&BASE_PRICES);
            let sold = (base * (1.0 + rng.next_f64() * 8.0) * 20.0).round() / 20.0;
            rows.push(Row {
                player: next_name(),
                team: team.to_string(),
                kind: rng.pick(&KINDS).to_string(),
                base: Some(base),
                sold: Some(sold),
            });
        }
    }

    // Unsold players carry the team sentinel.
    for _ in 0..40 {
        rows.push(Row {
            player: next_name(),
            team: "-".to_string(),
            kind: rng.pick(&KINDS).to_string(),
            base: Some(*rng.pick(&BASE_PRICES)),
            sold: None,
        });
    }

    // Announced later.
    rows.push(Row {
        player: "TBA".to_string(),
        team: TEAMS[0].to_string(),
        kind: "BAT".to_string(),
        base: None,
        sold: None,
    });
    rows
}

fn price_text(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn write_csv(path: &str, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(["Players", "Team", "Type", "Base", "Sold"])?;
    for row in rows {
        writer.write_record([
            row.player.as_str(),
            row.team.as_str(),
            row.kind.as_str(),
            price_text(row.base).as_str(),
            price_text(row.sold).as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Players", DataType::Utf8, false),
        Field::new("Team", DataType::Utf8, false),
        Field::new("Type", DataType::Utf8, false),
        Field::new("Base", DataType::Float64, true),
        Field::new("Sold", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.player.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.team.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.kind.as_str()))),
            Arc::new(rows.iter().map(|r| r.base).collect::<Float64Array>()),
            Arc::new(rows.iter().map(|r| r.sold).collect::<Float64Array>()),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng(42);
    let rows = generate(&mut rng);

    write_csv("sample_auction.csv", &rows)?;
    write_parquet("sample_auction.parquet", &rows)?;

    println!(
        "Wrote {} players across {} teams to sample_auction.csv and sample_auction.parquet",
        rows.len(),
        TEAMS.len()
    );
    Ok(())
}
