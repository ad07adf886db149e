use super::model::{AuctionTable, Cell, PlayerRecord, RawRow};

/// Team value used in the source data for players without a team.
pub const TEAM_SENTINEL: &str = "-";

/// Price marker for "no value"; expected, so not counted as a bad cell.
const MISSING_PRICE: &str = "-";

/// Policy knobs for turning raw rows into [`PlayerRecord`]s.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Label that replaces the `-` team sentinel.
    pub unsold_label: String,
    /// Names of placeholder rows to drop (compared case-sensitively, trimmed).
    pub placeholder_names: Vec<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            unsold_label: "Unsold Players".to_string(),
            placeholder_names: vec!["TBA".to_string()],
        }
    }
}

impl From<&crate::config::DashboardConfig> for NormalizeOptions {
    fn from(config: &crate::config::DashboardConfig) -> Self {
        Self {
            unsold_label: config.unsold_label.clone(),
            placeholder_names: config.placeholder_names.clone(),
        }
    }
}

/// Counters describing what normalization did to the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows_read: usize,
    pub placeholders_dropped: usize,
    pub teams_relabelled: usize,
    /// Non-empty price cells that did not parse as a number.
    pub bad_price_cells: usize,
}

/// Normalize raw rows into an [`AuctionTable`].
///
/// * base price that does not parse → `None` (retained)
/// * sold price that does not parse, or is negative → `0.0`
/// * placeholder names are dropped
/// * the team sentinel (or an empty team) becomes `unsold_label`; the row is kept
///
/// Never fails: a bad cell only degrades that cell.
pub fn normalize(rows: Vec<RawRow>, options: &NormalizeOptions) -> (AuctionTable, NormalizeStats) {
    let mut stats = NormalizeStats {
        rows_read: rows.len(),
        ..Default::default()
    };
    let mut players = Vec::with_capacity(rows.len());

    for row in rows {
        let name = row.name.as_text();
        if options.placeholder_names.iter().any(|p| p.trim() == name) {
            stats.placeholders_dropped += 1;
            continue;
        }

        let mut team = row.team.as_text();
        if team.is_empty() || team == TEAM_SENTINEL {
            team = options.unsold_label.clone();
            stats.teams_relabelled += 1;
        }

        let base_price = parse_price(&row.base, &mut stats);
        let sold_price = match parse_price(&row.sold, &mut stats) {
            Some(price) if price < 0.0 => {
                stats.bad_price_cells += 1;
                0.0
            }
            Some(price) => price,
            None => 0.0,
        };

        players.push(PlayerRecord::new(
            name,
            team,
            row.kind.as_text(),
            base_price,
            sold_price,
        ));
    }

    if stats.bad_price_cells > 0 {
        log::debug!(
            "{} price cells could not be parsed and were treated as missing",
            stats.bad_price_cells
        );
    }

    (AuctionTable::from_players(players), stats)
}

fn parse_price(cell: &Cell, stats: &mut NormalizeStats) -> Option<f64> {
    let value = cell.as_f64();
    if value.is_none() && *cell != Cell::Null && cell.as_text() != MISSING_PRICE {
        stats.bad_price_cells += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AuctionStatus, SoldStatus};

    fn raw(name: &str, team: &str, kind: &str, base: &str, sold: &str) -> RawRow {
        RawRow {
            name: Cell::from(name),
            team: Cell::from(team),
            kind: Cell::from(kind),
            base: Cell::from(base),
            sold: Cell::from(sold),
        }
    }

    #[test]
    fn derives_statuses_and_coerces_prices() {
        let rows = vec![
            raw("A", "TeamX", "BAT", "-", "18"),
            raw("B", "TeamX", "BOWL", "2.0", "5.0"),
            raw("C", "TeamY", "BAT", "1.0", "-"),
            raw("G", "TeamY", "AR", "1.0", "n/a"),
        ];
        let (table, stats) = normalize(rows, &NormalizeOptions::default());

        let a = &table.players[0];
        assert_eq!(a.base_price, None);
        assert_eq!(a.sold_price, 18.0);
        assert_eq!(a.auction_status, AuctionStatus::Retained);

        let c = &table.players[2];
        assert_eq!(c.sold_price, 0.0);
        assert_eq!(c.sold_status, SoldStatus::Unsold);

        assert_eq!(table.players[3].sold_status, SoldStatus::Unsold);
        assert_eq!(stats.bad_price_cells, 1);
    }

    #[test]
    fn sentinel_team_is_relabelled_and_kept() {
        let rows = vec![
            raw("D", "-", "AR", "0.75", "0"),
            raw("E", "", "AR", "0.5", "0"),
        ];
        let (table, stats) = normalize(rows, &NormalizeOptions::default());

        assert_eq!(table.len(), 2);
        assert!(table.players.iter().all(|p| p.team == "Unsold Players"));
        assert_eq!(stats.teams_relabelled, 2);
    }

    #[test]
    fn placeholder_rows_are_dropped() {
        let rows = vec![
            raw("TBA", "TeamX", "BAT", "", ""),
            raw(" TBA ", "TeamX", "BAT", "", ""),
            raw("F", "TeamX", "BAT", "", "4"),
        ];
        let (table, stats) = normalize(rows, &NormalizeOptions::default());

        assert_eq!(table.len(), 1);
        assert_eq!(table.players[0].name, "F");
        assert_eq!(stats.placeholders_dropped, 2);
        assert_eq!(stats.rows_read, 3);
    }

    #[test]
    fn names_are_never_decorated() {
        let (table, _) = normalize(
            vec![raw("Retained Guy", "TeamX", "BAT", "", "14")],
            &NormalizeOptions::default(),
        );
        assert_eq!(table.players[0].name, "Retained Guy");
    }

    #[test]
    fn invariants_hold_for_every_record() {
        let rows = vec![
            raw("A", "T", "BAT", "", "0"),
            raw("B", "T", "BAT", "x", "abc"),
            raw("C", "T", "BAT", "1", "0"),
            raw("D", "T", "BAT", "1", "3.2"),
            raw("E", "T", "BAT", "", "7"),
            raw("F", "T", "BAT", "1", "-2"),
            raw("G", "T", "AR", "", "-5"),
            raw("H", "T", "AR", "0.5", "inf"),
        ];
        let (table, stats) = normalize(rows, &NormalizeOptions::default());
        assert_eq!(table.len(), 8);
        // "x", "abc", "-2", "-5" and "inf".
        assert_eq!(stats.bad_price_cells, 5);

        for p in &table.players {
            assert_eq!(p.auction_status == AuctionStatus::Retained, p.base_price.is_none());
            if p.sold_status == SoldStatus::Sold {
                assert!(p.sold_price > 0.0 && p.base_price.is_some());
            }
            if p.sold_status == SoldStatus::Unsold {
                assert!(p.sold_price == 0.0 && p.base_price.is_some());
            }
            assert!(p.sold_price >= 0.0);
        }
    }

    #[test]
    fn negative_sold_price_becomes_unsold() {
        let (table, stats) = normalize(
            vec![raw("N", "TeamY", "BAT", "1.0", "-2")],
            &NormalizeOptions::default(),
        );
        let p = &table.players[0];
        assert_eq!(p.sold_price, 0.0);
        assert_eq!(p.sold_status, SoldStatus::Unsold);
        assert_eq!(stats.bad_price_cells, 1);
    }
}
