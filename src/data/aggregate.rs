use std::collections::BTreeMap;

use crate::config::RosterLimits;

use super::model::{AuctionStatus, PlayerRecord, PriceKey, SoldStatus};

// Every function here takes a slice of borrowed records (the filtered view)
// and treats an empty slice as a valid, zero-valued input.

// ---------------------------------------------------------------------------
// Scalar metrics
// ---------------------------------------------------------------------------

/// The player holding the highest bid.
#[derive(Debug, Clone, PartialEq)]
pub struct HighestBid {
    pub name: String,
    pub team: String,
    pub price: f64,
}

/// Headline numbers shown in the metrics strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub retained: usize,
    pub auctioned: usize,
    pub sold: usize,
    pub unsold: usize,
    /// Sum of `sold_price` over sold players only.
    pub total_spent: f64,
    /// `None` when nobody has a positive price.
    pub highest_bid: Option<HighestBid>,
}

pub fn summarize(players: &[&PlayerRecord]) -> Summary {
    let mut summary = Summary {
        total: players.len(),
        ..Default::default()
    };
    for p in players {
        match p.auction_status {
            AuctionStatus::Retained => summary.retained += 1,
            AuctionStatus::Auctioned => summary.auctioned += 1,
        }
        // Retention fees are reported by `retention_summary`, not here.
        match p.sold_status {
            SoldStatus::Sold => {
                summary.sold += 1;
                summary.total_spent += p.sold_price;
            }
            SoldStatus::Unsold => summary.unsold += 1,
            SoldStatus::Retained => {}
        }
    }
    summary.highest_bid = highest_bid(players);
    summary
}

/// First player in table order holding the maximum price.
pub fn highest_bid(players: &[&PlayerRecord]) -> Option<HighestBid> {
    let mut best: Option<&PlayerRecord> = None;
    for &p in players {
        if best.map_or(true, |b| p.sold_price > b.sold_price) {
            best = Some(p);
        }
    }
    best.filter(|p| p.sold_price > 0.0).map(|p| HighestBid {
        name: p.name.clone(),
        team: p.team.clone(),
        price: p.sold_price,
    })
}

// ---------------------------------------------------------------------------
// Grouped aggregates
// ---------------------------------------------------------------------------

/// Count and spend for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupTotals {
    pub count: usize,
    pub spent: f64,
}

/// Count and sum of `sold_price` per player kind.
pub fn totals_by_kind(players: &[&PlayerRecord]) -> BTreeMap<String, GroupTotals> {
    let mut groups: BTreeMap<String, GroupTotals> = BTreeMap::new();
    for p in players {
        let entry = groups.entry(p.kind.clone()).or_default();
        entry.count += 1;
        entry.spent += p.sold_price;
    }
    groups
}

/// Per-kind head count split by sold status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub retained: usize,
    pub sold: usize,
    pub unsold: usize,
}

impl StatusCounts {
    pub fn get(&self, status: SoldStatus) -> usize {
        match status {
            SoldStatus::Retained => self.retained,
            SoldStatus::Sold => self.sold,
            SoldStatus::Unsold => self.unsold,
        }
    }
}

pub fn status_counts_by_kind(players: &[&PlayerRecord]) -> BTreeMap<String, StatusCounts> {
    let mut groups: BTreeMap<String, StatusCounts> = BTreeMap::new();
    for p in players {
        let entry = groups.entry(p.kind.clone()).or_default();
        match p.sold_status {
            SoldStatus::Retained => entry.retained += 1,
            SoldStatus::Sold => entry.sold += 1,
            SoldStatus::Unsold => entry.unsold += 1,
        }
    }
    groups
}

/// Sum of `sold_price` per team, highest spender first (ties by name).
pub fn spend_by_team(players: &[&PlayerRecord]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for p in players {
        *groups.entry(p.team.as_str()).or_default() += p.sold_price;
    }
    let mut rows: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(team, spent)| (team.to_string(), spent))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    rows
}

/// Head count per kind, most common first (ties by name).
pub fn kind_counts(players: &[&PlayerRecord]) -> Vec<(String, usize)> {
    let mut rows: Vec<(String, usize)> = totals_by_kind(players)
        .into_iter()
        .map(|(kind, totals)| (kind, totals.count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Number of auctioned players at each base price. Retained players have no
/// base price and are skipped.
pub fn base_price_counts(players: &[&PlayerRecord]) -> BTreeMap<PriceKey, usize> {
    let mut groups: BTreeMap<PriceKey, usize> = BTreeMap::new();
    for p in players {
        if let Some(base) = p.base_price {
            *groups.entry(PriceKey(base)).or_default() += 1;
        }
    }
    groups
}

/// Total `sold_price` at each base price.
pub fn spend_by_base_price(players: &[&PlayerRecord]) -> BTreeMap<PriceKey, f64> {
    let mut groups: BTreeMap<PriceKey, f64> = BTreeMap::new();
    for p in players {
        if let Some(base) = p.base_price {
            *groups.entry(PriceKey(base)).or_default() += p.sold_price;
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

/// The `n` highest-priced players, descending; equal prices keep table order.
pub fn top_by_price<'a>(players: &[&'a PlayerRecord], n: usize) -> Vec<&'a PlayerRecord> {
    let mut ranked = sorted_by_price(players);
    ranked.truncate(n);
    ranked
}

/// All players sorted by `sold_price` descending. Stable.
pub fn sorted_by_price<'a>(players: &[&'a PlayerRecord]) -> Vec<&'a PlayerRecord> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.sold_price.total_cmp(&a.sold_price));
    ranked
}

/// A team's players of one kind, most expensive first.
pub fn squad_of_kind<'a>(players: &[&'a PlayerRecord], kind: &str) -> Vec<&'a PlayerRecord> {
    let of_kind: Vec<&PlayerRecord> = players.iter().copied().filter(|p| p.kind == kind).collect();
    sorted_by_price(&of_kind)
}

/// Players sorted by base price descending; missing base prices sort last.
pub fn sorted_by_base_price<'a>(players: &[&'a PlayerRecord]) -> Vec<&'a PlayerRecord> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| {
        let a = a.base_price.unwrap_or(f64::NEG_INFINITY);
        let b = b.base_price.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    ranked
}

// ---------------------------------------------------------------------------
// Retention accounting
// ---------------------------------------------------------------------------

/// What a team has committed to retentions and what remains for the auction.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionRow {
    pub team: String,
    pub retained_count: usize,
    pub purse_spent: f64,
    /// Signed: a team can be over its slot cap in odd data.
    pub slots_left: i64,
    pub purse_left: f64,
}

/// Slots and purse left for a team, given its retention count and spend.
pub fn slots_and_purse_left(retained_count: usize, purse_spent: f64, limits: RosterLimits) -> (i64, f64) {
    let slots_left = i64::from(limits.total_slots) - retained_count as i64;
    (slots_left, limits.purse_limit - purse_spent)
}

/// One row per team that retained at least one player, sorted by team.
pub fn retention_summary(players: &[&PlayerRecord], limits: RosterLimits) -> Vec<RetentionRow> {
    let mut groups: BTreeMap<&str, GroupTotals> = BTreeMap::new();
    for p in players.iter().filter(|p| p.is_retained()) {
        let entry = groups.entry(p.team.as_str()).or_default();
        entry.count += 1;
        entry.spent += p.sold_price;
    }
    groups
        .into_iter()
        .map(|(team, totals)| {
            let (slots_left, purse_left) = slots_and_purse_left(totals.count, totals.spent, limits);
            RetentionRow {
                team: team.to_string(),
                retained_count: totals.count,
                purse_spent: totals.spent,
                slots_left,
                purse_left,
            }
        })
        .collect()
}

/// Retained players grouped by team (sorted), table order within a team.
pub fn retained_by_team<'a>(players: &[&'a PlayerRecord]) -> BTreeMap<String, Vec<&'a PlayerRecord>> {
    let mut groups: BTreeMap<String, Vec<&PlayerRecord>> = BTreeMap::new();
    for p in players.iter().copied().filter(|p| p.is_retained()) {
        groups.entry(p.team.clone()).or_default().push(p);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn scenario() -> Vec<PlayerRecord> {
        vec![
            PlayerRecord::new("A", "TeamX", "BAT", None, 0.0),
            PlayerRecord::new("B", "TeamX", "BOWL", Some(2.0), 5.0),
            PlayerRecord::new("C", "TeamY", "BAT", Some(1.0), 0.0),
        ]
    }

    fn refs(players: &[PlayerRecord]) -> Vec<&PlayerRecord> {
        players.iter().collect()
    }

    #[test]
    fn example_scenario_metrics() {
        let players = scenario();
        let summary = summarize(&refs(&players));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.retained, 1);
        assert_eq!(summary.auctioned, 2);
        assert_eq!(summary.sold, 1);
        assert_eq!(summary.unsold, 1);
        assert!((summary.total_spent - 5.0).abs() < EPS);

        let best = summary.highest_bid.unwrap();
        assert_eq!(best.name, "B");
        assert!((best.price - 5.0).abs() < EPS);
        assert_eq!(players[2].sold_status, SoldStatus::Unsold);
    }

    #[test]
    fn total_spent_matches_sold_rows() {
        let players = vec![
            PlayerRecord::new("A", "X", "BAT", Some(1.0), 3.5),
            PlayerRecord::new("B", "X", "BAT", Some(1.0), 0.0),
            PlayerRecord::new("C", "Y", "AR", Some(2.0), 11.25),
            PlayerRecord::new("D", "Y", "AR", None, 18.0),
            PlayerRecord::new("E", "Y", "BOWL", None, 4.0),
        ];
        let all = refs(&players);
        let sold_sum: f64 = players
            .iter()
            .filter(|p| p.sold_status == SoldStatus::Sold)
            .map(|p| p.sold_price)
            .sum();
        let summary = summarize(&all);
        assert!((summary.total_spent - sold_sum).abs() < EPS);
        assert!((summary.total_spent - 14.75).abs() < EPS);
        // The highest bid still sees retention fees.
        assert_eq!(summary.highest_bid.unwrap().name, "D");
    }

    #[test]
    fn empty_input_gives_zeroes() {
        let empty: Vec<&PlayerRecord> = Vec::new();
        let summary = summarize(&empty);

        assert_eq!(summary, Summary::default());
        assert!(top_by_price(&empty, 5).is_empty());
        assert!(totals_by_kind(&empty).is_empty());
        assert!(spend_by_team(&empty).is_empty());
        assert!(base_price_counts(&empty).is_empty());
        assert!(retention_summary(&empty, RosterLimits::default()).is_empty());
    }

    #[test]
    fn highest_bid_tie_goes_to_first_in_table_order() {
        let players = vec![
            PlayerRecord::new("First", "X", "BAT", Some(1.0), 9.0),
            PlayerRecord::new("Second", "Y", "BAT", Some(1.0), 9.0),
        ];
        let all = refs(&players);
        for _ in 0..3 {
            assert_eq!(highest_bid(&all).unwrap().name, "First");
        }
    }

    #[test]
    fn highest_bid_is_none_without_positive_prices() {
        let players = vec![PlayerRecord::new("U", "X", "BAT", Some(1.0), 0.0)];
        assert!(highest_bid(&refs(&players)).is_none());
    }

    #[test]
    fn top_five_of_three_returns_all_sorted() {
        let players = vec![
            PlayerRecord::new("Low", "X", "BAT", Some(1.0), 1.0),
            PlayerRecord::new("TieA", "X", "BAT", Some(1.0), 4.0),
            PlayerRecord::new("TieB", "Y", "BAT", Some(1.0), 4.0),
        ];
        let top = top_by_price(&refs(&players), 5);
        let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["TieA", "TieB", "Low"]);
    }

    #[test]
    fn grouped_aggregates() {
        let players = scenario();
        let all = refs(&players);

        let by_kind = totals_by_kind(&all);
        assert_eq!(by_kind["BAT"].count, 2);
        assert!((by_kind["BOWL"].spent - 5.0).abs() < EPS);

        let status = status_counts_by_kind(&all);
        assert_eq!(status["BAT"], StatusCounts { retained: 1, sold: 0, unsold: 1 });
        assert_eq!(status["BOWL"].get(SoldStatus::Sold), 1);

        let teams = spend_by_team(&all);
        assert_eq!(teams[0].0, "TeamX");
        assert_eq!(teams[1], ("TeamY".to_string(), 0.0));

        let bases = base_price_counts(&all);
        assert_eq!(bases.len(), 2);
        assert_eq!(bases[&PriceKey(1.0)], 1);

        assert_eq!(kind_counts(&all)[0], ("BAT".to_string(), 2));
    }

    #[test]
    fn slot_and_purse_accounting() {
        let players = vec![
            PlayerRecord::new("R1", "TeamZ", "BAT", None, 4.0),
            PlayerRecord::new("R2", "TeamZ", "BOWL", None, 3.5),
            PlayerRecord::new("R3", "TeamZ", "AR", None, 2.5),
            PlayerRecord::new("Bought", "TeamZ", "AR", Some(1.0), 6.0),
        ];
        let limits = RosterLimits {
            total_slots: 25,
            purse_limit: 120.0,
        };
        let rows = retention_summary(&refs(&players), limits);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].retained_count, 3);
        assert!((rows[0].purse_spent - 10.0).abs() < EPS);
        assert_eq!(rows[0].slots_left, 22);
        assert!((rows[0].purse_left - 110.0).abs() < EPS);
    }

    #[test]
    fn squad_and_base_price_ordering() {
        let players = vec![
            PlayerRecord::new("Cheap", "X", "BAT", Some(0.3), 0.5),
            PlayerRecord::new("Pricey", "X", "BAT", Some(2.0), 12.0),
            PlayerRecord::new("Bowler", "X", "BOWL", Some(1.5), 3.0),
            PlayerRecord::new("Kept", "X", "BAT", None, 14.0),
        ];
        let all = refs(&players);

        let bats: Vec<&str> = squad_of_kind(&all, "BAT").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(bats, vec!["Kept", "Pricey", "Cheap"]);

        let by_base: Vec<&str> = sorted_by_base_price(&all).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(by_base, vec!["Pricey", "Bowler", "Cheap", "Kept"]);

        let grouped = retained_by_team(&all);
        assert_eq!(grouped["X"].len(), 1);
    }
}
