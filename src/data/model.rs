use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Cell – a single raw value as read from the source file
// ---------------------------------------------------------------------------

/// A raw, not yet normalized cell. CSV yields only `Text`; JSON and Parquet
/// may already carry numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Null,
}

impl Cell {
    /// Coerce to a finite number. Anything that does not parse is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(v) => *v,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Text view of the cell, trimmed. Numbers are rendered without a
    /// trailing `.0` so that a numeric team or type column still reads well.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(v) if v.fract() == 0.0 => format!("{v:.0}"),
            Cell::Number(v) => v.to_string(),
            Cell::Null => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            Cell::Null
        } else {
            Cell::Text(s.to_string())
        }
    }
}

/// One row of the source table before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub name: Cell,
    pub team: Cell,
    pub kind: Cell,
    pub base: Cell,
    pub sold: Cell,
}

// ---------------------------------------------------------------------------
// Derived statuses
// ---------------------------------------------------------------------------

/// Whether the player went through the auction at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuctionStatus {
    Retained,
    Auctioned,
}

impl AuctionStatus {
    pub const ALL: [AuctionStatus; 2] = [AuctionStatus::Auctioned, AuctionStatus::Retained];

    pub fn from_base_price(base_price: Option<f64>) -> Self {
        match base_price {
            None => AuctionStatus::Retained,
            Some(_) => AuctionStatus::Auctioned,
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionStatus::Retained => write!(f, "Retained"),
            AuctionStatus::Auctioned => write!(f, "Auctioned"),
        }
    }
}

/// Outcome of the auction for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SoldStatus {
    Retained,
    Unsold,
    Sold,
}

impl SoldStatus {
    /// Values a user can pick in the sold/unsold control.
    pub const SELECTABLE: [SoldStatus; 2] = [SoldStatus::Sold, SoldStatus::Unsold];

    pub fn from_prices(base_price: Option<f64>, sold_price: f64) -> Self {
        match base_price {
            None => SoldStatus::Retained,
            Some(_) if sold_price > 0.0 => SoldStatus::Sold,
            Some(_) => SoldStatus::Unsold,
        }
    }
}

impl fmt::Display for SoldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoldStatus::Retained => write!(f, "Retained"),
            SoldStatus::Unsold => write!(f, "Unsold"),
            SoldStatus::Sold => write!(f, "Sold"),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one normalized row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Canonical name. Display markers are added by the UI only.
    pub name: String,
    pub team: String,
    /// Player category (`BAT`, `AR`, `BOWL`, ...).
    pub kind: String,
    /// `None` means the player was retained and never entered the auction.
    pub base_price: Option<f64>,
    /// Final price in crore; `0.0` for unsold players.
    pub sold_price: f64,
    pub auction_status: AuctionStatus,
    pub sold_status: SoldStatus,
}

impl PlayerRecord {
    /// Build a record, deriving both statuses from the prices.
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        kind: impl Into<String>,
        base_price: Option<f64>,
        sold_price: f64,
    ) -> Self {
        PlayerRecord {
            name: name.into(),
            team: team.into(),
            kind: kind.into(),
            base_price,
            sold_price,
            auction_status: AuctionStatus::from_base_price(base_price),
            sold_status: SoldStatus::from_prices(base_price, sold_price),
        }
    }

    pub fn is_retained(&self) -> bool {
        self.auction_status == AuctionStatus::Retained
    }
}

// ---------------------------------------------------------------------------
// AuctionTable – the complete normalized dataset
// ---------------------------------------------------------------------------

/// The normalized table plus the option lists used by the selection controls.
/// Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct AuctionTable {
    /// All players, in source order.
    pub players: Vec<PlayerRecord>,
    /// Sorted, de-duplicated team names.
    pub teams: BTreeSet<String>,
    /// Player kinds in order of first appearance.
    pub kinds: Vec<String>,
}

impl AuctionTable {
    pub fn from_players(players: Vec<PlayerRecord>) -> Self {
        let teams = players.iter().map(|p| p.team.clone()).collect();
        let mut kinds: Vec<String> = Vec::new();
        for p in &players {
            if !kinds.contains(&p.kind) {
                kinds.push(p.kind.clone());
            }
        }
        AuctionTable {
            players,
            teams,
            kinds,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PriceKey – an orderable f64 for grouping by price
// ---------------------------------------------------------------------------

/// `f64` wrapper with a total order so prices can key a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
pub struct PriceKey(pub f64);

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retained_iff_base_price_missing() {
        let retained = PlayerRecord::new("A", "TeamX", "BAT", None, 18.0);
        let auctioned = PlayerRecord::new("B", "TeamX", "BOWL", Some(2.0), 5.0);

        assert_eq!(retained.auction_status, AuctionStatus::Retained);
        assert_eq!(retained.sold_status, SoldStatus::Retained);
        assert_eq!(auctioned.auction_status, AuctionStatus::Auctioned);
        assert_eq!(auctioned.sold_status, SoldStatus::Sold);
    }

    #[test]
    fn zero_sold_price_is_unsold_only_when_auctioned() {
        let unsold = PlayerRecord::new("C", "TeamY", "BAT", Some(1.0), 0.0);
        let retained_free = PlayerRecord::new("D", "TeamY", "AR", None, 0.0);

        assert_eq!(unsold.sold_status, SoldStatus::Unsold);
        assert_eq!(retained_free.sold_status, SoldStatus::Retained);
    }

    #[test]
    fn negative_sold_price_is_never_sold() {
        let odd = PlayerRecord::new("N", "TeamY", "BAT", Some(1.0), -2.0);
        assert_eq!(odd.sold_status, SoldStatus::Unsold);
    }

    #[test]
    fn cell_coercion() {
        assert_eq!(Cell::from(" 2.5 ").as_f64(), Some(2.5));
        assert_eq!(Cell::from("-").as_f64(), None);
        assert_eq!(Cell::from("NaN").as_f64(), None);
        assert_eq!(Cell::from("").as_f64(), None);
        assert_eq!(Cell::Number(3.0).as_text(), "3");
    }

    #[test]
    fn table_keeps_kind_order_of_first_appearance() {
        let table = AuctionTable::from_players(vec![
            PlayerRecord::new("A", "Zeta", "BOWL", Some(1.0), 2.0),
            PlayerRecord::new("B", "Alpha", "BAT", Some(1.0), 2.0),
            PlayerRecord::new("C", "Alpha", "BOWL", None, 4.0),
        ]);

        assert_eq!(table.kinds, vec!["BOWL".to_string(), "BAT".to_string()]);
        assert_eq!(
            table.teams.iter().cloned().collect::<Vec<_>>(),
            vec!["Alpha".to_string(), "Zeta".to_string()]
        );
    }
}
