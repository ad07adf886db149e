use super::model::{AuctionStatus, AuctionTable, PlayerRecord, SoldStatus};

// ---------------------------------------------------------------------------
// Filter selection: one optional value per control
// ---------------------------------------------------------------------------

/// The user's current choice in each selection control. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub team: Option<String>,
    pub kind: Option<String>,
    pub auction_status: Option<AuctionStatus>,
    pub sold_status: Option<SoldStatus>,
}

/// A single predicate over a [`PlayerRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Team(String),
    Kind(String),
    AuctionStatus(AuctionStatus),
    SoldStatus(SoldStatus),
}

impl Predicate {
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        match self {
            Predicate::Team(team) => player.team == *team,
            Predicate::Kind(kind) => player.kind == *kind,
            Predicate::AuctionStatus(status) => player.auction_status == *status,
            Predicate::SoldStatus(status) => player.sold_status == *status,
        }
    }
}

impl FilterSelection {
    /// Reset every control to "All".
    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    /// Sold/unsold has no meaning for retained players, so the control is
    /// disabled while "Retained" is selected.
    pub fn sold_status_enabled(&self) -> bool {
        self.auction_status != Some(AuctionStatus::Retained)
    }

    /// The sold/unsold choice that actually applies.
    pub fn effective_sold_status(&self) -> Option<SoldStatus> {
        if self.sold_status_enabled() {
            self.sold_status
        } else {
            None
        }
    }

    /// Whether no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.predicates().is_empty()
    }

    /// The active predicates. Their conjunction is the filter; order does
    /// not matter.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(4);
        if let Some(team) = &self.team {
            predicates.push(Predicate::Team(team.clone()));
        }
        if let Some(kind) = &self.kind {
            predicates.push(Predicate::Kind(kind.clone()));
        }
        if let Some(status) = self.auction_status {
            predicates.push(Predicate::AuctionStatus(status));
        }
        if let Some(status) = self.effective_sold_status() {
            predicates.push(Predicate::SoldStatus(status));
        }
        predicates
    }
}

/// Return indices of players that pass the selection, in table order.
/// An empty result is a valid outcome.
pub fn filtered_indices(table: &AuctionTable, selection: &FilterSelection) -> Vec<usize> {
    let predicates = selection.predicates();
    table
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| predicates.iter().all(|pred| pred.matches(p)))
        .map(|(i, _)| i)
        .collect()
}
