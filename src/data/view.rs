use std::collections::BTreeMap;

use crate::config::DashboardConfig;

use super::aggregate::{self, GroupTotals, RetentionRow, StatusCounts, Summary};
use super::filter::{FilterSelection, filtered_indices};
use super::model::{AuctionTable, PlayerRecord, PriceKey};

/// Kinds that get their own squad tab, in display order.
pub const SQUAD_KINDS: [(&str, &str); 3] = [
    ("BAT", "Batsmen"),
    ("AR", "All-Rounders"),
    ("BOWL", "Bowlers"),
];

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Everything the UI draws for one filter selection.
///
/// Ranked lists hold their own copies of the records so the view does not
/// borrow from the table it was built from.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// Indices of players passing the selection, in table order.
    pub visible: Vec<usize>,
    pub summary: Summary,
    pub status_by_kind: BTreeMap<String, StatusCounts>,
    pub spend_by_team: Vec<(String, f64)>,
    pub kind_counts: Vec<(String, usize)>,
    pub base_price_counts: BTreeMap<PriceKey, usize>,
    /// Present only when the view spans at least two base prices.
    pub spend_by_base_price: Option<BTreeMap<PriceKey, f64>>,
    pub top_players: Vec<PlayerRecord>,
    pub focus: Focus,
}

/// Extra detail depending on which team is selected.
#[derive(Debug, Clone)]
pub enum Focus {
    /// No team selected: league-wide retention overview.
    League(RetentionView),
    Team(TeamView),
    /// The unsold pseudo-team: its players by base price.
    Unsold(Vec<PlayerRecord>),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::League(RetentionView::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetentionView {
    pub rows: Vec<RetentionRow>,
    pub top_retained: Vec<PlayerRecord>,
    pub retained_by_team: BTreeMap<String, Vec<PlayerRecord>>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamView {
    pub team: String,
    /// One entry per [`SQUAD_KINDS`] kind, most expensive first.
    pub squads: Vec<(String, Vec<PlayerRecord>)>,
    pub totals_by_kind: BTreeMap<String, GroupTotals>,
    pub kind_counts: Vec<(String, usize)>,
    pub top_players: Vec<PlayerRecord>,
    pub retained: Vec<PlayerRecord>,
    /// Table indices of every player on the team; the playing XI pool.
    pub roster: Vec<usize>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

fn owned(players: Vec<&PlayerRecord>) -> Vec<PlayerRecord> {
    players.into_iter().cloned().collect()
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Build the view for `selection`. Pure: same inputs, same view.
pub fn render(table: &AuctionTable, selection: &FilterSelection, config: &DashboardConfig) -> DashboardView {
    let visible = filtered_indices(table, selection);
    let players: Vec<&PlayerRecord> = visible.iter().map(|&i| &table.players[i]).collect();

    let base_price_counts = aggregate::base_price_counts(&players);
    let spend_by_base_price =
        (base_price_counts.len() >= 2).then(|| aggregate::spend_by_base_price(&players));

    let focus = match &selection.team {
        None => Focus::League(retention_view(table, config)),
        Some(team) if *team == config.unsold_label => {
            Focus::Unsold(owned(aggregate::sorted_by_base_price(&players)))
        }
        Some(team) => Focus::Team(team_view(table, team, &players, config)),
    };

    DashboardView {
        summary: aggregate::summarize(&players),
        status_by_kind: aggregate::status_counts_by_kind(&players),
        spend_by_team: aggregate::spend_by_team(&players),
        kind_counts: aggregate::kind_counts(&players),
        base_price_counts,
        spend_by_base_price,
        top_players: owned(aggregate::top_by_price(&players, config.top_n)),
        focus,
        visible,
    }
}

/// Retention figures cover the whole league regardless of other filters.
fn retention_view(table: &AuctionTable, config: &DashboardConfig) -> RetentionView {
    let all: Vec<&PlayerRecord> = table.players.iter().collect();
    let retained: Vec<&PlayerRecord> = all.iter().copied().filter(|p| p.is_retained()).collect();

    RetentionView {
        rows: aggregate::retention_summary(&all, config.roster_limits()),
        top_retained: owned(aggregate::top_by_price(&retained, config.top_n)),
        retained_by_team: aggregate::retained_by_team(&all)
            .into_iter()
            .map(|(team, players)| (team, owned(players)))
            .collect(),
    }
}

fn team_view(
    table: &AuctionTable,
    team: &str,
    players: &[&PlayerRecord],
    config: &DashboardConfig,
) -> TeamView {
    let squads = SQUAD_KINDS
        .iter()
        .map(|(kind, _)| (kind.to_string(), owned(aggregate::squad_of_kind(players, kind))))
        .collect();

    // The retained list and the XI pool ignore the other filters.
    let roster: Vec<usize> = table
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.team == team)
        .map(|(i, _)| i)
        .collect();
    let retained = roster
        .iter()
        .map(|&i| &table.players[i])
        .filter(|p| p.is_retained())
        .cloned()
        .collect();

    TeamView {
        team: team.to_string(),
        squads,
        totals_by_kind: aggregate::totals_by_kind(players),
        kind_counts: aggregate::kind_counts(players),
        top_players: owned(aggregate::top_by_price(players, config.top_n)),
        retained,
        roster,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AuctionStatus, SoldStatus};

    fn table() -> AuctionTable {
        AuctionTable::from_players(vec![
            PlayerRecord::new("A", "TeamX", "BAT", None, 18.0),
            PlayerRecord::new("B", "TeamX", "BOWL", Some(2.0), 5.0),
            PlayerRecord::new("C", "TeamY", "BAT", Some(1.0), 0.0),
            PlayerRecord::new("D", "TeamY", "AR", None, 11.0),
            PlayerRecord::new("E", "Unsold Players", "BAT", Some(0.75), 0.0),
            PlayerRecord::new("F", "Unsold Players", "AR", Some(1.5), 0.0),
        ])
    }

    #[test]
    fn overview_carries_league_retentions() {
        let view = render(&table(), &FilterSelection::default(), &DashboardConfig::default());

        assert_eq!(view.visible.len(), 6);
        assert_eq!(view.top_players[0].name, "A");
        let Focus::League(retention) = &view.focus else {
            panic!("expected league focus");
        };
        assert_eq!(retention.rows.len(), 2);
        assert_eq!(retention.rows[0].slots_left, 24);
        assert_eq!(retention.top_retained[0].name, "A");
        assert_eq!(retention.retained_by_team["TeamY"][0].name, "D");
    }

    #[test]
    fn team_focus_builds_squads_and_roster() {
        let selection = FilterSelection {
            team: Some("TeamX".into()),
            ..Default::default()
        };
        let view = render(&table(), &selection, &DashboardConfig::default());

        let Focus::Team(team) = &view.focus else {
            panic!("expected team focus");
        };
        assert_eq!(team.roster, vec![0, 1]);
        assert_eq!(team.squads[0].0, "BAT");
        assert_eq!(team.squads[0].1[0].name, "A");
        assert_eq!(team.squads[2].1[0].name, "B");
        assert_eq!(team.retained.len(), 1);
    }

    #[test]
    fn unsold_team_is_sorted_by_base_price() {
        let selection = FilterSelection {
            team: Some("Unsold Players".into()),
            ..Default::default()
        };
        let view = render(&table(), &selection, &DashboardConfig::default());

        let Focus::Unsold(players) = &view.focus else {
            panic!("expected unsold focus");
        };
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["F", "E"]);
    }

    #[test]
    fn empty_selection_result_is_zero_valued() {
        let selection = FilterSelection {
            team: Some("NoSuchTeam".into()),
            ..Default::default()
        };
        let view = render(&table(), &selection, &DashboardConfig::default());

        assert!(view.is_empty());
        assert_eq!(view.summary.total, 0);
        assert_eq!(view.summary.total_spent, 0.0);
        assert!(view.top_players.is_empty());
        assert!(view.spend_by_base_price.is_none());
    }

    #[test]
    fn spend_by_base_price_needs_two_prices() {
        let retained_only = FilterSelection {
            auction_status: Some(AuctionStatus::Retained),
            ..Default::default()
        };
        let view = render(&table(), &retained_only, &DashboardConfig::default());
        assert!(view.spend_by_base_price.is_none());

        let unsold = FilterSelection {
            sold_status: Some(SoldStatus::Unsold),
            ..Default::default()
        };
        let view = render(&table(), &unsold, &DashboardConfig::default());
        assert_eq!(view.spend_by_base_price.map(|m| m.len()), Some(3));
    }

    #[test]
    fn render_is_repeatable() {
        let t = table();
        let selection = FilterSelection {
            kind: Some("BAT".into()),
            ..Default::default()
        };
        let config = DashboardConfig::default();
        let a = render(&t, &selection, &config);
        let b = render(&t, &selection, &config);
        assert_eq!(a.visible, b.visible);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.top_players, b.top_players);
    }
}
