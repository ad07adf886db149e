use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::{Gradient, status_color};
use crate::data::aggregate::Summary;
use crate::data::model::SoldStatus;
use crate::data::view::{DashboardView, Focus, RetentionView};
use crate::state::AppState;

use super::format;
use super::plot::{self, Series};
use super::tables::{self, Field};
use super::team;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the whole dashboard for the current view.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an auction file to begin  (File → Open…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("Auction Analysis").color(Color32::from_rgb(255, 165, 0)).size(28.0));
    });
    ui.add_space(8.0);

    // Owned copy so the team widgets can mutate state while reading it.
    let view = state.view.clone();
    if view.is_empty() {
        ui.label(
            RichText::new("No data available for the selected filters.")
                .color(Color32::YELLOW)
                .strong(),
        );
        return;
    }

    metrics(ui, &view.summary);
    ui.separator();

    overview_charts(ui, state, &view);
    ui.separator();

    ui.heading("Top Players");
    tables::player_grid(
        ui,
        "top_players",
        &view.top_players,
        &[Field::Player, Field::Team, Field::Kind, Field::Sold],
        Some((Field::Sold, Gradient::Oranges)),
        &state.config.retained_marker,
    );

    if let Some(spend) = &view.spend_by_base_price {
        ui.separator();
        let points: Vec<[f64; 2]> = spend.iter().map(|(base, sold)| [base.0, *sold]).collect();
        plot::line_chart(
            ui,
            "Total Purse Spent vs Base Price",
            "Base Price",
            "Sold Price Sum",
            &points,
            Color32::LIGHT_GREEN,
        );
    }

    ui.separator();
    match &view.focus {
        Focus::League(retention) => retention_section(ui, state, retention),
        Focus::Team(team_view) => team::team_section(ui, state, team_view),
        Focus::Unsold(players) => {
            ui.heading(format!("{} Analysis", state.config.unsold_label));
            tables::player_grid(
                ui,
                "unsold_players",
                players,
                &[Field::Player, Field::Base],
                Some((Field::Base, Gradient::Oranges)),
                &state.config.retained_marker,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Metrics strip
// ---------------------------------------------------------------------------

fn metrics(ui: &mut Ui, summary: &Summary) {
    let (best_value, best_name) = match &summary.highest_bid {
        Some(best) => (format::amount(best.price), format!("{} ({})", best.name, best.team)),
        None => (format::amount(0.0), "N/A".to_string()),
    };

    ui.columns(6, |cols| {
        metric(&mut cols[0], "Total Players", &summary.total.to_string(), None);
        metric(&mut cols[1], "Retained Players", &summary.retained.to_string(), None);
        metric(
            &mut cols[2],
            "Auctioned Players",
            &summary.auctioned.to_string(),
            Some(&format!("{} unsold", summary.unsold)),
        );
        metric(&mut cols[3], "Total Sold Players", &summary.sold.to_string(), None);
        metric(
            &mut cols[4],
            "Total Amount Spent (Crores)",
            &format::amount(summary.total_spent),
            None,
        );
        metric(&mut cols[5], "Highest Bid (Cr)", &best_value, Some(&best_name));
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str, note: Option<&str>) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).size(22.0).strong());
        if let Some(note) = note {
            ui.label(RichText::new(note).color(Color32::LIGHT_GREEN));
        }
    });
}

// ---------------------------------------------------------------------------
// Charts and the details table
// ---------------------------------------------------------------------------

fn overview_charts(ui: &mut Ui, state: &mut AppState, view: &DashboardView) {
    let all_kinds = state.selection.kind.is_none();
    let mut next_page = state.page;

    ui.columns(2, |cols| {
        if all_kinds {
            let kinds: Vec<String> = view.status_by_kind.keys().cloned().collect();
            let series = [SoldStatus::Sold, SoldStatus::Unsold]
                .into_iter()
                .map(|status| {
                    Series::uniform(
                        match status {
                            SoldStatus::Sold => "Sold",
                            _ => "Unsold",
                        },
                        view.status_by_kind.values().map(|c| c.get(status) as f64).collect(),
                        status_color(status),
                    )
                })
                .collect();
            plot::bar_chart(&mut cols[0], "Players Count", "Players", &kinds, series);
        }

        let (teams, spend): (Vec<String>, Vec<f64>) = view.spend_by_team.iter().cloned().unzip();
        let team_colors = teams.iter().map(|t| state.team_colors.color_for(t)).collect();
        plot::bar_chart(
            &mut cols[0],
            "Team-wise Spending",
            "Amount Spent (Cr)",
            &teams,
            vec![Series {
                name: "Spent",
                values: spend,
                colors: team_colors,
            }],
        );

        if all_kinds {
            let (kinds, counts): (Vec<String>, Vec<f64>) =
                view.kind_counts.iter().map(|(k, c)| (k.clone(), *c as f64)).unzip();
            let colors = kinds.iter().map(|k| state.kind_colors.color_for(k)).collect();
            plot::bar_chart(
                &mut cols[0],
                "Players per Category",
                "Count",
                &kinds,
                vec![Series {
                    name: "Players",
                    values: counts,
                    colors,
                }],
            );
        }

        if !view.base_price_counts.is_empty() {
            let (bases, counts): (Vec<String>, Vec<f64>) = view
                .base_price_counts
                .iter()
                .map(|(base, n)| (base.to_string(), *n as f64))
                .unzip();
            plot::bar_chart(
                &mut cols[0],
                "Base Price of Players",
                "Players",
                &bases,
                vec![Series::uniform("Players", counts, Color32::KHAKI)],
            );
        }

        cols[1].heading("Player Details");
        if let Some(table) = &state.table {
            next_page = tables::player_details(
                &mut cols[1],
                table,
                &view.visible,
                state.page,
                state.config.page_size,
            );
        }
    });

    state.page = next_page;
}

// ---------------------------------------------------------------------------
// League-wide retentions
// ---------------------------------------------------------------------------

fn retention_section(ui: &mut Ui, state: &AppState, retention: &RetentionView) {
    let marker = &state.config.retained_marker;

    ui.heading("Overall Auction Analysis");
    ui.heading("I. Retentions");

    ui.strong("Retention Summary");
    tables::retention_grid(ui, &retention.rows);
    ui.label(
        RichText::new(format!(
            "Slots and purse left are measured against {} slots and {} per team.",
            state.config.total_slots,
            format::crore(state.config.purse_limit)
        ))
        .small()
        .italics(),
    );

    ui.add_space(8.0);
    let (teams, spent): (Vec<String>, Vec<f64>) = retention
        .rows
        .iter()
        .map(|r| (r.team.clone(), r.purse_spent))
        .unzip();
    let colors = teams.iter().map(|t| state.team_colors.color_for(t)).collect();
    plot::bar_chart(
        ui,
        "Total Spending on Retentions",
        "Money Spent (₹ crore)",
        &teams,
        vec![Series {
            name: "Spent",
            values: spent,
            colors,
        }],
    );

    ui.add_space(8.0);
    ui.strong(format::top_title(state.config.top_n, "Expensive Retentions"));
    tables::player_grid(
        ui,
        "top_retained",
        &retention.top_retained,
        &[Field::Player, Field::Team, Field::Sold],
        None,
        marker,
    );

    ui.add_space(8.0);
    ui.strong("Retained Players by Team");
    for (team, players) in &retention.retained_by_team {
        egui::CollapsingHeader::new(RichText::new(team).strong())
            .id_salt(format!("retained_{team}"))
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                team::team_logo(ui, state, team);
                tables::player_grid(
                    ui,
                    &format!("retained_grid_{team}"),
                    players,
                    &[Field::Player, Field::Sold],
                    None,
                    marker,
                );
            });
    }
}
