use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::Gradient;
use crate::data::view::{SQUAD_KINDS, TeamView};
use crate::state::{AppState, TeamTab};

use super::format;
use super::plot::{self, Series};
use super::tables::{self, Field};

/// Single-team view: logo, then Squad / Analysis / Highlights.
pub fn team_section(ui: &mut Ui, state: &mut AppState, team: &TeamView) {
    ui.heading(format!("{} Analysis", team.team));
    team_logo(ui, state, &team.team);
    ui.add_space(6.0);

    ui.strong("Team Insights");
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut state.team_tab, TeamTab::Squad, "Squad");
        ui.selectable_value(&mut state.team_tab, TeamTab::Analysis, "Analysis");
        ui.selectable_value(&mut state.team_tab, TeamTab::Highlights, "Highlights");
    });
    ui.separator();

    match state.team_tab {
        TeamTab::Squad => squad(ui, state, team),
        TeamTab::Analysis => analysis(ui, state, team),
        TeamTab::Highlights => highlights(ui, state, team),
    }
}

/// Logo for `team`, if one exists on disk.
pub fn team_logo(ui: &mut Ui, state: &AppState, team: &str) {
    if let Some(uri) = state.logos.image_uri(team) {
        ui.add(
            egui::Image::new(uri)
                .max_width(150.0)
                .max_height(150.0),
        );
        ui.label(RichText::new(team).small());
    }
}

fn squad(ui: &mut Ui, state: &mut AppState, team: &TeamView) {
    ui.strong("Squad Details");
    ui.horizontal(|ui: &mut Ui| {
        for (i, (_, title)) in SQUAD_KINDS.iter().enumerate() {
            ui.selectable_value(&mut state.squad_tab, i, *title);
        }
    });

    let gradients = [Gradient::Greens, Gradient::YellowRed, Gradient::Blues];
    let tab = state.squad_tab.min(SQUAD_KINDS.len() - 1);
    if let Some((kind, players)) = team.squads.get(tab) {
        tables::player_grid(
            ui,
            &format!("squad_{kind}"),
            players,
            &[Field::Player, Field::Sold],
            Some((Field::Sold, gradients[tab])),
            &state.config.retained_marker,
        );
    }

    ui.add_space(12.0);
    playing_xi(ui, state, team);
}

fn playing_xi(ui: &mut Ui, state: &mut AppState, team: &TeamView) {
    ui.heading("Select Your Playing XI");

    let mut toggles = Vec::new();
    if let Some(table) = &state.table {
        egui::Grid::new("playing_xi_checks")
            .num_columns(3)
            .show(ui, |ui: &mut Ui| {
                for (n, &idx) in team.roster.iter().enumerate() {
                    let Some(player) = table.players.get(idx) else {
                        continue;
                    };
                    let mut checked = state.playing_xi.contains(idx);
                    let label = format::display_name(player, &state.config.retained_marker);
                    if ui.checkbox(&mut checked, label).changed() {
                        toggles.push((idx, checked));
                    }
                    if n % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
    }
    for (idx, checked) in toggles {
        state.toggle_playing_xi(idx, checked);
    }

    if let Some(msg) = &state.selection_error {
        ui.label(RichText::new(msg).color(Color32::RED));
    }

    ui.add_space(6.0);
    ui.strong(format!(
        "Your Selected Playing XI ({}/{})",
        state.playing_xi.len(),
        state.playing_xi.max()
    ));
    if state.playing_xi.is_empty() {
        ui.label(RichText::new("No players selected yet.").italics());
    }
    if let Some(table) = &state.table {
        for (n, &idx) in state.playing_xi.picks().iter().enumerate() {
            if let Some(player) = table.players.get(idx) {
                ui.label(format!("{}. {}", n + 1, player.name));
            }
        }
    }
}

fn analysis(ui: &mut Ui, state: &AppState, team: &TeamView) {
    let kinds: Vec<String> = team.totals_by_kind.keys().cloned().collect();
    let spend: Vec<f64> = team.totals_by_kind.values().map(|t| t.spent).collect();
    let kind_colors: Vec<Color32> = kinds.iter().map(|k| state.kind_colors.color_for(k)).collect();

    ui.columns(2, |cols| {
        plot::bar_chart(
            &mut cols[0],
            "Spending by Player Type",
            "Total Value (₹ crore)",
            &kinds,
            vec![Series {
                name: "Spent",
                values: spend.clone(),
                colors: kind_colors,
            }],
        );

        let (count_kinds, counts): (Vec<String>, Vec<f64>) =
            team.kind_counts.iter().map(|(k, c)| (k.clone(), *c as f64)).unzip();
        plot::bar_chart(
            &mut cols[0],
            "Player Type Counts",
            "Count",
            &count_kinds,
            vec![Series::uniform("Players", counts, Color32::LIGHT_BLUE)],
        );

        let top_names: Vec<String> = team.top_players.iter().map(|p| p.name.clone()).collect();
        plot::bar_chart(
            &mut cols[1],
            &format::top_title(state.config.top_n, "Players by Spending"),
            "Money Spent (₹ crore)",
            &top_names,
            vec![Series {
                name: "Sold",
                values: team.top_players.iter().map(|p| p.sold_price).collect(),
                colors: team
                    .top_players
                    .iter()
                    .map(|p| state.kind_colors.color_for(&p.kind))
                    .collect(),
            }],
        );

        plot::category_line_chart(
            &mut cols[1],
            "Spending Trends by Player Type",
            "Money Spent (₹ crore)",
            &kinds,
            &spend,
            Color32::GOLD,
        );
    });
}

fn highlights(ui: &mut Ui, state: &AppState, team: &TeamView) {
    let marker = &state.config.retained_marker;

    ui.strong(format::top_title(state.config.top_n, "Expensive Players"));
    tables::player_grid(
        ui,
        "team_top_players",
        &team.top_players,
        &[Field::Player, Field::Sold],
        Some((Field::Sold, Gradient::Oranges)),
        marker,
    );

    ui.add_space(8.0);
    ui.strong("Retained Players");
    tables::player_grid(
        ui,
        "team_retained",
        &team.retained,
        &[Field::Player, Field::Sold],
        Some((Field::Sold, Gradient::Purples)),
        marker,
    );
}
