use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Ui};

use crate::data::model::{AuctionStatus, SoldStatus};
use crate::state::AppState;

use super::format::or_all;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No data loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let teams: Vec<String> = table.teams.iter().cloned().collect();
    let kinds = table.kinds.clone();

    let mut auction_status = state.selection.auction_status;
    let mut sold_status = state.selection.sold_status;
    let mut team = state.selection.team.clone();
    let mut kind = state.selection.kind.clone();
    let mut clear = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Auctioned or Retained");
            ComboBox::from_id_salt("auction_status")
                .selected_text(or_all(auction_status.as_ref()))
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut auction_status, None, "All");
                    for status in AuctionStatus::ALL {
                        ui.selectable_value(&mut auction_status, Some(status), status.to_string());
                    }
                });
            ui.add_space(6.0);

            // Sold/unsold is meaningless for retained players.
            let sold_enabled = auction_status != Some(AuctionStatus::Retained);
            ui.add_enabled_ui(sold_enabled, |ui: &mut Ui| {
                ui.strong("Sold or Unsold");
                let shown = if sold_enabled { sold_status } else { None };
                ComboBox::from_id_salt("sold_status")
                    .selected_text(or_all(shown.as_ref()))
                    .show_ui(ui, |ui: &mut Ui| {
                        ui.selectable_value(&mut sold_status, None, "All");
                        for status in SoldStatus::SELECTABLE {
                            ui.selectable_value(&mut sold_status, Some(status), status.to_string());
                        }
                    });
            });
            ui.add_space(6.0);

            ui.strong("Team");
            ComboBox::from_id_salt("team")
                .selected_text(or_all(team.as_ref()))
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut team, None, "All");
                    for t in &teams {
                        ui.selectable_value(&mut team, Some(t.clone()), t);
                    }
                });
            ui.add_space(6.0);

            ui.strong("Type");
            ComboBox::from_id_salt("kind")
                .selected_text(or_all(kind.as_ref()))
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut kind, None, "All");
                    for k in &kinds {
                        ui.selectable_value(&mut kind, Some(k.clone()), k);
                    }
                });
            ui.add_space(10.0);

            if ui.button("Clear").clicked() {
                clear = true;
            }
        });

    if clear {
        state.clear_filters();
        return;
    }

    // Each setter only recomputes the view when its value changed.
    state.set_auction_status(auction_status);
    state.set_sold_status(sold_status);
    state.set_team(team);
    state.set_kind(kind);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let scope = if state.selection.is_unfiltered() { "all" } else { "filtered" };
            ui.label(format!(
                "{} players loaded, {} visible ({scope})",
                table.len(),
                state.view.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open auction data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        // Errors are already logged and shown in the top bar.
        if state.load_path(&path).is_err() {
            log::debug!("Keeping the previous table after a failed open");
        }
    }
}
