use eframe::egui::{self, Align, Grid, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{Gradient, value_range};
use crate::data::aggregate::RetentionRow;
use crate::data::model::{AuctionTable, PlayerRecord};

use super::format;

/// A column of a player grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Player,
    Team,
    Kind,
    Base,
    Sold,
}

impl Field {
    fn header(self) -> &'static str {
        match self {
            Field::Player => "Player",
            Field::Team => "Team",
            Field::Kind => "Type",
            Field::Base => "Base Price",
            Field::Sold => "Sold Price",
        }
    }

    fn price(self, player: &PlayerRecord) -> Option<f64> {
        match self {
            Field::Base => player.base_price,
            Field::Sold => Some(player.sold_price),
            _ => None,
        }
    }
}

/// Which price column is tinted, and with which gradient.
pub type Tint = (Field, Gradient);

/// Striped grid of players. The tinted column's text is coloured by value.
pub fn player_grid(
    ui: &mut Ui,
    id: &str,
    players: &[PlayerRecord],
    fields: &[Field],
    tint: Option<Tint>,
    retained_marker: &str,
) {
    if players.is_empty() {
        ui.label(RichText::new("No players.").italics());
        return;
    }

    let range = tint.map(|(field, _)| value_range(players.iter().filter_map(|p| field.price(p))));

    Grid::new(id)
        .striped(true)
        .num_columns(fields.len())
        .show(ui, |ui: &mut Ui| {
            for field in fields {
                ui.label(RichText::new(field.header()).strong());
            }
            ui.end_row();

            for player in players {
                for &field in fields {
                    let text = match field {
                        Field::Player => format::display_name(player, retained_marker),
                        Field::Team => player.team.clone(),
                        Field::Kind => player.kind.clone(),
                        Field::Base => format::base_price(player.base_price),
                        Field::Sold => format::crore(player.sold_price),
                    };
                    let mut text = RichText::new(text);
                    if let (Some((tinted, gradient)), Some((min, max))) = (tint, range) {
                        if tinted == field {
                            if let Some(value) = field.price(player) {
                                text = text.color(gradient.color(value, min, max)).strong();
                            }
                        }
                    }
                    ui.label(text);
                }
                ui.end_row();
            }
        });
}

/// Retention summary: count, spend, slots and purse left per team.
pub fn retention_grid(ui: &mut Ui, rows: &[RetentionRow]) {
    if rows.is_empty() {
        ui.label(RichText::new("No retentions.").italics());
        return;
    }

    Grid::new("retention_grid")
        .striped(true)
        .num_columns(5)
        .show(ui, |ui: &mut Ui| {
            for header in ["Team", "Retained", "Purse Spent", "Slots Left", "Purse Left"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for row in rows {
                ui.label(&row.team);
                ui.label(row.retained_count.to_string());
                ui.label(format::crore(row.purse_spent));
                ui.label(row.slots_left.to_string());
                ui.label(format::crore(row.purse_left));
                ui.end_row();
            }
        });
}

/// Paginated table of the visible players. Returns the page to show next.
pub fn player_details(ui: &mut Ui, table: &AuctionTable, visible: &[usize], page: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    let pages = visible.len().div_ceil(page_size).max(1);
    let page = page.min(pages - 1);
    let start = page * page_size;
    let rows = &visible[start.min(visible.len())..(start + page_size).min(visible.len())];

    ui.push_id("player_details", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["Player", "Team", "Type", "Base Price (Cr)", "Sold Price (Cr)"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for &idx in rows {
                    let Some(p) = table.players.get(idx) else {
                        continue;
                    };
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&p.name);
                        });
                        row.col(|ui| {
                            ui.label(&p.team);
                        });
                        row.col(|ui| {
                            ui.label(&p.kind);
                        });
                        row.col(|ui| {
                            ui.label(p.base_price.map_or_else(|| "-".to_string(), format::amount));
                        });
                        row.col(|ui| {
                            ui.label(format::amount(p.sold_price));
                        });
                    });
                }
            });
    });

    let mut next = page;
    ui.horizontal(|ui: &mut Ui| {
        if ui.add_enabled(page > 0, egui::Button::new("◀")).clicked() {
            next = page - 1;
        }
        ui.label(format!("Page {} of {pages}", page + 1));
        if ui.add_enabled(page + 1 < pages, egui::Button::new("▶")).clicked() {
            next = page + 1;
        }
    });
    next
}
