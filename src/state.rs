use std::path::Path;

use anyhow::Result;

use crate::color::CategoryColors;
use crate::config::DashboardConfig;
use crate::data::filter::FilterSelection;
use crate::data::loader::load_table;
use crate::data::model::{AuctionStatus, AuctionTable, SoldStatus};
use crate::data::normalize::NormalizeOptions;
use crate::data::roster::PlayingXi;
use crate::data::view::{DashboardView, render};
use crate::logos::LogoCatalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which panel of the single-team view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamTab {
    #[default]
    Squad,
    Analysis,
    Highlights,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    pub logos: LogoCatalog,

    /// Loaded table (None until a file is loaded). Read-only once set.
    pub table: Option<AuctionTable>,

    /// Current value of each selection control.
    pub selection: FilterSelection,

    /// View for the current selection, rebuilt on every change.
    pub view: DashboardView,

    pub team_colors: CategoryColors,
    pub kind_colors: CategoryColors,

    pub team_tab: TeamTab,

    /// Squad tab currently shown (index into the squad kinds).
    pub squad_tab: usize,

    pub playing_xi: PlayingXi,

    /// Current page of the player details table.
    pub page: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Rejected playing XI edit, shown next to the checkboxes.
    pub selection_error: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            logos: LogoCatalog::from_config(&config),
            playing_xi: PlayingXi::new(config.max_playing_xi),
            config,
            table: None,
            selection: FilterSelection::default(),
            view: DashboardView::default(),
            team_colors: CategoryColors::default(),
            kind_colors: CategoryColors::default(),
            team_tab: TeamTab::default(),
            squad_tab: 0,
            page: 0,
            status_message: None,
            selection_error: None,
        }
    }

    /// Ingest a newly loaded table and reset all selections.
    pub fn set_table(&mut self, table: AuctionTable) {
        self.team_colors = CategoryColors::new(&table.teams);
        self.kind_colors = CategoryColors::new(&table.kinds);
        self.table = Some(table);
        self.selection.clear();
        self.status_message = None;
        self.reset_team_state();
        self.refilter();
    }

    /// Load a file and make it the current table. On failure the previous
    /// table stays and the error is shown.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let options = NormalizeOptions::from(&self.config);
        match load_table(path, &options) {
            Ok((table, _)) => {
                self.set_table(table);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Recompute the view after a selection change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.view = render(table, &self.selection, &self.config);
            self.page = 0;
        }
    }

    pub fn set_team(&mut self, team: Option<String>) {
        if self.selection.team != team {
            self.selection.team = team;
            self.reset_team_state();
            self.refilter();
        }
    }

    pub fn set_kind(&mut self, kind: Option<String>) {
        if self.selection.kind != kind {
            self.selection.kind = kind;
            self.refilter();
        }
    }

    /// Choosing "Retained" forces sold/unsold back to "All".
    pub fn set_auction_status(&mut self, status: Option<AuctionStatus>) {
        if self.selection.auction_status != status {
            self.selection.auction_status = status;
            if !self.selection.sold_status_enabled() {
                self.selection.sold_status = None;
            }
            self.refilter();
        }
    }

    pub fn set_sold_status(&mut self, status: Option<SoldStatus>) {
        if self.selection.sold_status_enabled() && self.selection.sold_status != status {
            self.selection.sold_status = status;
            self.refilter();
        }
    }

    /// The "Clear" button.
    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.reset_team_state();
        self.refilter();
    }

    /// Toggle a player in the playing XI; a rejected pick is remembered for
    /// display.
    pub fn toggle_playing_xi(&mut self, index: usize, selected: bool) {
        match self.playing_xi.set(index, selected) {
            Ok(()) => self.selection_error = None,
            Err(e) => {
                log::debug!("Playing XI pick rejected: {e}");
                self.selection_error = Some(e.to_string());
            }
        }
    }

    fn reset_team_state(&mut self) {
        self.playing_xi.clear();
        self.selection_error = None;
        self.squad_tab = 0;
    }
}
