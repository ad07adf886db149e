use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Tunables for normalization, roster accounting and presentation.
///
/// Every field has a default, so a JSON file only needs to name what it
/// changes:
///
/// ```json
/// { "purse_limit": 100.0, "logo_dir": "assets/logos" }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Roster positions available to each team.
    pub total_slots: u32,
    /// Budget per team, in crore.
    pub purse_limit: f64,
    /// Length of every "top players" list.
    pub top_n: usize,
    /// Size of the playing XI a user may compose.
    pub max_playing_xi: usize,
    /// Rows per page in the player details table.
    pub page_size: usize,
    /// Team label given to rows whose team is the `-` sentinel.
    pub unsold_label: String,
    /// Player names that stand for "not yet announced" and are dropped.
    pub placeholder_names: Vec<String>,
    /// Suffix shown after the name of a retained player.
    pub retained_marker: String,
    /// Directory that team logo paths are resolved against.
    pub logo_dir: PathBuf,
    /// Team name → logo file name (relative to `logo_dir`).
    pub team_logos: BTreeMap<String, String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            total_slots: 25,
            purse_limit: 120.0,
            top_n: 5,
            max_playing_xi: 11,
            page_size: 10,
            unsold_label: "Unsold Players".to_string(),
            placeholder_names: vec!["TBA".to_string()],
            retained_marker: " (R)".to_string(),
            logo_dir: PathBuf::from("logo"),
            team_logos: default_team_logos(),
        }
    }
}

fn default_team_logos() -> BTreeMap<String, String> {
    [
        ("Chennai Super Kings", "csk_logo.png"),
        ("Mumbai Indians", "mi_logo.png"),
        ("Royal Challengers Bangalore", "rcb_logo.png"),
        ("Kolkata Knight Riders", "kkr_logo.png"),
        ("Rajasthan Royals", "rr_logo.png"),
        ("Punjab Kings", "pbks_logo.png"),
        ("Delhi Capitals", "dc_logo.png"),
        ("Sunrisers Hyderabad", "srh_logo.png"),
        ("Lucknow Super Giants", "lsg_logo.png"),
        ("Gujarat Titans", "gt_logo.png"),
    ]
    .into_iter()
    .map(|(team, file)| (team.to_string(), file.to_string()))
    .collect()
}

impl DashboardConfig {
    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(text).context("invalid config JSON")?;
        Ok(config)
    }

    /// Slot and purse limits used by retention accounting.
    pub fn roster_limits(&self) -> RosterLimits {
        RosterLimits {
            total_slots: self.total_slots,
            purse_limit: self.purse_limit,
        }
    }
}

/// Per-team caps that slots and purse left are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterLimits {
    pub total_slots: u32,
    pub purse_limit: f64,
}

impl Default for RosterLimits {
    fn default() -> Self {
        DashboardConfig::default().roster_limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "purse_limit": 100.0, "top_n": 3 }"#).unwrap();
        assert_eq!(config.purse_limit, 100.0);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.total_slots, 25);
        assert_eq!(config.max_playing_xi, 11);
        assert_eq!(config.unsold_label, "Unsold Players");
        assert_eq!(config.team_logos.len(), 10);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DashboardConfig::from_json("{ total_slots: ").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DashboardConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
