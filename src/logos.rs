use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::DashboardConfig;

/// Resolves team names to logo files on disk. A team without a configured
/// logo, or whose file is missing, simply has no logo.
#[derive(Debug, Clone, Default)]
pub struct LogoCatalog {
    dir: PathBuf,
    files: BTreeMap<String, String>,
}

impl LogoCatalog {
    pub fn new(dir: impl Into<PathBuf>, files: BTreeMap<String, String>) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.logo_dir.clone(), config.team_logos.clone())
    }

    /// Path of the team's logo, if one is configured and exists.
    pub fn lookup(&self, team: &str) -> Option<PathBuf> {
        let file = self.files.get(team)?;
        let path = self.dir.join(file);
        if path.is_file() {
            Some(path)
        } else {
            log::debug!("No logo for {team}: {} not found", path.display());
            None
        }
    }

    /// `file://` URI for the egui image loaders.
    pub fn image_uri(&self, team: &str) -> Option<String> {
        let path = self.lookup(team)?;
        let absolute = std::fs::canonicalize(&path).unwrap_or(path);
        Some(format!("file://{}", absolute.display()))
    }
}
