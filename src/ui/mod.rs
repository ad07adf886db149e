pub mod dashboard;
pub mod format;
pub mod panels;
pub mod plot;
pub mod tables;
pub mod team;
