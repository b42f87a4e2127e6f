pub mod analysis;
pub mod api;
pub mod models;
pub mod report;
pub mod ui;

pub use analysis::{evaluate, Scorer};
pub use models::{FinancialMetrics, HealthReport, Verdict};
