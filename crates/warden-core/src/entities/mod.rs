//! Domain entities - core business objects

mod document;
mod thresholds;
mod warning;

pub use document::{ConfigDocument, WarningLedger};
pub use thresholds::{EscalationAction, ThresholdTable};
pub use warning::{WarningRecord, DEFAULT_REASON};
