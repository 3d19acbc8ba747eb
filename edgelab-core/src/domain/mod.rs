//! Domain types for the EdgeLab journal engine.

pub mod ids;
pub mod settings;
pub mod trade;

pub use ids::TradeId;
pub use settings::{RiskMode, RiskSettings, SettingsError};
pub use trade::{Outcome, Side, Trade, TradeMetrics};

/// Symbol type alias
pub type Symbol = String;
