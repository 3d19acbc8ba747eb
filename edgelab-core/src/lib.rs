//! EdgeLab Core — journal domain types and per-trade risk scoring.
//!
//! This crate contains the input side of the analytics engine:
//! - Domain types (trades, outcomes, risk settings, ids)
//! - Side inference from entry/stop/target geometry
//! - Risk-unit computation: points → currency → reward-to-risk → R multiples
//!
//! Everything here is pure and synchronous; persistence, auth, and rendering
//! belong to the surrounding app.

pub mod domain;
pub mod risk;

pub use domain::{Outcome, RiskMode, RiskSettings, SettingsError, Side, Trade, TradeId, TradeMetrics};
pub use risk::{compute_risk_unit, infer_side, planned_rr, score_trade, RiskInput, SideInference};
