//! Risk settings — how much currency one unit of risk (1R) represents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How `risk_per_trade` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskMode {
    /// `risk_per_trade` is a percentage of `portfolio_size` (1.0 = 1%).
    Percentage,
    /// `risk_per_trade` is a fixed currency amount.
    Fixed,
}

/// A trader's risk configuration, passed in explicitly wherever R units are
/// derived. Owned and persisted by the surrounding app; the engine only ever
/// reads a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub portfolio_size: f64,
    pub risk_mode: RiskMode,
    pub risk_per_trade: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            portfolio_size: 10_000.0,
            risk_mode: RiskMode::Percentage,
            risk_per_trade: 1.0,
        }
    }
}

/// Errors from validating risk settings at the input boundary.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("portfolio size must be positive and finite, got {0}")]
    InvalidPortfolioSize(f64),
    #[error("risk per trade must be positive and finite, got {0}")]
    InvalidRiskPerTrade(f64),
    #[error("percentage risk cannot exceed 100%, got {0}")]
    PercentageOutOfRange(f64),
}

impl RiskSettings {
    /// Reject settings that cannot produce a meaningful risk unit.
    ///
    /// This is the boundary check for user input; `one_r_value` itself never
    /// fails and instead degrades to 0.0 on bad settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.portfolio_size.is_finite() || self.portfolio_size <= 0.0 {
            return Err(SettingsError::InvalidPortfolioSize(self.portfolio_size));
        }
        if !self.risk_per_trade.is_finite() || self.risk_per_trade <= 0.0 {
            return Err(SettingsError::InvalidRiskPerTrade(self.risk_per_trade));
        }
        if self.risk_mode == RiskMode::Percentage && self.risk_per_trade > 100.0 {
            return Err(SettingsError::PercentageOutOfRange(self.risk_per_trade));
        }
        Ok(())
    }

    /// Currency value of 1R.
    ///
    /// Returns 0.0 when the settings cannot produce a meaningful risk unit,
    /// which downstream reads as "R units unavailable".
    pub fn one_r_value(&self) -> f64 {
        if !self.portfolio_size.is_finite() || !self.risk_per_trade.is_finite() {
            return 0.0;
        }
        if self.risk_per_trade <= 0.0 {
            return 0.0;
        }
        match self.risk_mode {
            RiskMode::Percentage => {
                if self.portfolio_size <= 0.0 {
                    return 0.0;
                }
                self.portfolio_size * self.risk_per_trade / 100.0
            }
            RiskMode::Fixed => self.risk_per_trade,
        }
    }
}
