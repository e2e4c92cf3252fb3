use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use strum::{Display, EnumIter};

use crate::config::TREND_HIGHLIGHT_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Chain {
    Solana,
    Ethereum,
    Base,
    #[strum(serialize = "BSC")]
    Bsc,
}

impl Chain {
    /// Quote asset used in this chain's pair labels.
    pub fn quote_symbol(&self) -> &'static str {
        match self {
            Chain::Solana => "SOL",
            Chain::Ethereum => "WETH",
            Chain::Base => "WETH",
            Chain::Bsc => "WBNB",
        }
    }
}

/// Lifecycle stages in rank order; declaration order drives stage sorting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum LifecycleStage {
    #[strum(serialize = "New")]
    New,
    #[strum(serialize = "Near Migration")]
    NearMigration,
    #[strum(serialize = "Migrated")]
    Migrated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub chain: Chain,
    pub pair: String,
    pub stage: LifecycleStage,
    pub market_cap: f64,
    pub price: f64,
    pub volume_24h: f64,
    pub liquidity: f64,
    pub launched_at: DateTime<Utc>,
    pub audit_score: u8,
}

impl TokenRecord {
    pub fn score_breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::from_total(self.audit_score)
    }
}

/// Weighted sub-scores behind a token's audit score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub liquidity_lock: f64,
    pub community_trust: f64,
    pub audit: f64,
}

impl ScoreBreakdown {
    /// 40% liquidity lock, 30% community trust, 30% audit.
    pub fn from_total(score: u8) -> Self {
        let total = f64::from(score);
        Self {
            liquidity_lock: total * 0.4,
            community_trust: total * 0.3,
            audit: total * 0.3,
        }
    }

    pub fn total(&self) -> f64 {
        self.liquidity_lock + self.community_trust + self.audit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Pre-tick price memory for a single token, used for transient row styling.
#[derive(Debug, Clone)]
pub struct PriceObservation {
    pub previous_price: f64,
    pub trend: TrendDirection,
    pub observed_at: Instant,
}

impl PriceObservation {
    pub fn new(previous_price: f64, trend: TrendDirection) -> Self {
        Self {
            previous_price,
            trend,
            observed_at: Instant::now(),
        }
    }

    /// Fresh observations drive row coloring; stale ones render normally.
    pub fn is_fresh(&self) -> bool {
        self.observed_at.elapsed().as_millis() < TREND_HIGHLIGHT_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_breakdown_sums_to_total() {
        for score in [0u8, 1, 50, 87, 100] {
            let breakdown = ScoreBreakdown::from_total(score);
            assert!((breakdown.total() - f64::from(score)).abs() < 1e-9);
        }
    }

    #[test]
    fn score_breakdown_weights() {
        let breakdown = ScoreBreakdown::from_total(100);
        assert!((breakdown.liquidity_lock - 40.0).abs() < 1e-9);
        assert!((breakdown.community_trust - 30.0).abs() < 1e-9);
        assert!((breakdown.audit - 30.0).abs() < 1e-9);
    }

    #[test]
    fn fresh_observation_is_fresh() {
        let obs = PriceObservation::new(1.0, TrendDirection::Up);
        assert!(obs.is_fresh());
    }
}
