//! Sort/filter pipeline: derives the visible row order from the token list.
//!
//! Both operations are pure and recomputed from the full in-memory list
//! whenever their inputs change; rows are addressed as indices into the
//! list so the records themselves stay in insertion order.

use std::cmp::Ordering;

use crate::data::TokenRecord;
use super::types::{SortDirection, SortKey, SortSpec, StageTab};

fn compare_by_key(a: &TokenRecord, b: &TokenRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Chain => a
            .chain
            .to_string()
            .to_lowercase()
            .cmp(&b.chain.to_string().to_lowercase()),
        SortKey::Pair => a.pair.to_lowercase().cmp(&b.pair.to_lowercase()),
        // Stage compares by lifecycle rank, not alphabetically.
        SortKey::Stage => a.stage.cmp(&b.stage),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        SortKey::Volume => a.volume_24h.total_cmp(&b.volume_24h),
        SortKey::Liquidity => a.liquidity.total_cmp(&b.liquidity),
        SortKey::Age => a.launched_at.cmp(&b.launched_at),
        SortKey::Score => a.audit_score.cmp(&b.audit_score),
    }
}

/// Stable sort over the chosen column; returns indices into `tokens`.
pub fn sorted_indices(tokens: &[TokenRecord], spec: SortSpec) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tokens.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = compare_by_key(&tokens[a], &tokens[b], spec.key);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}

/// Keeps only the rows matching the active tab, preserving `order`.
pub fn filter_indices(tokens: &[TokenRecord], order: &[usize], tab: StageTab) -> Vec<usize> {
    match tab.stage() {
        None => order.to_vec(),
        Some(stage) => order
            .iter()
            .copied()
            .filter(|&i| tokens[i].stage == stage)
            .collect(),
    }
}

/// Row count a tab would show; drives the tab bar labels.
pub fn stage_count(tokens: &[TokenRecord], tab: StageTab) -> usize {
    match tab.stage() {
        None => tokens.len(),
        Some(stage) => tokens.iter().filter(|t| t.stage == stage).count(),
    }
}
