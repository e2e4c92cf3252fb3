//! Sort and tab state types for the screener table.

use crate::data::LifecycleStage;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTab {
    #[default]
    All,
    New,
    NearMigration,
    Migrated,
}

impl StageTab {
    pub const ALL: [StageTab; 4] = [
        StageTab::All,
        StageTab::New,
        StageTab::NearMigration,
        StageTab::Migrated,
    ];

    /// Get the previous tab, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Self::All => Self::Migrated,
            Self::New => Self::All,
            Self::NearMigration => Self::New,
            Self::Migrated => Self::NearMigration,
        }
    }

    /// Get the next tab, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::New,
            Self::New => Self::NearMigration,
            Self::NearMigration => Self::Migrated,
            Self::Migrated => Self::All,
        }
    }

    /// The stage this tab filters on; `None` means show everything.
    pub fn stage(self) -> Option<LifecycleStage> {
        match self {
            Self::All => None,
            Self::New => Some(LifecycleStage::New),
            Self::NearMigration => Some(LifecycleStage::NearMigration),
            Self::Migrated => Some(LifecycleStage::Migrated),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::New => "New Pairs",
            Self::NearMigration => "Near Migration",
            Self::Migrated => "Migrated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Chain,
    Pair,
    Stage,
    Price,
    MarketCap,
    Volume,
    Liquidity,
    Age,
    Score,
}

impl SortKey {
    /// Table column order; also the `s`-key cycle order.
    pub const COLUMNS: [SortKey; 10] = [
        SortKey::Name,
        SortKey::Chain,
        SortKey::Pair,
        SortKey::Stage,
        SortKey::Price,
        SortKey::MarketCap,
        SortKey::Volume,
        SortKey::Liquidity,
        SortKey::Age,
        SortKey::Score,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Token",
            Self::Chain => "Chain",
            Self::Pair => "Pair",
            Self::Stage => "Stage",
            Self::Price => "Price",
            Self::MarketCap => "Mkt Cap",
            Self::Volume => "Volume",
            Self::Liquidity => "Liquidity",
            Self::Age => "Age",
            Self::Score => "Score",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Price | Self::MarketCap | Self::Volume | Self::Liquidity | Self::Age | Self::Score
        )
    }

    /// Numeric columns open descending; textual columns and Stage open ascending.
    pub fn default_direction(self) -> SortDirection {
        if self.is_numeric() {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::COLUMNS.iter().position(|k| *k == self).unwrap_or(0);
        Self::COLUMNS[(pos + 1) % Self::COLUMNS.len()]
    }

    pub fn previous(self) -> Self {
        let pos = Self::COLUMNS.iter().position(|k| *k == self).unwrap_or(0);
        Self::COLUMNS[(pos + Self::COLUMNS.len() - 1) % Self::COLUMNS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::MarketCap,
            direction: SortDirection::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_market_cap_descending() {
        let spec = SortSpec::default();
        assert_eq!(spec.key, SortKey::MarketCap);
        assert_eq!(spec.direction, SortDirection::Descending);
    }

    #[test]
    fn default_direction_by_key_type() {
        assert_eq!(SortKey::MarketCap.default_direction(), SortDirection::Descending);
        assert_eq!(SortKey::Score.default_direction(), SortDirection::Descending);
        assert_eq!(SortKey::Name.default_direction(), SortDirection::Ascending);
        assert_eq!(SortKey::Chain.default_direction(), SortDirection::Ascending);
        assert_eq!(SortKey::Stage.default_direction(), SortDirection::Ascending);
    }

    #[test]
    fn sort_key_cycle_round_trips() {
        for key in SortKey::COLUMNS {
            assert_eq!(key.next().previous(), key);
        }
        let mut key = SortKey::Name;
        for _ in 0..SortKey::COLUMNS.len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::Name);
    }

    #[test]
    fn stage_tab_cycle_round_trips() {
        for tab in StageTab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
        assert_eq!(StageTab::All.next(), StageTab::New);
        assert_eq!(StageTab::Migrated.next(), StageTab::All);
    }

    #[test]
    fn stage_tab_maps_to_stage() {
        use crate::data::LifecycleStage;
        assert_eq!(StageTab::All.stage(), None);
        assert_eq!(StageTab::New.stage(), Some(LifecycleStage::New));
        assert_eq!(StageTab::Migrated.stage(), Some(LifecycleStage::Migrated));
    }
}
