//! Simulated token feed: initial universe plus timer-driven price mutation.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{PRICE_JITTER, VOLUME_JITTER};
use crate::data::{Chain, LifecycleStage, PriceObservation, TokenRecord, TrendDirection};

const NAME_POOL: &[(&str, &str)] = &[
    ("Moonveil", "MVL"),
    ("Pepetron", "PTRN"),
    ("Solar Doge", "SDOGE"),
    ("Wifinity", "WIFY"),
    ("Basedworm", "WORM"),
    ("Giga Mode", "GIGA"),
    ("Frogland", "FROG"),
    ("Nebula Cat", "NCAT"),
    ("Rugproof", "RGPF"),
    ("Chain Llama", "LLAMA"),
    ("Turbo Snail", "TSNL"),
    ("Pixel Ape", "PAPE"),
    ("Degen Dust", "DUST"),
    ("Hyper Corgi", "CORG"),
    ("Mango Bot", "MNGO"),
    ("Void Panda", "VPND"),
    ("Salmon Run", "SLMN"),
    ("Quantum Hat", "QHAT"),
    ("Bonk Lite", "BLITE"),
    ("Ether Goose", "GOOSE"),
    ("Lazy Lion", "LLION"),
    ("Crypto Yam", "YAM"),
    ("Night Owl", "NOWL"),
    ("Zoomer Fish", "ZFISH"),
];

const STAGE_CYCLE: [LifecycleStage; 3] = [
    LifecycleStage::New,
    LifecycleStage::NearMigration,
    LifecycleStage::Migrated,
];

const CHAIN_CYCLE: [Chain; 4] = [Chain::Solana, Chain::Ethereum, Chain::Base, Chain::Bsc];

pub struct MockFeed {
    rng: StdRng,
    next_id: u64,
}

impl MockFeed {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Builds the initial universe: stages assigned round-robin, magnitudes
    /// randomized within stage-appropriate ranges.
    pub fn initialize(&mut self, count: usize) -> Vec<TokenRecord> {
        (0..count).map(|i| self.generate_token(i)).collect()
    }

    /// Applies one simulated market tick in place. Every token's pre-tick
    /// price lands in the returned observation map before its new price is
    /// committed; the map replaces the previous tick's map wholesale.
    pub fn tick(&mut self, tokens: &mut [TokenRecord]) -> HashMap<u64, PriceObservation> {
        let mut observations = HashMap::with_capacity(tokens.len());

        for token in tokens.iter_mut() {
            let previous = token.price;
            let new_price = previous * self.rng.random_range(1.0 - PRICE_JITTER..1.0 + PRICE_JITTER);
            let trend = if new_price > previous {
                TrendDirection::Up
            } else if new_price < previous {
                TrendDirection::Down
            } else {
                TrendDirection::Flat
            };

            observations.insert(token.id, PriceObservation::new(previous, trend));
            token.price = new_price;

            token.volume_24h *=
                self.rng.random_range(1.0 - VOLUME_JITTER..1.0 + VOLUME_JITTER);
        }

        observations
    }

    fn generate_token(&mut self, index: usize) -> TokenRecord {
        let (base_name, base_symbol) = NAME_POOL[index % NAME_POOL.len()];
        let cycle = index / NAME_POOL.len();
        let (name, symbol) = if cycle == 0 {
            (base_name.to_string(), base_symbol.to_string())
        } else {
            // Universe larger than the pool: disambiguate repeats.
            (
                format!("{base_name} {}", cycle + 1),
                format!("{base_symbol}{}", cycle + 1),
            )
        };

        let stage = STAGE_CYCLE[index % STAGE_CYCLE.len()];
        let chain = CHAIN_CYCLE[index % CHAIN_CYCLE.len()];

        let market_cap = match stage {
            LifecycleStage::New => self.rng.random_range(5_000.0..80_000.0),
            LifecycleStage::NearMigration => self.rng.random_range(40_000.0..95_000.0),
            LifecycleStage::Migrated => self.rng.random_range(100_000.0..4_000_000.0),
        };
        let minutes_live: i64 = match stage {
            LifecycleStage::New => self.rng.random_range(2..120),
            LifecycleStage::NearMigration => self.rng.random_range(60..1_440),
            LifecycleStage::Migrated => self.rng.random_range(1_440..43_200),
        };

        let price = self.rng.random_range(0.000_001..0.05);
        let liquidity = market_cap * self.rng.random_range(0.1..0.6);
        let volume_24h = market_cap * self.rng.random_range(0.2..3.0);
        let audit_score: u8 = self.rng.random_range(25..=98);

        let id = self.next_id;
        self.next_id += 1;

        TokenRecord {
            id,
            name,
            pair: format!("{symbol}/{}", chain.quote_symbol()),
            symbol,
            chain,
            stage,
            market_cap,
            price,
            volume_24h,
            liquidity,
            launched_at: Utc::now() - Duration::minutes(minutes_live),
            audit_score,
        }
    }
}
