use std::collections::BTreeMap;

use rand::Rng;
use thiserror::Error;

use crate::models::{Category, ClothingItem, OutfitResult, OutfitSlots};

use super::color::round2;
use super::harmony::pair_harmony;
use super::sampler::sample_pool;
use super::scoring::score_outfit;

/// Upper bound (exclusive) of the random bonus added to each candidate
pub const DEFAULT_JITTER: f64 = 2.2;

/// Error types for the recommender
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("Not enough items to generate outfit: no eligible {}", join_slots(.missing))]
    InsufficientWardrobe { missing: Vec<Category> },
}

fn join_slots(slots: &[Category]) -> String {
    slots
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maximum number of candidates kept per slot
///
/// Keeps the top x bottom x shoes product small enough for an interactive
/// request (12 x 12 x 10 = 1,440 combinations with the defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolCaps {
    pub top: usize,
    pub bottom: usize,
    pub shoes: usize,
    pub outer: usize,
    pub accessory: usize,
}

impl Default for PoolCaps {
    fn default() -> Self {
        Self {
            top: 12,
            bottom: 12,
            shoes: 10,
            outer: 8,
            accessory: 8,
        }
    }
}

impl PoolCaps {
    pub fn for_slot(&self, slot: Category) -> usize {
        match slot {
            Category::Top => self.top,
            Category::Bottom => self.bottom,
            Category::Shoes => self.shoes,
            Category::Outer => self.outer,
            Category::Accessory => self.accessory,
        }
    }
}

/// Outfit search over a single user's wardrobe
///
/// Holds only search parameters; every call is independent and never mutates
/// the items it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommender {
    caps: PoolCaps,
    jitter: f64,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(PoolCaps::default(), DEFAULT_JITTER)
    }
}

impl Recommender {
    /// Creates a recommender with the given pool caps and jitter span
    pub fn new(caps: PoolCaps, jitter: f64) -> Self {
        Self {
            caps,
            jitter: jitter.max(0.0),
        }
    }

    /// Finds the best-scoring outfit for the occasion
    ///
    /// Items are filtered by occasion and grouped by slot. Top, bottom and shoes
    /// must each have at least one eligible item. Each sampled
    /// top x bottom x shoes combination gets the best-matching outer and
    /// accessory attached, is scored, and receives a small random bonus so
    /// repeated calls vary; the highest total wins, earliest on ties.
    pub fn recommend<'a, R: Rng + ?Sized>(
        &self,
        items: &'a [ClothingItem],
        occasion: &str,
        rng: &mut R,
    ) -> Result<OutfitResult<'a>, RecommendError> {
        let mut groups: BTreeMap<Category, Vec<&'a ClothingItem>> = BTreeMap::new();
        for item in items.iter().filter(|item| item.matches_occasion(occasion)) {
            groups.entry(item.category).or_default().push(item);
        }

        let missing: Vec<Category> = Category::REQUIRED
            .into_iter()
            .filter(|slot| groups.get(slot).map_or(true, Vec::is_empty))
            .collect();
        if !missing.is_empty() {
            tracing::debug!(occasion, missing = %join_slots(&missing), "Wardrobe cannot fill required slots");
            return Err(RecommendError::InsufficientWardrobe { missing });
        }

        let mut pool = |slot: Category| {
            let group = groups.get(&slot).map(Vec::as_slice).unwrap_or_default();
            sample_pool(group, self.caps.for_slot(slot), &mut *rng)
        };
        let tops = pool(Category::Top);
        let bottoms = pool(Category::Bottom);
        let shoes_pool = pool(Category::Shoes);
        let outers = pool(Category::Outer);
        let accessories = pool(Category::Accessory);

        let mut best: Option<(f64, OutfitResult<'a>)> = None;
        let mut candidates = 0usize;

        for &top in &tops {
            for &bottom in &bottoms {
                for &shoes in &shoes_pool {
                    let anchors = [top, bottom, shoes];
                    let slots = OutfitSlots {
                        top,
                        bottom,
                        shoes,
                        outer: pick_best_addon(&outers, &anchors),
                        accessory: pick_best_addon(&accessories, &anchors),
                    };

                    let scored = score_outfit(&slots, occasion);
                    let ranked = scored.score + rng.gen::<f64>() * self.jitter;
                    candidates += 1;

                    if best.as_ref().map_or(true, |(top_rank, _)| ranked > *top_rank) {
                        best = Some((
                            ranked,
                            OutfitResult {
                                score: round2(ranked),
                                reasons: scored.reasons,
                                slots,
                            },
                        ));
                    }
                }
            }
        }

        let (_, result) = best.ok_or_else(|| RecommendError::InsufficientWardrobe {
            missing: Category::REQUIRED.to_vec(),
        })?;

        tracing::debug!(
            occasion,
            candidates,
            score = result.score,
            "Outfit search completed"
        );

        Ok(result)
    }
}

/// The add-on with the highest summed harmony against the anchors
///
/// Returns `None` for an empty pool. The first of equally good add-ons wins.
fn pick_best_addon<'a>(
    pool: &[&'a ClothingItem],
    anchors: &[&'a ClothingItem; 3],
) -> Option<&'a ClothingItem> {
    let mut best: Option<(f64, &'a ClothingItem)> = None;
    for &addon in pool {
        let harmony: f64 = anchors.iter().map(|anchor| pair_harmony(addon, anchor)).sum();
        if best.map_or(true, |(top, _)| harmony > top) {
            best = Some((harmony, addon));
        }
    }
    best.map(|(_, addon)| addon)
}

/// Best outfit for the occasion using default caps and the thread-local RNG
///
/// Returns `None` when the wardrobe cannot fill top, bottom and shoes.
pub fn generate_outfit<'a>(items: &'a [ClothingItem], occasion: &str) -> Option<OutfitResult<'a>> {
    Recommender::default()
        .recommend(items, occasion, &mut rand::thread_rng())
        .ok()
}
