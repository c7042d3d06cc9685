use std::collections::BTreeSet;

use crate::models::{OutfitSlots, ANY_OCCASION};

use super::color::round2;
use super::harmony::pair_harmony;

/// Tone harmony above which the outfit is called coordinated
pub const TONE_HARMONY_THRESHOLD: f64 = 60.0;

/// Lightness span (percentage points) that reads as clear contrast
pub const DEPTH_SPAN: (f64, f64) = (18.0, 58.0);
pub const DEPTH_POINTS: f64 = 16.0;

/// The most saturated anchor must reach this to count as an accent
pub const ACCENT_MIN_SATURATION: f64 = 48.0;
/// Mean saturation of the other two anchors must stay at or below this
pub const ACCENT_MAX_BASE_SATURATION: f64 = 28.0;
pub const ACCENT_POINTS: f64 = 10.0;

pub const SILHOUETTE_POINTS: f64 = 9.0;

pub const OCCASION_EXACT_POINTS: f64 = 4.0;
pub const OCCASION_WILDCARD_POINTS: f64 = 1.6;

pub const CLEAN_TAG_POINTS: f64 = 5.0;
pub const OCCASION_TAG_POINTS: f64 = 6.0;

pub const REASON_TONE: &str = "Coordinated analogous or same-family colors";
pub const REASON_DEPTH: &str = "Clear light/dark contrast";
pub const REASON_ACCENT: &str = "One accent color against quiet neutrals";
pub const REASON_SILHOUETTE: &str = "Balanced silhouette: slim paired with loose";
pub const REASON_WORK_NEUTRAL: &str = "Steady neutral tones for work";
pub const REASON_DATE_ACCENT: &str = "A memorable accent for a date";
pub const REASON_DEFAULT: &str = "Stable basic color pairing";

/// Score and explanations for one candidate outfit
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitScore {
    /// Rounded to 2 decimals
    pub score: f64,
    /// Never empty
    pub reasons: Vec<&'static str>,
}

#[derive(Debug, Default)]
struct Scorecard {
    points: f64,
    reasons: Vec<&'static str>,
}

impl Scorecard {
    fn add(&mut self, points: f64) {
        self.points += points;
    }

    fn award(&mut self, points: f64, reason: &'static str) {
        self.points += points;
        self.reasons.push(reason);
    }
}

/// Scores a filled outfit for the requested occasion
///
/// Rules run in a fixed order so reasons come out in a stable order:
/// tone harmony, depth contrast, single accent, silhouette balance,
/// occasion priority, style tags.
pub fn score_outfit(slots: &OutfitSlots<'_>, occasion: &str) -> OutfitScore {
    let mut card = Scorecard::default();

    tone_harmony(slots, &mut card);
    depth_contrast(slots, &mut card);
    single_accent(slots, &mut card);
    silhouette_balance(slots, &mut card);
    occasion_priority(slots, occasion, &mut card);
    style_tags(slots, occasion, &mut card);

    if card.reasons.is_empty() {
        card.reasons.push(REASON_DEFAULT);
    }

    OutfitScore {
        score: round2(card.points),
        reasons: card.reasons,
    }
}

fn tone_harmony(slots: &OutfitSlots<'_>, card: &mut Scorecard) {
    let harmony = pair_harmony(slots.top, slots.bottom)
        + pair_harmony(slots.bottom, slots.shoes)
        + pair_harmony(slots.top, slots.shoes);

    if harmony > TONE_HARMONY_THRESHOLD {
        card.award(harmony, REASON_TONE);
    } else {
        card.add(harmony);
    }
}

fn depth_contrast(slots: &OutfitSlots<'_>, card: &mut Scorecard) {
    let lightness = slots.anchors().map(|item| item.lightness);
    let span = lightness.iter().copied().fold(f64::MIN, f64::max)
        - lightness.iter().copied().fold(f64::MAX, f64::min);

    if (DEPTH_SPAN.0..=DEPTH_SPAN.1).contains(&span) {
        card.award(DEPTH_POINTS, REASON_DEPTH);
    }
}

fn single_accent(slots: &OutfitSlots<'_>, card: &mut Scorecard) {
    let mut saturation = slots.anchors().map(|item| item.saturation);
    saturation.sort_by(f64::total_cmp);

    let base = (saturation[0] + saturation[1]) / 2.0;
    if saturation[2] >= ACCENT_MIN_SATURATION && base <= ACCENT_MAX_BASE_SATURATION {
        card.award(ACCENT_POINTS, REASON_ACCENT);
    }
}

fn silhouette_balance(slots: &OutfitSlots<'_>, card: &mut Scorecard) {
    use crate::models::Fit::{Loose, Slim};

    if matches!((slots.top.fit, slots.bottom.fit), (Slim, Loose) | (Loose, Slim)) {
        card.award(SILHOUETTE_POINTS, REASON_SILHOUETTE);
    }
}

fn occasion_priority(slots: &OutfitSlots<'_>, occasion: &str, card: &mut Scorecard) {
    for (_, item) in slots.iter() {
        if item.occasion == occasion {
            card.add(OCCASION_EXACT_POINTS);
        } else if item.occasion == ANY_OCCASION {
            card.add(OCCASION_WILDCARD_POINTS);
        }
    }
}

fn style_tags(slots: &OutfitSlots<'_>, occasion: &str, card: &mut Scorecard) {
    let tags: BTreeSet<&str> = slots.iter().flat_map(|(_, item)| item.tags()).collect();

    if tags.contains("clean") {
        card.add(CLEAN_TAG_POINTS);
    }
    if occasion == "work" && tags.contains("neutral") {
        card.award(OCCASION_TAG_POINTS, REASON_WORK_NEUTRAL);
    }
    if occasion == "date" && tags.contains("accent") {
        card.award(OCCASION_TAG_POINTS, REASON_DATE_ACCENT);
    }
}
