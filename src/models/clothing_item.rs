use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display, str::FromStr};
use uuid::Uuid;

/// Occasion tag that matches every requested occasion
pub const ANY_OCCASION: &str = "all";

/// Error returned when a stored or submitted enum value is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Clothing category, which doubles as the outfit slot an item fills
///
/// Variant order is the display order of an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outer,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Outer,
        Category::Accessory,
    ];

    /// Slots every outfit must fill
    pub const REQUIRED: [Category; 3] = [Category::Top, Category::Bottom, Category::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Outer => "outer",
            Category::Accessory => "accessory",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Silhouette of a garment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Slim,
    #[default]
    Regular,
    Loose,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fit::Slim => "slim",
            Fit::Regular => "regular",
            Fit::Loose => "loose",
        }
    }
}

impl Display for Fit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slim" => Ok(Fit::Slim),
            "regular" => Ok(Fit::Regular),
            "loose" => Ok(Fit::Loose),
            other => Err(ParseEnumError {
                kind: "fit",
                value: other.to_string(),
            }),
        }
    }
}

/// A garment in a user's wardrobe
///
/// `hue`, `saturation` and `lightness` are derived from the uploaded photo when
/// the item is created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    /// Free-form occasion tag; `"all"` fits any occasion
    pub occasion: String,
    pub image_base64: String,
    /// Dominant color as `#rrggbb`
    pub color_hex: String,
    /// Degrees in `[0, 360)`
    pub hue: f64,
    /// Percentage in `[0, 100]`
    pub saturation: f64,
    /// Percentage in `[0, 100]`
    pub lightness: f64,
    pub fit: Fit,
    /// 1 (light) to 5 (heavy)
    pub warmth: u8,
    /// Comma-delimited style tags
    pub style_tags: String,
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    /// Parsed style tags of this item
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        parse_style_tags(&self.style_tags)
    }

    /// Whether this item is eligible for the requested occasion
    pub fn matches_occasion(&self, requested: &str) -> bool {
        requested == ANY_OCCASION || self.occasion == requested || self.occasion == ANY_OCCASION
    }
}

/// Splits a stored tag string into its non-empty, trimmed fragments
pub fn parse_style_tags(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Lower-cases, trims and de-duplicates submitted tags, keeping first-seen order
pub fn normalize_style_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.iter()
        .flat_map(|tag| parse_style_tags(tag.as_ref()))
        .map(str::to_lowercase)
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
