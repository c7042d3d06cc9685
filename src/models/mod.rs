use serde::{Deserialize, Serialize};

mod clothing_item;
mod outfit;

pub use clothing_item::{
    normalize_style_tags, parse_style_tags, Category, ClothingItem, Fit, ParseEnumError,
    ANY_OCCASION,
};
pub use outfit::{OutfitResult, OutfitSlots};

/// HSL triple derived from an item's dominant color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees in `[0, 360)`
    pub hue: f64,
    /// Percentage in `[0, 100]`
    pub saturation: f64,
    /// Percentage in `[0, 100]`
    pub lightness: f64,
}

/// Average color of a photo after transparent pixels are discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    pub hex: String,
    pub hsl: Hsl,
}

/// Category, fit and style tags guessed from a photo's shape and color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataSuggestion {
    pub category: Category,
    pub fit: Fit,
    pub style_tags: Vec<&'static str>,
}

/// Everything the analysis endpoint reports about an uploaded photo
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    pub color: DominantColor,
    pub suggestion: MetadataSuggestion,
}

/// Validated input for creating a wardrobe item
#[derive(Debug, Clone, Deserialize)]
pub struct NewClothingItem {
    pub name: String,
    pub category: Category,
    pub occasion: String,
    pub image_base64: String,
    #[serde(default)]
    pub fit: Fit,
    #[serde(default = "default_warmth")]
    pub warmth: u8,
    #[serde(default)]
    pub style_tags: Vec<String>,
}

fn default_warmth() -> u8 {
    2
}
