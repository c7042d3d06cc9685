use chrono::Utc;
use uuid::Uuid;

use crate::models::{Category, ClothingItem, Fit, ANY_OCCASION};

/// Builds a wardrobe item with neutral defaults for engine tests
pub(crate) fn item(category: Category) -> ClothingItem {
    ClothingItem {
        id: Uuid::new_v4(),
        name: format!("test {category}"),
        category,
        occasion: ANY_OCCASION.to_string(),
        image_base64: String::new(),
        color_hex: "#808080".to_string(),
        hue: 0.0,
        saturation: 10.0,
        lightness: 50.0,
        fit: Fit::Regular,
        warmth: 2,
        style_tags: String::new(),
        created_at: Utc::now(),
    }
}

pub(crate) trait ItemExt {
    fn with_color(self, hue: f64, saturation: f64, lightness: f64) -> Self;
    fn with_fit(self, fit: Fit) -> Self;
    fn with_occasion(self, occasion: &str) -> Self;
    fn with_tags(self, tags: &str) -> Self;
    fn with_name(self, name: &str) -> Self;
}

impl ItemExt for ClothingItem {
    fn with_color(mut self, hue: f64, saturation: f64, lightness: f64) -> Self {
        self.hue = hue;
        self.saturation = saturation;
        self.lightness = lightness;
        self
    }

    fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    fn with_occasion(mut self, occasion: &str) -> Self {
        self.occasion = occasion.to_string();
        self
    }

    fn with_tags(mut self, tags: &str) -> Self {
        self.style_tags = tags.to_string();
        self
    }

    fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
