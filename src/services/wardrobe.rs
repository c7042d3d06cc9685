use std::ops::RangeInclusive;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::ItemStore,
    error::{AppError, AppResult},
    models::{normalize_style_tags, ClothingItem, ImageAnalysis, NewClothingItem},
};

use super::color::{analyze_image, decode_base64_image, dominant_color};

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_OCCASION_CHARS: usize = 24;
/// Limit on the comma-joined tag list as stored
pub const MAX_STYLE_TAGS_CHARS: usize = 255;
pub const WARMTH_RANGE: RangeInclusive<u8> = 1..=5;

/// Validates a new item, derives its color from the photo and stores it
pub async fn create_item(
    store: &dyn ItemStore,
    owner: &str,
    new_item: NewClothingItem,
) -> AppResult<ClothingItem> {
    // Decoding and resampling the photo is CPU-bound
    let item = tokio::task::spawn_blocking(move || build_item(new_item))
        .await
        .map_err(|e| AppError::Internal(format!("item analysis task failed: {e}")))??;

    tracing::info!(
        item_id = %item.id,
        category = %item.category,
        color = %item.color_hex,
        store = store.name(),
        "Creating wardrobe item"
    );

    store.insert_item(owner, item).await
}

/// Dominant color and metadata suggestions for an uploaded photo
pub fn analyze_payload(image_base64: &str) -> AppResult<ImageAnalysis> {
    let image = decode_base64_image(image_base64)?;
    Ok(analyze_image(&image))
}

fn build_item(new_item: NewClothingItem) -> AppResult<ClothingItem> {
    let name = new_item.name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::InvalidInput(format!(
            "name must be between 1 and {MAX_NAME_CHARS} characters"
        )));
    }

    let occasion = new_item.occasion.trim();
    if occasion.is_empty() || occasion.chars().count() > MAX_OCCASION_CHARS {
        return Err(AppError::InvalidInput(format!(
            "occasion must be between 1 and {MAX_OCCASION_CHARS} characters"
        )));
    }

    if !WARMTH_RANGE.contains(&new_item.warmth) {
        return Err(AppError::InvalidInput(format!(
            "warmth must be between {} and {}",
            WARMTH_RANGE.start(),
            WARMTH_RANGE.end()
        )));
    }

    let style_tags = normalize_style_tags(&new_item.style_tags).join(",");
    if style_tags.chars().count() > MAX_STYLE_TAGS_CHARS {
        return Err(AppError::InvalidInput(format!(
            "style_tags must total at most {MAX_STYLE_TAGS_CHARS} characters"
        )));
    }

    let image = decode_base64_image(&new_item.image_base64)?;
    let color = dominant_color(&image);

    Ok(ClothingItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: new_item.category,
        occasion: occasion.to_string(),
        color_hex: color.hex,
        hue: color.hsl.hue,
        saturation: color.hsl.saturation,
        lightness: color.hsl.lightness,
        fit: new_item.fit,
        warmth: new_item.warmth,
        style_tags,
        image_base64: new_item.image_base64,
        created_at: Utc::now(),
    })
}
