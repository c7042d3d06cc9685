use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestContext;
use crate::models::{Category, ClothingItem, Fit, ImageAnalysis, NewClothingItem, ANY_OCCASION};
use crate::services::wardrobe;

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub occasion: String,
    pub image_base64: String,
    pub color_hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub fit: Fit,
    pub warmth: u8,
    pub style_tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&ClothingItem> for ItemResponse {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category,
            occasion: item.occasion.clone(),
            image_base64: item.image_base64.clone(),
            color_hex: item.color_hex.clone(),
            hue: item.hue,
            saturation: item.saturation,
            lightness: item.lightness,
            fit: item.fit,
            warmth: item.warmth,
            style_tags: item.tags().map(String::from).collect(),
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub image_base64: String,
}

#[derive(Debug, Serialize)]
pub struct ImageAnalysisResponse {
    pub color_hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub suggested_category: Category,
    pub suggested_fit: Fit,
    pub suggested_style_tags: Vec<&'static str>,
}

impl From<ImageAnalysis> for ImageAnalysisResponse {
    fn from(analysis: ImageAnalysis) -> Self {
        Self {
            color_hex: analysis.color.hex,
            hue: analysis.color.hsl.hue,
            saturation: analysis.color.hsl.saturation,
            lightness: analysis.color.hsl.lightness,
            suggested_category: analysis.suggestion.category,
            suggested_fit: analysis.suggestion.fit,
            suggested_style_tags: analysis.suggestion.style_tags,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default = "default_occasion")]
    pub occasion: String,
}

fn default_occasion() -> String {
    ANY_OCCASION.to_string()
}

#[derive(Debug, Serialize)]
pub struct OutfitSlotResponse {
    pub slot: Category,
    pub item: ItemResponse,
}

#[derive(Debug, Serialize)]
pub struct OutfitResponse {
    pub occasion: String,
    pub score: f64,
    pub reasons: Vec<&'static str>,
    pub slots: Vec<OutfitSlotResponse>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// The caller's wardrobe, newest first
pub async fn list_items(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<ItemResponse>>> {
    let items = state.store.list_items(&ctx.owner).await?;
    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

/// Add an item to the caller's wardrobe
pub async fn create_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(request): Json<NewClothingItem>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    let item = wardrobe::create_item(state.store.as_ref(), &ctx.owner, request).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(&item))))
}

/// Remove an item from the caller's wardrobe
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.store.delete_item(&ctx.owner, id).await? {
        tracing::info!(request_id = %ctx.request_id, item_id = %id, "Deleted wardrobe item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("item {id}")))
    }
}

/// Dominant color and metadata suggestions for a photo, without storing it
pub async fn analyze_image(
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<ImageAnalysisResponse>> {
    let analysis = wardrobe::analyze_payload(&request.image_base64)?;
    Ok(Json(analysis.into()))
}

/// Best outfit for an occasion from the caller's wardrobe
pub async fn recommend(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<RecommendQuery>,
) -> AppResult<Json<OutfitResponse>> {
    let occasion = query.occasion.trim().to_string();
    if occasion.is_empty() {
        return Err(AppError::InvalidInput("occasion must not be empty".to_string()));
    }

    let items = state.store.list_items(&ctx.owner).await?;
    let outfit = state
        .recommender
        .recommend(&items, &occasion, &mut rand::thread_rng())?;

    tracing::info!(
        request_id = %ctx.request_id,
        occasion = %occasion,
        score = outfit.score,
        wardrobe_size = items.len(),
        "Recommended outfit"
    );

    let slots = outfit
        .slots
        .iter()
        .map(|(slot, item)| OutfitSlotResponse {
            slot,
            item: ItemResponse::from(item),
        })
        .collect();

    Ok(Json(OutfitResponse {
        occasion,
        score: outfit.score,
        reasons: outfit.reasons,
        slots,
    }))
}
