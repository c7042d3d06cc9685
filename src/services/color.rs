use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};

use crate::models::{Category, DominantColor, Fit, Hsl, ImageAnalysis, MetadataSuggestion};

/// Side length of the grid a photo is reduced to before averaging
pub const SAMPLE_GRID: u32 = 48;
/// Pixels at or below this alpha are treated as background
pub const ALPHA_CUTOFF: u8 = 24;
/// Color reported when every pixel is transparent
pub const FALLBACK_RGB: [u8; 3] = [160, 160, 160];

// Category thresholds (alpha bounding-box coverage, width/height ratio)
const ACCESSORY_MAX_COVERAGE: f64 = 0.2;
const SHOES_MIN_RATIO: f64 = 1.35;
const OUTER_MAX_RATIO: f64 = 0.58;

// Fit thresholds (width/height ratio)
const LOOSE_MIN_RATIO: f64 = 0.95;
const SLIM_MAX_RATIO: f64 = 0.65;

// Style tag thresholds (HSL)
const NEUTRAL_MAX_SATURATION: f64 = 20.0;
const CLEAN_LIGHTNESS: (f64, f64) = (25.0, 75.0);
const CLEAN_MAX_SATURATION: f64 = 45.0;
const ACCENT_MIN_SATURATION: f64 = 55.0;
const FRESH_HUE: (f64, f64) = (35.0, 170.0);
const WARM_HUE_FROM: f64 = 320.0;
const WARM_HUE_TO: f64 = 20.0;

/// Failure to turn an uploaded payload into pixels
#[derive(Debug, thiserror::Error)]
pub enum ImageDecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unsupported or corrupt image: {0}")]
    Image(#[from] image::ImageError),
}

/// Decodes a base64 photo, with or without a `data:image/...;base64,` prefix
pub fn decode_base64_image(payload: &str) -> Result<DynamicImage, ImageDecodeError> {
    let encoded: String = strip_data_url_prefix(payload)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let raw = BASE64.decode(encoded)?;
    Ok(image::load_from_memory(&raw)?)
}

fn strip_data_url_prefix(data: &str) -> &str {
    let is_data_url = data
        .get(..10)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:image"));

    match data.split_once(',') {
        Some((_, encoded)) if is_data_url => encoded,
        _ => data,
    }
}

/// Standard RGB to HSL conversion
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages.
/// All three are rounded to 2 decimals. Greys have hue and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let rn = f64::from(r) / 255.0;
    let gn = f64::from(g) / 255.0;
    let bn = f64::from(b) / 255.0;

    let max = rn.max(gn).max(bn);
    let min = rn.min(gn).min(bn);
    let delta = max - min;

    let lightness = (max + min) / 2.0;
    let mut hue = 0.0;
    let mut saturation = 0.0;

    if delta != 0.0 {
        saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        hue = if max == rn {
            60.0 * ((gn - bn) / delta).rem_euclid(6.0)
        } else if max == gn {
            60.0 * ((bn - rn) / delta + 2.0)
        } else {
            60.0 * ((rn - gn) / delta + 4.0)
        };
    }

    let mut hue = round2(hue);
    if hue >= 360.0 {
        hue -= 360.0;
    }

    Hsl {
        hue,
        saturation: round2(saturation * 100.0),
        lightness: round2(lightness * 100.0),
    }
}

/// Average color of the photo's opaque pixels
///
/// The photo is resampled with premultiplied alpha so transparent background
/// never bleeds into the garment's edge pixels.
pub fn dominant_color(image: &DynamicImage) -> DominantColor {
    let mut premultiplied = image.to_rgba32f();
    for pixel in premultiplied.pixels_mut() {
        let alpha = pixel[3];
        for channel in &mut pixel.0[..3] {
            *channel *= alpha;
        }
    }

    let tiny = image::imageops::resize(
        &premultiplied,
        SAMPLE_GRID,
        SAMPLE_GRID,
        FilterType::CatmullRom,
    );

    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for pixel in tiny.pixels() {
        if let Some([r, g, b]) = opaque_rgb(pixel.0) {
            sums[0] += u64::from(r);
            sums[1] += u64::from(g);
            sums[2] += u64::from(b);
            count += 1;
        }
    }

    let [red, green, blue] = if count == 0 {
        FALLBACK_RGB
    } else {
        sums.map(|sum| (sum as f64 / count as f64).round() as u8)
    };

    DominantColor {
        hex: format!("#{red:02x}{green:02x}{blue:02x}"),
        hsl: rgb_to_hsl(red, green, blue),
    }
}

/// Straight 8-bit color of a premultiplied pixel, `None` at or below the alpha cutoff
fn opaque_rgb([r, g, b, a]: [f32; 4]) -> Option<[u8; 3]> {
    if a <= 0.0 || to_u8(a) <= ALPHA_CUTOFF {
        return None;
    }
    Some([r, g, b].map(|channel| to_u8(channel / a)))
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Guesses category, fit and style tags from the photo's shape and color
pub fn suggest_metadata(image: &DynamicImage) -> MetadataSuggestion {
    suggest_with_color(image, &dominant_color(image))
}

/// Dominant color and metadata suggestion computed from one decode
pub fn analyze_image(image: &DynamicImage) -> ImageAnalysis {
    let color = dominant_color(image);
    let suggestion = suggest_with_color(image, &color);
    ImageAnalysis { color, suggestion }
}

fn suggest_with_color(image: &DynamicImage, color: &DominantColor) -> MetadataSuggestion {
    let (width, height) = image.dimensions();
    let ratio = f64::from(width) / f64::from(height.max(1));
    let coverage = alpha_coverage(&image.to_rgba8());

    MetadataSuggestion {
        category: category_for(coverage, ratio),
        fit: fit_for(ratio),
        style_tags: style_tags_for(&color.hsl),
    }
}

/// Share of the image covered by the bounding box of non-transparent pixels
fn alpha_coverage(image: &RgbaImage) -> f64 {
    let (width, height) = image.dimensions();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let Some((min_x, min_y, max_x, max_y)) = bounds else {
        return 0.0;
    };

    let box_area = u64::from(max_x - min_x + 1) * u64::from(max_y - min_y + 1);
    let image_area = (u64::from(width) * u64::from(height)).max(1);
    box_area as f64 / image_area as f64
}

fn category_for(coverage: f64, ratio: f64) -> Category {
    if coverage < ACCESSORY_MAX_COVERAGE {
        Category::Accessory
    } else if ratio > SHOES_MIN_RATIO {
        Category::Shoes
    } else if ratio < OUTER_MAX_RATIO {
        Category::Outer
    } else {
        Category::Top
    }
}

fn fit_for(ratio: f64) -> Fit {
    if ratio > LOOSE_MIN_RATIO {
        Fit::Loose
    } else if ratio < SLIM_MAX_RATIO {
        Fit::Slim
    } else {
        Fit::Regular
    }
}

/// Style tags implied by a color
pub fn style_tags_for(hsl: &Hsl) -> Vec<&'static str> {
    let Hsl {
        hue,
        saturation,
        lightness,
    } = *hsl;

    let mut tags = Vec::new();
    if saturation < NEUTRAL_MAX_SATURATION {
        tags.push("neutral");
    }
    if (CLEAN_LIGHTNESS.0..=CLEAN_LIGHTNESS.1).contains(&lightness)
        && saturation <= CLEAN_MAX_SATURATION
    {
        tags.push("clean");
    }
    if saturation > ACCENT_MIN_SATURATION {
        tags.push("accent");
    }
    if (FRESH_HUE.0..=FRESH_HUE.1).contains(&hue) {
        tags.push("fresh");
    }
    if hue >= WARM_HUE_FROM || hue <= WARM_HUE_TO {
        tags.push("warm");
    }
    tags
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
