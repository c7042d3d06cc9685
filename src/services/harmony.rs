use crate::models::ClothingItem;

/// Hue gap (degrees) treated as the same color family
pub const SAME_FAMILY_MAX_GAP: f64 = 24.0;
pub const SAME_FAMILY_POINTS: f64 = 25.0;

/// Hue gap band treated as near-complementary
pub const COMPLEMENTARY_GAP: (f64, f64) = (150.0, 210.0);
pub const COMPLEMENTARY_POINTS: f64 = 22.0;

/// Hue gap (degrees) treated as analogous
pub const ANALOGOUS_MAX_GAP: f64 = 60.0;
pub const ANALOGOUS_POINTS: f64 = 15.0;

// Unrelated hues: max(FLOOR, BASE - gap / DIVISOR)
const UNRELATED_HUE_BASE: f64 = 11.0;
const UNRELATED_HUE_DIVISOR: f64 = 18.0;
const UNRELATED_HUE_FLOOR: f64 = 4.0;

// Saturation similarity: max(FLOOR, BASE - gap * WEIGHT)
const SATURATION_BASE: f64 = 12.0;
const SATURATION_GAP_WEIGHT: f64 = 0.5;
const SATURATION_FLOOR: f64 = 3.0;

/// Shortest distance between two hues on the color wheel
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let gap = (h1 - h2).abs();
    gap.min(360.0 - gap)
}

/// Color compatibility of two items from their hue and saturation
///
/// Symmetric and deterministic; ranges roughly from 7 to 37.
pub fn pair_harmony(a: &ClothingItem, b: &ClothingItem) -> f64 {
    hue_points(hue_distance(a.hue, b.hue)) + saturation_points((a.saturation - b.saturation).abs())
}

fn hue_points(gap: f64) -> f64 {
    if gap <= SAME_FAMILY_MAX_GAP {
        SAME_FAMILY_POINTS
    } else if (COMPLEMENTARY_GAP.0..=COMPLEMENTARY_GAP.1).contains(&gap) {
        COMPLEMENTARY_POINTS
    } else if gap <= ANALOGOUS_MAX_GAP {
        ANALOGOUS_POINTS
    } else {
        (UNRELATED_HUE_BASE - gap / UNRELATED_HUE_DIVISOR).max(UNRELATED_HUE_FLOOR)
    }
}

fn saturation_points(gap: f64) -> f64 {
    (SATURATION_BASE - gap * SATURATION_GAP_WEIGHT).max(SATURATION_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::test_support::{item, ItemExt};

    #[test]
    fn test_hue_distance_wraps_around() {
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_hue_bands() {
        assert_eq!(hue_points(0.0), 25.0);
        assert_eq!(hue_points(24.0), 25.0);
        assert_eq!(hue_points(40.0), 15.0);
        assert_eq!(hue_points(60.0), 15.0);
        assert_eq!(hue_points(150.0), 22.0);
        assert_eq!(hue_points(180.0), 22.0);
        assert_eq!(hue_points(210.0), 22.0);
        assert_eq!(hue_points(90.0), 6.0);
        assert_eq!(hue_points(140.0), 4.0);
    }

    #[test]
    fn test_saturation_points_floor() {
        assert_eq!(saturation_points(0.0), 12.0);
        assert_eq!(saturation_points(10.0), 7.0);
        assert_eq!(saturation_points(30.0), 3.0);
    }

    #[test]
    fn test_identical_colors_score_maximum() {
        let a = item(Category::Top).with_color(200.0, 40.0, 50.0);
        let b = item(Category::Bottom).with_color(200.0, 40.0, 20.0);
        assert_eq!(pair_harmony(&a, &b), 37.0);
    }

    #[test]
    fn test_harmony_is_symmetric() {
        let colors = [(0.0, 0.0), (15.0, 90.0), (170.0, 30.0), (300.0, 55.0), (359.0, 100.0)];
        for &(h1, s1) in &colors {
            for &(h2, s2) in &colors {
                let a = item(Category::Top).with_color(h1, s1, 50.0);
                let b = item(Category::Shoes).with_color(h2, s2, 50.0);
                assert_eq!(pair_harmony(&a, &b), pair_harmony(&b, &a));
            }
        }
    }

    #[test]
    fn test_lightness_does_not_affect_harmony() {
        let a = item(Category::Top).with_color(100.0, 20.0, 10.0);
        let b = item(Category::Top).with_color(100.0, 20.0, 90.0);
        let c = item(Category::Shoes).with_color(250.0, 60.0, 50.0);
        assert_eq!(pair_harmony(&a, &c), pair_harmony(&b, &c));
    }
}
