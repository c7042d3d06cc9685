use super::{Category, ClothingItem};

/// A filled set of outfit slots
///
/// Top, bottom and shoes are mandatory; outer and accessory are attached only
/// when the wardrobe has an eligible item for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutfitSlots<'a> {
    pub top: &'a ClothingItem,
    pub bottom: &'a ClothingItem,
    pub shoes: &'a ClothingItem,
    pub outer: Option<&'a ClothingItem>,
    pub accessory: Option<&'a ClothingItem>,
}

impl<'a> OutfitSlots<'a> {
    /// The three mandatory slots, used as anchors for add-on selection
    pub fn anchors(&self) -> [&'a ClothingItem; 3] {
        [self.top, self.bottom, self.shoes]
    }

    /// Item placed in the given slot, if any
    pub fn get(&self, slot: Category) -> Option<&'a ClothingItem> {
        match slot {
            Category::Top => Some(self.top),
            Category::Bottom => Some(self.bottom),
            Category::Shoes => Some(self.shoes),
            Category::Outer => self.outer,
            Category::Accessory => self.accessory,
        }
    }

    /// Filled slots in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &'a ClothingItem)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }
}

/// Best outfit found by one recommendation search
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitResult<'a> {
    /// Ranking score, rounded to 2 decimals; only comparable within one search
    pub score: f64,
    /// Human-readable explanations, never empty
    pub reasons: Vec<&'static str>,
    pub slots: OutfitSlots<'a>,
}
