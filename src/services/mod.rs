pub mod color;
pub mod harmony;
pub mod recommendation;
pub mod sampler;
pub mod scoring;
pub mod wardrobe;

#[cfg(test)]
pub(crate) mod test_support;

pub use recommendation::{generate_outfit, PoolCaps, RecommendError, Recommender};
