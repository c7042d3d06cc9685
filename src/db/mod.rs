pub mod memory;
pub mod postgres;
mod store;

pub use memory::InMemoryItemStore;
pub use postgres::{create_pool, run_migrations, PgItemStore};
pub use store::ItemStore;

#[cfg(test)]
pub use store::MockItemStore;
