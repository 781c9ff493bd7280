//! In-memory data access (read and write) abstractions for the Marquee
//! backend.

pub mod models;
mod seed;
mod store;

pub use seed::{SeedData, SeedError};
pub use store::{Store, StoreError};
