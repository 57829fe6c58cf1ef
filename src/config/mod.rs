mod seed;

pub use seed::{NamespaceSeed, SeedEntry, SeedError};
