pub mod api;
pub mod tier;

pub use tier::Tier;
