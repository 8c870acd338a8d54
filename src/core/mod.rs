pub mod filter;
pub mod sequence;
pub mod strip;

pub use crate::domain::model::Person;
pub use crate::utils::error::Result;
