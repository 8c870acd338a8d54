pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::filter::{filter_people, FilterPeople};
pub use crate::core::sequence::{strip_all_dashes, StripAll, StripAllDashes};
pub use crate::core::strip::{strip_dashes, strip_dashes_required, StripDashes, DELIMITER};
pub use crate::domain::model::{first_name_or, Person};
pub use crate::utils::error::{Result, ScrubError};
