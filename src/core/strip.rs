use crate::utils::error::Result;
use crate::utils::validation::require_value;

/// The delimiter character removed from text values.
pub const DELIMITER: char = '-';

/// Returns a new string with every delimiter removed. Order of the remaining
/// characters is preserved.
pub fn strip_dashes(phrase: &str) -> String {
    phrase.chars().filter(|c| *c != DELIMITER).collect()
}

/// Strips an optional value, failing with `ScrubError::MissingValue` when the
/// value is absent rather than falling back to a default.
pub fn strip_dashes_required(field_name: &str, phrase: Option<&str>) -> Result<String> {
    let phrase = require_value(field_name, &phrase)?;
    Ok(strip_dashes(phrase))
}

/// Call-site sugar so the transform reads as a method on the value itself.
pub trait StripDashes {
    fn strip_dashes(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> StripDashes for T {
    fn strip_dashes(&self) -> String {
        strip_dashes(self.as_ref())
    }
}
