/// Item contract for list elements
use crate::error::{Result, SetlistError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A value that can live in an editable list
///
/// Items are treated as immutable values and compared only by position.
/// The history manager calls [`Item::normalize`] and then [`Item::validate`]
/// on every payload before it reaches the reducer, and runs `validate` on
/// every element of a hydrated history.
pub trait Item:
    Clone + PartialEq + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Canonical form of the item, applied before validation
    fn normalize(self) -> Self {
        self
    }

    /// Reject invalid content
    ///
    /// # Errors
    /// Returns `SetlistError::InvalidArgument` if the item must not be stored
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Song names: surrounding whitespace is trimmed, blank names are rejected
impl Item for String {
    fn normalize(self) -> Self {
        let trimmed = self.trim();
        if trimmed.len() == self.len() {
            self
        } else {
            trimmed.to_string()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.trim().is_empty() {
            return Err(SetlistError::invalid_argument("item text must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_normalize_trims() {
        assert_eq!("  Song 2 \n".to_string().normalize(), "Song 2");
        assert_eq!("Clean".to_string().normalize(), "Clean");
    }

    #[test]
    fn string_validate_rejects_blank() {
        assert!(matches!(
            String::new().validate(),
            Err(SetlistError::InvalidArgument(_))
        ));
        assert!(matches!(
            "   \t".to_string().validate(),
            Err(SetlistError::InvalidArgument(_))
        ));
        assert!("Wonderwall".to_string().validate().is_ok());
    }
}
