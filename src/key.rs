//! Parsed placekey strings: `[what]@where`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlaceKeyError, Result};
use crate::tuple::PART_SEPARATOR;
use crate::validate::{what_shape_is_valid, where_shape_is_valid};

/// Split a placekey into its what- and where-parts.
///
/// A string without `@` is a bare where-part. An empty what-part (`@xxx-...`)
/// is reported as `None`. Neither part is validated here.
pub fn split_parts(key: &str) -> Result<(Option<&str>, &str)> {
    let mut parts = key.split(PART_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(where_part), None, _) => Ok((None, where_part)),
        (Some(what), Some(where_part), None) => {
            Ok(((!what.is_empty()).then_some(what), where_part))
        }
        _ => Err(PlaceKeyError::InvalidParts(key.to_string())),
    }
}

/// A shape-checked placekey.
///
/// Serializes as its canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceKey {
    what: Option<String>,
    /// Stored without the leading `@`.
    where_part: String,
}

impl PlaceKey {
    /// Parse and shape-check a placekey string.
    pub fn parse(key: &str) -> Result<Self> {
        let (what, where_part) = split_parts(key)?;
        if !where_shape_is_valid(where_part) {
            return Err(PlaceKeyError::InvalidFormat(format!(
                "where-part '{}' is malformed",
                where_part
            )));
        }
        if let Some(what) = what
            && !what_shape_is_valid(what)
        {
            return Err(PlaceKeyError::InvalidFormat(format!(
                "what-part '{}' is malformed",
                what
            )));
        }
        Ok(Self {
            what: what.map(str::to_string),
            where_part: where_part.to_string(),
        })
    }

    /// The what-part, if any.
    #[inline]
    pub fn what(&self) -> Option<&str> {
        self.what.as_deref()
    }

    /// The where-part without its leading `@`.
    #[inline]
    pub fn where_part(&self) -> &str {
        &self.where_part
    }

    /// This key with the what-part dropped.
    pub fn to_where_only(&self) -> Self {
        Self {
            what: None,
            where_part: self.where_part.clone(),
        }
    }
}

impl fmt::Display for PlaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(what) = &self.what {
            f.write_str(what)?;
        }
        write!(f, "{}{}", PART_SEPARATOR, self.where_part)
    }
}

impl FromStr for PlaceKey {
    type Err = PlaceKeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PlaceKey {
    type Error = PlaceKeyError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<PlaceKey> for String {
    fn from(key: PlaceKey) -> Self {
        key.to_string()
    }
}
