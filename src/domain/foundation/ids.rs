//! Strongly-typed identifier value objects.
//!
//! All identifiers are database-assigned `BIGSERIAL` keys, so they are only
//! constructed from existing values (parsed paths, rows, repository inserts).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier, rejecting non-positive values.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        "must be a positive integer",
                    ));
                }
                Ok(Self(value))
            }

            /// Returns the raw database key.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ValidationError::invalid_format($field, "not an integer"))?;
                Self::new(value)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a registered user account.
    UserId,
    "user_id"
);

numeric_id!(
    /// Identifier of a registered blog (publishing target).
    BlogId,
    "blog_id"
);

numeric_id!(
    /// Identifier of an article.
    ArticleId,
    "article_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_are_accepted() {
        let id = BlogId::new(42).unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(UserId::new(0).is_err());
        assert!(ArticleId::new(-3).is_err());
    }

    #[test]
    fn ids_parse_from_path_segments() {
        let id: ArticleId = "17".parse().unwrap();
        assert_eq!(id.as_i64(), 17);
        assert!("abc".parse::<ArticleId>().is_err());
        assert!("0".parse::<ArticleId>().is_err());
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&UserId::new(7).unwrap()).unwrap();
        assert_eq!(json, "7");

        let id: BlogId = serde_json::from_str("12").unwrap();
        assert_eq!(id.as_i64(), 12);
    }
}
