//! URL-safe station slugs.

use std::fmt;

/// Error returned when parsing an invalid slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop slug: {reason}")]
pub struct InvalidSlug {
    reason: &'static str,
}

/// A URL path token naming a station.
///
/// Slugs are lower-case ASCII letters, digits and `-`. A station name is
/// slugified by lower-casing it and mapping every character that is not an
/// ASCII letter or digit to `-`. The mapping is not injective, so a slug is
/// resolved back to a station by comparing against the slugs of a known
/// stop list rather than by inverting it.
///
/// # Examples
///
/// ```
/// use metrolink_server::domain::Slug;
///
/// let slug = Slug::from_station("St Peter's Square");
/// assert_eq!(slug.as_str(), "st-peter-s-square");
///
/// assert!(Slug::parse("deansgate-castlefield").is_ok());
/// assert!(Slug::parse("Deansgate").is_err());
/// assert!(Slug::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Slugify a station name.
    pub fn from_station(station: &str) -> Self {
        let slug = station
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        Slug(slug)
    }

    /// Parse a slug taken from a URL.
    pub fn parse(s: &str) -> Result<Self, InvalidSlug> {
        if s.is_empty() {
            return Err(InvalidSlug {
                reason: "must not be empty",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(InvalidSlug {
                reason: "must contain only a-z, 0-9 and '-'",
            });
        }

        Ok(Slug(s.to_string()))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `station` slugifies to this slug.
    pub fn matches_station(&self, station: &str) -> bool {
        Slug::from_station(station) == *self
    }
}

impl fmt::Debug for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slug({})", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_spaces_and_case() {
        assert_eq!(Slug::from_station("Market Street").as_str(), "market-street");
        assert_eq!(
            Slug::from_station("Deansgate-Castlefield").as_str(),
            "deansgate-castlefield"
        );
        assert_eq!(
            Slug::from_station("MediaCityUK").as_str(),
            "mediacityuk"
        );
    }

    #[test]
    fn slugify_punctuation() {
        assert_eq!(
            Slug::from_station("Victoria (Platform A)").as_str(),
            "victoria--platform-a-"
        );
        assert_eq!(Slug::from_station("Café").as_str(), "caf-");
    }

    #[test]
    fn reject_invalid() {
        assert!(Slug::parse("").is_err());
        assert!(Slug::parse("Market-Street").is_err());
        assert!(Slug::parse("market street").is_err());
        assert!(Slug::parse("market%20street").is_err());
    }

    #[test]
    fn matches_station_respects_spacing() {
        let slug = Slug::parse("market-street").unwrap();
        assert!(slug.matches_station("Market Street"));
        assert!(slug.matches_station("market street"));
        assert!(!slug.matches_station("Market  Street"));
        assert!(!slug.matches_station("Market Street "));
    }

    #[test]
    fn display_and_debug() {
        let slug = Slug::from_station("Bury");
        assert_eq!(format!("{}", slug), "bury");
        assert_eq!(format!("{:?}", slug), "Slug(bury)");
    }
}
