use crate::error::ParseError;
use crate::parser::syntax::Prefix;
use std::fmt;

/// Tokenized arguments: the unprefixed preamble plus every prefixed value,
/// kept in the order it appeared in the input.
///
/// Repeated prefixes are kept as-is. Whether repetition is allowed is up to
/// the command, via [`ArgumentMap::reject_duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    pub(crate) fn new(preamble: String) -> Self {
        Self {
            preamble,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, prefix: Prefix, value: String) {
        self.values.push((prefix, value));
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// The last value supplied for `prefix`, if any.
    pub fn last_value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Fails if any of `prefixes` was given more than once. The error lists
    /// every offending prefix, in the order they were asked about.
    pub fn reject_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let mut duplicated: Vec<Prefix> = Vec::new();
        for prefix in prefixes {
            let count = self.values.iter().filter(|(p, _)| p == prefix).count();
            if count > 1 && !duplicated.contains(prefix) {
                duplicated.push(*prefix);
            }
        }

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix {
                prefixes: duplicated,
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> impl Iterator<Item = (Prefix, &str)> + '_ {
        self.values.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

/// Renders the map back into argument text: the preamble, then each
/// prefix immediately followed by its value, space separated.
impl fmt::Display for ArgumentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.values.len() + 1);
        if !self.preamble.is_empty() {
            parts.push(self.preamble.clone());
        }
        for (prefix, value) in &self.values {
            parts.push(format!("{}{}", prefix, value));
        }
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE};

    fn sample() -> ArgumentMap {
        let mut map = ArgumentMap::new("1".into());
        map.push(PREFIX_PHONE, "111".into());
        map.push(PREFIX_EMAIL, "a@b.co".into());
        map.push(PREFIX_PHONE, "222".into());
        map
    }

    #[test]
    fn test_accessors() {
        let map = sample();
        assert_eq!(map.preamble(), "1");
        assert!(map.is_present(PREFIX_PHONE));
        assert!(!map.is_present(PREFIX_NAME));
        assert_eq!(map.last_value(PREFIX_PHONE), Some("222"));
        assert_eq!(map.last_value(PREFIX_NAME), None);
        assert_eq!(map.all_values(PREFIX_PHONE), vec!["111", "222"]);
        assert!(map.all_values(PREFIX_NAME).is_empty());
    }

    #[test]
    fn test_reject_duplicates() {
        let map = sample();
        assert!(map.reject_duplicates(&[PREFIX_EMAIL, PREFIX_NAME]).is_ok());
        assert_eq!(
            map.reject_duplicates(&[PREFIX_EMAIL, PREFIX_PHONE]),
            Err(ParseError::DuplicatePrefix {
                prefixes: vec![PREFIX_PHONE]
            })
        );
    }

    #[test]
    fn test_display_reconstructs_arguments() {
        assert_eq!(sample().to_string(), "1 p/111 e/a@b.co p/222");
        assert_eq!(ArgumentMap::default().to_string(), "");
    }
}
