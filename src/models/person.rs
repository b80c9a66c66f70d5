//! Validated person fields.
//!
//! Each field wraps an already-trimmed string that satisfies the field's
//! pattern. Construction goes through `new`, which refuses anything
//! `is_valid` rejects, so a value of these types is always well formed.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

macro_rules! person_field {
    (
        $(#[$meta:meta])*
        $name:ident,
        label: $label:literal,
        pattern: $pattern:literal,
        max_len: $max_len:expr,
        constraints: $constraints:literal $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const LABEL: &'static str = $label;
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            fn regex() -> &'static Regex {
                static RE: OnceLock<Regex> = OnceLock::new();
                RE.get_or_init(|| Regex::new($pattern).unwrap())
            }

            pub fn is_valid(value: &str) -> bool {
                let max_len: Option<usize> = $max_len;
                max_len.map_or(true, |max| value.chars().count() <= max)
                    && Self::regex().is_match(value)
            }

            pub fn new(value: &str) -> Option<Self> {
                if Self::is_valid(value) {
                    Some(Self(value.to_string()))
                } else {
                    None
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

person_field! {
    /// A person's display name.
    Name,
    label: "name",
    pattern: r"^[\p{Alphabetic}\p{Nd}][\p{Alphabetic}\p{Nd} ]*$",
    max_len: None,
    constraints: "Names should only contain alphanumeric characters and spaces, and it should not be blank",
}

person_field! {
    Phone,
    label: "phone",
    pattern: r"^[0-9]{3,}$",
    max_len: None,
    constraints: "Phone numbers should only contain numbers, and it should be at least 3 digits long",
}

person_field! {
    /// `local@domain`; the domain needs at least one dot and a final label of
    /// two or more characters.
    Email,
    label: "email",
    pattern: r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])$",
    max_len: None,
    constraints: "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and the special characters +_.-, \
        and may not start or end with a special character.\n\
        2. The domain name is made up of domain labels separated by periods, with at least one period.\n\
        The domain name must end with a domain label at least 2 characters long, and each label must \
        start and end with an alphanumeric character, with only hyphens in between.",
}

person_field! {
    /// Tutorial or lab group, e.g. `F11-2`.
    ClassGroup,
    label: "class group",
    pattern: r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$",
    max_len: None,
    constraints: "Class groups should only contain alphanumeric characters separated by single hyphens, e.g. F11-2",
}

person_field! {
    Telegram,
    label: "telegram",
    pattern: r"^@?[A-Za-z][A-Za-z0-9_]{4,31}$",
    max_len: None,
    constraints: "Telegram handles should start with a letter and be 5 to 32 characters of letters, digits or underscores, optionally prefixed by @",
}

person_field! {
    Github,
    label: "github",
    pattern: r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$",
    max_len: Some(39),
    constraints: "GitHub usernames should be at most 39 alphanumeric characters, with single hyphens only between them",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert!(Name::is_valid("Rachel Walker"));
        assert!(Name::is_valid("Charles 2nd"));
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" Rachel"));
        assert!(!Name::is_valid("R@chel"));
    }

    #[test]
    fn test_phone() {
        assert!(Phone::is_valid("123"));
        assert!(Phone::is_valid("91234567"));
        assert!(!Phone::is_valid("12"));
        assert!(!Phone::is_valid("+651234"));
        assert!(!Phone::is_valid("9123 4567"));
    }

    #[test]
    fn test_email() {
        assert!(Email::is_valid("rachel@example.com"));
        assert!(Email::is_valid("a.b-c+d@mail.example-host.org"));
        assert!(!Email::is_valid("example.com"));
        assert!(!Email::is_valid("rachel@example"));
        assert!(!Email::is_valid("rachel@example.c"));
        assert!(!Email::is_valid(".rachel@example.com"));
        assert!(!Email::is_valid("rachel@-example.com"));
    }

    #[test]
    fn test_class_group_telegram_github() {
        assert!(ClassGroup::is_valid("F11-2"));
        assert!(!ClassGroup::is_valid("F11--2"));

        assert!(Telegram::is_valid("@rachel_w"));
        assert!(Telegram::is_valid("rachelw"));
        assert!(!Telegram::is_valid("@abc"));
        assert!(!Telegram::is_valid("_rachel"));

        assert!(Github::is_valid("rachel-walker"));
        assert!(!Github::is_valid("-rachel"));
        assert!(!Github::is_valid(&"a".repeat(40)));
    }

    #[test]
    fn test_new_keeps_value() {
        let name = Name::new("Rachel Walker").unwrap();
        assert_eq!(name.as_str(), "Rachel Walker");
        assert_eq!(name.to_string(), "Rachel Walker");
        assert!(Phone::new("12").is_none());
    }
}
