use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing an identifier from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} cannot be blank")]
pub struct ParseIdError {
    kind: &'static str,
}

// Catalog identifiers are author-chosen strings ("2.4", "REF1", "case_1.2.1"),
// so every id is a thin newtype over `String` that hashes and orders like `str`.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the id is empty or whitespace only.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:?})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Stable identifier of a navigable section (e.g. `"2.4"`, `"REF1"`).
    SectionId
);
string_id!(
    /// Identifier of a collapsible panel, unique across the whole catalog.
    PanelId
);
string_id!(
    /// Identifier of a quiz block, unique across the whole catalog.
    QuizId
);
string_id!(
    /// Identifier of a question, unique within its quiz.
    QuestionId
);
string_id!(
    /// Identifier of a self-assessment checklist block.
    ChecklistId
);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn section_id_display() {
        let id = SectionId::new("2.4");
        assert_eq!(id.to_string(), "2.4");
        assert_eq!(format!("{id:?}"), "SectionId(\"2.4\")");
    }

    #[test]
    fn section_id_from_str_trims() {
        let id: SectionId = "  REF1 ".parse().unwrap();
        assert_eq!(id, SectionId::new("REF1"));
    }

    #[test]
    fn blank_ids_fail_to_parse() {
        let err = "   ".parse::<PanelId>().unwrap_err();
        assert_eq!(err.to_string(), "PanelId cannot be blank");
        assert!(QuizId::new("").is_blank());
    }

    #[test]
    fn ids_look_up_by_str() {
        let mut map = HashMap::new();
        map.insert(SectionId::new("1.1"), 7);
        assert_eq!(map.get("1.1"), Some(&7));
        assert_eq!(map.get("9.9"), None);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&QuestionId::new("q1")).unwrap();
        assert_eq!(json, "\"q1\"");
        let back: QuestionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "q1");
    }
}
