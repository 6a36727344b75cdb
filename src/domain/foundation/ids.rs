//! Strongly-typed identifier value objects.
//!
//! The evaluation backend hands out integer primary keys, so every identifier
//! wraps an `i64` and serializes transparently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates the identifier from a raw backend key.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw backend key.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of an evaluation question.
    QuestionId
);

integer_id!(
    /// Identifier of a professor (the professor's user id on the backend).
    ProfessorId
);

integer_id!(
    /// Identifier of a subject taught by a professor.
    SubjectId
);

integer_id!(
    /// Identifier of a server-side survey record (one student, one professor).
    SurveyId
);

integer_id!(
    /// Identifier of an authenticated user.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn id_displays_raw_value() {
        assert_eq!(ProfessorId::new(42).to_string(), "42");
    }

    #[test]
    fn id_parses_from_string() {
        let id: QuestionId = " 7 ".parse().unwrap();
        assert_eq!(id, QuestionId::new(7));
        assert!("seven".parse::<QuestionId>().is_err());
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&SurveyId::new(15)).unwrap();
        assert_eq!(json, "15");

        let id: SurveyId = serde_json::from_str("15").unwrap();
        assert_eq!(id.value(), 15);
    }

    #[test]
    fn id_serializes_as_map_key() {
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId::new(1), 5u8);
        answers.insert(QuestionId::new(2), 3u8);

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":5,"2":3}"#);
    }
}
