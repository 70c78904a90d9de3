//! Identifiers for stored records.
//!
//! Ids are plain strings on the wire. Records written by older builds carry
//! tokens such as `day-1757634610452`, so any string is accepted when
//! reading; freshly generated ids use a kind prefix and a ULID.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new unique id.
            pub fn new() -> Self {
                Self(format!("{}-{}", $prefix, Ulid::new()))
            }

            /// Borrow the raw token.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

string_id!(
    /// Unique identifier for a workout day
    DayId,
    "day"
);

string_id!(
    /// Unique identifier for a workout plan
    WorkoutId,
    "workout"
);

string_id!(
    /// Unique identifier for a logged session
    SessionId,
    "session"
);

string_id!(
    /// Unique identifier for a progression plan
    ProgressionPlanId,
    "progression"
);
