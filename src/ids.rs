//! Typed identifiers.
//!
//! Users and adverts are both keyed by UUIDs in storage. Wrapping them in
//! distinct types means an ownership check can only ever compare a `UserId`
//! with another `UserId`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_id!(
    /// Identity of a user, as carried in the `sub` claim of an identity token.
    UserId
);

uuid_id!(
    /// Identity of a single job advert.
    AdvertId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_through_display() {
        let id = AdvertId::generate();
        let parsed: AdvertId = id.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-an-id".parse::<AdvertId>().is_err());
        assert!("5f1d7a".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_ids_compare_by_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(UserId::from(uuid), UserId::from(uuid));
        assert_ne!(UserId::from(uuid), UserId::generate());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_value(UserId::from(uuid)).expect("serializable");
        assert_eq!(json, serde_json::Value::String(uuid.to_string()));
    }
}
