//! Data models
//!
//! Mirrored 1:1 from the booking API (camelCase on the wire).
//! IDs are strings; the client never derives or validates them.

/// String-backed status enum that keeps unrecognized values instead of
/// failing the whole response.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Value not known to this client version
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.trim().to_ascii_uppercase().as_str() {
                    $($wire => $name::$variant,)+
                    _ => $name::Unknown(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Entities keyed by `_id`, `id`, or both. Mongo-style payloads often
/// carry both, which a plain serde alias rejects as a duplicate field, so
/// only the first non-null key in the list is kept before decoding. The
/// entity derives with `#[serde(remote = "Self")]` and this supplies the
/// trait impls.
macro_rules! id_keys {
    ($name:ident, [$($key:literal),+ $(,)?]) => {
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $name::deserialize(crate::models::keep_first_key(value, &[$($key),+]))
                    .map_err(serde::de::Error::custom)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                $name::serialize(self, serializer)
            }
        }
    };
}

/// Drop every key in `keys` except the first one holding a non-null value
pub(crate) fn keep_first_key(mut value: serde_json::Value, keys: &[&str]) -> serde_json::Value {
    if let serde_json::Value::Object(map) = &mut value
        && let Some(keep) = keys
            .iter()
            .find(|key| map.get(**key).is_some_and(|v| !v.is_null()))
    {
        for key in keys.iter().filter(|key| *key != keep) {
            map.remove(*key);
        }
    }
    value
}

pub mod availability;
pub mod booking;
pub mod building;
pub mod building_manager;
pub mod facility;
pub mod notification;
pub mod transaction;

// Re-exports
pub use availability::*;
pub use booking::*;
pub use building::*;
pub use building_manager::*;
pub use facility::*;
pub use notification::*;
pub use transaction::*;
