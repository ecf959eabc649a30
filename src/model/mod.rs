//! Parameter objects for every register operation.
//!
//! Each struct serializes (camelCase, absent optionals omitted) to exactly the
//! parameter object a caller supplied, which is what the default echo returns.
//!
//! Request bodies are kept as the caller's JSON object. Their well-known fields
//! are read through accessors, and anything else the caller sent survives the
//! echo untouched.

/// Declares a request body backed by the caller's JSON object.
macro_rules! request_body {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(serde_json::Map<String, serde_json::Value>);

        impl $name {
            /// Sets `key`, replacing any previous value.
            pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
                self.0.insert(key.into(), value.into());
                self
            }

            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }

            pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
                &self.0
            }

            fn get_str(&self, key: &str) -> Option<&str> {
                self.0.get(key).and_then(serde_json::Value::as_str)
            }
        }

        impl From<serde_json::Map<String, serde_json::Value>> for $name {
            fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
                Self(fields)
            }
        }
    };
}

pub(crate) use request_body;

pub mod git_organisation;
pub mod organisation;
pub mod publisher;
pub mod repository;

pub use git_organisation::*;
pub use organisation::*;
pub use publisher::*;
pub use repository::*;
