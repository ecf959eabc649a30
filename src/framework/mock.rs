//! # Mock Interception
//!
//! Every [`Operation`](crate::framework::Operation) asks a [`MockRegistry`] for a
//! canned outcome before running its own logic. The registry is injected at
//! construction, so a test (or a staged deployment) can redirect any operation
//! to a fixed response without touching the calling code.
//!
//! ## Outcomes
//!
//! | Registry answer                    | Operation result                        |
//! |------------------------------------|-----------------------------------------|
//! | `None`                             | default logic runs                      |
//! | `{ action: "reject", value }`      | fails; `value` is normalized            |
//! | `{ action: <anything else>, value }` | succeeds with exactly `value`         |
//! | `{ value }` (no action)            | succeeds with exactly `value`           |
//!
//! ## Implementations
//!
//! - [`NoMocks`]: never intercepts. The production default.
//! - [`MockTable`]: in-memory table keyed by `Service.operation`, filled either
//!   through the fluent [`MockTable::expect`] builder or from a JSON file.
//!
//! ```rust
//! use oss_register::framework::mock::MockTable;
//! use serde_json::json;
//!
//! let mut mocks = MockTable::new();
//! mocks
//!     .expect("RepositoriesService", "getRepositoryById")
//!     .reject(json!({ "status": 404, "message": "Repository not found" }));
//! mocks
//!     .expect("PublishersService", "listPublishers")
//!     .resolve(json!([]));
//! assert_eq!(mocks.len(), 2);
//! ```
//!
//! ## File Format
//!
//! ```json
//! {
//!   "RepositoriesService.getRepositoryById": {
//!     "action": "reject",
//!     "value": { "status": 404, "message": "Repository not found" }
//!   },
//!   "PublishersService.listPublishers": [
//!     { "action": "resolve", "value": [], "params": { "page": 2 } },
//!     { "action": "resolve", "value": [{ "uri": "https://example.org" }] }
//!   ],
//!   "PubliekeEndpointsService.createOrganisation": {
//!     "action": "reject",
//!     "value": { "status": 409, "message": "Organisation already registered" }
//!   }
//! }
//! ```
//!
//! Entries carrying `params` only match a call whose parameter object is equal
//! to it. Entries are tried in order and the first match wins.

use crate::framework::{Failure, OperationId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// What a mock entry does with its `value`.
///
/// Only `"reject"` is special; every other tag resolves successfully and is
/// kept verbatim so it round-trips through the file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MockAction {
    Reject,
    Resolve(String),
}

impl Default for MockAction {
    /// An entry without an `action` is not a rejection, so it resolves.
    fn default() -> Self {
        MockAction::Resolve("resolve".to_string())
    }
}

impl From<String> for MockAction {
    fn from(tag: String) -> Self {
        if tag == "reject" {
            MockAction::Reject
        } else {
            MockAction::Resolve(tag)
        }
    }
}

impl From<MockAction> for String {
    fn from(action: MockAction) -> Self {
        match action {
            MockAction::Reject => "reject".to_string(),
            MockAction::Resolve(tag) => tag,
        }
    }
}

impl fmt::Display for MockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockAction::Reject => f.write_str("reject"),
            MockAction::Resolve(tag) => f.write_str(tag),
        }
    }
}

/// A canned outcome for one operation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockResult {
    #[serde(default)]
    pub action: MockAction,
    #[serde(default)]
    pub value: Value,
}

impl MockResult {
    pub fn reject(value: Value) -> Self {
        Self {
            action: MockAction::Reject,
            value,
        }
    }

    pub fn resolve(value: Value) -> Self {
        Self {
            action: MockAction::default(),
            value,
        }
    }

    /// Turns the canned outcome into the operation's result.
    pub fn into_outcome(self) -> Result<Value, Failure> {
        match self.action {
            MockAction::Reject => Err(Failure::Thrown(self.value)),
            MockAction::Resolve(_) => Ok(self.value),
        }
    }
}

/// Source of canned outcomes, consulted before any default logic runs.
///
/// Implementations are shared read-only across concurrent calls.
#[async_trait]
pub trait MockRegistry: Send + Sync {
    /// Looks up a canned outcome for `operation` called with `params`.
    ///
    /// `Ok(None)` means "no interception". An `Err` is treated like any other
    /// failure of the operation and gets normalized.
    async fn lookup(&self, operation: &OperationId, params: &Value) -> Result<Option<MockResult>, Failure>;
}

/// A registry that never intercepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMocks;

#[async_trait]
impl MockRegistry for NoMocks {
    async fn lookup(&self, _operation: &OperationId, _params: &Value) -> Result<Option<MockResult>, Failure> {
        Ok(None)
    }
}

/// Errors raised while building a [`MockTable`] from JSON.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("failed to read mock table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid mock table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("mock key `{0}` is not of the form `Service.operation`")]
    InvalidKey(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct MockEntry {
    #[serde(flatten)]
    result: MockResult,
    #[serde(default)]
    params: Option<Value>,
}

impl MockEntry {
    fn matches(&self, params: &Value) -> bool {
        self.params.as_ref().map_or(true, |expected| expected == params)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(MockEntry),
    Many(Vec<MockEntry>),
}

/// In-memory [`MockRegistry`] keyed by `Service.operation`.
#[derive(Debug, Clone, Default)]
pub struct MockTable {
    entries: HashMap<String, Vec<MockEntry>>,
}

impl MockTable {
    /// Creates an empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an expectation for `service.operation`.
    pub fn expect(&mut self, service: &str, operation: &str) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            table: self,
            key: format!("{service}.{operation}"),
            params: None,
        }
    }

    /// Parses a table from its JSON file format.
    pub fn from_json_str(json: &str) -> Result<Self, MockError> {
        let raw: HashMap<String, OneOrMany> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let qualified = matches!(
                key.split_once('.'),
                Some((service, operation)) if !service.is_empty() && !operation.is_empty()
            );
            if !qualified {
                return Err(MockError::InvalidKey(key));
            }
            let list = match entry {
                OneOrMany::One(entry) => vec![entry],
                OneOrMany::Many(list) => list,
            };
            entries.insert(key, list);
        }
        Ok(Self { entries })
    }

    /// Reads and parses a table from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MockError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MockError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of configured entries across all operations.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, key: String, entry: MockEntry) {
        self.entries.entry(key).or_default().push(entry);
    }

    fn find(&self, operation: &OperationId, params: &Value) -> Option<&MockResult> {
        self.entries
            .get(&operation.to_string())?
            .iter()
            .find(|entry| entry.matches(params))
            .map(|entry| &entry.result)
    }
}

#[async_trait]
impl MockRegistry for MockTable {
    async fn lookup(&self, operation: &OperationId, params: &Value) -> Result<Option<MockResult>, Failure> {
        Ok(self.find(operation, params).cloned())
    }
}

/// Builder returned by [`MockTable::expect`].
pub struct ExpectationBuilder<'a> {
    table: &'a mut MockTable,
    key: String,
    params: Option<Value>,
}

impl ExpectationBuilder<'_> {
    /// Restricts the expectation to calls with exactly these parameters.
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Makes matching calls fail with `value`.
    pub fn reject(self, value: Value) {
        self.respond(MockResult::reject(value));
    }

    /// Makes matching calls succeed with `value`.
    pub fn resolve(self, value: Value) {
        self.respond(MockResult::resolve(value));
    }

    pub fn respond(self, result: MockResult) {
        let entry = MockEntry {
            result,
            params: self.params,
        };
        self.table.push(self.key, entry);
    }
}
