//! # Core Operation Framework
//!
//! This module defines the generic building blocks every register operation is
//! made of.
//!
//! ## Key Types
//!
//! - [`OperationId`]: The fully-qualified name of an operation (service + operation).
//! - [`OperationLogic`]: The trait for the per-operation default behavior.
//! - [`Echo`]: The default logic, returning the parameters unchanged.
//! - [`Operation`]: The generic handler owning interception and normalization.

use crate::framework::mock::MockRegistry;
use crate::framework::{normalize, Failure, Rejection};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE IDENTITY
// =============================================================================

/// The fully-qualified name of an operation, e.g. `RepositoriesService.listRepositories`.
///
/// This is the key mock registries are consulted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId {
    pub service: &'static str,
    pub operation: &'static str,
}

impl OperationId {
    pub const fn new(service: &'static str, operation: &'static str) -> Self {
        Self { service, operation }
    }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.operation)
    }
}

// =============================================================================
// 2. THE ABSTRACTION (Default Logic)
// =============================================================================

/// The part of an operation that runs when no mock intercepts the call.
///
/// # Architecture Note
/// Interception and error normalization are identical for every operation, so
/// they live in [`Operation`] and are written *once*. The only thing that
/// differs per operation is its parameter type `P` and this trait.
///
/// Real business logic (e.g. persisting an organisation) plugs in here via
/// [`Operation::with_logic`]; until then every operation uses [`Echo`].
#[async_trait]
pub trait OperationLogic<P>: Send + Sync {
    /// Produces the success envelope for `params`.
    ///
    /// Any error returned here is normalized by the calling [`Operation`].
    async fn run(&self, params: P) -> Result<Value, Failure>;
}

/// Default logic: the success envelope is the parameter object itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Echo;

#[async_trait]
impl<P> OperationLogic<P> for Echo
where
    P: Serialize + Send + 'static,
{
    async fn run(&self, params: P) -> Result<Value, Failure> {
        Ok(serde_json::to_value(params)?)
    }
}

// =============================================================================
// 3. THE GENERIC HANDLER
// =============================================================================

/// A single register operation.
///
/// # Pipeline
/// 1. Ask the injected [`MockRegistry`] for a canned outcome.
/// 2. If there is one, return its value or fail with it.
/// 3. Otherwise run the [`OperationLogic`].
/// 4. Whatever failed along the way is normalized into a [`Rejection`].
///
/// No raw [`Failure`] ever leaves [`Operation::handle`].
pub struct Operation<P> {
    id: OperationId,
    mocks: Arc<dyn MockRegistry>,
    logic: Box<dyn OperationLogic<P>>,
}

impl<P> Operation<P>
where
    P: Serialize + Debug + Send + Sync + 'static,
{
    /// Creates an operation with the default [`Echo`] logic.
    pub fn new(id: OperationId, mocks: Arc<dyn MockRegistry>) -> Self {
        Self::with_logic(id, mocks, Echo)
    }

    /// Creates an operation with custom default logic.
    pub fn with_logic(
        id: OperationId,
        mocks: Arc<dyn MockRegistry>,
        logic: impl OperationLogic<P> + 'static,
    ) -> Self {
        Self {
            id,
            mocks,
            logic: Box::new(logic),
        }
    }

    pub fn id(&self) -> OperationId {
        self.id
    }

    /// Runs the operation for one call.
    #[instrument(skip_all, fields(service = self.id.service, operation = self.id.operation))]
    pub async fn handle(&self, params: P) -> Result<Value, Rejection> {
        debug!(?params, "handle called");

        self.intercept_or_run(params).await.map_err(|failure| {
            let rejection = normalize(&failure);
            warn!(status = rejection.status, message = %rejection.message, error = %failure, "Rejected");
            rejection
        })
    }

    async fn intercept_or_run(&self, params: P) -> Result<Value, Failure> {
        let snapshot = serde_json::to_value(&params)?;
        if let Some(mock) = self.mocks.lookup(&self.id, &snapshot).await? {
            info!(action = %mock.action, "Mock intercepted");
            return mock.into_outcome();
        }
        self.logic.run(params).await
    }
}

impl<P> Debug for Operation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation").field("id", &self.id).finish_non_exhaustive()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockResult, MockTable, NoMocks};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // --- Domain Definition ---

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SimpleParams {
        page: u32,
        per_page: u32,
    }

    const SIMPLE: OperationId = OperationId::new("SimpleService", "listThings");

    fn params() -> SimpleParams {
        SimpleParams { page: 1, per_page: 20 }
    }

    /// Logic that always fails with a status-less error.
    struct Failing;

    #[async_trait]
    impl OperationLogic<SimpleParams> for Failing {
        async fn run(&self, _params: SimpleParams) -> Result<Value, Failure> {
            Err(Failure::Thrown(json!({ "message": "storage unavailable" })))
        }
    }

    /// Logic that counts how often it ran.
    #[derive(Default)]
    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl OperationLogic<SimpleParams> for Counting {
        async fn run(&self, _params: SimpleParams) -> Result<Value, Failure> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(json!("ran"))
        }
    }

    /// A registry whose backend is down.
    struct BrokenRegistry;

    #[async_trait]
    impl MockRegistry for BrokenRegistry {
        async fn lookup(&self, _: &OperationId, _: &Value) -> Result<Option<MockResult>, Failure> {
            Err(Failure::Registry("connection refused".into()))
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_echoes_params_without_mock() {
        let op = Operation::new(SIMPLE, Arc::new(NoMocks));
        let result = op.handle(params()).await.unwrap();
        assert_eq!(result, json!({ "page": 1, "perPage": 20 }));
    }

    #[tokio::test]
    async fn test_mock_resolve_bypasses_logic() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut mocks = MockTable::new();
        mocks.expect("SimpleService", "listThings").resolve(json!({ "items": [] }));

        let op = Operation::with_logic(SIMPLE, Arc::new(mocks), Counting(runs.clone()));
        let result = op.handle(params()).await.unwrap();

        assert_eq!(result, json!({ "items": [] }));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mock_reject_is_normalized() {
        let mut mocks = MockTable::new();
        mocks
            .expect("SimpleService", "listThings")
            .reject(json!({ "status": 404, "message": "Not found" }));

        let op = Operation::new(SIMPLE, Arc::new(mocks));
        let err = op.handle(params()).await.unwrap_err();

        assert_eq!(err, Rejection::new(404, "Not found"));
    }

    #[tokio::test]
    async fn test_mock_keyed_on_params() {
        let mut mocks = MockTable::new();
        mocks
            .expect("SimpleService", "listThings")
            .with_params(json!({ "page": 2, "perPage": 20 }))
            .reject(json!("second page is gone"));

        let op = Operation::new(SIMPLE, Arc::new(mocks));
        assert!(op.handle(params()).await.is_ok());

        let err = op.handle(SimpleParams { page: 2, per_page: 20 }).await.unwrap_err();
        assert_eq!(err, Rejection::new(400, "An error occurred."));
    }

    #[tokio::test]
    async fn test_logic_failure_is_normalized() {
        let op = Operation::with_logic(SIMPLE, Arc::new(NoMocks), Failing);
        let err = op.handle(params()).await.unwrap_err();

        assert_eq!(err.status, 400);
        assert_eq!(err.message, "storage unavailable");
        assert_eq!(err.detail, "storage unavailable");
    }

    #[tokio::test]
    async fn test_registry_failure_is_normalized() {
        let runs = Arc::new(AtomicUsize::new(0));
        let op = Operation::with_logic(SIMPLE, Arc::new(BrokenRegistry), Counting(runs.clone()));
        let err = op.handle(params()).await.unwrap_err();

        assert_eq!(err.status, 400);
        assert!(err.message.contains("connection refused"));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_operation_id_display() {
        assert_eq!(SIMPLE.to_string(), "SimpleService.listThings");
    }
}
