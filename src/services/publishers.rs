use crate::framework::mock::MockRegistry;
use crate::framework::{Operation, OperationId, Rejection};
use crate::model::ListPublishersParams;
use serde_json::Value;
use std::sync::Arc;

pub const SERVICE: &str = "PublishersService";

pub const LIST_PUBLISHERS: OperationId = OperationId::new(SERVICE, "listPublishers");

/// Organisations that register open-source software.
#[derive(Debug)]
pub struct PublishersService {
    list: Operation<ListPublishersParams>,
}

impl PublishersService {
    pub fn new(mocks: Arc<dyn MockRegistry>) -> Self {
        Self {
            list: Operation::new(LIST_PUBLISHERS, mocks),
        }
    }

    pub async fn list_publishers(&self, params: ListPublishersParams) -> Result<Value, Rejection> {
        self.list.handle(params).await
    }
}
