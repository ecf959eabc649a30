use crate::framework::mock::MockRegistry;
use crate::framework::{Operation, OperationId, Rejection};
use crate::model::{CreateRepositoryParams, GetRepositoryParams, ListRepositoriesParams};
use serde_json::Value;
use std::sync::Arc;

pub const SERVICE: &str = "RepositoriesService";

pub const CREATE_REPOSITORY: OperationId = OperationId::new(SERVICE, "createRepository");
pub const GET_REPOSITORY_BY_ID: OperationId = OperationId::new(SERVICE, "getRepositoryById");
pub const LIST_REPOSITORIES: OperationId = OperationId::new(SERVICE, "listRepositories");

/// Registering, fetching and listing open-source repositories.
#[derive(Debug)]
pub struct RepositoriesService {
    create: Operation<CreateRepositoryParams>,
    get_by_id: Operation<GetRepositoryParams>,
    list: Operation<ListRepositoriesParams>,
}

impl RepositoriesService {
    pub fn new(mocks: Arc<dyn MockRegistry>) -> Self {
        Self {
            create: Operation::new(CREATE_REPOSITORY, Arc::clone(&mocks)),
            get_by_id: Operation::new(GET_REPOSITORY_BY_ID, Arc::clone(&mocks)),
            list: Operation::new(LIST_REPOSITORIES, mocks),
        }
    }

    /// Registers a new repository.
    pub async fn create_repository(&self, params: CreateRepositoryParams) -> Result<Value, Rejection> {
        self.create.handle(params).await
    }

    /// Fetches one repository by id.
    pub async fn get_repository_by_id(&self, params: GetRepositoryParams) -> Result<Value, Rejection> {
        self.get_by_id.handle(params).await
    }

    /// Lists repositories, optionally filtered by status, organisation or ids.
    pub async fn list_repositories(&self, params: ListRepositoriesParams) -> Result<Value, Rejection> {
        self.list.handle(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockTable, NoMocks};
    use crate::model::PublicCodeStatus;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_echoes_filters() {
        let service = RepositoriesService::new(Arc::new(NoMocks));
        let params = ListRepositoriesParams {
            status: Some(PublicCodeStatus::WithPublicCode),
            page: Some(1),
            per_page: Some(20),
            ..Default::default()
        };

        let result = service.list_repositories(params).await.unwrap();
        assert_eq!(result, json!({ "status": "withPublicCode", "page": 1, "perPage": 20 }));
    }

    #[tokio::test]
    async fn test_get_by_id_rejected_by_mock() {
        let mut mocks = MockTable::new();
        mocks
            .expect(SERVICE, "getRepositoryById")
            .reject(json!({ "status": 404, "message": "Repository not found" }));
        let service = RepositoriesService::new(Arc::new(mocks));

        let err = service
            .get_repository_by_id(GetRepositoryParams::new("0b6a2f7e-6a43-4c4e-9d71-0a5f1b0c9e11"))
            .await
            .unwrap_err();
        assert_eq!(err.status, 404);
        assert_eq!(err.detail, "Repository not found");

        // Sibling operations are unaffected.
        let listed = service.list_repositories(ListRepositoriesParams::default()).await.unwrap();
        assert_eq!(listed, json!({}));
    }
}
