use crate::framework::mock::MockRegistry;
use crate::framework::{Operation, OperationId, Rejection};
use crate::model::{CreateGitOrganisationParams, ListGitOrganisationsParams};
use serde_json::Value;
use std::sync::Arc;

pub const SERVICE: &str = "GitOrganisationsService";

pub const CREATE_GIT_ORGANISATION: OperationId = OperationId::new(SERVICE, "createGitOrganisation");
pub const LIST_GIT_ORGANISATIONS: OperationId = OperationId::new(SERVICE, "listGitOrganisations");

/// Git organisations whose repositories are harvested into the register.
#[derive(Debug)]
pub struct GitOrganisationsService {
    create: Operation<CreateGitOrganisationParams>,
    list: Operation<ListGitOrganisationsParams>,
}

impl GitOrganisationsService {
    pub fn new(mocks: Arc<dyn MockRegistry>) -> Self {
        Self {
            create: Operation::new(CREATE_GIT_ORGANISATION, Arc::clone(&mocks)),
            list: Operation::new(LIST_GIT_ORGANISATIONS, mocks),
        }
    }

    /// Registers a git organisation under a publishing organisation.
    pub async fn create_git_organisation(&self, params: CreateGitOrganisationParams) -> Result<Value, Rejection> {
        self.create.handle(params).await
    }

    /// Lists git organisations, optionally filtered by organisation.
    pub async fn list_git_organisations(&self, params: ListGitOrganisationsParams) -> Result<Value, Rejection> {
        self.list.handle(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockTable, NoMocks};
    use crate::model::GitOrganisationInput;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_echoes_body() {
        let service = GitOrganisationsService::new(Arc::new(NoMocks));
        let params = CreateGitOrganisationParams {
            git_organisation_input: GitOrganisationInput::new("https://github.com/acme", "https://org.example"),
        };

        let result = service.create_git_organisation(params).await.unwrap();
        assert_eq!(
            result,
            json!({ "gitOrganisationInput": { "url": "https://github.com/acme", "organisationUri": "https://org.example" } })
        );
    }

    #[tokio::test]
    async fn test_list_resolved_by_mock() {
        let listed = json!([{ "id": "1", "url": "https://github.com/acme" }]);
        let mut mocks = MockTable::new();
        mocks.expect(SERVICE, "listGitOrganisations").resolve(listed.clone());
        let service = GitOrganisationsService::new(Arc::new(mocks));

        let result = service.list_git_organisations(ListGitOrganisationsParams::default()).await.unwrap();
        assert_eq!(result, listed);
    }
}
