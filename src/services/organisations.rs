use crate::framework::mock::MockRegistry;
use crate::framework::{Operation, OperationId, Rejection};
use crate::model::{CreateOrganisationParams, ListOrganisationsParams};
use serde_json::Value;
use std::sync::Arc;

/// Mock-table service name. Organisation endpoints are grouped under the
/// public endpoints service.
pub const SERVICE: &str = "PubliekeEndpointsService";

pub const CREATE_ORGANISATION: OperationId = OperationId::new(SERVICE, "createOrganisation");
pub const LIST_ORGANISATIONS: OperationId = OperationId::new(SERVICE, "listOrganisations");

/// Registering and listing publishing organisations.
#[derive(Debug)]
pub struct OrganisationsService {
    create: Operation<CreateOrganisationParams>,
    list: Operation<ListOrganisationsParams>,
}

impl OrganisationsService {
    pub fn new(mocks: Arc<dyn MockRegistry>) -> Self {
        Self {
            create: Operation::new(CREATE_ORGANISATION, Arc::clone(&mocks)),
            list: Operation::new(LIST_ORGANISATIONS, mocks),
        }
    }

    /// Registers a new organisation.
    pub async fn create_organisation(&self, params: CreateOrganisationParams) -> Result<Value, Rejection> {
        self.create.handle(params).await
    }

    /// Lists all registered organisations.
    pub async fn list_organisations(&self, params: ListOrganisationsParams) -> Result<Value, Rejection> {
        self.list.handle(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockTable, NoMocks};
    use crate::model::OrganisationSummary;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_echoes_body() {
        let service = OrganisationsService::new(Arc::new(NoMocks));
        let params = CreateOrganisationParams {
            organisation_summary: OrganisationSummary::new("https://example.org/org/1", "Gemeente Voorbeeld"),
        };

        let result = service.create_organisation(params).await.unwrap();
        assert_eq!(
            result,
            json!({ "organisationSummary": { "uri": "https://example.org/org/1", "label": "Gemeente Voorbeeld" } })
        );
    }

    #[tokio::test]
    async fn test_list_echoes_empty_params() {
        let service = OrganisationsService::new(Arc::new(NoMocks));
        let result = service.list_organisations(ListOrganisationsParams::default()).await.unwrap();
        assert_eq!(result, json!({}));
    }

    #[tokio::test]
    async fn test_mocks_keyed_on_public_endpoints_service() {
        let mut mocks = MockTable::new();
        mocks
            .expect("PubliekeEndpointsService", "createOrganisation")
            .reject(json!({ "status": 409, "message": "Organisation already registered" }));
        let service = OrganisationsService::new(Arc::new(mocks));

        let params = CreateOrganisationParams {
            organisation_summary: OrganisationSummary::new("https://example.org/org/1", "Gemeente Voorbeeld"),
        };
        let err = service.create_organisation(params).await.unwrap_err();
        assert_eq!(err.status, 409);
        assert_eq!(err.message, "Organisation already registered");
    }
}
