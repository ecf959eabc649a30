use crate::framework::mock::{MockRegistry, NoMocks};
use crate::services::{GitOrganisationsService, OrganisationsService, PublishersService, RepositoriesService};
use std::sync::Arc;
use tracing::info;

/// All register services, built against one shared mock registry.
///
/// `Register` is responsible for:
/// - **Dependency Wiring**: Handing the same [`MockRegistry`] to every service
/// - **Single Entry Point**: The adapter only needs this one value
///
/// # Example
///
/// ```rust
/// use oss_register::lifecycle::Register;
/// use oss_register::model::ListRepositoriesParams;
///
/// #[tokio::main]
/// async fn main() {
///     let register = Register::without_mocks();
///     let envelope = register
///         .repositories
///         .list_repositories(ListRepositoriesParams::default())
///         .await
///         .unwrap();
///     assert_eq!(envelope, serde_json::json!({}));
/// }
/// ```
#[derive(Debug)]
pub struct Register {
    pub organisations: OrganisationsService,
    pub publishers: PublishersService,
    pub repositories: RepositoriesService,
    pub git_organisations: GitOrganisationsService,
}

impl Register {
    /// Builds every service against `mocks`.
    pub fn new(mocks: Arc<dyn MockRegistry>) -> Self {
        info!("Building register services");
        Self {
            organisations: OrganisationsService::new(Arc::clone(&mocks)),
            publishers: PublishersService::new(Arc::clone(&mocks)),
            repositories: RepositoriesService::new(Arc::clone(&mocks)),
            git_organisations: GitOrganisationsService::new(mocks),
        }
    }

    /// Builds every service with interception disabled.
    pub fn without_mocks() -> Self {
        Self::new(Arc::new(NoMocks))
    }
}
