use super::request_body;
use serde::{Deserialize, Serialize};

/// Filter on whether a repository ships a `publiccode.yml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicCodeStatus {
    /// Every repository.
    All,
    /// Only repositories with a `publiccode.yml`.
    WithPublicCode,
    /// Only repositories without a `publiccode.yml`.
    WithoutPublicCode,
}

request_body! {
    /// Request body for registering a repository, as the caller sent it.
    ///
    /// Usually `{ gitOrganisationUrl, organisationUrl }`. Nothing is required
    /// here; shape validation belongs to whatever logic handles the call.
    PostRepository
}

impl PostRepository {
    /// Git organisation (e.g. a GitHub org) whose repositories are registered.
    pub fn git_organisation_url(&self) -> Option<&str> {
        self.get_str("gitOrganisationUrl")
    }

    /// Organisation the repositories are registered under.
    pub fn organisation_url(&self) -> Option<&str> {
        self.get_str("organisationUrl")
    }
}

/// Parameters for `createRepository`: the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryParams {
    pub post_repository: PostRepository,
}

/// Parameters for `getRepositoryById`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRepositoryParams {
    /// Repository id (a UUID, passed through untouched).
    pub id: String,
}

impl GetRepositoryParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for `listRepositories`. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublicCodeStatus>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Organisation URI to filter on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    /// Comma-separated list of repository ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_params_omit_absent_filters() {
        let params = ListRepositoriesParams {
            status: Some(PublicCodeStatus::WithPublicCode),
            page: Some(1),
            per_page: Some(20),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(params).unwrap(),
            json!({ "status": "withPublicCode", "page": 1, "perPage": 20 })
        );
    }

    #[test]
    fn post_repository_echoes_unknown_fields() {
        let body = json!({
            "gitOrganisationUrl": "https://github.com/acme",
            "organisationUrl": "https://org.example",
            "note": 7,
        });
        let post: PostRepository = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(post.git_organisation_url(), Some("https://github.com/acme"));
        assert_eq!(post.organisation_url(), Some("https://org.example"));
        let params = CreateRepositoryParams { post_repository: post };
        assert_eq!(serde_json::to_value(params).unwrap(), json!({ "postRepository": body }));
    }

    #[test]
    fn unknown_status_is_refused() {
        let result = serde_json::from_value::<ListRepositoriesParams>(json!({ "status": "some" }));
        assert!(result.is_err());
    }
}
