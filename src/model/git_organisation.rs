use super::request_body;
use serde::{Deserialize, Serialize};

request_body! {
    /// Request body for registering a git organisation, as the caller sent it.
    ///
    /// Usually `{ url, organisationUri }`.
    GitOrganisationInput
}

impl GitOrganisationInput {
    pub fn new(url: impl Into<String>, organisation_uri: impl Into<String>) -> Self {
        Self::default()
            .with("url", url.into())
            .with("organisationUri", organisation_uri.into())
    }

    /// Address of the git organisation, e.g. `https://github.com/acme`.
    pub fn url(&self) -> Option<&str> {
        self.get_str("url")
    }

    /// URI of the publishing organisation it belongs to.
    pub fn organisation_uri(&self) -> Option<&str> {
        self.get_str("organisationUri")
    }
}

/// Parameters for `createGitOrganisation`: the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGitOrganisationParams {
    pub git_organisation_input: GitOrganisationInput,
}

/// Parameters for `listGitOrganisations`. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGitOrganisationsParams {
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Organisation URI to filter on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
}
