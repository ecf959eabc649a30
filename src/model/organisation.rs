use super::request_body;
use serde::{Deserialize, Serialize};

request_body! {
    /// An organisation that publishes repositories, as the caller sent it.
    ///
    /// Usually `{ uri, label }`, optionally with `_links`.
    OrganisationSummary
}

impl OrganisationSummary {
    pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self::default().with("uri", uri.into()).with("label", label.into())
    }

    /// Identifying URI of the organisation.
    pub fn uri(&self) -> Option<&str> {
        self.get_str("uri")
    }

    pub fn label(&self) -> Option<&str> {
        self.get_str("label")
    }
}

/// Parameters for `createOrganisation`: the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganisationParams {
    pub organisation_summary: OrganisationSummary,
}

/// Parameters for `listOrganisations`. The operation takes no inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrganisationsParams {}
