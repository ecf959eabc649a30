//! Domain services built from generic [`Operation`](crate::framework::Operation)s.
//!
//! Each service groups the operations of one register area and fixes their
//! names, which is what mock tables are keyed on.

pub mod git_organisations;
pub mod organisations;
pub mod publishers;
pub mod repositories;

pub use git_organisations::GitOrganisationsService;
pub use organisations::OrganisationsService;
pub use publishers::PublishersService;
pub use repositories::RepositoriesService;
