//! # OSS Register
//!
//! > **Operation layer for a public register of open-source repositories and their publishers.**
//!
//! Every register operation (registering an organisation, listing repositories, ...) follows
//! the same contract: consult a mock registry, otherwise run its default logic, and surface
//! any failure as a normalized `{ message, detail }` rejection with an HTTP status.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Wrapper, Many Operations
//! The interception and normalization steps are identical for every operation, so they are
//! written **once** in [`Operation<P>`](framework::Operation). A concrete operation is just a
//! name plus a parameter type. Nothing per operation can drift from the shared contract.
//!
//! ### Injected Mocks
//! The mock registry is a [`MockRegistry`](framework::mock::MockRegistry) value handed to each
//! operation at construction, not a hidden global. Tests build a
//! [`MockTable`](framework::mock::MockTable); production uses
//! [`NoMocks`](framework::mock::NoMocks) or a table loaded from a JSON file.
//!
//! ### Echo by Default
//! Without a mock, an operation returns its parameter object unchanged. Real behavior plugs in
//! through [`OperationLogic`](framework::OperationLogic).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic operation handler, mock interception, error normalization.
//! - **Key items**: [`Operation`](framework::Operation), [`Rejection`](framework::Rejection),
//!   [`normalize`](framework::normalize).
//!
//! ### 2. The Parameters ([`model`])
//! - **Role**: Typed parameter objects for each operation.
//!
//! ### 3. The Services ([`services`])
//! - **Role**: Name and group the operations by register area.
//! - **Key items**: [`OrganisationsService`](services::OrganisationsService),
//!   [`PublishersService`](services::PublishersService),
//!   [`RepositoriesService`](services::RepositoriesService),
//!   [`GitOrganisationsService`](services::GitOrganisationsService).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Wires all services to one registry; sets up tracing.
//! - **Key items**: [`Register`](lifecycle::Register).
//!
//! ### 5. The Edges ([`http`], [`config`])
//! - **Role**: HTTP routes under `/v1` and the server's CLI/env configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//!
//! # Redirect operations to canned responses
//! cargo run -- --mocks mocks.json
//! ```

pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod services;
