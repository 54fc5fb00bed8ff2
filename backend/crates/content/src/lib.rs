//! Content (Questions & Answers) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Create / edit / delete / list questions
//! - Create / edit / delete / list answers under a question
//! - Owner-only editing; owner-or-admin deletion
//!
//! Every operation requires an active session; guards come from the `auth`
//! crate and run inside the same transaction as the guarded mutation.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::content_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgContentRepository as ContentStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
