//! PassKit web-service middleware and `pass.json` document builder.

pub mod pass;
pub mod service;
pub mod web;

pub use pass::PassBuilder;
pub use service::{BoxError, PassKitService, ServiceResult};
pub use web::router;
