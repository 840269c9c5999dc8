pub mod builder;
pub mod error;
pub mod format;
pub mod handlers;
pub mod validator;

pub use builder::{generate, RenderedResume};
pub use error::{ResumeError, ValidationFailure};
pub use validator::{validate, ValidationResult};
