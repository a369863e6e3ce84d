//! Axum extractors for request handling

mod auth;
mod method;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use method::RequestMethod;
pub use path::{CommentIdPath, CommentPath, ImagePath, UserIdPath};
pub use query::QueryParams;
pub use validated::ValidatedJson;
