//! Path parameters carrying Snowflake IDs
//!
//! IDs arrive as strings and are parsed on demand so a malformed id is a
//! 400 with a useful message rather than a routing failure.

use gram_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

fn parse(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    Snowflake::parse(raw).map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// `/users/follow/:user_id`
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        parse(&self.user_id, "user_id")
    }
}

/// `/images/:image_id/...`
#[derive(Debug, Deserialize)]
pub struct ImagePath {
    pub image_id: String,
}

impl ImagePath {
    pub fn image_id(&self) -> Result<Snowflake, ApiError> {
        parse(&self.image_id, "image_id")
    }
}

/// `/images/:image_id/comments/:comment_id`
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub image_id: String,
    pub comment_id: String,
}

impl CommentPath {
    pub fn image_id(&self) -> Result<Snowflake, ApiError> {
        parse(&self.image_id, "image_id")
    }

    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse(&self.comment_id, "comment_id")
    }
}

/// `/images/comments/:comment_id`
#[derive(Debug, Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse(&self.comment_id, "comment_id")
    }
}
