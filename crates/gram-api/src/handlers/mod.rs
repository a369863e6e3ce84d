//! Route handlers

pub mod auth;
pub mod comments;
pub mod follows;
pub mod health;
pub mod images;
pub mod likes;
pub mod users;
