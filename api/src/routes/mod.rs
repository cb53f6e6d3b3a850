//! API Routes

pub mod health;
pub mod schema;
pub mod submit;
pub mod validate;
