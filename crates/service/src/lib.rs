//! Business layer for the trivia API.
//! - Pagination, search, create/delete, and quiz selection over the
//!   `models` entities.
//! - Handlers decide HTTP status codes; this layer reports typed errors.

pub mod db;
pub mod errors;
pub mod pagination;
pub mod quiz;
#[cfg(test)]
pub mod test_support;
pub mod trivia;
