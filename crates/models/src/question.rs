use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const MIN_DIFFICULTY: i64 = 0;
pub const MAX_DIFFICULTY: i64 = 5;

/// Trivia question. The serialized form of this model is the wire shape
/// `{id, question, answer, category, difficulty}`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// References `category.id`; checked at write time only (no FK constraint).
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::Validation(format!("{} must be non-empty", field)));
    }
    Ok(())
}

pub fn validate_category(id: i64) -> Result<i32, ModelError> {
    if id <= 0 {
        return Err(ModelError::Validation("category must be a positive integer".into()));
    }
    i32::try_from(id).map_err(|_| ModelError::Validation("category out of range".into()))
}

pub fn validate_difficulty(score: i64) -> Result<i32, ModelError> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&score) {
        return Err(ModelError::Validation(format!(
            "difficulty must be in [{}, {}]",
            MIN_DIFFICULTY, MAX_DIFFICULTY
        )));
    }
    Ok(score as i32)
}
