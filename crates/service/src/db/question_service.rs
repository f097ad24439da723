use models::question;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::errors::ServiceError;

/// All questions ordered by id.
pub async fn list_questions(db: &DatabaseConnection) -> Result<Vec<question::Model>, ServiceError> {
    question::Entity::find()
        .order_by_asc(question::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn count_questions(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    question::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Questions of one category, ordered by id.
pub async fn list_questions_in_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<question::Model>, ServiceError> {
    question::Entity::find()
        .filter(question::Column::Category.eq(category_id))
        .order_by_asc(question::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Case-insensitive substring match against the question text (ILIKE).
pub async fn search_questions(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<question::Model>, ServiceError> {
    question::Entity::find()
        .filter(Expr::col(question::Column::Question).ilike(format!("%{}%", term)))
        .order_by_asc(question::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert a new question; id is assigned by the store. Inputs are expected
/// to be validated by the caller (see `trivia::service`).
pub async fn create_question(
    db: &DatabaseConnection,
    text: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> Result<question::Model, ServiceError> {
    let am = question::ActiveModel {
        question: Set(text.to_string()),
        answer: Set(answer.to_string()),
        category: Set(category),
        difficulty: Set(difficulty),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = created.id, category = created.category, "question created");
    Ok(created)
}

/// Delete by id; `Ok(false)` when no such row exists.
pub async fn delete_question(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = question::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected > 0 {
        info!(id, "question deleted");
    }
    Ok(res.rows_affected > 0)
}
