use models::category;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use crate::errors::ServiceError;

/// All categories ordered by id.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>, ServiceError> {
    category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn count_categories(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    category::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_category(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<category::Model>, ServiceError> {
    category::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
