use async_trait::async_trait;
use models::{category, question};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Store operations the trivia service relies on. Kept narrow so tests can
/// substitute an in-memory implementation.
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn count_categories(&self) -> Result<u64, ServiceError>;
    async fn find_category(&self, id: i32) -> Result<Option<category::Model>, ServiceError>;

    async fn list_questions(&self) -> Result<Vec<question::Model>, ServiceError>;
    async fn count_questions(&self) -> Result<u64, ServiceError>;
    async fn list_questions_in_category(&self, category_id: i32) -> Result<Vec<question::Model>, ServiceError>;
    async fn search_questions(&self, term: &str) -> Result<Vec<question::Model>, ServiceError>;
    async fn insert_question(&self, text: &str, answer: &str, category: i32, difficulty: i32) -> Result<question::Model, ServiceError>;
    async fn delete_question(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTriviaRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TriviaRepository for SeaOrmTriviaRepository {
    async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        crate::db::category_service::list_categories(&self.db).await
    }

    async fn count_categories(&self) -> Result<u64, ServiceError> {
        crate::db::category_service::count_categories(&self.db).await
    }

    async fn find_category(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        crate::db::category_service::get_category(&self.db, id).await
    }

    async fn list_questions(&self) -> Result<Vec<question::Model>, ServiceError> {
        crate::db::question_service::list_questions(&self.db).await
    }

    async fn count_questions(&self) -> Result<u64, ServiceError> {
        crate::db::question_service::count_questions(&self.db).await
    }

    async fn list_questions_in_category(&self, category_id: i32) -> Result<Vec<question::Model>, ServiceError> {
        crate::db::question_service::list_questions_in_category(&self.db, category_id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<question::Model>, ServiceError> {
        crate::db::question_service::search_questions(&self.db, term).await
    }

    async fn insert_question(&self, text: &str, answer: &str, category: i32, difficulty: i32) -> Result<question::Model, ServiceError> {
        crate::db::question_service::create_question(&self.db, text, answer, category, difficulty).await
    }

    async fn delete_question(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::question_service::delete_question(&self.db, id).await
    }
}
