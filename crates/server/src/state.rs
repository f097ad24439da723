use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::trivia::{SeaOrmTriviaRepository, TriviaService};

pub type Trivia = TriviaService<SeaOrmTriviaRepository>;

/// Shared handler state: one process-wide store handle, injected at
/// construction rather than reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub trivia: Arc<Trivia>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmTriviaRepository { db });
        Self { trivia: Arc::new(TriviaService::new(repo)) }
    }
}
