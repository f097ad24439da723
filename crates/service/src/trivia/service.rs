use std::sync::Arc;

use models::{category, question};
use tracing::instrument;

use crate::errors::ServiceError;
use crate::pagination::page_slice;
use crate::quiz;
use crate::trivia::repository::TriviaRepository;

/// One page of questions plus the size of the full (filtered) set.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<question::Model>,
    pub total: u64,
}

/// Outcome of a quiz round. `force_end` is set when every eligible
/// question has already been asked.
#[derive(Debug, Clone)]
pub struct QuizPick {
    pub question: Option<question::Model>,
    pub force_end: bool,
}

/// Input for question creation. `category` and `difficulty` stay wide here;
/// range checks happen in `create`.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Application service for the trivia API. Holds the injected store handle
/// (via the repository) and implements the listing, search, create/delete,
/// and quiz-selection rules.
pub struct TriviaService<R: TriviaRepository> {
    repo: Arc<R>,
}

impl<R: TriviaRepository> TriviaService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.repo.list_categories().await
    }

    /// The global question listing: load everything ordered by id, then
    /// hand back the requested fixed-size slice plus the overall total.
    pub async fn questions_page(&self, page: i64) -> Result<QuestionPage, ServiceError> {
        let all = self.repo.list_questions().await?;
        let total = all.len() as u64;
        let questions = page_slice(&all, page).to_vec();
        Ok(QuestionPage { questions, total })
    }

    /// First page of one category's questions. The category must exist;
    /// a category with zero questions is a valid, empty page.
    pub async fn questions_for_category(&self, category_id: i32) -> Result<QuestionPage, ServiceError> {
        if self.repo.find_category(category_id).await?.is_none() {
            return Err(ServiceError::not_found("category"));
        }
        let rows = self.repo.list_questions_in_category(category_id).await?;
        let total = rows.len() as u64;
        let questions = page_slice(&rows, 1).to_vec();
        Ok(QuestionPage { questions, total })
    }

    /// Case-insensitive substring search on question text. An empty result
    /// is returned as-is; the HTTP layer decides what to make of it.
    pub async fn search(&self, term: &str) -> Result<Vec<question::Model>, ServiceError> {
        self.repo.search_questions(term).await
    }

    /// Validate and persist a new question; returns the created row and the
    /// new overall question count.
    #[instrument(skip(self, input), fields(category = input.category))]
    pub async fn create(&self, input: NewQuestion) -> Result<(question::Model, u64), ServiceError> {
        question::validate_text("question", &input.question)?;
        question::validate_text("answer", &input.answer)?;
        let category = question::validate_category(input.category)?;
        let difficulty = question::validate_difficulty(input.difficulty)?;

        let created = self
            .repo
            .insert_question(&input.question, &input.answer, category, difficulty)
            .await?;
        let total = self.repo.count_questions().await?;
        Ok((created, total))
    }

    /// Delete by id; missing ids surface as `NotFound` here (the HTTP layer
    /// folds that into 422 per the route's contract).
    pub async fn delete(&self, id: i32) -> Result<i32, ServiceError> {
        if self.repo.delete_question(id).await? {
            Ok(id)
        } else {
            Err(ServiceError::not_found("question"))
        }
    }

    /// Pick a random not-yet-asked question. `category_id == 0` means all
    /// categories. Category validity is a range check against the category
    /// count only; holes in the id sequence are not detected.
    pub async fn quiz_question(
        &self,
        category_id: i64,
        previous: &[i32],
    ) -> Result<QuizPick, ServiceError> {
        let category_count = self.repo.count_categories().await?;
        if category_id > category_count as i64 {
            return Err(ServiceError::not_found("category"));
        }

        let pool = if category_id == 0 {
            self.repo.list_questions().await?
        } else {
            match i32::try_from(category_id) {
                Ok(c) => self.repo.list_questions_in_category(c).await?,
                Err(_) => Vec::new(),
            }
        };

        let candidates = quiz::candidates(pool, previous);
        if candidates.is_empty() {
            return Ok(QuizPick { question: None, force_end: true });
        }
        Ok(QuizPick { question: quiz::pick(&candidates), force_end: false })
    }
}
