pub mod repository;
pub mod service;

pub use repository::{SeaOrmTriviaRepository, TriviaRepository};
pub use service::{NewQuestion, QuestionPage, QuizPick, TriviaService};
