//! Application Layer
//!
//! One use case per operation. Every use case opens a transaction, passes
//! the Authorization header through the session guard, performs its
//! repository work, and commits; an error return rolls everything back.

pub mod create_answer;
pub mod create_question;
pub mod delete_answer;
pub mod delete_question;
pub mod edit_answer;
pub mod edit_question;
pub mod get_all_questions;
pub mod get_answers_for_question;
pub mod get_questions_by_user;

pub use create_answer::CreateAnswerUseCase;
pub use create_question::CreateQuestionUseCase;
pub use delete_answer::DeleteAnswerUseCase;
pub use delete_question::DeleteQuestionUseCase;
pub use edit_answer::EditAnswerUseCase;
pub use edit_question::EditQuestionUseCase;
pub use get_all_questions::GetAllQuestionsUseCase;
pub use get_answers_for_question::{AnswerDetails, GetAnswersForQuestionUseCase};
pub use get_questions_by_user::GetQuestionsByUserUseCase;
