use errors::Error;

use crate::models::{Category, NewQuestion, Question};

#[cfg(any(test, feature = "test-util"))]
mod mem;
mod pg;

#[cfg(any(test, feature = "test-util"))]
pub use self::mem::MemStore;
pub use self::pg::PgStore;

/// Category id that selects questions from every category when playing a quiz.
pub const ALL_CATEGORIES: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Persistence contract for questions and categories. Lookups of ids that do
/// not exist return `None` or `DeleteOutcome::NotFound`; `Err` is reserved for
/// the store itself failing.
pub trait Store: Send + Sync {
    /// All questions, ordered by id.
    fn list_questions(&self) -> Result<Vec<Question>, Error>;

    fn list_categories(&self) -> Result<Vec<Category>, Error>;

    fn get_question(&self, id: i32) -> Result<Option<Question>, Error>;

    fn get_category(&self, id: i32) -> Result<Option<Category>, Error>;

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error>;

    fn create_category(&self, name: &str) -> Result<Category, Error>;

    fn delete_question(&self, id: i32) -> Result<DeleteOutcome, Error>;

    fn find_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, Error>;

    /// Questions whose text contains `term`, ignoring case.
    fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error>;

    /// Questions eligible for a quiz round in the given category.
    fn quiz_pool(&self, category_id: i32) -> Result<Vec<Question>, Error> {
        if category_id == ALL_CATEGORIES {
            self.list_questions()
        } else {
            self.find_questions_by_category(category_id)
        }
    }
}
