use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use errors::Error;

use crate::models::{Category, NewQuestion, Question};
use crate::store::{DeleteOutcome, Store};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i32, Question>,
    categories: BTreeMap<i32, Category>,
    last_question_id: i32,
    last_category_id: i32,
}

/// In-process `Store`. Ids increase monotonically and are never handed out
/// twice, matching a SERIAL column.
#[derive(Debug, Default)]
pub struct MemStore {
    tables: Mutex<Tables>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, Error> {
        self.tables
            .lock()
            .map_err(|_| Error::InternalServerError("memory store lock poisoned".into()))
    }
}

impl Store for MemStore {
    fn list_questions(&self) -> Result<Vec<Question>, Error> {
        Ok(self.tables()?.questions.values().cloned().collect())
    }

    fn list_categories(&self) -> Result<Vec<Category>, Error> {
        Ok(self.tables()?.categories.values().cloned().collect())
    }

    fn get_question(&self, id: i32) -> Result<Option<Question>, Error> {
        Ok(self.tables()?.questions.get(&id).cloned())
    }

    fn get_category(&self, id: i32) -> Result<Option<Category>, Error> {
        Ok(self.tables()?.categories.get(&id).cloned())
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let mut tables = self.tables()?;
        tables.last_question_id += 1;

        let question = Question {
            id: tables.last_question_id,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }

    fn create_category(&self, name: &str) -> Result<Category, Error> {
        let mut tables = self.tables()?;
        tables.last_category_id += 1;

        let category = Category {
            id: tables.last_category_id,
            name: name.to_string(),
        };
        tables.categories.insert(category.id, category.clone());

        Ok(category)
    }

    fn delete_question(&self, id: i32) -> Result<DeleteOutcome, Error> {
        match self.tables()?.questions.remove(&id) {
            Some(_) => Ok(DeleteOutcome::Deleted),
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    fn find_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, Error> {
        Ok(self
            .tables()?
            .questions
            .values()
            .filter(|question| question.category == category_id)
            .cloned()
            .collect())
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        let term = term.to_lowercase();

        Ok(self
            .tables()?
            .questions
            .values()
            .filter(|question| question.question.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }
}
