use std::collections::BTreeMap;
use std::convert::TryFrom;

use serde::Deserialize;

use db::{
    models::{Category, Question},
    utils::paginate,
};
use errors::Error;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<i64>,
}

impl PageParams {
    /// 1-based page number, defaulting to the first page.
    pub fn page(&self) -> Result<usize, Error> {
        match self.page {
            None => Ok(1),
            Some(page) if page >= 1 => usize::try_from(page)
                .map_err(|_| Error::BadRequest(format!("page {} is out of range", page))),
            Some(page) => Err(Error::BadRequest(format!("invalid page number {}", page))),
        }
    }
}

pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub fn question_page(questions: &[Question], page: usize) -> QuestionPage {
    QuestionPage {
        questions: paginate(page, QUESTIONS_PER_PAGE, questions).to_vec(),
        total_questions: questions.len(),
    }
}

/// Categories keyed by id, the shape the client renders its category list from.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.name))
        .collect()
}
