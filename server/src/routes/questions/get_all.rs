use std::collections::BTreeMap;

use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    models::{Category, Question},
    Store,
};
use errors::Error;

use crate::handlers::{category_map, question_page, PageParams};

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
}

pub async fn get_all(
    store: Data<dyn Store>,
    params: Query<PageParams>,
) -> Result<Json<QuestionsResponse>, Error> {
    let page_number = params.page()?;

    let (questions, categories) =
        block(move || -> Result<(Vec<Question>, Vec<Category>), Error> {
            Ok((store.list_questions()?, store.list_categories()?))
        })
        .await??;

    let page = question_page(&questions, page_number);
    if page.questions.is_empty() {
        return Err(Error::NotFound(format!("page {} has no questions", page_number)));
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: category_map(categories),
    }))
}
