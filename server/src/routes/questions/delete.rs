use actix_web::{
    web::{block, Data, Json, Path, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{models::Question, DeleteOutcome, Store};
use errors::Error;

use crate::handlers::{question_page, PageParams};

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub async fn delete(
    store: Data<dyn Store>,
    question_id: Path<i32>,
    params: Query<PageParams>,
) -> Result<Json<DeleteResponse>, Error> {
    let question_id = question_id.into_inner();
    let page_number = params.page()?;

    let remaining = block(move || -> Result<Option<Vec<Question>>, Error> {
        match store.delete_question(question_id)? {
            DeleteOutcome::Deleted => Ok(Some(store.list_questions()?)),
            DeleteOutcome::NotFound => Ok(None),
        }
    })
    .await??;

    let questions = remaining
        .ok_or_else(|| Error::NotFound(format!("question {} does not exist", question_id)))?;
    info!("Deleted question {}", question_id);
    let page = question_page(&questions, page_number);

    Ok(Json(DeleteResponse {
        success: true,
        deleted: question_id,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}
