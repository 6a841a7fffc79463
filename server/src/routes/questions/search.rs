use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{models::Question, Store};
use errors::Error;

use crate::handlers::{question_page, PageParams};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub async fn search(
    store: Data<dyn Store>,
    params: Json<SearchRequest>,
    page: Query<PageParams>,
) -> Result<Json<SearchResponse>, Error> {
    let page_number = page.page()?;
    let term = params.into_inner().search_term;

    let query = term.clone();
    let results = block(move || store.search_questions(&query)).await??;

    if results.is_empty() {
        return Err(Error::NotFound(format!("no questions match {:?}", term)));
    }
    let page = question_page(&results, page_number);

    Ok(Json(SearchResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}
