use std::collections::HashSet;

use actix_web::{
    web::{block, Data, Json},
    Result,
};
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use db::{models::Question, utils::pick_next, Store};
use errors::Error;

use crate::validate::int_or_string;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizCategory {
    /// `0` plays across every category.
    #[serde(deserialize_with = "int_or_string")]
    pub id: i32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
    #[serde(rename = "previousQuestions")]
    pub previous_questions: Vec<i32>,
}

pub async fn play(
    store: Data<dyn Store>,
    params: Json<QuizRequest>,
) -> Result<Json<QuizResponse>, Error> {
    let QuizRequest {
        quiz_category,
        previous_questions,
    } = params.into_inner();
    let category_id = quiz_category.id;

    let pool = block(move || store.quiz_pool(category_id)).await??;

    let exclude: HashSet<i32> = previous_questions.iter().copied().collect();
    let question = pick_next(&pool, &exclude, &mut thread_rng())
        .map_err(|_| Error::NotFound(format!("no questions left in category {}", category_id)))?
        .clone();

    Ok(Json(QuizResponse {
        success: true,
        question,
        previous_questions,
    }))
}
