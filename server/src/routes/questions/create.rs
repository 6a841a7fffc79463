use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    models::{NewQuestion, Question},
    Store,
};
use errors::Error;

use crate::handlers::{question_page, PageParams};
use crate::validate::{int_or_string, validate};

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    #[serde(deserialize_with = "int_or_string")]
    pub category: i32,
    #[serde(deserialize_with = "int_or_string")]
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i32,
}

impl CreateQuestionRequest {
    fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub async fn create(
    store: Data<dyn Store>,
    params: Json<CreateQuestionRequest>,
    page: Query<PageParams>,
) -> Result<Json<CreateResponse>, Error> {
    validate(&params)?;
    let page_number = page.page()?;
    let new_question = params.into_inner().into_new_question();

    let (question, questions) = block(move || -> Result<(Question, Vec<Question>), Error> {
        if store.get_category(new_question.category)?.is_none() {
            return Err(Error::UnprocessableEntity(format!(
                "category {} does not exist",
                new_question.category
            )));
        }

        let question = store.create_question(new_question)?;
        Ok((question, store.list_questions()?))
    })
    .await??;

    info!("Created question {}", question.id);
    let page = question_page(&questions, page_number);

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}
