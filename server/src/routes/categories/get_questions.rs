use actix_web::{
    web::{block, Data, Json, Path, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    models::{Category, Question},
    Store,
};
use errors::Error;

use crate::handlers::{question_page, PageParams};

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

pub async fn get_questions(
    store: Data<dyn Store>,
    category_id: Path<i32>,
    params: Query<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, Error> {
    let category_id = category_id.into_inner();
    let page_number = params.page()?;

    let found = block(move || -> Result<Option<(Category, Vec<Question>)>, Error> {
        match store.get_category(category_id)? {
            Some(category) => {
                let questions = store.find_questions_by_category(category.id)?;
                Ok(Some((category, questions)))
            }
            None => Ok(None),
        }
    })
    .await??;

    let (category, questions) = found
        .ok_or_else(|| Error::NotFound(format!("category {} does not exist", category_id)))?;
    let page = question_page(&questions, page_number);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        current_category: category.name,
    }))
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use super::CategoryQuestionsResponse;
    use crate::tests::helpers::tests::{seeded_store, test_get};

    #[actix_rt::test]
    async fn test_questions_in_category() {
        // Art holds ids 2, 8 and 14
        let store = seeded_store(14);
        let res: (u16, CategoryQuestionsResponse) =
            test_get(&store, "/categories/2/questions").await;

        assert_eq!(res.0, 200);
        assert!(res.1.success);
        assert_eq!(res.1.current_category, "Art");
        assert_eq!(res.1.total_questions, 3);
        assert_eq!(
            res.1.questions.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![2, 8, 14]
        );
        assert!(res.1.questions.iter().all(|q| q.category == 2));
    }

    #[actix_rt::test]
    async fn test_page_past_end_of_category_is_empty() {
        let store = seeded_store(14);
        let res: (u16, CategoryQuestionsResponse) =
            test_get(&store, "/categories/2/questions?page=2").await;

        assert_eq!(res.0, 200);
        assert!(res.1.questions.is_empty());
        assert_eq!(res.1.total_questions, 3);
    }

    #[actix_rt::test]
    async fn test_unknown_category() {
        let store = seeded_store(14);
        let res: (u16, ErrorResponse) = test_get(&store, "/categories/99/questions").await;

        assert_eq!(res.0, 404);
        assert!(!res.1.success);
        assert_eq!(res.1.message, "Resource not found");
    }

    #[actix_rt::test]
    async fn test_non_numeric_category() {
        let store = seeded_store(14);
        let res: (u16, ErrorResponse) = test_get(&store, "/categories/art/questions").await;

        assert_eq!(res.0, 404);
    }
}
