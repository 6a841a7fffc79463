use diesel::{
    self, ExpressionMethods, OptionalExtension, PgConnection, PgTextExpressionMethods, QueryDsl,
    RunQueryDsl,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Clone, Debug, Deserialize, Insertable, PartialEq, Serialize)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, questions as questions_table};

        let all_questions = questions_table.order(id).load::<Question>(conn)?;

        Ok(all_questions)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Option<Question>, Error> {
        use questions::dsl::questions as questions_table;

        let question = questions_table
            .find(question_id)
            .first::<Question>(conn)
            .optional()?;

        Ok(question)
    }

    pub fn find_by_category(conn: &PgConnection, category_id: i32) -> Result<Vec<Question>, Error> {
        use questions::dsl::{category, id, questions as questions_table};

        let results = questions_table
            .filter(category.eq(category_id))
            .order(id)
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Case-insensitive substring match on the question text.
    pub fn search(conn: &PgConnection, term: &str) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, question, questions as questions_table};

        let results = questions_table
            .filter(question.ilike(like_pattern(term)))
            .order(id)
            .load::<Question>(conn)?;

        Ok(results)
    }

    pub fn create(conn: &PgConnection, new_question: &NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(new_question)
            .get_result(conn)?;

        Ok(question)
    }

    /// Returns the number of rows removed, zero when the id did not exist.
    pub fn delete(conn: &PgConnection, question_id: i32) -> Result<usize, Error> {
        use questions::dsl::questions as questions_table;

        let deleted = diesel::delete(questions_table.find(question_id)).execute(conn)?;

        Ok(deleted)
    }
}

// ILIKE treats % and _ as wildcards and \ as the escape character
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == '\\' {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}
