use diesel::connection::SimpleConnection;

use errors::Error;

use crate::models::{Category, NewQuestion, Question};
use crate::store::{DeleteOutcome, Store};
use crate::{get_conn, Connection, PgPool};

const SCHEMA: &str = include_str!("../../schema.sql");

/// `Store` backed by PostgreSQL through the r2d2 pool. Every call checks out
/// its own connection.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Creates the tables when they are missing.
    pub fn ensure_schema(&self) -> Result<(), Error> {
        let conn = self.conn()?;
        conn.batch_execute(SCHEMA)?;
        info!("Database schema is in place");

        Ok(())
    }

    fn conn(&self) -> Result<Connection, Error> {
        Ok(get_conn(&self.pool)?)
    }
}

impl Store for PgStore {
    fn list_questions(&self) -> Result<Vec<Question>, Error> {
        Question::get_all(&*self.conn()?)
    }

    fn list_categories(&self) -> Result<Vec<Category>, Error> {
        Category::get_all(&*self.conn()?)
    }

    fn get_question(&self, id: i32) -> Result<Option<Question>, Error> {
        Question::find_by_id(&*self.conn()?, id)
    }

    fn get_category(&self, id: i32) -> Result<Option<Category>, Error> {
        Category::find_by_id(&*self.conn()?, id)
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        Question::create(&*self.conn()?, &new_question)
    }

    fn create_category(&self, name: &str) -> Result<Category, Error> {
        Category::create(&*self.conn()?, name)
    }

    fn delete_question(&self, id: i32) -> Result<DeleteOutcome, Error> {
        match Question::delete(&*self.conn()?, id)? {
            0 => Ok(DeleteOutcome::NotFound),
            _ => Ok(DeleteOutcome::Deleted),
        }
    }

    fn find_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, Error> {
        Question::find_by_category(&*self.conn()?, category_id)
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        Question::search(&*self.conn()?, term)
    }
}
