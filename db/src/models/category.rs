use diesel::{self, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::categories::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[table_name = "categories"]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[table_name = "categories"]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

impl Category {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Category>, Error> {
        use categories::dsl::{categories as categories_table, id};

        let all_categories = categories_table.order(id).load::<Category>(conn)?;

        Ok(all_categories)
    }

    pub fn find_by_id(conn: &PgConnection, category_id: i32) -> Result<Option<Category>, Error> {
        use categories::dsl::categories as categories_table;

        let category = categories_table
            .find(category_id)
            .first::<Category>(conn)
            .optional()?;

        Ok(category)
    }

    pub fn create(conn: &PgConnection, name: &str) -> Result<Category, Error> {
        let category = diesel::insert_into(table)
            .values(NewCategory { name })
            .get_result(conn)?;

        Ok(category)
    }
}
