use std::collections::BTreeMap;

use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::Store;
use errors::Error;

use crate::handlers::category_map;

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

pub async fn get_all(store: Data<dyn Store>) -> Result<Json<CategoriesResponse>, Error> {
    let categories = block(move || store.list_categories()).await??;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}
