#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        http::header::HeaderMap,
        test,
        web::{self, Bytes, Data},
        App,
    };
    use serde::{de::DeserializeOwned, Serialize};

    use db::{models::NewQuestion, MemStore, Store};

    use crate::routes::{cors, default_headers, not_found, routes};

    pub const CATEGORIES: [&str; 6] = [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ];

    /// The six standard categories (ids 1 to 6) plus `count` questions. Question `n`
    /// has id `n` and belongs to category `(n - 1) % 6 + 1`.
    pub fn seeded_store(count: i32) -> Arc<MemStore> {
        let store = MemStore::new();
        for name in CATEGORIES.iter() {
            store.create_category(name).unwrap();
        }

        for n in 1..=count {
            store
                .create_question(NewQuestion {
                    question: format!("Question {}", n),
                    answer: format!("Answer {}", n),
                    category: (n - 1) % 6 + 1,
                    difficulty: (n - 1) % 5 + 1,
                })
                .unwrap();
        }

        Arc::new(store)
    }

    /// Runs one request through the production middleware and route table
    /// backed by `store`
    pub async fn send(store: &Arc<MemStore>, req: test::TestRequest) -> (u16, HeaderMap, Bytes) {
        let store: Arc<dyn Store> = store.clone();
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .wrap(default_headers())
                .app_data(Data::from(store))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = test::read_body(res).await;

        (status, headers, body)
    }

    fn read_json<R>(status: u16, body: Bytes) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(store: &Arc<MemStore>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, _, body) = send(store, test::TestRequest::get().uri(route)).await;

        (status, read_json(status, body))
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        store: &Arc<MemStore>,
        route: &str,
        params: T,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post().set_json(&params).uri(route);
        let (status, _, body) = send(store, req).await;

        (status, read_json(status, body))
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete<R>(store: &Arc<MemStore>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, _, body) = send(store, test::TestRequest::delete().uri(route)).await;

        (status, read_json(status, body))
    }
}
