#[macro_use]
extern crate log;

use dotenv::dotenv;
use env_logger::Env;

use db::{models::NewQuestion, new_pool, DatabaseConfig, PgStore, Store};
use errors::Error;

const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// (question, answer, index into CATEGORIES, difficulty)
const QUESTIONS: [(&str, &str, usize, i32); 12] = [
    ("What is the heaviest organ in the human body?", "The Liver", 0, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 0, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 0, 4),
    ("Which Dutch graphic artist is known for mathematically inspired lithographs?", "Escher", 1, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 1, 3),
    ("What is the capital of France?", "Paris", 2, 1),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 2, 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 3, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 3, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 4),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 5, 4),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let pool = new_pool(&DatabaseConfig::from_env())?;
    let store = PgStore::new(pool);
    store.ensure_schema()?;

    if seed(&store)? {
        info!(
            "Seeded {} categories and {} questions",
            CATEGORIES.len(),
            QUESTIONS.len()
        );
    } else {
        info!("Categories already present, skipping seed");
    }

    Ok(())
}

/// Inserts the sample data unless categories already exist. Returns whether
/// anything was written.
fn seed(store: &dyn Store) -> Result<bool, Error> {
    if !store.list_categories()?.is_empty() {
        return Ok(false);
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES.iter() {
        category_ids.push(store.create_category(name)?.id);
    }

    for (question, answer, category, difficulty) in QUESTIONS.iter() {
        store.create_question(NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category_ids[*category],
            difficulty: *difficulty,
        })?;
    }

    Ok(true)
}
