use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::models::Question;

/// Returned by `pick_next` when every question in the pool was excluded.
#[derive(Debug, PartialEq)]
pub struct Exhausted;

/// Slice of `items` shown on the 1-based `page`. Pages past the end are empty.
pub fn paginate<T>(page: usize, per_page: usize, items: &[T]) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());

    &items[start..end]
}

/// Picks uniformly among the questions in `pool` whose id is not in `exclude`.
pub fn pick_next<'a, R>(
    pool: &'a [Question],
    exclude: &HashSet<i32>,
    rng: &mut R,
) -> Result<&'a Question, Exhausted>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<&Question> = pool
        .iter()
        .filter(|question| !exclude.contains(&question.id))
        .collect();

    candidates.choose(rng).copied().ok_or(Exhausted)
}
