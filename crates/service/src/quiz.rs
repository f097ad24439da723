//! Quiz question selection: set difference against already-asked ids,
//! then a uniform random pick.
//!
//! Stateless by design; the caller accumulates `previous` across rounds
//! and ends the quiz when no candidate remains.

use models::question;
use rand::seq::SliceRandom;

/// Questions from `pool` whose id is not in `previous`, in pool order.
pub fn candidates(pool: Vec<question::Model>, previous: &[i32]) -> Vec<question::Model> {
    pool.into_iter().filter(|q| !previous.contains(&q.id)).collect()
}

/// Uniform random pick; `None` when the pool is exhausted.
pub fn pick(candidates: &[question::Model]) -> Option<question::Model> {
    candidates.choose(&mut rand::thread_rng()).cloned()
}
