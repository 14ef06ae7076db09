//! Seed data generation from a plan.
//!
//! The same plan and RNG seed always produce identical output, so a run can
//! be reproduced from the seed it reports.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::id::generate_id;
use crate::plan::SeedPlan;
use crate::seed::{PostSeed, SeedData, UserSeed};

/// Maximum number of draws for a single identifier before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// Draw a fresh RNG seed from the thread-local generator.
pub fn fresh_rng_seed() -> u64 {
    rand::rng().random()
}

/// Generates users and posts for `plan`.
///
/// Identifiers are unique across the whole run (users and posts share one
/// namespace). Post `i` is titled `Post <i>` with content
/// `Content of post <i>`.
///
/// # Errors
///
/// Returns [`GenerationError::IdCollision`] if a unique identifier cannot be
/// drawn within the retry budget.
///
/// # Example
///
/// ```
/// use example_data::{SeedPlan, generate_seed_data};
///
/// let plan = SeedPlan::standard();
/// let data = generate_seed_data(&plan, 42).expect("generation succeeds");
///
/// assert_eq!(data.users.len(), 3);
/// assert_eq!(data.posts.len(), 20_000);
/// assert_eq!(data, generate_seed_data(&plan, 42).expect("generation succeeds"));
/// ```
pub fn generate_seed_data(plan: &SeedPlan, rng_seed: u64) -> Result<SeedData, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut issued = HashSet::with_capacity(plan.users().len() + plan.post_count());

    let mut users = Vec::with_capacity(plan.users().len());
    for spec in plan.users() {
        users.push(UserSeed {
            id: unique_id(&mut rng, &mut issued)?,
            username: spec.username().to_owned(),
            email: spec.email().to_owned(),
        });
    }

    let mut posts = Vec::with_capacity(plan.post_count());
    for batch in plan.batches() {
        let authors: Vec<String> = batch
            .authors()
            .iter()
            .filter_map(|&index| users.get(index).map(|user| user.id.clone()))
            .collect();
        for index in batch.first()..=batch.last() {
            posts.push(PostSeed {
                id: unique_id(&mut rng, &mut issued)?,
                title: format!("Post {index}"),
                content: format!("Content of post {index}"),
                authors: authors.clone(),
            });
        }
    }

    Ok(SeedData {
        rng_seed,
        users,
        posts,
    })
}

fn unique_id<R: Rng + ?Sized>(
    rng: &mut R,
    issued: &mut HashSet<String>,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = generate_id(rng);
        if issued.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }
    Err(GenerationError::IdCollision {
        max_attempts: MAX_ID_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use rand::RngCore;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::id::ID_LENGTH;
    use crate::plan::{PostBatch, UserSpec};

    /// Yields zero for the first `zero_draws` draws, then a fixed midpoint.
    ///
    /// Each draw maps to exactly one identifier symbol, so the first
    /// identifier is all `0` and every later one repeats a single other
    /// symbol.
    struct ScriptedRng {
        zero_draws: usize,
        draws: usize,
    }

    impl ScriptedRng {
        fn new(zero_draws: usize) -> Self {
            Self {
                zero_draws,
                draws: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = if self.draws < self.zero_draws {
                0
            } else {
                0x8000_0000
            };
            self.draws += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32()) << 32
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst {
                *byte = self.next_u32().to_be_bytes().first().copied().unwrap_or_default();
            }
        }
    }

    fn all_zero_id() -> String {
        "0".repeat(ID_LENGTH)
    }

    #[rstest]
    fn exhausted_retries_report_a_collision() {
        let mut rng = ScriptedRng::new(usize::MAX);
        let mut issued = HashSet::from([all_zero_id()]);

        assert_eq!(
            unique_id(&mut rng, &mut issued),
            Err(GenerationError::IdCollision {
                max_attempts: MAX_ID_ATTEMPTS,
            })
        );
        assert_eq!(MAX_ID_ATTEMPTS, 16);
        assert!(rng.draws >= MAX_ID_ATTEMPTS * ID_LENGTH);
    }

    #[rstest]
    fn a_repeated_identifier_is_redrawn() {
        let mut rng = ScriptedRng::new(ID_LENGTH);
        let mut issued = HashSet::from([all_zero_id()]);

        let id = unique_id(&mut rng, &mut issued).expect("second draw is fresh");

        assert_ne!(id, all_zero_id());
        assert!(crate::id::is_valid_id(&id));
        assert_eq!(issued.len(), 2);
    }

    #[fixture]
    fn small_plan() -> SeedPlan {
        SeedPlan::new(
            vec![
                UserSpec::new("ada", "ada@example.com"),
                UserSpec::new("grace", "grace@example.com"),
            ],
            vec![PostBatch::new(0, 2, [1, 0]), PostBatch::new(3, 4, [0])],
        )
        .expect("valid plan")
    }

    #[rstest]
    fn posts_carry_batch_authors_in_plan_order(small_plan: SeedPlan) {
        let data = generate_seed_data(&small_plan, 5).expect("generation succeeds");
        let ada = data.users.first().expect("ada").id.clone();
        let grace = data.users.get(1).expect("grace").id.clone();

        let authors: Vec<Vec<String>> = data.posts.iter().map(|p| p.authors.clone()).collect();
        assert_eq!(
            authors,
            vec![
                vec![grace.clone(), ada.clone()],
                vec![grace.clone(), ada.clone()],
                vec![grace, ada.clone()],
                vec![ada.clone()],
                vec![ada],
            ]
        );
    }

    #[rstest]
    fn titles_follow_post_index(small_plan: SeedPlan) {
        let data = generate_seed_data(&small_plan, 5).expect("generation succeeds");
        let last = data.posts.last().expect("posts generated");
        assert_eq!(last.title, "Post 4");
        assert_eq!(last.content, "Content of post 4");
    }

    #[rstest]
    fn identifiers_are_unique_across_users_and_posts(small_plan: SeedPlan) {
        let data = generate_seed_data(&small_plan, 11).expect("generation succeeds");
        let ids: HashSet<&str> = data
            .users
            .iter()
            .map(|u| u.id.as_str())
            .chain(data.posts.iter().map(|p| p.id.as_str()))
            .collect();
        assert_eq!(ids.len(), data.users.len() + data.posts.len());
    }

    #[rstest]
    fn different_seeds_produce_different_ids(small_plan: SeedPlan) {
        let first = generate_seed_data(&small_plan, 1).expect("generation succeeds");
        let second = generate_seed_data(&small_plan, 2).expect("generation succeeds");
        assert_ne!(first.users, second.users);
        assert_eq!(second.rng_seed, 2);
    }
}
