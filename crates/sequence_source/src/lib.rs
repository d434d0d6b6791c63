use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::error::SourceError;
use tracing::debug;

pub const DEFAULT_RANDOM_COUNT: usize = 10;
pub const DEFAULT_RANDOM_MAX: i32 = 100;
pub const DEFAULT_COMPARE_COUNT: usize = 20;
pub const DEFAULT_COMPARE_BOUND: i32 = 1000;
pub const DEMO_LIMIT: i32 = 10;

/// Parses whitespace separated integers. Any token that is not an `i32` rejects the whole line.
pub fn parse_numbers(text: &str) -> Result<Vec<i32>, SourceError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SourceError::Empty);
    }

    text.split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| SourceError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}

/// `count` values drawn uniformly from `1..=max`.
pub fn random_sequence<R>(rng: &mut R, count: usize, max: i32) -> Result<Vec<i32>, SourceError>
where
    R: Rng + ?Sized,
{
    if max < 1 {
        return Err(SourceError::InvalidBound { max });
    }
    debug!(count, max, "generating random sequence");
    Ok((0..count).map(|_| rng.gen_range(1..=max)).collect())
}

/// `count` values drawn uniformly from `0..bound`.
pub fn random_below<R>(rng: &mut R, count: usize, bound: i32) -> Result<Vec<i32>, SourceError>
where
    R: Rng + ?Sized,
{
    if bound < 1 {
        return Err(SourceError::InvalidBound { max: bound });
    }
    debug!(count, bound, "generating comparison input");
    Ok((0..count).map(|_| rng.gen_range(0..bound)).collect())
}

pub fn odd_numbers_below(limit: i32) -> Vec<i32> {
    (1..limit.max(1)).step_by(2).collect()
}

/// The fixed demonstration input: odd numbers between 0 and 10.
pub fn demo_sequence() -> Vec<i32> {
    odd_numbers_below(DEMO_LIMIT)
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
