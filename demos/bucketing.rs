use rand::SeedableRng;
use rand_pcg::Pcg32;
use randpick::{Config, Entries, PriorityKind, RandomPicker};
use std::error::Error;

/// Weighted A/B bucketing with a reproducible seed: every user gets a
/// bucket, and three distinct reviewers are drawn per experiment, favoring
/// the reviewers with more capacity.
fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = Pcg32::seed_from_u64(2024);

    let buckets = Entries::from_pairs(
        [("control", 50), ("variant-a", 30), ("variant-b", 20)],
        PriorityKind::Weight,
    )?;
    for user in 0..10 {
        println!("user {user:>2} -> {}", buckets.pick_one(&mut rng)?);
    }

    let mut reviewers = RandomPicker::new(&mut rng)
        .with_config(Config::new().max_redraws(8))
        .values(["ana", "bo", "chen", "dara", "eli"])?
        .with_weights([5, 1, 3, 3, 2])?;
    for experiment in ["checkout", "search", "onboarding"] {
        println!("{experiment:<11} reviewers: {:?}", reviewers.pick_distinct(3)?);
    }

    Ok(())
}
