use crate::config::Config;
use crate::distinct::DistinctSampler;
use crate::error::PickError;
use crate::priority::PriorityKind;
use crate::random::RandomSource;
use crate::sampler::Sampler;
use crate::table::{DistributionTable, Span};

/// Which kind of draw to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    One,
    WithReplacement(usize),
    Distinct(usize),
}

/// Run `draw` over `priorities` and return the original positions picked, in
/// draw order. `Draw::One` yields exactly one position.
///
/// # Errors
/// * [`PickError::InvalidCount`] for a zero count.
/// * [`PickError::NotEnoughValues`] for a distinct draw larger than the list.
/// * Any validation error the table reports for illegal priorities.
pub fn draw_indices<S: RandomSource + ?Sized>(
    kind: PriorityKind,
    priorities: &[i32],
    draw: Draw,
    rng: &mut S,
    config: &Config,
) -> Result<Vec<usize>, PickError> {
    match draw {
        Draw::One => with_replacement(kind, priorities, 1, rng, config),
        Draw::WithReplacement(n) => with_replacement(kind, priorities, n, rng, config),
        Draw::Distinct(n) => DistinctSampler::new(priorities, config).draw(rng, n),
    }
}

fn with_replacement<S: RandomSource + ?Sized>(
    kind: PriorityKind,
    priorities: &[i32],
    n: usize,
    rng: &mut S,
    config: &Config,
) -> Result<Vec<usize>, PickError> {
    if n == 0 {
        return Err(PickError::InvalidCount { requested: n });
    }
    let span = match kind {
        PriorityKind::Weight => Span::Sum,
        PriorityKind::Percentage => Span::PERCENTAGE,
    };
    let table = DistributionTable::from_priorities(priorities, span)?;
    Sampler::new(&table, config).draw(rng, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn one_is_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let got = draw_indices(
            PriorityKind::Weight,
            &[1, 1, 1],
            Draw::One,
            &mut rng,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(got.len(), 1);
        assert!(got[0] < 3);
    }

    #[test]
    fn replacement_allows_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let got = draw_indices(
            PriorityKind::Weight,
            &[1],
            Draw::WithReplacement(5),
            &mut rng,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(got, vec![0; 5]);
    }

    #[test]
    fn zero_counts_fail_for_every_draw() {
        let mut rng = StdRng::seed_from_u64(1);
        for draw in [Draw::WithReplacement(0), Draw::Distinct(0)] {
            assert_eq!(
                draw_indices(
                    PriorityKind::Weight,
                    &[1, 2],
                    draw,
                    &mut rng,
                    &Config::default(),
                ),
                Err(PickError::InvalidCount { requested: 0 })
            );
        }
    }

    #[test]
    fn lone_percentage_always_wins() {
        let mut rng = StdRng::seed_from_u64(11);
        let got = draw_indices(
            PriorityKind::Percentage,
            &[30],
            Draw::WithReplacement(2_000),
            &mut rng,
            &Config::default(),
        )
        .unwrap();
        assert!(got.iter().all(|&i| i == 0));
    }
}
