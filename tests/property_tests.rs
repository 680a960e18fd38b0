use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randpick::{
    Config, DistributionTable, Draw, Entries, PickError, PriorityKind, Span, draw_indices,
};
use std::collections::HashSet;

fn kind() -> impl Strategy<Value = PriorityKind> {
    prop_oneof![Just(PriorityKind::Weight), Just(PriorityKind::Percentage)]
}

/// Percentages in (0, 100] whose sum stays within 100.
fn percentages() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1i32..=25, 1..5)
}

proptest! {
    #[test]
    fn prop_distinct_size_and_uniqueness(
        weights in prop::collection::vec(1i32..1000, 1..30),
        seed in any::<u64>(),
        n_frac in 0.0f64..1.0,
    ) {
        let n = 1 + ((weights.len() - 1) as f64 * n_frac) as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let got = draw_indices(
            PriorityKind::Weight,
            &weights,
            Draw::Distinct(n),
            &mut rng,
            &Config::default(),
        )
        .unwrap();

        prop_assert_eq!(got.len(), n);
        let uniq: HashSet<_> = got.iter().copied().collect();
        prop_assert_eq!(uniq.len(), n);
        prop_assert!(got.iter().all(|&i| i < weights.len()));
    }

    #[test]
    fn prop_distinct_full_draw_is_permutation(
        ps in percentages(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = ps.len();
        let mut got = draw_indices(
            PriorityKind::Percentage,
            &ps,
            Draw::Distinct(n),
            &mut rng,
            &Config::default(),
        )
        .unwrap();
        got.sort_unstable();
        prop_assert_eq!(got, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_distinct_too_many(
        weights in prop::collection::vec(1i32..1000, 0..10),
        extra in 1usize..5,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let n = weights.len() + extra;
        prop_assert_eq!(
            draw_indices(
                PriorityKind::Weight,
                &weights,
                Draw::Distinct(n),
                &mut rng,
                &Config::default(),
            ),
            Err(PickError::NotEnoughValues { requested: n, available: weights.len() })
        );
    }

    #[test]
    fn prop_percentages_never_pick_dead_space(
        ps in percentages(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let got = draw_indices(
            PriorityKind::Percentage,
            &ps,
            Draw::WithReplacement(200),
            &mut rng,
            &Config::default(),
        )
        .unwrap();
        prop_assert_eq!(got.len(), 200);
        prop_assert!(got.iter().all(|&i| i < ps.len()));
    }

    #[test]
    fn prop_non_positive_priority_rejected(
        k in kind(),
        bad in i32::MIN..=0,
        good in prop::collection::vec(1i32..10, 0..5),
    ) {
        let mut e = Entries::new();
        for (i, &p) in good.iter().enumerate() {
            e.register(i, p, k).unwrap();
        }
        prop_assert_eq!(e.register(99, bad, k), Err(PickError::InvalidPriority { priority: bad }));
        prop_assert_eq!(e.len(), good.len());
    }

    #[test]
    fn prop_mixing_kinds_rejected(first in kind(), p in 1i32..50, q in 1i32..50) {
        let other = match first {
            PriorityKind::Weight => PriorityKind::Percentage,
            PriorityKind::Percentage => PriorityKind::Weight,
        };
        let mut e = Entries::new();
        e.register("a", p, first).unwrap();
        prop_assert_eq!(
            e.register("b", q, other),
            Err(PickError::MixedPriorityKind { existing: first, requested: other })
        );
    }

    #[test]
    fn prop_percentage_overflow(ps in prop::collection::vec(1i32..=100, 1..8)) {
        let sum: i64 = ps.iter().map(|&p| i64::from(p)).sum();
        let res = Entries::from_pairs(ps.iter().map(|&p| ((), p)), PriorityKind::Percentage);
        if sum > 100 {
            let overflowed = matches!(res, Err(PickError::PercentageOverflow { .. }));
            prop_assert!(overflowed, "expected overflow for sum {}", sum);
        } else {
            prop_assert!(res.is_ok());
        }
    }

    #[test]
    fn prop_table_intervals_partition_live_span(weights in prop::collection::vec(1i32..50, 1..20)) {
        let table = DistributionTable::from_priorities(&weights, Span::Sum).unwrap();
        let sum: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        prop_assert_eq!(i64::from(table.total()), sum);

        let mut counts = vec![0i32; weights.len()];
        let mut last = 0usize;
        for point in 0..table.total() {
            let owner = table.locate(point).unwrap();
            // owners never go backwards as the point grows
            prop_assert!(owner >= last);
            last = owner;
            counts[owner] += 1;
        }
        prop_assert_eq!(counts, weights);
        prop_assert_eq!(table.locate(table.total()), None);
    }
}
