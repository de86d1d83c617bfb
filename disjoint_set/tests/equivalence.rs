mod common;

use common::{all_variants, apply_unions};
use rand::{Rng, SeedableRng};

// Same random union script, three representations, identical observable
// connectivity on every pair. This is the contract that lets a caller pick
// a variant purely on workload cost.
#[test]
fn random_scripts_agree_on_all_pairs() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(20251012);
    for &n in &[1usize, 2, 7, 25, 60] {
        for _ in 0..4 {
            let script: Vec<(usize, usize)> = (0..2 * n)
                .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
                .collect();

            let mut variants = all_variants(n);
            for (_, set) in variants.iter_mut() {
                apply_unions(set.as_mut(), &script);
            }

            let (_, reference) = &mut variants[0];
            let expected_count = reference.count();
            let mut expected = Vec::with_capacity(n * n);
            for i in 0..n {
                for j in 0..n {
                    expected.push(reference.connected(i, j).unwrap());
                }
            }

            for (name, set) in variants.iter_mut().skip(1) {
                assert_eq!(set.count(), expected_count, "{}: n={}", name, n);
                let mut k = 0;
                for i in 0..n {
                    for j in 0..n {
                        assert_eq!(
                            set.connected(i, j).unwrap(),
                            expected[k],
                            "{}: n={}, pair ({}, {})",
                            name,
                            n,
                            i,
                            j
                        );
                        k += 1;
                    }
                }
            }
        }
    }
}

// Interleaved unions and queries: the compressing variant answers through
// mutated trees, the others through pristine ones; answers must still match.
#[test]
fn interleaved_queries_stay_in_agreement() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(77);
    let n = 40;
    let mut variants = all_variants(n);
    for _ in 0..300 {
        if rng.gen_bool(0.5) {
            let p = rng.gen_range(0..n);
            let q = rng.gen_range(0..n);
            for (_, set) in variants.iter_mut() {
                set.union(p, q).unwrap();
            }
        } else {
            let p = rng.gen_range(0..n);
            let q = rng.gen_range(0..n);
            let answers: Vec<bool> = variants
                .iter_mut()
                .map(|(_, set)| set.connected(p, q).unwrap())
                .collect();
            assert!(
                answers.windows(2).all(|w| w[0] == w[1]),
                "disagreement on ({}, {}): {:?}",
                p,
                q,
                answers
            );
        }
    }
}
