use rand::Rng;

/// Uniformly permute `items` in place (Fisher-Yates) and hand the slice back for chaining.
///
/// Walks `i` down from the last index to 1, swapping `items[i]` with a uniformly chosen
/// `items[j]`, `j` in `0..=i`. Empty and single element slices are left untouched and
/// draw nothing from `rng`.
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
    where R: Rng + ?Sized
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::collections::HashMap;

    fn seeded(seed: u64) -> XorShiftRng {
        XorShiftRng::seed_from_u64(seed)
    }

    #[test]
    fn empty_and_single_are_no_ops() {
        let mut rng = seeded(1);
        let mut empty: Vec<u8> = vec![];
        assert!(shuffle(&mut empty, &mut rng).is_empty());

        let mut single = vec![42];
        assert_eq!(shuffle(&mut single, &mut rng), &[42]);
    }

    #[test]
    fn returns_the_same_slice_for_chaining() {
        let mut rng = seeded(2);
        let mut items = vec![1, 2, 3, 4, 5];
        let first = shuffle(&mut items, &mut rng)[0];
        assert_eq!(items[0], first);
    }

    #[test]
    fn same_seed_same_permutation() {
        let mut a = (0..10).collect::<Vec<u32>>();
        let mut b = a.clone();
        shuffle(&mut a, &mut seeded(99));
        shuffle(&mut b, &mut seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn permutation_keeps_every_element() {
        fn p(mut items: Vec<i32>, seed: u64) -> bool {
            let mut expected = items.clone();
            expected.sort();
            shuffle(&mut items, &mut seeded(seed));
            items.sort();
            items == expected
        }
        quickcheck(p as fn(Vec<i32>, u64) -> bool);
    }

    // Chi-square goodness of fit over the 24 orderings of a 4 element slice.
    // 23 degrees of freedom, the critical value at p = 0.001 is 49.73.
    #[test]
    fn four_element_shuffle_is_uniform() {
        const TRIALS: usize = 48_000;
        let mut rng = seeded(0x5eed);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *counts.entry(items.to_vec()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 24);
        for permutation in (0u8..4).permutations(4) {
            assert!(counts.contains_key(&permutation));
        }

        let expected = TRIALS as f64 / 24.0;
        let chi_square: f64 = counts.values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 49.73, "chi square {} too large", chi_square);
    }
}
