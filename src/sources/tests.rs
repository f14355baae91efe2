#![cfg(test)]

#[cfg(feature = "empty")]
mod empty {
    use crate::sequence::{Sequence, Step, count, materialize, materialize_rev, sum};
    use crate::sources::Empty;

    #[test]
    fn test_done_on_the_first_advance() {
        let none = Empty::<u64>::new();
        assert_eq!(none.advance(None), Ok(Step::Done));
        assert_eq!(none.length_hint().exact(), Some(0));
        assert_eq!(count(&none), 0, "The hint and the traversal should agree.");
    }

    #[test]
    fn test_consumers_on_nothing() {
        let none = Empty::<u64>::new();
        assert_eq!(sum(&none), 0, "The empty sum should be the additive identity.");
        assert_eq!(materialize(&none), [0_u64; 0]);
        assert_eq!(materialize_rev(&none), [0_u64; 0]);
    }
}

#[cfg(feature = "squares")]
mod squares {
    use crate::sequence::{ReverseSequence, Sequence, Step, count, materialize, materialize_rev, sum};
    use crate::sources::{Squares, SquaresBackState, SquaresState};

    #[test]
    fn test_forward_values() {
        let squares = Squares::first(7);
        assert_eq!(materialize(&squares), [1, 4, 9, 16, 25, 36, 49]);
        assert_eq!(sum(&squares), 140);
        assert_eq!(
            count(&squares),
            squares.length_hint().exact().expect("the length is known"),
            "Advancing to Done should take exactly the hinted number of yields."
        );
    }

    #[test]
    fn test_reverse_is_the_exact_mirror() {
        let squares = Squares::first(4);
        assert_eq!(materialize_rev(&squares), [16, 9, 4, 1]);
        assert_eq!(squares.rev_cursor().collect::<Vec<_>>(), [16, 9, 4, 1]);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let squares = Squares::first(7);
        let Ok(Step::Yield { state, .. }) = squares.advance(None) else {
            panic!("the first advance should yield");
        };
        assert_eq!(squares.advance(Some(&state)), squares.advance(Some(&state)));

        let Ok(Step::Yield { state: back, .. }) = squares.advance_back(None) else {
            panic!("the first reverse advance should yield");
        };
        assert_eq!(squares.advance_back(Some(&back)), squares.advance_back(Some(&back)));
    }

    #[test]
    fn test_foreign_states_are_rejected() {
        let squares = Squares::first(7);
        assert!(squares
            .advance(Some(&SquaresState {
                next: 0
            }))
            .is_err());
        assert!(
            squares
                .advance(Some(&SquaresState {
                    next: 9
                }))
                .is_err(),
            "A state from a longer Squares descriptor should be rejected."
        );
        assert!(squares
            .advance_back(Some(&SquaresBackState {
                next: 7
            }))
            .is_err());
    }

    #[test]
    fn test_zero_squares() {
        let none = Squares::first(0);
        assert_eq!(none.advance(None), Ok(Step::Done));
        assert_eq!(none.advance_back(None), Ok(Step::Done));
    }
}

#[cfg(feature = "fibonacci")]
mod fibonacci {
    use crate::sequence::{Sequence, Step, count, materialize};
    use crate::sources::{Fibonacci, FibonacciState};

    #[test]
    fn test_the_first_nine_terms() {
        let capped = Fibonacci::new().take(9);
        assert_eq!(materialize(&capped), [0, 1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn test_every_representable_term() {
        let all = materialize(&Fibonacci::new());
        assert_eq!(
            all.len(),
            Fibonacci::TERMS,
            "The sequence should end exactly when u64 runs out."
        );
        assert_eq!(all.last(), Some(&12_200_160_415_121_876_738));
        assert_eq!(count(&Fibonacci::new()), Fibonacci::TERMS);
    }

    #[test]
    fn test_exhaustion_is_repeatable() {
        let fibonacci = Fibonacci::new();
        let mut state = None;
        let last = loop {
            match fibonacci.advance(state.as_ref()).expect("own states must be accepted") {
                Step::Yield { state: next, .. } => state = Some(next),
                Step::Done => break state.expect("at least one term was yielded"),
            }
        };
        assert_eq!(fibonacci.advance(Some(&last)), Ok(Step::Done));
        assert_eq!(
            fibonacci.advance(Some(&last)),
            Ok(Step::Done),
            "Advancing past the end again should still report Done."
        );
    }

    #[test]
    fn test_forged_pairs_are_rejected() {
        let fibonacci = Fibonacci::new();
        let forged = FibonacciState::Running {
            yielded: 5,
            last: (3, 4),
        };
        assert!(
            fibonacci.advance(Some(&forged)).is_err(),
            "(3, 4) is not a Fibonacci pair and can't have been minted here."
        );
        let misplaced = FibonacciState::Running {
            yielded: 6,
            last: (2, 3),
        };
        assert!(
            fibonacci.advance(Some(&misplaced)).is_err(),
            "(2, 3) is a Fibonacci pair, but not for that position."
        );
    }
}

#[cfg(feature = "primes")]
mod primes {
    use crate::sequence::{ReverseSequence, Sequence, Step, contains, count, materialize, materialize_rev, sum};
    use crate::sources::{Primes, PrimesBackState, PrimesState};

    #[test]
    fn test_the_primes_below_thirty() {
        let primes = Primes::below(30);
        assert_eq!(materialize(&primes), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(count(&primes), primes.length_hint().exact().expect("the sieve was counted"));
    }

    #[test]
    fn test_membership() {
        let primes = Primes::below(100);
        assert!(contains(&primes, &97));
        assert!(!contains(&primes, &91), "91 = 7 × 13 should have been sieved out.");
    }

    #[test]
    fn test_streaming_matches_materialized() {
        let primes = Primes::below(100);
        let collected = materialize(&primes);
        assert_eq!(
            collected.iter().sum::<usize>(),
            sum(&primes),
            "Materializing then summing should equal summing the stream directly."
        );
        assert_eq!(sum(&primes), 1060);
    }

    #[test]
    fn test_reverse_scan() {
        let primes = Primes::below(30);
        let mut backwards = materialize_rev(&primes);
        backwards.reverse();
        assert_eq!(backwards, materialize(&primes));
    }

    #[test]
    fn test_tiny_limits() {
        assert_eq!(Primes::below(0).advance(None), Ok(Step::Done));
        assert_eq!(Primes::below(2).advance(None), Ok(Step::Done));
        assert_eq!(materialize(&Primes::below(3)), [2]);
    }

    #[test]
    fn test_foreign_states_are_rejected() {
        let primes = Primes::below(30);
        assert!(primes
            .advance(Some(&PrimesState {
                next: 0
            }))
            .is_err());
        assert!(primes
            .advance(Some(&PrimesState {
                next: 31
            }))
            .is_err());
        assert!(
            primes
                .advance_back(Some(&PrimesBackState {
                    below: 9
                }))
                .is_err(),
            "A reverse bound that isn't a prime can't have been minted here."
        );
    }
}

#[cfg(feature = "permutations")]
mod permutations {
    use crate::sequence::{Sequence, Step, count, materialize};
    use crate::sources::{Permutations, PermutationsState};

    #[test]
    fn test_three_letters_in_order() {
        let orders = Permutations::of(vec!['a', 'b', 'c']);
        assert_eq!(
            materialize(&orders),
            [
                vec!['a', 'b', 'c'],
                vec!['a', 'c', 'b'],
                vec!['b', 'a', 'c'],
                vec!['b', 'c', 'a'],
                vec!['c', 'a', 'b'],
                vec!['c', 'b', 'a'],
            ]
        );
    }

    #[test]
    fn test_count_is_the_factorial() {
        let orders = Permutations::of(vec![1_u8, 2, 3, 4]);
        assert_eq!(orders.length_hint().exact(), Some(24));
        assert_eq!(count(&orders), 24);
    }

    #[test]
    fn test_the_empty_arrangement() {
        let orders = Permutations::<u8>::of(Vec::new());
        assert_eq!(
            materialize(&orders),
            [Vec::<u8>::new()],
            "An empty vector has exactly one arrangement: the empty one."
        );
    }

    #[test]
    fn test_replay_is_deterministic() {
        let orders = Permutations::of(vec![1_u8, 2, 3]);
        let Ok(Step::Yield { state, .. }) = orders.advance(None) else {
            panic!("the first advance should yield");
        };
        assert_eq!(orders.advance(Some(&state)), orders.advance(Some(&state)));
    }

    #[test]
    fn test_foreign_arrangements_are_rejected() {
        let orders = Permutations::of(vec![1_u8, 2, 3]);
        assert!(orders
            .advance(Some(&PermutationsState {
                positions: vec![0, 1]
            }))
            .is_err());
        assert!(orders
            .advance(Some(&PermutationsState {
                positions: vec![0, 0, 2]
            }))
            .is_err());
        assert!(orders
            .advance(Some(&PermutationsState {
                positions: vec![0, 1, 3]
            }))
            .is_err());
    }
}

#[cfg(feature = "tree")]
mod tree {
    use crate::sequence::{ReverseSequence, Sequence, Step, materialize, materialize_rev};
    use crate::sources::{OrderedTree, TreeState};

    fn sample() -> OrderedTree<i32> {
        [50, 20, 80, 10, 30, 70, 90].into_iter().collect()
    }

    #[test]
    fn test_insert_and_contains() {
        let mut tree = OrderedTree::new();
        assert!(tree.is_empty());
        assert!(tree.insert(5));
        assert!(!tree.insert(5), "A duplicate insert should report false.");
        assert!(tree.insert(3));
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&3));
        assert!(!tree.contains(&4));
    }

    #[test]
    fn test_in_order_traversal() {
        let tree = sample();
        assert_eq!(materialize(&tree), [10, 20, 30, 50, 70, 80, 90]);
        assert_eq!(
            tree.length_hint().exact(),
            Some(7),
            "The hint should be the tree's length."
        );
    }

    #[test]
    fn test_reverse_traversal() {
        let tree = sample();
        assert_eq!(materialize_rev(&tree), [90, 80, 70, 50, 30, 20, 10]);
    }

    #[test]
    fn test_bookmarks_survive_unrelated_inserts() {
        let mut tree = sample();
        let Ok(Step::Yield { value, state }) = tree.advance(None) else {
            panic!("a non-empty tree should yield");
        };
        assert_eq!(value, 10);

        // The state is the value 10, which is still in the tree after growing it, so the
        // traversal resumes - and sees the new value in its ordered place.
        tree.insert(15);
        assert_eq!(
            tree.advance(Some(&state)).map(Step::into_parts),
            Ok(Some((
                15,
                TreeState {
                    last: 15
                }
            )))
        );
    }

    #[test]
    fn test_absent_values_are_rejected() {
        let tree = sample();
        assert!(
            tree.advance(Some(&TreeState {
                last: 42
            }))
            .is_err(),
            "A state holding a value this tree doesn't contain can't have come from it."
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = OrderedTree::<i32>::new();
        assert_eq!(tree.advance(None), Ok(Step::Done));
        assert_eq!(tree.advance_back(None), Ok(Step::Done));
    }
}

#[cfg(all(feature = "squares", feature = "fibonacci"))]
mod erased {
    use crate::sequence::{Erased, ErasedRev, SequenceError, Source, Step};
    use crate::sources::{Fibonacci, Squares};

    #[test]
    fn test_reverse_refused_where_the_capability_is_missing() {
        let source = Erased::new(Fibonacci::new());
        assert!(
            matches!(source.advance_back(None), Err(SequenceError::Unsupported(_))),
            "Fibonacci has no reverse; the erased layer should refuse, not guess."
        );
    }

    #[test]
    fn test_reverse_available_where_it_exists() {
        let source = ErasedRev::new(Squares::first(4));
        let mut values = Vec::new();
        let mut state = None;
        loop {
            match source.advance_back(state.as_ref()).expect("own tokens must be accepted") {
                Step::Yield { value, state: next } => {
                    values.push(value);
                    state = Some(next);
                },
                Step::Done => break,
            }
        }
        assert_eq!(values, [16, 9, 4, 1]);
    }

    #[test]
    fn test_tokens_do_not_travel_between_sources() {
        let squares = ErasedRev::new(Squares::first(4));
        let fibonacci = Erased::new(Fibonacci::new());

        let Ok(Step::Yield { state: token, .. }) = fibonacci.advance(None) else {
            panic!("the first advance should yield");
        };
        assert!(
            matches!(squares.advance(Some(&token)), Err(SequenceError::InvalidState(_))),
            "A token minted by Fibonacci should fail Squares' downcast."
        );

        let Ok(Step::Yield { state: forward, .. }) = squares.advance(None) else {
            panic!("the first advance should yield");
        };
        assert!(
            matches!(squares.advance_back(Some(&forward)), Err(SequenceError::InvalidState(_))),
            "Forward and reverse state spaces should stay independent even when erased."
        );
    }

    #[test]
    fn test_element_kind_survives_erasure() {
        let source = Erased::new(Fibonacci::new());
        assert!(source.element_kind().is::<u64>());
    }
}
