use learnly_core::*;
use proptest::prelude::*;

// --- STRATEGIES ---

#[derive(Clone, Debug)]
enum SpellingOp {
    Place(char),
    Remove(usize),
    Backspace,
    Hint,
    Reset,
}

fn arb_op() -> impl Strategy<Value = SpellingOp> {
    prop_oneof![
        4 => (b'A'..=b'Z').prop_map(|b| SpellingOp::Place(char::from(b))),
        2 => (0usize..6).prop_map(SpellingOp::Remove),
        1 => Just(SpellingOp::Backspace),
        2 => Just(SpellingOp::Hint),
        1 => Just(SpellingOp::Reset),
    ]
}

fn arb_word() -> impl Strategy<Value = &'static str> {
    let words: Vec<&'static str> = Difficulty::ALL
        .into_iter()
        .flat_map(|difficulty| spelling_pool(difficulty).iter().map(|entry| entry.word))
        .collect();
    proptest::sample::select(words)
}

fn sorted(letters: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut letters: Vec<char> = letters.into_iter().collect();
    letters.sort_unstable();
    letters
}

fn holds_every_letter(puzzle: &SpellingPuzzle) -> bool {
    let held = puzzle
        .bank()
        .iter()
        .copied()
        .chain(puzzle.slots().iter().flatten().copied());
    sorted(held) == sorted(puzzle.word().chars())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn generated_boards_have_clamped_target_count(
        size in 1u8..=12,
        targets in 0u16..200,
        seed in any::<u64>()
    ) {
        let board = generate_board(size, targets, &mut SeededRandom::new(seed)).unwrap();

        let expected = targets.clamp(1, mult(size, size));
        prop_assert_eq!(board.targets().count(), usize::from(expected));
        prop_assert!(board.cells().filter(|cell| !cell.is_target()).all(|cell| cell.color() == ColorId::Concealed));
    }

    #[test]
    fn conceal_is_idempotent(size in 1u8..=6, targets in 1u16..36, seed in any::<u64>()) {
        let mut rng = SeededRandom::new(seed);
        let mut round = MemoryRound::new(generate_board(size, targets, &mut rng).unwrap());

        round.conceal_all(&mut rng).unwrap();
        let first = round.board().palette().counts();
        round.conceal_all(&mut rng).unwrap();

        prop_assert_eq!(round.board().palette().counts(), first);
        prop_assert_eq!(round.board().palette().len(), usize::from(round.board().target_count()));
    }

    #[test]
    fn revealing_every_target_solves(size in 1u8..=6, targets in 1u16..36, seed in any::<u64>()) {
        let mut rng = SeededRandom::new(seed);
        let mut session = MatchSession::for_difficulty(Difficulty::Easy);
        let mut round = MemoryRound::new(generate_board(size, targets, &mut rng).unwrap());
        round.conceal_all(&mut rng).unwrap();

        let targets: Vec<_> = round.board().targets().map(|cell| (cell.index(), cell.color())).collect();
        for &(index, color) in &targets {
            prop_assert!(round.try_place(&mut session, index, color).unwrap().has_update());
        }

        prop_assert!(round.is_solved());
        prop_assert!(round.board().palette().is_empty());
        for (index, color) in targets {
            prop_assert_eq!(round.try_place(&mut session, index, color).unwrap(), PlaceOutcome::AlreadyFilled);
        }
    }

    #[test]
    fn spelling_keeps_letter_multiset(
        word in arb_word(),
        ops in proptest::collection::vec(arb_op(), 0..40),
        seed in any::<u64>()
    ) {
        let mut rng = SeededRandom::new(seed);
        let mut puzzle = SpellingPuzzle::new(word, &mut rng).unwrap();
        prop_assert!(holds_every_letter(&puzzle));

        for op in ops {
            let before = puzzle.clone();
            let changed = match op {
                SpellingOp::Place(letter) => puzzle.place(letter).has_update(),
                SpellingOp::Remove(index) => match puzzle.remove_at(index, &mut rng) {
                    Ok(outcome) => outcome.has_update(),
                    Err(err) => {
                        prop_assert_eq!(err, GameError::InvalidSlot);
                        false
                    }
                },
                SpellingOp::Backspace => puzzle.backspace_last(&mut rng).has_update(),
                SpellingOp::Hint => puzzle.hint(&mut rng).has_update(),
                SpellingOp::Reset => {
                    puzzle.reset(&mut rng);
                    true
                }
            };
            if !changed {
                prop_assert_eq!(&puzzle, &before);
            }
            prop_assert!(holds_every_letter(&puzzle));
        }
    }

    #[test]
    fn hints_always_finish_the_word(word in arb_word(), seed in any::<u64>()) {
        let mut rng = SeededRandom::new(seed);
        let mut puzzle = SpellingPuzzle::new(word, &mut rng).unwrap();

        // a wrong first pass, then hints clean it up
        let mut bank: Vec<char> = puzzle.bank().to_vec();
        bank.reverse();
        for letter in bank {
            puzzle.place(letter);
        }
        let mut hints = 0;
        while puzzle.hint(&mut rng).has_update() {
            hints += 1;
            prop_assert!(hints <= 2 * word.len());
        }

        prop_assert!(puzzle.is_complete());
        prop_assert_eq!(puzzle.status(), SpellingStatus::Solved);
    }

    #[test]
    fn similarity_stays_in_range(expected in "[a-zA-Z]{0,10}", heard in "[a-zA-Z ]{0,12}") {
        let result = similarity(&expected, &heard);

        prop_assert!(result.normalized_score <= 100);
        prop_assert_eq!(result.exact_match, expected.to_lowercase() == heard.to_lowercase());
        if result.exact_match {
            prop_assert_eq!(result.normalized_score, 100);
        }
        prop_assert_eq!(result.raw_distance, edit_distance(&expected.to_lowercase(), &heard.to_lowercase()));
    }
}
