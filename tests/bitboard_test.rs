use linar::{Bitboard, Elementwise, OutOfBounds, ParseBitboardError};
use proptest::prelude::*;

#[test]
fn zeros_reads_zero_at_every_index() {
    let board = Bitboard::zeros();
    for index in 0..Bitboard::WIDTH {
        assert_eq!(board.bit(index), Ok(false));
    }
}

#[test]
fn ones_reads_one_at_every_index() {
    let board = Bitboard::ones();
    for index in 0..Bitboard::WIDTH {
        assert_eq!(board.bit(index), Ok(true));
    }
}

#[test]
fn indexing_past_the_width_is_rejected() {
    let mut board = Bitboard::zeros();
    assert_eq!(board.bit(64), Err(OutOfBounds { index: 64, length: 64 }));
    assert_eq!(board.set_bit(100, true), Err(OutOfBounds { index: 100, length: 64 }));
}

#[test]
fn parsing_rejects_decimal_digits() {
    assert_eq!(
        Bitboard::from_binary("2"),
        Err(ParseBitboardError::InvalidDigit {
            character: '2',
            position: 0
        })
    );
}

#[test]
fn parsing_rejects_sixty_five_bit_magnitudes() {
    let wide = "1".repeat(65);
    assert_eq!(Bitboard::from_binary(&wide), Err(ParseBitboardError::Overflow));
}

#[test]
fn scans_are_none_on_an_all_zero_board() {
    assert_eq!(Bitboard::zeros().first_bit(), None);
    assert_eq!(Bitboard::zeros().last_bit(), None);
}

#[test]
fn scans_count_from_opposite_ends() {
    let mut lowest = Bitboard::zeros();
    lowest.set_bit(63, true).unwrap();
    assert_eq!(lowest.first_bit(), Some(0));
    assert_eq!(lowest.last_bit(), Some(63));

    let mut highest = Bitboard::zeros();
    highest.set_bit(0, true).unwrap();
    assert_eq!(highest.first_bit(), Some(63));
    assert_eq!(highest.last_bit(), Some(0));
}

#[test]
fn display_and_debug_use_the_canonical_form() {
    let board = Bitboard::from_bits(5);
    let canonical = board.to_binary();
    assert_eq!(canonical.len(), 64);
    assert_eq!(format!("{board}"), canonical);
    assert_eq!(format!("{board:?}"), format!("Bitboard({canonical})"));
}

#[test]
fn chained_shifts_apply_in_order() {
    let mut board = Bitboard::from_bits(0b1);
    board.shift_left(4).shift_right(1).shift_left(2);
    assert_eq!(u64::from(board), 0b100000);
}

#[test]
fn shifting_by_the_width_or_more_clears_the_board() {
    let mut leftward = Bitboard::ones();
    leftward.shift_left(64);
    assert!(leftward.is_zero());

    let mut rightward = Bitboard::ones();
    rightward.shift_right(usize::MAX);
    assert!(rightward.is_zero());
}

#[test]
fn bit_iteration_reports_its_remaining_length() {
    let mut bits = Bitboard::ones().iter();
    assert_eq!(bits.len(), 64);
    bits.next();
    assert_eq!(bits.len(), 63);
    assert_eq!(bits.count(), 63);
}

#[test]
fn random_boards_vary() {
    let mut generator = rand::thread_rng();
    let first = Bitboard::random(&mut generator);
    let all_equal = (0..16).all(|_| Bitboard::random(&mut generator) == first);
    assert!(!all_equal);
}

proptest! {
    #[test]
    fn round_trips_the_zero_padded_literal(literal in arbitrary_binary_literal(64)) {
        let board = Bitboard::from_binary(&literal).unwrap();
        let mut padded = "0".repeat(64 - literal.len());
        padded.push_str(&literal);
        assert_eq!(board.to_binary(), padded);
    }

    #[test]
    fn parses_anything_the_board_itself_prints(board in arbitrary_board()) {
        let reparsed: Bitboard = board.to_binary().parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn self_operation_is_idempotent_for_and_and_or(board in arbitrary_board()) {
        assert_eq!(board.and_with(&board), board);
        assert_eq!(board.or_with(&board), board);
    }

    #[test]
    fn self_xor_clears_every_bit(board in arbitrary_board()) {
        assert_eq!(board.xor_with(&board), Bitboard::zeros());
    }

    #[test]
    fn elementwise_results_match_the_integer_operations(left in arbitrary_board(), right in arbitrary_board()) {
        assert_eq!(u64::from(left.and_with(&right)), u64::from(left) & u64::from(right));
        assert_eq!(u64::from(left.or_with(&right)), u64::from(left) | u64::from(right));
        assert_eq!(u64::from(left.xor_with(&right)), u64::from(left) ^ u64::from(right));
    }

    #[test]
    fn operator_sugar_matches_the_named_methods(left in arbitrary_board(), right in arbitrary_board()) {
        assert_eq!(left & right, left.and_with(&right));
        assert_eq!(left | right, left.or_with(&right));
        assert_eq!(left ^ right, left.xor_with(&right));

        let mut compound = left;
        compound &= right;
        assert_eq!(compound, left.and_with(&right));
        compound = left;
        compound |= right;
        assert_eq!(compound, left.or_with(&right));
        compound = left;
        compound ^= right;
        assert_eq!(compound, left.xor_with(&right));
    }

    #[test]
    fn left_then_right_shift_restores_the_surviving_bits(board in arbitrary_board(), distance in 0usize..64) {
        let surviving = Bitboard::from_bits(u64::from(board) >> distance);
        let mut shifted = surviving;
        shifted.shift_left(distance).shift_right(distance);
        assert_eq!(shifted, surviving);
    }

    #[test]
    fn right_then_left_shift_restores_the_surviving_bits(board in arbitrary_board(), distance in 0usize..64) {
        let surviving = Bitboard::from_bits((u64::from(board) >> distance) << distance);
        let mut shifted = surviving;
        shifted.shift_right(distance).shift_left(distance);
        assert_eq!(shifted, surviving);
    }

    #[test]
    fn setting_one_bit_rewrites_one_character(board in arbitrary_board(), index in 0usize..64, value in any::<bool>()) {
        let before = board.to_binary();
        let mut edited = board;
        edited.set_bit(index, value).unwrap();
        let after = edited.to_binary();
        for (position, (old, new)) in before.chars().zip(after.chars()).enumerate() {
            if position == index {
                assert_eq!(new, if value { '1' } else { '0' });
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn bits_read_back_what_the_canonical_form_shows(board in arbitrary_board()) {
        for (index, character) in board.to_binary().chars().enumerate() {
            assert_eq!(board.bit(index), Ok(character == '1'));
        }
    }

    #[test]
    fn weight_counts_the_set_bits(board in arbitrary_board()) {
        assert_eq!(board.weight(), board.iter().filter(|bit| *bit).count());
        assert_eq!(board.weight(), board.support().count());
    }

    #[test]
    fn scans_agree_with_the_support_indices(board in arbitrary_board()) {
        let support: Vec<usize> = board.support().collect();
        assert_eq!(board.last_bit(), support.first().copied());
        assert_eq!(board.first_bit(), support.last().map(|index| 63 - index));
    }

    #[test]
    fn iteration_is_most_significant_first(board in arbitrary_board()) {
        let bits: Vec<bool> = board.iter().collect();
        assert_eq!(bits.len(), 64);
        for (index, bit) in bits.iter().enumerate() {
            assert_eq!(board.bit(index), Ok(*bit));
        }
    }

    #[test]
    fn assignment_replaces_the_whole_value(board in arbitrary_board(), replacement in arbitrary_binary_literal(64)) {
        let mut overwritten = board;
        overwritten.assign_binary(&replacement).unwrap();
        assert_eq!(overwritten, Bitboard::from_binary(&replacement).unwrap());
    }
}

fn arbitrary_board() -> impl Strategy<Value = Bitboard> {
    any::<u64>().prop_map(Bitboard::from_bits)
}

fn arbitrary_binary_literal(max_length: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), 1..=max_length)
        .prop_map(|bits| bits.into_iter().map(|bit| if bit { '1' } else { '0' }).collect())
}
