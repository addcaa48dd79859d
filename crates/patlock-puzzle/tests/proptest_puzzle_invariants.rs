//! Property-based invariant tests for target generation and verification.
//!
//! 1. Generated targets have 2..=4 real digits and a ten-digit hint ending in n
//! 2. Four-digit targets never repeat the second digit's residue in the fourth
//! 3. Every generated target has a non-repeating solution
//! 4. Verification depends only on residues, never on exact labels
//! 5. Failure counter never reaches the threshold between calls

use patlock_layout::PointLabel;
use patlock_puzzle::{
    DISPLAY_LEN, FAILURE_THRESHOLD, PatternGenerator, PatternVerifier, TargetPattern, Verdict,
    canonical_solution, matches,
};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = PointLabel> {
    (1u8..=9).prop_map(|n| PointLabel::new(n).expect("label in range"))
}

fn sequence_strategy() -> impl Strategy<Value = Vec<PointLabel>> {
    proptest::collection::vec(label_strategy(), 0..9)
}

/// Same column, any row: residue-preserving relabel.
fn shift_rows(label: PointLabel, by: u8) -> PointLabel {
    PointLabel::from_cell((label.row() + by) % 3, label.column()).expect("cell in range")
}

proptest! {
    #[test]
    fn generated_targets_are_well_formed(seed in any::<u64>()) {
        let mut generator = PatternGenerator::seeded(seed);
        for _ in 0..16 {
            let pattern = generator.generate();
            let n = pattern.len();
            prop_assert!((2..=4).contains(&n));
            prop_assert_eq!(pattern.display().len(), DISPLAY_LEN);
            prop_assert_eq!(pattern.display().as_bytes()[DISPLAY_LEN - 1], b'0' + n as u8);
            prop_assert!(pattern.display().bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn fourth_digit_never_shares_second_residue(seed in any::<u64>()) {
        let mut generator = PatternGenerator::seeded(seed);
        for _ in 0..16 {
            let pattern = generator.generate();
            if let [_, second, _, fourth] = *pattern.digits() {
                prop_assert_ne!(second % 3, fourth % 3);
            }
        }
    }

    #[test]
    fn generated_targets_are_solvable(seed in any::<u64>()) {
        let mut generator = PatternGenerator::seeded(seed);
        for _ in 0..16 {
            let pattern = generator.generate();
            let solution = canonical_solution(&pattern);
            prop_assert!(solution.is_some());
            let solution = solution.unwrap_or_default();
            let mut sorted = solution.to_vec();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), solution.len());
            prop_assert!(matches(&solution, &pattern));
        }
    }

    #[test]
    fn verification_is_residue_only(
        seed in any::<u64>(),
        sequence in sequence_strategy(),
        shift in 0u8..3,
    ) {
        let pattern = PatternGenerator::seeded(seed).generate();
        let shifted: Vec<PointLabel> = sequence.iter().map(|l| shift_rows(*l, shift)).collect();
        prop_assert_eq!(matches(&sequence, &pattern), matches(&shifted, &pattern));
    }

    #[test]
    fn digit_substitution_preserves_match(
        digits in proptest::collection::vec(0u8..=9, 2..=3),
        sequence in sequence_strategy(),
    ) {
        let original = TargetPattern::from_digits(&digits, || 0).expect("valid digits");
        let bumped: Vec<u8> = digits.iter().map(|d| if *d + 3 <= 9 { d + 3 } else { d - 3 }).collect();
        let bumped = TargetPattern::from_digits(&bumped, || 0).expect("valid digits");
        prop_assert_eq!(matches(&sequence, &original), matches(&sequence, &bumped));
    }

    #[test]
    fn counter_stays_below_threshold(
        seed in any::<u64>(),
        attempts in proptest::collection::vec(sequence_strategy(), 1..20),
    ) {
        let mut verifier = PatternVerifier::new(PatternGenerator::seeded(seed));
        for attempt in &attempts {
            let before = verifier.failures();
            let verdict = verifier.verify(attempt);
            prop_assert!(verifier.failures() < FAILURE_THRESHOLD);
            match verdict {
                Verdict::Matched => {
                    prop_assert_eq!(verifier.failures(), before);
                }
                Verdict::Mismatch { failures } => {
                    prop_assert_eq!(failures, before + 1);
                    prop_assert_eq!(verifier.failures(), failures);
                }
                Verdict::Regenerated => {
                    prop_assert_eq!(before, FAILURE_THRESHOLD - 1);
                    prop_assert_eq!(verifier.failures(), 0);
                }
            }
        }
    }
}
