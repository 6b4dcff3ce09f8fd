//! Trace generation properties checked over many inputs

use qss::trace::{generate, generate_with_locale, Locale, StepKind, TraceError, REFERENCE_LISTING};

use crate::helpers::permutations;

fn sample_inputs() -> Vec<Vec<i64>> {
    let mut inputs = vec![
        vec![7],
        vec![3, 3, 3, 3],
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![5, 1, 5, 1, 5],
        vec![-4, 10, 0, -4, 22, 7, 7],
        vec![15, 94, 33, 42, 80, 16, 61, 27, 58, 71, 19, 88],
    ];
    inputs.extend(permutations(&[4, 1, 3, 2]));
    inputs.extend(permutations(&[2, 2, 1, 3]));
    inputs
}

fn sorted_copy(input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

// ============================================================================
// Postconditions
// ============================================================================

#[test]
fn last_step_is_sorted_permutation_of_input() {
    for input in sample_inputs() {
        let trace = generate(&input).unwrap();
        assert_eq!(trace.sorted(), sorted_copy(&input).as_slice(), "input {:?}", input);
    }
}

#[test]
fn every_step_array_is_a_permutation_of_input() {
    for input in sample_inputs() {
        let expected = sorted_copy(&input);
        for step in generate(&input).unwrap().iter() {
            assert_eq!(sorted_copy(step.array()), expected);
        }
    }
}

#[test]
fn trace_is_framed_by_init_and_complete() {
    for input in sample_inputs() {
        let trace = generate(&input).unwrap();
        assert!(trace.len() >= 2);

        let first = trace.first().unwrap();
        assert_eq!(first.kind(), StepKind::Init);
        assert!(first.indices().is_empty());
        assert_eq!(first.pivot_index(), None);
        assert_eq!(first.active_range(), None);
        assert_eq!(first.array(), input.as_slice());

        let last = trace.last().unwrap();
        assert_eq!(last.kind(), StepKind::Complete);
        let all: Vec<usize> = (0..input.len()).collect();
        assert_eq!(last.indices(), all.as_slice());
    }
}

#[test]
fn indices_pivot_and_range_stay_in_bounds() {
    for input in sample_inputs() {
        let len = input.len();
        for step in generate(&input).unwrap().iter() {
            assert!(step.indices().iter().all(|&i| i < len), "{}", step);
            if let Some(p) = step.pivot_index() {
                assert!(p < len, "{}", step);
            }
            if let Some(range) = step.active_range() {
                assert!(range.low <= range.high && range.high < len, "{}", step);
            }
            if let Some(line) = step.source_line() {
                assert!(line < REFERENCE_LISTING.len());
            }
        }
    }
}

#[test]
fn boundary_never_drops_below_range_start_minus_one() {
    for input in sample_inputs() {
        for step in generate(&input).unwrap().iter() {
            if let (Some(i), Some(range)) = (step.boundary(), step.active_range()) {
                assert!(i >= range.low as isize - 1, "{}", step);
                assert!(i < range.high as isize, "{}", step);
            }
        }
    }
}

// ============================================================================
// Determinism and immutability
// ============================================================================

#[test]
fn generate_is_deterministic() {
    for input in sample_inputs() {
        assert_eq!(generate(&input).unwrap(), generate(&input).unwrap());
    }
}

#[test]
fn copying_a_step_array_does_not_touch_other_steps() {
    let trace = generate(&[5, 2, 8, 1]).unwrap();
    let before = trace.clone();

    let mut copy = trace.get(1).unwrap().array().to_vec();
    copy[0] = 999;

    assert_eq!(trace, before);
    assert_eq!(trace.get(1).unwrap().array(), &[5, 2, 8, 1]);
    assert_eq!(trace.get(0).unwrap().array(), &[5, 2, 8, 1]);
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn single_element_yields_init_and_complete() {
    let trace = generate(&[42]).unwrap();
    let kinds: Vec<StepKind> = trace.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![StepKind::Init, StepKind::Complete]);
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(generate(&[]), Err(TraceError::InvalidInput { .. })));
}

#[test]
fn compare_count_is_quadratic_for_sorted_input() {
    let input: Vec<i64> = (1..=8).collect();
    let compares = generate(&input)
        .unwrap()
        .iter()
        .filter(|s| s.kind() == StepKind::Compare)
        .count();
    assert_eq!(compares, 8 * 7 / 2);
}

#[test]
fn every_pivot_selection_is_followed_by_range_start() {
    let trace = generate(&[9, 4, 7, 1, 8, 2]).unwrap();
    let steps = trace.steps();
    for (i, step) in steps.iter().enumerate() {
        if step.kind() == StepKind::PivotSelected {
            assert_eq!(steps[i + 1].kind(), StepKind::RangeStart);
        }
    }
}

#[test]
fn partition_done_places_pivot_at_sorted_position() {
    let input = vec![9, 4, 7, 1, 8, 2];
    let sorted = sorted_copy(&input);
    for step in generate(&input).unwrap().iter() {
        if step.kind() == StepKind::PartitionDone {
            let p = step.pivot_index().unwrap();
            assert_eq!(step.array()[p], sorted[p], "{}", step);
        }
    }
}

#[test]
fn locale_changes_narration_only() {
    let input = [3, 1, 2];
    let en = generate_with_locale(&input, Locale::En).unwrap();
    let ja = generate_with_locale(&input, Locale::Ja).unwrap();

    assert_eq!(en.len(), ja.len());
    for (a, b) in en.iter().zip(ja.iter()) {
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.array(), b.array());
        assert_eq!(a.indices(), b.indices());
        assert_ne!(a.narration(), b.narration());
    }
}
