//! Instrumented Lomuto quicksort.
//!
//! The sort runs over a single working copy of the input. Every emitted step
//! stores its own copy of the array, so the finished trace is a sequence of
//! independent snapshots that can be replayed in any order.

use tracing::debug;

use super::error::TraceError;
use super::narration::Locale;
use super::step::{ActiveRange, Step, StepKind, Trace};

/// Generate a trace with English narration.
pub fn generate(input: &[i64]) -> Result<Trace, TraceError> {
    generate_with_locale(input, Locale::default())
}

/// Generate the full trace for `input`.
///
/// Sub-ranges are processed depth-first, left before right. Ranges are kept
/// on an explicit stack, so long already-sorted inputs don't grow the call
/// stack.
///
/// # Errors
/// `TraceError::InvalidInput` if `input` is empty.
pub fn generate_with_locale(input: &[i64], locale: Locale) -> Result<Trace, TraceError> {
    if input.is_empty() {
        return Err(TraceError::InvalidInput {
            reason: "input array is empty",
        });
    }

    let mut acc = Accumulator::new(input, locale);
    acc.emit(Step::new(StepKind::Init, acc.snapshot(), locale.start()));

    let mut pending = vec![(0, input.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        // Singletons are already in place and record nothing.
        if low >= high {
            continue;
        }
        let pi = acc.partition(low, high);
        // Right pushed first so the left range pops first.
        if pi < high {
            pending.push((pi + 1, high));
        }
        if pi > low {
            pending.push((low, pi - 1));
        }
    }

    let every_index = (0..input.len()).collect();
    acc.emit(Step::new(StepKind::Complete, acc.snapshot(), locale.complete()).with_indices(every_index));

    let trace = Trace::from_steps(acc.steps);
    debug!(len = input.len(), steps = trace.len(), "generated trace");
    Ok(trace)
}

/// Working array plus the steps recorded so far.
struct Accumulator {
    array: Vec<i64>,
    steps: Vec<Step>,
    locale: Locale,
}

impl Accumulator {
    fn new(input: &[i64], locale: Locale) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
            locale,
        }
    }

    fn snapshot(&self) -> Vec<i64> {
        self.array.clone()
    }

    fn emit(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Partition `[low, high]` around `array[high]` and return the pivot's
    /// final position. Requires `low < high`.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let range = ActiveRange::new(low, high);
        let pivot = self.array[high];
        let locale = self.locale;

        self.emit(
            Step::new(StepKind::PivotSelected, self.snapshot(), locale.pivot_selected(pivot))
                .with_pivot(high)
                .with_range(range),
        );

        // `next` is always `i + 1`: the slot the next smaller element moves to.
        let mut next = low;
        self.emit(
            Step::new(StepKind::RangeStart, self.snapshot(), locale.range_start(low, high))
                .with_boundary(boundary(next))
                .with_pivot(high)
                .with_range(range),
        );

        for j in low..high {
            self.emit(
                Step::new(StepKind::Compare, self.snapshot(), locale.compare(pivot, self.array[j]))
                    .with_indices(vec![j])
                    .with_boundary(boundary(next))
                    .with_pivot(high)
                    .with_range(range),
            );

            // Strict comparison: values equal to the pivot stay right.
            if self.array[j] < pivot {
                self.array.swap(next, j);
                self.emit(
                    Step::new(StepKind::Swap, self.snapshot(), locale.swap(self.array[next], next))
                        .with_indices(vec![j])
                        .with_boundary(next as isize)
                        .with_pivot(high)
                        .with_range(range),
                );
                next += 1;
            }
        }

        self.array.swap(next, high);
        self.emit(
            Step::new(StepKind::PartitionDone, self.snapshot(), locale.partition_done(pivot, next))
                .with_indices(vec![next])
                .with_pivot(next)
                .with_range(range),
        );

        next
    }
}

/// Lomuto `i` for a given insertion slot.
fn boundary(next: usize) -> isize {
    next as isize - 1
}
