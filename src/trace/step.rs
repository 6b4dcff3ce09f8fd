//! Step and trace types.
//!
//! A `Step` is an immutable snapshot of the sort at one instant. Fields are
//! private so that consumers (renderers, exporters) can only read them.

use std::fmt;

use serde::Serialize;

/// Kind of event a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Initial state before any work
    Init,
    /// The last element of the active range was chosen as pivot
    PivotSelected,
    /// The boundary pointer `i` was placed at `low - 1`
    RangeStart,
    /// `array[j]` is compared against the pivot
    Compare,
    /// `array[j]` was moved into the "smaller than pivot" region
    Swap,
    /// The pivot was moved to its final position in the range
    PartitionDone,
    /// Fully sorted
    Complete,
}

impl StepKind {
    /// Short machine-friendly label (matches the serialized form).
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::PivotSelected => "pivot-selected",
            StepKind::RangeStart => "range-start",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::PartitionDone => "partition-done",
            StepKind::Complete => "complete",
        }
    }

    /// Line of `REFERENCE_LISTING` executing when this step is emitted.
    pub fn source_line(&self) -> usize {
        match self {
            StepKind::Init | StepKind::Complete => 0,
            StepKind::PivotSelected => 7,
            StepKind::RangeStart => 8,
            StepKind::Compare => 10,
            StepKind::Swap => 12,
            StepKind::PartitionDone => 13,
        }
    }
}

/// Inclusive `[low, high]` sub-range being partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveRange {
    pub low: usize,
    pub high: usize,
}

impl ActiveRange {
    pub fn new(low: usize, high: usize) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    /// Whether `idx` lies inside the range.
    pub fn contains(&self, idx: usize) -> bool {
        idx >= self.low && idx <= self.high
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.high - self.low + 1
    }

    /// Always false: a range covers at least one position.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ActiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

/// One immutable snapshot of the algorithm state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    array: Vec<i64>,
    indices: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boundary: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pivot_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_range: Option<ActiveRange>,
    #[serde(rename = "stepKind")]
    kind: StepKind,
    narration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_line: Option<usize>,
}

impl Step {
    pub(crate) fn new(kind: StepKind, array: Vec<i64>, narration: String) -> Self {
        Self {
            array,
            indices: Vec::new(),
            boundary: None,
            pivot_index: None,
            active_range: None,
            kind,
            narration,
            source_line: Some(kind.source_line()),
        }
    }

    pub(crate) fn with_indices(mut self, indices: Vec<usize>) -> Self {
        self.indices = indices;
        self
    }

    /// Record the boundary pointer. Non-negative values are also pushed to
    /// the front of `indices`, since they are real positions.
    pub(crate) fn with_boundary(mut self, boundary: isize) -> Self {
        self.boundary = Some(boundary);
        if let Ok(pos) = usize::try_from(boundary) {
            self.indices.insert(0, pos);
        }
        self
    }

    pub(crate) fn with_pivot(mut self, pivot_index: usize) -> Self {
        self.pivot_index = Some(pivot_index);
        self
    }

    pub(crate) fn with_range(mut self, range: ActiveRange) -> Self {
        self.active_range = Some(range);
        self
    }

    /// Array contents at this instant.
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// Positions under inspection (0-2 entries, or every position on `Complete`).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Raw Lomuto boundary pointer `i`; may be `-1`.
    pub fn boundary(&self) -> Option<isize> {
        self.boundary
    }

    pub fn pivot_index(&self) -> Option<usize> {
        self.pivot_index
    }

    pub fn active_range(&self) -> Option<ActiveRange> {
        self.active_range
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn narration(&self) -> &str {
        &self.narration
    }

    pub fn source_line(&self) -> Option<usize> {
        self.source_line
    }

    /// Whether `idx` is one of the inspected positions.
    pub fn is_selected(&self, idx: usize) -> bool {
        self.indices.contains(&idx)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15}{:?}", self.kind.label(), self.array)?;
        if !self.indices.is_empty() {
            write!(f, " idx={:?}", self.indices)?;
        }
        if let Some(i) = self.boundary {
            write!(f, " i={}", i)?;
        }
        if let Some(p) = self.pivot_index {
            write!(f, " pivot={}", p)?;
        }
        if let Some(r) = self.active_range {
            write!(f, " range={}", r)?;
        }
        Ok(())
    }
}

/// Ordered, immutable sequence of steps for one input.
///
/// Always starts with `Init` and ends with `Complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(steps.len() >= 2);
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a generated trace.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Step> {
        self.steps.get(idx)
    }

    /// The `Init` step.
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// The `Complete` step.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The `Complete` step's array.
    pub fn sorted(&self) -> &[i64] {
        self.last().map(Step::array).unwrap_or(&[])
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
