use crate::classify::{Category, CategoryLabel};
use hashbrown::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct TallyState {
    counts: HashMap<CategoryLabel, u64>,
    total: u64,
    files: u64,
}

/// Shared per-category line counts.
///
/// Every mutation goes through [`Tally::record`], which updates the category
/// count and the grand total inside one critical section.
#[derive(Debug, Default)]
pub struct Tally {
    state: Mutex<TallyState>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `lines` to `category`, and to the grand total when it is code.
    pub fn record(&self, category: &Category, lines: u64) {
        let mut state = self.lock();
        *state.counts.entry(category.label()).or_insert(0) += lines;
        if category.is_code() {
            state.total += lines;
        }
        state.files += 1;
    }

    /// Consume the tally once every writer has finished.
    pub fn into_summary(self) -> Summary {
        // Both increments in `record` happen before the guard drops, so a
        // poisoned state is still consistent.
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Summary::from_state(state)
    }

    fn lock(&self) -> MutexGuard<'_, TallyState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Finalized, read-only result of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Code categories, most lines first, ties broken by label.
    pub rows: Vec<(CategoryLabel, u64)>,
    /// Lines in files classified as `other`; tracked but never reported.
    pub other_lines: u64,
    pub total: u64,
    /// Files that were read successfully.
    pub files: u64,
}

impl Summary {
    fn from_state(state: TallyState) -> Self {
        let other = CategoryLabel::other();
        let mut other_lines = 0;
        let mut rows = Vec::with_capacity(state.counts.len());
        for (label, lines) in state.counts {
            if label == other {
                other_lines = lines;
            } else {
                rows.push((label, lines));
            }
        }
        rows.sort_by(|(la, a), (lb, b)| b.cmp(a).then_with(|| la.cmp(lb)));

        Self {
            rows,
            other_lines,
            total: state.total,
            files: state.files,
        }
    }

    pub fn lines_for(&self, category: &Category) -> Option<u64> {
        if matches!(category, Category::Other) {
            return Some(self.other_lines).filter(|&n| n > 0);
        }
        let label = category.label();
        self.rows
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, lines)| *lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_tracked_but_not_totalled() {
        let tally = Tally::new();
        tally.record(&Category::Code("rs".into()), 10);
        tally.record(&Category::Other, 7);
        tally.record(&Category::Dockerfile, 3);

        let summary = tally.into_summary();
        assert_eq!(summary.total, 13);
        assert_eq!(summary.other_lines, 7);
        assert_eq!(summary.files, 3);
        assert!(summary.rows.iter().all(|(l, _)| *l != CategoryLabel::other()));
    }

    #[test]
    fn same_category_accumulates() {
        let tally = Tally::new();
        tally.record(&Category::Code("py".into()), 4);
        tally.record(&Category::Code("py".into()), 6);

        let summary = tally.into_summary();
        assert_eq!(summary.lines_for(&Category::Code("py".into())), Some(10));
        assert_eq!(summary.rows.len(), 1);
    }

    #[test]
    fn zero_line_files_still_produce_a_row() {
        let tally = Tally::new();
        tally.record(&Category::Code("md".into()), 0);

        let summary = tally.into_summary();
        assert_eq!(summary.rows, vec![(Category::Code("md".into()).label(), 0)]);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn rows_sorted_by_lines_then_label() {
        let tally = Tally::new();
        tally.record(&Category::Code("go".into()), 5);
        tally.record(&Category::Code("rs".into()), 50);
        tally.record(&Category::Code("c".into()), 5);

        let labels: Vec<_> = tally
            .into_summary()
            .rows
            .into_iter()
            .map(|(l, n)| (l.to_string(), n))
            .collect();
        let mut tied = vec![
            Category::Code("go".into()).label().to_string(),
            Category::Code("c".into()).label().to_string(),
        ];
        tied.sort();
        assert_eq!(labels[0], ("🦀 rs".to_string(), 50));
        assert_eq!(labels[1].0, tied[0]);
        assert_eq!(labels[2].0, tied[1]);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        const THREADS: u64 = 16;
        const PER_THREAD: u64 = 1_000;
        const LINES: u64 = 3;

        let tally = Tally::new();
        std::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    for _ in 0..PER_THREAD {
                        tally.record(&Category::Code("rs".into()), LINES);
                        tally.record(&Category::Other, 1);
                    }
                });
            }
        });

        let summary = tally.into_summary();
        let n = THREADS * PER_THREAD;
        assert_eq!(summary.lines_for(&Category::Code("rs".into())), Some(n * LINES));
        assert_eq!(summary.total, n * LINES);
        assert_eq!(summary.other_lines, n);
        assert_eq!(summary.files, n * 2);
    }
}
