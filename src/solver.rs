//! Solve orchestration: forward table build, then backward selection.
//!
//! A solve is a one-shot, single-threaded computation. Each run owns its
//! value table and selection buffer and drops the table before returning,
//! so solves are independent and an instance can be solved repeatedly.

use crate::backtrace::backtrace;
use crate::instance::Instance;
use crate::table::ValueTable;

/// Exact DP solver for one instance.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{DpSolver, Instance, Item};
///
/// let instance = Instance::new(vec![Item::new(2, 3), Item::new(5, 4), Item::new(6, 5)], 5);
/// let solution = DpSolver::new(&instance).run();
/// assert_eq!(solution.value, 6);
/// ```
pub struct DpSolver<'a> {
    instance: &'a Instance,
}

/// What a solve produces: the optimal value and one optimal selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Maximum total value achievable within the capacity.
    pub value: u64,
    /// One inclusion flag per item, in input order.
    pub selected: Vec<bool>,
}

impl Solution {
    /// Indices of the selected items, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &taken)| taken.then_some(i))
            .collect()
    }

    /// Total weight of the selected items.
    pub fn selected_weight(&self, instance: &Instance) -> u64 {
        self.zip_selected(instance).map(|item| item.weight).sum()
    }

    /// Total value of the selected items; equals [`Solution::value`] for a
    /// solution produced by [`DpSolver::run`].
    pub fn selected_value(&self, instance: &Instance) -> u64 {
        self.zip_selected(instance).map(|item| item.value).sum()
    }

    fn zip_selected<'a>(
        &'a self,
        instance: &'a Instance,
    ) -> impl Iterator<Item = &'a crate::instance::Item> {
        debug_assert_eq!(self.selected.len(), instance.len());
        instance
            .items()
            .iter()
            .zip(&self.selected)
            .filter_map(|(item, &taken)| taken.then_some(item))
    }
}

impl<'a> DpSolver<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Expose the underlying instance.
    pub fn instance(&self) -> &Instance {
        self.instance
    }

    /// Run the full solve: build the value table, read the optimum from its
    /// final cell, backtrace the selection, drop the table.
    pub fn run(&self) -> Solution {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "knapsack_solve",
            items = self.instance.len(),
            capacity = self.instance.capacity()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("build_table");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            ValueTable::build(self.instance)
        };

        let selected = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("backtrace");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            backtrace(&table, self.instance.items())
        };

        Solution {
            value: table.optimal_value(),
            selected,
        }
    }
}

/// Solve `instance` in one call.
pub fn solve(instance: &Instance) -> Solution {
    DpSolver::new(instance).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    #[test]
    fn no_items_yields_zero_and_no_flags() {
        let instance = Instance::new(Vec::new(), 100);
        let solution = solve(&instance);
        assert_eq!(solution.value, 0);
        assert!(solution.selected.is_empty());
        assert!(solution.selected_indices().is_empty());
    }

    #[test]
    fn zero_capacity_with_positive_weights_selects_nothing() {
        let instance = Instance::new(vec![Item::new(5, 1), Item::new(9, 2)], 0);
        let solution = solve(&instance);
        assert_eq!(solution.value, 0);
        assert_eq!(solution.selected, vec![false, false]);
    }

    #[test]
    fn zero_weight_item_is_taken_even_at_zero_capacity() {
        let instance = Instance::new(vec![Item::new(5, 1), Item::new(9, 0)], 0);
        let solution = solve(&instance);
        assert_eq!(solution.value, 9);
        assert_eq!(solution.selected, vec![false, true]);
    }

    #[test]
    fn accounting_helpers_agree_with_reported_value() {
        let instance = Instance::new(
            vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
            50,
        );
        let solution = solve(&instance);
        assert_eq!(solution.value, 220);
        assert_eq!(solution.selected_value(&instance), 220);
        assert_eq!(solution.selected_weight(&instance), 50);
        assert_eq!(solution.selected_indices(), vec![1, 2]);
    }
}
