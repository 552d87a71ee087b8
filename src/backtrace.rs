//! Selection recovery from a completed value table (the backward phase).
//!
//! The walk starts at cell `(n, capacity)` and visits rows `n..1`. A cell
//! that differs from the one directly above it means the optimum the table
//! encodes took that row's item, so its flag is set and the tracked budget
//! drops by the item's weight. Equal cells always mean "not taken" — even
//! when some other optimal subset would include the item — which is what
//! makes the recovered selection deterministic for a given input order.

use crate::instance::Item;
use crate::table::ValueTable;

/// Recover one optimal selection from `table`.
///
/// Returns one inclusion flag per item, in input order. The result is *an*
/// optimal solution, not necessarily the only one.
///
/// # Panics
/// Panics if `table` does not match `items` (wrong row count), or if an
/// inclusion step would overdraw the remaining budget. The latter cannot
/// happen for a table produced by [`ValueTable::build`]; seeing it means
/// the table is internally inconsistent, which is a bug, not bad input.
pub fn backtrace(table: &ValueTable, items: &[Item]) -> Vec<bool> {
    assert_eq!(
        table.rows(),
        items.len() + 1,
        "table has {} rows for {} items",
        table.rows(),
        items.len()
    );

    let mut selected = vec![false; items.len()];
    let mut k = table.width() - 1;
    for i in (1..=items.len()).rev() {
        if table.get(i, k) != table.get(i - 1, k) {
            let weight = items[i - 1].weight;
            assert!(
                weight <= k as u64,
                "inconsistent table: item {} (weight {weight}) claimed at budget {k}",
                i - 1
            );
            selected[i - 1] = true;
            k -= weight as usize;
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    fn trace(pairs: &[(u64, u64)], capacity: u64) -> Vec<bool> {
        let items: Vec<Item> = pairs.iter().map(|&(v, w)| Item::new(v, w)).collect();
        let instance = Instance::new(items, capacity);
        let table = ValueTable::build(&instance);
        backtrace(&table, instance.items())
    }

    #[test]
    fn recovers_the_classic_three_item_optimum() {
        // Optimal 220 takes the second and third items.
        assert_eq!(
            trace(&[(60, 10), (100, 20), (120, 30)], 50),
            vec![false, true, true]
        );
    }

    #[test]
    fn leaves_an_overweight_item_behind() {
        assert_eq!(trace(&[(10, 5)], 4), vec![false]);
    }

    #[test]
    fn ties_resolve_toward_exclusion() {
        // Either item alone is optimal; the backward scan keeps the later
        // row only when its cell differs, so the earlier item wins here.
        assert_eq!(trace(&[(5, 3), (5, 3)], 3), vec![true, false]);
    }

    #[test]
    fn empty_item_list_yields_no_flags() {
        assert_eq!(trace(&[], 9), Vec::<bool>::new());
    }

    #[test]
    #[should_panic(expected = "rows")]
    fn rejects_mismatched_table() {
        let instance = Instance::new(vec![Item::new(1, 1)], 2);
        let table = ValueTable::build(&instance);
        let wrong = [Item::new(1, 1), Item::new(2, 2)];
        let _ = backtrace(&table, &wrong);
    }
}
