//! Example: solve a small instance and print the chosen items.
//!
//! Run with:
//! `cargo run --example knapsack`

use knapsack_dp::io::format_solution;
use knapsack_dp::{solve, Instance, Item};

fn main() {
    let instance = Instance::new(
        vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
        50,
    );

    let solution = solve(&instance);

    println!("optimal value: {}", solution.value);
    println!("selected items: {:?}", solution.selected_indices());
    println!(
        "total weight: {} of {}",
        solution.selected_weight(&instance),
        instance.capacity()
    );
    println!();
    print!("{}", format_solution(&solution));
}
