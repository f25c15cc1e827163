//! # Production planning
//!
//! A factory makes three products on two machines, with a limited number of hours available on
//! each machine and a contract to deliver at least some units of the last product. Which product
//! mix maximizes the profit?
//!
//! Run with `RUST_LOG=trace` to see every tableau.
use tableau_lp::{ConstraintType, LinearModel, LinearProgramType, Objective, PivotRuleKind};

/// Product names, in the order of the variables.
const PRODUCTS: [&str; 3] = ["chairs", "tables", "shelves"];

fn main() {
    env_logger::init();

    let model = LinearModel::new(
        vec![
            // Hours on the saw, per unit
            vec![1f64, 3f64, 2f64],
            // Hours on the lathe, per unit
            vec![2f64, 1f64, 1f64],
            // Units of shelves delivered
            vec![0f64, 0f64, 1f64],
        ],
        vec![40f64, 30f64, 5f64],
        // Profit per unit
        vec![4f64, 6f64, 3f64],
        Objective::Maximize,
        vec![ConstraintType::Less, ConstraintType::Less, ConstraintType::Greater],
        PivotRuleKind::Bland,
        true,
    );
    let model = match model {
        Ok(model) => model,
        Err(error) => {
            eprintln!("{}", error);
            return;
        },
    };

    let outcome = model.solve();
    match outcome.result() {
        LinearProgramType::FiniteOptimum(solution) => {
            println!("Maximum profit: {}", solution.objective_value());
            for (product, units) in PRODUCTS.iter().zip(solution.values()) {
                if *units != 0f64 {
                    println!("{}: {}", product, units);
                }
            }
        },
        LinearProgramType::Infeasible => println!("The delivery contract can't be met."),
        LinearProgramType::Unbounded => println!("Profit is unbounded."),
    }
    println!("Pivots: {}", outcome.total_iterations());
}
