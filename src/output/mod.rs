//! Terminal output formatting

mod display;
mod formatters;

pub use display::{
    print_analysis, print_benchmark_result, print_grid, print_recommendation, print_solve_result,
};
pub use formatters::{feedback_cell, feedback_row, score_bar};
