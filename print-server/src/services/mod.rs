pub mod print_pipeline;

pub use print_pipeline::{PrintOutcome, render_job};
