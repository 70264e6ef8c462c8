pub mod domain;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod text;

pub use domain::*;
pub use error::Rejection;
pub use outcome::{Normalized, REASON_OK};
pub use pipeline::{run_steps, run_until_stable, RewriteStep};
