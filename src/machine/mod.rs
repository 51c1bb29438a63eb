//! State-machine encoding
//!
//! A finite-state transition function δ(token, state) = next_state is
//! sampled into [`Sample`]s and compressed into a [`LookupTable`]:
//! - One univariate polynomial per observed token
//! - Explicit [`Entry::Absent`] for tokens never observed

mod sample;
mod table;

pub use sample::{parse_samples, Sample};
pub use table::{Entry, LookupTable};
