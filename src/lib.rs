//! # Lehmer
//!
//! Lehmer is a Rust library for converting permutations of `0..n` to their Lehmer
//! codes and back in `O(n log n)`, instead of the `O(n²)` pairwise comparison.
//!
//! The speed-up comes from the [`ToggleArray`], a fixed-size bit vector answering
//! "which is the k-th unset slot?" and "how many set slots precede i?" in
//! `O(log n)` from a flat array of subtree counters.
//!
//! Alongside the codec the library provides cycle decomposition, cycle
//! application, parity from either representation, validity checks and the
//! lexicographic successor.
//!
//! ```
//! use lehmer::{Permutation, LehmerCode};
//!
//! let p = Permutation::try_from_map(vec![1, 3, 0, 2]).unwrap();
//! let code = p.to_lehmer();
//! assert_eq!(code.digits(), &[1, 2, 0, 0]);
//! assert_eq!(LehmerCode::try_from(vec![1, 2, 0, 0]).unwrap().to_permutation(), p);
//! assert_eq!(p.cycles().to_string(), "(0 1 3 2)");
//! assert_eq!(code.is_even(), p.cycles().is_even());
//! ```

pub mod cycles;
pub mod error;
pub mod lehmer;
pub mod permutation;
pub mod toggle_array;

pub use cycles::Cycles;
pub use error::PermutationError;
pub use lehmer::LehmerCode;
pub use permutation::Permutation;
pub use toggle_array::ToggleArray;
