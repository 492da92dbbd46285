//! # Lehmer codes
//!
//! The Lehmer code of a permutation `p` of `0..n` records, at position `i`, how many
//! elements after position `i` are smaller than `p[i]`. Digit `i` therefore lies in
//! `0..=n-1-i`, the last digit is always 0, and codes of length `n` are in bijection
//! with permutations of `0..n`. Lexicographic order is preserved both ways.
//!
//! Both directions run in `O(n log n)` by driving a [`ToggleArray`] where "up" means
//! "value already placed":
//!
//! - encoding: the digit for `p[i]` is the number of still-down values below `p[i]`
//!   (`num_dle`), after which `p[i]` is raised;
//! - decoding: raising the `code[i]`-th down toggle yields `p[i]` directly.

use std::fmt;

use derive_more::{Deref, Into};
use itertools::Itertools;

use crate::{
    error::PermutationError,
    permutation::{check_permutation, Permutation},
    toggle_array::ToggleArray,
};

/// Checks that every digit of `code` is within its positional bound.
pub fn check_lehmer(code: &[usize]) -> Result<(), PermutationError> {
    let n = code.len();
    for (position, &digit) in code.iter().enumerate() {
        let bound = n - 1 - position;
        if digit > bound {
            return Err(PermutationError::DigitOutOfRange {
                position,
                digit,
                bound,
            });
        }
    }
    Ok(())
}

/// Returns `true` iff `code` is the Lehmer code of some permutation of `0..code.len()`.
///
/// # Examples
///
/// ```
/// # use lehmer::lehmer::is_valid_lehmer;
/// assert!(is_valid_lehmer(&[2, 1, 0]));
/// assert!(!is_valid_lehmer(&[3, 0, 0]));
/// ```
pub fn is_valid_lehmer(code: &[usize]) -> bool {
    check_lehmer(code).is_ok()
}

/// Parity of the permutation encoded by `code`: each digit counts inversions,
/// so the permutation is even iff the digit sum is even.
pub fn is_even(code: &[usize]) -> bool {
    code.iter().fold(0, |parity, &digit| parity ^ (digit & 1)) == 0
}

/// Computes the Lehmer code of `perm`.
///
/// The input is validated before any work is done.
///
/// # Examples
///
/// ```
/// # use lehmer::lehmer::to_lehmer;
/// assert_eq!(to_lehmer(&[1, 3, 0, 2]).unwrap(), vec![1, 2, 0, 0]);
/// assert!(to_lehmer(&[1, 1, 0]).is_err());
/// ```
pub fn to_lehmer(perm: &[usize]) -> Result<Vec<usize>, PermutationError> {
    check_permutation(perm).inspect_err(|err| tracing::debug!(%err, "rejected permutation"))?;
    Ok(encode(perm))
}

/// Rebuilds the permutation whose Lehmer code is `code`.
///
/// # Examples
///
/// ```
/// # use lehmer::lehmer::from_lehmer;
/// assert_eq!(from_lehmer(&[1, 2, 0, 0]).unwrap(), vec![1, 3, 0, 2]);
/// assert!(from_lehmer(&[3, 0, 0]).is_err());
/// ```
pub fn from_lehmer(code: &[usize]) -> Result<Vec<usize>, PermutationError> {
    check_lehmer(code).inspect_err(|err| tracing::debug!(%err, "rejected Lehmer code"))?;
    decode(code)
}

/// `perm` must be a permutation; anything else gives a meaningless code.
fn encode(perm: &[usize]) -> Vec<usize> {
    let n = perm.len();
    tracing::trace!(n, "encoding Lehmer code");
    let mut placed = ToggleArray::new(n);
    let mut code = vec![0; n];
    // The last digit is always 0.
    for (digit, &value) in code.iter_mut().zip(perm).take(n.saturating_sub(1)) {
        *digit = placed.num_dle(value);
        placed.set_up(*digit);
    }
    code
}

fn decode(code: &[usize]) -> Result<Vec<usize>, PermutationError> {
    let n = code.len();
    tracing::trace!(n, "decoding Lehmer code");
    let mut placed = ToggleArray::new(n);
    code.iter()
        .enumerate()
        .map(|(position, &digit)| {
            placed
                .set_up(digit)
                .ok_or(PermutationError::DigitOutOfRange {
                    position,
                    digit,
                    bound: n - 1 - position,
                })
        })
        .collect()
}

/// A valid Lehmer code.
///
/// # Examples
///
/// ```
/// use lehmer::{lehmer::LehmerCode, permutation::Permutation};
///
/// let code = LehmerCode::try_from_digits(vec![1, 2, 0, 0]).unwrap();
/// let p = code.to_permutation();
/// assert_eq!(p.map(), &[1, 3, 0, 2]);
/// assert_eq!(p.to_lehmer(), code);
/// assert_eq!(code.to_string(), "[1 2 0 0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct LehmerCode(Vec<usize>);

impl LehmerCode {
    pub fn try_from_digits(digits: Vec<usize>) -> Result<Self, PermutationError> {
        check_lehmer(&digits).inspect_err(|err| tracing::debug!(%err, "rejected Lehmer code"))?;
        Ok(LehmerCode(digits))
    }

    /// The code of the identity permutation: all zeros.
    pub fn zero(n: usize) -> Self {
        LehmerCode(vec![0; n])
    }

    pub fn from_permutation(perm: &Permutation) -> Self {
        LehmerCode(encode(perm.map()))
    }

    pub fn to_permutation(&self) -> Permutation {
        match decode(&self.0) {
            Ok(map) => Permutation::from_map_unchecked(map),
            Err(err) => unreachable!("a validated Lehmer code failed to decode: {err}"),
        }
    }

    pub fn digits(&self) -> &[usize] {
        &self.0
    }

    pub fn is_even(&self) -> bool {
        is_even(&self.0)
    }
}

impl TryFrom<Vec<usize>> for LehmerCode {
    type Error = PermutationError;

    fn try_from(digits: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_from_digits(digits)
    }
}

impl fmt::Display for LehmerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().format(" "))
    }
}
