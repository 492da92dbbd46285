//! # Cycle decomposition
//!
//! A permutation `p` of `0..n` splits into disjoint cycles `(c0 c1 ... ck)` with
//! `p[c0] = c1`, `p[c1] = c2`, ..., `p[ck] = c0`. Fixed points are singleton cycles,
//! so the cycles always partition `0..n`.
//!
//! A k-cycle is a product of k-1 transpositions, which gives the parity of the
//! permutation without counting inversions.

use std::fmt;

use derive_more::Into;
use itertools::Itertools;

use crate::{
    error::PermutationError,
    permutation::{check_permutation, Permutation},
};

/// Returns the cycles of `perm`, each starting at its smallest index, in increasing
/// order of that index.
///
/// # Examples
///
/// ```
/// # use lehmer::cycles::get_cycles;
/// assert_eq!(get_cycles(&[1, 3, 0, 2]).unwrap(), vec![vec![0, 1, 3, 2]]);
/// assert_eq!(get_cycles(&[0, 2, 1]).unwrap(), vec![vec![0], vec![1, 2]]);
/// ```
pub fn get_cycles(perm: &[usize]) -> Result<Vec<Vec<usize>>, PermutationError> {
    check_permutation(perm).inspect_err(|err| tracing::debug!(%err, "rejected permutation"))?;
    Ok(walk_cycles(perm))
}

/// `perm` must be a permutation.
fn walk_cycles(perm: &[usize]) -> Vec<Vec<usize>> {
    let n = perm.len();
    // Visited entries are shifted by n, past every valid value.
    let mut marked = perm.to_vec();
    let mut cycles = Vec::new();
    for start in 0..n {
        if marked[start] >= n {
            continue;
        }
        let mut cycle = Vec::new();
        let mut i = start;
        loop {
            cycle.push(i);
            let next = marked[i];
            marked[i] += n;
            i = next;
            if i == start {
                break;
            }
        }
        cycles.push(cycle);
    }
    cycles
}

/// Rotates the values of `seq` one step along each cycle, in place:
/// `seq[c0] <- seq[c1] <- ... <- seq[ck] <- seq[c0]`.
///
/// Applied to the identity, the cycles of `p` produce `p` itself.
///
/// # Panics
///
/// Panics if a cycle holds an index out of range for `seq`.
///
/// # Examples
///
/// ```
/// # use lehmer::cycles::apply_cycles;
/// let mut seq = vec![0, 1, 2, 3];
/// apply_cycles(&[vec![0, 1, 3, 2]], &mut seq);
/// assert_eq!(seq, vec![1, 3, 0, 2]);
/// ```
pub fn apply_cycles<T>(cycles: &[Vec<usize>], seq: &mut [T]) {
    for cycle in cycles {
        for pair in cycle.windows(2) {
            seq.swap(pair[0], pair[1]);
        }
    }
}

/// Parity from a cycle decomposition: even iff `Σ (len - 1)` is even.
pub fn is_even(cycles: &[Vec<usize>]) -> bool {
    cycles
        .iter()
        .fold(0, |parity, cycle| parity ^ (cycle.len().saturating_sub(1) & 1))
        == 0
}

/// A set of disjoint cycles covering `0..n`, where `n` is the total number of indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")
)]
pub struct Cycles(Vec<Vec<usize>>);

impl Cycles {
    /// Validates that `cycles` partition `0..n`, `n` being the number of indices they hold.
    ///
    /// Empty cycles are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::{cycles::Cycles, PermutationError};
    /// let cycles = Cycles::try_new(vec![vec![0, 2], vec![1], vec![3, 4]]).unwrap();
    /// assert_eq!(cycles.to_permutation().map(), &[2, 1, 0, 4, 3]);
    ///
    /// assert_eq!(
    ///     Cycles::try_new(vec![vec![0, 1], vec![1, 2]]),
    ///     Err(PermutationError::OverlappingCycles { index: 1 })
    /// );
    /// assert_eq!(
    ///     Cycles::try_new(vec![vec![0, 3]]),
    ///     Err(PermutationError::MissingIndex { index: 1 })
    /// );
    /// ```
    pub fn try_new(mut cycles: Vec<Vec<usize>>) -> Result<Self, PermutationError> {
        cycles.retain(|cycle| !cycle.is_empty());
        let n = cycles.iter().map(Vec::len).sum();

        let mut seen = vec![false; n];
        for &index in cycles.iter().flatten() {
            // Out-of-range indices leave a hole in 0..n, reported below.
            if index < n && std::mem::replace(&mut seen[index], true) {
                tracing::debug!(index, "rejected overlapping cycles");
                return Err(PermutationError::OverlappingCycles { index });
            }
        }
        if let Some(index) = seen.iter().position(|&s| !s) {
            tracing::debug!(index, "rejected incomplete cycles");
            return Err(PermutationError::MissingIndex { index });
        }
        Ok(Cycles(cycles))
    }

    pub fn from_permutation(perm: &Permutation) -> Self {
        Cycles(walk_cycles(perm.map()))
    }

    pub fn as_slice(&self) -> &[Vec<usize>] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.0.iter()
    }

    /// Number of cycles, fixed points included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size `n` of the permuted domain.
    pub fn size(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Rotates `seq` along every cycle, see [`apply_cycles`].
    pub fn apply<T>(&self, seq: &mut [T]) -> Result<(), PermutationError> {
        let size = self.size();
        if seq.len() != size {
            return Err(PermutationError::LengthMismatch {
                expected: size,
                found: seq.len(),
            });
        }
        apply_cycles(&self.0, seq);
        Ok(())
    }

    pub fn is_even(&self) -> bool {
        is_even(&self.0)
    }

    /// Number of transpositions the cycles decompose into: `n - #cycles`.
    pub fn transposition_count(&self) -> usize {
        self.size() - self.len()
    }

    /// The swaps that [`apply`](Self::apply) performs, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::cycles::Cycles;
    /// let cycles = Cycles::try_new(vec![vec![0, 2, 1], vec![3]]).unwrap();
    /// assert_eq!(cycles.transpositions(), vec![(0, 2), (2, 1)]);
    /// ```
    pub fn transpositions(&self) -> Vec<(usize, usize)> {
        self.0
            .iter()
            .flat_map(|cycle| cycle.iter().copied().tuple_windows::<(usize, usize)>())
            .collect()
    }

    pub fn to_permutation(&self) -> Permutation {
        let mut map: Vec<usize> = (0..self.size()).collect();
        apply_cycles(&self.0, &mut map);
        Permutation::from_map_unchecked(map)
    }
}

impl TryFrom<Vec<Vec<usize>>> for Cycles {
    type Error = PermutationError;

    fn try_from(cycles: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Self::try_new(cycles)
    }
}

impl<'a> IntoIterator for &'a Cycles {
    type Item = &'a Vec<usize>;
    type IntoIter = std::slice::Iter<'a, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Cycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in &self.0 {
            write!(f, "({})", cycle.iter().format(" "))?;
        }
        Ok(())
    }
}
