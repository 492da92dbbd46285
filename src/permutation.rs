//! # Permutations
//!
//! This module provides the validated [`Permutation`] type and the slice-level
//! helpers shared by the Lehmer and cycle codecs.
//!
//! ## Key Features:
//!
//! - **Representation**: A `Permutation` is stored by its direct mapping (`map[i]` is
//!   the image of `i`) and its inverse mapping. Both are kept consistent by every
//!   constructor and mutation; there is no way to build an invalid value.
//! - **Validation**:
//!   - `is_valid_permutation(&[usize])` / `check_permutation(&[usize])`.
//!   - `Permutation::try_from_map(vec![...])`, or `Permutation::try_from(vec![...])`.
//! - **Conversions**:
//!   - Lehmer code: `p.to_lehmer()`, `Permutation::from_lehmer(&code)`.
//!   - Cycles: `p.cycles()`.
//! - **Basic Operations**:
//!   - Inverse: `p.inverse()`.
//!   - Composition: `p1.compose(&p2)` (applies `p2` then `p1`).
//!   - Rearranging slices: `p.apply_slice(data)`.
//!   - Parity: `p.is_even()`, `p.sign()`.
//! - **Ordering**:
//!   - Lexicographic successor on any slice: `next_permutation(&mut [T])`, or
//!     `p.advance()` on a `Permutation`.
//!   - Uniformly random permutations from a caller-provided generator:
//!     `Permutation::random(n, &mut rng)`, or `shuffle(&mut slice, &mut rng)`.

use std::{fmt, ops::Index};

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::{cycles::Cycles, error::PermutationError, lehmer::LehmerCode};

/// Checks that `seq` holds every value of `0..seq.len()` exactly once.
///
/// Reports the first position holding a value that is out of range or already seen.
pub fn check_permutation(seq: &[usize]) -> Result<(), PermutationError> {
    let size = seq.len();
    let mut seen = vec![false; size];
    for (position, &value) in seq.iter().enumerate() {
        if value >= size {
            return Err(PermutationError::ValueOutOfRange {
                position,
                value,
                size,
            });
        }
        if std::mem::replace(&mut seen[value], true) {
            return Err(PermutationError::DuplicateValue { position, value });
        }
    }
    // n distinct values below n: every value is present.
    Ok(())
}

/// Returns `true` iff `seq` is a permutation of `0..seq.len()`.
///
/// # Examples
///
/// ```
/// # use lehmer::permutation::is_valid_permutation;
/// assert!(is_valid_permutation(&[0, 1, 2]));
/// assert!(!is_valid_permutation(&[0, 0, 2]));
/// assert!(!is_valid_permutation(&[0, 3, 1]));
/// ```
pub fn is_valid_permutation(seq: &[usize]) -> bool {
    check_permutation(seq).is_ok()
}

/// Rearranges `seq` into its lexicographic successor.
///
/// Returns `false` when `seq` was the last arrangement (non-increasing); it then
/// wraps around to the first one, sorted ascending.
///
/// # Examples
///
/// ```
/// # use lehmer::permutation::next_permutation;
/// let mut p = [0, 2, 1];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [1, 0, 2]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [0, 1, 2]);
/// ```
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    // The pivot sits just before the longest non-increasing suffix.
    let Some(pivot) = (1..seq.len()).rev().find(|&i| seq[i - 1] < seq[i]).map(|i| i - 1) else {
        seq.reverse();
        return false;
    };

    // The suffix is non-increasing and seq[pivot + 1] > seq[pivot], so this stops inside it.
    let mut successor = seq.len() - 1;
    while seq[successor] <= seq[pivot] {
        successor -= 1;
    }
    seq.swap(pivot, successor);
    seq[pivot + 1..].reverse();
    true
}

/// Shuffles `seq` uniformly (Fisher-Yates) with the caller's generator.
///
/// # Examples
///
/// ```
/// # use lehmer::permutation::{is_valid_permutation, shuffle};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut seq: Vec<usize> = (0..8).collect();
/// shuffle(&mut seq, &mut SmallRng::seed_from_u64(3));
/// assert!(is_valid_permutation(&seq));
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(seq: &mut [T], rng: &mut R) {
    seq.shuffle(rng);
}

/// A permutation of `0..n`, with the ability to convert itself to a Lehmer code or cycles.
///
/// # Examples
///
/// ```
/// use lehmer::permutation::Permutation;
///
/// let p = Permutation::try_from_map(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(p.to_lehmer().digits(), &[1, 2, 0, 0]);
/// assert_eq!(p.inverse().map(), &[2, 0, 3, 1]);
/// assert!(!p.is_even());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

/// Lexicographic order of the one-line notation.
impl PartialOrd for Permutation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Permutation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.map.cmp(&other.map)
    }
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of length `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::permutation::Permutation;
    /// let p = Permutation::id(4);
    /// assert_eq!(p.map(), &[0, 1, 2, 3]);
    /// assert!(p.is_identity());
    /// ```
    pub fn id(n: usize) -> Self {
        Permutation {
            map: (0..n).collect(),
            inv: (0..n).collect(),
        }
    }

    /// Creates a permutation from a mapping vector, `map[i]` being the image of `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::{permutation::Permutation, PermutationError};
    /// let p = Permutation::try_from_map(vec![2, 0, 1]).unwrap();
    /// assert_eq!(p.inv(), &[1, 2, 0]);
    ///
    /// assert_eq!(
    ///     Permutation::try_from_map(vec![0, 0, 2]),
    ///     Err(PermutationError::DuplicateValue { position: 1, value: 0 })
    /// );
    /// ```
    pub fn try_from_map(map: Vec<usize>) -> Result<Self, PermutationError> {
        check_permutation(&map).inspect_err(|err| tracing::debug!(%err, "rejected permutation"))?;
        Ok(Self::from_map_unchecked(map))
    }

    /// Builds the inverse of a map already known to be a permutation.
    pub(crate) fn from_map_unchecked(map: Vec<usize>) -> Self {
        let mut inv = vec![0; map.len()];
        for (i, &j) in map.iter().enumerate() {
            inv[j] = i;
        }
        Permutation { map, inv }
    }

    /// Draws a uniformly random permutation of `0..n` from `rng`.
    ///
    /// The generator is owned by the caller, so a seeded generator gives a reproducible draw.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::permutation::Permutation;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let a = Permutation::random(10, &mut SmallRng::seed_from_u64(7));
    /// let b = Permutation::random(10, &mut SmallRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut map: Vec<usize> = (0..n).collect();
        shuffle(&mut map, rng);
        Self::from_map_unchecked(map)
    }

    /// Returns the mapping as a slice.
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    /// Returns the inverse mapping as a slice.
    pub fn inv(&self) -> &[usize] {
        &self.inv
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // --------------------------------------------------------------------------------------------
    // Basic Operations
    // --------------------------------------------------------------------------------------------

    /// Returns the inverse of the permutation.
    pub fn inverse(&self) -> Self {
        Permutation {
            map: self.inv.clone(),
            inv: self.map.clone(),
        }
    }

    /// Composes `self` with `other`: `(self ∘ other)(i) = self[other[i]]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::permutation::Permutation;
    /// let p = Permutation::try_from_map(vec![1, 2, 0]).unwrap();
    /// let q = Permutation::try_from_map(vec![0, 2, 1]).unwrap();
    /// assert_eq!(p.compose(&q).unwrap().map(), &[1, 0, 2]);
    /// assert!(p.compose(&Permutation::id(2)).is_err());
    /// ```
    pub fn compose(&self, other: &Self) -> Result<Self, PermutationError> {
        if self.len() != other.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        let map = other.map.iter().map(|&i| self.map[i]).collect();
        Ok(Self::from_map_unchecked(map))
    }

    /// Returns `[s[p[0]], s[p[1]], ...]`: the rearrangement [`Cycles::apply`] performs in place.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than the permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::permutation::Permutation;
    /// let p = Permutation::try_from_map(vec![2, 0, 1]).unwrap();
    /// assert_eq!(p.apply_slice(&["a", "b", "c"]), vec!["c", "a", "b"]);
    /// ```
    pub fn apply_slice<T: Clone>(&self, slice: &[T]) -> Vec<T> {
        self.map.iter().map(|&idx| slice[idx].clone()).collect()
    }

    /// Checks if this permutation is the identity.
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// `true` when the permutation is a product of an even number of transpositions.
    pub fn is_even(&self) -> bool {
        self.cycles().is_even()
    }

    /// Returns the sign (+1 or -1) of the permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::permutation::Permutation;
    /// let p = Permutation::try_from_map(vec![1, 0, 3, 2]).unwrap();
    /// assert_eq!(p.sign(), 1);
    ///
    /// let q = Permutation::try_from_map(vec![2, 1, 0]).unwrap();
    /// assert_eq!(q.sign(), -1);
    /// ```
    pub fn sign(&self) -> i8 {
        if self.is_even() {
            1
        } else {
            -1
        }
    }

    /// Moves to the lexicographic successor, wrapping to the identity after the last one.
    ///
    /// Returns `false` on wrap-around, like [`next_permutation`].
    pub fn advance(&mut self) -> bool {
        let advanced = next_permutation(&mut self.map);
        for (i, &j) in self.map.iter().enumerate() {
            self.inv[j] = i;
        }
        advanced
    }

    // --------------------------------------------------------------------------------------------
    // Conversions
    // --------------------------------------------------------------------------------------------

    /// Lehmer code of the permutation, in `O(n log n)`.
    pub fn to_lehmer(&self) -> LehmerCode {
        LehmerCode::from_permutation(self)
    }

    /// Permutation encoded by `code`, in `O(n log n)`.
    pub fn from_lehmer(code: &LehmerCode) -> Self {
        code.to_permutation()
    }

    /// Disjoint cycle decomposition, fixed points included.
    pub fn cycles(&self) -> Cycles {
        Cycles::from_permutation(self)
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(map: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_from_map(map)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.map
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.map[index]
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cycle notation first, fixed points omitted
        let cycles = self.cycles();
        let moved = cycles.iter().filter(|cycle| cycle.len() > 1).collect_vec();
        if moved.is_empty() {
            write!(f, "()")?;
        } else {
            let notation = moved
                .iter()
                .format_with(" ", |cycle, g| g(&format_args!("({})", cycle.iter().format(" "))));
            write!(f, "{notation}")?;
        }

        // Then one-line notation
        write!(f, " [{}]", self.map.iter().format(" "))
    }
}
