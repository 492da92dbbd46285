//! # Toggle Array
//!
//! A fixed-size row of toggle switches, each either *up* (set) or *down* (unset),
//! supporting order-statistics queries in `O(log n)`:
//!
//! - raise the k-th down toggle / lower the k-th up toggle ([`ToggleArray::set_up`],
//!   [`ToggleArray::set_down`]),
//! - find the k-th up or down toggle without changing it ([`ToggleArray::up_index`],
//!   [`ToggleArray::down_index`]),
//! - count up or down toggles left or right of an index, inclusive or exclusive
//!   (the `num_*` family).
//!
//! This is the left-right array of Jörg Arndt's *Matters Computational* (§4.7).
//!
//! ## Layout
//!
//! No tree nodes are allocated. The interval `[0, n-1]` is split recursively at
//! its midpoint `t`, into `[a, t]` and `[t + 1, b]`. The node of interval `[a, b]`
//! lives at index `t` of a flat counter array and holds the number of up toggles
//! in `[a, t]`, i.e. in its left half *including* `t` itself.
//!
//! For `n = 7` the implicit tree is
//!
//! ```text
//!        3
//!      /   \
//!     1     5
//!    / \   / \
//!   0   2 4   6
//! ```
//!
//! and `counts[3]` covers `[0, 3]`, `counts[5]` covers `[4, 5]`, `counts[2]` covers `[2, 2]`.
//! A midpoint `t` is also the leaf `[t, t]` at the right end of `[a, t]`. Descents
//! never reach that leaf: a rank landing on `t` is matched at the ancestor first.
//! So one slot per index is enough, and it always holds the ancestor's count.
//!
//! Out-of-range ranks are reported as `None` rather than a sentinel index.

use bitvec::vec::BitVec;

/// A fixed-size bit vector with logarithmic select and rank over both bit values.
pub struct ToggleArray {
    /// `counts[t]` = up toggles in `[a, t]`, where `t` is the midpoint of `[a, b]`.
    counts: Vec<usize>,
    toggles: BitVec,
    up_count: usize,
}

impl std::fmt::Debug for ToggleArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleArray")
            .field("len", &self.len())
            .field("up", &self.up_count)
            .field("down", &self.down_count())
            .finish()
    }
}

#[inline]
fn midpoint(a: usize, b: usize) -> usize {
    a + (b - a) / 2
}

impl ToggleArray {
    /// Creates a toggle array of `n` toggles, all down.
    pub fn new(n: usize) -> Self {
        ToggleArray {
            counts: vec![0; n],
            toggles: BitVec::repeat(false, n),
            up_count: 0,
        }
    }

    /// Creates a toggle array of `n` toggles, all up.
    pub fn new_up(n: usize) -> Self {
        let mut array = Self::new(n);
        array.all_up();
        array
    }

    /// Number of toggles.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn up_count(&self) -> usize {
        self.up_count
    }

    pub fn down_count(&self) -> usize {
        self.len() - self.up_count
    }

    /// State of toggle `i`: `true` when up. Out-of-range indices read as down.
    pub fn get(&self, i: usize) -> bool {
        i < self.len() && self.toggles[i]
    }

    /// Raises every toggle. `O(n)`.
    pub fn all_up(&mut self) {
        self.up_count = self.len();
        self.toggles.fill(true);
        if let Some(last) = self.len().checked_sub(1) {
            Self::fill_full(&mut self.counts, 0, last);
        }
    }

    /// Lowers every toggle. `O(n)`.
    pub fn all_down(&mut self) {
        self.up_count = 0;
        self.toggles.fill(false);
        self.counts.fill(0);
    }

    /// Writes, for every node of `[a, b]`, the size of its left half.
    ///
    /// Post-order: the slot of `t` must end up holding the count of `[a, t]`,
    /// not that of the leaf `[t, t]` written while recursing into `[a, t]`.
    fn fill_full(counts: &mut [usize], a: usize, b: usize) {
        if a == b {
            counts[a] = 1;
            return;
        }
        let t = midpoint(a, b);
        Self::fill_full(counts, a, t);
        Self::fill_full(counts, t + 1, b);
        counts[t] = t - a + 1;
    }

    /// Raises the `k`-th down toggle (counting from 0, left to right) and returns its index.
    ///
    /// Returns `None`, leaving the array untouched, when `k >= down_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::toggle_array::ToggleArray;
    /// let mut ta = ToggleArray::new(4);
    /// assert_eq!(ta.set_up(1), Some(1));
    /// // toggles: [down, up, down, down]; the down toggle number 1 is now index 2
    /// assert_eq!(ta.set_up(1), Some(2));
    /// assert_eq!(ta.set_up(2), None);
    /// ```
    pub fn set_up(&mut self, mut k: usize) -> Option<usize> {
        if k >= self.down_count() {
            return None;
        }
        self.up_count += 1;
        let (mut a, mut b) = (0, self.len() - 1);
        loop {
            let t = midpoint(a, b);
            let downs_left = t - a + 1 - self.counts[t];
            if downs_left == k + 1 && !self.toggles[t] {
                self.counts[t] += 1;
                self.toggles.set(t, true);
                return Some(t);
            }
            if downs_left > k {
                self.counts[t] += 1;
                b = t;
            } else {
                a = t + 1;
                k -= downs_left;
            }
        }
    }

    /// Lowers the `k`-th up toggle (counting from 0, left to right) and returns its index.
    ///
    /// Returns `None`, leaving the array untouched, when `k >= up_count()`.
    pub fn set_down(&mut self, mut k: usize) -> Option<usize> {
        if k >= self.up_count {
            return None;
        }
        self.up_count -= 1;
        let (mut a, mut b) = (0, self.len() - 1);
        loop {
            let t = midpoint(a, b);
            let ups_left = self.counts[t];
            if ups_left == k + 1 && self.toggles[t] {
                self.counts[t] -= 1;
                self.toggles.set(t, false);
                return Some(t);
            }
            if ups_left > k {
                self.counts[t] -= 1;
                b = t;
            } else {
                a = t + 1;
                k -= ups_left;
            }
        }
    }

    /// Index of the `k`-th up toggle, or `None` when `k >= up_count()`.
    pub fn up_index(&self, mut k: usize) -> Option<usize> {
        if k >= self.up_count {
            return None;
        }
        let (mut a, mut b) = (0, self.len() - 1);
        loop {
            let t = midpoint(a, b);
            let ups_left = self.counts[t];
            if ups_left == k + 1 && self.toggles[t] {
                return Some(t);
            }
            if ups_left > k {
                b = t;
            } else {
                a = t + 1;
                k -= ups_left;
            }
        }
    }

    /// Index of the `k`-th down toggle, or `None` when `k >= down_count()`.
    pub fn down_index(&self, mut k: usize) -> Option<usize> {
        if k >= self.down_count() {
            return None;
        }
        let (mut a, mut b) = (0, self.len() - 1);
        loop {
            let t = midpoint(a, b);
            let downs_left = t - a + 1 - self.counts[t];
            if downs_left == k + 1 && !self.toggles[t] {
                return Some(t);
            }
            if downs_left > k {
                b = t;
            } else {
                a = t + 1;
                k -= downs_left;
            }
        }
    }

    /// Up toggles strictly left of `i` (Up, Left, Exclusive). Zero when `i` is out of range.
    ///
    /// Every other `num_*` query is derived from this one.
    pub fn num_ule(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        let (mut a, mut b) = (0, self.len() - 1);
        let mut ups = 0;
        while a != b {
            let t = midpoint(a, b);
            if i <= t {
                b = t;
            } else {
                ups += self.counts[t];
                a = t + 1;
            }
        }
        ups
    }

    /// Up toggles left of `i`, `i` included.
    pub fn num_uli(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        self.num_ule(i) + usize::from(self.toggles[i])
    }

    /// Up toggles strictly right of `i`.
    pub fn num_ure(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        self.up_count - self.num_uli(i)
    }

    /// Up toggles right of `i`, `i` included.
    pub fn num_uri(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        self.up_count - self.num_ule(i)
    }

    /// Down toggles strictly left of `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lehmer::toggle_array::ToggleArray;
    /// let mut ta = ToggleArray::new(5);
    /// ta.set_up(1);
    /// // toggles: [down, up, down, down, down]
    /// assert_eq!(ta.num_dle(3), 2);
    /// assert_eq!(ta.num_ule(3), 1);
    /// ```
    pub fn num_dle(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        i - self.num_ule(i)
    }

    /// Down toggles left of `i`, `i` included.
    pub fn num_dli(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        self.num_dle(i) + usize::from(!self.toggles[i])
    }

    /// Down toggles strictly right of `i`.
    pub fn num_dre(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        self.down_count() - self.num_dli(i)
    }

    /// Down toggles right of `i`, `i` included.
    pub fn num_dri(&self, i: usize) -> usize {
        if i >= self.len() {
            return 0;
        }
        self.down_count() - self.num_dle(i)
    }
}

#[cfg(test)]
mod test;
