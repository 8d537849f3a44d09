// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::{Cube, Minterm, Trit};
use bitvec::prelude::*;
use std::fmt;

/// A set of minterms stored as a binary trie of depth `depth`, answering
/// containment and conflict queries against cube-shaped regions by pruning
/// instead of scanning the whole set.
///
/// Nodes live in an arena indexed by integer handles; handle 0 is the root,
/// which is never a child, so 0 doubles as the absent-child marker. Removal
/// decrements per-node subtree counts rather than freeing nodes; a node with
/// count 0 is treated as absent by every query.
#[derive(Clone)]
pub struct TernaryIndex {
    depth: usize,
    nodes: Vec<Node>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Node {
    children: [u32; 2],
    count: u64,
}

impl TernaryIndex {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            nodes: vec![Node::default()],
        }
    }

    pub fn from_minterms<'a>(depth: usize, minterms: impl IntoIterator<Item = &'a Minterm>) -> Self {
        let mut index = Self::new(depth);
        for minterm in minterms {
            index.insert(minterm);
        }
        index
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.nodes[0].count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn alloc(&mut self) -> u32 {
        let handle = self.nodes.len() as u32;
        self.nodes.push(Node::default());
        handle
    }

    // Returns the live child of `node` along `bit`, or None if absent/empty.
    #[inline]
    fn child(&self, node: usize, bit: bool) -> Option<usize> {
        let handle = self.nodes[node].children[bit as usize] as usize;
        (handle != 0 && self.nodes[handle].count != 0).then(|| handle)
    }

    /// Inserts a minterm. Returns false if it was already present.
    pub fn insert(&mut self, minterm: &Minterm) -> bool {
        debug_assert_eq!(minterm.width(), self.depth);
        if self.contains(minterm) {
            return false;
        }
        let mut cur = 0;
        self.nodes[cur].count += 1;
        for bit in minterm.bits() {
            let slot = bit as usize;
            let mut handle = self.nodes[cur].children[slot] as usize;
            if handle == 0 {
                handle = self.alloc() as usize;
                self.nodes[cur].children[slot] = handle as u32;
            }
            self.nodes[handle].count += 1;
            cur = handle;
        }
        true
    }

    /// Removes a minterm. Returns false if it was not present.
    pub fn remove(&mut self, minterm: &Minterm) -> bool {
        debug_assert_eq!(minterm.width(), self.depth);
        if !self.contains(minterm) {
            return false;
        }
        let mut cur = 0;
        self.nodes[cur].count -= 1;
        for bit in minterm.bits() {
            let handle = self.nodes[cur].children[bit as usize] as usize;
            self.nodes[handle].count -= 1;
            cur = handle;
        }
        true
    }

    pub fn contains(&self, minterm: &Minterm) -> bool {
        debug_assert_eq!(minterm.width(), self.depth);
        let mut cur = 0;
        for bit in minterm.bits() {
            match self.child(cur, bit) {
                Some(handle) => cur = handle,
                None => return false,
            }
        }
        self.nodes[cur].count != 0
    }

    /// Whether any stored point lies inside the covered set of `cube`.
    ///
    /// Fixed query positions follow one branch; don't-care positions explore
    /// both. Absent branches prune the walk, which is the whole point of the
    /// structure versus a linear scan.
    pub fn contains_within(&self, cube: &Cube) -> bool {
        debug_assert_eq!(cube.width(), self.depth);
        self.contains_within_rec(0, 0, cube)
    }

    fn contains_within_rec(&self, node: usize, ix: usize, cube: &Cube) -> bool {
        if self.nodes[node].count == 0 {
            return false;
        }
        if ix == self.depth {
            return true;
        }
        match cube.trit(ix) {
            Trit::Zero => self
                .child(node, false)
                .map_or(false, |c| self.contains_within_rec(c, ix + 1, cube)),
            Trit::One => self
                .child(node, true)
                .map_or(false, |c| self.contains_within_rec(c, ix + 1, cube)),
            Trit::DontCare => {
                self.child(node, false)
                    .map_or(false, |c| self.contains_within_rec(c, ix + 1, cube))
                    || self
                        .child(node, true)
                        .map_or(false, |c| self.contains_within_rec(c, ix + 1, cube))
            }
        }
    }

    /// Number of stored points lying inside the covered set of `cube`.
    ///
    /// Once the walk passes the cube's last fixed position, whole subtrees are
    /// counted from the per-node totals without descending further.
    pub fn count_within(&self, cube: &Cube) -> u128 {
        debug_assert_eq!(cube.width(), self.depth);
        let cutoff = cube.last_fixed().map_or(0, |ix| ix + 1);
        self.count_within_rec(0, 0, cube, cutoff)
    }

    fn count_within_rec(&self, node: usize, ix: usize, cube: &Cube, cutoff: usize) -> u128 {
        let count = self.nodes[node].count;
        if count == 0 {
            return 0;
        }
        if ix >= cutoff {
            return count as u128;
        }
        let sum_child = |bit: bool| {
            self.child(node, bit)
                .map_or(0, |c| self.count_within_rec(c, ix + 1, cube, cutoff))
        };
        match cube.trit(ix) {
            Trit::Zero => sum_child(false),
            Trit::One => sum_child(true),
            Trit::DontCare => sum_child(false) + sum_child(true),
        }
    }

    /// The lexicographically smallest stored minterm.
    pub fn min_minterm(&self) -> Option<Minterm> {
        if self.is_empty() {
            return None;
        }
        let mut bits: BitVec = BitVec::with_capacity(self.depth);
        let mut cur = 0;
        for _ in 0..self.depth {
            let (bit, handle) = match self.child(cur, false) {
                Some(handle) => (false, handle),
                None => {
                    let handle = self
                        .child(cur, true)
                        .expect("non-empty node has a live child");
                    (true, handle)
                }
            };
            bits.push(bit);
            cur = handle;
        }
        Some(Minterm::from_bits(bits))
    }

    /// The lexicographically smallest minterm *not* stored, or `None` if every
    /// one of the `2^depth` points is present.
    pub fn first_absent(&self) -> Option<Minterm> {
        if self.nodes[0].count as u128 >= subtree_capacity(self.depth) {
            return None;
        }
        let mut bits: BitVec = BitVec::with_capacity(self.depth);
        let mut cur = Some(0);
        for ix in 0..self.depth {
            match cur {
                // Inside an empty subtree: the smallest absent point continues
                // with zeroes.
                None => bits.push(false),
                Some(node) => {
                    let capacity = subtree_capacity(self.depth - ix - 1);
                    let child0 = self.child(node, false);
                    let count0 = child0.map_or(0, |c| self.nodes[c].count as u128);
                    if count0 < capacity {
                        bits.push(false);
                        cur = child0;
                    } else {
                        bits.push(true);
                        cur = self.child(node, true);
                    }
                }
            }
        }
        Some(Minterm::from_bits(bits))
    }

    /// Removes every stored minterm lying inside the covered set of `cube`.
    /// Returns the number of points removed.
    pub fn remove_covered(&mut self, cube: &Cube) -> u64 {
        debug_assert_eq!(cube.width(), self.depth);
        self.remove_covered_rec(0, 0, cube)
    }

    fn remove_covered_rec(&mut self, node: usize, ix: usize, cube: &Cube) -> u64 {
        if self.nodes[node].count == 0 {
            return 0;
        }
        if ix == self.depth {
            let removed = self.nodes[node].count;
            self.nodes[node].count = 0;
            return removed;
        }
        let mut removed = 0;
        for bit in [false, true] {
            if cube.trit(ix).matches(bit) {
                if let Some(child) = self.child(node, bit) {
                    removed += self.remove_covered_rec(child, ix + 1, cube);
                }
            }
        }
        self.nodes[node].count -= removed;
        removed
    }

    /// All stored minterms, in lexicographic order.
    pub fn minterms(&self) -> Vec<Minterm> {
        let mut out = Vec::with_capacity(self.len() as usize);
        let mut path = BitVec::with_capacity(self.depth);
        self.collect_rec(0, &mut path, &mut out);
        out
    }

    fn collect_rec(&self, node: usize, path: &mut BitVec, out: &mut Vec<Minterm>) {
        if self.nodes[node].count == 0 {
            return;
        }
        if path.len() == self.depth {
            out.push(Minterm::from_bits(path.iter().by_vals()));
            return;
        }
        for bit in [false, true] {
            if let Some(child) = self.child(node, bit) {
                path.push(bit);
                self.collect_rec(child, path, out);
                path.pop();
            }
        }
    }
}

#[inline]
fn subtree_capacity(width: usize) -> u128 {
    if width >= 128 {
        // Counts are bounded by memory long before this; treat such subtrees
        // as never full.
        u128::MAX
    } else {
        1u128 << width
    }
}

impl fmt::Debug for TernaryIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TernaryIndex")
            .field("depth", &self.depth)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minterm(s: &str) -> Minterm {
        Minterm::parse(s, s.len()).unwrap()
    }

    fn cube(s: &str) -> Cube {
        s.parse().unwrap()
    }

    fn index_of(strs: &[&str]) -> TernaryIndex {
        let minterms: Vec<_> = strs.iter().map(|s| minterm(s)).collect();
        TernaryIndex::from_minterms(strs[0].len(), &minterms)
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut index = TernaryIndex::new(3);
        assert!(index.is_empty());
        assert!(index.insert(&minterm("010")));
        assert!(!index.insert(&minterm("010")), "duplicate insert");
        assert!(index.insert(&minterm("011")));
        assert_eq!(index.len(), 2);

        assert!(index.contains(&minterm("010")));
        assert!(!index.contains(&minterm("000")));

        assert!(index.remove(&minterm("010")));
        assert!(!index.remove(&minterm("010")), "double remove");
        assert!(!index.contains(&minterm("010")));
        assert!(index.contains(&minterm("011")));
        assert_eq!(index.len(), 1);

        // Removed points can be inserted again.
        assert!(index.insert(&minterm("010")));
        assert!(index.contains(&minterm("010")));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_contains_within() {
        let index = index_of(&["010", "111"]);

        assert!(index.contains_within(&cube("0--")));
        assert!(index.contains_within(&cube("-1-")));
        assert!(index.contains_within(&cube("010")));
        assert!(!index.contains_within(&cube("00-")));
        assert!(!index.contains_within(&cube("10-")));
        assert!(index.contains_within(&cube("---")));
    }

    #[test]
    fn test_contains_within_respects_removal() {
        let mut index = index_of(&["010", "111"]);
        index.remove(&minterm("010"));
        assert!(!index.contains_within(&cube("0--")));
        assert!(index.contains_within(&cube("---")));
    }

    #[test]
    fn test_count_within() {
        let index = index_of(&["000", "001", "011", "111"]);
        assert_eq!(index.count_within(&cube("---")), 4);
        assert_eq!(index.count_within(&cube("0--")), 3);
        assert_eq!(index.count_within(&cube("00-")), 2);
        assert_eq!(index.count_within(&cube("--1")), 3);
        assert_eq!(index.count_within(&cube("1-0")), 0);
    }

    #[test]
    fn test_min_minterm() {
        let mut index = index_of(&["110", "011", "100"]);
        assert_eq!(index.min_minterm(), Some(minterm("011")));
        index.remove(&minterm("011"));
        assert_eq!(index.min_minterm(), Some(minterm("100")));
        index.remove(&minterm("100"));
        index.remove(&minterm("110"));
        assert_eq!(index.min_minterm(), None);
    }

    #[test]
    fn test_first_absent() {
        let mut index = TernaryIndex::new(2);
        assert_eq!(index.first_absent(), Some(minterm("00")));
        index.insert(&minterm("00"));
        index.insert(&minterm("01"));
        assert_eq!(index.first_absent(), Some(minterm("10")));
        index.insert(&minterm("11"));
        assert_eq!(index.first_absent(), Some(minterm("10")));
        index.insert(&minterm("10"));
        assert_eq!(index.first_absent(), None);
    }

    #[test]
    fn test_first_absent_zero_width() {
        let mut index = TernaryIndex::new(0);
        assert_eq!(index.first_absent(), Some(Minterm::from_bits([])));
        index.insert(&Minterm::from_bits([]));
        assert_eq!(index.first_absent(), None);
    }

    #[test]
    fn test_remove_covered() {
        let mut index = index_of(&["000", "001", "010", "111"]);
        assert_eq!(index.remove_covered(&cube("0-0")), 2);
        assert_eq!(index.len(), 2);
        assert!(index.contains(&minterm("001")));
        assert!(!index.contains(&minterm("000")));
        assert!(!index.contains(&minterm("010")));

        // No-op on a region that is already clear.
        assert_eq!(index.remove_covered(&cube("0-0")), 0);

        assert_eq!(index.remove_covered(&cube("---")), 2);
        assert!(index.is_empty());
    }

    #[test]
    fn test_minterms_in_order() {
        let index = index_of(&["110", "011", "100", "000"]);
        let collected: Vec<_> = index.minterms().iter().map(|m| m.to_string()).collect();
        assert_eq!(collected, ["000", "011", "100", "110"]);
    }
}
