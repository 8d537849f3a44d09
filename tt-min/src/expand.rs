// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cube::{Cube, Minterm, Trit},
    index::TernaryIndex,
};
use log::{debug, trace};

/// The region a candidate cube must not touch during expansion.
///
/// For a sparse specification the OFF-set is the complement of the ON-set; it
/// is never materialized. A cube avoids the complement exactly when every one
/// of its points is an ON-set point, which the ON-set index answers by
/// counting.
#[derive(Clone, Copy, Debug)]
pub enum OffSpace<'a> {
    /// The OFF-set, indexed directly.
    Explicit(&'a TernaryIndex),
    /// Everything outside the indexed ON-set.
    ///
    /// Conflict queries compare point counts via [`Cube::covered_count`], so
    /// they inherit its panic on cubes with more than 127 free positions.
    ComplementOf(&'a TernaryIndex),
}

impl<'a> OffSpace<'a> {
    pub fn intersects(&self, cube: &Cube) -> bool {
        match self {
            Self::Explicit(off) => off.contains_within(cube),
            Self::ComplementOf(on) => on.count_within(cube) != cube.covered_count(),
        }
    }
}

/// Generalizes `seed` into a prime implicant.
///
/// One pass over the positions in ascending variable index: each position is
/// tentatively raised to don't-care and kept that way if the widened cube
/// still avoids the OFF-space. Every candidate builds on the relaxations
/// already committed, so after the single pass no remaining fixed position can
/// be raised without conflict.
pub fn expand(seed: &Minterm, off_space: &OffSpace<'_>) -> Cube {
    let mut cube = seed.to_cube();
    for ix in 0..cube.width() {
        let original = cube.trit(ix);
        cube.set_trit(ix, Trit::DontCare);
        if off_space.intersects(&cube) {
            cube.set_trit(ix, original);
        } else {
            trace!("expand: raised position {} of seed {}", ix, seed);
        }
    }
    debug!("expand: {} -> {}", seed, cube);
    cube
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minterm(s: &str) -> Minterm {
        Minterm::parse(s, s.len()).unwrap()
    }

    fn off_index(strs: &[&str], depth: usize) -> TernaryIndex {
        let minterms: Vec<_> = strs.iter().map(|s| minterm(s)).collect();
        TernaryIndex::from_minterms(depth, &minterms)
    }

    #[test]
    fn test_expand_blocked_everywhere() {
        // XNOR: neither position of 00 can be raised.
        let off = off_index(&["01", "10"], 2);
        let prime = expand(&minterm("00"), &OffSpace::Explicit(&off));
        assert_eq!(prime.to_string(), "00");
    }

    #[test]
    fn test_expand_partial() {
        let off = off_index(&["10", "11"], 2);
        let prime = expand(&minterm("00"), &OffSpace::Explicit(&off));
        assert_eq!(prime.to_string(), "0-");
    }

    #[test]
    fn test_expand_empty_off_set() {
        let off = off_index(&[], 4);
        let prime = expand(&minterm("0000"), &OffSpace::Explicit(&off));
        assert_eq!(prime, Cube::universe(4));
    }

    #[test]
    fn test_expand_zero_width() {
        let off = TernaryIndex::new(0);
        let prime = expand(&Minterm::from_bits([]), &OffSpace::Explicit(&off));
        assert_eq!(prime.width(), 0);
    }

    #[test]
    fn test_expand_compounds_relaxations() {
        // ON-set 0-0 plus 110; OFF-set blocks raising position 1 after
        // position 0 has been raised from seed 000: --0 would cover 010.
        let off = off_index(&["010", "011", "111", "001", "101"], 3);
        let prime = expand(&minterm("000"), &OffSpace::Explicit(&off));
        assert_eq!(prime.to_string(), "-00");
    }

    #[test]
    fn test_implicit_matches_explicit() {
        // f = x0': ON {00, 01}, OFF {10, 11}.
        let on = off_index(&["00", "01"], 2);
        let off = off_index(&["10", "11"], 2);

        let via_explicit = expand(&minterm("00"), &OffSpace::Explicit(&off));
        let via_complement = expand(&minterm("00"), &OffSpace::ComplementOf(&on));
        assert_eq!(via_explicit, via_complement);
        assert_eq!(via_complement.to_string(), "0-");
    }

    #[test]
    fn test_primality() {
        let off = off_index(&["011", "100", "110"], 3);
        let off_space = OffSpace::Explicit(&off);
        let prime = expand(&minterm("000"), &off_space);
        for ix in 0..3 {
            if prime.trit(ix).is_fixed() {
                let mut widened = prime.clone();
                widened.set_trit(ix, Trit::DontCare);
                assert!(
                    off_space.intersects(&widened),
                    "position {} of {} should not be raisable",
                    ix,
                    prime
                );
            }
        }
    }
}
