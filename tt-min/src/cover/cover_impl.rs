// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{CoverMatrixDisplay, CoverSopDisplay},
    cube::{Cube, Minterm},
    errors::InvalidCubeString,
    index::TernaryIndex,
};
use std::fmt;

use super::caches::{CoverCache, CoverCost};

/// An ordered sequence of cubes, interpreted as their union (a sum of
/// products).
///
/// Insertion order is meaningful: the covering loop appends primes in seed
/// order, and rerunning the minimizer on identical input reproduces the same
/// sequence.
#[derive(Clone, Default)]
pub struct Cover {
    elements: Vec<Cube>,
    cache: CoverCache,
}

impl Cover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(elements: impl IntoIterator<Item = Cube>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            cache: CoverCache::default(),
        }
    }

    /// Parses each element from a `{0,1,-}` string.
    pub fn from_strings<'a>(
        strings: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, InvalidCubeString> {
        let elements = strings
            .into_iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_elements(elements))
    }

    #[inline]
    pub fn elements(&self) -> &[Cube] {
        &self.elements
    }

    #[inline]
    pub fn cube_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Width of the member cubes, or `None` for an empty cover.
    pub fn width(&self) -> Option<usize> {
        self.elements.first().map(|c| c.width())
    }

    pub fn push(&mut self, cube: Cube) {
        self.cache.invalidate();
        self.elements.push(cube);
    }

    pub(crate) fn remove(&mut self, ix: usize) -> Cube {
        self.cache.invalidate();
        self.elements.remove(ix)
    }

    #[inline]
    pub fn cost(&self) -> CoverCost {
        *self.cache.get_or_init_cost(&self.elements)
    }

    #[inline]
    pub fn literal_count(&self) -> usize {
        self.cost().literal_count
    }

    pub fn covers(&self, minterm: &Minterm) -> bool {
        self.elements.iter().any(|c| c.contains_minterm(minterm))
    }

    /// Completeness: every given minterm lies inside some member.
    pub fn covers_all<'a>(&self, minterms: impl IntoIterator<Item = &'a Minterm>) -> bool {
        minterms.into_iter().all(|m| self.covers(m))
    }

    /// Soundness: no member's covered set intersects the indexed point set.
    pub fn avoids(&self, off_index: &TernaryIndex) -> bool {
        self.elements.iter().all(|c| !off_index.contains_within(c))
    }

    /// Evaluates the cover (as a sum of products) against a full input
    /// assignment.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        self.elements.iter().any(|c| c.evaluate(values))
    }

    /// Drops members strictly contained in another member.
    pub fn single_cube_containment(&self) -> Self {
        let simplified = self
            .elements
            .iter()
            .filter(|elem| {
                !self
                    .elements
                    .iter()
                    .any(|other| other.strictly_contains(elem))
            })
            .cloned();
        Self::with_elements(simplified)
    }

    /// Brute-force equivalence check over all `2^width` assignments. Returns
    /// the first differing assignment on mismatch.
    ///
    /// Panics if `width` is 64 or more: enumerating the assignments would
    /// never terminate anyway.
    pub fn check_logically_equivalent(
        &self,
        other: &Self,
        width: usize,
    ) -> Result<(), Vec<bool>> {
        assert!(
            width < 64,
            "equivalence check enumerates 2^{} assignments",
            width
        );
        for input_bits in 0..2_u64.pow(width as u32) {
            let values = Minterm::from_index(width, input_bits).to_values();
            if self.evaluate(&values) != other.evaluate(&values) {
                return Err(values);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }

    #[inline]
    pub fn sop_display(&self) -> CoverSopDisplay<'_> {
        CoverSopDisplay::new(self)
    }
}

impl PartialEq for Cover {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Cover {}

impl fmt::Debug for Cover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cover")
            .field(&format_args!("{}", self.sop_display()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minterm(s: &str) -> Minterm {
        Minterm::parse(s, s.len()).unwrap()
    }

    #[test]
    fn test_cost_tracks_mutation() {
        let mut cover = Cover::from_strings(["0-", "11"]).unwrap();
        assert_eq!(
            cover.cost(),
            CoverCost {
                cube_count: 2,
                literal_count: 3
            }
        );

        cover.push("1-".parse().unwrap());
        assert_eq!(
            cover.cost(),
            CoverCost {
                cube_count: 3,
                literal_count: 4
            }
        );

        cover.remove(0);
        assert_eq!(
            cover.cost(),
            CoverCost {
                cube_count: 2,
                literal_count: 3
            }
        );
    }

    #[test]
    fn test_covers() {
        let cover = Cover::from_strings(["0-", "11"]).unwrap();
        assert!(cover.covers(&minterm("00")));
        assert!(cover.covers(&minterm("01")));
        assert!(cover.covers(&minterm("11")));
        assert!(!cover.covers(&minterm("10")));

        let on = [minterm("00"), minterm("01"), minterm("11")];
        assert!(cover.covers_all(&on));
        let off = TernaryIndex::from_minterms(2, &[minterm("10")]);
        assert!(cover.avoids(&off));
        let off = TernaryIndex::from_minterms(2, &[minterm("01")]);
        assert!(!cover.avoids(&off));
    }

    #[test]
    fn test_evaluate() {
        let cover = Cover::from_strings(["0-", "11"]).unwrap();
        assert!(cover.evaluate(&[false, true]));
        assert!(cover.evaluate(&[true, true]));
        assert!(!cover.evaluate(&[true, false]));
    }

    #[test]
    fn test_single_cube_containment() {
        let cover = Cover::from_strings(["0-", "01", "11"]).unwrap();
        let simplified = cover.single_cube_containment();
        assert_eq!(simplified, Cover::from_strings(["0-", "11"]).unwrap());
    }

    #[test]
    fn test_check_logically_equivalent() {
        let a = Cover::from_strings(["0-", "-0"]).unwrap();
        let b = Cover::from_strings(["00", "01", "10"]).unwrap();
        a.check_logically_equivalent(&b, 2).unwrap();

        let c = Cover::from_strings(["0-"]).unwrap();
        assert_eq!(
            a.check_logically_equivalent(&c, 2),
            Err(vec![true, false])
        );
    }

    #[test]
    #[should_panic(expected = "equivalence check enumerates")]
    fn test_check_logically_equivalent_width_cap() {
        let _ = Cover::new().check_logically_equivalent(&Cover::new(), 64);
    }
}
