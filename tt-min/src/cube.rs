// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{FunctionError, InvalidCubeString};
use bitvec::prelude::*;
use std::{cmp::Ordering, fmt, str::FromStr};

/// The value a variable takes inside a [`Cube`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trit {
    Zero,
    One,
    DontCare,
}

impl Trit {
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Trit::One
        } else {
            Trit::Zero
        }
    }

    /// Returns true for `Zero` and `One`: the position counts as a literal.
    #[inline]
    pub fn is_fixed(self) -> bool {
        !matches!(self, Trit::DontCare)
    }

    /// Whether a fully specified bit agrees with this position.
    #[inline]
    pub fn matches(self, bit: bool) -> bool {
        match self {
            Trit::Zero => !bit,
            Trit::One => bit,
            Trit::DontCare => true,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Trit::Zero => '0',
            Trit::One => '1',
            Trit::DontCare => '-',
        }
    }

    // Rank used for lexicographic cube ordering: fixed values sort before
    // don't-cares so that minterms come first among equal prefixes.
    #[inline]
    fn rank(self) -> u8 {
        match self {
            Trit::Zero => 0,
            Trit::One => 1,
            Trit::DontCare => 2,
        }
    }
}

/// A product term over `width` variables.
///
/// Represents the set of minterms agreeing with every fixed position. A cube
/// with all positions fixed is a single point.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    trits: Vec<Trit>,
}

impl Cube {
    /// The all-don't-care cube: the constant-1 function over `width` variables.
    pub fn universe(width: usize) -> Self {
        Self {
            trits: vec![Trit::DontCare; width],
        }
    }

    pub fn from_trits(trits: impl Into<Vec<Trit>>) -> Self {
        Self {
            trits: trits.into(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.trits.len()
    }

    #[inline]
    pub fn trit(&self, ix: usize) -> Trit {
        self.trits[ix]
    }

    #[inline]
    pub fn set_trit(&mut self, ix: usize, trit: Trit) {
        self.trits[ix] = trit;
    }

    #[inline]
    pub fn trits(&self) -> &[Trit] {
        &self.trits
    }

    /// Number of fixed positions.
    pub fn literal_count(&self) -> usize {
        self.trits.iter().filter(|t| t.is_fixed()).count()
    }

    /// Number of minterms inside this cube: `2^(width - literal_count)`.
    ///
    /// Panics if more than 127 positions are don't-cares.
    pub fn covered_count(&self) -> u128 {
        let free = self.width() - self.literal_count();
        assert!(free <= 127, "cube with {} free positions overflows u128", free);
        1u128 << free
    }

    /// Index of the last fixed position, if any.
    pub fn last_fixed(&self) -> Option<usize> {
        self.trits.iter().rposition(|t| t.is_fixed())
    }

    pub fn contains_minterm(&self, minterm: &Minterm) -> bool {
        debug_assert_eq!(self.width(), minterm.width());
        self.trits
            .iter()
            .zip(minterm.bits())
            .all(|(&t, bit)| t.matches(bit))
    }

    /// Whether every point of `other` is also a point of `self`.
    pub fn contains(&self, other: &Cube) -> bool {
        debug_assert_eq!(self.width(), other.width());
        self.trits
            .iter()
            .zip(&other.trits)
            .all(|(&c, &d)| match (c, d) {
                (Trit::DontCare, _) => true,
                (Trit::Zero, Trit::Zero) | (Trit::One, Trit::One) => true,
                _ => false,
            })
    }

    pub fn strictly_contains(&self, other: &Cube) -> bool {
        self.contains(other) && self != other
    }

    #[inline]
    pub fn is_minterm(&self) -> bool {
        self.trits.iter().all(|t| t.is_fixed())
    }

    pub fn as_minterm(&self) -> Option<Minterm> {
        let mut bits = BitVec::with_capacity(self.width());
        for &trit in &self.trits {
            match trit {
                Trit::Zero => bits.push(false),
                Trit::One => bits.push(true),
                Trit::DontCare => return None,
            }
        }
        Some(Minterm { bits })
    }

    /// Evaluates the cube against a full input assignment.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        debug_assert_eq!(self.width(), values.len());
        self.trits
            .iter()
            .zip(values)
            .all(|(&t, &bit)| t.matches(bit))
    }

    /// Merges two cubes that differ in exactly one fixed position, yielding
    /// the cube with that position raised to don't-care. Returns `None` if the
    /// cubes are not mergeable.
    pub fn merge(&self, other: &Cube) -> Option<Cube> {
        if self.width() != other.width() {
            return None;
        }
        let mut merged = self.clone();
        let mut combined = 0;
        for ix in 0..self.width() {
            match (self.trits[ix], other.trits[ix]) {
                (c, d) if c == d => {}
                (Trit::DontCare, _) | (_, Trit::DontCare) => return None,
                _ => {
                    merged.trits[ix] = Trit::DontCare;
                    combined += 1;
                    if combined > 1 {
                        return None;
                    }
                }
            }
        }
        (combined == 1).then(|| merged)
    }

    #[inline]
    pub fn algebraic_display(&self) -> CubeAlgebraicDisplay<'_> {
        CubeAlgebraicDisplay { cube: self }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &trit in &self.trits {
            write!(f, "{}", trit.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cube")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl FromStr for Cube {
    type Err = InvalidCubeString;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(Trit::Zero),
                '1' => Ok(Trit::One),
                '-' => Ok(Trit::DontCare),
                _ => Err(InvalidCubeString),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Cube::from_trits(trits))
    }
}

impl PartialOrd for Cube {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cube {
    fn cmp(&self, other: &Self) -> Ordering {
        for (c, d) in self.trits.iter().zip(&other.trits) {
            match c.rank().cmp(&d.rank()) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        self.width().cmp(&other.width())
    }
}

/// A fully specified point of a Boolean function.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Minterm {
    bits: BitVec,
}

impl Minterm {
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// The minterm whose bit pattern is `index` written in binary, variable 0
    /// being the most significant bit. Lexicographic order on minterms of a
    /// given width thus agrees with numeric order on indexes.
    pub fn from_index(width: usize, index: u64) -> Self {
        Self::from_bits((0..width).map(|ix| (index >> (width - 1 - ix)) & 1 == 1))
    }

    /// Parses an `n`-character string over `{0,1}`, validating it against the
    /// expected width.
    pub fn parse(s: &str, width: usize) -> Result<Self, FunctionError> {
        let malformed = || FunctionError::MalformedInput {
            minterm: s.to_owned(),
            expected_width: width,
        };
        if s.len() != width {
            return Err(malformed());
        }
        let mut bits = BitVec::with_capacity(width);
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(malformed()),
            }
        }
        Ok(Self { bits })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn bit(&self, ix: usize) -> bool {
        self.bits[ix]
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn to_cube(&self) -> Cube {
        Cube::from_trits(self.bits().map(Trit::from_bit).collect::<Vec<_>>())
    }

    pub fn to_values(&self) -> Vec<bool> {
        self.bits().collect()
    }
}

impl fmt::Display for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Minterm")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl PartialOrd for Minterm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minterm {
    fn cmp(&self, other: &Self) -> Ordering {
        for (c, d) in self.bits().zip(other.bits()) {
            match c.cmp(&d) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        self.width().cmp(&other.width())
    }
}

pub struct CubeAlgebraicDisplay<'a> {
    cube: &'a Cube,
}

impl<'a> fmt::Display for CubeAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cube.trits().iter().all(|t| !t.is_fixed()) {
            return write!(f, "1");
        }
        for (ix, &trit) in self.cube.trits().iter().enumerate() {
            match trit {
                Trit::One => write!(f, "{}", AlgebraicSymbol::input(ix))?,
                Trit::Zero => write!(f, "{}'", AlgebraicSymbol::input(ix))?,
                Trit::DontCare => {}
            }
        }
        Ok(())
    }
}

const INPUT_ALGEBRAIC_SYMBOLS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

#[derive(Debug)]
pub(crate) enum AlgebraicSymbol {
    Char(char),
    String(String),
}

impl AlgebraicSymbol {
    pub(crate) fn input(input_ix: usize) -> Self {
        if input_ix < 26 {
            return Self::Char(INPUT_ALGEBRAIC_SYMBOLS[input_ix]);
        }
        let rest = input_ix / 26;
        let last_ch = INPUT_ALGEBRAIC_SYMBOLS[input_ix % 26];

        match Self::input(rest) {
            Self::Char(ch) => Self::String(format!("{}{}", ch, last_ch)),
            Self::String(mut s) => {
                s.push(last_ch);
                Self::String(s)
            }
        }
    }
}

impl fmt::Display for AlgebraicSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{}", *ch),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let cube: Cube = "0-1".parse().unwrap();
        assert_eq!(cube.trit(0), Trit::Zero);
        assert_eq!(cube.trit(1), Trit::DontCare);
        assert_eq!(cube.trit(2), Trit::One);
        assert_eq!(cube.to_string(), "0-1");

        assert_eq!("0x1".parse::<Cube>(), Err(InvalidCubeString));

        let minterm = Minterm::parse("011", 3).unwrap();
        assert_eq!(minterm.to_string(), "011");
        assert_eq!(minterm.to_cube().to_string(), "011");
    }

    #[test]
    fn test_parse_minterm_errors() {
        assert_eq!(
            Minterm::parse("01-", 3),
            Err(FunctionError::MalformedInput {
                minterm: "01-".to_owned(),
                expected_width: 3,
            })
        );
        assert_eq!(
            Minterm::parse("01", 3),
            Err(FunctionError::MalformedInput {
                minterm: "01".to_owned(),
                expected_width: 3,
            })
        );
    }

    #[test]
    fn test_counts() {
        let cube: Cube = "0--1".parse().unwrap();
        assert_eq!(cube.literal_count(), 2);
        assert_eq!(cube.covered_count(), 4);
        assert_eq!(cube.last_fixed(), Some(3));

        let universe = Cube::universe(4);
        assert_eq!(universe.literal_count(), 0);
        assert_eq!(universe.covered_count(), 16);
        assert_eq!(universe.last_fixed(), None);

        let point: Cube = "1010".parse().unwrap();
        assert!(point.is_minterm());
        assert_eq!(point.covered_count(), 1);
        assert_eq!(point.as_minterm().unwrap().to_string(), "1010");
        assert!(universe.as_minterm().is_none());
    }

    #[test]
    fn test_containment() {
        let big: Cube = "0--".parse().unwrap();
        let small: Cube = "0-1".parse().unwrap();
        assert!(big.contains(&small));
        assert!(big.strictly_contains(&small));
        assert!(!small.contains(&big));
        assert!(big.contains(&big));
        assert!(!big.strictly_contains(&big));

        assert!(big.contains_minterm(&Minterm::parse("011", 3).unwrap()));
        assert!(!big.contains_minterm(&Minterm::parse("111", 3).unwrap()));
    }

    #[test]
    fn test_merge() {
        let a: Cube = "101".parse().unwrap();
        let b: Cube = "111".parse().unwrap();
        assert_eq!(a.merge(&b).unwrap().to_string(), "1-1");

        // Distance two.
        let c: Cube = "011".parse().unwrap();
        assert!(a.merge(&c).is_none());
        // Don't-care against a fixed position.
        let d: Cube = "1-1".parse().unwrap();
        assert!(a.merge(&d).is_none());
        // Identical cubes have nothing to combine.
        assert!(a.merge(&a).is_none());
    }

    #[test]
    fn test_minterm_order() {
        let m0 = Minterm::from_index(3, 0b001);
        let m1 = Minterm::from_index(3, 0b010);
        let m2 = Minterm::from_index(3, 0b100);
        assert!(m0 < m1 && m1 < m2);
        assert_eq!(m0.to_string(), "001");
        assert_eq!(m2.to_string(), "100");
    }

    #[test]
    fn test_evaluate() {
        let cube: Cube = "1-0".parse().unwrap();
        assert!(cube.evaluate(&[true, false, false]));
        assert!(cube.evaluate(&[true, true, false]));
        assert!(!cube.evaluate(&[false, true, false]));
        assert!(!cube.evaluate(&[true, true, true]));
    }

    #[test]
    fn test_algebraic_display() {
        let cube: Cube = "0-1".parse().unwrap();
        assert_eq!(cube.algebraic_display().to_string(), "a'c");
        assert_eq!(Cube::universe(2).algebraic_display().to_string(), "1");
    }
}
