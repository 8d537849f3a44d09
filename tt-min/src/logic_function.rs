// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Minterm, errors::FunctionError, index::TernaryIndex};
use std::fmt;

/// A completely specified single-output Boolean function of `width` variables.
///
/// Construction performs the full input validation: malformed minterm
/// strings, points claimed by both sets, and (unless the implicit-OFF-set
/// option is on) points claimed by neither are all rejected before any
/// minimization work can run.
#[derive(Clone)]
pub struct LogicFunction {
    width: usize,
    on_set: Vec<Minterm>,
    off_set: Vec<Minterm>,
    implicit_off_set: bool,
}

impl LogicFunction {
    /// Builds a function from minterm strings over `{0,1}`.
    ///
    /// With `implicit_off_set` set, points listed in neither set are treated
    /// as OFF; otherwise every one of the `2^width` points must appear in
    /// exactly one set.
    pub fn from_strings<'a>(
        width: usize,
        on_set: impl IntoIterator<Item = &'a str>,
        off_set: impl IntoIterator<Item = &'a str>,
        implicit_off_set: bool,
    ) -> Result<Self, FunctionError> {
        let on_set = on_set
            .into_iter()
            .map(|s| Minterm::parse(s, width))
            .collect::<Result<Vec<_>, _>>()?;
        let off_set = off_set
            .into_iter()
            .map(|s| Minterm::parse(s, width))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_minterms(width, on_set, off_set, implicit_off_set)
    }

    /// Builds a function from already-parsed minterms, applying the same
    /// validation as [`from_strings`](Self::from_strings). Duplicates within a
    /// set are dropped.
    pub fn from_minterms(
        width: usize,
        on_set: Vec<Minterm>,
        off_set: Vec<Minterm>,
        implicit_off_set: bool,
    ) -> Result<Self, FunctionError> {
        for minterm in on_set.iter().chain(&off_set) {
            if minterm.width() != width {
                return Err(FunctionError::MalformedInput {
                    minterm: minterm.to_string(),
                    expected_width: width,
                });
            }
        }

        let mut on_index = TernaryIndex::new(width);
        let mut on_dedup = Vec::with_capacity(on_set.len());
        for minterm in on_set {
            if on_index.insert(&minterm) {
                on_dedup.push(minterm);
            }
        }

        let mut union_index = on_index.clone();
        let mut off_dedup = Vec::with_capacity(off_set.len());
        for minterm in off_set {
            if on_index.contains(&minterm) {
                return Err(FunctionError::InconsistentSpecification {
                    minterm: minterm.to_string(),
                });
            }
            if union_index.insert(&minterm) {
                off_dedup.push(minterm);
            }
        }

        if !implicit_off_set {
            if let Some(missing) = union_index.first_absent() {
                return Err(FunctionError::IncompleteSpecification {
                    minterm: missing.to_string(),
                });
            }
        }

        Ok(Self {
            width,
            on_set: on_dedup,
            off_set: off_dedup,
            implicit_off_set,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn on_set(&self) -> &[Minterm] {
        &self.on_set
    }

    #[inline]
    pub fn off_set(&self) -> &[Minterm] {
        &self.off_set
    }

    #[inline]
    pub fn implicit_off_set(&self) -> bool {
        self.implicit_off_set
    }

    /// Evaluates the function at a full input assignment.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        debug_assert_eq!(values.len(), self.width);
        self.on_set
            .iter()
            .any(|m| m.bits().zip(values).all(|(bit, &v)| bit == v))
    }
}

impl fmt::Debug for LogicFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LogicFunction")
            .field("width", &self.width)
            .field("on_set", &self.on_set.len())
            .field("off_set", &self.off_set.len())
            .field("implicit_off_set", &self.implicit_off_set)
            .finish()
    }
}
