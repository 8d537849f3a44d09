// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::Cube;
use once_cell::sync::OnceCell;

/// Cache for derived cover data, invalidated whenever the element list
/// changes.
#[derive(Clone, Debug, Default)]
pub(super) struct CoverCache {
    cost: OnceCell<CoverCost>,
}

impl CoverCache {
    pub(super) fn invalidate(&mut self) {
        self.cost = OnceCell::new();
    }

    pub(super) fn get_or_init_cost(&self, elements: &[Cube]) -> &CoverCost {
        self.cost.get_or_init(|| CoverCost::new(elements))
    }
}

/// Size measures of a cover: the usual objectives of two-level minimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoverCost {
    pub cube_count: usize,
    pub literal_count: usize,
}

impl CoverCost {
    fn new(elements: &[Cube]) -> Self {
        Self {
            cube_count: elements.len(),
            literal_count: elements.iter().map(|c| c.literal_count()).sum(),
        }
    }
}
