// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use tt_min::{cover::Cover, logic_function::LogicFunction};

/// One generated regression case: a random complete function together with
/// the cover the minimizer produced for it.
pub struct FixtureDetails {
    pub name: String,
    pub width: usize,
    pub on_count: usize,
    pub cover: Cover,
}

impl FixtureDetails {
    pub fn new(name: String, function: &LogicFunction, cover: Cover) -> Self {
        Self {
            name,
            width: function.width(),
            on_count: function.on_set().len(),
            cover,
        }
    }

    /// Single-line record written to the fixture data file.
    pub fn to_line(&self) -> String {
        format!(
            "{}: width={} on={} cubes={} literals={} sop={}",
            self.name,
            self.width,
            self.on_count,
            self.cover.cube_count(),
            self.cover.literal_count(),
            self.cover.sop_display(),
        )
    }
}
