// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{details::FixtureDetails, value_generator::ValueGenerator};
use camino::Utf8PathBuf;
use color_eyre::{eyre::eyre, Result};
use once_cell::sync::Lazy;
use tt_min::{index::TernaryIndex, proptest_helpers::complete_function_strategy};

pub struct AllFixtures {
    dir: Utf8PathBuf,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let dir: Utf8PathBuf = env!("CARGO_MANIFEST_DIR").into();
        let dir = dir.parent().expect("manifest dir has a parent").join("data");
        Self { dir }
    }

    /// Generates `count` random complete 6-variable functions, minimizes each
    /// and checks the cover invariants, printing a size summary.
    pub fn generate_6(count: usize) -> Result<Vec<FixtureDetails>> {
        let mut value_gen = ValueGenerator::from_seed("tt-min_6");

        let mut fixtures = Vec::with_capacity(count);
        let mut total_cubes = 0;
        for case_ix in 0..count {
            let mut gen = value_gen.partial_clone();
            let function = gen.generate(complete_function_strategy(6));
            let cover = function.minimize();

            if !cover.covers_all(function.on_set()) {
                return Err(eyre!("case {}: cover misses an ON-set point", case_ix));
            }
            let off_index = TernaryIndex::from_minterms(function.width(), function.off_set());
            if !cover.avoids(&off_index) {
                return Err(eyre!("case {}: cover touches the OFF-set", case_ix));
            }

            total_cubes += cover.cube_count();
            fixtures.push(FixtureDetails::new(
                format!("random_6_{:03}", case_ix),
                &function,
                cover,
            ));
        }

        println!("{} cases, {} cubes total", count, total_cubes);
        Ok(fixtures)
    }

    /// Writes the generated fixtures to the regression data file.
    pub fn write_outputs(&self, count: usize) -> Result<()> {
        let fixtures = Self::generate_6(count)?;
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join("random_6.txt");
        let mut contents = String::new();
        for fixture in &fixtures {
            contents.push_str(&fixture.to_line());
            contents.push('\n');
        }
        std::fs::write(&path, contents)?;
        println!("wrote {} fixtures to {}", fixtures.len(), path);
        Ok(())
    }
}
