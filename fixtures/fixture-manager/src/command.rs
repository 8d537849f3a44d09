// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use fixture_details::AllFixtures;

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// Generate random functions, minimize them and check the results.
    GenerateInputs {
        #[clap(long, short, default_value_t = 64)]
        count: usize,
    },
    /// Generate and write the regression data file.
    GenerateOutputs {
        #[clap(long, short, default_value_t = 64)]
        count: usize,
    },
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::GenerateInputs { count } => {
                AllFixtures::generate_6(count)?;
                Ok(())
            }
            Self::GenerateOutputs { count } => AllFixtures::get().write_outputs(count),
        }
    }
}
