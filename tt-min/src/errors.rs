// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cover::Cover;
use std::{error, fmt};

/// A cube string contained a character outside `{0, 1, -}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCubeString;

impl fmt::Display for InvalidCubeString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cube strings consist of the characters 0, 1 and -")
    }
}

impl error::Error for InvalidCubeString {}

/// An error detected while constructing a [`LogicFunction`].
///
/// All variants are reported before any minimization work begins: the core
/// never starts computing on invalid data.
///
/// [`LogicFunction`]: crate::logic_function::LogicFunction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FunctionError {
    /// A minterm string has the wrong length or a character outside `{0, 1}`.
    MalformedInput {
        minterm: String,
        expected_width: usize,
    },

    /// A minterm appears in both the ON-set and the OFF-set.
    InconsistentSpecification { minterm: String },

    /// A point appears in neither set and the implicit-OFF-set option is off.
    IncompleteSpecification { minterm: String },
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedInput {
                minterm,
                expected_width,
            } => {
                write!(
                    f,
                    "malformed minterm {:?}: expected {} characters over 0/1",
                    minterm, expected_width
                )
            }
            Self::InconsistentSpecification { minterm } => {
                write!(
                    f,
                    "minterm {} appears in both the ON-set and the OFF-set",
                    minterm
                )
            }
            Self::IncompleteSpecification { minterm } => {
                write!(
                    f,
                    "minterm {} appears in neither the ON-set nor the OFF-set",
                    minterm
                )
            }
        }
    }
}

impl error::Error for FunctionError {}

/// The covering loop was aborted by a deadline before every ON-set point was
/// covered.
///
/// Carries the partial cover accumulated so far; it excludes the OFF-set but
/// does not cover the full ON-set, so callers must not treat it as a valid
/// minimized result.
#[derive(Clone, Debug)]
pub struct DeadlineExceeded {
    pub partial: Cover,
    pub iterations: usize,
}

impl fmt::Display for DeadlineExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "deadline exceeded after {} iterations with {} cubes selected",
            self.iterations,
            self.partial.cube_count()
        )
    }
}

impl error::Error for DeadlineExceeded {}
