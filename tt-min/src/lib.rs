// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic two-level minimization of completely specified Boolean
//! functions.
//!
//! Given the ON-set and OFF-set of a function, [`LogicFunction::minimize`]
//! produces a small sum-of-products cover: a sequence of cubes whose union
//! equals the ON-set and never touches the OFF-set. Covering is heuristic
//! (expansion of seed points against a ternary index of the OFF-set followed
//! by redundancy elimination); results are near-minimal, not guaranteed
//! optimal.
//!
//! [`LogicFunction::minimize`]: logic_function::LogicFunction::minimize

pub mod cover;
pub mod cube;
pub mod errors;
pub mod expand;
pub mod index;
pub mod logic_function;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
