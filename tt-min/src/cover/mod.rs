// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod caches;
mod cover_impl;
mod display;
mod minimize;

pub use caches::CoverCost;
pub use cover_impl::*;
pub use display::*;
