// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cube::{Cube, Minterm, Trit},
    logic_function::LogicFunction,
};
use proptest::prelude::*;

impl Arbitrary for Trit {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Trit::Zero),
            Just(Trit::One),
            Just(Trit::DontCare),
        ]
        .boxed()
    }
}

pub fn cube_strategy(width: usize) -> impl Strategy<Value = Cube> {
    prop::collection::vec(any::<Trit>(), width).prop_map(Cube::from_trits)
}

pub fn minterm_strategy(width: usize) -> impl Strategy<Value = Minterm> {
    prop::collection::vec(any::<bool>(), width).prop_map(Minterm::from_bits)
}

/// Generates a completely specified function of `width` variables by drawing a
/// full truth table and partitioning its points into ON and OFF sets.
pub fn complete_function_strategy(width: usize) -> impl Strategy<Value = LogicFunction> {
    prop::collection::vec(any::<bool>(), 1 << width).prop_map(move |table| {
        let mut on_set = Vec::new();
        let mut off_set = Vec::new();
        for (index, &value) in table.iter().enumerate() {
            let minterm = Minterm::from_index(width, index as u64);
            if value {
                on_set.push(minterm);
            } else {
                off_set.push(minterm);
            }
        }
        LogicFunction::from_minterms(width, on_set, off_set, false)
            .expect("generated table is complete and consistent")
    })
}
