// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    cube::Minterm,
    errors::DeadlineExceeded,
    expand::{expand, OffSpace},
    index::TernaryIndex,
    logic_function::LogicFunction,
};
use log::debug;
use std::time::Instant;

impl LogicFunction {
    /// Produces a sound, complete, irredundant cover of the ON-set.
    ///
    /// Deterministic: identical input yields an identical cover, cube for
    /// cube, in the same order.
    pub fn minimize(&self) -> Cover {
        let outcome = self.run_selector(None);
        debug_assert!(outcome.complete, "no deadline, so the loop ran to completion");
        let mut cover = outcome.cover;
        cover.make_irredundant(self.on_set());
        cover
    }

    /// Like [`minimize`](Self::minimize), but aborts the covering loop between
    /// iterations once `deadline` has passed. The error carries the partial
    /// cover accumulated so far; it must not be treated as a minimized result.
    pub fn minimize_with_deadline(&self, deadline: Instant) -> Result<Cover, DeadlineExceeded> {
        let outcome = self.run_selector(Some(deadline));
        if !outcome.complete {
            return Err(DeadlineExceeded {
                partial: outcome.cover,
                iterations: outcome.iterations,
            });
        }
        let mut cover = outcome.cover;
        cover.make_irredundant(self.on_set());
        Ok(cover)
    }

    /// The covering loop: seed with the lexicographically smallest uncovered
    /// ON-set point, expand it into a prime against the OFF-space, and strike
    /// everything the prime covers from the uncovered index. Each iteration
    /// removes at least its seed, so the loop terminates.
    fn run_selector(&self, deadline: Option<Instant>) -> SelectorOutcome {
        let mut uncovered = TernaryIndex::from_minterms(self.width(), self.on_set());
        let conflict_index = if self.implicit_off_set() {
            // The immutable full ON-set, separate from the shrinking
            // uncovered index.
            uncovered.clone()
        } else {
            TernaryIndex::from_minterms(self.width(), self.off_set())
        };
        let off_space = if self.implicit_off_set() {
            OffSpace::ComplementOf(&conflict_index)
        } else {
            OffSpace::Explicit(&conflict_index)
        };

        let mut cover = Cover::new();
        let mut iterations = 0;
        while let Some(seed) = uncovered.min_minterm() {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    debug!(
                        "selector: deadline hit after {} iterations, {} points uncovered",
                        iterations,
                        uncovered.len()
                    );
                    return SelectorOutcome {
                        cover,
                        iterations,
                        complete: false,
                    };
                }
            }

            let prime = expand(&seed, &off_space);
            let removed = uncovered.remove_covered(&prime);
            debug_assert!(removed >= 1, "the prime covers at least its seed");
            debug!(
                "selector: seed {} -> prime {} covering {} remaining points",
                seed, prime, removed
            );
            cover.push(prime);
            iterations += 1;
        }

        SelectorOutcome {
            cover,
            iterations,
            complete: true,
        }
    }
}

struct SelectorOutcome {
    cover: Cover,
    iterations: usize,
    complete: bool,
}

impl Cover {
    /// Strips members whose removal keeps every given ON-set point covered.
    ///
    /// Members are visited in reverse insertion order; passes repeat until one
    /// completes with no removal. Coverage is tracked with per-point counts,
    /// so a member is removable exactly when every point it covers is covered
    /// at least twice.
    pub fn make_irredundant(&mut self, on_set: &[Minterm]) {
        let mut counts: Vec<usize> = on_set
            .iter()
            .map(|m| {
                self.elements()
                    .iter()
                    .filter(|c| c.contains_minterm(m))
                    .count()
            })
            .collect();

        loop {
            let mut removed_any = false;
            let mut ix = self.cube_count();
            while ix > 0 {
                ix -= 1;
                let covered: Vec<usize> = on_set
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| self.elements()[ix].contains_minterm(m))
                    .map(|(point_ix, _)| point_ix)
                    .collect();
                if covered.iter().all(|&point_ix| counts[point_ix] >= 2) {
                    for &point_ix in &covered {
                        counts[point_ix] -= 1;
                    }
                    let removed = self.remove(ix);
                    debug!("irredundant: dropped {}", removed);
                    removed_any = true;
                }
            }
            if !removed_any {
                break;
            }
        }
    }
}
