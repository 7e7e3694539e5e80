//! Bounded, hash-deduplicated frontier selection.
//!
//! The selector receives every candidate expansion of a turn and keeps
//! the `W` best non-finished ones, deduplicated by state fingerprint.
//! A segment tree over `(cost, slot)` pairs tracks the worst kept
//! candidate so eviction is O(log W); a generational probe map makes
//! per-turn dedup and clearing O(1) amortized.

use std::marker::PhantomData;

use crate::probe_map::ProbeMap;
use crate::segment_tree::{Monoid, SegmentTree};
use crate::traits::{BeamState, BoundedCost, Evaluate};

type CostOf<S> = <<S as BeamState>::Eval as Evaluate>::Cost;

/// A proposed child node: the frontier leaf it extends, the action that
/// reaches it, and the pre-computed evaluator/fingerprint pair.
pub struct Candidate<S: BeamState> {
    /// Index of the parent leaf in the tour.
    pub parent: usize,
    /// Action leading from the parent to this node.
    pub action: S::Action,
    /// Evaluator for the child node.
    pub eval: S::Eval,
    /// Fingerprint of the child state.
    pub hash: S::Hash,
}

impl<S: BeamState> Clone for Candidate<S> {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent,
            action: self.action,
            eval: self.eval.clone(),
            hash: self.hash,
        }
    }
}

/// Max-by-cost over `(cost, slot)` pairs. Ties keep the left operand, so
/// the worst slot is deterministic in insertion order.
struct WorstSlot<C>(PhantomData<C>);

impl<C: BoundedCost> Monoid for WorstSlot<C> {
    type S = (C, i32);

    fn op(a: &Self::S, b: &Self::S) -> Self::S {
        if a.0 < b.0 {
            *b
        } else {
            *a
        }
    }

    fn identity() -> Self::S {
        (C::MIN, -1)
    }
}

/// Keeps the best `W` candidates of one turn, deduplicated by hash.
///
/// Finished candidates are held aside in push order and are never
/// evicted; the first one ends the whole search.
pub struct BeamSelector<S: BeamState> {
    beam_width: usize,
    full: bool,
    candidates: Vec<Candidate<S>>,
    finished: Vec<Candidate<S>>,
    costs: Vec<(CostOf<S>, i32)>,
    seg: SegmentTree<WorstSlot<CostOf<S>>>,
    hash_to_index: ProbeMap<S::Hash, u32>,
}

impl<S: BeamState> BeamSelector<S> {
    /// Selector for beams of `beam_width` candidates, with a probe map
    /// of `hash_capacity` slots.
    ///
    /// `hash_capacity` must stay strictly larger than the number of
    /// distinct hashes pushed in one turn.
    ///
    /// # Panics
    /// Panics if `beam_width == 0` or `hash_capacity == 0`.
    pub fn new(beam_width: usize, hash_capacity: usize) -> Self {
        assert!(beam_width > 0, "beam width must be positive");
        Self {
            beam_width,
            full: false,
            candidates: Vec::with_capacity(beam_width),
            finished: Vec::new(),
            costs: Vec::with_capacity(beam_width),
            seg: SegmentTree::new(beam_width),
            hash_to_index: ProbeMap::new(hash_capacity),
        }
    }

    /// Configured beam width.
    pub fn beam_width(&self) -> usize {
        self.beam_width
    }

    /// Offer one candidate expansion.
    ///
    /// Finished candidates are set aside unconditionally. Live ones are
    /// rejected outright if the beam is full and they are no better than
    /// the worst kept candidate; otherwise they replace a same-hash
    /// candidate when cheaper, or evict the worst kept one.
    pub fn push(
        &mut self,
        action: S::Action,
        eval: S::Eval,
        hash: S::Hash,
        parent: usize,
        finished: bool,
    ) {
        let cost = eval.evaluate();
        if finished {
            self.finished.push(Candidate {
                parent,
                action,
                eval,
                hash,
            });
            return;
        }
        if self.full && cost >= self.seg.all_prod().0 {
            return;
        }
        let (occupied, slot) = self.hash_to_index.probe(hash);
        if occupied {
            let j = self.hash_to_index.get(slot) as usize;
            // The binding can be stale: slot j may have been reused for a
            // different hash after an eviction.
            if self.candidates[j].hash == hash {
                if cost < self.costs[j].0 {
                    self.candidates[j] = Candidate {
                        parent,
                        action,
                        eval,
                        hash,
                    };
                    self.costs[j].0 = cost;
                    if self.full {
                        self.seg.set(j, self.costs[j]);
                    }
                }
                return;
            }
        }
        if self.full {
            let j = self.seg.all_prod().1 as usize;
            self.hash_to_index.insert(slot, hash, j as u32);
            self.candidates[j] = Candidate {
                parent,
                action,
                eval,
                hash,
            };
            self.costs[j].0 = cost;
            self.seg.set(j, self.costs[j]);
        } else {
            let j = self.candidates.len();
            self.hash_to_index.insert(slot, hash, j as u32);
            self.costs.push((cost, j as i32));
            self.candidates.push(Candidate {
                parent,
                action,
                eval,
                hash,
            });
            if self.candidates.len() == self.beam_width {
                self.seg.build(&self.costs);
                self.full = true;
            }
        }
    }

    /// Live candidates, in slot order.
    pub fn candidates(&self) -> &[Candidate<S>] {
        &self.candidates
    }

    /// Finished candidates, in push order.
    pub fn finished_candidates(&self) -> &[Candidate<S>] {
        &self.finished
    }

    /// True once any finished candidate has been pushed.
    pub fn is_finished(&self) -> bool {
        !self.finished.is_empty()
    }

    /// Minimum-cost live candidate; first pushed wins ties.
    ///
    /// # Panics
    /// Panics on an empty beam.
    pub fn best_candidate(&self) -> &Candidate<S> {
        assert!(
            !self.candidates.is_empty(),
            "best_candidate called on an empty beam"
        );
        let best = self
            .costs
            .iter()
            .enumerate()
            .min_by_key(|&(_, c)| *c)
            .map(|(k, _)| k)
            .expect("non-empty cost list");
        &self.candidates[best]
    }

    /// Drop the live set and start a fresh turn.
    ///
    /// Finished candidates survive: a finished result ends the run
    /// before the next clear could matter.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.costs.clear();
        self.hash_to_index.clear();
        self.full = false;
    }
}
