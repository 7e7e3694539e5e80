use crate::beam::beam_search;
use crate::traits::BeamState;
use crate::utils::default_hash_capacity;

/// Reusable configuration for [`beam_search`] runs.
pub struct BeamSearchBuilder {
    beam_width: usize,
    max_turn: usize,
    hash_capacity: Option<usize>,
}

impl BeamSearchBuilder {
    pub fn new(beam_width: usize, max_turn: usize) -> Self {
        Self {
            beam_width,
            max_turn,
            hash_capacity: None,
        }
    }

    pub fn with_hash_capacity(mut self, hash_capacity: usize) -> Self {
        self.hash_capacity = Some(hash_capacity);
        self
    }

    pub fn run<S: BeamState>(&self, state: S) -> Vec<S::Action> {
        let capacity = self
            .hash_capacity
            .unwrap_or_else(|| default_hash_capacity(self.beam_width));
        beam_search(state, self.max_turn, self.beam_width, capacity)
    }
}
