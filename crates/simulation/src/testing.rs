//! Deterministic random source for pinning win/loss branches in tests.

use rand::RngCore;

/// Replays a fixed sequence of `u64` words and counts how many were used.
///
/// `rand` maps a `u64` word to an `f64` in `[0, 1)` from its top 53 bits,
/// so [`ScriptedRng::WIN`] yields `0.0` and [`ScriptedRng::LOSS`] yields the
/// largest value below `1.0`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    words: Vec<u64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Word that draws `0.0`, a win for any positive win probability.
    pub const WIN: u64 = 0;
    /// Word that draws just under `1.0`, a loss for any win probability below 1.
    pub const LOSS: u64 = u64::MAX;

    pub fn new(words: &[u64]) -> Self {
        Self {
            words: words.to_vec(),
            cursor: 0,
        }
    }

    /// Number of words consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let Some(word) = self.words.get(self.cursor).copied() else {
            panic!("scripted rng exhausted after {} draws", self.cursor);
        };
        self.cursor += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
