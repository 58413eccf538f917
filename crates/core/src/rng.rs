//! Brick queue - lookahead buffer of upcoming kinds
//!
//! Kinds are drawn independently and uniformly from the seven kinds. There is no
//! bag/shuffle fairness, so repeats are possible. The random source is injected
//! through [`BrickSource`] so games are reproducible from a seed and tests can
//! script exact sequences.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{BrickKind, PREVIEW_LEN, QUEUE_LEN};

/// Supplies the kind of each brick appended to the queue.
pub trait BrickSource {
    fn next_brick(&mut self) -> BrickKind;
}

/// Uniform random kinds from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomBricks<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomBricks<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBricks<StdRng> {
    /// Deterministic sequence for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> BrickSource for RandomBricks<R> {
    fn next_brick(&mut self) -> BrickKind {
        BrickKind::ALL[self.rng.gen_range(0..BrickKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct ScriptedBricks {
    kinds: Vec<BrickKind>,
    index: usize,
}

impl ScriptedBricks {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<BrickKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted brick sequence must not be empty");
        Self { kinds, index: 0 }
    }

    /// The same kind forever.
    pub fn repeat(kind: BrickKind) -> Self {
        Self::new(vec![kind])
    }
}

impl BrickSource for ScriptedBricks {
    fn next_brick(&mut self) -> BrickKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

/// Fixed-size lookahead buffer.
///
/// Always holds exactly [`QUEUE_LEN`] kinds between calls.
#[derive(Debug, Clone)]
pub struct BrickQueue<S = RandomBricks> {
    buffer: ArrayVec<BrickKind, QUEUE_LEN>,
    source: S,
}

impl<S: BrickSource> BrickQueue<S> {
    pub fn new(source: S) -> Self {
        let mut queue = Self {
            buffer: ArrayVec::new(),
            source,
        };
        queue.refill();
        queue
    }

    fn refill(&mut self) {
        while !self.buffer.is_full() {
            let kind = self.source.next_brick();
            self.buffer.push(kind);
        }
    }

    /// Pop the front kind and top the buffer back up.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty, which would mean the refill invariant broke.
    pub fn take_next(&mut self) -> BrickKind {
        assert!(!self.buffer.is_empty(), "brick queue drained below its minimum");
        let kind = self.buffer.remove(0);
        self.refill();
        kind
    }

    /// The next kinds to spawn, without consuming them. `None` pads a short buffer.
    pub fn peek_preview(&self) -> [Option<BrickKind>; PREVIEW_LEN] {
        let mut out = [None; PREVIEW_LEN];
        for (slot, kind) in out.iter_mut().zip(self.buffer.iter()) {
            *slot = Some(*kind);
        }
        out
    }

    /// Front of the queue.
    pub fn peek(&self) -> Option<BrickKind> {
        self.buffer.first().copied()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
