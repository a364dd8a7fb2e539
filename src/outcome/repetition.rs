//! Occurrence counts of position fingerprints over a game.

use std::collections::HashMap;

use crate::position::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `position`, returning its updated count.
    pub fn record(&mut self, position: &Position) -> u32 {
        let count = self.counts.entry(position.fingerprint()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, position: &Position) -> u32 {
        self.counts.get(&position.fingerprint()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::RepetitionTable;
    use crate::position::position::Position;

    #[test]
    fn counts_ignore_clocks() {
        let mut table = RepetitionTable::new();
        let first = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("test FEN should parse");
        let later = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 8 5").expect("test FEN should parse");

        assert_eq!(table.count(&first), 0);
        assert_eq!(table.record(&first), 1);
        assert_eq!(table.record(&later), 2);
        assert_eq!(table.count(&first), 2);
    }
}
