use crate::face::Face;
use crate::game::{Game, RollTable};
use crate::DiceResult;
use std::collections::{BTreeSet, HashMap};

/// Derived statistics over a [`Game`]'s most recent batch.
///
/// The analyzer borrows the game rather than a table, so every call reads
/// the latest results fresh. Nothing is cached and the table is never
/// mutated. Every method fails with [`Error::NoResults`](crate::Error) if
/// the game has not been played yet.
pub struct Analyzer<'a> {
    game: &'a Game,
}

impl<'a> Analyzer<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// Counts, per trial, how often each face appears across that trial's
    /// dice.
    ///
    /// Columns are the sorted union of faces observed anywhere in the
    /// batch, not each die's full face set; a face absent from a trial
    /// counts 0 there.
    pub fn face_counts(&self) -> DiceResult<FaceCounts> {
        let table = self.game.results()?;
        let faces: Vec<Face> = table
            .trials()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();
        let rows = table
            .trials()
            .map(|trial| {
                faces
                    .iter()
                    .map(|face| trial.iter().filter(|f| *f == face).count())
                    .collect()
            })
            .collect();
        Ok(FaceCounts { faces, rows })
    }

    /// Counts trials in which every die produced the same face.
    ///
    /// With a single die every trial is trivially a jackpot.
    pub fn jackpot(&self) -> DiceResult<usize> {
        let table = self.game.results()?;
        Ok(table
            .trials()
            .filter(|trial| trial.windows(2).all(|pair| pair[0] == pair[1]))
            .count())
    }

    /// Counts occurrences of each distinct combination: the order-blind
    /// multiset of one trial's faces, keyed by its sorted tuple.
    ///
    /// Counts sum to the batch's roll count. Iteration order is
    /// unspecified; sort explicitly for display.
    pub fn combo_counts(&self) -> DiceResult<HashMap<Vec<Face>, usize>> {
        Ok(count_trials(self.game.results()?, |trial| {
            let mut combo = trial.to_vec();
            combo.sort();
            combo
        }))
    }

    /// Counts occurrences of each distinct permutation: the die-order
    /// sequence of one trial's faces, unsorted.
    pub fn permutation_counts(&self) -> DiceResult<HashMap<Vec<Face>, usize>> {
        Ok(count_trials(self.game.results()?, <[Face]>::to_vec))
    }
}

fn count_trials(
    table: &RollTable,
    key: impl Fn(&[Face]) -> Vec<Face>,
) -> HashMap<Vec<Face>, usize> {
    let mut counts = HashMap::new();
    for trial in table.trials() {
        *counts.entry(key(trial)).or_insert(0) += 1;
    }
    counts
}

/// Per-trial face counts, one row per trial and one column per observed
/// face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceCounts {
    faces: Vec<Face>,
    rows: Vec<Vec<usize>>,
}

impl FaceCounts {
    /// The column faces, sorted.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_trials(&self) -> usize {
        self.rows.len()
    }

    /// One count per column face for the given trial.
    pub fn row(&self, trial: usize) -> Option<&[usize]> {
        self.rows.get(trial).map(Vec::as_slice)
    }

    /// How many times `face` came up in the given trial; 0 for faces
    /// outside the observed set.
    pub fn count(&self, trial: usize, face: &Face) -> Option<usize> {
        let row = self.rows.get(trial)?;
        match self.faces.iter().position(|f| f == face) {
            Some(col) => Some(row[col]),
            None => Some(0),
        }
    }
}
