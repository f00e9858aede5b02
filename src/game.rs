use crate::common::*;
use crate::die::Die;
use crate::error::Error;
use crate::face::Face;
use crate::DiceResult;
use rand::Rng;

/// The results of one batch of trials.
///
/// Row-major by trial: row `r`, column `c` is the face die `c` produced on
/// the r-th joint roll. A trial occupies one contiguous row because every
/// derived statistic (jackpot, combination, permutation) is per-trial.
#[derive(Debug, Clone, PartialEq)]
pub struct RollTable {
    rows: Vec<Vec<Face>>,
    num_dice: usize,
}

impl RollTable {
    /// Assembles the table from one column of draws per die.
    pub(crate) fn from_columns(columns: Vec<Vec<Face>>, num_rolls: usize) -> Self {
        let num_dice = columns.len();
        let mut rows = vec![Vec::with_capacity(num_dice); num_rolls];
        for column in columns {
            debug_assert_eq!(column.len(), num_rolls);
            for (row, face) in rows.iter_mut().zip(column) {
                row.push(face);
            }
        }
        Self { rows, num_dice }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<Face>>, num_dice: usize) -> Self {
        assert!(rows.iter().all(|row| row.len() == num_dice));
        Self { rows, num_dice }
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates trials in roll order, one slice of faces per trial.
    pub fn trials(&self) -> impl Iterator<Item = &[Face]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn get(&self, trial: usize, die: usize) -> Option<&Face> {
        self.rows.get(trial)?.get(die)
    }
}

/// A game of rolling one or more independent dice together.
///
/// The dice need not be identical; each contributes one column to the
/// results table. `play` fully replaces the previous batch's results.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    dice: NonEmpty<Die>,
    default_rolls: usize,
    results: Option<RollTable>,
}

impl Game {
    pub fn new(dice: Vec<Die>, default_rolls: usize) -> DiceResult<Self> {
        let dice = NonEmpty::try_from_vec(dice)
            .map_err(|_| Error::invalid_input("a game needs at least one die"))?;
        Ok(Self {
            dice,
            default_rolls,
            results: None,
        })
    }

    pub fn dice(&self) -> &[Die] {
        self.dice.as_slice()
    }

    /// Mutable access to the dice, for reweighting between batches.
    pub fn dice_mut(&mut self) -> &mut [Die] {
        self.dice.as_mut_slice()
    }

    pub fn default_rolls(&self) -> usize {
        self.default_rolls
    }

    /// Rolls every die `num_rolls` times and stores the resulting table.
    ///
    /// The previous results are replaced only once every die has rolled
    /// successfully; on error the last batch stays intact.
    pub fn play_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        num_rolls: usize,
    ) -> DiceResult<&RollTable> {
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_with(rng, num_rolls))
            .collect::<DiceResult<Vec<_>>>()?;
        self.results = Some(RollTable::from_columns(columns, num_rolls));
        Ok(self.results.as_ref().unwrap())
    }

    /// [`play_with`](Self::play_with) on the thread-local RNG.
    pub fn play(&mut self, num_rolls: usize) -> DiceResult<&RollTable> {
        self.play_with(&mut rand::thread_rng(), num_rolls)
    }

    pub fn play_default_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DiceResult<&RollTable> {
        self.play_with(rng, self.default_rolls)
    }

    pub fn play_default(&mut self) -> DiceResult<&RollTable> {
        self.play(self.default_rolls)
    }

    /// A read-only view of the most recent batch.
    pub fn results(&self) -> DiceResult<&RollTable> {
        self.results.as_ref().ok_or(Error::NoResults)
    }

    #[cfg(test)]
    pub(crate) fn set_results(&mut self, table: RollTable) {
        self.results = Some(table);
    }
}
