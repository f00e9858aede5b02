use crate::common::*;
use crate::error::Error;
use crate::face::Face;
use crate::DiceResult;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// An n-faced weighted die: a fixed set of distinct faces plus a mutable
/// raw weight per face.
///
/// Weights are never normalized in storage. Each sampling call computes the
/// draw distribution from the raw weights, so bumping one face's weight
/// implicitly rescales every face's probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    faces: NonEmpty<Face>,
    weights: Vec<Weight>,
}

impl Die {
    /// Builds a die with uniform weights (`1/len` each).
    pub fn new(faces: Vec<Face>) -> DiceResult<Self> {
        let len = faces.len();
        Self::with_weights(faces, vec![1.0 / len.max(1) as Weight; len])
    }

    /// Builds a die with one explicit weight per face.
    pub fn with_weights(faces: Vec<Face>, weights: Vec<Weight>) -> DiceResult<Self> {
        if weights.len() != faces.len() {
            return Err(Error::invalid_input(format!(
                "expected {} weights, got {}",
                faces.len(),
                weights.len()
            )));
        }
        for &w in &weights {
            check_weight(w)?;
        }
        let kind = match faces.first() {
            Some(face) => face.kind(),
            None => return Err(Error::invalid_input("a die needs at least one face")),
        };
        if faces.iter().any(|face| face.kind() != kind) {
            return Err(Error::invalid_input(
                "faces on one die must all be integers, all floats, or all text",
            ));
        }
        let mut seen = HashSet::with_capacity(faces.len());
        for face in &faces {
            if !seen.insert(face) {
                return Err(Error::invalid_input(format!("duplicate face {}", face)));
            }
        }
        let faces = NonEmpty::try_from_vec(faces)
            .map_err(|_| Error::invalid_input("a die needs at least one face"))?;
        Ok(Self { faces, weights })
    }

    pub fn faces(&self) -> &[Face] {
        self.faces.as_slice()
    }

    /// Replaces a single face's raw weight. All other weights are left
    /// untouched; probabilities shift at the next roll.
    pub fn set_weight(&mut self, face: &Face, new_weight: Weight) -> DiceResult<()> {
        let idx = self
            .faces
            .iter()
            .position(|f| f == face)
            .ok_or_else(|| Error::UnknownFace(face.clone()))?;
        check_weight(new_weight)?;
        self.weights[idx] = new_weight;
        Ok(())
    }

    /// A defensive snapshot of (face, raw weight) pairs in face order.
    pub fn state(&self) -> Vec<(Face, Weight)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    /// Draws `num_rolls` faces independently with replacement, weighted by
    /// the current raw weights.
    pub fn roll_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        num_rolls: usize,
    ) -> DiceResult<Vec<Face>> {
        if num_rolls == 0 {
            return Ok(Vec::new());
        }
        let dist = WeightedIndex::new(&self.weights).map_err(Error::invalid_input)?;
        Ok((0..num_rolls)
            .map(|_| self.faces[dist.sample(rng)].clone())
            .collect())
    }

    /// [`roll_with`](Self::roll_with) on the thread-local RNG.
    pub fn roll(&self, num_rolls: usize) -> DiceResult<Vec<Face>> {
        self.roll_with(&mut rand::thread_rng(), num_rolls)
    }

    pub fn roll_one_with<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceResult<Face> {
        let mut rolls = self.roll_with(rng, 1)?;
        Ok(rolls.pop().unwrap())
    }

    pub fn roll_one(&self) -> DiceResult<Face> {
        self.roll_one_with(&mut rand::thread_rng())
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces.len())
    }
}

fn check_weight(w: Weight) -> DiceResult<()> {
    if w.is_finite() && w >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "weight must be a finite non-negative number, got {}",
            w
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn d6() -> Die {
        Die::new((1..=6).map(Face::from).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_faces() {
        assert_eq!(
            Die::new(vec![]),
            Err(Error::invalid_input("a die needs at least one face"))
        );
        assert_eq!(
            Die::new(vec![1.into(), 1.into(), 2.into()]),
            Err(Error::invalid_input("duplicate face 1"))
        );
        assert!(matches!(
            Die::new(vec![Face::from(1), Face::from("two")]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_with_weights_rejects_bad_weights() {
        let faces: Vec<Face> = vec!["heads".into(), "tails".into()];
        assert!(matches!(
            Die::with_weights(faces.clone(), vec![1.0]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Die::with_weights(faces.clone(), vec![1.0, -0.5]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Die::with_weights(faces, vec![1.0, Weight::NAN]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_uniform_initial_state() {
        let die = d6();
        for (_, weight) in die.state() {
            assert_eq!(weight, 1.0 / 6.0);
        }
    }

    #[test]
    fn test_set_weight_changes_only_one_face() {
        let mut die = d6();
        die.set_weight(&6.into(), 5.0).unwrap();
        for (face, weight) in die.state() {
            if face == 6.into() {
                assert_eq!(weight, 5.0);
            } else {
                assert_eq!(weight, 1.0 / 6.0);
            }
        }
    }

    #[test]
    fn test_set_weight_errors() {
        let mut die = d6();
        assert_eq!(
            die.set_weight(&7.into(), 1.0),
            Err(Error::UnknownFace(7.into()))
        );
        assert!(matches!(
            die.set_weight(&6.into(), -1.0),
            Err(Error::InvalidInput(_))
        ));
        // Failed calls leave the state untouched.
        assert_eq!(die, d6());
    }

    #[test]
    fn test_roll_closure() {
        let die = d6();
        let mut rng = StdRng::seed_from_u64(17);
        let rolls = die.roll_with(&mut rng, 100).unwrap();
        assert_eq!(rolls.len(), 100);
        assert!(rolls.iter().all(|face| die.faces().contains(face)));
    }

    #[test]
    fn test_roll_zero_is_empty() {
        assert_eq!(d6().roll(0).unwrap(), Vec::new());
    }

    #[test]
    fn test_zero_weight_face_never_drawn() {
        let mut die = Die::new(vec!["heads".into(), "tails".into()]).unwrap();
        die.set_weight(&"tails".into(), 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let rolls = die.roll_with(&mut rng, 50).unwrap();
        assert!(rolls.iter().all(|face| *face == "heads".into()));
    }

    #[test]
    fn test_all_zero_weights_fail() {
        let die = Die::with_weights(vec![1.into(), 2.into()], vec![0.0, 0.0]).unwrap();
        assert!(matches!(die.roll(10), Err(Error::InvalidInput(_))));
        // The zero-count draw never consults the weights.
        assert_eq!(die.roll(0).unwrap(), Vec::new());
    }

    #[test]
    fn test_state_is_a_copy() {
        let mut die = d6();
        let before = die.state();
        die.set_weight(&1.into(), 9.0).unwrap();
        assert_eq!(before[0].1, 1.0 / 6.0);
    }

    #[test]
    fn test_roll_one() {
        let die = Die::new(vec![Face::from("only")]).unwrap();
        assert_eq!(die.roll_one().unwrap(), "only".into());
    }
}
