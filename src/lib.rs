//! Monte Carlo simulation of weighted dice.
//!
//! A [`Die`] is any finite set of distinct labeled outcomes with adjustable
//! weights, a [`Game`] rolls a batch of joint trials over several dice, and
//! an [`Analyzer`] computes statistics over the most recent batch.
//!
//! ```
//! use monte_dice::{Analyzer, Die, Face, Game};
//!
//! # fn main() -> Result<(), monte_dice::Error> {
//! let faces: Vec<Face> = (1..=6).map(Face::from).collect();
//! let mut loaded = Die::new(faces.clone())?;
//! loaded.set_weight(&Face::from(6), 5.0)?;
//!
//! let mut game = Game::new(vec![Die::new(faces)?, loaded], 100)?;
//! game.play_default()?;
//!
//! let analyzer = Analyzer::new(&game);
//! println!("{} jackpots", analyzer.jackpot()?);
//! # Ok(())
//! # }
//! ```

mod analyze;
mod common;
mod die;
mod error;
mod face;
mod game;

pub use analyze::{Analyzer, FaceCounts};
pub use common::{Float, Int, Weight};
pub use die::Die;
pub use error::Error;
pub use face::{Face, FaceKind};
pub use game::{Game, RollTable};

pub type DiceResult<T> = Result<T, Error>;

pub type DefaultRng = rand::prelude::ThreadRng;
