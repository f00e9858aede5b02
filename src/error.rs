use crate::face::Face;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),
    #[error("face {0} not found on die")]
    UnknownFace(Face),
    #[error("no results to show, play the game first")]
    NoResults,
}

impl Error {
    pub fn invalid_input(msg: impl ToString) -> Self {
        Self::InvalidInput(msg.to_string())
    }
}
