use crate::common::*;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One labeled outcome of a [`Die`](crate::Die).
///
/// Faces are scalar labels: integers, floats, or text. A single die never
/// mixes kinds, but different dice in one game may, so faces carry a total
/// ordering across kinds (kind rank first, then the value within the kind)
/// and can key hash maps.
#[derive(Debug, Clone)]
pub enum Face {
    Int(Int),
    Float(Float),
    Text(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FaceKind {
    Int = 0,
    Float = 1,
    Text = 2,
}

impl Face {
    pub const fn kind(&self) -> FaceKind {
        match self {
            Self::Int(_) => FaceKind::Int,
            Self::Float(_) => FaceKind::Float,
            Self::Text(_) => FaceKind::Text,
        }
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Face {}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Face {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x.cmp(y),
            (Self::Float(x), Self::Float(y)) => x.total_cmp(y),
            (Self::Text(x), Self::Text(y)) => x.cmp(y),
            (x, y) => (x.kind() as u8).cmp(&(y.kind() as u8)),
        }
    }
}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with Eq: floats hash by bit pattern, which total_cmp
        // treats as distinct values.
        match self {
            Self::Int(x) => (0u8, x).hash(state),
            Self::Float(x) => (1u8, x.to_bits()).hash(state),
            Self::Text(x) => (2u8, x).hash(state),
        }
    }
}

impl From<Int> for Face {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<Float> for Face {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Face {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Face {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Float(x) => fmt::Debug::fmt(x, f),
            Self::Text(x) => fmt::Display::fmt(x, f),
        }
    }
}
