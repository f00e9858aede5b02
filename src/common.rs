pub use vec1::vec1;

pub type Int = i32;

pub type Float = f64;

/// Raw face weight. Stored exactly as given; normalization happens at
/// sample time, not at assignment time.
pub type Weight = f64;

pub type NonEmpty<T> = vec1::Vec1<T>;
