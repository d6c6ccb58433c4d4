mod generic_path;
pub use generic_path::Path;

/// The cost of a Path: the number of steps it takes.
pub type Cost = usize;
