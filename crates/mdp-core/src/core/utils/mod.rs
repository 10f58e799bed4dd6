//! Small pure helpers shared by the catalog, the engine and the workflows.

pub mod names;
pub mod similarity;
