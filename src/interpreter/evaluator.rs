/// Core evaluation logic.
///
/// Contains the evaluation context, its length limit, and the recursive
/// reduction of a tree to a single value.
pub mod core;
