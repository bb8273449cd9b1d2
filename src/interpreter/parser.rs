/// Parser entry points and shared types.
///
/// Declares the parse result alias, the expression entry point, the
/// nesting limit, and the whole-program entry point that warns about leftover
/// tokens.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence tiers for `.` (loosest) and `^`.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals and parenthesized groups, the tightest-binding tier.
pub mod primary;
