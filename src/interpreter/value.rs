/// Declared variable types.
///
/// Defines `DeclaredType`, the type tag a binding receives from its
/// declaration keyword (`INT`, `CHAR`, `BOOL`, `FLOAT`, `STRING`). The tag
/// decides which runtime values the binding accepts for its whole lifetime.
pub mod declared_type;

pub mod core;
