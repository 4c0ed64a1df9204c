//! Trait definitions for the index.

/// Maps a key to its initial slot position.
pub mod key_hasher;
