// src/defaults.rs

// Tiling Constants
pub const BLOCK_SIZE: usize = 512;

// DP values are i32 and bounded by 2n
pub const MAX_SEQUENCE_LEN: usize = (i32::MAX / 2) as usize;

// Thread Policy Constants
pub const FALLBACK_THREADS: usize = 2;
pub const MAX_DEFAULT_THREADS: usize = 16;

// Driver Constants
pub const RANDOM_SEQUENCE_LEN: usize = 100_000;
pub const RANDOM_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const VERBOSITY: i32 = 3;
