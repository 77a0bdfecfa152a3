//! Input sequences: validation, length equalization and random generation.
//!
//! The core only accepts two byte sequences of identical length. Callers
//! with unequal inputs pick an `Equalize` policy first.

use std::borrow::Cow;

use rand::Rng;

use crate::defaults::MAX_SEQUENCE_LEN;
use crate::error::{EditDistanceError, Result};

/// Two equal-length, read-only sequences compared by one computation.
#[derive(Debug, Clone, Copy)]
pub struct SequencePair<'a> {
    a: &'a [u8],
    b: &'a [u8],
}

impl<'a> SequencePair<'a> {
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Result<Self> {
        if a.len() != b.len() {
            return Err(EditDistanceError::LengthMismatch {
                a_len: a.len(),
                b_len: b.len(),
            });
        }
        if a.len() > MAX_SEQUENCE_LEN {
            return Err(EditDistanceError::SequenceTooLong {
                len: a.len(),
                max: MAX_SEQUENCE_LEN,
            });
        }
        Ok(Self { a, b })
    }

    /// Sequence indexing grid rows.
    #[inline]
    pub fn a(&self) -> &'a [u8] {
        self.a
    }

    /// Sequence indexing grid columns.
    #[inline]
    pub fn b(&self) -> &'a [u8] {
        self.b
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// How to bring two sequences of different length to a common length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equalize {
    /// Cut the longer sequence down to the shorter one's length.
    Truncate,
    /// Extend the shorter sequence with the given filler byte.
    Pad(u8),
}

/// Return both sequences at a common length, borrowing when nothing changes.
pub fn equalize_lengths<'a>(
    a: &'a [u8],
    b: &'a [u8],
    how: Equalize,
) -> (Cow<'a, [u8]>, Cow<'a, [u8]>) {
    if a.len() == b.len() {
        return (Cow::Borrowed(a), Cow::Borrowed(b));
    }
    match how {
        Equalize::Truncate => {
            let len = a.len().min(b.len());
            (Cow::Borrowed(&a[..len]), Cow::Borrowed(&b[..len]))
        }
        Equalize::Pad(fill) => {
            let len = a.len().max(b.len());
            let pad = |s: &'a [u8]| -> Cow<'a, [u8]> {
                if s.len() == len {
                    Cow::Borrowed(s)
                } else {
                    let mut owned = Vec::with_capacity(len);
                    owned.extend_from_slice(s);
                    owned.resize(len, fill);
                    Cow::Owned(owned)
                }
            };
            (pad(a), pad(b))
        }
    }
}

/// Random sequence of `len` symbols drawn uniformly from `alphabet`.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, alphabet: &[u8]) -> Vec<u8> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
