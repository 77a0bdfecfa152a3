// tests/block_boundaries.rs
// Lengths around the tile edge, where the last block row/column shrinks.

use ferrous_wavefront::{compute_edit_distance, naive_edit_distance, parallel_edit_distance};

#[test]
fn all_mismatch_around_block_size() {
    for len in [1usize, 2, 511, 512, 513, 1023, 1024, 1025] {
        let a = vec![b'A'; len];
        let b = vec![b'B'; len];
        assert_eq!(
            compute_edit_distance(&a, &b, 4).unwrap(),
            len as u32,
            "len {}",
            len
        );
        assert_eq!(parallel_edit_distance(&a, &b, 4).unwrap(), len as u32);
    }
}

#[test]
fn single_substitution_on_tile_edges() {
    let len = 1100;
    let a: Vec<u8> = (0..len).map(|i| b"ACGT"[i % 4]).collect();
    for pos in [0, 510, 511, 512, 513, 1023, 1024, len - 1] {
        let mut b = a.clone();
        b[pos] = b'N';
        assert_eq!(compute_edit_distance(&a, &b, 3).unwrap(), 1, "position {}", pos);
    }
}

#[test]
fn shift_across_block_boundary() {
    // Rotating by one costs one deletion plus one insertion
    let len = 1030;
    let a: Vec<u8> = (0..len).map(|i| b'A' + (i % 26) as u8).collect();
    let mut b = a[1..].to_vec();
    b.push(b'#');
    let expected = naive_edit_distance(&a, &b).unwrap();
    assert_eq!(expected, 2);
    assert_eq!(compute_edit_distance(&a, &b, 2).unwrap(), expected);
}
