//! # Memory Image Tests
//!
//! Last-writer-wins stores, masking, ordering and range queries.

use logihex_core::{MemoryImage, WordAddr};
use pretty_assertions::assert_eq;

fn addr(a: u64) -> WordAddr {
    WordAddr::new(a)
}

#[test]
fn test_new_image_is_empty() {
    let image = MemoryImage::new();
    assert!(image.is_empty());
    assert_eq!(image.len(), 0);
    assert_eq!(image.max_addr(), None);
}

#[test]
fn test_store_returns_previous_word() {
    let mut image = MemoryImage::new();
    assert_eq!(image.store(addr(0), 0xaaaa_aaaa), None);
    assert_eq!(image.store(addr(0), 0xbbbb_bbbb), Some(0xaaaa_aaaa));
    assert_eq!(image.get(addr(0)), Some(0xbbbb_bbbb));
    assert_eq!(image.len(), 1);
}

#[test]
fn test_store_masked_keeps_low_32_bits() {
    let mut image = MemoryImage::new();
    assert_eq!(image.store_masked(addr(1), 0x1_2345_6789), None);
    assert_eq!(image.get(addr(1)), Some(0x2345_6789));
}

#[test]
fn test_iteration_is_address_ordered() {
    let mut image = MemoryImage::new();
    for a in [9, 2, 5] {
        let _ = image.store(addr(a), a as u32);
    }
    let addrs: Vec<u64> = image.iter().map(|(a, _)| a.val()).collect();
    assert_eq!(addrs, vec![2, 5, 9]);
    assert_eq!(image.max_addr(), Some(addr(9)));
}

#[test]
fn test_range_is_inclusive() {
    let image: MemoryImage = (0..10).map(|a| (addr(a), a as u32)).collect();
    let words: Vec<u32> = image.range(addr(3)..=addr(5)).map(|(_, w)| w).collect();
    assert_eq!(words, vec![3, 4, 5]);
}

#[test]
fn test_reversed_range_is_empty() {
    let image: MemoryImage = (0..10).map(|a| (addr(a), a as u32)).collect();
    assert_eq!(image.range(addr(5)..=addr(3)).count(), 0);
}

#[test]
fn test_collect_keeps_last_duplicate() {
    let image: MemoryImage = [(addr(4), 1), (addr(8), 2), (addr(4), 3)]
        .into_iter()
        .collect();
    assert_eq!(image.get(addr(4)), Some(3));
    assert_eq!(image.get(addr(5)), None);
    assert_eq!((&image).into_iter().count(), 2);
}
