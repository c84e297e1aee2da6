use super::*;
use crate::catalog::SECRET;

/// Build a 512-byte image where every byte of each checksum range carries
/// a distinct, position-derived value.
fn make_marked_image() -> Vec<u8> {
    let mut image = vec![0xEEu8; 512];
    for (i, b) in image[RANGE1_START..RANGE1_END].iter_mut().enumerate() {
        *b = i as u8; // 0x00..0x81
    }
    for (i, b) in image[RANGE2_START..RANGE2_END].iter_mut().enumerate() {
        *b = 0xA0u8.wrapping_add(i as u8);
    }
    image
}

#[test]
fn buffer_is_always_244_bytes() {
    for len in [0usize, 1, 100, 194, 195, 0x17F, 0x180, 512, 1024] {
        let image = vec![0x5Au8; len];
        let buf = assemble(&image, 0, 0, SECRET);
        assert_eq!(buf.len(), 244, "image length {}", len);
    }
}

#[test]
fn range1_lands_at_offset_0() {
    let image = make_marked_image();
    let buf = assemble(&image, 0, 0, SECRET);
    assert_eq!(&buf[0..130], &image[0x7E..0x100]);
    assert_eq!(buf[0], 0x00);
    assert_eq!(buf[129], 129);
}

#[test]
fn range2_lands_at_offset_130() {
    let image = make_marked_image();
    let buf = assemble(&image, 0, 0, SECRET);
    assert_eq!(&buf[130..194], &image[0x140..0x180]);
    assert_eq!(buf[130], 0xA0);
    assert_eq!(buf[193], 0xA0 + 63);
}

#[test]
fn bytes_between_ranges_are_skipped() {
    let image = make_marked_image();
    let buf = assemble(&image, 0, 0, SECRET);
    // 0xEE only appears outside both ranges
    assert!(!buf[..DATA_SIZE].contains(&0xEE));
}

#[test]
fn registers_are_little_endian_with_separators() {
    let image = make_marked_image();
    let buf = assemble(&image, 0x1C85, 0x2221, SECRET);
    assert_eq!(buf[194], 0x20);
    assert_eq!(buf[195], 0x85);
    assert_eq!(buf[196], 0x1C);
    assert_eq!(buf[197], 0x20);
    assert_eq!(buf[198], 0x21);
    assert_eq!(buf[199], 0x22);
    assert_eq!(buf[200], 0x20);
}

#[test]
fn rcd_placeholder_is_fixed() {
    let buf = assemble(&make_marked_image(), 0xFFFF, 0xFFFF, SECRET);
    assert_eq!(&buf[201..209], &[0, 0, 0x20, 0, 0, 0x20, 0, 0x20]);
}

#[test]
fn secret_occupies_tail_regardless_of_image() {
    for image in [vec![], vec![0xFF; 100], vec![0x00; 512], make_marked_image()] {
        let buf = assemble(&image, 0x00F8, 0xEE25, SECRET);
        assert_eq!(&buf[209..244], b"Copyright HP.  All rights reserved.");
    }
}

#[test]
fn exact_minimum_length_uses_both_ranges() {
    let mut image = make_marked_image();
    image.truncate(0x180);
    let buf = assemble(&image, 0, 0, SECRET);
    assert_eq!(&buf[0..130], &image[0x7E..0x100]);
    assert_eq!(&buf[130..194], &image[0x140..0x180]);
}

#[test]
fn short_image_copies_from_start() {
    let image: Vec<u8> = (0..0x17Fu16).map(|i| (i % 251) as u8 + 1).collect();
    let buf = assemble(&image, 0x104A, 0x2201, SECRET);
    assert_eq!(&buf[0..194], &image[0..194]);
    assert_eq!(buf[194], 0x20);
    assert_eq!(buf[195], 0x4A);
    assert_eq!(buf[196], 0x10);
}

#[test]
fn tiny_image_is_zero_padded() {
    let image = [0x11u8, 0x22, 0x33];
    let buf = assemble(&image, 0, 0, SECRET);
    assert_eq!(&buf[0..3], &image);
    assert!(buf[3..194].iter().all(|&b| b == 0));
    assert_eq!(buf[194], 0x20);
}

#[test]
fn empty_image_matches_all_zero_data_region() {
    let empty = assemble(&[], 0x104A, 0x2201, SECRET);
    let zeros = assemble(&[0u8; 512], 0x104A, 0x2201, SECRET);
    assert_eq!(empty, zeros);
}

#[test]
fn assembly_is_deterministic() {
    let image = make_marked_image();
    let a = assemble(&image, 0x0054, 0x2201, SECRET);
    let b = assemble(&image, 0x0054, 0x2201, SECRET);
    assert_eq!(a, b);
}

#[test]
fn layout_constants_agree() {
    assert_eq!(RANGE1_SIZE, 130);
    assert_eq!(RANGE2_SIZE, 64);
    assert_eq!(DATA_SIZE, 194);
    assert_eq!(REG6_OFFSET, 195);
    assert_eq!(REG7_OFFSET, 198);
    assert_eq!(RCD_OFFSET, 201);
    assert_eq!(SECRET_OFFSET, 209);
}
