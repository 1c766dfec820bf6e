use crate::report::format_size;
use pretty_assertions::assert_eq;

#[test]
fn bytes_below_one_kib_stay_in_bytes() {
    assert_eq!(format_size(0), "0.00 B");
    assert_eq!(format_size(765), "765.00 B");
    assert_eq!(format_size(1023), "1023.00 B");
}

#[test]
fn exact_unit_boundaries() {
    assert_eq!(format_size(1024), "1.00 KiB");
    assert_eq!(format_size(1024 * 1024), "1.00 MiB");
    assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GiB");
    assert_eq!(format_size(1 << 40), "1.00 TiB");
    assert_eq!(format_size(1 << 50), "1.00 PiB");
}

#[test]
fn rounds_to_two_decimals() {
    assert_eq!(format_size(10000), "9.77 KiB");
    assert_eq!(format_size(1536), "1.50 KiB");
    assert_eq!(format_size(5_000_000), "4.77 MiB");
}

#[test]
fn caps_at_pebibytes() {
    assert_eq!(format_size(1 << 60), "1024.00 PiB");
    assert_eq!(format_size(u64::MAX), "16384.00 PiB");
}
