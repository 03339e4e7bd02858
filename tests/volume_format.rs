use stock_chart_wasm::presentation::format_volume;

#[test]
fn groups_thousands_with_commas() {
    assert_eq!(format_volume(3_000_000), "3,000,000");
    assert_eq!(format_volume(1_234), "1,234");
    assert_eq!(format_volume(12_345_678), "12,345,678");
}

#[test]
fn small_numbers_are_untouched() {
    assert_eq!(format_volume(0), "0");
    assert_eq!(format_volume(999), "999");
}

#[test]
fn largest_volume_formats() {
    assert_eq!(format_volume(u64::MAX), "18,446,744,073,709,551,615");
}
