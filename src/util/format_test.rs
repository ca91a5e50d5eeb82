use super::*;

#[test]
fn capitalize_uppercases_first_character_only() {
    assert_eq!(capitalize("positive"), "Positive");
    assert_eq!(capitalize("mEDIUM"), "MEDIUM");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("é"), "É");
}

#[test]
fn format_number_drops_integral_fraction() {
    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-5.0), "-5");
}

#[test]
fn format_number_rounds_to_one_decimal() {
    assert_eq!(format_number(33.333), "33.3");
    assert_eq!(format_number(12.96), "13");
    assert_eq!(format_number(f64::NAN), "0");
}

#[test]
fn percent_appends_sign() {
    assert_eq!(percent(67.0), "67%");
    assert_eq!(percent(12.5), "12.5%");
}

#[test]
fn clamp_percent_bounds_fill_width() {
    assert_eq!(clamp_percent(-4.0), 0.0);
    assert_eq!(clamp_percent(140.0), 100.0);
    assert_eq!(clamp_percent(55.5), 55.5);
    assert_eq!(clamp_percent(f64::INFINITY), 0.0);
}

#[test]
fn online_label_pluralizes() {
    assert_eq!(online_label(1), "1 user online");
    assert_eq!(online_label(0), "0 users online");
    assert_eq!(online_label(7), "7 users online");
}

#[test]
fn clock_time_formats_naive_iso_timestamps() {
    assert_eq!(clock_time("2025-01-15T14:05:09.123456"), "02:05:09 PM");
    assert_eq!(clock_time("2025-01-15T00:00:01"), "12:00:01 AM");
}

#[test]
fn short_clock_time_omits_seconds() {
    assert_eq!(short_clock_time("2025-01-15 09:30:59"), "09:30 AM");
}

#[test]
fn clock_time_is_empty_for_garbage() {
    assert_eq!(clock_time("not a time"), "");
    assert_eq!(clock_time(""), "");
}

#[test]
fn later_timestamp_formats_are_still_tried() {
    assert_eq!(clock_time("2025-01-15T21:45"), "09:45:00 PM");
}
