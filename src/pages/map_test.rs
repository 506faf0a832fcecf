use super::*;

#[test]
fn format_coord_labels_hemispheres() {
    assert_eq!(format_coord(59.3293, 18.0686), "59.3293° N, 18.0686° E");
    assert_eq!(format_coord(-33.8688, -70.6693), "33.8688° S, 70.6693° W");
}

#[test]
fn format_coord_pads_to_four_decimals() {
    assert_eq!(format_coord(52.52, 13.405), "52.5200° N, 13.4050° E");
}
