//! End-to-end geodetic to MGRS conversion tests.

use mgrs::{convert_geodetic_to_mgrs, Ellipsoid, MgrsError};

fn reference(latitude_deg: f64, longitude_deg: f64, precision: usize) -> mgrs::Mgrs {
    convert_geodetic_to_mgrs(
        &Ellipsoid::WGS84,
        latitude_deg.to_radians(),
        longitude_deg.to_radians(),
        precision,
    )
    .unwrap()
}

#[test]
fn equator_prime_meridian_full_precision() {
    assert_eq!(reference(0.0, 0.0, 5).to_string(), "31NAA6602100000");
}

#[test]
fn precision_truncates_instead_of_rounding() {
    // 66021 meters keeps its leading digits at every precision.
    assert_eq!(reference(0.0, 0.0, 3).to_string(), "31NAA660000");
    assert_eq!(reference(0.0, 0.0, 1).to_string(), "31NAA60");
    assert_eq!(reference(0.0, 0.0, 0).to_string(), "31NAA");
}

#[test]
fn southern_hemisphere_grid_zone() {
    // Sydney: zone 56, band H, square LH.
    let sydney = reference(-33.85, 151.21, 0);
    assert_eq!(sydney.zone, Some(56));
    assert_eq!(sydney.letters, ['H', 'L', 'H']);
}

#[test]
fn paris_grid_zone() {
    // Eiffel Tower neighborhood: zone 31, band U, square DQ.
    let paris = reference(48.8582, 2.2945, 0);
    assert_eq!(paris.to_string(), "31UDQ");
}

#[test]
fn norway_reroutes_to_zone_32() {
    // 60N 3.5E lies in the enlarged zone 32V; "31V" must never appear.
    let bergen_offshore = reference(60.0, 3.5, 0);
    assert_eq!(bergen_offshore.zone, Some(32));
    assert_eq!(bergen_offshore.to_string(), "32VJM");
}

#[test]
fn svalbard_zone_exceptions() {
    assert_eq!(reference(75.0, 10.0, 0).zone, Some(33));
    assert_eq!(reference(75.0, 25.0, 0).zone, Some(35));
    assert_eq!(reference(75.0, 40.0, 0).zone, Some(37));
}

#[test]
fn poles_use_polar_lettering() {
    assert_eq!(reference(90.0, 0.0, 5).to_string(), "  ZAH0000000000");
    assert_eq!(reference(-90.0, 0.0, 5).to_string(), "  BAN0000000000");
}

#[test]
fn north_polar_cap_boundary() {
    // Just north of 84N the UPS path takes over; no zone number.
    let cap = reference(84.001, 0.0, 0);
    assert_eq!(cap.zone, None);
    assert_eq!(cap.to_string(), "  ZAA");
}

#[test]
fn historical_ellipsoid_shifts_row_letters() {
    let clarke = convert_geodetic_to_mgrs(&Ellipsoid::CLARKE_1866, 0.0, 0.0, 0).unwrap();
    assert_eq!(clarke.letters, ['N', 'A', 'L']);

    let wgs84 = reference(0.0, 0.0, 0);
    assert_eq!(wgs84.letters, ['N', 'A', 'A']);
}

#[test]
fn unsigned_longitude_matches_signed() {
    assert_eq!(
        reference(40.0, 350.0, 4).to_string(),
        reference(40.0, -10.0, 4).to_string()
    );
}

#[test]
fn no_partial_output_on_invalid_input() {
    let errors = convert_geodetic_to_mgrs(
        &Ellipsoid::WGS84,
        100.0_f64.to_radians(),
        0.0,
        6,
    )
    .unwrap_err();
    assert!(errors.contains(MgrsError::Latitude));
    assert!(errors.contains(MgrsError::Precision));
}

#[test]
fn band_letters_increase_with_latitude() {
    let mut previous = reference(-79.9, 9.0, 0).letters[0];
    let mut latitude = -79.0;
    while latitude < 84.0 {
        let letter = reference(latitude, 9.0, 0).letters[0];
        assert!(letter >= previous, "band went backward at {latitude}");
        previous = letter;
        latitude += 1.0;
    }
}
