//! Universal Transverse Mercator zone selection and projection.
//!
//! UTM slices the globe between 80.5S and 84.5N into 60 zones of 6 degrees
//! of longitude, each projected with its own Transverse Mercator centered on
//! the zone meridian. [`convert_geodetic`] picks the zone (including the
//! Norway and Svalbard exceptions), selects the hemisphere, projects, and
//! range-checks the result.

use std::f64::consts::PI;
use std::fmt;

use crate::ellipsoid::Ellipsoid;
use crate::error::{Errors, TranMercError, UtmError};
use crate::tranmerc::TransverseMercator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UTM latitude domain: 80.5S to 84.5N.
const MIN_LAT: f64 = -80.5 * PI / 180.0;
const MAX_LAT: f64 = 84.5 * PI / 180.0;

const MIN_EASTING: f64 = 100_000.0;
const MAX_EASTING: f64 = 900_000.0;
const MIN_NORTHING: f64 = 0.0;
const MAX_NORTHING: f64 = 10_000_000.0;

/// UTM central scale factor.
const UTM_K0: f64 = 0.9996;

/// How Transverse Mercator failures surface at the UTM level. Setup kinds
/// are absent: the zone machinery can only hand the projection valid
/// parameters.
const TRANMERC_TO_UTM: &[(TranMercError, UtmError)] = &[
    (TranMercError::Latitude, UtmError::Latitude),
    (TranMercError::Longitude, UtmError::Longitude),
];

/// Northern or southern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hemisphere::North => f.write_str("N"),
            Hemisphere::South => f.write_str("S"),
        }
    }
}

/// A UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmCoordinate {
    /// Zone number, 1..=60.
    pub zone: u8,
    /// Hemisphere the northing is reckoned in.
    pub hemisphere: Hemisphere,
    /// Easting (X) in meters.
    pub easting: f64,
    /// Northing (Y) in meters.
    pub northing: f64,
    /// Set when the longitude is more than 9 degrees from the zone's
    /// central meridian (informational; does not block output).
    pub longitude_warning: bool,
}

/// Convert geodetic coordinates to UTM.
///
/// The natural zone is derived from the longitude, with the enlarged
/// Norwegian zone 32V and the Svalbard zones 31X/33X/35X/37X applied on
/// whole-degree boundaries. A `zone_override` is accepted when it is within
/// one zone of the natural zone (the 1/60 pair counts as adjacent).
///
/// # Arguments
///
/// * `ellipsoid` - Reference ellipsoid
/// * `latitude` - Latitude in radians, 80.5S to 84.5N
/// * `longitude` - Longitude in radians, [-180, 360] degrees
/// * `zone_override` - Optional zone to use instead of the natural zone
///
/// # Errors
///
/// All failed range checks are reported together in the returned set.
///
/// # Example
///
/// ```
/// use mgrs::{utm, Ellipsoid};
///
/// let utm = utm::convert_geodetic(
///     &Ellipsoid::WGS84,
///     60.0_f64.to_radians(),
///     5.0_f64.to_radians(),
///     None,
/// )
/// .unwrap();
///
/// // Western Norway sits in the enlarged zone 32.
/// assert_eq!(utm.zone, 32);
/// ```
pub fn convert_geodetic(
    ellipsoid: &Ellipsoid,
    latitude: f64,
    longitude: f64,
    zone_override: Option<u8>,
) -> Result<UtmCoordinate, Errors<UtmError>> {
    let mut errors = Errors::none();
    errors.insert_if(!(MIN_LAT..=MAX_LAT).contains(&latitude), UtmError::Latitude);
    errors.insert_if(!(-PI..=2.0 * PI).contains(&longitude), UtmError::Longitude);
    errors.into_result(())?;

    // Whole-degree values drive the zone exceptions, truncated toward zero.
    let lat_degrees = latitude.to_degrees() as i64;
    let lon_degrees = longitude.to_degrees() as i64;

    // Natural zone from the longitude; the epsilon keeps zone boundaries
    // from rounding down into the neighboring zone.
    let shifted = (longitude + 1.0e-10).to_degrees();
    let mut zone = if longitude < PI {
        (31.0 + shifted / 6.0) as i64
    } else {
        (shifted / 6.0 - 29.0) as i64
    };
    if zone > 60 {
        zone = 1;
    }

    // Norway: zone 32V reaches west to 3 degrees east.
    if (56..64).contains(&lat_degrees) && (0..3).contains(&lon_degrees) {
        zone = 31;
    }
    if (56..64).contains(&lat_degrees) && (3..12).contains(&lon_degrees) {
        zone = 32;
    }
    // Svalbard: zones 32X, 34X and 36X do not exist.
    if lat_degrees > 71 {
        if (0..9).contains(&lon_degrees) {
            zone = 31;
        }
        if (9..21).contains(&lon_degrees) {
            zone = 33;
        }
        if (21..33).contains(&lon_degrees) {
            zone = 35;
        }
        if (33..42).contains(&lon_degrees) {
            zone = 37;
        }
    }

    if let Some(requested) = zone_override {
        let requested = i64::from(requested);
        let adjacent = (zone - 1..=zone + 1).contains(&requested)
            || (zone == 1 && requested == 60)
            || (zone == 60 && requested == 1);
        if !(1..=60).contains(&requested) || !adjacent {
            return Err(UtmError::ZoneOverride.into());
        }
        zone = requested;
    }

    let central_meridian = if zone >= 31 {
        f64::from(6 * zone as i32 - 183).to_radians()
    } else {
        f64::from(6 * zone as i32 + 177).to_radians()
    };

    let (hemisphere, false_northing) = if latitude < 0.0 {
        (Hemisphere::South, 10_000_000.0)
    } else {
        (Hemisphere::North, 0.0)
    };

    let projection = TransverseMercator::new(
        ellipsoid,
        0.0,
        central_meridian,
        500_000.0,
        false_northing,
        UTM_K0,
    )
    .map_err(|errors| errors.translate(TRANMERC_TO_UTM))?;
    let projected = projection
        .project(latitude, longitude)
        .map_err(|errors| errors.translate(TRANMERC_TO_UTM))?;

    let mut errors = Errors::none();
    errors.insert_if(
        !(MIN_EASTING..=MAX_EASTING).contains(&projected.easting),
        UtmError::Easting,
    );
    errors.insert_if(
        !(MIN_NORTHING..=MAX_NORTHING).contains(&projected.northing),
        UtmError::Northing,
    );
    errors.into_result(UtmCoordinate {
        zone: zone as u8,
        hemisphere,
        easting: projected.easting,
        northing: projected.northing,
        longitude_warning: projected.longitude_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(latitude_deg: f64, longitude_deg: f64) -> UtmCoordinate {
        convert_geodetic(
            &Ellipsoid::WGS84,
            latitude_deg.to_radians(),
            longitude_deg.to_radians(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_natural_zone_selection() {
        assert_eq!(convert(40.0, 3.5).zone, 31);
        assert_eq!(convert(40.0, -10.0).zone, 29);
        assert_eq!(convert(-33.85, 151.21).zone, 56);
        assert_eq!(convert(0.0, -180.0).zone, 1);
        assert_eq!(convert(0.0, 180.0).zone, 1);
    }

    #[test]
    fn test_unsigned_longitude_convention() {
        // 350 degrees is 10 west; both spellings land in zone 29.
        let unsigned = convert(40.0, 350.0);
        let signed = convert(40.0, -10.0);
        assert_eq!(unsigned.zone, 29);
        assert!((unsigned.easting - signed.easting).abs() < 1.0e-6);
    }

    #[test]
    fn test_norway_zone_32() {
        assert_eq!(convert(60.0, 1.0).zone, 31);
        assert_eq!(convert(60.0, 3.5).zone, 32);
        assert_eq!(convert(60.0, 11.5).zone, 32);
        assert_eq!(convert(60.0, 12.5).zone, 33);
        // South of the carve-out the natural zone applies.
        assert_eq!(convert(55.0, 4.0).zone, 31);
    }

    #[test]
    fn test_svalbard_zones() {
        assert_eq!(convert(75.0, 5.0).zone, 31);
        assert_eq!(convert(75.0, 10.0).zone, 33);
        assert_eq!(convert(75.0, 25.0).zone, 35);
        assert_eq!(convert(75.0, 40.0).zone, 37);
    }

    #[test]
    fn test_equator_prime_meridian() {
        let utm = convert(0.0, 0.0);
        assert_eq!(utm.zone, 31);
        assert_eq!(utm.hemisphere, Hemisphere::North);
        assert!((utm.easting - 166_021.44).abs() < 0.5);
        assert!(utm.northing.abs() < 1.0e-6);
    }

    #[test]
    fn test_southern_hemisphere_false_northing() {
        let utm = convert(-0.001, 0.0);
        assert_eq!(utm.hemisphere, Hemisphere::South);
        assert!(utm.northing > 9_999_000.0);
        assert!(utm.northing < 10_000_000.0);
    }

    #[test]
    fn test_zone_override_adjacent() {
        let utm = convert_geodetic(
            &Ellipsoid::WGS84,
            0.0,
            5.9_f64.to_radians(),
            Some(32),
        )
        .unwrap();
        assert_eq!(utm.zone, 32);
        assert!(utm.easting < 500_000.0);
    }

    #[test]
    fn test_zone_override_wraparound() {
        let utm = convert_geodetic(
            &Ellipsoid::WGS84,
            0.0,
            179.9_f64.to_radians(),
            Some(1),
        )
        .unwrap();
        assert_eq!(utm.zone, 1);
    }

    #[test]
    fn test_zone_override_rejected() {
        let errors = convert_geodetic(
            &Ellipsoid::WGS84,
            0.0,
            5.9_f64.to_radians(),
            Some(34),
        )
        .unwrap_err();
        assert!(errors.contains(UtmError::ZoneOverride));
    }

    #[test]
    fn test_latitude_out_of_domain() {
        let errors =
            convert_geodetic(&Ellipsoid::WGS84, 85.0_f64.to_radians(), 0.0, None).unwrap_err();
        assert!(errors.contains(UtmError::Latitude));
    }

    #[test]
    fn test_latitude_and_longitude_errors_accumulate() {
        let errors =
            convert_geodetic(&Ellipsoid::WGS84, 85.0_f64.to_radians(), 7.0, None).unwrap_err();
        assert!(errors.contains(UtmError::Latitude));
        assert!(errors.contains(UtmError::Longitude));
    }
}
