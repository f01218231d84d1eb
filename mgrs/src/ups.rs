//! Universal Polar Stereographic projection.
//!
//! UPS covers the two polar caps UTM leaves out, with a Polar Stereographic
//! projection at a fixed latitude of true scale and 2,000,000 m false
//! easting and northing at each pole.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::ellipsoid::Ellipsoid;
use crate::error::{Errors, PolarError, UpsError};
use crate::polarst::PolarStereographic;
use crate::utm::Hemisphere;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latitude of true scale for both polar aspects.
const ORIGIN_LAT: f64 = 81.114528 * PI / 180.0;

/// UPS is defined poleward of these latitudes.
const MIN_NORTH_LAT: f64 = 83.5 * PI / 180.0;
const MIN_SOUTH_LAT: f64 = -79.5 * PI / 180.0;

const FALSE_EASTING: f64 = 2_000_000.0;
const FALSE_NORTHING: f64 = 2_000_000.0;

/// How Polar Stereographic failures surface at the UPS level. Setup kinds
/// are absent: the fixed UPS parameters are always valid.
const POLAR_TO_UPS: &[(PolarError, UpsError)] = &[
    (PolarError::Latitude, UpsError::Latitude),
    (PolarError::Longitude, UpsError::Longitude),
];

/// A UPS coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpsCoordinate {
    /// Hemisphere of the polar cap.
    pub hemisphere: Hemisphere,
    /// Easting (X) in meters.
    pub easting: f64,
    /// Northing (Y) in meters.
    pub northing: f64,
}

/// Convert geodetic coordinates to UPS.
///
/// # Arguments
///
/// * `ellipsoid` - Reference ellipsoid
/// * `latitude` - Latitude in radians; north of 83.5N or south of 79.5S
/// * `longitude` - Longitude in radians, [-180, 360] degrees
///
/// # Errors
///
/// All failed range checks are reported together in the returned set.
///
/// # Example
///
/// ```
/// use mgrs::{ups, Ellipsoid};
///
/// let pole = ups::convert_geodetic(&Ellipsoid::WGS84, 90.0_f64.to_radians(), 0.0).unwrap();
/// assert_eq!(pole.easting, 2_000_000.0);
/// assert_eq!(pole.northing, 2_000_000.0);
/// ```
pub fn convert_geodetic(
    ellipsoid: &Ellipsoid,
    latitude: f64,
    longitude: f64,
) -> Result<UpsCoordinate, Errors<UpsError>> {
    let mut errors = Errors::none();
    errors.insert_if(!(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude), UpsError::Latitude);
    errors.insert_if(latitude < 0.0 && latitude > MIN_SOUTH_LAT, UpsError::Latitude);
    errors.insert_if(latitude >= 0.0 && latitude < MIN_NORTH_LAT, UpsError::Latitude);
    errors.insert_if(!(-PI..=2.0 * PI).contains(&longitude), UpsError::Longitude);
    errors.into_result(())?;

    let (hemisphere, origin_latitude) = if latitude < 0.0 {
        (Hemisphere::South, -ORIGIN_LAT)
    } else {
        (Hemisphere::North, ORIGIN_LAT)
    };

    let projection = PolarStereographic::new(
        ellipsoid,
        origin_latitude,
        0.0,
        FALSE_EASTING,
        FALSE_NORTHING,
    )
    .map_err(|errors| errors.translate(POLAR_TO_UPS))?;
    let (easting, northing) = projection
        .project(latitude, longitude)
        .map_err(|errors| errors.translate(POLAR_TO_UPS))?;

    Ok(UpsCoordinate {
        hemisphere,
        easting,
        northing,
    })
}
