//! Transverse Mercator forward projection.
//!
//! This module provides [`TransverseMercator`], the conformal cylindrical
//! projection underlying UTM. All projection parameters are bound at
//! construction into an immutable value; [`TransverseMercator::project`] is
//! then a pure function of latitude and longitude.
//!
//! The implementation uses the classical 8th-order series expansion in the
//! longitude difference from the central meridian, with the meridional-arc
//! constants precomputed at construction.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::ellipsoid::Ellipsoid;
use crate::error::{Errors, TranMercError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The series expansion degrades near the poles; stay just short of them.
const MAX_LAT: f64 = 89.99 * PI / 180.0;

/// Maximum distance from the central meridian: 90 degrees.
const MAX_DELTA_LONGITUDE: f64 = PI * 90.0 / 180.0;

const MIN_SCALE_FACTOR: f64 = 0.3;
const MAX_SCALE_FACTOR: f64 = 3.0;

/// A projected Transverse Mercator coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TmCoordinate {
    /// Easting (X) in meters.
    pub easting: f64,
    /// Northing (Y) in meters.
    pub northing: f64,
    /// Set when the longitude is more than 9 degrees from the central
    /// meridian; distortion will result, but the output is still usable.
    pub longitude_warning: bool,
}

/// An immutable Transverse Mercator projection.
///
/// # Example
///
/// ```
/// use mgrs::{Ellipsoid, TransverseMercator};
///
/// // A UTM-style projection centered on 3 degrees east.
/// let tm = TransverseMercator::new(
///     &Ellipsoid::WGS84,
///     0.0,
///     3.0_f64.to_radians(),
///     500_000.0,
///     0.0,
///     0.9996,
/// )
/// .unwrap();
///
/// let on_meridian = tm.project(0.0, 3.0_f64.to_radians()).unwrap();
/// assert_eq!(on_meridian.easting, 500_000.0);
/// assert_eq!(on_meridian.northing, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TransverseMercator {
    a: f64,
    es: f64,
    ebs: f64,
    origin_latitude: f64,
    central_meridian: f64,
    false_easting: f64,
    false_northing: f64,
    scale_factor: f64,
    // Meridional-arc series constants.
    ap: f64,
    bp: f64,
    cp: f64,
    dp: f64,
    ep: f64,
    // Meridional distance of the origin latitude.
    origin_distance: f64,
}

impl TransverseMercator {
    /// Create a projection for the given ellipsoid and parameters.
    ///
    /// # Arguments
    ///
    /// * `ellipsoid` - Reference ellipsoid
    /// * `origin_latitude` - Latitude of origin in radians
    /// * `central_meridian` - Central meridian in radians; values above
    ///   180 degrees are normalized by a full turn
    /// * `false_easting` - Easting at the central meridian in meters
    /// * `false_northing` - Northing at the origin latitude in meters
    /// * `scale_factor` - Scale factor at the central meridian
    ///
    /// # Errors
    ///
    /// All failed parameter checks are reported together.
    pub fn new(
        ellipsoid: &Ellipsoid,
        origin_latitude: f64,
        central_meridian: f64,
        false_easting: f64,
        false_northing: f64,
        scale_factor: f64,
    ) -> Result<Self, Errors<TranMercError>> {
        let mut errors = Errors::none();
        errors.insert_if(
            !(-FRAC_PI_2..=FRAC_PI_2).contains(&origin_latitude),
            TranMercError::OriginLatitude,
        );
        errors.insert_if(
            !(-PI..=2.0 * PI).contains(&central_meridian),
            TranMercError::CentralMeridian,
        );
        errors.insert_if(
            !(MIN_SCALE_FACTOR..=MAX_SCALE_FACTOR).contains(&scale_factor),
            TranMercError::ScaleFactor,
        );
        errors.into_result(())?;

        let mut central_meridian = central_meridian;
        if central_meridian > PI {
            central_meridian -= 2.0 * PI;
        }

        let a = ellipsoid.semi_major_axis();
        let b = a * (1.0 - ellipsoid.flattening());

        let tn = (a - b) / (a + b);
        let tn2 = tn * tn;
        let tn3 = tn2 * tn;
        let tn4 = tn3 * tn;
        let tn5 = tn4 * tn;

        let mut projection = Self {
            a,
            es: ellipsoid.eccentricity_squared(),
            ebs: ellipsoid.second_eccentricity_squared(),
            origin_latitude,
            central_meridian,
            false_easting,
            false_northing,
            scale_factor,
            ap: a * (1.0 - tn + 5.0 * (tn2 - tn3) / 4.0 + 81.0 * (tn4 - tn5) / 64.0),
            bp: 3.0 * a * (tn - tn2 + 7.0 * (tn3 - tn4) / 8.0 + 55.0 * tn5 / 64.0) / 2.0,
            cp: 15.0 * a * (tn2 - tn3 + 3.0 * (tn4 - tn5) / 4.0) / 16.0,
            dp: 35.0 * a * (tn3 - tn4 + 11.0 * tn5 / 16.0) / 48.0,
            ep: 315.0 * a * (tn4 - tn5) / 512.0,
            origin_distance: 0.0,
        };
        projection.origin_distance = projection.meridional_distance(origin_latitude);
        Ok(projection)
    }

    /// Project geodetic coordinates to easting/northing.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in radians
    /// * `longitude` - Longitude in radians
    ///
    /// # Errors
    ///
    /// Fails when the latitude is too close to a pole for the series, or
    /// the longitude is more than 90 degrees from the central meridian.
    pub fn project(&self, latitude: f64, longitude: f64) -> Result<TmCoordinate, Errors<TranMercError>> {
        let mut errors = Errors::none();
        errors.insert_if(!(-MAX_LAT..=MAX_LAT).contains(&latitude), TranMercError::Latitude);

        let mut longitude = longitude;
        if longitude > PI {
            longitude -= 2.0 * PI;
        }
        if longitude < self.central_meridian - MAX_DELTA_LONGITUDE
            || longitude > self.central_meridian + MAX_DELTA_LONGITUDE
        {
            // Re-check with both angles shifted onto the 0..360 convention
            // before deciding the longitude really is out of reach.
            let wrapped_longitude = if longitude < 0.0 { longitude + 2.0 * PI } else { longitude };
            let wrapped_origin = if self.central_meridian < 0.0 {
                self.central_meridian + 2.0 * PI
            } else {
                self.central_meridian
            };
            errors.insert_if(
                wrapped_longitude < wrapped_origin - MAX_DELTA_LONGITUDE
                    || wrapped_longitude > wrapped_origin + MAX_DELTA_LONGITUDE,
                TranMercError::Longitude,
            );
        }
        errors.into_result(())?;

        let mut dlam = longitude - self.central_meridian;
        let longitude_warning = dlam.abs() > 9.0_f64.to_radians();
        if dlam > PI {
            dlam -= 2.0 * PI;
        }
        if dlam < -PI {
            dlam += 2.0 * PI;
        }
        if dlam.abs() < 2.0e-10 {
            dlam = 0.0;
        }

        let s = latitude.sin();
        let c = latitude.cos();
        let c2 = c * c;
        let c3 = c2 * c;
        let c5 = c3 * c2;
        let c7 = c5 * c2;
        let t = latitude.tan();
        let tan2 = t * t;
        let tan3 = tan2 * t;
        let tan4 = tan3 * t;
        let tan5 = tan4 * t;
        let tan6 = tan5 * t;
        let eta = self.ebs * c2;
        let eta2 = eta * eta;
        let eta3 = eta2 * eta;
        let eta4 = eta3 * eta;

        // Radius of curvature in the prime vertical.
        let sn = self.a / (1.0 - self.es * s * s).sqrt();
        let tmd = self.meridional_distance(latitude);

        let t1 = (tmd - self.origin_distance) * self.scale_factor;
        let t2 = sn * s * c * self.scale_factor / 2.0;
        let t3 = sn * s * c3 * self.scale_factor * (5.0 - tan2 + 9.0 * eta + 4.0 * eta2) / 24.0;
        let t4 = sn
            * s
            * c5
            * self.scale_factor
            * (61.0 - 58.0 * tan2 + tan4 + 270.0 * eta - 330.0 * tan2 * eta + 445.0 * eta2
                + 324.0 * eta3
                - 680.0 * tan2 * eta2
                + 88.0 * eta4
                - 600.0 * tan2 * eta3
                - 192.0 * tan2 * eta4)
            / 720.0;
        let t5 = sn * s * c7 * self.scale_factor * (1385.0 - 3111.0 * tan2 + 543.0 * tan4 - tan6)
            / 40320.0;

        let northing = self.false_northing
            + t1
            + dlam.powi(2) * t2
            + dlam.powi(4) * t3
            + dlam.powi(6) * t4
            + dlam.powi(8) * t5;

        let t6 = sn * c * self.scale_factor;
        let t7 = sn * c3 * self.scale_factor * (1.0 - tan2 + eta) / 6.0;
        let t8 = sn
            * c5
            * self.scale_factor
            * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta - 58.0 * tan2 * eta + 13.0 * eta2
                + 4.0 * eta3
                - 64.0 * tan2 * eta2
                - 24.0 * tan2 * eta3)
            / 120.0;
        let t9 = sn * c7 * self.scale_factor * (61.0 - 479.0 * tan2 + 179.0 * tan4 - tan6) / 5040.0;

        let easting = self.false_easting
            + dlam * t6
            + dlam.powi(3) * t7
            + dlam.powi(5) * t8
            + dlam.powi(7) * t9;

        Ok(TmCoordinate {
            easting,
            northing,
            longitude_warning,
        })
    }

    /// True meridional distance from the equator to the given latitude.
    fn meridional_distance(&self, latitude: f64) -> f64 {
        self.ap * latitude - self.bp * (2.0 * latitude).sin() + self.cp * (4.0 * latitude).sin()
            - self.dp * (6.0 * latitude).sin()
            + self.ep * (8.0 * latitude).sin()
    }

    /// Central meridian in radians, normalized to (-180, 180].
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// Latitude of origin in radians.
    pub fn origin_latitude(&self) -> f64 {
        self.origin_latitude
    }
}
