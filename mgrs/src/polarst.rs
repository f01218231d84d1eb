//! Polar Stereographic forward projection.
//!
//! [`PolarStereographic`] covers the polar caps that Transverse Mercator
//! cannot reach; it is the projection underlying UPS. Parameters are bound
//! at construction; southern-hemisphere projections mirror the origin and
//! the inputs so a single set of formulas serves both poles.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::ellipsoid::Ellipsoid;
use crate::error::{Errors, PolarError};

/// An immutable Polar Stereographic projection.
#[derive(Debug, Clone, Copy)]
pub struct PolarStereographic {
    es: f64,
    es_over_2: f64,
    southern: bool,
    /// Absolute latitude of true scale.
    origin_latitude: f64,
    /// Origin longitude, mirrored for the southern hemisphere.
    origin_longitude: f64,
    false_easting: f64,
    false_northing: f64,
    /// True when the latitude of true scale sits at the pole itself.
    at_pole: bool,
    /// `a * m_c / t_c` when true scale is off the pole.
    a_mc_over_tc: f64,
    /// `2a / e4` when true scale is at the pole.
    two_a_over_e4: f64,
}

impl PolarStereographic {
    /// Create a projection for the given ellipsoid and parameters.
    ///
    /// # Arguments
    ///
    /// * `ellipsoid` - Reference ellipsoid
    /// * `latitude_of_true_scale` - Latitude of true scale in radians;
    ///   negative selects the southern hemisphere
    /// * `longitude_down_from_pole` - Origin longitude in radians
    /// * `false_easting` - Easting at the pole in meters
    /// * `false_northing` - Northing at the pole in meters
    ///
    /// # Errors
    ///
    /// All failed parameter checks are reported together.
    pub fn new(
        ellipsoid: &Ellipsoid,
        latitude_of_true_scale: f64,
        longitude_down_from_pole: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<Self, Errors<PolarError>> {
        let mut errors = Errors::none();
        errors.insert_if(
            !(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude_of_true_scale),
            PolarError::OriginLatitude,
        );
        errors.insert_if(
            !(-PI..=2.0 * PI).contains(&longitude_down_from_pole),
            PolarError::OriginLongitude,
        );
        errors.into_result(())?;

        let mut origin_longitude = longitude_down_from_pole;
        if origin_longitude > PI {
            origin_longitude -= 2.0 * PI;
        }

        let southern = latitude_of_true_scale < 0.0;
        let (origin_latitude, origin_longitude) = if southern {
            (-latitude_of_true_scale, -origin_longitude)
        } else {
            (latitude_of_true_scale, origin_longitude)
        };

        let es = ellipsoid.eccentricity_squared().sqrt();
        let es_over_2 = es / 2.0;
        let a = ellipsoid.semi_major_axis();

        let at_pole = (origin_latitude - FRAC_PI_2).abs() <= 1.0e-10;
        let mut a_mc_over_tc = 0.0;
        let mut two_a_over_e4 = 0.0;
        if at_pole {
            let one_plus_es = 1.0 + es;
            let one_minus_es = 1.0 - es;
            let e4 = (one_plus_es.powf(one_plus_es) * one_minus_es.powf(one_minus_es)).sqrt();
            two_a_over_e4 = 2.0 * a / e4;
        } else {
            let slat = origin_latitude.sin();
            let essin = es * slat;
            let clat = origin_latitude.cos();
            let mc = clat / (1.0 - essin * essin).sqrt();
            let tc = (FRAC_PI_4 - origin_latitude / 2.0).tan() / pow_es(essin, es_over_2);
            a_mc_over_tc = a * mc / tc;
        }

        Ok(Self {
            es,
            es_over_2,
            southern,
            origin_latitude,
            origin_longitude,
            false_easting,
            false_northing,
            at_pole,
            a_mc_over_tc,
            two_a_over_e4,
        })
    }

    /// Project geodetic coordinates to easting/northing.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in radians; must lie in the projection's
    ///   hemisphere
    /// * `longitude` - Longitude in radians
    ///
    /// # Errors
    ///
    /// Fails when the latitude is out of range or in the opposite
    /// hemisphere, or the longitude is outside [-180, 360] degrees.
    pub fn project(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), Errors<PolarError>> {
        let mut errors = Errors::none();
        errors.insert_if(!(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude), PolarError::Latitude);
        errors.insert_if(latitude < 0.0 && !self.southern, PolarError::Latitude);
        errors.insert_if(latitude > 0.0 && self.southern, PolarError::Latitude);
        errors.insert_if(!(-PI..=2.0 * PI).contains(&longitude), PolarError::Longitude);
        errors.into_result(())?;

        // The pole itself maps to the false origin regardless of longitude.
        if (latitude.abs() - FRAC_PI_2).abs() < 1.0e-10 {
            return Ok((self.false_easting, self.false_northing));
        }

        let (latitude, longitude) = if self.southern {
            (-latitude, -longitude)
        } else {
            (latitude, longitude)
        };

        let mut dlam = longitude - self.origin_longitude;
        if dlam > PI {
            dlam -= 2.0 * PI;
        }
        if dlam < -PI {
            dlam += 2.0 * PI;
        }

        let essin = self.es * latitude.sin();
        let t = (FRAC_PI_4 - latitude / 2.0).tan() / pow_es(essin, self.es_over_2);
        let rho = if self.at_pole {
            self.two_a_over_e4 * t
        } else {
            self.a_mc_over_tc * t
        };

        if self.southern {
            let easting = -(rho * dlam.sin() - self.false_easting);
            let northing = rho * dlam.cos() + self.false_northing;
            Ok((easting, northing))
        } else {
            let easting = rho * dlam.sin() + self.false_easting;
            let northing = -rho * dlam.cos() + self.false_northing;
            Ok((easting, northing))
        }
    }

    /// Absolute latitude of true scale in radians.
    pub fn origin_latitude(&self) -> f64 {
        self.origin_latitude
    }
}

/// `((1 - e sin(lat)) / (1 + e sin(lat)))^(e/2)`, the isometric-latitude
/// correction term.
fn pow_es(essin: f64, es_over_2: f64) -> f64 {
    ((1.0 - essin) / (1.0 + essin)).powf(es_over_2)
}
