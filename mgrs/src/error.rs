//! Error types for the MGRS library.
//!
//! Validation failures are independent: a single call may be handed a bad
//! latitude *and* a bad precision, and the caller should learn about both at
//! once. Each conversion layer therefore has a small fieldless kind enum
//! ([`MgrsError`], [`UtmError`], ...) and failures accumulate in an
//! [`Errors`] set rather than short-circuiting on the first kind found.
//!
//! Layers translate each other's kinds through explicit `&[(From, To)]`
//! tables (see [`Errors::translate`]). Kinds absent from a table are dropped
//! on purpose: they describe setup failures that the validated constructors
//! in this crate prevent from ever reaching that boundary.

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

/// A conversion-layer error kind that can be stored in an [`Errors`] set.
pub trait ErrorKind: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Every kind of this layer, in bit order.
    const ALL: &'static [Self];

    /// The set bit for this kind.
    fn bit(self) -> u16;
}

/// An accumulating set of error kinds from one conversion layer.
///
/// Any combination of a layer's kinds can be present at once. An empty set
/// means success and is never returned as the `Err` of a `Result`.
///
/// # Example
///
/// ```
/// use mgrs::error::{Errors, MgrsError};
///
/// let mut errors = Errors::none();
/// errors.insert(MgrsError::Latitude);
/// errors.insert(MgrsError::Precision);
///
/// assert!(errors.contains(MgrsError::Latitude));
/// assert!(errors.contains(MgrsError::Precision));
/// assert!(!errors.contains(MgrsError::Longitude));
/// ```
pub struct Errors<K: ErrorKind> {
    bits: u16,
    kind: PhantomData<K>,
}

impl<K: ErrorKind> Errors<K> {
    /// The empty set.
    pub const fn none() -> Self {
        Self {
            bits: 0,
            kind: PhantomData,
        }
    }

    /// Add a kind to the set.
    pub fn insert(&mut self, kind: K) {
        self.bits |= kind.bit();
    }

    /// Add a kind to the set when `condition` holds.
    pub fn insert_if(&mut self, condition: bool, kind: K) {
        if condition {
            self.insert(kind);
        }
    }

    /// Whether the given kind is present.
    pub fn contains(&self, kind: K) -> bool {
        self.bits & kind.bit() != 0
    }

    /// Whether no kind is present.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The kinds present, in bit order.
    pub fn iter(self) -> impl Iterator<Item = K> {
        K::ALL.iter().copied().filter(move |kind| self.contains(*kind))
    }

    /// `Ok(value)` when the set is empty, `Err(self)` otherwise.
    ///
    /// This is the usual end of a validation block: collect every failed
    /// check, then turn the set into a `Result`.
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Translate this layer's kinds into another layer's through a mapping
    /// table. Kinds without a table entry are dropped.
    pub fn translate<D: ErrorKind>(self, table: &[(K, D)]) -> Errors<D> {
        let mut out = Errors::none();
        for (from, to) in table {
            if self.contains(*from) {
                out.insert(*to);
            }
        }
        out
    }
}

impl<K: ErrorKind> Clone for Errors<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ErrorKind> Copy for Errors<K> {}

impl<K: ErrorKind> PartialEq for Errors<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<K: ErrorKind> Eq for Errors<K> {}

impl<K: ErrorKind> Default for Errors<K> {
    fn default() -> Self {
        Self::none()
    }
}

impl<K: ErrorKind> From<K> for Errors<K> {
    fn from(kind: K) -> Self {
        let mut errors = Self::none();
        errors.insert(kind);
        errors
    }
}

impl<K: ErrorKind> fmt::Debug for Errors<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: ErrorKind> fmt::Display for Errors<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no errors");
        }
        let mut first = true;
        for kind in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", kind)?;
            first = false;
        }
        Ok(())
    }
}

impl<K: ErrorKind> std::error::Error for Errors<K> {}

/// Result type alias for the top-level MGRS operations.
pub type Result<T> = std::result::Result<T, Errors<MgrsError>>;

/// Failure kinds of the MGRS grid-letter layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MgrsError {
    /// Latitude outside [-90, 90] degrees, or outside the latitude bands.
    #[error("latitude out of range")]
    Latitude,

    /// Longitude outside [-180, 360] degrees.
    #[error("longitude out of range")]
    Longitude,

    /// Easting outside the grid range for the selected path.
    #[error("easting out of range")]
    Easting,

    /// Northing outside the grid range for the selected path.
    #[error("northing out of range")]
    Northing,

    /// UTM zone outside 1..=60, or an incompatible zone override.
    #[error("zone out of range")]
    Zone,

    /// Precision outside 0..=5.
    #[error("precision out of range (valid: 0..=5)")]
    Precision,
}

impl ErrorKind for MgrsError {
    const ALL: &'static [Self] = &[
        Self::Latitude,
        Self::Longitude,
        Self::Easting,
        Self::Northing,
        Self::Zone,
        Self::Precision,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Failure kinds of the UTM layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtmError {
    /// Latitude outside the UTM domain [-80.5, 84.5] degrees.
    #[error("latitude outside the UTM domain (-80.5 to 84.5 degrees)")]
    Latitude,

    /// Longitude outside [-180, 360] degrees.
    #[error("longitude out of range")]
    Longitude,

    /// Projected easting outside [100000, 900000] meters.
    #[error("easting outside 100000..=900000 meters")]
    Easting,

    /// Projected northing outside [0, 10000000] meters.
    #[error("northing outside 0..=10000000 meters")]
    Northing,

    /// Requested zone override is incompatible with the natural zone.
    #[error("zone override incompatible with the natural zone")]
    ZoneOverride,
}

impl ErrorKind for UtmError {
    const ALL: &'static [Self] = &[
        Self::Latitude,
        Self::Longitude,
        Self::Easting,
        Self::Northing,
        Self::ZoneOverride,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Failure kinds of the UPS layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsError {
    /// Latitude equatorward of the polar caps (83.5N / 79.5S), or beyond a
    /// pole.
    #[error("latitude outside the polar regions")]
    Latitude,

    /// Longitude outside [-180, 360] degrees.
    #[error("longitude out of range")]
    Longitude,
}

impl ErrorKind for UpsError {
    const ALL: &'static [Self] = &[Self::Latitude, Self::Longitude];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Failure kinds of the Transverse Mercator projection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranMercError {
    /// Latitude too close to a pole for the series expansion.
    #[error("latitude outside the projection domain")]
    Latitude,

    /// Longitude more than 90 degrees from the central meridian.
    #[error("longitude too far from the central meridian")]
    Longitude,

    /// Origin latitude outside [-90, 90] degrees.
    #[error("origin latitude out of range")]
    OriginLatitude,

    /// Central meridian outside [-180, 360] degrees.
    #[error("central meridian out of range")]
    CentralMeridian,

    /// Scale factor outside [0.3, 3.0].
    #[error("scale factor outside 0.3..=3.0")]
    ScaleFactor,
}

impl ErrorKind for TranMercError {
    const ALL: &'static [Self] = &[
        Self::Latitude,
        Self::Longitude,
        Self::OriginLatitude,
        Self::CentralMeridian,
        Self::ScaleFactor,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Failure kinds of the Polar Stereographic projection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarError {
    /// Latitude out of range, or in the wrong hemisphere for the origin.
    #[error("latitude out of range for the projection hemisphere")]
    Latitude,

    /// Longitude outside [-180, 360] degrees.
    #[error("longitude out of range")]
    Longitude,

    /// Latitude of true scale outside [-90, 90] degrees.
    #[error("latitude of true scale out of range")]
    OriginLatitude,

    /// Origin longitude outside [-180, 360] degrees.
    #[error("origin longitude out of range")]
    OriginLongitude,
}

impl ErrorKind for PolarError {
    const ALL: &'static [Self] = &[
        Self::Latitude,
        Self::Longitude,
        Self::OriginLatitude,
        Self::OriginLongitude,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Failure kinds of ellipsoid construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EllipsoidError {
    /// Semi-major axis must be greater than zero.
    #[error("semi-major axis must be greater than zero")]
    SemiMajorAxis,

    /// Inverse flattening must be between 250 and 350.
    #[error("inverse flattening outside 250..=350")]
    InverseFlattening,

    /// Ellipsoid code must be exactly two ASCII characters.
    #[error("ellipsoid code must be two ASCII characters")]
    Code,
}

impl ErrorKind for EllipsoidError {
    const ALL: &'static [Self] = &[
        Self::SemiMajorAxis,
        Self::InverseFlattening,
        Self::Code,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }
}
