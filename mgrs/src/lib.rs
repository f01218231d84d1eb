//! # MGRS - Military Grid Reference System Library
//!
//! Convert geodetic coordinates (latitude/longitude) into MGRS alphanumeric
//! grid references, with the full UTM/UPS projection stack included.
//!
//! ## Features
//!
//! - **Complete**: latitude-band classification, 100km-square letters,
//!   polar-cap letters, and digit-group formatting, including the zone 31V
//!   anomaly and the Norway/Svalbard zone exceptions
//! - **Self-contained**: ships its own Transverse Mercator and Polar
//!   Stereographic forward projections
//! - **Safe by construction**: row and column letters are drawn from an
//!   explicit 24-letter alphabet, so the forbidden letters I and O can
//!   never appear
//! - **Reentrant**: all parameters travel in immutable values; no global
//!   state, no locks
//!
//! ## Quick Start
//!
//! ```
//! use mgrs::{convert_geodetic_to_mgrs, Ellipsoid};
//!
//! // Latitude and longitude in radians, precision 0..=5.
//! let reference = convert_geodetic_to_mgrs(
//!     &Ellipsoid::WGS84,
//!     0.0,
//!     0.0,
//!     5,
//! ).unwrap();
//! assert_eq!(reference.to_string(), "31NAA6602100000");
//!
//! // Polar latitudes switch to UPS lettering and carry no zone number.
//! let pole = convert_geodetic_to_mgrs(
//!     &Ellipsoid::WGS84,
//!     90.0_f64.to_radians(),
//!     0.0,
//!     2,
//! ).unwrap();
//! assert_eq!(pole.to_string(), "  ZAH0000");
//! ```
//!
//! ## Coordinate conventions
//!
//! - Latitudes and longitudes are in **radians**; eastings and northings in
//!   **meters**
//! - Longitudes from -180 to 360 degrees are accepted, so both signed and
//!   unsigned conventions work
//! - Precision selects digits per easting/northing group: 0 (grid zone and
//!   square only) up to 5 (1 meter)
//!
//! ## Error handling
//!
//! Validation failures are independent and accumulate: an out-of-range
//! latitude and an out-of-range precision in the same call both appear in
//! the returned [`Errors`] set.

pub mod band;
pub mod ellipsoid;
pub mod error;
pub mod grid;
pub mod polarst;
pub mod tranmerc;
pub mod ups;
pub mod utm;

// Re-export main types at crate root for convenience
pub use ellipsoid::Ellipsoid;
pub use error::{
    EllipsoidError, Errors, MgrsError, PolarError, Result, TranMercError, UpsError, UtmError,
};
pub use grid::{convert_geodetic_to_mgrs, ups_to_mgrs, utm_to_mgrs, Mgrs, GRID_LETTERS, MAX_PRECISION};
pub use polarst::PolarStereographic;
pub use tranmerc::{TmCoordinate, TransverseMercator};
pub use ups::UpsCoordinate;
pub use utm::{Hemisphere, UtmCoordinate};
