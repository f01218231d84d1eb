//! MGRS grid letters and string assembly.
//!
//! This module turns projected coordinates into the discrete parts of an
//! MGRS reference: the latitude band letter, the two 100km-square letters,
//! and the truncated easting/northing digit groups. [`convert_geodetic_to_mgrs`]
//! is the top-level entry point; [`utm_to_mgrs`] and [`ups_to_mgrs`] accept
//! already-projected coordinates.
//!
//! # Grid alphabet
//!
//! MGRS never uses the letters I and O (too close to 1 and 0). All row and
//! column letters are drawn from the explicit 24-letter [`GRID_LETTERS`]
//! alphabet by direct index, and the polar quadrants carry their own
//! explicit column sequences, so no skip-correction arithmetic is needed
//! and no produced letter can ever be I or O.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::band::band_for_latitude;
use crate::ellipsoid::Ellipsoid;
use crate::error::{Errors, MgrsError, Result, UpsError, UtmError};
use crate::ups;
use crate::utm::{self, Hemisphere, UtmCoordinate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The MGRS grid alphabet: A through Z without I and O.
pub const GRID_LETTERS: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Maximum number of digits per easting/northing group.
pub const MAX_PRECISION: usize = 5;

const ONE_HUNDRED_KM: f64 = 100_000.0;
const TWO_MILLION: f64 = 2_000_000.0;

/// Valid UTM easting/northing handed to the grid-letter assigner.
const MIN_EASTING: f64 = 100_000.0;
const MAX_EASTING: f64 = 900_000.0;
const MIN_NORTHING: f64 = 0.0;
const MAX_NORTHING: f64 = 10_000_000.0;

/// Valid UPS easting/northing.
const MAX_POLAR_EAST_NORTH: f64 = 4_000_000.0;

/// Latitudes outside this range route to the UPS path.
const MIN_UTM_LAT: f64 = -80.0 * PI / 180.0;
const MAX_UTM_LAT: f64 = 84.0 * PI / 180.0;

/// Column letters of the western polar half-planes (squares A and Y).
const POLAR_COLUMNS_WEST: [char; 12] =
    ['J', 'K', 'L', 'P', 'Q', 'R', 'S', 'T', 'U', 'X', 'Y', 'Z'];

/// Column letters of the eastern polar half-planes (squares B and Z).
const POLAR_COLUMNS_EAST: [char; 12] =
    ['A', 'B', 'C', 'F', 'G', 'H', 'J', 'K', 'L', 'P', 'Q', 'R'];

/// Constants for one polar quadrant, keyed by its first MGRS letter.
struct PolarSquare {
    letter: char,
    columns: &'static [char; 12],
    false_easting: f64,
    false_northing: f64,
}

const POLAR_SQUARES: [PolarSquare; 4] = [
    PolarSquare { letter: 'A', columns: &POLAR_COLUMNS_WEST, false_easting: 800_000.0, false_northing: 800_000.0 },
    PolarSquare { letter: 'B', columns: &POLAR_COLUMNS_EAST, false_easting: 2_000_000.0, false_northing: 800_000.0 },
    PolarSquare { letter: 'Y', columns: &POLAR_COLUMNS_WEST, false_easting: 800_000.0, false_northing: 1_300_000.0 },
    PolarSquare { letter: 'Z', columns: &POLAR_COLUMNS_EAST, false_easting: 2_000_000.0, false_northing: 1_300_000.0 },
];

/// How UTM failures surface at the MGRS level.
const UTM_TO_MGRS: &[(UtmError, MgrsError)] = &[
    (UtmError::Latitude, MgrsError::Latitude),
    (UtmError::Longitude, MgrsError::Longitude),
    (UtmError::ZoneOverride, MgrsError::Zone),
    (UtmError::Easting, MgrsError::Easting),
    (UtmError::Northing, MgrsError::Northing),
];

/// How UPS failures surface at the MGRS level.
const UPS_TO_MGRS: &[(UpsError, MgrsError)] = &[
    (UpsError::Latitude, MgrsError::Latitude),
    (UpsError::Longitude, MgrsError::Longitude),
];

/// Column-letter base and row pattern offset for one zone.
///
/// The 60 zones cycle through six 8-letter column sets, and the row
/// lettering of adjacent zones is staggered by the pattern offset so
/// neighboring squares never share a letter pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ZoneSet {
    /// Index of the set's first column letter in [`GRID_LETTERS`].
    pub column_base: usize,
    /// Northing bias aligning the row-letter cycle, in meters.
    pub pattern_offset: f64,
}

/// Compute the column-letter set and row pattern offset for a zone.
pub(crate) fn zone_set(zone: u8, ellipsoid: &Ellipsoid) -> ZoneSet {
    let set_number = match zone % 6 {
        0 => 6,
        n => n,
    };

    let column_base = match set_number {
        1 | 4 => 0,  // A..H
        2 | 5 => 8,  // J..R
        _ => 16,     // S..Z
    };

    let even = set_number % 2 == 0;
    let pattern_offset = if ellipsoid.uses_al_pattern() {
        if even { 1_500_000.0 } else { 1_000_000.0 }
    } else if even {
        500_000.0
    } else {
        0.0
    };

    ZoneSet { column_base, pattern_offset }
}

/// An MGRS coordinate.
///
/// The [`Display`](fmt::Display) implementation renders the final string:
/// a two-digit zone (or two spaces in the polar caps), the three letters,
/// and the easting and northing digit groups at the stored precision.
///
/// # Example
///
/// ```
/// use mgrs::{convert_geodetic_to_mgrs, Ellipsoid};
///
/// let origin = convert_geodetic_to_mgrs(&Ellipsoid::WGS84, 0.0, 0.0, 5).unwrap();
/// assert_eq!(origin.to_string(), "31NAA6602100000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mgrs {
    /// UTM zone number; `None` for polar (UPS) references.
    pub zone: Option<u8>,
    /// Band letter, column letter, row letter.
    pub letters: [char; 3],
    /// Easting in meters, reduced modulo 100km when formatting.
    pub easting: f64,
    /// Northing in meters, reduced modulo 100km when formatting.
    pub northing: f64,
    /// Digits per easting/northing group, 0..=5.
    pub precision: usize,
}

impl fmt::Display for Mgrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone {
            Some(zone) => write!(f, "{:02}", zone)?,
            None => f.write_str("  ")?,
        }
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        // The field is public; clamp rather than panic on a hand-built
        // value.
        let precision = self.precision.min(MAX_PRECISION);
        if precision > 0 {
            let divisor = 10f64.powi((MAX_PRECISION - precision) as i32);
            write!(
                f,
                "{:0width$}",
                square_offset(self.easting, divisor),
                width = precision
            )?;
            write!(
                f,
                "{:0width$}",
                square_offset(self.northing, divisor),
                width = precision
            )?;
        }
        Ok(())
    }
}

/// Offset within the current 100km square, truncated to the precision
/// divisor. Values that would round up past the square edge are clamped so
/// the digit group cannot overflow its width.
fn square_offset(value: f64, divisor: f64) -> u64 {
    let mut offset = value % ONE_HUNDRED_KM;
    if offset >= 99_999.5 {
        offset = 99_999.0;
    }
    (offset / divisor) as u64
}

/// Convert a UTM coordinate to an MGRS reference.
///
/// The latitude and longitude that produced the coordinate are required:
/// the latitude selects the band letter, and both drive the zone 31V
/// anomaly. Coordinates rounded onto the truncated eastern edge of zone
/// 31V are re-projected into zone 32 before letters are assigned.
///
/// # Arguments
///
/// * `ellipsoid` - Reference ellipsoid
/// * `utm` - The projected coordinate
/// * `latitude` - Latitude in radians
/// * `longitude` - Longitude in radians
/// * `precision` - Digits per easting/northing group, 0..=5
///
/// # Errors
///
/// All failed range checks are reported together in the returned set.
pub fn utm_to_mgrs(
    ellipsoid: &Ellipsoid,
    utm: &UtmCoordinate,
    latitude: f64,
    longitude: f64,
    precision: usize,
) -> Result<Mgrs> {
    let mut errors = Errors::none();
    errors.insert_if(!(1..=60).contains(&utm.zone), MgrsError::Zone);
    errors.insert_if(
        !(MIN_EASTING..=MAX_EASTING).contains(&utm.easting),
        MgrsError::Easting,
    );
    errors.insert_if(
        !(MIN_NORTHING..=MAX_NORTHING).contains(&utm.northing),
        MgrsError::Northing,
    );
    errors.insert_if(precision > MAX_PRECISION, MgrsError::Precision);
    errors.into_result(())?;

    let mut zone = utm.zone;
    let mut easting = utm.easting;
    let mut northing = utm.northing;
    let mut latitude = latitude;

    // Coordinates rounded onto the truncated eastern edge of zone 31V
    // belong to Norway's enlarged zone 32; re-project there first.
    let degrees = latitude.to_degrees();
    if zone == 31
        && (56.0..64.0).contains(&degrees)
        && (longitude >= 3.0_f64.to_radians() || easting >= 500_000.0)
    {
        let reprojected = utm::convert_geodetic(ellipsoid, latitude, longitude, Some(32))
            .map_err(|errors| errors.translate(UTM_TO_MGRS))?;
        zone = reprojected.zone;
        easting = reprojected.easting;
        northing = reprojected.northing;
    }

    // A southern-hemisphere point carrying the full 10,000,000 m false
    // northing is numerically the equator itself.
    if latitude <= 0.0 && northing == MAX_NORTHING {
        latitude = 0.0;
        northing = 0.0;
    }

    let set = zone_set(zone, ellipsoid);
    let band = band_for_latitude(latitude)?;

    let mut grid_northing = northing % TWO_MILLION + set.pattern_offset;
    if grid_northing >= TWO_MILLION {
        grid_northing -= TWO_MILLION;
    }
    let row = (grid_northing / ONE_HUNDRED_KM) as usize;

    let mut grid_easting = easting;
    if band.letter == 'V' && zone == 31 && grid_easting == 500_000.0 {
        // Exactly on the truncated 31V edge: nudge one meter west so the
        // column letter stays inside the zone.
        grid_easting -= 1.0;
    }

    // Column letters tile the 24-letter ring in 8-letter sets; the far
    // zone edge spills into the following set's first letter.
    let column =
        (set.column_base + (grid_easting / ONE_HUNDRED_KM) as usize - 1) % GRID_LETTERS.len();

    Ok(Mgrs {
        zone: Some(zone),
        letters: [band.letter, GRID_LETTERS[column], GRID_LETTERS[row]],
        easting: grid_easting,
        northing,
        precision,
    })
}

/// Convert a UPS coordinate to an MGRS reference.
///
/// # Arguments
///
/// * `hemisphere` - Polar cap the coordinate lies in
/// * `easting` - Easting in meters, 0..=4,000,000
/// * `northing` - Northing in meters, 0..=4,000,000
/// * `precision` - Digits per easting/northing group, 0..=5
///
/// # Errors
///
/// All failed range checks are reported together. Eastings or northings
/// inside the coarse 0..=4,000,000 bound but outside the lettered polar
/// region fail with the corresponding kind.
pub fn ups_to_mgrs(
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
    precision: usize,
) -> Result<Mgrs> {
    let mut errors = Errors::none();
    errors.insert_if(
        !(0.0..=MAX_POLAR_EAST_NORTH).contains(&easting),
        MgrsError::Easting,
    );
    errors.insert_if(
        !(0.0..=MAX_POLAR_EAST_NORTH).contains(&northing),
        MgrsError::Northing,
    );
    errors.insert_if(precision > MAX_PRECISION, MgrsError::Precision);
    errors.into_result(())?;

    let east_side = easting >= TWO_MILLION;
    let square = match (hemisphere, east_side) {
        (Hemisphere::South, false) => &POLAR_SQUARES[0],
        (Hemisphere::South, true) => &POLAR_SQUARES[1],
        (Hemisphere::North, false) => &POLAR_SQUARES[2],
        (Hemisphere::North, true) => &POLAR_SQUARES[3],
    };

    let row_index = ((northing - square.false_northing) / ONE_HUNDRED_KM).floor();
    let column_index = ((easting - square.false_easting) / ONE_HUNDRED_KM).floor();

    let mut errors = Errors::none();
    errors.insert_if(
        !(0.0..GRID_LETTERS.len() as f64).contains(&row_index),
        MgrsError::Northing,
    );
    errors.insert_if(
        !(0.0..square.columns.len() as f64).contains(&column_index),
        MgrsError::Easting,
    );
    errors.into_result(())?;

    Ok(Mgrs {
        zone: None,
        letters: [
            square.letter,
            square.columns[column_index as usize],
            GRID_LETTERS[row_index as usize],
        ],
        easting,
        northing,
        precision,
    })
}

/// Convert geodetic coordinates to an MGRS reference.
///
/// Latitudes between 80S and 84N take the UTM path; the polar caps take
/// the UPS path. The longitude range is deliberately permissive,
/// [-180, 360] degrees, so both signed and unsigned conventions work.
///
/// # Arguments
///
/// * `ellipsoid` - Reference ellipsoid
/// * `latitude` - Latitude in radians, [-90, 90] degrees
/// * `longitude` - Longitude in radians, [-180, 360] degrees
/// * `precision` - Digits per easting/northing group, 0..=5
///
/// # Errors
///
/// All failed input checks are reported together; no output is produced
/// when any kind is set.
///
/// # Example
///
/// ```
/// use mgrs::{convert_geodetic_to_mgrs, Ellipsoid};
///
/// let sydney = convert_geodetic_to_mgrs(
///     &Ellipsoid::WGS84,
///     (-33.85_f64).to_radians(),
///     151.21_f64.to_radians(),
///     2,
/// )
/// .unwrap();
/// assert_eq!(sydney.zone, Some(56));
/// assert_eq!(sydney.letters, ['H', 'L', 'H']);
/// ```
pub fn convert_geodetic_to_mgrs(
    ellipsoid: &Ellipsoid,
    latitude: f64,
    longitude: f64,
    precision: usize,
) -> Result<Mgrs> {
    let mut errors = Errors::none();
    errors.insert_if(!(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude), MgrsError::Latitude);
    errors.insert_if(!(-PI..=2.0 * PI).contains(&longitude), MgrsError::Longitude);
    errors.insert_if(precision > MAX_PRECISION, MgrsError::Precision);
    errors.into_result(())?;

    if !(MIN_UTM_LAT..=MAX_UTM_LAT).contains(&latitude) {
        let ups = ups::convert_geodetic(ellipsoid, latitude, longitude)
            .map_err(|errors| errors.translate(UPS_TO_MGRS))?;
        ups_to_mgrs(ups.hemisphere, ups.easting, ups.northing, precision)
    } else {
        let utm = utm::convert_geodetic(ellipsoid, latitude, longitude, None)
            .map_err(|errors| errors.translate(UTM_TO_MGRS))?;
        utm_to_mgrs(ellipsoid, &utm, latitude, longitude, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_sets_repeat_every_six_zones() {
        let wgs84 = Ellipsoid::WGS84;
        let one = zone_set(1, &wgs84);
        assert_eq!(one, zone_set(7, &wgs84));
        assert_eq!(one, zone_set(61, &wgs84));
        assert_eq!(zone_set(2, &wgs84), zone_set(8, &wgs84));
        assert_eq!(zone_set(6, &wgs84), zone_set(12, &wgs84));
    }

    #[test]
    fn test_zone_set_column_bases() {
        let wgs84 = Ellipsoid::WGS84;
        assert_eq!(zone_set(1, &wgs84).column_base, 0);
        assert_eq!(zone_set(2, &wgs84).column_base, 8);
        assert_eq!(zone_set(3, &wgs84).column_base, 16);
        assert_eq!(zone_set(4, &wgs84).column_base, 0);
        assert_eq!(zone_set(5, &wgs84).column_base, 8);
        assert_eq!(zone_set(60, &wgs84).column_base, 16);
    }

    #[test]
    fn test_pattern_offsets() {
        let wgs84 = Ellipsoid::WGS84;
        assert_eq!(zone_set(31, &wgs84).pattern_offset, 0.0);
        assert_eq!(zone_set(32, &wgs84).pattern_offset, 500_000.0);

        let clarke = Ellipsoid::CLARKE_1866;
        assert_eq!(zone_set(31, &clarke).pattern_offset, 1_000_000.0);
        assert_eq!(zone_set(32, &clarke).pattern_offset, 1_500_000.0);
    }

    #[test]
    fn test_format_polar_reference() {
        let reference = Mgrs {
            zone: None,
            letters: ['Y', 'Z', 'A'],
            easting: 1_234_567.0,
            northing: 2_345_678.0,
            precision: 3,
        };
        // 34567 -> 345, 45678 -> 456 after the mod-100km reduction.
        assert_eq!(reference.to_string(), "  YZA345456");
    }

    #[test]
    fn test_format_zone_is_zero_padded() {
        let reference = Mgrs {
            zone: Some(1),
            letters: ['N', 'A', 'A'],
            easting: 0.0,
            northing: 0.0,
            precision: 1,
        };
        assert_eq!(reference.to_string(), "01NAA00");
    }

    #[test]
    fn test_format_precision_zero_has_no_digits() {
        let reference = Mgrs {
            zone: Some(31),
            letters: ['N', 'A', 'A'],
            easting: 166_021.4,
            northing: 0.0,
            precision: 0,
        };
        assert_eq!(reference.to_string(), "31NAA");
    }

    #[test]
    fn test_format_clamps_rounding_overflow() {
        let reference = Mgrs {
            zone: Some(31),
            letters: ['N', 'A', 'A'],
            easting: 199_999.6,
            northing: 50_000.0,
            precision: 5,
        };
        // 99999.6 would round past the square edge; it clamps to 99999.
        assert_eq!(reference.to_string(), "31NAA9999950000");
    }

    #[test]
    fn test_utm_to_mgrs_equator_origin() {
        let utm = UtmCoordinate {
            zone: 31,
            hemisphere: Hemisphere::North,
            easting: 166_021.44,
            northing: 0.0,
            longitude_warning: false,
        };
        let reference = utm_to_mgrs(&Ellipsoid::WGS84, &utm, 0.0, 0.0, 5).unwrap();
        assert_eq!(reference.to_string(), "31NAA6602100000");
    }

    #[test]
    fn test_utm_to_mgrs_al_pattern_row() {
        // Same point on Clarke 1866 starts the row cycle at L, not A.
        let utm = UtmCoordinate {
            zone: 31,
            hemisphere: Hemisphere::North,
            easting: 166_021.44,
            northing: 0.0,
            longitude_warning: false,
        };
        let reference = utm_to_mgrs(&Ellipsoid::CLARKE_1866, &utm, 0.0, 0.0, 5).unwrap();
        assert_eq!(reference.letters, ['N', 'A', 'L']);
    }

    #[test]
    fn test_utm_to_mgrs_row_pattern_wraps_two_million() {
        let utm = UtmCoordinate {
            zone: 32,
            hemisphere: Hemisphere::North,
            easting: 500_000.0,
            northing: 3_600_000.0,
            longitude_warning: false,
        };
        // Zone 32 biases rows by 500km: (3.6M mod 2M) + 500km = 2.1M wraps
        // to 100km, row B.
        let reference = utm_to_mgrs(
            &Ellipsoid::WGS84,
            &utm,
            32.5_f64.to_radians(),
            9.0_f64.to_radians(),
            3,
        )
        .unwrap();
        assert_eq!(reference.letters[2], 'B');
    }

    #[test]
    fn test_utm_to_mgrs_zone_31v_reprojects_to_32() {
        // A zone-31 coordinate east of the truncated 31V edge must come
        // back as zone 32.
        let utm = UtmCoordinate {
            zone: 31,
            hemisphere: Hemisphere::North,
            easting: 527_840.0,
            northing: 6_655_000.0,
            longitude_warning: false,
        };
        let reference = utm_to_mgrs(
            &Ellipsoid::WGS84,
            &utm,
            60.0_f64.to_radians(),
            3.5_f64.to_radians(),
            3,
        )
        .unwrap();
        assert_eq!(reference.zone, Some(32));
        assert_eq!(reference.letters[0], 'V');
        assert_eq!(reference.letters[1], 'J');
    }

    #[test]
    fn test_utm_to_mgrs_equator_wrap_fixup() {
        // Southern-hemisphere coordinate numerically on the 10M wrap is
        // the equator: band N, row A, northing digits zero.
        let utm = UtmCoordinate {
            zone: 31,
            hemisphere: Hemisphere::South,
            easting: 166_021.44,
            northing: 10_000_000.0,
            longitude_warning: false,
        };
        let reference = utm_to_mgrs(&Ellipsoid::WGS84, &utm, -0.0, 0.0, 5).unwrap();
        assert_eq!(reference.letters, ['N', 'A', 'A']);
        assert_eq!(reference.to_string(), "31NAA6602100000");
    }

    #[test]
    fn test_utm_to_mgrs_validates_inputs_together() {
        let utm = UtmCoordinate {
            zone: 0,
            hemisphere: Hemisphere::North,
            easting: 50_000.0,
            northing: 0.0,
            longitude_warning: false,
        };
        let errors = utm_to_mgrs(&Ellipsoid::WGS84, &utm, 0.0, 0.0, 6).unwrap_err();
        assert!(errors.contains(MgrsError::Zone));
        assert!(errors.contains(MgrsError::Easting));
        assert!(errors.contains(MgrsError::Precision));
    }

    #[test]
    fn test_utm_letters_never_i_or_o() {
        let wgs84 = Ellipsoid::WGS84;
        for zone in 1..=60u8 {
            // Mid-zone longitude and a mid-band latitude keep the letter
            // assignment away from the 31V re-projection path.
            let longitude = f64::from(i32::from(zone) * 6 - 183 - 3).to_radians();
            for easting_step in 0..=16 {
                let easting = 100_000.0 + f64::from(easting_step) * 50_000.0;
                for northing_step in 0..=100 {
                    let northing = f64::from(northing_step) * 100_000.0;
                    let utm = UtmCoordinate {
                        zone,
                        hemisphere: Hemisphere::North,
                        easting,
                        northing,
                        longitude_warning: false,
                    };
                    let reference =
                        utm_to_mgrs(&wgs84, &utm, 45.0_f64.to_radians(), longitude, 0)
                            .unwrap();
                    for letter in reference.letters {
                        assert_ne!(letter, 'I');
                        assert_ne!(letter, 'O');
                    }
                }
            }
        }
    }

    #[test]
    fn test_ups_to_mgrs_poles() {
        let north =
            ups_to_mgrs(Hemisphere::North, 2_000_000.0, 2_000_000.0, 5).unwrap();
        assert_eq!(north.to_string(), "  ZAH0000000000");

        let south =
            ups_to_mgrs(Hemisphere::South, 2_000_000.0, 2_000_000.0, 5).unwrap();
        assert_eq!(south.to_string(), "  BAN0000000000");
    }

    #[test]
    fn test_ups_to_mgrs_west_column_sequence() {
        // The western half-plane jumps L->P and U->X in its column letters.
        let reference =
            ups_to_mgrs(Hemisphere::South, 1_900_000.0, 2_500_000.0, 0).unwrap();
        assert_eq!(reference.letters, ['A', 'Z', 'T']);

        let reference =
            ups_to_mgrs(Hemisphere::South, 1_100_000.0, 2_500_000.0, 0).unwrap();
        assert_eq!(reference.letters, ['A', 'P', 'T']);
    }

    #[test]
    fn test_ups_to_mgrs_east_column_sequence() {
        // The eastern half-plane jumps C->F and H->J in its column letters.
        let reference =
            ups_to_mgrs(Hemisphere::North, 2_350_000.0, 1_350_000.0, 0).unwrap();
        assert_eq!(reference.letters, ['Z', 'F', 'A']);

        let reference =
            ups_to_mgrs(Hemisphere::North, 2_650_000.0, 1_350_000.0, 0).unwrap();
        assert_eq!(reference.letters, ['Z', 'J', 'A']);
    }

    #[test]
    fn test_ups_to_mgrs_rejects_unreachable_corner() {
        // Inside the coarse range but outside the lettered polar region.
        let errors = ups_to_mgrs(Hemisphere::North, 0.0, 0.0, 0).unwrap_err();
        assert!(errors.contains(MgrsError::Easting));
        assert!(errors.contains(MgrsError::Northing));
    }

    #[test]
    fn test_ups_to_mgrs_validates_range() {
        let errors = ups_to_mgrs(Hemisphere::North, -1.0, 5_000_000.0, 6).unwrap_err();
        assert!(errors.contains(MgrsError::Easting));
        assert!(errors.contains(MgrsError::Northing));
        assert!(errors.contains(MgrsError::Precision));
    }

    #[test]
    fn test_convert_geodetic_routes_to_ups() {
        let reference =
            convert_geodetic_to_mgrs(&Ellipsoid::WGS84, FRAC_PI_2, 0.0, 0).unwrap();
        assert_eq!(reference.zone, None);
        assert_eq!(reference.to_string(), "  ZAH");
    }

    #[test]
    fn test_convert_geodetic_invalid_inputs_accumulate() {
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
    fn test_convert_geodetic_permissive_longitude() {
        let signed =
            convert_geodetic_to_mgrs(&Ellipsoid::WGS84, 0.7, (-10.0_f64).to_radians(), 4)
                .unwrap();
        let unsigned =
            convert_geodetic_to_mgrs(&Ellipsoid::WGS84, 0.7, 350.0_f64.to_radians(), 4)
                .unwrap();
        assert_eq!(signed.to_string(), unsigned.to_string());
    }
}
