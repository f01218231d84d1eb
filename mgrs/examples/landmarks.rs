//! Basic example demonstrating geodetic to MGRS conversion.
//!
//! Run with: cargo run --example landmarks

use mgrs::{convert_geodetic_to_mgrs, Ellipsoid};

fn main() {
    let wgs84 = Ellipsoid::WGS84;

    // A few places around the globe, in decimal degrees
    let locations: [(&str, f64, f64); 7] = [
        ("Null Island", 0.0, 0.0),
        ("Eiffel Tower, Paris", 48.8582, 2.2945),
        ("Sydney Opera House", -33.8568, 151.2153),
        ("Bergen, Norway", 60.39, 5.32),
        ("Longyearbyen, Svalbard", 78.2232, 15.6267),
        ("North Pole", 90.0, 0.0),
        ("South Pole", -90.0, 0.0),
    ];

    println!("MGRS references at 1m, 100m, and grid-square precision:");
    println!("{:-<72}", "");

    for (name, lat, lon) in &locations {
        let latitude: f64 = (*lat).to_radians();
        let longitude: f64 = (*lon).to_radians();

        match convert_geodetic_to_mgrs(&wgs84, latitude, longitude, 5) {
            Ok(full) => {
                let coarse = convert_geodetic_to_mgrs(&wgs84, latitude, longitude, 3)
                    .expect("coarser precision cannot fail if 1m worked");
                let square = convert_geodetic_to_mgrs(&wgs84, latitude, longitude, 0)
                    .expect("coarser precision cannot fail if 1m worked");
                println!(
                    "{:24} {:17} {:13} {}",
                    name,
                    full.to_string(),
                    coarse.to_string(),
                    square
                );
            }
            Err(errors) => {
                println!("{:24} error - {}", name, errors);
            }
        }
    }
}
