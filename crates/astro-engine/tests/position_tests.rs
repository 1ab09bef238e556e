use astro_engine::ephemeris::{generate_positions, sign_index_for_longitude, PositionGenerator};
use astro_engine::{BirthDetails, Body};
use proptest::prelude::*;

fn new_year_2000() -> BirthDetails {
    BirthDetails {
        year: 2000,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        latitude: 0.0,
        longitude: 0.0,
        timezone_offset_hours: 0.0,
    }
}

#[test]
fn test_positions_in_canonical_order() {
    let positions = generate_positions(&new_year_2000());
    let bodies: Vec<Body> = positions.iter().map(|p| p.body).collect();
    assert_eq!(bodies, Body::ALL.to_vec());
}

#[test]
fn test_positions_are_deterministic() {
    let details = new_year_2000();
    let first = generate_positions(&details);
    let second = generate_positions(&details);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.full_degree.to_bits(), b.full_degree.to_bits());
        assert_eq!(a.in_sign_degree.to_bits(), b.in_sign_degree.to_bits());
        assert_eq!(a.sign_index, b.sign_index);
        assert_eq!(a.is_retrograde, b.is_retrograde);
    }
}

#[test]
fn test_known_seed_values() {
    // Seed 2002 (2000 + 1 + 1), Sun uses factor 1.
    let positions = generate_positions(&new_year_2000());
    let sun = positions[0];
    let v = 2002.0_f64.sin() * 0.5 + 0.5;
    assert_eq!(sun.sign_index as f64, (v * 12.0).floor() + 1.0);
    assert_eq!(sun.is_retrograde, (2002.0_f64 * 2.0).sin() > 0.7);
}

#[test]
fn test_seed_includes_every_field() {
    let base = new_year_2000();
    let shifted = BirthDetails { timezone_offset_hours: 5.5, ..base };
    assert_eq!(shifted.seed() - base.seed(), 5.5);
    assert_ne!(generate_positions(&base), generate_positions(&shifted));
}

proptest! {
    #[test]
    fn positions_satisfy_sign_invariants(seed in -1.0e6..1.0e6f64) {
        let generator = PositionGenerator::new();
        for body in Body::ALL {
            let pos = generator.calc_body_position(body, seed);
            prop_assert!((1..=12).contains(&pos.sign_index));
            prop_assert!(pos.in_sign_degree >= 0.0 && pos.in_sign_degree < 30.0);
            prop_assert!(pos.full_degree >= 0.0 && pos.full_degree < 360.0);
            prop_assert_eq!(pos.sign_index, sign_index_for_longitude(pos.full_degree));
        }
    }

    #[test]
    fn positions_deterministic_for_any_details(
        year in 1900..=2100i32,
        month in 1..=12i32,
        day in 1..=31i32,
        latitude in -90.0..=90.0f64,
        longitude in -180.0..=180.0f64,
        tz in -12.0..=14.0f64,
    ) {
        let details = BirthDetails {
            year,
            month,
            day,
            hour: 12,
            minute: 30,
            second: 0,
            latitude,
            longitude,
            timezone_offset_hours: tz,
        };
        prop_assert_eq!(generate_positions(&details), generate_positions(&details));
    }
}
