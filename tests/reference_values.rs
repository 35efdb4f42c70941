//! Reference values for the ECI to ECEF transform
//!
//! Expected values were evaluated in double precision with the same Julian
//! date, GMST polynomial and rotation formulas, independently of this crate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use eci2ecef::constants::TAU;
use eci2ecef::time::{gmst_rad, julian_centuries_since_j2000, julian_date};
use eci2ecef::{ecef_to_eci, eci_to_ecef, CalendarTime, Cartesian3};
use rstest::rstest;

#[rstest]
#[case::j2000((2000.0, 1.0, 1.0, 12.0, 0.0, 0.0), [7000.0, 0.0, 0.0],
    2_451_545.0, 4.908362597187872, [1363.0512522815707, 6866.009851700887, 0.0])]
#[case::new_year_2020((2020.0, 1.0, 1.0, 0.0, 0.0, 0.0), [7000.0, 0.0, 0.0],
    2_458_849.5, 1.752239597339441, [-1263.145373652064, -6885.089960561255, 0.0])]
#[case::fractional_second((1990.0, 6.0, 15.0, 6.0, 30.0, 15.5), [-4000.5, 5500.25, 1200.0],
    2_448_057.7710127314, 0.014825831119568717, [-3918.5175522822674, 5558.954083724364, 1200.0])]
#[case::pre_epoch((1957.0, 10.0, 4.0, 19.0, 28.0, 34.0), [6955.0, -120.0, 250.0],
    2_436_116.3115046294, 5.344061599169684, [4203.740806513494, 5542.110449247045, 250.0])]
#[case::gps_altitude((2024.0, 3.0, 20.0, 3.0, 6.0, 0.0), [26560.0, 0.0, 0.0],
    2_460_389.629166667, 3.9315482085310176, [-18694.97010942386, 18866.152035000367, 0.0])]
#[case::month_thirteen((2000.0, 13.0, 1.0, 0.0, 0.0, 0.0), [0.0, 42164.0, 10.0],
    2_451_910.5, 1.7626161579018396, [41390.66661526105, -8038.383739553279, 10.0])]
fn test_reference_transform(
    #[case] time: (f64, f64, f64, f64, f64, f64),
    #[case] eci: [f64; 3],
    #[case] expected_jd: f64,
    #[case] expected_gmst: f64,
    #[case] expected_ecef: [f64; 3],
) {
    let time = CalendarTime::from(time);
    let eci = Cartesian3::from(eci);

    assert_relative_eq!(julian_date(&time), expected_jd, max_relative = 1e-15);
    assert_abs_diff_eq!(gmst_rad(julian_date(&time)), expected_gmst, epsilon = 1e-9);

    let ecef = eci_to_ecef(&time, eci);
    assert_abs_diff_eq!(ecef.x, expected_ecef[0], epsilon = 1e-6);
    assert_abs_diff_eq!(ecef.y, expected_ecef[1], epsilon = 1e-6);
    assert_eq!(ecef.z, expected_ecef[2]);
}

#[test]
fn test_j2000_reference_instant() {
    let t = CalendarTime::new(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0);
    let jd = julian_date(&t);

    assert_eq!(julian_centuries_since_j2000(jd), 0.0);
    let expected = (67310.54841_f64.rem_euclid(86400.0) * 7.292115e-5).rem_euclid(TAU);
    assert_eq!(gmst_rad(jd), expected);
}

#[test]
fn test_round_trip_through_ecef() {
    let t = CalendarTime::new(2020.0, 1.0, 1.0, 0.0, 0.0, 0.0);
    let eci = Cartesian3::new(7000.0, 0.0, 0.0);
    let back = ecef_to_eci(&t, eci_to_ecef(&t, eci));

    assert_abs_diff_eq!((back - eci).magnitude(), 0.0, epsilon = 1e-9);
    assert_eq!(back.z, eci.z);
}

#[test]
fn test_gmst_stays_in_range_across_centuries() {
    for year in (1600..=2400).step_by(15) {
        for month in 1..=12 {
            let t = CalendarTime::new(year as f64, month as f64, 10.0, 7.0, 45.0, 12.25);
            let gmst = t.gmst_rad();
            assert!(
                (0.0..TAU).contains(&gmst),
                "GMST {} out of range for {}",
                gmst,
                t
            );
        }
    }
}
