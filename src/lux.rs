//! Empirical conversion from channel counts to illuminance.
//!
//! The coefficients are the TSL2561 T/FN/CL package approximation of the human eye response.  The
//! counts are expected at the equivalent of 16x gain, which [`crate::Tsl2561::all`] provides by
//! scaling readings taken without gain.

use libm::pow;

/// Illuminance in lux for a broadband (`ch0`) and infrared (`ch1`) count pair.
///
/// Boundary ratios of 0.52, 0.65 and 0.80 fall to the later segment.  Ratios above 1.30 give
/// zero.
#[must_use]
pub fn lux(ch0: u32, ch1: u32) -> f64 {
    if ch0 == 0 {
        return 0.0;
    }
    let ch0 = f64::from(ch0);
    let ch1 = f64::from(ch1);
    let ratio = ch1 / ch0;

    if ratio < 0.52 {
        0.0315 * ch0 - 0.0593 * ch0 * pow(ratio, 1.4)
    } else if ratio < 0.65 {
        0.0229 * ch0 - 0.0291 * ch1
    } else if ratio < 0.80 {
        0.0157 * ch0 - 0.0180 * ch1
    } else if ratio <= 1.30 {
        0.00338 * ch0 - 0.00260 * ch1
    } else {
        0.0
    }
}

#[cfg(all(test, not(all(target_arch = "arm", target_os = "none"))))]
mod test {
    use crate::lux::lux;

    #[test]
    pub fn dark() {
        assert_eq!(lux(0, 0), 0.0);
        assert_eq!(lux(0, 1234), 0.0);
    }

    #[test]
    pub fn no_infrared() {
        assert_eq!(lux(1000, 0), 31.5);
    }

    #[test]
    pub fn first_segment() {
        let expected = 0.0315 * 1000.0 - 0.0593 * 1000.0 * libm::pow(0.3, 1.4);
        assert!((lux(1000, 300) - expected).abs() < 1e-9);
    }

    #[test]
    pub fn ratio_052_uses_second_segment() {
        let second = 0.0229 * 1000.0 - 0.0291 * 520.0;
        let first = 0.0315 * 1000.0 - 0.0593 * 1000.0 * libm::pow(0.52, 1.4);
        assert!((lux(1000, 520) - second).abs() < 1e-9);
        assert!((lux(1000, 520) - first).abs() > 1e-4);
    }

    #[test]
    pub fn ratio_065_uses_third_segment() {
        let third = 0.0157 * 1000.0 - 0.0180 * 650.0;
        assert!((lux(1000, 650) - third).abs() < 1e-9);
        assert!((lux(1000, 650) - 3.985).abs() > 1e-3);
    }

    #[test]
    pub fn ratio_080_uses_fourth_segment() {
        assert_eq!(lux(1000, 800), 0.00338 * 1000.0 - 0.00260 * 800.0);
    }

    #[test]
    pub fn ratio_130_is_last_nonzero() {
        let fourth = 0.00338 * 1000.0 - 0.00260 * 1300.0;
        assert!((lux(1000, 1300) - fourth).abs() < 1e-9);
    }

    #[test]
    pub fn mostly_infrared_is_zero() {
        assert_eq!(lux(1000, 1500), 0.0);
        assert_eq!(lux(1, 65535), 0.0);
    }

    #[test]
    pub fn deterministic() {
        assert_eq!(lux(4321, 1234), lux(4321, 1234));
    }
}
