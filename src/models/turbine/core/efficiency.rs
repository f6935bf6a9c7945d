use std::f64::consts::{LN_2, PI};

use super::TurbineConfig;

/// Coil efficiency at a given rotor speed.
///
/// Coils resonate with the grid frequency. Below `min_rpm` they run at a flat
/// 50%. Between `min_rpm` and `peak_rpm` efficiency oscillates log-periodically
/// between 50% and 100%, reaching full efficiency `efficiency_peaks` times.
/// Above `peak_rpm` it falls off parabolically to zero.
#[must_use]
pub fn coil_efficiency(rpm: f64, config: &TurbineConfig) -> f64 {
    let frequency = config.effective_grid_frequency;
    let peak_rpm = config.peak_rpm();
    let min_rpm = config.min_rpm();

    if rpm < min_rpm {
        0.5
    } else if rpm > peak_rpm {
        let excess = rpm - peak_rpm;
        let falloff = excess * excess / (8.0 * frequency * peak_rpm);
        (1.0 - falloff).max(0.0)
    } else {
        let phase = 1.0 - 2.0 * (rpm.ln() - config.ln_peak_rpm()) / LN_2;
        -0.25 * (phase * PI).cos() + 0.75
    }
}

/// Approximates `x^y` for exponents close to one.
///
/// Writes `x^y` as `x * e^p` with `p = (y - 1) * ln(x)` and expands `e^p` to
/// the fourth power of `p`. For the exponents found on coil materials (at most
/// a few hundredths above one) the relative error stays around `1e-5`.
///
/// Returns `x` unchanged when `x` is zero or `y` is one.
///
/// # Examples
///
/// ```
/// use turbine_models::models::turbine::approx_pow;
///
/// assert_eq!(approx_pow(1234.5, 1.0), 1234.5);
/// assert_eq!(approx_pow(0.0, 1.06), 0.0);
///
/// let exact = 1000_f64.powf(1.02);
/// assert!((approx_pow(1000.0, 1.02) - exact).abs() / exact < 1e-6);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_pow(x: f64, y: f64) -> f64 {
    if x == 0.0 || y == 1.0 {
        return x;
    }

    let p = (y - 1.0) * x.ln();

    let mut term = x;
    let mut sum = x;
    term *= p;
    sum += term;
    term *= p / 2.0;
    sum += term;
    term *= p / 3.0;
    sum += term;
    term *= p / 4.0;
    sum += term;
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn approx_pow_identities() {
        for x in [0.0, 1e-3, 1.0, 42.0, 7.5e6] {
            assert_eq!(approx_pow(x, 1.0), x);
        }
        for y in [0.0, 0.5, 1.0, 1.06, 3.0] {
            assert_eq!(approx_pow(0.0, y), 0.0);
        }
    }

    #[test]
    fn approx_pow_tracks_powf() {
        for (x, y) in [(1000.0, 1.02), (1.0e4, 1.04), (1.0e5, 1.02), (300.0, 1.06)] {
            assert_relative_eq!(approx_pow(x, y), x.powf(y), max_relative = 1e-4);
        }
    }

    #[test]
    fn floor_below_min_rpm() {
        let config = TurbineConfig::default();
        assert_relative_eq!(coil_efficiency(0.0, &config), 0.5);
        assert_relative_eq!(coil_efficiency(600.0, &config), 0.5);
    }

    #[test]
    fn full_efficiency_at_peak() {
        let config = TurbineConfig::default();
        assert_relative_eq!(coil_efficiency(1800.0, &config), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_far_above_peak() {
        let config = TurbineConfig::default();
        // 8 * 30 * 1800 = 432_000, so the curve reaches zero at 1800 + sqrt(432_000).
        assert_relative_eq!(
            coil_efficiency(1800.0 + 432_000_f64.sqrt(), &config),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(coil_efficiency(9586.5, &config), 0.0);
    }

    #[test]
    fn continuous_at_boundaries() {
        let config = TurbineConfig::default();
        let min_rpm = config.min_rpm();
        let peak_rpm = config.peak_rpm();
        let dx = 1e-9;

        assert_relative_eq!(
            coil_efficiency(min_rpm - dx, &config),
            coil_efficiency(min_rpm, &config),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            coil_efficiency(min_rpm + dx, &config),
            coil_efficiency(min_rpm, &config),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            coil_efficiency(peak_rpm - dx, &config),
            coil_efficiency(peak_rpm + dx, &config),
            epsilon = 1e-9
        );
    }

    #[test]
    fn resonance_peaks_below_peak_rpm() {
        let config = TurbineConfig::default();
        // With two peaks the first full-efficiency point is one octave below peak RPM.
        assert_relative_eq!(coil_efficiency(900.0, &config), 1.0, max_relative = 1e-12);
        // Halfway between octaves (in log space) the curve dips back to its floor.
        let trough = 1800.0 / 2_f64.sqrt();
        assert_relative_eq!(coil_efficiency(trough, &config), 0.5, max_relative = 1e-12);
    }
}
