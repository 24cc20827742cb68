//! Closed-form oscillator models.
//!
//! Each function is a pure, deterministic mapping `(t, θ) → predicted
//! position`, total on its numeric domain for finite parameters. Parameter
//! ordering is fixed by the registry entries in
//! [`registry`](crate::models::registry); evaluators index `θ` directly and
//! assume the arity has been checked upstream.
use crate::fitting::types::Theta;

/// Plain cosine: `A·cos(ω·t + φ)`.
///
/// `θ = [A, omega, phi]`.
pub fn simple(t: f64, theta: &Theta) -> f64 {
    let (a, omega, phi) = (theta[0], theta[1], theta[2]);
    a * (omega * t + phi).cos()
}

/// Exponentially damped sine with constant offset:
/// `A·sin(ω·t + φ)·exp(−γ·t) + c`.
///
/// `θ = [A, omega, phi, gamma, c]`.
pub fn damped(t: f64, theta: &Theta) -> f64 {
    let (a, omega, phi, gamma, c) = (theta[0], theta[1], theta[2], theta[3], theta[4]);
    a * (omega * t + phi).sin() * (-gamma * t).exp() + c
}

/// Damped oscillation with quadratic phase drift, modulated by a secondary
/// cosine term:
/// `c + A·exp(−γ·t)·cos(φ + ω·t + a₂·t²)·(1 + B·cos(ω₂·t + φ₂))`.
///
/// `θ = [c, A, gamma, phi, omega, quad, B, omega2, phi2]`.
pub fn damped_modulated(t: f64, theta: &Theta) -> f64 {
    let (c, a, gamma) = (theta[0], theta[1], theta[2]);
    let (phi, omega, quad) = (theta[3], theta[4], theta[5]);
    let (b, omega2, phi2) = (theta[6], theta[7], theta[8]);
    let envelope = a * (-gamma * t).exp();
    let carrier = (phi + omega * t + quad * t * t).cos();
    let modulation = 1.0 + b * (omega2 * t + phi2).cos();
    c + envelope * carrier * modulation
}

/// As [`damped_modulated`], but with a sum of two exponential decay terms
/// with independent rates:
/// `c + (A₁·e^{−γ₁·t} + A₂·e^{−γ₂·t})·cos(φ + ω·t + a₂·t²)·(1 + B·cos(ω₂·t + φ₂))`.
///
/// `θ = [c, A1, gamma1, A2, gamma2, phi, omega, quad, B, omega2, phi2]`.
pub fn double_exponential_modulated(t: f64, theta: &Theta) -> f64 {
    let (c, a1, gamma1, a2, gamma2) = (theta[0], theta[1], theta[2], theta[3], theta[4]);
    let (phi, omega, quad) = (theta[5], theta[6], theta[7]);
    let (b, omega2, phi2) = (theta[8], theta[9], theta[10]);
    let envelope = a1 * (-gamma1 * t).exp() + a2 * (-gamma2 * t).exp();
    let carrier = (phi + omega * t + quad * t * t).cos();
    let modulation = 1.0 + b * (omega2 * t + phi2).cos();
    c + envelope * carrier * modulation
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hand-checked evaluations at simple points.
    // - The zero-amplitude property: zeroing the amplitude term(s) yields a
    //   constant (the configured offset) across all times.
    //
    // They intentionally DO NOT cover:
    // - Fit behavior of the models; that belongs to the fit-engine tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify `simple` at phase points with known cosine values.
    //
    // Given
    // -----
    // - θ = [2, π, 0] evaluated at t = 0 and t = 1.
    //
    // Expect
    // ------
    // - 2·cos(0) = 2 and 2·cos(π) = −2.
    fn simple_matches_hand_checked_values() {
        let theta = array![2.0, std::f64::consts::PI, 0.0];
        assert!((simple(0.0, &theta) - 2.0).abs() < 1e-12);
        assert!((simple(1.0, &theta) + 2.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the damped model decays towards its offset.
    //
    // Given
    // -----
    // - θ = [1, 2π, π/2, 0.5, 0.25] (sin(π/2) = 1 at t = 0).
    //
    // Expect
    // ------
    // - Value 1.25 at t = 0 and within 1e-3 of the offset for large t.
    fn damped_decays_to_offset() {
        let theta = array![1.0, 2.0 * std::f64::consts::PI, std::f64::consts::FRAC_PI_2, 0.5, 0.25];
        assert!((damped(0.0, &theta) - 1.25).abs() < 1e-12);
        assert!((damped(40.0, &theta) - 0.25).abs() < 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-amplitude property for every model: with all
    // amplitude terms zeroed, the prediction is a constant equal to the
    // configured offset (or zero where no offset exists).
    //
    // Given
    // -----
    // - Each model with its amplitude parameter(s) set to 0 and offset 0.75
    //   where an offset exists.
    //
    // Expect
    // ------
    // - The same constant at t = 0, 1.7, and 23.0.
    fn zero_amplitude_yields_constant_output() {
        let times = [0.0, 1.7, 23.0];

        let simple_theta = array![0.0, 4.4, 0.3];
        for &t in &times {
            assert_eq!(simple(t, &simple_theta), 0.0);
        }

        let damped_theta = array![0.0, 4.4, 0.3, 0.1, 0.75];
        for &t in &times {
            assert_eq!(damped(t, &damped_theta), 0.75);
        }

        let modulated_theta = array![0.75, 0.0, 0.1, 0.3, 4.4, 0.0, 0.05, 0.35, 0.0];
        for &t in &times {
            assert_eq!(damped_modulated(t, &modulated_theta), 0.75);
        }

        let double_theta = array![0.75, 0.0, 0.1, 0.0, 0.02, 0.3, 4.4, 0.0, 0.05, 0.35, 0.0];
        for &t in &times {
            assert_eq!(double_exponential_modulated(t, &double_theta), 0.75);
        }
    }
}
