//! Friction and pressure-drop model.
//!
//! Darcy-Weisbach pressure drop with two friction-factor estimators:
//! Swamee-Jain (closed form, authoritative for the returned value) and
//! Colebrook-White (implicit, solved by bounded bisection, emitted as a
//! diagnostic). Laminar flow uses f = 64/Re for both.

use crate::config::SizingConfig;
use crate::error::{EngineError, EngineResult};
use fl_core::units::{Density, DynVisc, Length, MassRate, Pressure, Velocity, mps, pa};
use std::f64::consts::PI;
use tracing::{debug, warn};

const LAMINAR_RE_LIMIT: f64 = 2300.0;

/// Mean flow velocity in a circular pipe, `ṁ / (ρ · πD²/4)`.
pub fn flow_velocity(
    mass_flow: MassRate,
    inner_diameter: Length,
    density: Density,
) -> EngineResult<Velocity> {
    if inner_diameter.value <= 0.0 || !inner_diameter.value.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "pipe inner diameter must be positive",
        });
    }
    if density.value <= 0.0 || !density.value.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "density must be positive",
        });
    }
    let area = PI * inner_diameter.value.powi(2) / 4.0;
    let v = mass_flow.value / (density.value * area);
    if !v.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "flow velocity is non-finite",
        });
    }
    Ok(mps(v))
}

/// Reynolds number `ρvD/μ`.
pub fn reynolds(
    density: Density,
    velocity: Velocity,
    inner_diameter: Length,
    viscosity: DynVisc,
) -> EngineResult<f64> {
    if viscosity.value <= 0.0 || !viscosity.value.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "viscosity must be positive",
        });
    }
    let re = density.value * velocity.value.abs() * inner_diameter.value / viscosity.value;
    if !re.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "Reynolds number is non-finite",
        });
    }
    Ok(re)
}

/// Swamee-Jain explicit approximation of the turbulent friction factor.
/// `relative_roughness` is ε/D.
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    if reynolds < LAMINAR_RE_LIMIT {
        return 64.0 / reynolds;
    }
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Colebrook-White friction factor by bisection on
/// `g(f) = 1/√f + 2·log10(ε/(3.72·D) + 2.51/(Re·√f))`.
///
/// `g` is strictly decreasing in `f`, so the root is bracketed and the
/// interval halves until the residual is within tolerance or the iteration
/// cap trips.
pub fn colebrook_white(
    reynolds: f64,
    relative_roughness: f64,
    max_iter: usize,
    tol: f64,
) -> EngineResult<f64> {
    if reynolds < LAMINAR_RE_LIMIT {
        return Ok(64.0 / reynolds);
    }

    let residual = |f: f64| {
        let sqrt_f = f.sqrt();
        1.0 / sqrt_f + 2.0 * (relative_roughness / 3.72 + 2.51 / (reynolds * sqrt_f)).log10()
    };

    let mut lo = 1e-4;
    let mut hi = 1.0;
    if residual(lo) < 0.0 || residual(hi) > 0.0 {
        // Root outside the physical friction-factor range
        return Err(EngineError::ConvergenceFailed {
            iterations: 0,
            reynolds,
        });
    }

    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let r = residual(mid);
        if r.abs() < tol {
            return Ok(mid);
        }
        if r > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // Accept the bracket midpoint if it is already tight
    let mid = 0.5 * (lo + hi);
    if (hi - lo) < 1e-10 {
        return Ok(mid);
    }
    Err(EngineError::ConvergenceFailed {
        iterations: max_iter,
        reynolds,
    })
}

/// Darcy-Weisbach frictional pressure drop `Δp = f · (L/D) · ρv²/2` [Pa].
///
/// The Swamee-Jain factor is used for the returned value; the
/// Colebrook-White solve runs alongside as a cross-check and is logged.
pub fn pressure_drop(
    length: Length,
    inner_diameter: Length,
    velocity: Velocity,
    density: Density,
    viscosity: DynVisc,
    roughness: Length,
    config: &SizingConfig,
) -> EngineResult<Pressure> {
    if length.value <= 0.0 || !length.value.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "pipe length must be positive",
        });
    }
    let re = reynolds(density, velocity, inner_diameter, viscosity)?;
    if re <= 0.0 {
        return Ok(pa(0.0));
    }
    let relative_roughness = roughness.value / inner_diameter.value;

    let f_sj = swamee_jain(re, relative_roughness);
    match colebrook_white(re, relative_roughness, config.friction_max_iter, config.friction_tol) {
        Ok(f_cw) => debug!(
            reynolds = re,
            swamee_jain = f_sj,
            colebrook_white = f_cw,
            "friction factor cross-check"
        ),
        Err(err) => warn!(reynolds = re, %err, "Colebrook-White cross-check failed"),
    }

    let dp = f_sj * (length.value / inner_diameter.value) * density.value
        * velocity.value.powi(2)
        / 2.0;
    if !dp.is_finite() {
        return Err(EngineError::NonPhysical {
            what: "pressure drop is non-finite",
        });
    }
    debug!(
        reynolds = re,
        friction_factor = f_sj,
        dp_pa = dp,
        "Darcy-Weisbach pressure drop"
    );
    Ok(pa(dp))
}
