//! Pipe selection model and line-state derivation.

use crate::config::SizingConfig;
use crate::duty::DutyPoint;
use crate::friction;
use crate::result::{Computed, Unavailability};
use fl_catalog::{LineType, Pipe};
use fl_core::numeric::{Tolerances, nearly_equal};
use fl_core::units::{
    Density, Length, MassRate, Pressure, Temperature, Velocity, kelvin_interval, pa,
};
use fl_props::{PropertyError, PropertyProvider, Refrigerant, SaturationQuality, StateSpec};
use tracing::debug;

/// Suction pressure margin above saturation. Keeps single-phase lookups
/// off the saturation dome where providers refuse to resolve the phase.
const SUCTION_PRESSURE_MARGIN: f64 = 1.01;

/// Extra superheat pad on the suction density temperature, same purpose.
const SUCTION_TEMPERATURE_PAD_K: f64 = 0.5;

/// Gas state a line is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineState {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
}

/// Computed hydraulics of one pipe at a line state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeHydraulics {
    pub velocity: Velocity,
    pub pressure_drop: Pressure,
}

/// Suction-line gas state: saturation vapor pressure at the evaporating
/// temperature with a small margin, density at the padded superheated
/// temperature.
pub fn suction_state(provider: &dyn PropertyProvider, duty: &DutyPoint) -> Computed<LineState> {
    let lookup = || -> Result<LineState, PropertyError> {
        let p_sat = provider.saturation_pressure(
            duty.refrigerant,
            duty.t_evap,
            SaturationQuality::Vapor,
        )?;
        let pressure = pa(p_sat.value * SUCTION_PRESSURE_MARGIN);
        let temperature =
            duty.suction_temperature() + kelvin_interval(SUCTION_TEMPERATURE_PAD_K);
        let density =
            provider.density(duty.refrigerant, StateSpec::at_tp(temperature, pressure))?;
        Ok(LineState {
            temperature,
            pressure,
            density,
        })
    };
    lookup().into()
}

/// Discharge-line gas state: saturation liquid pressure at the condensing
/// temperature, density at the estimated discharge temperature.
pub fn discharge_state(
    provider: &dyn PropertyProvider,
    duty: &DutyPoint,
    discharge_temperature: Temperature,
) -> Computed<LineState> {
    let lookup = || -> Result<LineState, PropertyError> {
        let pressure = provider.saturation_pressure(
            duty.refrigerant,
            duty.t_cond,
            SaturationQuality::Liquid,
        )?;
        let density = provider.density(
            duty.refrigerant,
            StateSpec::at_tp(discharge_temperature, pressure),
        )?;
        Ok(LineState {
            temperature: discharge_temperature,
            pressure,
            density,
        })
    };
    lookup().into()
}

/// Standard sizes compatible with a nominal connection size: the nominal
/// size itself plus the next smaller standard size.
///
/// Returns `[]` when the nominal size is not in the table, `[nominal]`
/// when it is the smallest entry.
pub fn allowed_connection_sizes(nominal: Length, table: &[Length]) -> Vec<Length> {
    let tol = Tolerances::default();
    let matched = table
        .iter()
        .find(|s| nearly_equal(s.value, nominal.value, tol));
    let Some(&matched) = matched else {
        return Vec::new();
    };
    let next_smaller = table
        .iter()
        .filter(|s| s.value < matched.value && !nearly_equal(s.value, matched.value, tol))
        .max_by(|a, b| a.value.total_cmp(&b.value));
    match next_smaller {
        Some(&smaller) => vec![matched, smaller],
        None => vec![matched],
    }
}

/// Best-fit pipe for a line: among candidates of the line type, the one
/// whose flow velocity is closest to the target. First minimal wins, so
/// ties resolve by catalog order. Candidates with non-physical geometry
/// are skipped.
pub fn best_pipe<'a>(
    candidates: &[&'a Pipe],
    line_type: LineType,
    mass_flow: MassRate,
    density: Density,
    target: Velocity,
) -> Option<(&'a Pipe, Velocity)> {
    let mut best: Option<(&Pipe, Velocity, f64)> = None;
    for &pipe in candidates {
        if pipe.line_type != line_type {
            continue;
        }
        let Ok(velocity) = friction::flow_velocity(mass_flow, pipe.inner_diameter, density) else {
            continue;
        };
        let distance = (velocity.value - target.value).abs();
        if best.is_none_or(|(_, _, d)| distance < d) {
            best = Some((pipe, velocity, distance));
        }
    }
    best.map(|(pipe, velocity, distance)| {
        debug!(
            pipe = %pipe.name,
            line = %line_type,
            velocity_mps = velocity.value,
            target_mps = target.value,
            distance,
            "best-fit pipe"
        );
        (pipe, velocity)
    })
}

/// Velocity and pressure drop for one pipe at a line state.
pub fn evaluate_pipe(
    pipe: &Pipe,
    provider: &dyn PropertyProvider,
    refrigerant: Refrigerant,
    mass_flow: MassRate,
    state: &LineState,
    run_length: Length,
    config: &SizingConfig,
) -> Computed<PipeHydraulics> {
    let velocity = match friction::flow_velocity(mass_flow, pipe.inner_diameter, state.density) {
        Ok(v) => v,
        Err(err) => return Computed::Unavailable(Unavailability::MalformedEntry(err.to_string())),
    };
    let viscosity = match provider.dynamic_viscosity(
        refrigerant,
        StateSpec::at_tp(state.temperature, state.pressure),
    ) {
        Ok(mu) => mu,
        Err(err) => return Computed::Unavailable(err.into()),
    };
    let pressure_drop = match friction::pressure_drop(
        run_length,
        pipe.inner_diameter,
        velocity,
        state.density,
        viscosity,
        config.roughness_for(&pipe.material),
        config,
    ) {
        Ok(dp) => dp,
        Err(err) => return Computed::Unavailable(Unavailability::MalformedEntry(err.to_string())),
    };
    Computed::Ready(PipeHydraulics {
        velocity,
        pressure_drop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::ids::Id;
    use fl_core::units::{celsius, hz, kelvin_interval, kg_per_m3, kgps, kw, m, mm, mps};
    use fl_props::{Refrigerant, TableProvider};

    fn pipe(index: u32, name: &str, inner_mm: f64, outer_mm: f64, line: LineType) -> Pipe {
        Pipe {
            id: Id::from_index(index),
            name: name.into(),
            inner_diameter: mm(inner_mm),
            outer_diameter: mm(outer_mm),
            material: "copper".into(),
            line_type: line,
        }
    }

    fn sample_duty() -> DutyPoint {
        DutyPoint {
            capacity: kw(5.0),
            t_evap: celsius(0.0),
            t_cond: celsius(40.0),
            subcooling: kelvin_interval(2.0),
            superheat: kelvin_interval(5.0),
            refrigerant: Refrigerant::R134a,
            frequency: hz(50.0),
            run_length: m(10.0),
        }
    }

    #[test]
    fn suction_state_applies_margins() {
        let provider = TableProvider::r134a_fixture();
        let duty = sample_duty();
        let state = match suction_state(&provider, &duty) {
            Computed::Ready(s) => s,
            Computed::Unavailable(reason) => panic!("unexpected: {reason}"),
        };
        assert!((state.pressure.value - 293_000.0 * 1.01).abs() < 1e-6);
        assert!((state.temperature.value - (273.15 + 5.5)).abs() < 1e-9);
        assert!((state.density.value - 14.4).abs() < 1e-12);
    }

    #[test]
    fn discharge_state_uses_estimated_temperature() {
        let provider = TableProvider::r134a_fixture();
        let duty = sample_duty();
        let t_dis = celsius(65.0);
        let state = match discharge_state(&provider, &duty, t_dis) {
            Computed::Ready(s) => s,
            Computed::Unavailable(reason) => panic!("unexpected: {reason}"),
        };
        assert!((state.pressure.value - 1_017_000.0).abs() < 1e-6);
        assert_eq!(state.temperature, t_dis);
    }

    #[test]
    fn allowed_sizes_three_cases() {
        let table: Vec<Length> = [12.0, 16.0, 18.0, 22.0].iter().map(|&d| mm(d)).collect();

        // Smallest entry: just itself
        let sizes = allowed_connection_sizes(mm(12.0), &table);
        assert_eq!(sizes.len(), 1);
        assert!((sizes[0].value - mm(12.0).value).abs() < 1e-15);

        // Absent: empty
        assert!(allowed_connection_sizes(mm(20.0), &table).is_empty());

        // Present with a smaller neighbor: itself plus next smaller
        let sizes = allowed_connection_sizes(mm(18.0), &table);
        assert_eq!(sizes.len(), 2);
        assert!((sizes[0].value - mm(18.0).value).abs() < 1e-15);
        assert!((sizes[1].value - mm(16.0).value).abs() < 1e-15);
    }

    #[test]
    fn best_pipe_minimizes_velocity_distance() {
        let pipes = [
            pipe(0, "Cu 16x1", 14.0, 16.0, LineType::Suction),
            pipe(1, "Cu 22x1", 20.0, 22.0, LineType::Suction),
            pipe(2, "Cu 28x1", 26.0, 28.0, LineType::Suction),
            pipe(3, "Cu 16x1 D", 14.0, 16.0, LineType::Discharge),
        ];
        let refs: Vec<&Pipe> = pipes.iter().collect();

        // 0.12 kg/s, rho 14.4: v(14mm) ≈ 54.1, v(20mm) ≈ 26.5, v(26mm) ≈ 15.7
        let (chosen, velocity) = best_pipe(
            &refs,
            LineType::Suction,
            kgps(0.12),
            kg_per_m3(14.4),
            mps(20.0),
        )
        .unwrap();
        assert_eq!(chosen.name, "Cu 28x1");
        assert!(velocity.value < 20.0);

        // Discharge filter only sees the one discharge pipe
        let (chosen, _) = best_pipe(
            &refs,
            LineType::Discharge,
            kgps(0.12),
            kg_per_m3(14.4),
            mps(15.0),
        )
        .unwrap();
        assert_eq!(chosen.name, "Cu 16x1 D");

        // No candidates of the line type
        assert!(
            best_pipe(&refs, LineType::Oil, kgps(0.12), kg_per_m3(14.4), mps(15.0)).is_none()
        );
    }

    #[test]
    fn best_pipe_is_idempotent() {
        let pipes = [
            pipe(0, "Cu 22x1", 20.0, 22.0, LineType::Suction),
            pipe(1, "Cu 28x1", 26.0, 28.0, LineType::Suction),
        ];
        let refs: Vec<&Pipe> = pipes.iter().collect();
        let first = best_pipe(&refs, LineType::Suction, kgps(0.12), kg_per_m3(14.4), mps(20.0))
            .map(|(p, _)| p.id);
        let second = best_pipe(&refs, LineType::Suction, kgps(0.12), kg_per_m3(14.4), mps(20.0))
            .map(|(p, _)| p.id);
        assert_eq!(first, second);
    }

    #[test]
    fn evaluate_pipe_produces_hydraulics() {
        let provider = TableProvider::r134a_fixture();
        let duty = sample_duty();
        let state = match suction_state(&provider, &duty) {
            Computed::Ready(s) => s,
            Computed::Unavailable(reason) => panic!("unexpected: {reason}"),
        };
        let config = SizingConfig::default();
        let p = pipe(0, "Cu 22x1", 20.0, 22.0, LineType::Suction);
        let hydraulics = match evaluate_pipe(
            &p,
            &provider,
            duty.refrigerant,
            kgps(0.12),
            &state,
            duty.run_length,
            &config,
        ) {
            Computed::Ready(h) => h,
            Computed::Unavailable(reason) => panic!("unexpected: {reason}"),
        };
        assert!(hydraulics.velocity.value > 0.0);
        assert!(hydraulics.pressure_drop.value > 0.0);
    }

    #[test]
    fn malformed_pipe_fails_its_own_entry() {
        let provider = TableProvider::r134a_fixture();
        let duty = sample_duty();
        let state = LineState {
            temperature: celsius(5.5),
            pressure: fl_core::units::pa(295_930.0),
            density: kg_per_m3(14.4),
        };
        let config = SizingConfig::default();
        let bad = pipe(0, "bad", 0.0, 22.0, LineType::Suction);
        assert!(matches!(
            evaluate_pipe(
                &bad,
                &provider,
                duty.refrigerant,
                kgps(0.12),
                &state,
                duty.run_length,
                &config,
            ),
            Computed::Unavailable(Unavailability::MalformedEntry(_))
        ));
    }
}
