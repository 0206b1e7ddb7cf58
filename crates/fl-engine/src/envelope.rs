//! Working-envelope containment.
//!
//! Containment is evaluated in absolute-temperature space: vertices and the
//! query point are held as uom temperatures (SI, kelvin) and the kernel
//! works on their raw values. The polygon boundary counts as inside, so a
//! duty point sitting exactly on a certified limit is accepted.

use crate::result::{Computed, Unavailability};
use fl_catalog::{Compressor, Envelope, EnvelopePoint};
use fl_core::units::Temperature;
use tracing::warn;

/// Whether a duty point lies inside the compressor's certified envelope.
///
/// A degenerate outline (fewer than 3 vertices, non-finite coordinates,
/// self-intersection) fails this single envelope with a malformed-entry
/// reason; the caller keeps evaluating the rest of the catalog.
pub fn contains(envelope: &Envelope, t_evap: Temperature, t_cond: Temperature) -> Computed<bool> {
    match checked_polygon(&envelope.vertices) {
        Ok(polygon) => Computed::Ready(polygon_contains(&polygon, (t_evap.value, t_cond.value))),
        Err(reason) => Computed::Unavailable(Unavailability::MalformedEntry(reason.to_string())),
    }
}

/// Advisory messages of every constraint sub-region containing the duty
/// point. Sub-regions are evaluated independently; a malformed one is
/// skipped with a warning rather than failing the compressor.
pub fn advisories(compressor: &Compressor, t_evap: Temperature, t_cond: Temperature) -> Vec<String> {
    let point = (t_evap.value, t_cond.value);
    let mut messages = Vec::new();
    for region in &compressor.constraints {
        match checked_polygon(&region.vertices) {
            Ok(polygon) => {
                if polygon_contains(&polygon, point) {
                    messages.push(region.message.clone());
                }
            }
            Err(reason) => {
                warn!(
                    compressor = %compressor.name,
                    message = %region.message,
                    reason,
                    "skipping malformed constraint region"
                );
            }
        }
    }
    messages
}

fn checked_polygon(vertices: &[EnvelopePoint]) -> Result<Vec<(f64, f64)>, &'static str> {
    if vertices.len() < 3 {
        return Err("polygon needs at least 3 vertices");
    }
    let polygon: Vec<(f64, f64)> = vertices
        .iter()
        .map(|v| (v.t_evap.value, v.t_cond.value))
        .collect();
    if polygon
        .iter()
        .any(|&(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err("polygon has non-finite vertices");
    }
    if self_intersects(&polygon) {
        return Err("polygon outline is self-intersecting");
    }
    Ok(polygon)
}

/// Ray-casting even-odd test with an explicit on-boundary check.
fn polygon_contains(polygon: &[(f64, f64)], point: (f64, f64)) -> bool {
    let n = polygon.len();
    let (px, py) = point;

    for i in 0..n {
        if on_segment(polygon[i], polygon[(i + 1) % n], point) {
            return true;
        }
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

const GEOM_EPS: f64 = 1e-9;

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    if cross.abs() > GEOM_EPS * ((b.0 - a.0).abs() + (b.1 - a.1).abs()).max(1.0) {
        return false;
    }
    let dot = (p.0 - a.0) * (b.0 - a.0) + (p.1 - a.1) * (b.1 - a.1);
    let len_sq = (b.0 - a.0).powi(2) + (b.1 - a.1).powi(2);
    dot >= -GEOM_EPS && dot <= len_sq + GEOM_EPS
}

fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

/// Proper crossing between two closed segments, shared endpoints excluded.
fn segments_cross(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    (o1 * o2 < 0.0) && (o3 * o4 < 0.0)
}

fn self_intersects(polygon: &[(f64, f64)]) -> bool {
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        for j in (i + 1)..n {
            // Adjacent edges share a vertex and cannot properly cross
            if j == i || (j + 1) % n == i || (i + 1) % n == j {
                continue;
            }
            let c = polygon[j];
            let d = polygon[(j + 1) % n];
            if segments_cross(a, b, c, d) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::units::celsius;

    fn envelope_from(corners: &[(f64, f64)]) -> Envelope {
        Envelope {
            vertices: corners
                .iter()
                .map(|&(te, tc)| EnvelopePoint {
                    t_evap: celsius(te),
                    t_cond: celsius(tc),
                })
                .collect(),
        }
    }

    fn rectangle() -> Envelope {
        envelope_from(&[(-20.0, 30.0), (10.0, 30.0), (10.0, 60.0), (-20.0, 60.0)])
    }

    #[test]
    fn interior_point_is_inside() {
        let result = contains(&rectangle(), celsius(0.0), celsius(40.0));
        assert_eq!(result, Computed::Ready(true));
    }

    #[test]
    fn exterior_point_is_outside() {
        let env = rectangle();
        assert_eq!(contains(&env, celsius(20.0), celsius(40.0)), Computed::Ready(false));
        assert_eq!(contains(&env, celsius(0.0), celsius(70.0)), Computed::Ready(false));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let env = rectangle();
        // Edge
        assert_eq!(contains(&env, celsius(10.0), celsius(45.0)), Computed::Ready(true));
        // Corner
        assert_eq!(contains(&env, celsius(-20.0), celsius(30.0)), Computed::Ready(true));
    }

    #[test]
    fn degenerate_envelope_is_malformed() {
        let env = envelope_from(&[(-20.0, 30.0), (10.0, 30.0)]);
        assert!(matches!(
            contains(&env, celsius(0.0), celsius(40.0)),
            Computed::Unavailable(Unavailability::MalformedEntry(_))
        ));
    }

    #[test]
    fn self_intersecting_envelope_is_malformed() {
        // Bowtie
        let env = envelope_from(&[(-20.0, 30.0), (10.0, 60.0), (10.0, 30.0), (-20.0, 60.0)]);
        assert!(matches!(
            contains(&env, celsius(0.0), celsius(40.0)),
            Computed::Unavailable(Unavailability::MalformedEntry(_))
        ));
    }

    #[test]
    fn non_finite_vertex_is_malformed() {
        let mut env = rectangle();
        env.vertices[1].t_cond = celsius(f64::NAN);
        assert!(matches!(
            contains(&env, celsius(0.0), celsius(40.0)),
            Computed::Unavailable(Unavailability::MalformedEntry(_))
        ));
    }

    #[test]
    fn concave_polygon_containment() {
        // L-shape: notch in the upper right
        let env = envelope_from(&[
            (-20.0, 30.0),
            (10.0, 30.0),
            (10.0, 45.0),
            (0.0, 45.0),
            (0.0, 60.0),
            (-20.0, 60.0),
        ]);
        assert_eq!(contains(&env, celsius(-10.0), celsius(55.0)), Computed::Ready(true));
        // Point in the notch
        assert_eq!(contains(&env, celsius(5.0), celsius(55.0)), Computed::Ready(false));
    }

    #[test]
    fn advisories_collect_all_matching_regions() {
        use fl_catalog::ConstraintRegion;
        use fl_core::ids::Id;
        use fl_core::units::{bar, m3_per_hour, mm};
        use fl_props::Refrigerant;

        let low_evap = ConstraintRegion {
            vertices: envelope_from(&[(-20.0, 30.0), (-10.0, 30.0), (-10.0, 60.0), (-20.0, 60.0)])
                .vertices,
            message: "additional oil cooling required".to_string(),
        };
        let high_cond = ConstraintRegion {
            vertices: envelope_from(&[(-20.0, 50.0), (10.0, 50.0), (10.0, 60.0), (-20.0, 60.0)])
                .vertices,
            message: "reduced superheat recommended".to_string(),
        };
        let malformed = ConstraintRegion {
            vertices: envelope_from(&[(-20.0, 30.0), (10.0, 30.0)]).vertices,
            message: "never returned".to_string(),
        };
        let compressor = Compressor {
            id: Id::from_index(0),
            name: "CMP-30".into(),
            displacement_50hz: m3_per_hour(30.0),
            displacement_60hz: m3_per_hour(36.0),
            max_low_side_pressure: bar(19.0),
            max_high_side_pressure: bar(28.0),
            suction_conn: mm(22.0),
            discharge_conn: mm(16.0),
            oil_conn: mm(12.0),
            refrigerants: vec![Refrigerant::R134a],
            envelope: rectangle(),
            constraints: vec![low_evap, high_cond, malformed],
        };

        // Hits both regions
        let messages = advisories(&compressor, celsius(-15.0), celsius(55.0));
        assert_eq!(messages.len(), 2);

        // Hits only the condensing-side region
        let messages = advisories(&compressor, celsius(0.0), celsius(55.0));
        assert_eq!(messages, vec!["reduced superheat recommended".to_string()]);

        // Hits nothing
        assert!(advisories(&compressor, celsius(0.0), celsius(40.0)).is_empty());
    }
}
