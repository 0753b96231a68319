//! Intersection of a convex polygon with a disk.
//!
//! This is the expensive step the honeycomb fill tries to avoid: only cells
//! straddling the circle boundary are routed through here.

use std::f64::consts::TAU;

use crate::error::HexcombError;
use crate::error::Result;

const EPS: f64 = 1e-9;

#[derive(Clone, Copy, PartialEq)]
enum BoundaryKind {
    Vertex,
    Entry,
    Exit,
}

/// Clips a convex, counter-clockwise polygon (flat `[x, y, ...]` array)
/// against the disk of the given center and radius, returning the boolean
/// intersection as a new flat vertex array.
///
/// Stretches of the result that follow the circle are approximated by arc
/// samples; `arc_resolution` is the number of segments used for a full turn,
/// partial arcs use a proportional share. An empty vector means the polygon
/// and the disk do not overlap.
pub fn clip_polygon_to_disk(
    vertices: &[f64],
    center: [f64; 2],
    radius: f64,
    arc_resolution: usize,
) -> Result<Vec<f64>> {
    if radius <= 0.0 || !radius.is_finite() {
        return Err(HexcombError::DegenerateGeometry(format!(
            "disk radius must be positive and finite, got {radius}"
        )));
    }
    if vertices.len() < 6 || vertices.len() % 2 != 0 {
        return Err(HexcombError::DegenerateGeometry(format!(
            "polygon needs at least 3 vertices, got {} coordinates",
            vertices.len()
        )));
    }
    if vertices.iter().any(|v| !v.is_finite()) || center.iter().any(|v| !v.is_finite()) {
        return Err(HexcombError::DegenerateGeometry(
            "polygon or disk has non-finite coordinates".to_string(),
        ));
    }
    if arc_resolution < 3 {
        return Err(HexcombError::InvalidParameter {
            name: "arc_resolution",
            value: arc_resolution as f64,
            reason: "must be at least 3 segments per turn",
        });
    }

    let n = vertices.len() / 2;
    let radius_sq = radius * radius;

    let mut all_inside = true;
    for i in 0..n {
        let dx = vertices[i * 2] - center[0];
        let dy = vertices[i * 2 + 1] - center[1];
        if dx * dx + dy * dy > radius_sq + EPS {
            all_inside = false;
            break;
        }
    }
    if all_inside {
        return Ok(vertices.to_vec());
    }

    // Walk the polygon boundary and record, in order, the vertices that lie
    // inside the disk plus every transversal crossing of the circle.
    let mut items: Vec<([f64; 2], BoundaryKind)> = Vec::new();
    for i in 0..n {
        let j = (i + 1) % n;
        let a = [vertices[i * 2], vertices[i * 2 + 1]];
        let b = [vertices[j * 2], vertices[j * 2 + 1]];

        let da = [a[0] - center[0], a[1] - center[1]];
        if da[0] * da[0] + da[1] * da[1] <= radius_sq + EPS {
            items.push((a, BoundaryKind::Vertex));
        }

        let d = [b[0] - a[0], b[1] - a[1]];
        let qa = d[0] * d[0] + d[1] * d[1];
        if qa < EPS {
            continue;
        }
        let qb = 2.0 * (da[0] * d[0] + da[1] * d[1]);
        let qc = da[0] * da[0] + da[1] * da[1] - radius_sq;
        let disc = qb * qb - 4.0 * qa * qc;
        if disc <= EPS {
            // No crossing, or a tangent touch that cannot bound any area.
            continue;
        }
        let sqrt_disc = disc.sqrt();
        // The smaller root always enters the disk, the larger one leaves it.
        let roots = [
            ((-qb - sqrt_disc) / (2.0 * qa), BoundaryKind::Entry),
            ((-qb + sqrt_disc) / (2.0 * qa), BoundaryKind::Exit),
        ];
        for (t, kind) in roots {
            if t > EPS && t < 1.0 - EPS {
                items.push(([a[0] + t * d[0], a[1] + t * d[1]], kind));
            }
        }
    }

    let has_crossing = items
        .iter()
        .any(|(_, kind)| *kind != BoundaryKind::Vertex);
    if !has_crossing {
        if items.is_empty() {
            // Entirely outside the disk boundary: either disjoint, or the
            // disk sits fully inside the polygon.
            if contains_point(vertices, center) {
                return Ok(sample_circle(center, radius, arc_resolution));
            }
            return Ok(Vec::new());
        }
        return Ok(items.iter().flat_map(|(p, _)| [p[0], p[1]]).collect());
    }

    // Stitch polygon chains together with arcs: after each exit crossing the
    // boundary follows the circle counter-clockwise to the next item, which
    // is the matching entry crossing.
    let mut out = Vec::with_capacity(items.len() * 2 + arc_resolution);
    for k in 0..items.len() {
        let (p, kind) = items[k];
        out.push(p[0]);
        out.push(p[1]);
        if kind == BoundaryKind::Exit {
            let (q, _) = items[(k + 1) % items.len()];
            push_arc(&mut out, center, radius, p, q, arc_resolution);
        }
    }

    if out.len() < 6 {
        return Ok(Vec::new());
    }
    Ok(out)
}

/// Appends the interior samples of the counter-clockwise arc from `from` to
/// `to`; both endpoints are assumed to be emitted by the caller.
fn push_arc(
    out: &mut Vec<f64>,
    center: [f64; 2],
    radius: f64,
    from: [f64; 2],
    to: [f64; 2],
    arc_resolution: usize,
) {
    let a0 = (from[1] - center[1]).atan2(from[0] - center[0]);
    let a1 = (to[1] - center[1]).atan2(to[0] - center[0]);
    let delta = (a1 - a0).rem_euclid(TAU);
    if delta < 1e-12 {
        return;
    }
    let steps = ((delta / TAU) * arc_resolution as f64).ceil().max(1.0) as usize;
    for s in 1..steps {
        let angle = a0 + delta * s as f64 / steps as f64;
        out.push(center[0] + radius * angle.cos());
        out.push(center[1] + radius * angle.sin());
    }
}

fn sample_circle(center: [f64; 2], radius: f64, arc_resolution: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(arc_resolution * 2);
    for k in 0..arc_resolution {
        let angle = TAU * k as f64 / arc_resolution as f64;
        out.push(center[0] + radius * angle.cos());
        out.push(center[1] + radius * angle.sin());
    }
    out
}

/// Point-in-polygon test for convex, counter-clockwise polygons.
fn contains_point(vertices: &[f64], p: [f64; 2]) -> bool {
    let n = vertices.len() / 2;
    for i in 0..n {
        let j = (i + 1) % n;
        let xi = vertices[i * 2];
        let yi = vertices[i * 2 + 1];
        let xj = vertices[j * 2];
        let yj = vertices[j * 2 + 1];
        if (xj - xi) * (p[1] - yi) - (yj - yi) * (p[0] - xi) < -EPS {
            return false;
        }
    }
    true
}
