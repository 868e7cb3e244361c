// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plane projection of near-planar 3D faces into a 2D working frame.

use nalgebra::{Point2, Point3, Rotation3, Unit, Vector3};

use crate::error::{Error, Result};
use crate::tolerance::{clamp_unit, near_zero};

/// World axis a face normal is rotated onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of the axis.
    pub fn direction(self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// 2D image of a rotated point once the axis coordinate is dropped.
    fn flatten(self, p: &Point3<f64>) -> Point2<f64> {
        match self {
            Axis::Z => Point2::new(p.x, p.y),
            Axis::X => Point2::new(p.y, p.z),
            Axis::Y => Point2::new(p.z, p.x),
        }
    }
}

/// Rotation frame taking a face plane onto a world-axis plane.
///
/// Built once per face and usually discarded after projection; callers that
/// need the face normal can keep it.
#[derive(Debug, Clone)]
pub struct PlaneFrame {
    /// Unit normal of the face plane, oriented by the winding of the first
    /// three points.
    pub normal: Unit<Vector3<f64>>,
    /// World axis the normal is rotated onto.
    pub reference: Axis,
    /// The rotation mapping `normal` onto `reference`.
    pub rotation: Rotation3<f64>,
}

/// Project a near-planar 3D polygon into a 2D working frame.
///
/// The first three points define the plane orientation and must not be
/// collinear. Returns the projected polygon, in input order, along with the
/// frame that produced it. There is no inverse mapping; downstream code
/// carries original vertex indices instead.
pub fn project_points(
    points: &[Point3<f64>],
    eps: f64,
) -> Result<(Vec<Point2<f64>>, PlaneFrame)> {
    if points.len() < 3 {
        return Err(Error::TooFewVertices(points.len()));
    }

    let edge1 = points[1] - points[0];
    let edge2 = points[2] - points[1];
    let normal = edge1.cross(&edge2);
    if near_zero(normal.norm_squared(), eps) {
        return Err(Error::DegenerateNormal);
    }
    let normal = Unit::new_normalize(normal);

    // Rotate onto Z when possible, falling back to X and then Y when the
    // normal is already parallel to the candidate axis.
    let reference = if !near_zero(normal.cross(&Vector3::z()).norm_squared(), eps) {
        Axis::Z
    } else if !near_zero(normal.cross(&Vector3::x()).norm_squared(), eps) {
        Axis::X
    } else {
        Axis::Y
    };

    let target = reference.direction();
    let rotation_axis = normal.cross(&target);
    let angle = clamp_unit(normal.dot(&target)).acos();
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(rotation_axis), angle);

    let polygon = points
        .iter()
        .map(|&p| reference.flatten(&(rotation * p)))
        .collect();

    Ok((
        polygon,
        PlaneFrame {
            normal,
            reference,
            rotation,
        },
    ))
}
