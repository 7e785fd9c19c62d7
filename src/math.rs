//! 3D rotation helpers for the orbit view.
//!
//! Matrix operations for rotating path samples into view space and for
//! building incremental rotations from mouse drags.

use nalgebra::{Matrix3, Vector3};

pub fn rotate_point_matrix(x: f64, y: f64, z: f64, rot: &Matrix3<f64>) -> (f64, f64, f64) {
    let v = rot * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}

pub fn rotation_from_drag(dx: f64, dy: f64) -> Matrix3<f64> {
    let rot_y = Matrix3::new(
        dx.cos(), 0.0, dx.sin(),
        0.0, 1.0, 0.0,
        -dx.sin(), 0.0, dx.cos(),
    );
    let rot_x = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, dy.cos(), -dy.sin(),
        0.0, dy.sin(), dy.cos(),
    );
    rot_x * rot_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_drag_is_identity() {
        let rot = rotation_from_drag(0.0, 0.0);
        let (x, y, z) = rotate_point_matrix(1.0, 2.0, 3.0, &rot);
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
        assert!((z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let rot = rotation_from_drag(0.3, -0.7);
        let (x, y, z) = rotate_point_matrix(3.0, -4.0, 12.0, &rot);
        let norm = (x * x + y * y + z * z).sqrt();
        assert!((norm - 13.0).abs() < 1e-9);
    }
}
