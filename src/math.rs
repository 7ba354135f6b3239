/// Rotates `v` by `angle` radians using the body's rotation matrix
/// `[[cos, sin], [-sin, cos]]`.
///
/// Positive angles turn clockwise. Everything that converts between the
/// body frame and the world frame (forces, offsets, drawing) goes through
/// this function so the convention stays consistent.
pub fn rotate(v: cgmath::Vector2<f32>, angle: f32) -> cgmath::Vector2<f32> {
    let (sin, cos) = angle.sin_cos();
    cgmath::vec2(cos * v.x + sin * v.y, -sin * v.x + cos * v.y)
}

/// The z component of `a × b` with both vectors extended by `z = 0`.
pub fn cross2(a: cgmath::Vector2<f32>, b: cgmath::Vector2<f32>) -> f32 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_zero_angle_is_identity() {
        let v = rotate(cgmath::vec2(3.0, -4.0), 0.0);
        assert_eq!(v, cgmath::vec2(3.0, -4.0));
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise() {
        let x = rotate(cgmath::vec2(1.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(x.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(x.y, -1.0, epsilon = 1e-6);

        let y = rotate(cgmath::vec2(0.0, 1.0), FRAC_PI_2);
        assert_relative_eq!(y.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(y.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_half_turn_negates() {
        let v = rotate(cgmath::vec2(2.0, 1.0), PI);
        assert_relative_eq!(v.x, -2.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_preserves_length() {
        use cgmath::InnerSpace;

        let v = cgmath::vec2(0.3, -1.7);
        let r = rotate(v, 1.234);
        assert_relative_eq!(r.magnitude(), v.magnitude(), epsilon = 1e-6);
    }

    #[test]
    fn cross2_of_axes() {
        assert_eq!(cross2(cgmath::vec2(1.0, 0.0), cgmath::vec2(0.0, 1.0)), 1.0);
        assert_eq!(cross2(cgmath::vec2(0.0, 1.0), cgmath::vec2(1.0, 0.0)), -1.0);
        assert_eq!(cross2(cgmath::vec2(2.0, 3.0), cgmath::vec2(4.0, 6.0)), 0.0);
    }

    #[test]
    fn lever_arm_left_of_center_pushing_up_gives_negative_torque() {
        let torque = cross2(cgmath::vec2(-0.175, 0.0), cgmath::vec2(0.0, 5.0));
        assert_relative_eq!(torque, -0.875, epsilon = 1e-6);
    }
}
