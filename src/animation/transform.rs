//! 2D affine transforms in row-vector convention.
//!
//! Layout matches Direct2D's `Matrix3x2` (`M11..M32`), so a host can copy the
//! six fields across without reordering:
//!
//! ```text
//! [x' y' 1] = [x y 1] * | m11 m12 0 |
//!                       | m21 m22 0 |
//!                       | m31 m32 1 |
//! ```

/// Affine transform: linear part plus translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub m31: f32,
    pub m32: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        m31: 0.0,
        m32: 0.0,
    };

    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            m31: dx,
            m32: dy,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the origin. Positive degrees turn clockwise on a
    /// y-down surface.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            m11: cos,
            m12: sin,
            m21: -sin,
            m22: cos,
            m31: 0.0,
            m32: 0.0,
        }
    }

    /// Transform that applies `self` first, then `next`.
    pub fn then(&self, next: &Affine) -> Affine {
        Affine {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            m31: self.m31 * next.m11 + self.m32 * next.m21 + next.m31,
            m32: self.m31 * next.m12 + self.m32 * next.m22 + next.m32,
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.m11 + y * self.m21 + self.m31,
            x * self.m12 + y * self.m22 + self.m32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn quarter_turn_is_clockwise_on_y_down() {
        let r = Affine::rotation(90.0);
        assert!(approx(r.apply(1.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn then_applies_left_operand_first() {
        let t = Affine::translation(10.0, 0.0).then(&Affine::rotation(90.0));
        // translate (0,0) -> (10,0), then rotate -> (0,10)
        assert!(approx(t.apply(0.0, 0.0), (0.0, 10.0)));
    }

    #[test]
    fn identity_is_neutral() {
        let t = Affine::translation(3.0, 4.0);
        assert_eq!(Affine::IDENTITY.then(&t), t);
        assert_eq!(t.then(&Affine::IDENTITY), t);
    }
}
