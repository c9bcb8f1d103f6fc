use glam::{I64Vec2, IVec2};

pub trait VecExt: Sized + Default {
    /// Absolute size of vector in taxicab metric.
    fn taxi_len(&self) -> i32;

    /// Euclidean length of the vector rounded down to a whole number of
    /// cells.
    fn floor_len(&self) -> i32;
}

impl VecExt for IVec2 {
    fn taxi_len(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    fn floor_len(&self) -> i32 {
        (self.x as f64).hypot(self.y as f64).floor() as i32
    }
}

impl VecExt for I64Vec2 {
    fn taxi_len(&self) -> i32 {
        self.x
            .abs()
            .saturating_add(self.y.abs())
            .min(i32::MAX as i64) as i32
    }

    /// Saturates at `i32::MAX`.
    fn floor_len(&self) -> i32 {
        (self.x as f64).hypot(self.y as f64).floor() as i32
    }
}

/// Integer division that rounds to the nearest integer, with halfway cases
/// rounded away from zero.
///
/// ```
/// assert_eq!(util::div_round(1, 2), 1);
/// assert_eq!(util::div_round(-1, 2), -1);
/// assert_eq!(util::div_round(1, 3), 0);
/// assert_eq!(util::div_round(5, 3), 2);
/// ```
pub fn div_round(num: i64, den: i64) -> i64 {
    mul_div_round(num, 1, den)
}

/// Compute `a * b / den` rounded like `div_round`, without overflowing in
/// the intermediate product.
///
/// The result saturates if it doesn't fit in `i64`.
pub fn mul_div_round(a: i64, b: i64, den: i64) -> i64 {
    assert!(den != 0, "mul_div_round: zero denominator");
    let (n, d) = if den < 0 {
        (-(a as i128 * b as i128), -(den as i128))
    } else {
        (a as i128 * b as i128, den as i128)
    };

    let (q, r) = (n / d, n % d);
    let q = if 2 * r.abs() >= d { q + n.signum() } else { q };
    q.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

#[cfg(test)]
mod test {
    use glam::ivec2;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(ivec2(3, 4).floor_len(), 5);
        assert_eq!(ivec2(1, 1).floor_len(), 1);
        assert_eq!(ivec2(-2, 2).floor_len(), 2);
        assert_eq!(ivec2(0, 0).floor_len(), 0);
        assert_eq!(ivec2(-3, 4).taxi_len(), 7);
    }

    #[quickcheck]
    fn div_round_matches_float(num: i16, den: i16) -> bool {
        if den == 0 {
            return true;
        }
        let expected = (num as f64 / den as f64).round() as i32;
        div_round(num as i64, den as i64) == expected as i64
    }

    #[test]
    fn wide_products() {
        assert_eq!(
            mul_div_round(3_000_000_000, 3_000_000_001, 3_000_000_001),
            3_000_000_000
        );
        assert_eq!(mul_div_round(i64::MAX, -2, 4), i64::MIN / 2);
        assert_eq!(mul_div_round(i64::MAX, i64::MAX, 1), i64::MAX);
        assert_eq!(mul_div_round(1, 1, -2), -1);
    }

    #[test]
    fn wide_lengths() {
        let d = ivec2(i32::MAX, 0).as_i64vec2() - ivec2(i32::MIN, 0).as_i64vec2();
        assert_eq!(d.floor_len(), i32::MAX);
        assert_eq!(d.taxi_len(), i32::MAX);
        assert_eq!(I64Vec2::new(-3, 4).floor_len(), 5);
    }
}
