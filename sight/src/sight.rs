use glam::{I64Vec2, IVec2};
use util::{mul_div_round, VecExt};

use crate::{Facing, TerrainRegionLookup};

/// Cone slope used when the caller doesn't specify one, a 45 degree half
/// angle.
pub const DEFAULT_SLOPE: f64 = 1.0;

/// Offset from `a` to `b`, wide enough for any pair of cells.
fn delta(a: IVec2, b: IVec2) -> I64Vec2 {
    b.as_i64vec2() - a.as_i64vec2()
}

/// Map distance between two cells, Euclidean distance rounded down.
pub fn distance(a: IVec2, b: IVec2) -> i32 {
    delta(a, b).floor_len()
}

pub fn in_range(a: IVec2, b: IVec2, range: i32) -> bool {
    distance(a, b) <= range
}

/// Return whether `target` is inside the view cone of a viewer at `origin`
/// facing the direction with engine code `facing`.
///
/// The target must be strictly in front of the viewer and the sideways
/// offset must not exceed `slope` times the forward offset. Unknown facing
/// codes see nothing.
pub fn in_cone(origin: IVec2, facing: i32, target: IVec2, slope: f64) -> bool {
    let Some(facing) = Facing::from_code(facing) else {
        return false;
    };

    let d = delta(origin, target);
    let dir = facing.to_vec().as_i64vec2();
    let forward = d.dot(dir);
    let side = d.dot(dir.perp());

    forward > 0 && (side.abs() as f64) <= slope * forward as f64
}

/// Cells sampled along the straight line from `a` to `b`, both ends
/// included.
///
/// The line is split into `max(|dx|, |dy|)` equal steps and every sample is
/// rounded to the nearest cell, halfway points away from zero.
pub fn sight_line(a: IVec2, b: IVec2) -> impl Iterator<Item = IVec2> {
    let d = delta(a, b);
    let steps = d.x.abs().max(d.y.abs());
    let a64 = a.as_i64vec2();

    (0..=steps).map(move |i| {
        if steps == 0 {
            a
        } else {
            let step = I64Vec2::new(
                mul_div_round(i, d.x, steps),
                mul_div_round(i, d.y, steps),
            );
            (a64 + step).as_ivec2()
        }
    })
}

/// Return whether every cell on the line from `a` to `b` is in the same
/// region as `a`.
pub fn has_line_of_sight(
    regions: &(impl TerrainRegionLookup + ?Sized),
    a: IVec2,
    b: IVec2,
) -> bool {
    let home = regions.region_id(a);
    sight_line(a, b).all(|p| regions.region_id(p) == home)
}

/// Full sight check: range, view cone and line of sight must all pass.
pub fn in_sight(
    regions: &(impl TerrainRegionLookup + ?Sized),
    origin: IVec2,
    facing: i32,
    target: IVec2,
    range: i32,
    slope: f64,
) -> bool {
    in_range(origin, target, range)
        && in_cone(origin, facing, target, slope)
        && has_line_of_sight(regions, origin, target)
}

#[cfg(test)]
mod test {
    use glam::ivec2;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::RegionMap;

    fn uniform(_: IVec2) -> i32 {
        0
    }

    #[test]
    fn distances() {
        assert_eq!(distance(ivec2(0, 0), ivec2(3, 4)), 5);
        assert_eq!(distance(ivec2(0, 0), ivec2(1, 1)), 1);
        assert_eq!(distance(ivec2(2, 7), ivec2(2, 7)), 0);
        assert_eq!(distance(ivec2(0, 0), ivec2(2, 2)), 2);
        assert_eq!(distance(ivec2(10, 3), ivec2(4, 3)), 6);
    }

    #[quickcheck]
    fn distance_is_symmetric(a: (i16, i16), b: (i16, i16)) -> bool {
        let (a, b) = (ivec2(a.0 as i32, a.1 as i32), ivec2(b.0 as i32, b.1 as i32));
        distance(a, b) == distance(b, a) && (distance(a, b) == 0) == (a == b)
    }

    #[quickcheck]
    fn range_matches_distance(a: (i8, i8), b: (i8, i8)) -> bool {
        let (a, b) = (ivec2(a.0 as i32, a.1 as i32), ivec2(b.0 as i32, b.1 as i32));
        let d = distance(a, b);
        [0, d - 1, d, d + 1]
            .into_iter()
            .all(|range| in_range(a, b, range) == (d <= range))
    }

    #[test]
    fn cones() {
        let o = ivec2(5, 5);
        let down = Facing::Down.code();

        assert!(in_cone(o, down, ivec2(5, 8), 1.0));
        assert!(in_cone(o, down, ivec2(8, 8), 1.0));
        assert!(!in_cone(o, down, ivec2(9, 8), 1.0));
        assert!(!in_cone(o, down, ivec2(8, 5), 1.0));
        assert!(!in_cone(o, down, ivec2(5, 2), 1.0));
        assert!(!in_cone(o, down, o, 1.0));

        // Narrower cone.
        assert!(!in_cone(o, down, ivec2(7, 8), 0.5));
        assert!(in_cone(o, down, ivec2(6, 8), 0.5));

        assert!(in_cone(o, Facing::Up.code(), ivec2(4, 1), 1.0));
        assert!(in_cone(o, Facing::Left.code(), ivec2(1, 7), 1.0));
        assert!(!in_cone(o, Facing::Left.code(), ivec2(9, 5), 1.0));
        assert!(in_cone(o, Facing::Right.code(), ivec2(9, 5), 1.0));

        // Unknown facings fail closed.
        assert!(!in_cone(o, 0, ivec2(5, 8), 1.0));
        assert!(!in_cone(o, 5, ivec2(5, 8), 100.0));
    }

    #[test]
    fn lines() {
        let line = |a: [i32; 2], b: [i32; 2]| -> Vec<[i32; 2]> {
            sight_line(a.into(), b.into()).map(|p| p.to_array()).collect()
        };

        assert_eq!(line([3, 3], [3, 3]), vec![[3, 3]]);
        assert_eq!(line([5, 5], [5, 8]), vec![[5, 5], [5, 6], [5, 7], [5, 8]]);
        assert_eq!(line([0, 0], [4, 2]), vec![
            [0, 0],
            [1, 1],
            [2, 1],
            [3, 2],
            [4, 2]
        ]);
        assert_eq!(line([0, 0], [-4, -2]), vec![
            [0, 0],
            [-1, -1],
            [-2, -1],
            [-3, -2],
            [-4, -2]
        ]);
    }

    #[test]
    fn far_apart_cells() {
        let line: Vec<IVec2> =
            sight_line(ivec2(0, 0), ivec2(60_000, -7)).collect();
        assert_eq!(line.len(), 60_001);
        assert_eq!(line[30_000], ivec2(30_000, -4));
        assert_eq!(line.last(), Some(&ivec2(60_000, -7)));

        let (o, right) = (ivec2(0, 0), Facing::Right.code());
        let far = ivec2(50_000, 0);
        assert!(in_sight(&uniform, o, right, far, 100_000, 1.0));
        assert!(!in_sight(&uniform, o, right, far, 49_999, 1.0));

        let (lo, hi) = (ivec2(i32::MIN, i32::MIN), ivec2(i32::MAX, i32::MAX));
        assert_eq!(distance(lo, hi), i32::MAX);
        assert!(!in_range(lo, hi, i32::MAX - 1));
        assert!(in_cone(lo, right, hi, 1.0));
        assert!(!in_cone(hi, right, lo, 1.0));
    }

    #[test]
    fn sight_through_regions() {
        let a = ivec2(5, 5);
        let b = ivec2(5, 8);
        let down = Facing::Down.code();

        assert!(in_sight(&uniform, a, down, b, 5, 1.0));

        // Out of range.
        assert!(!in_sight(&uniform, a, down, b, 2, 1.0));

        // Wall tag between the two.
        let mut walled = RegionMap::default();
        walled.set(ivec2(5, 7), 3);
        assert!(!in_sight(&walled, a, down, b, 5, 1.0));

        // Outside the view cone.
        assert!(!in_sight(&uniform, a, down, ivec2(8, 5), 5, 1.0));
        assert!(!in_sight(&walled, a, down, ivec2(8, 5), 5, 1.0));
    }

    #[test]
    fn viewer_region_is_the_reference() {
        // Viewer stands in region 1 and sees along region 1 cells only.
        let map = RegionMap::from_text(
            "
            ..........
            .11111....
            .111112...
            ..........",
        );
        let right = Facing::Right.code();

        assert!(in_sight(&map, ivec2(1, 1), right, ivec2(5, 1), 8, 1.0));
        assert!(!in_sight(&map, ivec2(1, 1), right, ivec2(6, 1), 8, 1.0));
        assert!(!in_sight(&map, ivec2(1, 2), right, ivec2(6, 2), 8, 1.0));
        // Region 0 viewer looking into region 1.
        assert!(!in_sight(&map, ivec2(0, 1), right, ivec2(3, 1), 8, 1.0));
    }
}
