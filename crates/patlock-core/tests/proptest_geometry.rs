//! Property tests for geometry primitives.

use patlock_core::{Point, Rect, Segment};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1_000.0f64..1_000.0
}

proptest! {
    #[test]
    fn distance_is_symmetric(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(a.distance_squared(b), b.distance_squared(a));
        prop_assert!(a.distance(b) >= 0.0);
    }

    #[test]
    fn centered_square_contains_its_center(cx in coord(), cy in coord(), side in 0.01f64..500.0) {
        let center = Point::new(cx, cy);
        let rect = Rect::centered_square(center, side);
        prop_assert!(rect.contains(center));
    }

    #[test]
    fn segment_lerp_stays_on_the_segment(
        ax in coord(), ay in coord(), bx in coord(), by in coord(), t in 0.0f64..=1.0,
    ) {
        let seg = Segment::new(Point::new(ax, ay), Point::new(bx, by));
        prop_assert_eq!(seg.lerp(0.0), seg.start);
        let p = seg.lerp(t);
        let along = seg.start.distance(p) + p.distance(seg.end);
        let total = seg.start.distance(seg.end);
        prop_assert!((along - total).abs() <= 1e-6 * total.max(1.0));
    }
}
