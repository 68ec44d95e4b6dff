use super::Point2;

/// Rotational direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classifies the triple `(p, q, r)` by the sign of the 2D cross product.
///
/// The sign is compared against zero exactly. With y pointing up, a positive
/// value of `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)` is a
/// clockwise turn.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Checks whether `q` lies within the bounding box of segment `pr`.
///
/// Only meaningful when `p`, `q` and `r` are already known to be collinear.
#[must_use]
pub fn on_segment(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Returns `true` if the closed segments `p1q1` and `p2q2` share any point.
///
/// Proper crossings are detected from the four orientations. Collinear
/// configurations fall back to containment tests, so touching endpoints and
/// overlapping collinear segments both count as intersecting.
#[must_use]
pub fn segments_intersect(p1: &Point2, q1: &Point2, p2: &Point2, q2: &Point2) -> bool {
    use Orientation::Collinear;

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != Collinear
        && o2 != Collinear
        && o3 != Collinear
        && o4 != Collinear
        && o1 != o2
        && o3 != o4
    {
        return true;
    }

    (o1 == Collinear && on_segment(p1, p2, q1))
        || (o2 == Collinear && on_segment(p1, q2, q1))
        || (o3 == Collinear && on_segment(p2, p1, q2))
        || (o4 == Collinear && on_segment(p2, q1, q2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_classes() {
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(1.0, 0.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn on_segment_inside_and_outside() {
        assert!(on_segment(&p(0.0, 0.0), &p(2.0, 0.0), &p(5.0, 0.0)));
        assert!(on_segment(&p(0.0, 0.0), &p(5.0, 0.0), &p(5.0, 0.0)));
        assert!(!on_segment(&p(0.0, 0.0), &p(6.0, 0.0), &p(5.0, 0.0)));
    }

    #[test]
    fn x_crossing() {
        assert!(segments_intersect(
            &p(1.0, 1.0),
            &p(10.0, 10.0),
            &p(1.0, 8.0),
            &p(10.0, 1.0)
        ));
    }

    #[test]
    fn parallel_disjoint() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(5.0, 0.0),
            &p(0.0, 1.0),
            &p(5.0, 1.0)
        ));
    }

    #[test]
    fn collinear_overlapping() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(5.0, 0.0),
            &p(3.0, 0.0),
            &p(7.0, 0.0)
        ));
    }

    #[test]
    fn collinear_disjoint() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(3.0, 0.0),
            &p(5.0, 0.0)
        ));
    }

    #[test]
    fn t_junction_touch() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.0),
            &p(5.0, 5.0)
        ));
    }

    #[test]
    fn near_miss() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.5),
            &p(5.0, 5.0)
        ));
    }

    #[test]
    fn symmetric_in_argument_order() {
        let a = (p(1.0, 1.0), p(10.0, 10.0));
        let b = (p(1.0, 8.0), p(10.0, 1.0));
        assert_eq!(
            segments_intersect(&a.0, &a.1, &b.0, &b.1),
            segments_intersect(&b.1, &b.0, &a.1, &a.0)
        );
    }
}
