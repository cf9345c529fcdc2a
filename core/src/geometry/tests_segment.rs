use crate::error::FigureError;
use crate::geometry::{Point, Point2, Segment, EPSILON};

fn seg(a: &Point, b: &Point) -> Segment {
    Segment::new(a.clone(), b.clone()).unwrap()
}

#[test]
fn test_degenerate_segment_rejected() {
    let a = Point::new("A", 1.0, 1.0);
    let b = Point::new("B", 1.0, 1.0);
    let err = Segment::new(a, b).unwrap_err();
    assert!(matches!(err, FigureError::DegenerateSegment { .. }));
}

#[test]
fn test_equality_is_symmetric() {
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 3.0, 4.0);
    assert_eq!(seg(&a, &b), seg(&b, &a));
    assert!((seg(&a, &b).length() - 5.0).abs() < 1e-12);

    assert_eq!(seg(&a, &b).key(), seg(&b, &a).key());
}

#[test]
fn test_equality_follows_point_tolerance() {
    // The two A's straddle a key boundary but are the same point
    let a = Point::new("A", 0.49999e-6, 0.0);
    let a2 = Point::new("A2", 0.50001e-6, 0.0);
    let b = Point::new("B", 5.0, 0.0);

    assert_eq!(a, a2);
    assert_eq!(seg(&a, &b), seg(&a2, &b));
    assert_eq!(seg(&a, &b), seg(&b, &a2));
    assert_ne!(seg(&a, &b), seg(&a, &Point::new("C", 5.0, 1.0)));
}

#[test]
fn test_midpoint() {
    let ab = seg(&Point::new("A", -2.0, 1.0), &Point::new("B", 4.0, 5.0));
    assert_eq!(ab.midpoint(), Point2::new(1.0, 3.0));
    assert_eq!(ab.midpoint(), seg(&Point::new("B", 4.0, 5.0), &Point::new("A", -2.0, 1.0)).midpoint());
}

#[test]
fn test_point_lies_between_endpoints_excludes_endpoints() {
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 4.0, 2.0);
    let ab = seg(&a, &b);

    assert!(ab.point_lies_between_endpoints(&Point::new("M", 2.0, 1.0)));
    assert!(!ab.point_lies_between_endpoints(&a));
    assert!(!ab.point_lies_between_endpoints(&b));
    // On the supporting line but beyond B
    assert!(!ab.point_lies_between_endpoints(&Point::new("X", 6.0, 3.0)));
    // Off the line
    assert!(!ab.point_lies_between_endpoints(&Point::new("Y", 2.0, 1.5)));
}

#[test]
fn test_point_one_epsilon_past_endpoint_is_outside() {
    // X is exactly EPSILON beyond B, so it is a distinct point
    let a = Point::new("A", -4.0, 0.0);
    let b = Point::new("B", 0.0, 0.0);
    let x = Point::new("X", EPSILON, 0.0);
    let ab = seg(&a, &b);

    assert_ne!(x, b);
    assert!(!ab.point_lies_on(&x));
    assert!(!ab.point_lies_between_endpoints(&x));
    assert!(ab.interior_points(&[x]).is_empty());
}

#[test]
fn test_has_sub_segment() {
    // A----B--------D
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 2.0, 0.0);
    let d = Point::new("D", 10.0, 0.0);
    let ad = seg(&a, &d);

    assert!(ad.has_sub_segment(Some(&seg(&a, &b))));
    assert!(ad.has_sub_segment(Some(&ad)));
    assert!(!seg(&a, &b).has_sub_segment(Some(&ad)));
}

#[test]
fn test_has_sub_segment_rejects_disjoint_and_partial_overlap() {
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 10.0, 0.0);
    let ab = seg(&a, &b);

    // A-------------B     C----D
    let cd = seg(&Point::new("C", 20.0, 0.0), &Point::new("D", 25.0, 0.0));
    assert!(!ab.has_sub_segment(Some(&cd)));

    // A----------C--B
    //            C-----D
    let cd = seg(&Point::new("C", 7.0, 0.0), &Point::new("D", 15.0, 0.0));
    assert!(!ab.has_sub_segment(Some(&cd)));
}

#[test]
fn test_has_sub_segment_none() {
    let ab = seg(&Point::new("A", 0.0, 0.0), &Point::new("B", 10.0, 0.0));
    assert!(!ab.has_sub_segment(None));
}

#[test]
fn test_coincide_without_overlap() {
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 10.0, 0.0);
    let ab = seg(&a, &b);

    // Disjoint on the same line
    let cd = seg(&Point::new("C", 20.0, 0.0), &Point::new("D", 25.0, 0.0));
    assert!(ab.coincide_without_overlap(Some(&cd)));

    // Touching at B
    let bd = seg(&b, &Point::new("D", 25.0, 0.0));
    assert!(ab.coincide_without_overlap(Some(&bd)));
    assert!(bd.coincide_without_overlap(Some(&ab)));

    // Shared interior
    let cd = seg(&Point::new("C", 7.0, 0.0), &Point::new("D", 15.0, 0.0));
    assert!(!ab.coincide_without_overlap(Some(&cd)));

    // Contained
    let inner = seg(&Point::new("P", 2.0, 0.0), &Point::new("Q", 3.0, 0.0));
    assert!(!ab.coincide_without_overlap(Some(&inner)));

    // Parallel but on a different line
    let off = seg(&Point::new("E", 20.0, 1.0), &Point::new("F", 25.0, 1.0));
    assert!(!ab.coincide_without_overlap(Some(&off)));

    assert!(!ab.coincide_without_overlap(None));
}

#[test]
fn test_collect_ordered_points_on_segment_none() {
    let ab = seg(&Point::new("A", 0.0, 0.0), &Point::new("B", 10.0, 0.0));
    assert_eq!(
        ab.collect_ordered_points_on_segment(None),
        Err(FigureError::MissingInput("points"))
    );
}

#[test]
fn test_collect_ordered_points_on_segment() {
    //  E                 F
    //      A--B--C--D  I
    //  G      H
    let a = Point::new("A", 0.0, 0.0);
    let d = Point::new("D", 10.0, 0.0);
    let ad = seg(&a, &d);

    let points = vec![
        Point::new("E", -6.0, 6.0),
        d.clone(),
        Point::new("C", 4.0, 0.0),
        Point::new("F", 14.0, 6.0),
        a.clone(),
        Point::new("G", -6.0, -6.0),
        Point::new("B", 2.0, 0.0),
        Point::new("H", 2.0, -6.0),
        Point::new("I", 12.0, 0.0),
    ];
    let snapshot = points.clone();

    let on_segment = ad.collect_ordered_points_on_segment(Some(points.as_slice())).unwrap();
    let names: Vec<&str> = on_segment.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);

    // Ordering follows the segment's own direction
    let da = seg(&d, &a);
    let reversed = da.collect_ordered_points_on_segment(Some(points.as_slice())).unwrap();
    let names: Vec<&str> = reversed.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["D", "C", "B", "A"]);

    // Input untouched
    let before: Vec<&str> = snapshot.iter().map(|p| p.name()).collect();
    let after: Vec<&str> = points.iter().map(|p| p.name()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_interior_points_are_sorted_and_strict() {
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 6.0, 6.0);
    let ab = seg(&a, &b);

    let points = vec![
        b.clone(),
        Point::new("Q", 4.0, 4.0),
        a.clone(),
        Point::new("P", 1.0, 1.0),
        Point::new("P2", 1.0, 1.0),
        Point::new("R", 3.0, 1.0),
    ];
    let interior = ab.interior_points(&points);
    let names: Vec<&str> = interior.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["P", "Q"]);
}

#[test]
fn test_endpoint_helpers() {
    let a = Point::new("A", 0.0, 0.0);
    let b = Point::new("B", 1.0, 0.0);
    let c = Point::new("C", 1.0, 1.0);
    let ab = seg(&a, &b);
    let bc = seg(&b, &c);

    assert_eq!(ab.other_endpoint(&a).map(|p| p.name()), Some("B"));
    assert!(ab.other_endpoint(&c).is_none());
    assert!(ab.is_collinear_with(&seg(&Point::new("X", 5.0, 0.0), &Point::new("Y", 9.0, 0.0))));
    assert!(!ab.is_collinear_with(&bc));
}
