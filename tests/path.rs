use tiny_pathops::*;

#[test]
fn empty() {
    let pb = PathBuilder::new();
    assert!(pb.finish().is_none());
}

#[test]
fn line() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    pb.line_to(30.0, 40.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(10.0, 20.0, 30.0, 40.0).unwrap());
    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(10.0, 20.0)),
        PathSegment::LineTo(Point::from_xy(30.0, 40.0)),
    ]);

    assert_eq!(format!("{:?}", path),
               "Path { segments: \"M 10 20 L 30 40\", \
                bounds: Rect { left: 10.0, top: 20.0, right: 30.0, bottom: 40.0 }, \
                fill_type: Winding }");
}

#[test]
fn no_move_before_line() {
    let mut pb = PathBuilder::new();
    pb.line_to(30.0, 40.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(0.0, 0.0, 30.0, 40.0).unwrap());
    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
        PathSegment::LineTo(Point::from_xy(30.0, 40.0)),
    ]);
}

#[test]
fn no_move_before_conic() {
    let mut pb = PathBuilder::new();
    pb.conic_to(40.0, 30.0, 60.0, 75.0, 0.5);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(0.0, 0.0, 60.0, 75.0).unwrap());
    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
        PathSegment::ConicTo(Point::from_xy(40.0, 30.0), Point::from_xy(60.0, 75.0), 0.5),
    ]);
}

#[test]
fn no_move_before_close() {
    let mut pb = PathBuilder::new();
    pb.close();
    assert!(pb.finish().is_none());
}

#[test]
fn double_close() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 10.0);
    pb.line_to(20.0, 10.0);
    pb.line_to(20.0, 20.0);
    pb.close();
    pb.close();
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(10.0, 10.0, 20.0, 20.0).unwrap());
    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(10.0, 10.0)),
        PathSegment::LineTo(Point::from_xy(20.0, 10.0)),
        PathSegment::LineTo(Point::from_xy(20.0, 20.0)),
        PathSegment::Close,
    ]);
}

#[test]
fn double_move_to() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    pb.move_to(20.0, 10.0);
    pb.line_to(30.0, 40.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(20.0, 10.0, 30.0, 40.0).unwrap());
    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(20.0, 10.0)),
        PathSegment::LineTo(Point::from_xy(30.0, 40.0)),
    ]);
}

#[test]
fn line_after_close() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    pb.line_to(30.0, 40.0);
    pb.close();
    pb.line_to(20.0, 20.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(10.0, 20.0)),
        PathSegment::LineTo(Point::from_xy(30.0, 40.0)),
        PathSegment::Close,
        PathSegment::MoveTo(Point::from_xy(10.0, 20.0)),
        PathSegment::LineTo(Point::from_xy(20.0, 20.0)),
    ]);
}

#[test]
fn unsorted_rect() {
    // Same as Skia's `addRect(0, 18, 12, 12)`.
    let mut pb = PathBuilder::new();
    pb.push_rect(0.0, 18.0, 12.0, 12.0, PathDirection::CW);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(0.0, 12.0, 12.0, 18.0).unwrap());
    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(0.0, 18.0)),
        PathSegment::LineTo(Point::from_xy(12.0, 18.0)),
        PathSegment::LineTo(Point::from_xy(12.0, 12.0)),
        PathSegment::LineTo(Point::from_xy(0.0, 12.0)),
        PathSegment::Close,
    ]);
}

#[test]
fn ccw_rect() {
    let mut pb = PathBuilder::new();
    pb.push_rect(1.0, 2.0, 3.0, 4.0, PathDirection::CCW);
    let path = pb.finish().unwrap();

    assert_eq!(path.segments().collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(1.0, 2.0)),
        PathSegment::LineTo(Point::from_xy(1.0, 4.0)),
        PathSegment::LineTo(Point::from_xy(3.0, 4.0)),
        PathSegment::LineTo(Point::from_xy(3.0, 2.0)),
        PathSegment::Close,
    ]);
}

#[test]
fn circle() {
    let path = PathBuilder::from_circle(50.0, 50.0, 50.0).unwrap();
    assert_eq!(path.bounds(), Rect::from_ltrb(0.0, 0.0, 100.0, 100.0).unwrap());
    assert_eq!(path.weights().len(), 4);
    assert_eq!(path.segments().next(), Some(PathSegment::MoveTo(Point::from_xy(100.0, 50.0))));
}

#[test]
fn fill_type() {
    let mut pb = PathBuilder::new();
    pb.set_fill_type(FillType::EvenOdd);
    pb.move_to(0.0, 0.0);
    pb.line_to(1.0, 1.0);
    let path = pb.finish().unwrap();
    assert_eq!(path.fill_type(), FillType::EvenOdd);

    let path = path.set_fill_type(FillType::InverseWinding);
    assert!(path.fill_type().is_inverse());

    let pb = path.clear();
    assert!(pb.is_empty());
    assert_eq!(pb.fill_type(), FillType::InverseWinding);
}

#[test]
fn auto_close() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 10.0);
    pb.line_to(20.0, 10.0);
    pb.line_to(20.0, 20.0);
    pb.close();
    let path = pb.finish().unwrap();

    let mut iter = path.segments();
    iter.set_auto_close(true);
    assert_eq!(iter.collect::<Vec<_>>(), &[
        PathSegment::MoveTo(Point::from_xy(10.0, 10.0)),
        PathSegment::LineTo(Point::from_xy(20.0, 10.0)),
        PathSegment::LineTo(Point::from_xy(20.0, 20.0)),
        PathSegment::LineTo(Point::from_xy(10.0, 10.0)),
        PathSegment::Close,
    ]);
}

#[test]
fn tight_bounds_of_circle() {
    let path = PathBuilder::from_circle(50.0, 50.0, 50.0).unwrap();
    let bounds = tight_bounds(&path).unwrap();
    assert_eq!(bounds, path.bounds());

    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.cubic_to(0.0, 20.0, 10.0, 20.0, 10.0, 0.0);
    let path = pb.finish().unwrap();
    let bounds = tight_bounds(&path).unwrap();
    assert_eq!(bounds.bottom(), 15.0);
    assert_eq!(bounds.right(), 10.0);
}
