use tiny_pathops::*;

mod common;

use common::*;

fn line24(fill_type: FillType) -> Path {
    let mut pb = PathBuilder::new();
    pb.set_fill_type(fill_type);
    pb.move_to(2.0, 0.0);
    pb.line_to(4.0, 4.0);
    pb.line_to(0.0, 4.0);
    pb.close();
    pb.move_to(2.0, 0.0);
    pb.line_to(1.0, 2.0);
    pb.line_to(2.0, 2.0);
    pb.close();
    pb.finish().unwrap()
}

#[test]
fn triangle_with_a_notch() {
    for fill_type in &[FillType::Winding, FillType::EvenOdd] {
        let path = line24(*fill_type);
        let res = simplify(&path).unwrap();
        assert_eq!(res.fill_type(), FillType::EvenOdd);
        assert_eq!(contours(&res), 1);
        assert_simplified(&path, &res);
        assert_no_crossings(&res);
    }
}

fn line1(fill_type: FillType) -> Path {
    let mut pb = PathBuilder::new();
    pb.set_fill_type(fill_type);
    pb.push_rect(0.0, 0.0, 12.0, 12.0, PathDirection::CW);
    pb.push_rect(4.0, 0.0, 13.0, 13.0, PathDirection::CCW);
    pb.finish().unwrap()
}

#[test]
fn opposite_rects() {
    for fill_type in &[FillType::Winding, FillType::EvenOdd] {
        let path = line1(*fill_type);
        let res = simplify(&path).unwrap();
        assert_simplified(&path, &res);
        assert_no_crossings(&res);

        // The overlap is a hole in both cases.
        let shape = Shape::new(&res);
        assert!(!shape.contains(8.0, 6.0));
        assert!(shape.contains(2.0, 6.0));
        assert!(shape.contains(8.0, 12.5));
    }
}

#[test]
fn same_direction_rects() {
    let mut pb = PathBuilder::new();
    pb.push_rect(0.0, 0.0, 12.0, 12.0, PathDirection::CW);
    pb.push_rect(4.0, 0.0, 13.0, 13.0, PathDirection::CW);
    let path = pb.finish().unwrap();

    let res = simplify(&path).unwrap();
    assert_eq!(contours(&res), 1);
    assert_simplified(&path, &res);
}

#[test]
fn degenerate() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(0.0, 0.0);
    pb.line_to(2.0, 0.0);
    pb.close();
    pb.move_to(0.0, 0.0);
    pb.line_to(1.0, 0.0);
    pb.line_to(2.0, 0.0);
    pb.close();
    let path = pb.finish().unwrap();

    let res = simplify(&path).unwrap();
    assert!(res.is_empty());
    assert_eq!(res.fill_type(), FillType::EvenOdd);
}

#[test]
fn single_point() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(0.0, 0.0);
    pb.line_to(0.0, 0.0);
    pb.close();
    let path = pb.finish().unwrap();

    assert!(simplify(&path).unwrap().is_empty());
}

fn doubled_triangles(close: bool) -> Path {
    let mut pb = PathBuilder::new();
    for x in &[1.0, 3.0] {
        pb.move_to(2.0, 0.0);
        pb.line_to(2.0, 2.0);
        pb.line_to(*x, 1.0);
        pb.line_to(2.0, 0.0);
        pb.line_to(2.0, 2.0);
        pb.line_to(*x, 1.0);
        if close {
            pb.close();
        }
    }
    pb.finish().unwrap()
}

#[test]
fn doubled_triangles_become_a_diamond() {
    for close in &[true, false] {
        let path = doubled_triangles(*close);
        let res = simplify(&path).unwrap();

        assert_eq!(contours(&res), 1);
        assert_eq!(res.len(), 5); // move, 3 lines, close
        assert_eq!(res.bounds(), Rect::from_ltrb(1.0, 0.0, 3.0, 2.0).unwrap());
        assert_simplified(&path, &res);
    }
}

fn touching_circles_path() -> Path {
    // Two nearly identical circles, one shifted right by a couple of thousandths.
    let mut pb = PathBuilder::new();
    pb.move_to(f32_from_bits(0x42c80000), f32_from_bits(0x42480000));
    pb.conic_to(f32_from_bits(0x42c80000), f32_from_bits(0x00000000),
                f32_from_bits(0x42480000), f32_from_bits(0x00000000), f32_from_bits(0x3f3504f3));
    pb.conic_to(f32_from_bits(0x00000000), f32_from_bits(0x00000000),
                f32_from_bits(0x00000000), f32_from_bits(0x42480000), f32_from_bits(0x3f3504f3));
    pb.conic_to(f32_from_bits(0x00000000), f32_from_bits(0x42c80000),
                f32_from_bits(0x42480000), f32_from_bits(0x42c80000), f32_from_bits(0x3f3504f3));
    pb.conic_to(f32_from_bits(0x42c80000), f32_from_bits(0x42c80000),
                f32_from_bits(0x42c80000), f32_from_bits(0x42480000), f32_from_bits(0x3f3504f3));
    pb.close();
    pb.move_to(f32_from_bits(0x42c80133), f32_from_bits(0x42480000));
    pb.conic_to(f32_from_bits(0x42c80133), f32_from_bits(0x00000000),
                f32_from_bits(0x42480267), f32_from_bits(0x00000000), f32_from_bits(0x3f3504f3));
    pb.conic_to(f32_from_bits(0x3b19b530), f32_from_bits(0x00000000),
                f32_from_bits(0x3b19b530), f32_from_bits(0x42480000), f32_from_bits(0x3f3504f3));
    pb.conic_to(f32_from_bits(0x3b19b530), f32_from_bits(0x42c80000),
                f32_from_bits(0x42480267), f32_from_bits(0x42c80000), f32_from_bits(0x3f3504f3));
    pb.conic_to(f32_from_bits(0x42c80133), f32_from_bits(0x42c80000),
                f32_from_bits(0x42c80133), f32_from_bits(0x42480000), f32_from_bits(0x3f3504f3));
    pb.close();
    pb.finish().unwrap()
}

#[test]
fn touching_circles() {
    let path = touching_circles_path();
    let res = simplify(&path).unwrap();
    assert!(!res.is_empty());
    assert_simplified(&path, &res);
    assert_no_crossings(&res);
}

#[test]
fn overlapping_circles() {
    let mut pb = PathBuilder::new();
    pb.push_circle(50.0, 50.0, 50.0, PathDirection::CW);
    pb.push_circle(100.0, 50.0, 50.0, PathDirection::CW);
    let path = pb.finish().unwrap();

    let res = simplify(&path).unwrap();
    assert_eq!(contours(&res), 1);
    assert_simplified(&path, &res);
    assert_no_crossings(&res);
}

#[test]
fn huge_coordinates() {
    let mut pb = PathBuilder::new();
    for _ in 0..2 {
        pb.move_to(10.0, 90.0);
        pb.line_to(10.0, 90.0);
        pb.line_to(10.0, 30.0);
        pb.line_to(10.0, 30.0);
        pb.line_to(10.0, 90.0);
        pb.close();
    }
    pb.push_rect(10.0, 90.0, 110.0, 30.0, PathDirection::CW);
    pb.move_to(10.0, 30.0);
    pb.line_to(32678.0, 30.0);
    pb.line_to(32678.0, 30.0);
    pb.line_to(10.0, 30.0);
    pb.close();
    pb.push_rect(10.0, 3.35545e+07, 110.0, 30.0, PathDirection::CW);
    pb.push_rect(10.0, 315.0, 110.0, 255.0, PathDirection::CW);
    pb.push_rect(0.0, 60.0, 100.0, 0.0, PathDirection::CW);
    pb.push_rect(10.0, 90.0, 110.0, 30.0, PathDirection::CW);
    pb.push_rect(10.0, 3.35545e+07, 110.0, 30.0, PathDirection::CW);
    pb.push_rect(10.0, 90.0, 110.0, 30.0, PathDirection::CW);
    let path = pb.finish().unwrap();

    let res = simplify(&path).unwrap();
    assert_eq!(res.fill_type(), FillType::EvenOdd);
    assert_eq!(res.bounds(), Rect::from_ltrb(0.0, 0.0, 110.0, 3.35545e+07).unwrap());
    assert_simplified(&path, &res);
}

fn crossing_cubics() -> Path {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.cubic_to(1.0, 2.0, 3.0, 4.0, 4.0, 4.0);
    pb.close();
    pb.move_to(0.0, 4.0);
    pb.cubic_to(2.0, 4.0, 3.0, 2.0, 4.0, 0.0);
    pb.close();
    pb.finish().unwrap()
}

#[test]
fn cubics() {
    let path = crossing_cubics();
    let res = simplify(&path).unwrap();
    assert_simplified(&path, &res);
    assert_no_crossings(&res);
}

#[test]
fn subdivision_limit() {
    let simplifier = Simplifier::new(SimplifyOptions {
        max_subdivisions: 4,
        ..SimplifyOptions::default()
    });
    assert_eq!(simplifier.simplify(&crossing_cubics()), Err(SimplifyError::IntersectionFailure));
}

#[test]
fn idempotent() {
    for path in &[line1(FillType::Winding), touching_circles_path()] {
        let once = simplify(path).unwrap();
        let twice = simplify(&once).unwrap();
        assert_eq!(twice.fill_type(), FillType::EvenOdd);
        assert_eq!(twice.verbs(), once.verbs());
        assert_eq!(twice.points(), once.points());
        assert_eq!(twice.weights(), once.weights());
        assert_simplified(path, &twice);
    }
}

#[test]
fn direction_independent() {
    let mut pb = PathBuilder::new();
    pb.push_rect(0.0, 0.0, 12.0, 12.0, PathDirection::CCW);
    pb.push_rect(4.0, 0.0, 13.0, 13.0, PathDirection::CW);
    let reversed = pb.finish().unwrap();

    let expected = Shape::new(&simplify(&line1(FillType::Winding)).unwrap());
    let res = Shape::new(&simplify(&reversed).unwrap());
    assert_coverage(&[&Shape::new(&reversed)], &res, |x, y| expected.contains(x, y));
}

#[test]
fn inverse() {
    let path = line1(FillType::InverseWinding);
    let res = simplify(&path).unwrap();
    assert_eq!(res.fill_type(), FillType::InverseEvenOdd);
    assert_simplified(&path, &res);

    let shape = Shape::new(&res);
    assert!(shape.contains(-10.0, -10.0));
    assert!(shape.contains(8.0, 6.0));
    assert!(!shape.contains(2.0, 6.0));
}

#[test]
fn fill_type_matters() {
    let mut pb = PathBuilder::new();
    pb.push_rect(0.0, 0.0, 12.0, 12.0, PathDirection::CW);
    pb.push_rect(4.0, 0.0, 13.0, 13.0, PathDirection::CW);
    let winding = pb.finish().unwrap();
    let even_odd = winding.clone().set_fill_type(FillType::EvenOdd);

    let res1 = Shape::new(&simplify(&winding).unwrap());
    let res2 = Shape::new(&simplify(&even_odd).unwrap());
    assert!(res1.contains(8.0, 6.0));
    assert!(!res2.contains(8.0, 6.0));
    assert!(res2.contains(2.0, 6.0));
}

#[test]
fn single_rect() {
    for dir in &[PathDirection::CW, PathDirection::CCW] {
        let mut pb = PathBuilder::new();
        pb.push_rect(1.0, 2.0, 11.0, 7.0, *dir);
        let path = pb.finish().unwrap();

        let res = simplify(&path).unwrap();
        assert_eq!(res.len(), 5);
        assert_eq!(res.bounds(), path.bounds());
        assert_simplified(&path, &res);
    }
}

#[test]
fn rect_grid() {
    let mut pb = PathBuilder::new();
    for row in 0..12 {
        for col in 0..12 {
            let (x, y) = (col as f32 * 7.0, row as f32 * 7.0);
            pb.push_rect(x, y, x + 10.0, y + 10.0, PathDirection::CW);
        }
    }
    let path = pb.finish().unwrap();

    let res = simplify(&path).unwrap();
    assert_eq!(res.len(), 5);
    assert_eq!(res.bounds(), Rect::from_ltrb(0.0, 0.0, 87.0, 87.0).unwrap());
    assert_simplified(&path, &res);
}
