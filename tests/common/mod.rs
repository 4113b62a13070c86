#![allow(dead_code)]

use tiny_pathops::*;

const CURVE_STEPS: usize = 64;
const GRID: usize = 48;
const NEAR_EDGE: f64 = 0.05;
const CROSSING_EPSILON: f64 = 1e-6;

type P = (f64, f64);

/// A flattened path that can be queried for coverage.
pub struct Shape {
    lines: Vec<[P; 2]>,
    fill_type: FillType,
    bounds: Option<Rect>,
}

impl Shape {
    pub fn new(path: &Path) -> Self {
        let mut lines = Vec::new();
        let mut start = (0.0, 0.0);
        let mut last = (0.0, 0.0);
        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    close(&mut lines, last, start);
                    start = pt(p);
                    last = start;
                }
                PathSegment::LineTo(p) => {
                    lines.push([last, pt(p)]);
                    last = pt(p);
                }
                PathSegment::QuadTo(p1, p) => {
                    let (p0, p1, p2) = (last, pt(p1), pt(p));
                    last = flatten(&mut lines, p0, p2, |t| conic(p0, p1, p2, 1.0, t));
                }
                PathSegment::ConicTo(p1, p, w) => {
                    let (p0, p1, p2) = (last, pt(p1), pt(p));
                    last = flatten(&mut lines, p0, p2, |t| conic(p0, p1, p2, w as f64, t));
                }
                PathSegment::CubicTo(p1, p2, p) => {
                    let (p0, p1, p2, p3) = (last, pt(p1), pt(p2), pt(p));
                    last = flatten(&mut lines, p0, p3, |t| cubic(p0, p1, p2, p3, t));
                }
                PathSegment::Close => {
                    close(&mut lines, last, start);
                    last = start;
                }
            }
        }
        close(&mut lines, last, start);

        let bounds = if path.is_empty() { None } else { Some(path.bounds()) };
        Shape { lines, fill_type: path.fill_type(), bounds }
    }

    pub fn winding(&self, x: f64, y: f64) -> i32 {
        let mut winding = 0;
        for [a, b] in &self.lines {
            if (a.1 <= y) == (b.1 <= y) {
                continue;
            }

            let cross_x = a.0 + (y - a.1) * (b.0 - a.0) / (b.1 - a.1);
            if cross_x > x {
                winding += if b.1 > a.1 { 1 } else { -1 };
            }
        }

        winding
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.fill_type.is_inside(self.winding(x, y)) != self.fill_type.is_inverse()
    }

    pub fn distance(&self, x: f64, y: f64) -> f64 {
        self.lines
            .iter()
            .map(|[a, b]| segment_distance(*a, *b, (x, y)))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Samples a grid around the input shapes and compares the result's coverage
/// with the expected one. Points close to any edge are skipped.
pub fn assert_coverage(inputs: &[&Shape], result: &Shape, expected: impl Fn(f64, f64) -> bool) {
    let mut bounds: Option<Rect> = None;
    for shape in inputs {
        if let Some(r) = shape.bounds {
            bounds = Some(match bounds {
                Some(b) => b.join(&r),
                None => r,
            });
        }
    }

    let bounds = match bounds {
        Some(b) => b.outset(1.0, 1.0).unwrap(),
        None => return,
    };

    let step_x = bounds.width() as f64 / GRID as f64;
    let step_y = bounds.height() as f64 / GRID as f64;
    for row in 0..GRID {
        for col in 0..GRID {
            let x = bounds.left() as f64 + (col as f64 + 0.37) * step_x;
            let y = bounds.top() as f64 + (row as f64 + 0.61) * step_y;

            if inputs.iter().chain(Some(&result)).any(|s| s.distance(x, y) < NEAR_EDGE) {
                continue;
            }

            assert_eq!(result.contains(x, y), expected(x, y), "coverage differs at ({}, {})", x, y);
        }
    }
}

/// Checks that the simplified path covers the same area as the input.
pub fn assert_simplified(input: &Path, result: &Path) {
    let input = Shape::new(input);
    let output = Shape::new(result);
    assert_coverage(&[&input], &output, |x, y| input.contains(x, y));
}

/// Checks that the result covers the area produced by the operation.
pub fn assert_op(one: &Path, two: &Path, op: PathOp, result: &Path) {
    let one = Shape::new(one);
    let two = Shape::new(two);
    let output = Shape::new(result);
    assert_coverage(&[&one, &two], &output, |x, y| op.apply(one.contains(x, y), two.contains(x, y)));
}

/// Checks that the flattened path's segments meet only at their end points.
pub fn assert_no_crossings(path: &Path) {
    let lines = Shape::new(path).lines;
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            assert!(!crosses(*a, *b), "{:?} crosses {:?}", a, b);
        }
    }
}

pub fn contours(path: &Path) -> usize {
    path.segments().filter(|s| matches!(s, PathSegment::MoveTo(_))).count()
}

fn pt(p: Point) -> P {
    (p.x as f64, p.y as f64)
}

fn close(lines: &mut Vec<[P; 2]>, last: P, start: P) {
    if last != start {
        lines.push([last, start]);
    }
}

fn flatten(lines: &mut Vec<[P; 2]>, from: P, to: P, f: impl Fn(f64) -> P) -> P {
    let mut prev = from;
    for i in 1..CURVE_STEPS {
        let p = f(i as f64 / CURVE_STEPS as f64);
        lines.push([prev, p]);
        prev = p;
    }
    lines.push([prev, to]);
    to
}

fn conic(p0: P, p1: P, p2: P, w: f64, t: f64) -> P {
    let a = (1.0 - t) * (1.0 - t);
    let b = 2.0 * t * (1.0 - t) * w;
    let c = t * t;
    let d = a + b + c;
    (
        (a * p0.0 + b * p1.0 + c * p2.0) / d,
        (a * p0.1 + b * p1.1 + c * p2.1) / d,
    )
}

fn cubic(p0: P, p1: P, p2: P, p3: P, t: f64) -> P {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

// Checks for an intersection strictly inside both segments.
// Parallel and overlapping segments are not reported.
fn crosses([p, p2]: [P; 2], [q, q2]: [P; 2]) -> bool {
    let r = (p2.0 - p.0, p2.1 - p.1);
    let s = (q2.0 - q.0, q2.1 - q.1);
    let denom = r.0 * s.1 - r.1 * s.0;
    let len = (r.0 * r.0 + r.1 * r.1).sqrt() * (s.0 * s.0 + s.1 * s.1).sqrt();
    if denom.abs() <= len * 1e-12 {
        return false;
    }

    let qp = (q.0 - p.0, q.1 - p.1);
    let t = (qp.0 * s.1 - qp.1 * s.0) / denom;
    let u = (qp.0 * r.1 - qp.1 * r.0) / denom;
    let inside = |v: f64| v > CROSSING_EPSILON && v < 1.0 - CROSSING_EPSILON;
    inside(t) && inside(u)
}

fn segment_distance(a: P, b: P, p: P) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = dx * dx + dy * dy;
    let t = if len == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len).max(0.0).min(1.0)
    };

    let (x, y) = (a.0 + t * dx - p.0, a.1 + t * dy - p.1);
    (x * x + y * y).sqrt()
}
