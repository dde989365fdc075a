//! Geometry engine: the cut contract the state machine drives
//!
//! Owns the live polygon for one level, answers crossing and obstruction
//! queries, and performs the one mutation (`split`) when a chord makes it all
//! the way across.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::polygon::{EdgePoint, Polygon};
use super::segment::{Segment, SegmentHit};

/// Result of testing a pointer segment against the polygon from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// No clean crossing (includes vertex grazes and collinear contact)
    None,
    /// First boundary contact is a cuttable edge; `line_start` is set
    EntersPolygon,
    /// First boundary contact is a protected edge
    HitsRigidEdge,
}

/// Which region `result_polygon` should report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// The current (kept) polygon
    Kept,
    /// The piece removed by the most recent successful split
    Removed,
}

/// What the engine needs to know about a ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub id: u32,
    pub pos: DVec2,
    pub radius: f64,
}

/// A successful split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// The new active polygon
    pub kept: Polygon,
    /// The piece that was cut away
    pub removed: Polygon,
    /// Where the chord left the polygon
    pub exit: DVec2,
    /// Area of `removed` over the level-start area
    pub progress_delta: f64,
    /// Cumulative progress after this split
    pub progress: f64,
}

/// Outcome of trying to finish a chord
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// Live point hasn't left the polygon yet (or the exit is ambiguous)
    Open,
    /// The chord heads back out without crossing the interior
    Withdrawn,
    /// The chord touches a ball; nothing changed
    BlockedByBall,
    /// The chord leaves through a protected edge; nothing changed
    ExitsThroughRigidEdge { exit: DVec2 },
    /// Both halves hold a ball, so neither can be removed; nothing changed
    BothSidesOccupied { exit: DVec2 },
    /// The polygon was split and the kept half installed
    Completed(SplitResult),
}

/// A boundary contact along a query segment
#[derive(Debug, Clone, Copy)]
struct Hit {
    /// Parameter along the query segment
    t: f64,
    /// Parameter along the polygon edge
    u: f64,
    at: EdgePoint,
}

/// Boundary contacts sorted along the query segment, or `None` if any edge
/// is collinear with it
fn boundary_hits(poly: &Polygon, seg: &Segment, eps: f64, skip_edge: Option<usize>) -> Option<Vec<Hit>> {
    let mut hits = Vec::new();
    for (edge, e) in poly.edges() {
        if Some(edge) == skip_edge {
            continue;
        }
        match seg.intersect(&e, eps) {
            SegmentHit::Miss => {}
            SegmentHit::Overlap => return None,
            SegmentHit::Point { t, u, point } => hits.push(Hit {
                t,
                u,
                at: EdgePoint { edge, point },
            }),
        }
    }
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    Some(hits)
}

/// True if the segment `a`–`b` comes within radius of any ball centre.
///
/// Symmetric in `a`/`b`.
pub fn ball_obstruction_test(a: DVec2, b: DVec2, balls: &[BallSnapshot]) -> bool {
    let chord = Segment::new(a, b);
    balls
        .iter()
        .any(|ball| chord.distance_to_point(ball.pos) <= ball.radius)
}

/// Geometry state for one level
#[derive(Debug, Clone)]
pub struct GeometryEngine {
    polygon: Polygon,
    initial_area: f64,
    removed_area: f64,
    line_start: Option<EdgePoint>,
    last_removed: Option<Polygon>,
    eps: f64,
}

impl GeometryEngine {
    pub fn new(polygon: Polygon, eps: f64) -> Self {
        let initial_area = polygon.area();
        Self {
            polygon,
            initial_area,
            removed_area: 0.0,
            line_start: None,
            last_removed: None,
            eps,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Area of the polygon at level start
    pub fn initial_area(&self) -> f64 {
        self.initial_area
    }

    /// Length tolerance for this polygon's scale
    fn len_tol(&self) -> f64 {
        self.eps * self.polygon.extent()
    }

    /// Test a pointer segment from `p1` (outside) to `p2`.
    ///
    /// On `EntersPolygon` the boundary point becomes `line_start`.
    pub fn crossing_test(&mut self, p1: DVec2, p2: DVec2) -> Crossing {
        if (p2 - p1).length() <= self.len_tol() || self.polygon.contains(p1) {
            return Crossing::None;
        }
        let seg = Segment::new(p1, p2);
        let Some(hits) = boundary_hits(&self.polygon, &seg, self.eps, None) else {
            log::debug!("crossing {p1} -> {p2} is collinear with an edge");
            return Crossing::None;
        };
        let Some(first) = hits.first() else {
            return Crossing::None;
        };
        if self.grazes_vertex(first) {
            log::debug!("crossing {p1} -> {p2} grazes a vertex");
            return Crossing::None;
        }
        if self.polygon.is_rigid(first.at.edge) {
            return Crossing::HitsRigidEdge;
        }
        self.line_start = Some(first.at);
        Crossing::EntersPolygon
    }

    /// Boundary point recorded by the last successful `crossing_test`
    pub fn line_start(&self) -> Option<DVec2> {
        self.line_start.map(|s| s.point)
    }

    /// Obstruction check against the current chord
    pub fn ball_obstruction_test(&self, a: DVec2, b: DVec2, balls: &[BallSnapshot]) -> bool {
        ball_obstruction_test(a, b, balls)
    }

    /// Try to finish the chord `anchor` → `live`.
    ///
    /// Only `Completed` mutates the polygon.
    pub fn split(&mut self, anchor: DVec2, live: DVec2, balls: &[BallSnapshot]) -> SplitOutcome {
        if (live - anchor).length() <= self.len_tol() {
            return SplitOutcome::Open;
        }
        let Some(entry) = self.locate_anchor(anchor) else {
            log::debug!("anchor {anchor} is not on the boundary");
            return SplitOutcome::Open;
        };
        if ball_obstruction_test(entry.point, live, balls) {
            return SplitOutcome::BlockedByBall;
        }

        let chord = Segment::new(entry.point, live);
        let Some(hits) = boundary_hits(&self.polygon, &chord, self.eps, Some(entry.edge)) else {
            return SplitOutcome::Open;
        };
        let exit = hits.into_iter().find(|h| h.t > self.eps);

        let inner_end = exit.map(|h| h.at.point).unwrap_or(live);
        if !self.polygon.contains(Segment::new(entry.point, inner_end).midpoint()) {
            return SplitOutcome::Withdrawn;
        }
        let Some(exit) = exit else {
            return SplitOutcome::Open;
        };
        if self.grazes_vertex(&exit) {
            log::debug!("exit at {} grazes a vertex", exit.at.point);
            return SplitOutcome::Open;
        }
        if self.polygon.is_rigid(exit.at.edge) {
            return SplitOutcome::ExitsThroughRigidEdge { exit: exit.at.point };
        }
        let Some((left, right)) = self.polygon.split(entry, exit.at) else {
            return SplitOutcome::Open;
        };
        let occupied = |p: &Polygon| balls.iter().any(|b| p.contains(b.pos));
        let (kept, removed) = match (occupied(&left), occupied(&right)) {
            (true, true) => {
                return SplitOutcome::BothSidesOccupied { exit: exit.at.point };
            }
            (true, false) => (left, right),
            (false, true) => (right, left),
            (false, false) if left.area() >= right.area() => (left, right),
            (false, false) => (right, left),
        };

        let removed_area = removed.area();
        let progress_delta = if self.initial_area > 0.0 {
            removed_area / self.initial_area
        } else {
            0.0
        };
        self.removed_area += removed_area;
        self.polygon = kept.clone();
        self.last_removed = Some(removed.clone());
        self.line_start = None;

        SplitOutcome::Completed(SplitResult {
            kept,
            removed,
            exit: exit.at.point,
            progress_delta,
            progress: self.progress(),
        })
    }

    /// Cumulative removed fraction of the level-start area
    pub fn progress(&self) -> f64 {
        if self.initial_area <= 0.0 {
            return 0.0;
        }
        (self.removed_area / self.initial_area).min(1.0)
    }

    /// Boundary of the kept polygon or of the last removed piece
    pub fn result_polygon(&self, kind: RegionKind) -> Vec<DVec2> {
        match kind {
            RegionKind::Kept => self.polygon.vertices().to_vec(),
            RegionKind::Removed => self
                .last_removed
                .as_ref()
                .map(|p| p.vertices().to_vec())
                .unwrap_or_default(),
        }
    }

    fn grazes_vertex(&self, hit: &Hit) -> bool {
        hit.u <= self.eps || hit.u >= 1.0 - self.eps
    }

    /// Find the edge an anchor point sits on.
    ///
    /// Prefers the edge recorded by the last entry; otherwise takes the
    /// nearest edge within tolerance, excluding vertices.
    fn locate_anchor(&self, anchor: DVec2) -> Option<EdgePoint> {
        let tol = self.len_tol();
        if let Some(start) = self.line_start {
            if (start.point - anchor).length() <= tol {
                return Some(start);
            }
        }
        let (edge, seg) = self
            .polygon
            .edges()
            .min_by(|(_, a), (_, b)| {
                a.distance_to_point(anchor)
                    .total_cmp(&b.distance_to_point(anchor))
            })?;
        if seg.distance_to_point(anchor) > tol
            || (seg.a - anchor).length() <= tol
            || (seg.b - anchor).length() <= tol
        {
            return None;
        }
        Some(EdgePoint {
            edge,
            point: anchor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn square(rigid: [bool; 4]) -> GeometryEngine {
        let poly = Polygon::new(
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 10.0),
                DVec2::new(0.0, 10.0),
            ],
            rigid.to_vec(),
            EPS,
        )
        .unwrap();
        GeometryEngine::new(poly, EPS)
    }

    fn ball(x: f64, y: f64, radius: f64) -> BallSnapshot {
        BallSnapshot {
            id: 0,
            pos: DVec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_crossing_enters_and_records_line_start() {
        let mut eng = square([false; 4]);
        let crossing = eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        assert_eq!(crossing, Crossing::EntersPolygon);
        let start = eng.line_start().unwrap();
        assert!((start - DVec2::new(5.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_crossing_misses() {
        let mut eng = square([false; 4]);
        assert_eq!(
            eng.crossing_test(DVec2::new(-5.0, -1.0), DVec2::new(-1.0, 20.0)),
            Crossing::None
        );
        assert!(eng.line_start().is_none());
    }

    #[test]
    fn test_crossing_rigid_edge() {
        let mut eng = square([true, false, false, false]);
        assert_eq!(
            eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0)),
            Crossing::HitsRigidEdge
        );
        assert!(eng.line_start().is_none());
    }

    #[test]
    fn test_crossing_vertex_graze_is_none() {
        let mut eng = square([false; 4]);
        // Diagonal through the (0,0) corner
        assert_eq!(
            eng.crossing_test(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0)),
            Crossing::None
        );
        // Sliding along the bottom edge
        assert_eq!(
            eng.crossing_test(DVec2::new(-1.0, 0.0), DVec2::new(5.0, 0.0)),
            Crossing::None
        );
    }

    #[test]
    fn test_crossing_from_inside_is_none() {
        let mut eng = square([false; 4]);
        assert_eq!(
            eng.crossing_test(DVec2::new(5.0, 5.0), DVec2::new(5.0, -5.0)),
            Crossing::None
        );
    }

    #[test]
    fn test_split_square_in_half() {
        let mut eng = square([false; 4]);
        assert_eq!(
            eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 11.0)),
            Crossing::EntersPolygon
        );
        let anchor = eng.line_start().unwrap();
        match eng.split(anchor, DVec2::new(5.0, 11.0), &[]) {
            SplitOutcome::Completed(result) => {
                assert!((result.kept.area() - 50.0).abs() < 1e-9);
                assert!((result.removed.area() - 50.0).abs() < 1e-9);
                assert!((result.progress_delta - 0.5).abs() < 1e-12);
                assert!((result.progress - 0.5).abs() < 1e-12);
                assert!((result.exit - DVec2::new(5.0, 10.0)).length() < 1e-12);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert!((eng.progress() - 0.5).abs() < 1e-12);
        assert!((eng.polygon().area() - 50.0).abs() < 1e-9);
        assert_eq!(eng.result_polygon(RegionKind::Removed).len(), 4);
        assert!(eng.line_start().is_none());
    }

    #[test]
    fn test_split_open_while_inside() {
        let mut eng = square([false; 4]);
        eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        let anchor = eng.line_start().unwrap();
        assert_eq!(eng.split(anchor, DVec2::new(5.0, 6.0), &[]), SplitOutcome::Open);
        assert!((eng.polygon().area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_withdrawn_when_pointer_backs_out() {
        let mut eng = square([false; 4]);
        eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        let anchor = eng.line_start().unwrap();
        assert_eq!(
            eng.split(anchor, DVec2::new(6.0, -2.0), &[]),
            SplitOutcome::Withdrawn
        );
    }

    #[test]
    fn test_split_blocked_by_ball() {
        let mut eng = square([false; 4]);
        eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        let anchor = eng.line_start().unwrap();
        let balls = [ball(5.0, 5.0, 2.0)];
        assert_eq!(
            eng.split(anchor, DVec2::new(5.0, 11.0), &balls),
            SplitOutcome::BlockedByBall
        );
        assert!((eng.polygon().area() - 100.0).abs() < 1e-9);
        assert_eq!(eng.progress(), 0.0);
    }

    #[test]
    fn test_split_blocked_before_leaving() {
        let mut eng = square([false; 4]);
        eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        let anchor = eng.line_start().unwrap();
        let balls = [ball(5.0, 5.0, 2.0)];
        // Live end still inside, chord already reaches the ball
        assert_eq!(
            eng.split(anchor, DVec2::new(5.0, 4.0), &balls),
            SplitOutcome::BlockedByBall
        );
        // Short of the ball it stays open
        assert_eq!(eng.split(anchor, DVec2::new(5.0, 2.5), &balls), SplitOutcome::Open);
    }

    #[test]
    fn test_split_rigid_exit() {
        let mut eng = square([false, false, true, false]);
        eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        let anchor = eng.line_start().unwrap();
        match eng.split(anchor, DVec2::new(5.0, 11.0), &[]) {
            SplitOutcome::ExitsThroughRigidEdge { exit } => {
                assert!((exit - DVec2::new(5.0, 10.0)).length() < 1e-12);
            }
            other => panic!("expected rigid exit, got {other:?}"),
        }
        assert!((eng.polygon().area() - 100.0).abs() < 1e-9);
        assert_eq!(eng.polygon().len(), 4);
    }

    #[test]
    fn test_split_removes_empty_side() {
        let mut eng = square([false; 4]);
        // Ball in the left 30% keeps that side even though it's smaller
        eng.crossing_test(DVec2::new(3.0, -1.0), DVec2::new(3.0, 1.0));
        let anchor = eng.line_start().unwrap();
        let balls = [ball(1.5, 5.0, 0.5)];
        match eng.split(anchor, DVec2::new(3.0, 11.0), &balls) {
            SplitOutcome::Completed(result) => {
                assert!((result.kept.area() - 30.0).abs() < 1e-9);
                assert!((result.progress_delta - 0.7).abs() < 1e-12);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_split_keeps_larger_side_without_balls() {
        let mut eng = square([false; 4]);
        eng.crossing_test(DVec2::new(3.0, -1.0), DVec2::new(3.0, 1.0));
        let anchor = eng.line_start().unwrap();
        match eng.split(anchor, DVec2::new(3.0, 11.0), &[]) {
            SplitOutcome::Completed(result) => {
                assert!((result.kept.area() - 70.0).abs() < 1e-9);
                assert!((result.progress_delta - 0.3).abs() < 1e-12);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_split_both_sides_occupied() {
        let mut eng = square([false; 4]);
        eng.crossing_test(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        let anchor = eng.line_start().unwrap();
        let balls = [ball(2.0, 5.0, 0.5), ball(8.0, 5.0, 0.5)];
        assert!(matches!(
            eng.split(anchor, DVec2::new(5.0, 11.0), &balls),
            SplitOutcome::BothSidesOccupied { .. }
        ));
        assert!((eng.polygon().area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_relative_to_level_start() {
        // 10 x 10 square, three vertical cuts each removing 20 area units
        let mut eng = square([false; 4]);
        let mut seen = Vec::new();
        for x in [8.0, 6.0, 4.0] {
            assert_eq!(
                eng.crossing_test(DVec2::new(x, -1.0), DVec2::new(x, 1.0)),
                Crossing::EntersPolygon
            );
            let anchor = eng.line_start().unwrap();
            // Ball on the far left keeps the left side
            let balls = [ball(1.0, 5.0, 0.5)];
            match eng.split(anchor, DVec2::new(x, 11.0), &balls) {
                SplitOutcome::Completed(result) => {
                    assert!((result.progress_delta - 0.2).abs() < 1e-9);
                    seen.push(result.progress);
                }
                other => panic!("expected completion, got {other:?}"),
            }
        }
        assert!((seen[0] - 0.2).abs() < 1e-9);
        assert!((seen[1] - 0.4).abs() < 1e-9);
        assert!((seen[2] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_concave_exit_is_first_boundary_hit() {
        // U shape opening upward; a horizontal chord from the left arm
        // leaves at the inner wall of the left arm, not the far right.
        let poly = Polygon::from_points(
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(30.0, 0.0),
                DVec2::new(30.0, 30.0),
                DVec2::new(20.0, 30.0),
                DVec2::new(20.0, 10.0),
                DVec2::new(10.0, 10.0),
                DVec2::new(10.0, 30.0),
                DVec2::new(0.0, 30.0),
            ],
            EPS,
        )
        .unwrap();
        let mut eng = GeometryEngine::new(poly, EPS);
        assert_eq!(
            eng.crossing_test(DVec2::new(-1.0, 20.0), DVec2::new(5.0, 20.0)),
            Crossing::EntersPolygon
        );
        let anchor = eng.line_start().unwrap();
        match eng.split(anchor, DVec2::new(40.0, 20.0), &[]) {
            SplitOutcome::Completed(result) => {
                assert!((result.exit - DVec2::new(10.0, 20.0)).length() < 1e-9);
                // Removed the 10 x 10 top of the left arm
                assert!((result.removed.area() - 100.0).abs() < 1e-9);
                assert!(result.kept.is_simple(EPS));
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_partly_rigid_side() {
        let poly = Polygon::new(
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(5.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 10.0),
                DVec2::new(0.0, 10.0),
            ],
            vec![true, false, false, false, false],
            EPS,
        )
        .unwrap();
        let mut eng = GeometryEngine::new(poly, EPS);
        assert_eq!(
            eng.crossing_test(DVec2::new(2.0, -1.0), DVec2::new(2.0, 1.0)),
            Crossing::HitsRigidEdge
        );
        assert_eq!(
            eng.crossing_test(DVec2::new(7.0, -1.0), DVec2::new(7.0, 1.0)),
            Crossing::EntersPolygon
        );
        let anchor = eng.line_start().unwrap();
        assert!(matches!(
            eng.split(anchor, DVec2::new(7.0, 11.0), &[]),
            SplitOutcome::Completed(_)
        ));
    }

    #[test]
    fn test_result_polygon_removed_empty_before_any_cut() {
        let eng = square([false; 4]);
        assert!(eng.result_polygon(RegionKind::Removed).is_empty());
        assert_eq!(eng.result_polygon(RegionKind::Kept).len(), 4);
    }

    proptest! {
        #[test]
        fn prop_obstruction_symmetric(
            ax in -50.0f64..50.0, ay in -50.0f64..50.0,
            bx in -50.0f64..50.0, by in -50.0f64..50.0,
            cx in -50.0f64..50.0, cy in -50.0f64..50.0,
            r in 0.0f64..20.0,
        ) {
            let a = DVec2::new(ax, ay);
            let b = DVec2::new(bx, by);
            let balls = [ball(cx, cy, r)];
            prop_assert_eq!(
                ball_obstruction_test(a, b, &balls),
                ball_obstruction_test(b, a, &balls)
            );
        }

        #[test]
        fn prop_split_conserves_area(
            x_in in 0.5f64..9.5,
            x_out in 0.5f64..9.5,
        ) {
            let mut eng = square([false; 4]);
            let original = eng.polygon().area();
            prop_assume!(eng.crossing_test(DVec2::new(x_in, -1.0), DVec2::new(x_in, 1.0)) == Crossing::EntersPolygon);
            let anchor = eng.line_start().unwrap();
            let live = DVec2::new(x_out, 11.0);
            if let SplitOutcome::Completed(result) = eng.split(anchor, live, &[]) {
                prop_assert!((result.kept.area() + result.removed.area() - original).abs() < 1e-9);
                prop_assert!(result.kept.is_simple(EPS));
                prop_assert!(result.kept.area() >= result.removed.area());
            } else {
                prop_assert!(false, "straight chord across the square must complete");
            }
        }

        #[test]
        fn prop_progress_monotone_and_bounded(
            cuts in proptest::collection::vec((0.5f64..9.5, 0.5f64..9.5, any::<bool>()), 1..10),
        ) {
            let mut eng = square([false; 4]);
            let initial = eng.initial_area();
            let mut last = 0.0;
            for (a, b, horizontal) in cuts {
                let (from, to) = if horizontal {
                    (DVec2::new(-1.0, a), DVec2::new(11.0, b))
                } else {
                    (DVec2::new(a, -1.0), DVec2::new(b, 11.0))
                };
                if eng.crossing_test(from, to) != Crossing::EntersPolygon {
                    continue;
                }
                let Some(anchor) = eng.line_start() else {
                    continue;
                };
                if let SplitOutcome::Completed(result) = eng.split(anchor, to, &[]) {
                    prop_assert!(result.progress >= last);
                    prop_assert!(result.progress <= 1.0 + 1e-9);
                    let expected = (initial - eng.polygon().area()) / initial;
                    prop_assert!((result.progress - expected).abs() < 1e-9);
                    prop_assert!((eng.progress() - result.progress).abs() < 1e-15);
                    last = result.progress;
                }
            }
        }

        #[test]
        fn prop_outside_segments_never_cross(
            ax in -50.0f64..-1.0, ay in -50.0f64..50.0,
            bx in -50.0f64..-1.0, by in -50.0f64..50.0,
        ) {
            // Both endpoints left of the square: the segment cannot touch it
            let mut eng = square([false; 4]);
            prop_assert_eq!(
                eng.crossing_test(DVec2::new(ax, ay), DVec2::new(bx, by)),
                Crossing::None
            );
        }
    }
}
