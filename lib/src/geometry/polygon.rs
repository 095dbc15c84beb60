//! The closed polygon primitive.
//!
//! A [`Polygon`] is an ordered loop of points; the edge from the last point
//! back to the first is implicit. Construction normalizes the loop by
//! dropping consecutive duplicate points and collinear interior points, and
//! the bounding box is cached and kept consistent across every mutation.
//!
//! Winding is never stored. It is derived from the signed turn-angle sum,
//! so a polygon can be re-wound freely without invalidating other state.

use std::fmt;
use std::ops::{Deref, Index};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{
    BoundingBox, GeometryError, GeometryResult, Line, LineKind, Point, Points, Triangle,
};
use crate::precision;
use crate::sampling;
use crate::triangulation::{constrained, TriangulationResult};

/// A closed polygon defined by a sequence of points.
///
/// The polygon is implicitly closed, the last point connects back to the
/// first. Outer boundaries are conventionally counter-clockwise and holes
/// clockwise, matching the canonical form used by the boolean layer.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    points: Points,
    bbox: BoundingBox,
}

/// A collection of polygons.
pub type Polygons = Vec<Polygon>;

/// An ordered point sequence whose consecutive triples form triangles.
pub type TriangleStrip = Points;

impl Polygon {
    /// Create a new empty polygon.
    #[inline]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            bbox: BoundingBox::new(),
        }
    }

    /// Create a polygon from a vector of points.
    ///
    /// The loop is normalized: consecutive points that coincide under the
    /// active epsilon are collapsed (the wrap-around pair included), and
    /// collinear interior points are dropped when more than two points
    /// remain.
    pub fn from_points(points: Points) -> Self {
        let points = normalize_loop(points);
        let bbox = BoundingBox::from_points(&points);
        Self { points, bbox }
    }

    /// Get the points of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the polygon and return its points.
    #[inline]
    pub fn into_points(self) -> Points {
        self.points
    }

    /// Get the number of points in the polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point to the loop without normalization.
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
        self.bbox.merge_point(point);
    }

    /// Get a point at the given index, wrapping around for indices >= len.
    #[inline]
    pub fn point_at(&self, index: usize) -> Point {
        self.points[index % self.points.len()]
    }

    /// Get the edge from point `i` to point `i + 1`, wrapping around.
    #[inline]
    pub fn edge(&self, index: usize) -> Line {
        let len = self.points.len();
        Line::new(self.points[index % len], self.points[(index + 1) % len])
    }

    /// Get all edges of the polygon, the closing edge included.
    pub fn edges(&self) -> Vec<Line> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        (0..self.points.len()).map(|i| self.edge(i)).collect()
    }

    /// Get the number of edges in the polygon.
    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        }
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise loops, negative for clockwise ones,
    /// zero for degenerate input.
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..self.points.len() {
            let j = (i + 1) % self.points.len();
            sum += self.points[i].cross(&self.points[j]);
        }
        sum / 2.0
    }

    /// Unsigned area of the polygon.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Sum of the signed turn angles over the loop, each normalized into
    /// (-pi, pi].
    fn turning_sum(&self) -> f64 {
        use std::f64::consts::PI;
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let d1 = self.points[(i + 1) % n] - self.points[i];
            let d2 = self.points[(i + 2) % n] - self.points[(i + 1) % n];
            let mut turn = d2.y.atan2(d2.x) - d1.y.atan2(d1.x);
            if turn > PI {
                turn -= 2.0 * PI;
            }
            if turn <= -PI {
                turn += 2.0 * PI;
            }
            sum += turn;
        }
        sum
    }

    /// Whether the loop winds clockwise.
    ///
    /// Only meaningful for polygons without self-intersections.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.turning_sum() < 0.0
    }

    /// Whether the loop winds counter-clockwise.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.turning_sum() > 0.0
    }

    /// Ensure the loop winds counter-clockwise, reversing if necessary.
    pub fn make_counter_clockwise(&mut self) {
        if self.is_clockwise() {
            self.reverse();
        }
    }

    /// Ensure the loop winds clockwise, reversing if necessary.
    pub fn make_clockwise(&mut self) {
        if self.is_counter_clockwise() {
            self.reverse();
        }
    }

    /// Reverse the order of points in the polygon.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Return a reversed copy of the polygon.
    pub fn reversed(&self) -> Self {
        let mut result = self.clone();
        result.reverse();
        result
    }

    /// Convexity by scanning the cross-product sign of consecutive edge
    /// pairs.
    ///
    /// When both turn directions occur and their counts cancel exactly, the
    /// loop is reported as [`GeometryError::AmbiguousConvexity`] instead of
    /// guessing either answer.
    pub fn is_convex(&self) -> GeometryResult<bool> {
        let n = self.points.len();
        let eps = precision::epsilon();
        let mut seen_positive = false;
        let mut seen_negative = false;
        let mut balance: i64 = 0;
        for i in 0..n {
            let d1 = self.points[(i + 1) % n] - self.points[i];
            let d2 = self.points[(i + 2) % n] - self.points[(i + 1) % n];
            let cross = d1.cross(&d2);
            if cross > eps {
                seen_positive = true;
                balance += 1;
            } else if cross < -eps {
                seen_negative = true;
                balance -= 1;
            }
        }
        if seen_positive && seen_negative {
            if balance == 0 {
                return Err(GeometryError::AmbiguousConvexity { vertices: n });
            }
            return Ok(false);
        }
        Ok(true)
    }

    /// Perimeter of the polygon.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        (0..self.points.len()).map(|i| self.edge(i).length()).sum()
    }

    /// Area-weighted centroid, falling back to the vertex average for
    /// degenerate loops.
    pub fn centroid(&self) -> Point {
        match self.points.len() {
            0 => Point::zero(),
            1 => self.points[0],
            2 => (self.points[0] + self.points[1]) * 0.5,
            n => {
                let mut cx = 0.0;
                let mut cy = 0.0;
                let mut doubled_area = 0.0;
                for i in 0..n {
                    let j = (i + 1) % n;
                    let cross = self.points[i].cross(&self.points[j]);
                    cx += (self.points[i].x + self.points[j].x) * cross;
                    cy += (self.points[i].y + self.points[j].y) * cross;
                    doubled_area += cross;
                }
                if precision::approx_zero(doubled_area) {
                    let mut sum = Point::zero();
                    for p in &self.points {
                        sum += *p;
                    }
                    return sum / n as f64;
                }
                Point::new(cx / (3.0 * doubled_area), cy / (3.0 * doubled_area))
            }
        }
    }

    /// The cached bounding box of the polygon.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn rebuild_bounding_box(&mut self) {
        self.bbox = BoundingBox::from_points(&self.points);
    }

    /// Check whether a point lies inside the polygon.
    ///
    /// Uses an even-odd ray cast; points on a boundary edge (within the
    /// active epsilon) count as contained.
    pub fn contains(&self, p: &Point) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let eps = precision::epsilon();
        if !self.bbox.expanded(eps).contains_point(p) {
            return false;
        }
        for i in 0..self.points.len() {
            if self.edge(i).contains_point(p) {
                return true;
            }
        }
        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > p.y) != (pj.y > p.y) {
                let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Find the closest point on the polygon boundary to `p`.
    pub fn closest_point(&self, p: &Point) -> Point {
        if self.points.is_empty() {
            return Point::zero();
        }
        if self.points.len() == 1 {
            return self.points[0];
        }
        let mut closest = self.points[0];
        let mut best = f64::MAX;
        for i in 0..self.points.len() {
            let proj = self.edge(i).project_point(p);
            let dist = p.distance_squared(&proj);
            if dist < best {
                best = dist;
                closest = proj;
            }
        }
        closest
    }

    /// Distance from `p` to the polygon boundary.
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        p.distance(&self.closest_point(p))
    }

    /// Translate the polygon by a vector.
    pub fn translate(&mut self, v: Point) {
        for p in &mut self.points {
            *p = *p + v;
        }
        self.bbox.translate(v);
    }

    /// Return a translated copy of the polygon.
    pub fn translated(&self, v: Point) -> Self {
        let mut result = self.clone();
        result.translate(v);
        result
    }

    /// Scale the polygon about the origin.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.points {
            *p = *p * factor;
        }
        self.rebuild_bounding_box();
    }

    /// Return a scaled copy of the polygon.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut result = self.clone();
        result.scale(factor);
        result
    }

    /// Rotate the polygon about the origin by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        for p in &mut self.points {
            *p = p.rotate(angle);
        }
        self.rebuild_bounding_box();
    }

    /// Return a rotated copy of the polygon.
    pub fn rotated(&self, angle: f64) -> Self {
        let mut result = self.clone();
        result.rotate(angle);
        result
    }

    /// Rotate the polygon about a center point.
    pub fn rotate_around(&mut self, center: &Point, angle: f64) {
        for p in &mut self.points {
            *p = p.rotate_around(center, angle);
        }
        self.rebuild_bounding_box();
    }

    /// Return a copy rotated about a center point.
    pub fn rotated_around(&self, center: &Point, angle: f64) -> Self {
        let mut result = self.clone();
        result.rotate_around(center, angle);
        result
    }

    /// Interior chords of the polygon along a cutting line.
    ///
    /// Collects every intersection between the cut and the boundary edges,
    /// adds the cut's own endpoints when a segment endpoint lies inside,
    /// deduplicates under the active epsilon, sorts by parametric position
    /// along the cut, and pairs the result into chords. An odd intersection
    /// count falls back to a greedy scan keeping only adjacent pairs whose
    /// midpoint lies inside; that fallback is not guaranteed exhaustive for
    /// tangent configurations.
    pub fn chords_along(&self, cut: &Line, kind: LineKind) -> Vec<Line> {
        if self.points.len() < 3 || cut.length_squared() <= precision::epsilon() {
            return Vec::new();
        }
        let mut hits: Points = Vec::new();
        for i in 0..self.points.len() {
            if let Some(x) = cut.intersect(kind, &self.edge(i), LineKind::Segment) {
                hits.push(x);
            }
        }
        if kind == LineKind::Segment {
            for endpoint in [cut.a, cut.b] {
                if self.contains(&endpoint) {
                    hits.push(endpoint);
                }
            }
        }
        let mut unique: Points = Vec::with_capacity(hits.len());
        for hit in hits {
            if !unique.iter().any(|u| u.approx_eq(&hit)) {
                unique.push(hit);
            }
        }
        if unique.len() < 2 {
            return Vec::new();
        }
        unique.sort_by(|a, b| cut.param_of(a).total_cmp(&cut.param_of(b)));

        let mut chords = Vec::new();
        if unique.len() % 2 == 0 {
            for pair in unique.chunks_exact(2) {
                chords.push(Line::new(pair[0], pair[1]));
            }
        } else {
            let mut i = 0;
            while i + 1 < unique.len() {
                let candidate = Line::new(unique[i], unique[i + 1]);
                if self.contains(&candidate.midpoint()) {
                    chords.push(candidate);
                    i += 2;
                } else {
                    i += 1;
                }
            }
        }
        chords
    }

    /// Split the polygon along a cutting line into sub-polygons.
    ///
    /// The boundary is walked from each cut point to the next, jumping
    /// across the chord met there, until the walk closes. Duplicate results
    /// (the same point cycle up to rotation) are filtered. A cut that
    /// produces no chords returns the polygon unchanged.
    pub fn split_along(&self, cut: &Line, kind: LineKind) -> Polygons {
        let chords = self.chords_along(cut, kind);
        if chords.is_empty() {
            return vec![self.clone()];
        }

        // Distinct chord endpoints and the pairing between them.
        let mut cut_points: Points = Vec::with_capacity(chords.len() * 2);
        let mut partner: Vec<usize> = Vec::new();
        for chord in &chords {
            let ia = intern_point(&mut cut_points, chord.a);
            let ib = intern_point(&mut cut_points, chord.b);
            if partner.len() < cut_points.len() {
                partner.resize(cut_points.len(), usize::MAX);
            }
            partner[ia] = ib;
            partner[ib] = ia;
        }

        // Boundary ring with the cut points spliced onto their edges.
        let mut ring: Vec<(Point, Option<usize>)> = Vec::new();
        let n = self.points.len();
        for i in 0..n {
            let vertex = self.points[i];
            let marker = cut_points.iter().position(|c| c.approx_eq(&vertex));
            ring.push((vertex, marker));

            let edge = self.edge(i);
            let mut on_edge: Vec<(f64, usize)> = Vec::new();
            for (k, c) in cut_points.iter().enumerate() {
                if c.approx_eq(&edge.a) || c.approx_eq(&edge.b) {
                    continue;
                }
                if edge.contains_point(c) {
                    on_edge.push((edge.param_of(c), k));
                }
            }
            on_edge.sort_by(|a, b| a.0.total_cmp(&b.0));
            for (_, k) in on_edge {
                ring.push((cut_points[k], Some(k)));
            }
        }

        let ring_len = ring.len();
        let max_steps = 2 * (ring_len + chords.len());
        let mut results: Vec<Points> = Vec::new();
        for start in 0..ring_len {
            if ring[start].1.is_none() {
                continue;
            }
            let mut cycle: Points = vec![ring[start].0];
            let mut pos = start;
            let mut closed = false;
            for _ in 0..max_steps {
                pos = (pos + 1) % ring_len;
                if pos == start {
                    closed = true;
                    break;
                }
                let (point, marker) = ring[pos];
                cycle.push(point);
                if let Some(cut_idx) = marker {
                    let other = partner[cut_idx];
                    match ring.iter().position(|entry| entry.1 == Some(other)) {
                        Some(jump) if jump == start => {
                            closed = true;
                            break;
                        }
                        Some(jump) => {
                            cycle.push(ring[jump].0);
                            pos = jump;
                        }
                        None => break,
                    }
                }
            }
            if closed && cycle.len() >= 3 {
                results.push(cycle);
            }
        }

        let mut parts: Polygons = Vec::new();
        for cycle in results {
            let poly = Polygon::from_points(cycle);
            if poly.len() < 3 || poly.area() <= precision::epsilon() {
                continue;
            }
            if !parts
                .iter()
                .any(|existing| same_cycle(existing.points(), poly.points()))
            {
                parts.push(poly);
            }
        }
        if parts.is_empty() {
            return vec![self.clone()];
        }
        parts
    }

    /// Offset the polygon by mitering every vertex.
    ///
    /// Each vertex yields two candidate points at `distance` along the
    /// bisector of its adjacent edge normals, producing two full candidate
    /// loops on opposite sides of the boundary. `pick_smaller` selects the
    /// loop with the smaller area, otherwise the larger one.
    pub fn offset(&self, distance: f64, pick_smaller: bool) -> Polygon {
        let n = self.points.len();
        if n < 3 {
            return self.clone();
        }
        let mut plus_side: Points = Vec::with_capacity(n);
        let mut minus_side: Points = Vec::with_capacity(n);
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];
            let n1 = (curr - prev).normalize().perp();
            let n2 = (next - curr).normalize().perp();
            let bisector = n1 + n2;
            let len_sq = bisector.length_squared();
            // A near-zero bisector means a reversal spike; fall back to one
            // edge normal to keep the candidate finite.
            let miter = if len_sq <= precision::epsilon() {
                n1 * distance
            } else {
                bisector * (2.0 * distance / len_sq)
            };
            plus_side.push(curr + miter);
            minus_side.push(curr - miter);
        }
        let a = Polygon::from_points(plus_side);
        let b = Polygon::from_points(minus_side);
        let (smaller, larger) = if a.area() <= b.area() { (a, b) } else { (b, a) };
        if pick_smaller {
            smaller
        } else {
            larger
        }
    }

    /// Repair self-intersections in place.
    ///
    /// Repeatedly finds the first pair of non-adjacent edges crossing with
    /// parameters strictly inside (0, 1) on both sides, splits the ring at
    /// the crossing into two loops over an index-based working buffer,
    /// keeps the loop with the larger perimeter, and restarts the scan
    /// until no crossing remains.
    pub fn remove_self_intersections(&mut self) {
        loop {
            let Some((i, j, crossing)) = self.first_self_crossing() else {
                break;
            };
            let mut kept: Points = Vec::with_capacity(self.points.len() + 1 - (j - i));
            kept.extend_from_slice(&self.points[..=i]);
            kept.push(crossing);
            kept.extend_from_slice(&self.points[j + 1..]);

            let mut other: Points = Vec::with_capacity(j - i + 1);
            other.push(crossing);
            other.extend_from_slice(&self.points[i + 1..=j]);

            let chosen = if loop_perimeter(&kept) >= loop_perimeter(&other) {
                kept
            } else {
                other
            };
            self.points = normalize_loop(chosen);
            self.rebuild_bounding_box();
        }
    }

    fn first_self_crossing(&self) -> Option<(usize, usize, Point)> {
        let n = self.points.len();
        if n < 4 {
            return None;
        }
        let eps = precision::epsilon();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let ei = self.edge(i);
                let ej = self.edge(j);
                if let Some((t, u)) = ei.intersection_params(&ej) {
                    if t > eps && t < 1.0 - eps && u > eps && u < 1.0 - eps {
                        return Some((i, j, ei.point_at(t)));
                    }
                }
            }
        }
        None
    }

    /// Decompose the polygon into triangles.
    ///
    /// Returns the vertex list the triangle indices refer to together with
    /// the triangles. A polygon whose bounding box has near-zero extent in
    /// either direction decomposes to nothing; collaborator failures
    /// propagate.
    pub fn triangulate(&self) -> TriangulationResult<(Points, Vec<Triangle>)> {
        let eps = precision::epsilon();
        if self.points.len() < 3 || self.bbox.width() <= eps || self.bbox.height() <= eps {
            return Ok((Vec::new(), Vec::new()));
        }
        let triangles = constrained::triangulate_ring(&self.points)?;
        Ok((self.points.clone(), triangles))
    }

    /// Decompose the polygon into triangle strips.
    ///
    /// Strips are chained from the triangle set along shared edges; every
    /// consecutive point triple of a strip is one triangle of the
    /// decomposition.
    pub fn triangle_strips(&self) -> TriangulationResult<Vec<TriangleStrip>> {
        let (vertices, triangles) = self.triangulate()?;
        Ok(assemble_strips(&vertices, &triangles))
    }

    /// Sample a uniformly distributed interior point.
    ///
    /// Triangulates, picks a triangle with probability proportional to its
    /// area, then folds two unit samples barycentrically. Returns `None`
    /// when the polygon yields no triangles with positive total area.
    pub fn sample_point<R: Rng>(&self, rng: &mut R) -> Option<Point> {
        let (vertices, triangles) = self.triangulate().ok()?;
        sampling::sample_triangles(&vertices, &triangles, rng)
    }

    /// Create a rectangular polygon from two opposite corners.
    pub fn rectangle(min: Point, max: Point) -> Self {
        Self::from_points(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ])
    }

    /// Create an axis-aligned square centered at a point.
    pub fn square(center: Point, half_size: f64) -> Self {
        Self::rectangle(
            Point::new(center.x - half_size, center.y - half_size),
            Point::new(center.x + half_size, center.y + half_size),
        )
    }

    /// Create a regular polygon with `n` sides, centered at the origin.
    pub fn regular(n: usize, radius: f64) -> Self {
        if n < 3 {
            return Self::new();
        }
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            points.push(Point::new(radius * angle.cos(), radius * angle.sin()));
        }
        Self::from_points(points)
    }

    /// Create a circle approximation with `segments` edges.
    pub fn circle(center: Point, radius: f64, segments: usize) -> Self {
        let mut poly = Self::regular(segments, radius);
        poly.translate(center);
        poly
    }
}

/// Drop consecutive duplicates (wrap-around included), then collinear
/// interior points when more than two points remain.
fn normalize_loop(points: Points) -> Points {
    let mut deduped: Points = Vec::with_capacity(points.len());
    for p in points {
        match deduped.last() {
            Some(last) if last.approx_eq(&p) => {}
            _ => deduped.push(p),
        }
    }
    while deduped.len() > 1 {
        let first = deduped[0];
        let last = deduped[deduped.len() - 1];
        if first.approx_eq(&last) {
            deduped.pop();
        } else {
            break;
        }
    }
    if deduped.len() <= 2 {
        return deduped;
    }

    let n = deduped.len();
    let mut kept: Points = Vec::with_capacity(n);
    for i in 0..n {
        let prev = match kept.last() {
            Some(p) => *p,
            None => deduped[(i + n - 1) % n],
        };
        let curr = deduped[i];
        let next = deduped[(i + 1) % n];
        let carrier = Line::new(prev, next);
        if carrier.distance_to_point(&curr) > precision::epsilon() {
            kept.push(curr);
        }
    }
    kept
}

fn intern_point(points: &mut Points, p: Point) -> usize {
    if let Some(i) = points.iter().position(|q| q.approx_eq(&p)) {
        i
    } else {
        points.push(p);
        points.len() - 1
    }
}

/// Whether two point cycles are equal up to rotation.
fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let n = a.len();
    if n == 0 {
        return true;
    }
    (0..n).any(|offset| (0..n).all(|i| a[i].approx_eq(&b[(i + offset) % n])))
}

fn loop_perimeter(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| points[i].distance(&points[(i + 1) % n])).sum()
}

/// Chain triangles into strips along shared edges.
fn assemble_strips(vertices: &[Point], triangles: &[Triangle]) -> Vec<TriangleStrip> {
    let mut used = vec![false; triangles.len()];
    let mut strips = Vec::new();
    for seed in 0..triangles.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let t = triangles[seed];
        let mut chain = vec![t.a, t.b, t.c];
        loop {
            let tail = (chain[chain.len() - 2], chain[chain.len() - 1]);
            let mut extended = false;
            for (k, other) in triangles.iter().enumerate() {
                if used[k] || !other.has_edge(tail.0, tail.1) {
                    continue;
                }
                let third = other
                    .vertices()
                    .iter()
                    .copied()
                    .find(|&v| v != tail.0 && v != tail.1);
                if let Some(third) = third {
                    used[k] = true;
                    chain.push(third);
                    extended = true;
                    break;
                }
            }
            if !extended {
                break;
            }
        }
        strips.push(chain.into_iter().map(|i| vertices[i]).collect());
    }
    strips
}

impl fmt::Debug for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} points)", self.points.len())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

impl Deref for Polygon {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl Index<usize> for Polygon {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl IntoIterator for Polygon {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.into_points()
    }
}
