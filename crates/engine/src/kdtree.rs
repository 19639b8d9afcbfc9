//! 2D k-d tree for spatial indexing
//!
//! Provides O(log n + k) within-radius queries for scattered sample
//! points. Replaces O(n·m) brute-force search in grid evaluation.
//!
//! Reference:
//! Bentley, J.L. (1975). Multidimensional binary search trees used
//! for associative searching. CACM, 18(9).

use clusterpolate_core::SamplePoint;

/// A 2D k-d tree for radius queries on sample points.
///
/// Built once per run and shared read-only across workers. The tree owns
/// a copy of the points; neighbor indices refer to the original input
/// order.
#[derive(Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    /// Points in input order
    points: Vec<SamplePoint>,
}

#[derive(Debug)]
struct KdNode {
    /// Index into `points`
    point_idx: usize,
    /// Split dimension: 0 = x, 1 = y
    split_dim: u8,
    /// Left child index (None = leaf)
    left: Option<usize>,
    /// Right child index (None = leaf)
    right: Option<usize>,
}

/// A point found by a radius query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the point in the original input slice
    pub index: usize,
    /// Squared distance to the query location
    pub distance_sq: f64,
}

impl KdTree {
    /// Build a k-d tree from sample points.
    ///
    /// Construction is O(n log n) using median-of-coordinate splitting.
    /// Duplicate and collinear points are fine.
    pub fn build(points: &[SamplePoint]) -> Self {
        if points.is_empty() {
            return Self {
                nodes: Vec::new(),
                points: Vec::new(),
            };
        }

        let mut indices: Vec<usize> = (0..points.len()).collect();
        let stored_points: Vec<SamplePoint> = points.to_vec();
        let mut nodes = Vec::with_capacity(points.len());

        build_recursive(&stored_points, &mut indices, 0, &mut nodes);

        Self {
            nodes,
            points: stored_points,
        }
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The indexed points, in input order.
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// The point behind a neighbor index.
    pub fn point(&self, index: usize) -> &SamplePoint {
        &self.points[index]
    }

    /// Find all points within a given radius of (qx, qy).
    ///
    /// Results carry exact squared distances and come in no particular
    /// order (but deterministically for a given tree). Points exactly at
    /// the radius are included; distance weighting decides whether they
    /// contribute. An empty result is valid.
    pub fn within_radius(&self, qx: f64, qy: f64, radius: f64) -> Vec<Neighbor> {
        let mut results = Vec::new();
        self.within_radius_into(qx, qy, radius, &mut results);
        results
    }

    /// Like [`within_radius`](Self::within_radius), reusing the caller's
    /// buffer. The buffer is cleared first.
    pub fn within_radius_into(&self, qx: f64, qy: f64, radius: f64, results: &mut Vec<Neighbor>) {
        results.clear();
        if self.nodes.is_empty() || radius <= 0.0 {
            return;
        }
        self.radius_recursive(0, qx, qy, radius * radius, results);
    }

    fn radius_recursive(
        &self,
        node_idx: usize,
        qx: f64,
        qy: f64,
        radius_sq: f64,
        results: &mut Vec<Neighbor>,
    ) {
        let node = &self.nodes[node_idx];
        let p = &self.points[node.point_idx];

        let dx = qx - p.x;
        let dy = qy - p.y;
        let dist_sq = dx * dx + dy * dy;

        if dist_sq <= radius_sq {
            results.push(Neighbor {
                index: node.point_idx,
                distance_sq: dist_sq,
            });
        }

        let diff = if node.split_dim == 0 { dx } else { dy };

        // Near side always, far side only if the splitting plane is within radius
        if let Some(left) = node.left {
            if diff <= 0.0 || diff * diff <= radius_sq {
                self.radius_recursive(left, qx, qy, radius_sq, results);
            }
        }

        if let Some(right) = node.right {
            if diff >= 0.0 || diff * diff <= radius_sq {
                self.radius_recursive(right, qx, qy, radius_sq, results);
            }
        }
    }
}

/// Recursively build the k-d tree.
fn build_recursive(
    points: &[SamplePoint],
    indices: &mut [usize],
    depth: usize,
    nodes: &mut Vec<KdNode>,
) -> usize {
    let n = indices.len();
    let split_dim = (depth % 2) as u8;

    // Sort by split dimension
    indices.sort_by(|&a, &b| {
        let va = if split_dim == 0 {
            points[a].x
        } else {
            points[a].y
        };
        let vb = if split_dim == 0 {
            points[b].x
        } else {
            points[b].y
        };
        va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let median = n / 2;
    let point_idx = indices[median];

    let node_idx = nodes.len();
    nodes.push(KdNode {
        point_idx,
        split_dim,
        left: None,
        right: None,
    });

    if median > 0 {
        let mut left_indices = indices[..median].to_vec();
        let left_idx = build_recursive(points, &mut left_indices, depth + 1, nodes);
        nodes[node_idx].left = Some(left_idx);
    }

    if median + 1 < n {
        let mut right_indices = indices[median + 1..].to_vec();
        let right_idx = build_recursive(points, &mut right_indices, depth + 1, nodes);
        nodes[node_idx].right = Some(right_idx);
    }

    node_idx
}
