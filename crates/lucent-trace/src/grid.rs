//! Uniform spatial grid acceleration.

use std::sync::Arc;

use log::debug;

use lucent_geometry::{closest_hit, Aabb, GeoPoint, Group, Polygon, Ray, Shape};
use lucent_math::{is_zero, Point3};

use crate::error::{GridError, Result};

/// Density constant of the resolution heuristic: target shapes per cell.
const DENSITY: f64 = 4.0;

/// Slack applied when deciding whether a point lies inside a voxel, and
/// the nudge used to push boundary-aligned points off grid faces.
const MARGIN: f64 = 0.1;

/// One grid cell: its bounds and the shapes overlapping it.
#[derive(Debug, Clone)]
struct Voxel {
    bounds: Aabb,
    shapes: Group,
}

impl Voxel {
    /// Point-in-voxel test with [`MARGIN`] slack on every face, so a hit
    /// point computed on a shared cell boundary is accepted by either
    /// neighbor.
    fn contains(&self, p: &Point3) -> bool {
        p.x <= self.bounds.max.x + MARGIN
            && p.x >= self.bounds.min.x - MARGIN
            && p.y <= self.bounds.max.y + MARGIN
            && p.y >= self.bounds.min.y - MARGIN
            && p.z <= self.bounds.max.z + MARGIN
            && p.z >= self.bounds.min.z - MARGIN
    }
}

/// A uniform grid over the scene's bounding volume.
///
/// The volume is partitioned into integer-aligned cells, each holding
/// shared references to every shape whose bounding box overlaps it. Rays
/// march through the cells in visibility order (3D DDA), so empty space
/// is skipped and only nearby shapes are tested.
#[derive(Debug)]
pub struct UniformGrid {
    grid_min: [i64; 3],
    grid_max: [i64; 3],
    resolution: [usize; 3],
    cell_size: [i64; 3],
    cells: Vec<Voxel>,
    /// The six outer faces, used as a cheap whole-grid miss test.
    faces: Vec<Polygon>,
}

impl UniformGrid {
    /// Build a grid over `geometry`.
    ///
    /// Fails when any shape lacks a finite bounding box (infinite planes
    /// and tubes cannot be gridded).
    pub fn build(geometry: &Group) -> Result<Self> {
        let scene_box = geometry
            .bounding_box()
            .ok_or(GridError::UnboundedGeometry)?;

        let grid_min = [
            scene_box.min.x.floor() as i64,
            scene_box.min.y.floor() as i64,
            scene_box.min.z.floor() as i64,
        ];
        let mut grid_max = [
            scene_box.max.x.ceil() as i64,
            scene_box.max.y.ceil() as i64,
            scene_box.max.z.ceil() as i64,
        ];

        // Flat scenes get a minimal extent of one unit on the flat axis.
        let mut extent = [0i64; 3];
        for a in 0..3 {
            extent[a] = (grid_max[a] - grid_min[a]).max(1);
            grid_max[a] = grid_min[a] + extent[a];
        }

        let n = geometry.len();
        let volume = (extent[0] * extent[1] * extent[2]) as f64;
        let density = (DENSITY * n as f64 / volume).cbrt();

        let mut resolution = [0usize; 3];
        let mut cell_size = [0i64; 3];
        for a in 0..3 {
            let estimate = (extent[a] as f64 * density).round() as i64;
            let r = closest_divisor(extent[a], estimate);
            resolution[a] = r as usize;
            cell_size[a] = extent[a] / r;
        }

        let mut cells = Vec::with_capacity(resolution[0] * resolution[1] * resolution[2]);
        for i in 0..resolution[0] as i64 {
            for j in 0..resolution[1] as i64 {
                for k in 0..resolution[2] as i64 {
                    let lo = Point3::new(
                        (grid_min[0] + i * cell_size[0]) as f64,
                        (grid_min[1] + j * cell_size[1]) as f64,
                        (grid_min[2] + k * cell_size[2]) as f64,
                    );
                    let hi = Point3::new(
                        lo.x + cell_size[0] as f64,
                        lo.y + cell_size[1] as f64,
                        lo.z + cell_size[2] as f64,
                    );
                    cells.push(Voxel {
                        bounds: Aabb::new(lo, hi),
                        shapes: Group::new(),
                    });
                }
            }
        }

        let mut grid = Self {
            grid_min,
            grid_max,
            resolution,
            cell_size,
            cells,
            faces: boundary_faces(grid_min, grid_max)?,
        };

        for shape in geometry.shapes() {
            let shape_box = shape.bounding_box().ok_or(GridError::UnboundedGeometry)?;
            grid.insert(shape, &shape_box);
        }

        debug!(
            "grid built: {}x{}x{} cells of size {:?} over [{:?}, {:?}], {} shapes",
            grid.resolution[0],
            grid.resolution[1],
            grid.resolution[2],
            grid.cell_size,
            grid.grid_min,
            grid.grid_max,
            n
        );
        Ok(grid)
    }

    /// Cells per axis.
    pub fn resolution(&self) -> [usize; 3] {
        self.resolution
    }

    fn insert(&mut self, shape: &Arc<Shape>, shape_box: &Aabb) {
        for voxel in &mut self.cells {
            if voxel.bounds.overlaps(shape_box) {
                voxel.shapes.add_shared(Arc::clone(shape));
            }
        }
    }

    fn cell(&self, index: [i64; 3]) -> &Voxel {
        let i = index[0] as usize;
        let j = index[1] as usize;
        let k = index[2] as usize;
        &self.cells[(i * self.resolution[1] + j) * self.resolution[2] + k]
    }

    /// The indices of the cell containing `p`, `None` when `p` lies
    /// outside the grid volume.
    fn find_voxel(&self, p: &Point3) -> Option<[i64; 3]> {
        let mut index = [0i64; 3];
        for a in 0..3 {
            let c = p[a];
            if c < self.grid_min[a] as f64 || c > self.grid_max[a] as f64 {
                return None;
            }
            let i = ((c - self.grid_min[a] as f64) / self.cell_size[a] as f64) as i64;
            index[a] = i.min(self.resolution[a] as i64 - 1);
        }
        Some(index)
    }

    /// Nudge a point off any grid face it is exactly aligned with, so
    /// cell assignment is unambiguous.
    fn fix_point(&self, mut p: Point3) -> Point3 {
        for a in 0..3 {
            if is_zero(p[a] - self.grid_min[a] as f64) {
                p[a] += MARGIN;
            }
            if is_zero(p[a] - self.grid_max[a] as f64) {
                p[a] -= MARGIN;
            }
        }
        p
    }

    /// The point where `ray` starts inside the grid: its origin when
    /// already inside, otherwise the nearest boundary-face hit. `None`
    /// when the ray misses the grid volume entirely.
    fn entry_point(&self, ray: &Ray) -> Option<Point3> {
        let boundary_hits: Vec<Point3> = self
            .faces
            .iter()
            .flat_map(|f| f.hits(ray, f64::INFINITY))
            .map(|h| h.point)
            .collect();
        if boundary_hits.is_empty() {
            return None;
        }
        let origin = self.fix_point(ray.origin);
        if self.find_voxel(&origin).is_some() {
            return Some(origin);
        }
        let nearest = boundary_hits.into_iter().min_by(|a, b| {
            let da = (a - ray.origin).norm_squared();
            let db = (b - ray.origin).norm_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })?;
        Some(self.fix_point(nearest))
    }

    /// March `ray` through the grid and return the nearest intersection.
    ///
    /// A hit computed while testing one cell may geometrically belong to
    /// a later cell when the shape spans several; such hits are carried
    /// forward provisionally and only accepted once the traversal
    /// reaches a cell that actually contains the hit point.
    pub fn traverse(&self, ray: &Ray) -> Option<GeoPoint> {
        let mut marcher = Marcher::start(self, ray)?;
        let mut provisional: Option<GeoPoint> = None;
        loop {
            let voxel = self.cell(marcher.index);
            if !voxel.shapes.is_empty() {
                let carried_here = provisional
                    .as_ref()
                    .map_or(false, |saved| voxel.contains(&saved.point));
                let nearest = closest_hit(voxel.shapes.intersect(ray, f64::INFINITY));
                if carried_here {
                    // The carried hit belongs to this cell; only a nearer
                    // in-cell hit can displace it.
                    if let Some(nearest) = nearest {
                        if voxel.contains(&nearest.point)
                            && provisional.as_ref().map_or(true, |saved| nearest.t <= saved.t)
                        {
                            return Some(nearest);
                        }
                    }
                    return provisional;
                }
                if let Some(nearest) = nearest {
                    if voxel.contains(&nearest.point) {
                        return Some(nearest);
                    }
                    if provisional.as_ref().map_or(true, |saved| nearest.t <= saved.t) {
                        provisional = Some(nearest);
                    }
                }
            }
            if !marcher.advance() {
                return None;
            }
        }
    }

    /// Every shape referenced by any cell the ray passes through, each
    /// at most once.
    ///
    /// Shadow rays use this instead of [`UniformGrid::traverse`]: they
    /// need all candidate occluders along the path, not just the first.
    pub fn shapes_along(&self, ray: &Ray) -> Group {
        let mut along = Group::new();
        let Some(mut marcher) = Marcher::start(self, ray) else {
            return along;
        };
        let mut seen: Vec<Arc<Shape>> = Vec::new();
        loop {
            for shape in self.cell(marcher.index).shapes.shapes() {
                if !seen.iter().any(|s| Arc::ptr_eq(s, shape)) {
                    seen.push(Arc::clone(shape));
                }
            }
            if !marcher.advance() {
                break;
            }
        }
        along.extend_shared(seen);
        along
    }
}

/// 3D DDA state: current cell plus, per axis, the ray parameter of the
/// next cell-boundary crossing and the parameter step per cell.
struct Marcher {
    index: [i64; 3],
    step: [i64; 3],
    t_next: [f64; 3],
    t_delta: [f64; 3],
    resolution: [usize; 3],
}

impl Marcher {
    fn start(grid: &UniformGrid, ray: &Ray) -> Option<Self> {
        let entry = grid.entry_point(ray)?;
        let index = grid.find_voxel(&entry)?;

        let mut step = [0i64; 3];
        let mut t_next = [0f64; 3];
        let mut t_delta = [0f64; 3];
        for a in 0..3 {
            let d = ray.direction[a];
            let cell = grid.cell_size[a] as f64;
            let rel = entry[a] - grid.grid_min[a] as f64;
            // A zero component (including -0.0, which negated axis
            // vectors produce) never crosses a boundary on this axis.
            if is_zero(d) {
                step[a] = 0;
                t_next[a] = f64::INFINITY;
                t_delta[a] = f64::INFINITY;
                continue;
            }
            t_delta[a] = (cell / d).abs();
            step[a] = if d < 0.0 { -1 } else { 1 };
            // Parameter (from the entry point) of the next boundary in
            // the direction of travel.
            t_next[a] = if d < 0.0 {
                ((rel / cell).floor() * cell - rel) / d
            } else {
                (((rel / cell).floor() + 1.0) * cell - rel) / d
            };
        }
        Some(Self {
            index,
            step,
            t_next,
            t_delta,
            resolution: grid.resolution,
        })
    }

    /// Step into the neighboring cell across the nearest pending
    /// boundary. Returns `false` once the index leaves the grid.
    fn advance(&mut self) -> bool {
        let a = if self.t_next[0] <= self.t_next[1] && self.t_next[0] <= self.t_next[2] {
            0
        } else if self.t_next[1] <= self.t_next[2] {
            1
        } else {
            2
        };
        self.t_next[a] += self.t_delta[a];
        self.index[a] += self.step[a];
        (0..3).all(|a| self.index[a] >= 0 && (self.index[a] as usize) < self.resolution[a])
    }
}

/// The nearest integer to `estimate` that evenly divides `size`,
/// searching outward and never going below 1.
fn closest_divisor(size: i64, estimate: i64) -> i64 {
    if estimate <= 0 {
        return 1;
    }
    let mut lower = estimate.min(size);
    let mut upper = estimate.min(size);
    while lower > 0 && size % lower != 0 {
        lower -= 1;
    }
    while size % upper != 0 {
        upper += 1;
    }
    if lower == 0 {
        return upper;
    }
    if estimate - lower <= upper - estimate {
        lower
    } else {
        upper
    }
}

/// The six outer faces of the grid volume as quadrilaterals.
fn boundary_faces(min: [i64; 3], max: [i64; 3]) -> Result<Vec<Polygon>> {
    let corner = |x: i64, y: i64, z: i64| Point3::new(x as f64, y as f64, z as f64);
    let nnn = corner(min[0], min[1], min[2]);
    let nnx = corner(min[0], min[1], max[2]);
    let nxn = corner(min[0], max[1], min[2]);
    let nxx = corner(min[0], max[1], max[2]);
    let xnn = corner(max[0], min[1], min[2]);
    let xnx = corner(max[0], min[1], max[2]);
    let xxn = corner(max[0], max[1], min[2]);
    let xxx = corner(max[0], max[1], max[2]);
    Ok(vec![
        Polygon::new(vec![nnn, nxn, xxn, xnn])?,
        Polygon::new(vec![nnn, nxn, nxx, nnx])?,
        Polygon::new(vec![xnn, xxn, xxx, xnx])?,
        Polygon::new(vec![nxx, xxx, xnx, nnx])?,
        Polygon::new(vec![nxx, xxx, xxn, nxn])?,
        Polygon::new(vec![nnn, nnx, xnx, xnn])?,
    ])
}
