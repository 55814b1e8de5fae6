//! Viewer-facing orthonormal frame for a thin slab mesh.
//!
//! A screen is modelled as a slab that is thin along one local axis; that
//! axis is its normal. The frame returned here is what overlay content is
//! laid out in: +U right, +V up, +N out of the screen toward the viewer.
//!
//! Every vector step that could collapse to zero length has a named
//! fallback (see [`UpSource`] and [`world_axes`]), so derivation never fails
//! for a present mesh.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::scene::SceneMesh;

/// Squared length below which a vector counts as degenerate.
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-8;

/// Camera state consulted by [`derive_basis`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera up vector in world space.
    pub up: Vec3,
}

impl CameraFrame {
    /// Frame at `position` with an explicit up vector.
    #[must_use]
    pub fn new(position: Vec3, up: Vec3) -> Self {
        Self { position, up }
    }

    /// Frame at `position` with world +Y as up.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y)
    }
}

/// Which candidate produced the in-plane up vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpSource {
    /// World +Y projected onto the plane.
    WorldUp,
    /// The camera's up vector projected onto the plane (normal was
    /// parallel to world up).
    CameraUp,
    /// A transformed local mesh axis projected onto the plane.
    MeshAxis(usize),
    /// Arbitrary unit vector orthogonal to the normal.
    Orthonormal,
}

/// Oriented frame and footprint of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// In-plane right axis.
    pub u: Vec3,
    /// In-plane up axis.
    pub v: Vec3,
    /// Normal, pointing toward the camera.
    pub n: Vec3,
    /// World-space center of the local bounding box.
    pub center: Vec3,
    /// Footprint extent along `u`.
    pub width: f32,
    /// Footprint extent along `v`.
    pub height: f32,
    /// Local axis index used as the normal.
    pub normal_axis: usize,
    /// Whether the normal was flipped to face the camera.
    pub flipped: bool,
    /// Where `v` came from.
    pub up_source: UpSource,
}

impl Basis {
    /// Rotation taking local +X/+Y/+Z onto `u`/`v`/`n`.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.u, self.v, self.n)).normalize()
    }

    /// Point on the plane through `center`, lifted `lift` along the normal.
    #[must_use]
    pub fn lifted_center(&self, lift: f32) -> Vec3 {
        self.center + self.n * lift
    }
}

// ---------------------------------------------------------------------------
// Decision functions
// ---------------------------------------------------------------------------

/// Index of the smallest extent. Ties go to the lowest index, so a cube
/// resolves to axis 0 and a box thin along both Y and Z resolves to 1.
#[must_use]
pub fn thinnest_axis(size: Vec3) -> usize {
    let mut axis = 0;
    if size.y < size.x {
        axis = 1;
    }
    if size.z < size[axis] {
        axis = 2;
    }
    axis
}

/// The two local axes spanning the plane orthogonal to `normal_axis`, in
/// ascending order.
#[must_use]
pub fn in_plane_axes(normal_axis: usize) -> [usize; 2] {
    match normal_axis {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// Local unit axes carried through the linear part of `world`, normalized.
///
/// The sign of the scale is kept, so reflected meshes report reflected
/// axes. An axis collapsed by a zero scale falls back to its canonical
/// local direction.
#[must_use]
pub fn world_axes(world: &Mat4) -> [Vec3; 3] {
    Vec3::AXES.map(|axis| {
        let mapped = world.transform_vector3(axis);
        if mapped.length_squared() < DEGENERATE_LENGTH_SQ {
            axis
        } else {
            mapped.normalize()
        }
    })
}

/// Flip `normal` if it points away from `camera` as seen from `anchor`.
///
/// Returns the corrected normal and whether it was flipped. A camera lying
/// exactly on the plane keeps the authored normal.
#[must_use]
pub fn face_camera(normal: Vec3, anchor: Vec3, camera: Vec3) -> (Vec3, bool) {
    if (camera - anchor).dot(normal) < 0.0 {
        (-normal, true)
    } else {
        (normal, false)
    }
}

/// Component of `v` orthogonal to the unit normal `n`.
#[must_use]
pub fn project_on_plane(v: Vec3, n: Vec3) -> Vec3 {
    v - n * v.dot(n)
}

/// Pick an up vector lying in the plane orthogonal to `n`.
///
/// Candidates in order: world up, `camera_up`, each mesh axis other than
/// the normal axis, then any orthonormal vector. The result is unit length.
#[must_use]
pub fn choose_up(
    n: Vec3,
    camera_up: Vec3,
    mesh_axes: &[Vec3; 3],
    normal_axis: usize,
) -> (Vec3, UpSource) {
    let world = project_on_plane(Vec3::Y, n);
    if world.length_squared() >= DEGENERATE_LENGTH_SQ {
        return (world.normalize(), UpSource::WorldUp);
    }

    let camera = project_on_plane(camera_up, n);
    if camera.length_squared() >= DEGENERATE_LENGTH_SQ {
        return (camera.normalize(), UpSource::CameraUp);
    }

    for (idx, axis) in mesh_axes.iter().enumerate() {
        if idx == normal_axis {
            continue;
        }
        let projected = project_on_plane(*axis, n);
        if projected.length_squared() >= DEGENERATE_LENGTH_SQ {
            return (projected.normalize(), UpSource::MeshAxis(idx));
        }
    }

    (n.any_orthonormal_vector(), UpSource::Orthonormal)
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the viewer-facing basis of `mesh` for the given camera.
///
/// Returns `None` when the mesh is absent; callers render nothing in that
/// case. The result is orthonormal and right-handed, `n` points toward the
/// camera, and `width`/`height` are the exact extents of the transformed
/// bounding box along `u`/`v`.
#[must_use]
pub fn derive_basis(
    mesh: Option<&SceneMesh>,
    camera: &CameraFrame,
) -> Option<Basis> {
    let mesh = mesh?;
    let bounds = mesh.local_bounds();
    let world = mesh.world_matrix();

    let normal_axis = thinnest_axis(bounds.size());
    let axes = world_axes(world);
    let center = world.transform_point3(bounds.center());

    let (n, flipped) = face_camera(axes[normal_axis], center, camera.position);
    let (v, up_source) = choose_up(n, camera.up, &axes, normal_axis);

    let mut u = v.cross(n).normalize();
    let v = n.cross(u).normalize();
    if u.cross(v).dot(n) < 0.0 {
        u = -u;
    }

    let (mut u_min, mut u_max) = (f32::INFINITY, f32::NEG_INFINITY);
    let (mut v_min, mut v_max) = (f32::INFINITY, f32::NEG_INFINITY);
    for corner in bounds.corners() {
        let p = world.transform_point3(corner);
        let (pu, pv) = (p.dot(u), p.dot(v));
        u_min = u_min.min(pu);
        u_max = u_max.max(pu);
        v_min = v_min.min(pv);
        v_max = v_max.max(pv);
    }

    Some(Basis {
        u,
        v,
        n,
        center,
        width: u_max - u_min,
        height: v_max - v_min,
        normal_axis,
        flipped,
        up_source,
    })
}
