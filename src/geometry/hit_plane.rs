//! Invisible pointer targets laid over screen meshes.
//!
//! A hit plane is a plain rectangle aligned to the mesh's thin axis. It is
//! independent of the overlay basis: it never flips toward the camera
//! (the surface is double-sided) and it carries small hand-tuned tweaks so
//! the rectangle covers the authored screen without gaps.

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::basis::{in_plane_axes, thinnest_axis, world_axes, DEGENERATE_LENGTH_SQ};
use super::Ray;
use crate::scene::SceneMesh;

/// Width/height oversize factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Inflate {
    /// Same factor on both in-plane axes.
    Uniform(f32),
    /// Separate `[u, v]` factors.
    PerAxis([f32; 2]),
}

impl Inflate {
    /// `(u, v)` multipliers.
    #[must_use]
    pub fn factors(self) -> (f32, f32) {
        match self {
            Self::Uniform(k) => (k, k),
            Self::PerAxis([u, v]) => (u, v),
        }
    }
}

impl Default for Inflate {
    fn default() -> Self {
        Self::Uniform(1.02)
    }
}

/// Manual adjustments applied when building a hit plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HitPlaneTweak {
    /// Oversize factor (2% by default, hides sub-pixel gaps at the edges).
    pub inflate: Inflate,
    /// Extra rotation about the normal, in degrees.
    ///
    /// The plane's U/V axes are the shortest rotation of world X/Y onto the
    /// normal, not the mesh's own in-plane axes, while width and height are
    /// measured along the mesh axes. A mesh rolled about its normal (or one
    /// that is thin along X) therefore gets a turned rectangle; set this to
    /// the mesh's roll to line them up.
    pub roll_deg: f32,
    /// Position bias along `(u, v, n)`; the default pushes the plane
    /// slightly off the surface to avoid z-fighting.
    pub offset: [f32; 3],
}

impl Default for HitPlaneTweak {
    fn default() -> Self {
        Self {
            inflate: Inflate::default(),
            roll_deg: 0.0,
            offset: [0.0, 0.0, 0.0015],
        }
    }
}

/// Render state of the hit surface and its hover outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPlaneStyle {
    /// Surface opacity; effectively invisible but still raycast.
    pub surface_opacity: f32,
    /// The surface never writes depth, so it never occludes.
    pub surface_depth_write: bool,
    /// Both faces respond to the pointer.
    pub double_sided: bool,
    /// Outline color as `0xRRGGBB`.
    pub border_color: u32,
    /// Outline opacity.
    pub border_opacity: f32,
    /// The outline draws on top of everything.
    pub border_depth_test: bool,
}

impl HitPlaneStyle {
    /// Style used for every screen.
    pub const DEFAULT: Self = Self {
        surface_opacity: 0.0001,
        surface_depth_write: false,
        double_sided: true,
        border_color: 0x00e5ff,
        border_opacity: 0.95,
        border_depth_test: false,
    };
}

impl Default for HitPlaneStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a successful ray test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Distance along the ray.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Coordinate along the plane's `u` axis, relative to its center.
    pub u: f32,
    /// Coordinate along the plane's `v` axis, relative to its center.
    pub v: f32,
}

/// Oriented rectangle used for pointer interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct HitPlane {
    /// Rotation taking +X/+Y/+Z onto `u`/`v`/`n`.
    pub orientation: Quat,
    /// Center of the rectangle (after offsets).
    pub position: Vec3,
    /// Extent along `u`.
    pub width: f32,
    /// Extent along `v`.
    pub height: f32,
    /// In-plane right axis.
    pub u: Vec3,
    /// In-plane up axis.
    pub v: Vec3,
    /// Plane normal (the mesh's thin axis in world space).
    pub n: Vec3,
    hovered: bool,
}

impl HitPlane {
    /// Build the hit plane for `mesh`.
    #[must_use]
    pub fn build(mesh: &SceneMesh, tweak: &HitPlaneTweak) -> Self {
        let bounds = mesh.local_bounds();
        let size = bounds.size();
        let normal_axis = thinnest_axis(size);
        let [a, b] = in_plane_axes(normal_axis);

        let world = mesh.world_matrix();
        let scale = |axis: usize| world.transform_vector3(Vec3::AXES[axis]).length();

        let (inflate_u, inflate_v) = tweak.inflate.factors();
        let width = size[a] * scale(a) * inflate_u;
        let height = size[b] * scale(b) * inflate_v;

        // A normal collapsed by a zero scale comes back as the local axis.
        let normal = world_axes(world)[normal_axis];

        let align = Quat::from_rotation_arc(Vec3::Z, normal);
        let roll = Quat::from_axis_angle(normal, tweak.roll_deg.to_radians());
        let orientation = (roll * align).normalize();

        let u = (orientation * Vec3::X).normalize();
        let v = (orientation * Vec3::Y).normalize();
        let n = (orientation * Vec3::Z).normalize();

        let center = world.transform_point3(bounds.center());
        let [du, dv, dn] = tweak.offset;
        let position = center + u * du + v * dv + n * dn;

        Self {
            orientation,
            position,
            width,
            height,
            u,
            v,
            n,
            hovered: false,
        }
    }

    /// Whether the pointer is currently over this plane.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Record pointer over/out.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Double-sided ray/rectangle intersection.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<PlaneHit> {
        let denom = ray.direction.dot(self.n);
        if denom.abs() < DEGENERATE_LENGTH_SQ {
            return None;
        }
        let distance = (self.position - ray.origin).dot(self.n) / denom;
        if distance < 0.0 {
            return None;
        }

        let point = ray.at(distance);
        let local = point - self.position;
        let (u, v) = (local.dot(self.u), local.dot(self.v));
        let inside =
            u.abs() <= self.width * 0.5 && v.abs() <= self.height * 0.5;
        inside.then_some(PlaneHit {
            distance,
            point,
            u,
            v,
        })
    }

    /// Corners of the rectangle in loop order.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 4] {
        let hu = self.u * (self.width * 0.5);
        let hv = self.v * (self.height * 0.5);
        [
            self.position - hu - hv,
            self.position + hu - hv,
            self.position + hu + hv,
            self.position - hu + hv,
        ]
    }

    /// Border outline, shown only while hovered.
    #[must_use]
    pub fn outline(&self) -> Option<[Vec3; 4]> {
        self.hovered.then(|| self.corners())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Mat4;

    use super::*;
    use crate::geometry::Aabb;

    const EPS: f32 = 1e-4;

    fn panel(world: Mat4) -> SceneMesh {
        SceneMesh::new(
            "ScreenRight",
            Aabb::new(Vec3::new(-1.0, -0.5, -0.01), Vec3::new(1.0, 0.5, 0.01)),
            world,
        )
    }

    #[test]
    fn default_tweak_inflates_and_lifts() {
        let plane = HitPlane::build(&panel(Mat4::IDENTITY), &HitPlaneTweak::default());
        assert!((plane.width - 2.04).abs() < EPS);
        assert!((plane.height - 1.02).abs() < EPS);
        assert!((plane.n - Vec3::Z).length() < EPS);
        assert!((plane.position - Vec3::new(0.0, 0.0, 0.0015)).length() < EPS);
    }

    #[test]
    fn per_axis_inflate_and_scale() {
        let tweak = HitPlaneTweak {
            inflate: Inflate::PerAxis([1.0, 1.5]),
            roll_deg: 0.0,
            offset: [0.0; 3],
        };
        let world = Mat4::from_scale(Vec3::new(-2.0, 3.0, 1.0));
        let plane = HitPlane::build(&panel(world), &tweak);
        assert!((plane.width - 4.0).abs() < EPS);
        assert!((plane.height - 4.5).abs() < EPS);
    }

    #[test]
    fn roll_turns_in_plane_axes_but_keeps_normal() {
        let tweak = HitPlaneTweak {
            roll_deg: 90.0,
            ..HitPlaneTweak::default()
        };
        let world = Mat4::from_rotation_y(0.7);
        let plane = HitPlane::build(&panel(world), &tweak);
        let normal = world.transform_vector3(Vec3::Z);

        assert!((plane.n - normal).length() < EPS);
        assert!((plane.u - Vec3::Y).length() < EPS, "u = {:?}", plane.u);
        assert!(plane.u.dot(plane.v).abs() < EPS);
    }

    #[test]
    fn normal_follows_mesh_rotation() {
        let world = Mat4::from_rotation_x(-FRAC_PI_2);
        let plane = HitPlane::build(&panel(world), &HitPlaneTweak::default());
        assert!((plane.n - Vec3::Y).length() < EPS, "n = {:?}", plane.n);
    }

    #[test]
    fn flattened_normal_axis_falls_back_to_local_axis() {
        let world = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0));
        let plane = HitPlane::build(&panel(world), &HitPlaneTweak::default());
        assert!(plane.orientation.is_finite());
        assert!(plane.position.is_finite());
        assert!((plane.n - Vec3::Z).length() < EPS, "n = {:?}", plane.n);
        assert!((plane.width - 2.04).abs() < EPS);
    }

    #[test]
    fn flattened_in_plane_axis_gives_zero_height() {
        let world = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        let plane = HitPlane::build(&panel(world), &HitPlaneTweak::default());
        assert!(plane.position.is_finite());
        assert!((plane.n - Vec3::Z).length() < EPS);
        assert_eq!(plane.height, 0.0);
    }

    #[test]
    fn roll_tweak_lines_up_a_rolled_mesh() {
        let world = Mat4::from_rotation_z(FRAC_PI_2);
        let top = Ray::new(Vec3::new(0.0, 0.9, 3.0), Vec3::NEG_Z);

        let plain = HitPlane::build(&panel(world), &HitPlaneTweak::default());
        assert!(plain.intersect(&top).is_none());

        let tweak = HitPlaneTweak {
            roll_deg: 90.0,
            ..HitPlaneTweak::default()
        };
        let rolled = HitPlane::build(&panel(world), &tweak);
        assert!((rolled.u - Vec3::Y).length() < EPS, "u = {:?}", rolled.u);
        assert!(rolled.intersect(&top).is_some());
    }

    #[test]
    fn offsets_follow_plane_axes() {
        let tweak = HitPlaneTweak {
            inflate: Inflate::Uniform(1.0),
            roll_deg: 0.0,
            offset: [0.1, -0.2, 0.3],
        };
        let world = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let plane = HitPlane::build(&panel(world), &tweak);
        assert!((plane.position - Vec3::new(5.1, -0.2, 0.3)).length() < EPS);
    }

    #[test]
    fn rays_hit_from_both_sides_inside_bounds() {
        let plane = HitPlane::build(&panel(Mat4::IDENTITY), &HitPlaneTweak::default());

        let front = Ray::new(Vec3::new(0.5, 0.2, 3.0), Vec3::NEG_Z);
        let hit = plane.intersect(&front).unwrap();
        assert!((hit.u - 0.5).abs() < EPS);
        assert!((hit.v - 0.2).abs() < EPS);
        assert!((hit.distance - (3.0 - 0.0015)).abs() < EPS);

        let back = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        assert!(plane.intersect(&back).is_some());
    }

    #[test]
    fn rays_miss_outside_parallel_or_behind() {
        let plane = HitPlane::build(&panel(Mat4::IDENTITY), &HitPlaneTweak::default());

        let outside = Ray::new(Vec3::new(1.2, 0.0, 3.0), Vec3::NEG_Z);
        assert!(plane.intersect(&outside).is_none());

        let parallel = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(plane.intersect(&parallel).is_none());

        let away = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z);
        assert!(plane.intersect(&away).is_none());
    }

    #[test]
    fn outline_only_while_hovered() {
        let mut plane =
            HitPlane::build(&panel(Mat4::IDENTITY), &HitPlaneTweak::default());
        assert!(plane.outline().is_none());

        plane.set_hovered(true);
        let corners = plane.outline().unwrap();
        assert!((corners[2] - corners[0] - Vec3::new(2.04, 1.02, 0.0)).length() < EPS);

        plane.set_hovered(false);
        assert!(plane.outline().is_none());
    }

    #[test]
    fn tweak_parses_uniform_and_per_axis_inflate() {
        let uniform: HitPlaneTweak = toml::from_str("inflate = 1.1").unwrap();
        assert_eq!(uniform.inflate, Inflate::Uniform(1.1));
        assert_eq!(uniform.offset, [0.0, 0.0, 0.0015]);

        let per_axis: HitPlaneTweak =
            toml::from_str("inflate = [1.0, 1.2]\nroll_deg = 3.0").unwrap();
        assert_eq!(per_axis.inflate, Inflate::PerAxis([1.0, 1.2]));
        assert_eq!(per_axis.roll_deg, 3.0);
    }

    #[test]
    fn style_hides_surface_and_shows_border_on_top() {
        let style = HitPlaneStyle::default();
        assert!(!style.surface_depth_write);
        assert!(style.double_sided);
        assert!(!style.border_depth_test);
        assert_eq!(style.border_color, 0x00e5ff);
    }
}
