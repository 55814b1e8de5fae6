//! Geometric derivations over scene meshes: bounding boxes, the
//! viewer-facing overlay basis, and pointer hit planes.

mod aabb;
pub mod basis;
pub mod hit_plane;
mod ray;

pub use aabb::Aabb;
pub use basis::{derive_basis, Basis, CameraFrame, UpSource};
pub use hit_plane::{HitPlane, HitPlaneStyle, HitPlaneTweak, Inflate, PlaneHit};
pub use ray::Ray;
