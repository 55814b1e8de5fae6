//! Read-mostly view of a loaded model: named meshes with cached bounds,
//! world transforms and material masks.
//!
//! Model loading itself lives outside this crate. Whatever loads the model
//! exposes it through [`SceneProvider`]; [`Scene`] is the in-memory
//! implementation used by the demo binary and the tests.

mod mesh;

use glam::Mat4;
pub use mesh::{Material, SceneMesh};

// ---------------------------------------------------------------------------
// Provider seam
// ---------------------------------------------------------------------------

/// Source of named meshes.
pub trait SceneProvider {
    /// First mesh with exactly this name.
    fn find_mesh(&self, name: &str) -> Option<&SceneMesh>;

    /// Mutable access to the first mesh with exactly this name.
    fn find_mesh_mut(&mut self, name: &str) -> Option<&mut SceneMesh>;

    /// Generation counter; changes whenever any mesh transform changes.
    fn generation(&self) -> u64 {
        0
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat list of meshes in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    meshes: Vec<SceneMesh>,
    /// Bumped when a mesh is added. Transform changes are counted on the
    /// meshes themselves.
    generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mesh.
    pub fn add(&mut self, mesh: SceneMesh) {
        self.meshes.push(mesh);
        self.generation += 1;
    }

    /// All meshes in insertion order.
    #[must_use]
    pub fn meshes(&self) -> &[SceneMesh] {
        &self.meshes
    }

    /// Move a mesh; returns `false` if no mesh has that name.
    pub fn set_world_matrix(&mut self, name: &str, world: Mat4) -> bool {
        let Some(mesh) = self.meshes.iter_mut().find(|m| m.name() == name)
        else {
            return false;
        };
        mesh.set_world_matrix(world);
        true
    }
}

impl SceneProvider for Scene {
    fn find_mesh(&self, name: &str) -> Option<&SceneMesh> {
        self.meshes.iter().find(|m| m.name() == name)
    }

    fn find_mesh_mut(&mut self, name: &str) -> Option<&mut SceneMesh> {
        self.meshes.iter_mut().find(|m| m.name() == name)
    }

    fn generation(&self) -> u64 {
        self.generation
            + self.meshes.iter().map(SceneMesh::revision).sum::<u64>()
    }
}
