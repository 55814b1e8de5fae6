use glam::{Mat4, Vec3};

use crate::geometry::Aabb;

/// Surface material of a scene mesh.
///
/// Only the color-write mask is consumed: it is switched off while a
/// focused overlay replaces the mesh's live surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    /// Material name as authored in the model.
    pub name: String,
    /// Whether the material writes color (depth is always written).
    pub color_write: bool,
}

impl Material {
    /// A color-writing material with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_write: true,
        }
    }
}

/// Renderable object exposed by the scene provider.
///
/// The local bounding box is computed once from the vertex positions and
/// cached; the world matrix carries rotation, (possibly negative) scale and
/// translation.
#[derive(Debug, Clone)]
pub struct SceneMesh {
    name: String,
    local_bounds: Aabb,
    world: Mat4,
    materials: Vec<Material>,
    /// Bumped on every transform change.
    revision: u64,
}

impl SceneMesh {
    /// Mesh with explicit local bounds.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        local_bounds: Aabb,
        world: Mat4,
    ) -> Self {
        Self {
            name: name.into(),
            local_bounds,
            world,
            materials: vec![Material::new("default")],
            revision: 0,
        }
    }

    /// Mesh whose local bounds are computed from its vertex positions.
    ///
    /// An empty vertex list yields a degenerate box at the origin.
    #[must_use]
    pub fn from_vertices(
        name: impl Into<String>,
        vertices: &[Vec3],
        world: Mat4,
    ) -> Self {
        let bounds = Aabb::from_points(vertices)
            .unwrap_or_else(|| Aabb::new(Vec3::ZERO, Vec3::ZERO));
        Self::new(name, bounds, world)
    }

    /// Replace the material list.
    #[must_use]
    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials = materials;
        self
    }

    /// Mesh name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cached local-space bounding box.
    #[must_use]
    pub fn local_bounds(&self) -> &Aabb {
        &self.local_bounds
    }

    /// Local-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world
    }

    /// Replace the local-to-world matrix.
    pub fn set_world_matrix(&mut self, world: Mat4) {
        self.world = world;
        self.revision += 1;
    }

    /// Number of transform changes since construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// World-aligned box around the transformed local bounds.
    #[must_use]
    pub fn world_bounds(&self) -> Aabb {
        self.local_bounds.transformed(&self.world)
    }

    /// Material list.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Toggle color writes on every material of this mesh.
    pub fn set_color_write(&mut self, enabled: bool) {
        for material in &mut self.materials {
            material.color_write = enabled;
        }
    }
}
