//! What the host draws while a screen is focused.

use glam::{Quat, Vec3};

use super::FocusTarget;
use crate::geometry::Basis;
use crate::repos::RepoItem;

/// Where to place the focused screen's overlay.
///
/// Two layers sit just in front of the screen surface: a backing image and
/// the interactive content above it, both oriented by the screen basis.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlacement {
    /// Screen the overlay belongs to.
    pub target: FocusTarget,
    /// Panel header.
    pub title: String,
    /// Viewer-facing basis of the screen mesh.
    pub basis: Basis,
    /// Overlay orientation; local +X/+Y/+Z map to U/V/N.
    pub rotation: Quat,
    /// Center of the backing image plane.
    pub image_position: Vec3,
    /// Center of the interactive content plane.
    pub content_position: Vec3,
    /// Scale applied to content laid out in pixels.
    pub distance_factor: f32,
}

impl OverlayPlacement {
    /// Image plane size in world units.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.basis.width, self.basis.height)
    }
}

/// Repository panel contents for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState<'a> {
    /// Fetch not finished yet.
    Loading,
    /// Fetch finished with nothing to show.
    Empty,
    /// Repositories to show, in display order.
    Items(&'a [RepoItem]),
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Regular arrow.
    #[default]
    Default,
    /// Hand: a screen is under the pointer.
    Pointer,
}
