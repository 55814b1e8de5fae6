//! Screen room: wires hit planes, focus animation, overlay placement and the
//! interaction lock together.
//!
//! The host owns the scene and the camera and calls into [`ScreenRoom`]
//! from its event handlers and once per frame from its render loop:
//!
//! ```ignore
//! room.sync_scene(&scene);
//! room.pointer_moved(&ray);
//! if room.pointer_pressed(&ray, &mut scene, &mut camera, now).is_some() { /* ... */ }
//! room.tick(&mut camera, now);
//! if let Some(overlay) = room.overlay(&scene, &camera.frame()) { /* draw */ }
//! ```

mod overlay;

use std::sync::Arc;

use web_time::Instant;

pub use self::overlay::{CursorHint, OverlayPlacement, PanelState};
use crate::animation::{FocusAnimator, FocusPose};
use crate::camera::CameraRig;
use crate::geometry::{derive_basis, CameraFrame, HitPlane, PlaneHit, Ray};
use crate::input::{EventFlow, InteractionLock, OverlayEvent};
use crate::options::Options;
use crate::repos::{FetchMode, RepoCatalog, RepoSource};
use crate::scene::SceneProvider;

/// One of the two interactive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The left screen.
    Left,
    /// The right screen.
    Right,
}

impl FocusTarget {
    /// Both screens, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Selection, hover, camera flight and overlay state for the two screens.
pub struct ScreenRoom {
    options: Options,
    planes: [Option<HitPlane>; 2],
    /// Scene generation the planes were built from.
    built_from: Option<u64>,
    active: Option<FocusTarget>,
    hovered: Option<FocusTarget>,
    animator: FocusAnimator,
    lock: InteractionLock,
    catalog: RepoCatalog,
}

impl ScreenRoom {
    /// Room configured by `options`, listing repositories from `source`.
    #[must_use]
    pub fn new(options: Options, source: Arc<dyn RepoSource>, mode: FetchMode) -> Self {
        let animator = FocusAnimator::from_options(&options.camera, &options.focus);
        Self {
            options,
            planes: [None, None],
            built_from: None,
            active: None,
            hovered: None,
            animator,
            lock: InteractionLock::new(),
            catalog: RepoCatalog::new(source, mode),
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Focused screen, if any.
    #[must_use]
    pub fn active(&self) -> Option<FocusTarget> {
        self.active
    }

    /// Screen under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<FocusTarget> {
        self.hovered
    }

    /// Whether a camera flight is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Overlay interaction lock state.
    #[must_use]
    pub fn lock(&self) -> &InteractionLock {
        &self.lock
    }

    /// Hit plane of a screen, if its mesh was present at the last sync.
    #[must_use]
    pub fn hit_plane(&self, target: FocusTarget) -> Option<&HitPlane> {
        self.planes[target.index()].as_ref()
    }

    // -----------------------------------------------------------------------
    // Scene
    // -----------------------------------------------------------------------

    /// Rebuild the hit planes if the scene changed since the last build.
    pub fn sync_scene(&mut self, scene: &dyn SceneProvider) {
        let generation = scene.generation();
        if self.built_from != Some(generation) {
            self.rebuild_hit_planes(scene);
        }
    }

    /// Rebuild both hit planes from the current mesh transforms.
    pub fn rebuild_hit_planes(&mut self, scene: &dyn SceneProvider) {
        for target in FocusTarget::ALL {
            let binding = self.options.screens.binding(target);
            let plane = scene.find_mesh(&binding.mesh).map(|mesh| {
                let mut plane = HitPlane::build(mesh, &binding.tweak);
                plane.set_hovered(self.hovered == Some(target));
                plane
            });
            if plane.is_none() {
                log::debug!("no mesh named {:?}; {target:?} screen is not clickable", binding.mesh);
            }
            self.planes[target.index()] = plane;
        }
        self.built_from = Some(scene.generation());
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    /// Nearest screen hit by `ray`.
    #[must_use]
    pub fn pick(&self, ray: &Ray) -> Option<(FocusTarget, PlaneHit)> {
        FocusTarget::ALL
            .into_iter()
            .filter_map(|target| {
                let hit = self.hit_plane(target)?.intersect(ray)?;
                Some((target, hit))
            })
            .min_by(|a, b| a.1.distance.total_cmp(&b.1.distance))
    }

    /// Update hover state for a pointer ray. Returns the hovered screen.
    pub fn pointer_moved(&mut self, ray: &Ray) -> Option<FocusTarget> {
        let hovered = self.pick(ray).map(|(target, _)| target);
        if hovered != self.hovered {
            log::debug!("hovered screen: {hovered:?}");
        }
        self.hovered = hovered;
        for target in FocusTarget::ALL {
            if let Some(plane) = self.planes[target.index()].as_mut() {
                plane.set_hovered(hovered == Some(target));
            }
        }
        hovered
    }

    /// Pointer went down (or clicked). Selects the screen under `ray`.
    pub fn pointer_pressed(
        &mut self,
        ray: &Ray,
        scene: &mut dyn SceneProvider,
        rig: &mut dyn CameraRig,
        now: Instant,
    ) -> Option<FocusTarget> {
        let (target, _) = self.pick(ray)?;
        self.select(target, scene, rig, now);
        Some(target)
    }

    /// Cursor to show for the current hover state.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.hovered.is_some() {
            CursorHint::Pointer
        } else {
            CursorHint::Default
        }
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// Focus `target`: mask its mesh, request its repositories and fly the
    /// camera to frame it. Selecting the focused screen again does nothing.
    ///
    /// A screen whose mesh is missing still becomes active (the panel
    /// shows), but the camera stays put.
    pub fn select(
        &mut self,
        target: FocusTarget,
        scene: &mut dyn SceneProvider,
        rig: &mut dyn CameraRig,
        now: Instant,
    ) {
        if self.active == Some(target) {
            return;
        }
        if let Some(previous) = self.active.replace(target) {
            self.set_masked(scene, previous, false);
            self.lock.release(rig);
        }
        self.set_masked(scene, target, true);
        self.catalog.request(target);

        let binding = self.options.screens.binding(target);
        let Some(mesh) = scene.find_mesh(&binding.mesh) else {
            log::warn!("selected {target:?} but mesh {:?} is missing", binding.mesh);
            return;
        };
        let bounds = mesh.world_bounds();
        let pose = FocusPose::framing(
            bounds.center(),
            bounds.diagonal(),
            rig.position(),
            rig.forward(),
            &self.options.focus,
        );
        log::info!("focusing {target:?} ({})", binding.title);
        self.animator.focus(rig, pose, self.options.focus.focus_duration(), now);
    }

    /// Drop the selection: unmask the screen, hand the camera controls back
    /// and fly home.
    pub fn clear_focus(
        &mut self,
        scene: &mut dyn SceneProvider,
        rig: &mut dyn CameraRig,
        now: Instant,
    ) {
        if let Some(previous) = self.active.take() {
            self.set_masked(scene, previous, false);
            log::info!("leaving {previous:?}");
        }
        self.lock.release(rig);
        self.animator.reset(rig, now);
    }

    fn set_masked(&self, scene: &mut dyn SceneProvider, target: FocusTarget, masked: bool) {
        let name = &self.options.screens.binding(target).mesh;
        if let Some(mesh) = scene.find_mesh_mut(name) {
            mesh.set_color_write(!masked);
        }
    }

    // -----------------------------------------------------------------------
    // Frame
    // -----------------------------------------------------------------------

    /// Advance the camera flight and collect finished repository fetches.
    /// Returns `true` while another frame is needed for the flight.
    pub fn tick(&mut self, rig: &mut dyn CameraRig, now: Instant) -> bool {
        let _ = self.catalog.poll();
        self.animator.tick(rig, now)
    }

    /// Placement of the focused screen's overlay for the current camera.
    #[must_use]
    pub fn overlay(
        &self,
        scene: &dyn SceneProvider,
        camera: &CameraFrame,
    ) -> Option<OverlayPlacement> {
        let target = self.active?;
        let binding = self.options.screens.binding(target);
        let basis = derive_basis(scene.find_mesh(&binding.mesh), camera)?;
        let overlay = &self.options.overlay;
        Some(OverlayPlacement {
            target,
            title: binding.title.clone(),
            rotation: basis.rotation(),
            image_position: basis.lifted_center(overlay.image_lift),
            content_position: basis.lifted_center(overlay.content_lift),
            distance_factor: overlay.distance_factor,
            basis,
        })
    }

    /// Route an event raised on the overlay. Without a focused screen there
    /// is no overlay and the event passes through untouched.
    pub fn overlay_event(&mut self, event: OverlayEvent, rig: &mut dyn CameraRig) -> EventFlow {
        if self.active.is_none() {
            return EventFlow::Continue;
        }
        self.lock.handle(event, rig)
    }

    /// Repository panel contents for `target`.
    #[must_use]
    pub fn panel(&self, target: FocusTarget) -> PanelState<'_> {
        if self.catalog.is_loading(target) {
            return PanelState::Loading;
        }
        match self.catalog.items(target) {
            None => PanelState::Loading,
            Some([]) => PanelState::Empty,
            Some(items) => PanelState::Items(items),
        }
    }

    /// Tear down: restore both screens' materials, free the camera
    /// controls and stop any flight.
    pub fn release(&mut self, scene: &mut dyn SceneProvider, rig: &mut dyn CameraRig) {
        for target in FocusTarget::ALL {
            self.set_masked(scene, target, false);
        }
        self.active = None;
        self.hovered = None;
        self.lock.release(rig);
        self.animator.cancel();
    }
}
