//! Headless walkthrough of a screen room: hover a screen, click it, fly in,
//! poke the overlay, read the repository panel, then fly home.
//!
//! Usage: `vitrine [options.toml]`

use std::f32::consts::FRAC_PI_2;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use glam::{Mat4, Vec3};
use vitrine::camera::{CameraRig, OrbitCamera};
use vitrine::engine::{FocusTarget, PanelState, ScreenRoom};
use vitrine::geometry::{Aabb, Ray};
use vitrine::input::OverlayEvent;
use vitrine::options::Options;
use vitrine::repos::{FetchMode, GithubRepoSource};
use vitrine::scene::{Material, Scene, SceneMesh};
use web_time::Instant;

const VIEWPORT: (f32, f32) = (1280.0, 720.0);
const FRAME: Duration = Duration::from_millis(16);
const PANEL_TIMEOUT: Duration = Duration::from_secs(10);

fn demo_scene(options: &Options) -> Scene {
    let panel = Aabb::new(Vec3::new(-0.55, -0.32, -0.015), Vec3::new(0.55, 0.32, 0.015));
    let materials = || vec![Material::new("bezel"), Material::new("glass")];

    let mut scene = Scene::new();
    scene.add(
        SceneMesh::new(
            options.screens.left.mesh.as_str(),
            panel,
            Mat4::from_translation(Vec3::new(-0.8, 1.25, -1.6)) * Mat4::from_rotation_y(0.35),
        )
        .with_materials(materials()),
    );
    scene.add(
        SceneMesh::new(
            options.screens.right.mesh.as_str(),
            panel,
            Mat4::from_translation(Vec3::new(1.7, 1.25, -0.4))
                * Mat4::from_rotation_y(-FRAC_PI_2 + 0.2),
        )
        .with_materials(materials()),
    );
    scene
}

/// Pointer ray through the pixel where `point` appears on screen.
fn ray_at(camera: &OrbitCamera, point: Vec3) -> Ray {
    let clip = camera.camera.build_matrix() * point.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    let (w, h) = VIEWPORT;
    let x = (ndc.x + 1.0) * 0.5 * w;
    let y = (1.0 - ndc.y) * 0.5 * h;
    camera.camera.ray_through_pixel(x, y, w, h)
}

/// Tick until the flight ends, sleeping one frame between ticks.
fn fly(room: &mut ScreenRoom, camera: &mut OrbitCamera) {
    while room.tick(camera, Instant::now()) {
        std::thread::sleep(FRAME);
    }
}

fn wait_for_panel(room: &mut ScreenRoom, camera: &mut OrbitCamera, target: FocusTarget) {
    let start = Instant::now();
    while room.panel(target) == PanelState::Loading && start.elapsed() < PANEL_TIMEOUT {
        let _ = room.tick(camera, Instant::now());
        std::thread::sleep(FRAME);
    }
    match room.panel(target) {
        PanelState::Loading => log::warn!("{target:?} panel still loading"),
        PanelState::Empty => log::info!("{target:?} panel: no repositories"),
        PanelState::Items(items) => {
            for item in items {
                log::info!("  {} ({} stars) {}", item.name, item.stars, item.url);
            }
        }
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut scene = demo_scene(&options);
    let mut camera = OrbitCamera::new(&options.camera, VIEWPORT.0 / VIEWPORT.1);
    let source = Arc::new(GithubRepoSource::new(options.repos.clone()));
    let mut room = ScreenRoom::new(options, source, FetchMode::Background);
    room.sync_scene(&scene);

    for target in FocusTarget::ALL {
        let Some(plane) = room.hit_plane(target) else {
            continue;
        };
        let ray = ray_at(&camera, plane.position);
        let _ = room.pointer_moved(&ray);
        log::info!("pointer over {target:?}: cursor {:?}", room.cursor());

        if room.pointer_pressed(&ray, &mut scene, &mut camera, Instant::now()).is_none() {
            log::warn!("{target:?} screen not under its own center ray");
            continue;
        }
        fly(&mut room, &mut camera);
        log::info!("camera at {:?}", camera.position());

        if let Some(overlay) = room.overlay(&scene, &camera.frame()) {
            let (width, height) = overlay.size();
            log::info!(
                "{} overlay: {width:.3} x {height:.3} at {:?}, normal {:?}",
                overlay.title,
                overlay.content_position,
                overlay.basis.n
            );
        }

        let _ = room.overlay_event(OverlayEvent::PointerEnter, &mut camera);
        let flow = room.overlay_event(OverlayEvent::Wheel { delta: 1.0 }, &mut camera);
        log::info!("wheel over overlay: {flow:?}, controls locked: {}", !room.lock().controls_enabled());
        let _ = room.overlay_event(OverlayEvent::PointerLeave, &mut camera);

        wait_for_panel(&mut room, &mut camera, target);

        room.clear_focus(&mut scene, &mut camera, Instant::now());
        fly(&mut room, &mut camera);
        log::info!("back home at {:?}", camera.position());
    }

    room.release(&mut scene, &mut camera);
}
