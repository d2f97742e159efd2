//! Headless frustum culling demo.
//!
//! Scatters a field of unit boxes, spins a debug frustum above the field,
//! drives a camera along a scripted path, and reports how many boxes the
//! dual-frustum gate keeps visible each frame.

use galaxy_3d_culling::galaxy3d::{self, log::{LogEntry, LogSeverity, Logger}};
use galaxy_3d_culling::galaxy3d::camera::Pose;
use galaxy_3d_culling::galaxy3d::scene::{
    BoundingBox, CullingConfig, DualFrustumGate, TrackedObject,
};
use glam::{Mat4, Vec3};
use rand::Rng;

const BOX_COUNT: usize = 500;
const FRAME_COUNT: u32 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;
const REPORT_EVERY: u32 = 60;

/// Forwards culling-core log entries to the `log` facade.
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: "galaxy3d", level, "[{}] {} ({}:{})", entry.source, entry.message, file, line)
            }
            _ => log::log!(target: "galaxy3d", level, "[{}] {}", entry.source, entry.message),
        }
    }
}

/// Scripted input, standing in for the key bindings of the interactive viewer.
#[derive(Debug, Clone, Copy)]
enum InputEvent {
    /// Nudge the debug frustum up or down along +Z
    RaiseFrustum(f32),
    /// Move the camera along its look direction (negative moves backwards)
    MoveCamera(f32),
    /// Strafe the camera along its right axis (negative strafes left)
    StrafeCamera(f32),
}

fn scripted_input(frame: u32) -> Option<InputEvent> {
    match frame % 120 {
        15 => Some(InputEvent::StrafeCamera(5.0)),
        30 => Some(InputEvent::RaiseFrustum(5.0)),
        45 => Some(InputEvent::MoveCamera(-2.0)),
        60 => Some(InputEvent::MoveCamera(2.0)),
        75 => Some(InputEvent::StrafeCamera(-5.0)),
        90 => Some(InputEvent::RaiseFrustum(-5.0)),
        _ => None,
    }
}

fn spawn_boxes(gate: &mut DualFrustumGate, count: usize) {
    let mut rng = rand::thread_rng();
    let bounds = BoundingBox::from_extents(Vec3::ONE);
    for _ in 0..count {
        let position = Vec3::new(
            rng.gen_range(-50..50) as f32,
            rng.gen_range(-50..50) as f32,
            rng.gen_range(0..100) as f32,
        );
        gate.register(TrackedObject::at(position, bounds));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    galaxy3d::log::set_logger(LogBridge);
    galaxy3d::log::set_min_severity(LogSeverity::Info);

    let config = CullingConfig::default();
    log::info!(
        "frustum: hfov {:.1}°, vfov {:.2}°, aspect {}, near {}, far {}",
        config.params.horizontal_fov(),
        config.params.vertical_fov(),
        config.params.aspect_ratio(),
        config.params.near_distance(),
        config.params.far_distance(),
    );

    let mut gate = DualFrustumGate::new(config)?;
    spawn_boxes(&mut gate, BOX_COUNT);
    log::info!("spawned {} boxes", gate.object_count());

    gate.set_primary_pose(Pose::new(Mat4::IDENTITY, Vec3::new(0.0, 0.0, 15.0)));
    let mut camera = Pose::new(Mat4::IDENTITY, Vec3::new(-10.0, 0.0, 15.0));

    let mut peak_visible = 0;
    for frame in 0..FRAME_COUNT {
        match scripted_input(frame) {
            Some(InputEvent::RaiseFrustum(dz)) => {
                gate.primary_pose_mut()?.translate(Vec3::new(0.0, 0.0, dz));
            }
            Some(InputEvent::MoveCamera(distance)) => camera.move_along_look(distance),
            Some(InputEvent::StrafeCamera(distance)) => {
                camera.translate(camera.right_direction() * distance);
            }
            None => {}
        }

        gate.primary_pose_mut()?
            .rotate_about_global(Vec3::Z, FRAME_DT * std::f32::consts::PI / 5.0)?;
        camera.rotate_about_global(Vec3::Z, -FRAME_DT * 0.1)?;

        let report = gate.update_frame(&camera)?;
        peak_visible = peak_visible.max(report.visible);

        if frame % REPORT_EVERY == 0 {
            log::info!(
                "frame {:>4}: {:>3}/{} visible ({} debug frustum, {} camera only)",
                frame, report.visible, report.evaluated,
                report.primary_hits, report.secondary_only,
            );
        }
    }

    log::info!("done: peak {} of {} boxes visible", peak_visible, gate.object_count());
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
