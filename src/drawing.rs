//! Pseudo-3D orbit view rendered with egui_plot.
//!
//! Path samples are rotated by the current view matrix and projected by
//! dropping the depth axis. Segments behind the view plane draw first in a
//! dimmed color so the front pass overdraws them.

use crate::math::{rotate_point_matrix, rotation_from_drag};
use crate::trajectory::{MissionState, BASE_RADIUS_KM};
use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};
use nalgebra::Matrix3;

pub const COLOR_EARTH: egui::Color32 = egui::Color32::from_rgb(0, 191, 255);
pub const COLOR_TRUE_PATH: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
pub const COLOR_GHOST_PATH: egui::Color32 = egui::Color32::from_rgb(255, 75, 75);

const GHOST_DASH_LENGTH: f32 = 8.0;

fn dim_color(color: egui::Color32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color.r() as f32 * 0.4) as u8,
        (color.g() as f32 * 0.4) as u8,
        (color.b() as f32 * 0.4) as u8,
        200,
    )
}

/// Contiguous runs of projected points on one side of the view plane.
/// `front` selects the half with rotated z >= 0.
fn depth_segments(
    points: &[(f64, f64, f64)],
    rot: &Matrix3<f64>,
    front: bool,
) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for &(x, y, z) in points {
        let (rx, ry, rz) = rotate_point_matrix(x, y, z, rot);
        if (rz >= 0.0) == front {
            current.push([rx, ry]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Draws the orbit view and returns the updated view rotation and zoom.
#[allow(clippy::too_many_arguments)]
pub fn draw_orbit_view(
    ui: &mut egui::Ui,
    id: &str,
    state: &MissionState,
    show_ghost: bool,
    mut rotation: Matrix3<f64>,
    mut zoom: f64,
    width: f32,
    height: f32,
) -> (Matrix3<f64>, f64) {
    let reach = state.snapshot.ghost_radius_km.abs().max(BASE_RADIUS_KM);
    let margin = reach * 1.25 / zoom;

    let plot = Plot::new(id)
        .data_aspect(1.0)
        .width(width)
        .height(height)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-margin)
        .include_x(margin)
        .include_y(-margin)
        .include_y(margin)
        .legend(Legend::default());

    let response = plot.show(ui, |plot_ui| {
        for seg in depth_segments(&state.true_path, &rotation, false) {
            plot_ui.line(
                Line::new(PlotPoints::new(seg))
                    .color(dim_color(COLOR_TRUE_PATH))
                    .width(1.5),
            );
        }
        if show_ghost {
            for seg in depth_segments(&state.ghost_path, &rotation, false) {
                plot_ui.line(
                    Line::new(PlotPoints::new(seg))
                        .color(dim_color(COLOR_GHOST_PATH))
                        .style(LineStyle::Dashed {
                            length: GHOST_DASH_LENGTH,
                        })
                        .width(1.5),
                );
            }
        }

        // the origin is a fixed point of every rotation
        plot_ui.points(
            Points::new(PlotPoints::new(vec![[0.0, 0.0]]))
                .color(COLOR_EARTH)
                .radius(10.0)
                .filled(true)
                .name("Earth"),
        );

        for seg in depth_segments(&state.true_path, &rotation, true) {
            plot_ui.line(
                Line::new(PlotPoints::new(seg))
                    .color(COLOR_TRUE_PATH)
                    .width(2.5)
                    .name("Real Path"),
            );
        }
        if show_ghost {
            for seg in depth_segments(&state.ghost_path, &rotation, true) {
                plot_ui.line(
                    Line::new(PlotPoints::new(seg))
                        .color(COLOR_GHOST_PATH)
                        .style(LineStyle::Dashed {
                            length: GHOST_DASH_LENGTH,
                        })
                        .width(2.5)
                        .name("Ghost Path"),
                );
            }
        }
    });

    if response.response.dragged() {
        let drag = response.response.drag_delta();
        let delta_rot = rotation_from_drag(drag.x as f64 * 0.01, drag.y as f64 * 0.01);
        rotation = delta_rot * rotation;
    }

    if response.response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let factor = 1.0 + scroll as f64 * 0.001;
            zoom = (zoom * factor).clamp(0.5, 3.0);
        }
    }

    (rotation, zoom)
}
