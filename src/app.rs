//! Application shell and eframe integration.
//!
//! Owns the control and view state, runs the trajectory math once per frame,
//! and lays out the metrics row, orbit view, worked equation, and the
//! database inspector.

use crate::config::{ControlState, DbMode, ANOMALY_MAX_PCT, ANOMALY_MIN_PCT};
use crate::drawing::{draw_orbit_view, COLOR_GHOST_PATH, COLOR_TRUE_PATH};
use crate::math::rotation_from_drag;
use crate::tables::{master_rows, satellite_rows, telemetry_rows};
use crate::trajectory::{
    DriftStatus, MissionState, Snapshot, ANGULAR_RATE_RAD, BASE_RADIUS_KM, SNAPSHOT_TIME,
};
use eframe::egui;
use nalgebra::Matrix3;

#[derive(Clone, Copy, PartialEq)]
enum InspectorTab {
    Normalized,
    Unnormalized,
}

pub struct App {
    controls: ControlState,
    inspector_tab: InspectorTab,
    rotation: Matrix3<f64>,
    zoom: f64,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            controls: ControlState::new(),
            inspector_tab: InspectorTab::Normalized,
            // tilt the view so the climb along z is visible at startup
            rotation: rotation_from_drag(0.6, 0.9),
            zoom: 1.0,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Satellite Control");
            ui.add_space(10.0);
            ui.label("Database State");
            ui.separator();
            let prev_mode = self.controls.db_mode;
            for mode in DbMode::ALL {
                ui.radio_value(&mut self.controls.db_mode, mode, mode.label());
            }
            if self.controls.db_mode != prev_mode {
                log::debug!("database state switched to {}", self.controls.db_mode.label());
            }
            if self.controls.db_mode == DbMode::Unnormalized {
                ui.add_space(10.0);
                ui.add(
                    egui::Slider::new(
                        &mut self.controls.anomaly_pct,
                        ANOMALY_MIN_PCT..=ANOMALY_MAX_PCT,
                    )
                    .text("Anomaly Severity (%)"),
                );
            }

            ui.add_space(20.0);
            ui.separator();
            ui.label("Drag the orbit view to rotate");
            ui.label("Scroll to zoom");
        });

        let error_pct = self.controls.error_percent();
        let state = MissionState::compute(error_pct);
        let show_ghost = error_pct > 0.0;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Satellite Trajectory & Data Integrity");
            ui.add_space(6.0);

            let snapshot = &state.snapshot;
            let drift = snapshot.drift_km();
            let status = snapshot.status();
            ui.columns(3, |cols| {
                metric(
                    &mut cols[0],
                    "System Radius",
                    format!("{BASE_RADIUS_KM:.0} km"),
                    None,
                );
                let delta =
                    (error_pct > 0.0).then(|| (format!("+{error_pct:.0}%"), COLOR_GHOST_PATH));
                metric(
                    &mut cols[1],
                    "DB Reported Radius",
                    format!("{:.0} km", snapshot.ghost_radius_km),
                    delta,
                );
                let status_color = match status {
                    DriftStatus::Ok => COLOR_TRUE_PATH,
                    DriftStatus::Critical => COLOR_GHOST_PATH,
                };
                metric(
                    &mut cols[2],
                    "Targeting Drift",
                    format!("{drift:.2} km"),
                    Some((status.label().to_string(), status_color)),
                );
            });

            ui.add_space(6.0);
            ui.separator();

            let plot_width = (ui.available_width() - 30.0) * 0.62;
            let plot_height = ((ui.available_height() - 60.0) * 0.55).max(300.0);
            ui.horizontal(|ui| {
                let (rotation, zoom) = draw_orbit_view(
                    ui,
                    "orbit_view",
                    &state,
                    show_ghost,
                    self.rotation,
                    self.zoom,
                    plot_width,
                    plot_height,
                );
                self.rotation = rotation;
                self.zoom = zoom;

                ui.add_space(12.0);
                ui.vertical(|ui| equation_panel(ui, snapshot, show_ghost));
            });

            ui.add_space(6.0);
            ui.separator();
            ui.heading("Database Inspector");
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.inspector_tab,
                    InspectorTab::Normalized,
                    "Normalized Tables",
                );
                ui.selectable_value(
                    &mut self.inspector_tab,
                    InspectorTab::Unnormalized,
                    "Unnormalized Table",
                );
            });
            ui.add_space(6.0);
            match self.inspector_tab {
                InspectorTab::Normalized => normalized_tables(ui),
                InspectorTab::Unnormalized => master_table(ui, error_pct),
            }
        });
    }
}

fn metric(ui: &mut egui::Ui, label: &str, value: String, delta: Option<(String, egui::Color32)>) {
    egui::Frame::group(ui.style().as_ref())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).small().weak());
                ui.label(egui::RichText::new(value).size(22.0).strong());
                if let Some((text, color)) = delta {
                    ui.label(egui::RichText::new(text).color(color));
                }
            });
        });
}

fn equation_panel(ui: &mut egui::Ui, snapshot: &Snapshot, show_ghost: bool) {
    ui.heading("Equation Resolution");
    ui.label(format!("Calculating position at T = {SNAPSHOT_TIME} s"));
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Healthy calculation").strong());
    ui.label(
        egui::RichText::new(format!(
            "X = {BASE_RADIUS_KM:.0} · cos({ANGULAR_RATE_RAD} · {SNAPSHOT_TIME}) = {:.2}",
            snapshot.x_true
        ))
        .monospace(),
    );

    if show_ghost {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Anomaly calculation").strong());
        ui.label(
            egui::RichText::new(format!(
                "X = {:.0} · cos({ANGULAR_RATE_RAD} · {SNAPSHOT_TIME}) = {:.2}",
                snapshot.ghost_radius_km, snapshot.x_ghost
            ))
            .monospace(),
        );
        ui.add_space(6.0);
        ui.colored_label(
            COLOR_GHOST_PATH,
            format!("Error offset: {:.2} km", snapshot.offset_km()),
        );
    } else {
        ui.add_space(6.0);
        ui.colored_label(COLOR_TRUE_PATH, "Mathematical alignment is 100%");
    }
}

fn normalized_tables(ui: &mut egui::Ui) {
    ui.columns(2, |cols| {
        cols[0].label(egui::RichText::new("Table: Satellites").strong());
        egui::Grid::new("satellites_grid")
            .striped(true)
            .show(&mut cols[0], |ui| {
                ui.strong("ID");
                ui.strong("Name");
                ui.strong("Radius (km)");
                ui.end_row();
                for row in satellite_rows() {
                    ui.label(row.id.to_string());
                    ui.label(row.name);
                    ui.label(format!("{:.0}", row.radius_km));
                    ui.end_row();
                }
            });

        cols[1].label(egui::RichText::new("Table: Telemetry").strong());
        egui::Grid::new("telemetry_grid")
            .striped(true)
            .show(&mut cols[1], |ui| {
                ui.strong("Ping");
                ui.strong("SatID");
                ui.strong("Time");
                ui.end_row();
                for row in telemetry_rows() {
                    ui.label(row.ping.to_string());
                    ui.label(row.sat_id.to_string());
                    ui.label(row.time.format("%H:%M").to_string());
                    ui.end_row();
                }
            });
    });
}

fn master_table(ui: &mut egui::Ui, error_percent: f64) {
    ui.label(egui::RichText::new("Table: Master_List (redundant data)").strong());
    egui::Grid::new("master_grid")
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Ping");
            ui.strong("Name");
            ui.strong("Radius (km)");
            ui.strong("Log");
            ui.end_row();
            for row in master_rows(error_percent) {
                ui.label(row.ping.to_string());
                ui.label(row.name);
                ui.label(format!("{:.0}", row.radius_km));
                ui.label(row.log);
                ui.end_row();
            }
        });
}
