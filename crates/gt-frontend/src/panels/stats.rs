//! Gear statistics panel

use egui::{RichText, Ui};

use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

/// Side panel listing every gear with its teeth, radius and angle
#[derive(Default)]
pub struct StatsPanel;

impl StatsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for StatsPanel {
    fn name(&self) -> &str {
        "Statistics"
    }

    fn ui(&mut self, ui: &mut Ui, app_state: &SharedAppState) {
        let state = app_state.lock();
        let stats = state.scene.stats();
        let stale = state.scene.is_adjacency_stale();
        let edges = state.scene.adjacency().edge_count();
        let active = state.active_gear();
        let mut show_mesh_links = state.show_mesh_links;
        drop(state);

        let heading = if stats.name.is_empty() {
            self.name()
        } else {
            stats.name.as_str()
        };
        ui.heading(heading);
        ui.label(format!("Gear count: {}", stats.gear_count()));
        ui.label(format!("Meshed pairs: {}", edges));
        if stale {
            ui.colored_label(egui::Color32::from_rgb(230, 170, 60), "Adjacency is out of date");
        }

        ui.horizontal(|ui| {
            if ui.button("Reset angles").clicked() {
                app_state.lock().queue_action(AppAction::ResetRotations);
            }
            if ui
                .button("Rebuild mesh")
                .on_hover_text("Recompute meshed pairs from gear positions")
                .clicked()
            {
                app_state.lock().queue_action(AppAction::RebuildAdjacency);
            }
        });
        if ui.button("Reset scene").clicked() {
            app_state.lock().queue_action(AppAction::ResetScene);
        }
        if ui.checkbox(&mut show_mesh_links, "Show mesh links").changed() {
            app_state.lock().show_mesh_links = show_mesh_links;
        }

        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("gear_stats_scroll")
            .show(ui, |ui| {
                for gear in &stats.gears {
                    let title = RichText::new(gear.title()).strong();
                    let title = if active == Some(gear.id) {
                        title.color(egui::Color32::from_rgb(255, 204, 51))
                    } else {
                        title
                    };
                    ui.label(title);
                    ui.label(gear.to_string());
                    ui.add_space(4.0);
                }
            });

        ui.separator();
        ui.weak("Right-drag a gear to turn it.\nLeft or middle drag to pan, scroll to zoom.");
    }
}
