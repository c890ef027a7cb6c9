//! Gear viewport panel

use std::f32::consts::PI;

use egui::{Color32, PointerButton, Pos2, Sense, Shape, Stroke};
use glam::Vec2;
use uuid::Uuid;

use gt_core::{Gear, InteractionConfig, PropagationRequest, RotateGesture, Scene};

use crate::camera::Camera2d;
use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

const BACKGROUND: Color32 = Color32::from_rgb(11, 12, 16);
const GEAR_BODY: Color32 = Color32::from_rgb(136, 153, 255);
const GEAR_BODY_DRIVEN: Color32 = Color32::from_rgb(110, 190, 255);
const GEAR_TOOTH: Color32 = Color32::from_rgb(217, 217, 230);
const GEAR_HUB: Color32 = Color32::from_rgb(34, 34, 51);
const MARKER_DOT: Color32 = Color32::from_rgb(255, 204, 51);
const MESH_LINK: Color32 = Color32::from_rgba_premultiplied(60, 70, 90, 120);
const HOVER_OUTLINE: Color32 = Color32::WHITE;

/// Viewport showing the gear plane
pub struct ViewportPanel {
    camera: Camera2d,
    /// Fit the camera to the scene on the next frame
    needs_fit: bool,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: Camera2d::default(),
            needs_fit: true,
        }
    }

    /// Re-fit the camera to the scene on the next frame
    pub fn request_fit(&mut self) {
        self.needs_fit = true;
    }

    fn to_screen(&self, world: Vec2, viewport_center: Vec2) -> Pos2 {
        let screen = self.camera.world_to_screen(world, viewport_center);
        Pos2::new(screen.x, screen.y)
    }

    fn handle_input(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_center: Vec2,
        app_state: &SharedAppState,
    ) {
        // Pan with left or middle drag
        if response.dragged_by(PointerButton::Primary) || response.dragged_by(PointerButton::Middle) {
            let delta = response.drag_delta();
            self.camera.pan(Vec2::new(delta.x, delta.y));
        }

        // Zoom with scroll
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom_by_scroll(scroll);
            }
        }

        let pointer_world = response
            .hover_pos()
            .or_else(|| response.interact_pointer_pos())
            .map(|p| self.camera.screen_to_world(Vec2::new(p.x, p.y), viewport_center));

        let mut state = app_state.lock();
        let hovered = pointer_world.and_then(|p| state.scene.gear_at(p));
        state.hovered_gear = hovered;

        // Rotate with right drag, picked where the button went down
        if response.drag_started_by(PointerButton::Secondary)
            && let Some(origin) = ui.input(|i| i.pointer.press_origin())
        {
            let press = Vec2::new(origin.x, origin.y);
            let state = &mut *state;
            if let Some(gear) = begin_rotate(
                &mut state.gesture,
                &state.scene,
                &self.camera,
                press,
                viewport_center,
            ) {
                tracing::debug!("Started rotating gear {}", gear);
            }
        }

        if response.dragged_by(PointerButton::Secondary)
            && let Some(pos) = response.interact_pointer_pos()
        {
            let pointer_delta_x = ui.input(|i| i.pointer.delta().x);
            let config = state.scene.config().interaction;
            if let Some(request) = drag_rotate(&mut state.gesture, pos.x, pointer_delta_x, &config) {
                state.queue_action(AppAction::RotateGear(request));
            }
        }

        if response.drag_stopped_by(PointerButton::Secondary) {
            state.gesture.end();
        }
    }

    fn draw_gear(
        &self,
        painter: &egui::Painter,
        gear: &Gear,
        viewport_center: Vec2,
        driven: bool,
        hovered: bool,
    ) {
        let zoom = self.camera.zoom;
        let center = self.to_screen(gear.position(), viewport_center);
        let radius = gear.radius() * zoom;
        let depth = gear.tooth_depth() * zoom;

        // Teeth as trapezoids around the rim
        let half_width = PI / (gear.teeth() as f32 * 1.6);
        for angle in gear.tooth_angles() {
            let corner = |r: f32, a: f32| Pos2::new(center.x + r * a.cos(), center.y - r * a.sin());
            let points = vec![
                corner(radius * 0.98, angle - half_width),
                corner(radius * 0.98, angle + half_width),
                corner(radius + depth, angle + half_width * 0.6),
                corner(radius + depth, angle - half_width * 0.6),
            ];
            painter.add(Shape::convex_polygon(points, GEAR_TOOTH, Stroke::NONE));
        }

        let body = if driven { GEAR_BODY_DRIVEN } else { GEAR_BODY };
        painter.circle_filled(center, radius, body);
        painter.circle_filled(center, radius * 0.18, GEAR_HUB);

        // Marker dot at the gear's angle zero
        let marker_angle = gear.rotation();
        let marker = Pos2::new(
            center.x + radius * 0.8 * marker_angle.cos(),
            center.y - radius * 0.8 * marker_angle.sin(),
        );
        painter.circle_filled(marker, (radius * 0.06).max(2.0), MARKER_DOT);

        if hovered {
            painter.circle_stroke(center, radius + depth + 2.0, Stroke::new(1.5, HOVER_OUTLINE));
        }
    }
}

/// Start a rotate gesture on the gear under the press position, if any
fn begin_rotate(
    gesture: &mut RotateGesture,
    scene: &Scene,
    camera: &Camera2d,
    press: Vec2,
    viewport_center: Vec2,
) -> Option<Uuid> {
    let gear = scene.gear_at(camera.screen_to_world(press, viewport_center))?;
    gesture.begin(gear, press.x);
    Some(gear)
}

/// Rotation for this frame. Frames where the pointer did not move yield nothing.
fn drag_rotate(
    gesture: &mut RotateGesture,
    pointer_x: f32,
    pointer_delta_x: f32,
    config: &InteractionConfig,
) -> Option<PropagationRequest> {
    if pointer_delta_x == 0.0 {
        return None;
    }
    gesture.drag(pointer_x, config)
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "Viewport"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;
        let viewport_center = Vec2::new(rect.center().x, rect.center().y);

        if self.needs_fit {
            let extent = app_state.lock().scene.extent();
            self.camera.fit(extent, Vec2::new(rect.width(), rect.height()));
            self.needs_fit = false;
        }

        self.handle_input(ui, &response, viewport_center, app_state);

        painter.rect_filled(rect, 0.0, BACKGROUND);

        let state = app_state.lock();
        let driven: Vec<Uuid> = state
            .active_gear()
            .map(|id| state.scene.adjacency().connected_component(id))
            .unwrap_or_default();

        if state.show_mesh_links {
            for (a, b) in state.scene.adjacency().edges() {
                if let (Some(a), Some(b)) = (state.scene.gear(a), state.scene.gear(b)) {
                    painter.line_segment(
                        [
                            self.to_screen(a.position(), viewport_center),
                            self.to_screen(b.position(), viewport_center),
                        ],
                        Stroke::new(1.0, MESH_LINK),
                    );
                }
            }
        }

        for gear in state.scene.gears() {
            self.draw_gear(
                &painter,
                gear,
                viewport_center,
                driven.contains(&gear.id()),
                state.hovered_gear == Some(gear.id()),
            );
        }

        if state.scene.is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No gears",
                egui::FontId::proportional(16.0),
                Color32::GRAY,
            );
        }
    }
}
