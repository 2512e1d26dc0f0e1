use egui_macroquad::egui;
use lightcone::model::event_log::{EventKind, EventLog};

/// Draws a transparent panel showing recent events
pub fn draw_events_panel(egui_ctx: &egui::Context, event_log: &EventLog) {
    let screen_height = egui_ctx.screen_rect().height();
    let panel_height = 220.0;

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, screen_height - panel_height - 10.0))
        .fixed_size(egui::vec2(340.0, panel_height))
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(egui::Color32::from_rgba_premultiplied(245, 245, 250, 220))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(160, 160, 180),
                )),
        )
        .show(egui_ctx, |ui| {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 4.0;

                let events = event_log.events();

                if events.is_empty() {
                    ui.label(
                        egui::RichText::new("No events yet...")
                            .color(egui::Color32::from_rgb(120, 120, 120))
                            .size(12.0),
                    );
                    return;
                }

                for event in events {
                    let color = match event.kind {
                        EventKind::Causal => egui::Color32::from_rgb(30, 150, 30),
                        EventKind::NonCausal => egui::Color32::from_rgb(200, 30, 30),
                        EventKind::Config => egui::Color32::from_rgb(40, 100, 200),
                        EventKind::Animation => egui::Color32::from_rgb(110, 110, 110),
                        EventKind::Rejected => egui::Color32::from_rgb(200, 140, 0),
                    };

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("[{:.1}s]", event.time))
                                .color(egui::Color32::from_rgb(90, 90, 120))
                                .size(11.0)
                                .monospace(),
                        );
                        ui.label(
                            egui::RichText::new(&event.description)
                                .color(color)
                                .size(11.0),
                        );
                    });
                }
            });
        });
}
