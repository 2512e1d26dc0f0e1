use egui_macroquad::egui;
use lightcone::model::constants::{
    DISTANCE_INPUT_STEP, MIN_DISTANCE_INPUT, MIN_TIME_DELTA_INPUT, SpeedOfLightPreset,
    TIME_DELTA_INPUT_STEP,
};
use lightcone::model::evaluator::Verdict;
use lightcone::model::event_log::EventKind;
use lightcone::model::params::Params;

use super::ui::UIState;

fn verdict_color(verdict: Verdict) -> egui::Color32 {
    match verdict {
        Verdict::Causal => egui::Color32::from_rgb(30, 160, 30),
        Verdict::NonCausal => egui::Color32::from_rgb(210, 30, 30),
    }
}

pub(super) fn draw_side_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    params: &mut Params,
    now: f32,
) {
    egui::SidePanel::right("causality_panel")
        .exact_width(state.side_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Causality Analyzer");
                ui.label("Can information travel between two events without outrunning light?");
                ui.separator();

                // Inputs
                ui.label("Spatial separation (m)");
                ui.add(
                    egui::DragValue::new(&mut state.distance_input)
                        .speed(DISTANCE_INPUT_STEP)
                        .range(MIN_DISTANCE_INPUT..=f64::MAX)
                        .custom_formatter(|v, _| format!("{:.2e}", v)),
                );
                ui.label("Time separation (s)");
                ui.add(
                    egui::DragValue::new(&mut state.time_delta_input)
                        .speed(TIME_DELTA_INPUT_STEP)
                        .range(MIN_TIME_DELTA_INPUT..=f64::MAX)
                        .max_decimals(3),
                );

                if params.custom_speed_of_light.is_none() {
                    ui.horizontal(|ui| {
                        for preset in SpeedOfLightPreset::ALL {
                            ui.radio_value(
                                &mut params.speed_of_light_preset,
                                preset,
                                preset.label(),
                            );
                        }
                    });
                } else {
                    ui.label(format!("c = {} m/s (config)", params.speed_of_light()));
                }

                ui.separator();

                // Results
                let report = state.report();
                ui.label(
                    egui::RichText::new(format!("{} EVENTS", report.verdict))
                        .color(verdict_color(report.verdict))
                        .strong()
                        .size(18.0),
                );
                ui.label(report.explanation());
                ui.add_space(4.0);
                ui.label(format!("Required information speed: {}", report.required_speed));
                ui.label(report.delta_vs_light.as_str());
                ui.label(format!("Factor vs light: {}", report.speed_factor));
                ui.label(format!("Speed of light: {} (maximum)", report.speed_of_light));
                if let Some(curve) = &state.boundary {
                    ui.label(format!(
                        "Causal from t >= {:.3e} s",
                        curve.critical_time_delta
                    ));
                }

                ui.separator();

                // Animation
                ui.horizontal(|ui| {
                    let label = if state.clock.is_running() {
                        "⏸ Pause"
                    } else {
                        "▶ Play"
                    };
                    if ui.button(label).clicked() {
                        state.toggle_animation(now);
                    }
                    if ui.button("⏮ Reset").clicked() {
                        state.clock.reset();
                    }
                });
                let mut progress = state.clock.progress();
                let response = ui.add(egui::Slider::new(&mut progress, 0.0..=1.0).text("Progress"));
                if response.changed() {
                    state.clock.scrub(progress);
                }
                if response.drag_stopped() {
                    state.event_log.log(
                        now,
                        format!("Scrubbed to {:.2}", state.clock.progress()),
                        EventKind::Animation,
                    );
                }

                ui.separator();

                ui.collapsing("Causal boundary", |ui| {
                    super::plot::draw_boundary_plot(ui, state.boundary.as_ref(), state.separation());
                });

                ui.separator();
                ui.checkbox(&mut state.show_events, "Show recent events");

                ui.collapsing("How to read this", |ui| {
                    ui.label("Event A (red) emits information, event B (blue) must receive it.");
                    ui.label("The yellow marker moves at the speed of light.");
                    ui.label("The other marker moves at the speed the information would need.");
                    ui.label("CAUSAL: the information arrives no earlier than light would.");
                    ui.label("NON-CAUSAL: the information would have to beat light.");
                });
            });
        });
}
