use egui_macroquad::egui;
use egui_plot::{HLine, Line, Plot, PlotPoints, Points, VLine};
use lightcone::model::boundary::BoundaryCurve;
use lightcone::model::event::SeparationInput;

/// Required speed against time separation on log10 axes, with the c threshold
/// and the current input marked.
pub(super) fn draw_boundary_plot(
    ui: &mut egui::Ui,
    curve: Option<&BoundaryCurve>,
    separation: &SeparationInput,
) {
    let Some(curve) = curve else {
        ui.label("No boundary for the current input.");
        return;
    };

    let points: PlotPoints = curve
        .points()
        .into_iter()
        .filter(|[t, v]| *t > 0.0 && *v > 0.0)
        .map(|[t, v]| [t.log10(), v.log10()])
        .collect();

    Plot::new("boundary_plot")
        .height(180.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!(
                "{}\nt: {:.2e} s\nv: {:.2e} m/s",
                name,
                10f64.powf(value.x),
                10f64.powf(value.y)
            )
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Required speed (log10)"),
            );
            plot_ui.hline(
                HLine::new(curve.speed_of_light.log10())
                    .color(egui::Color32::from_rgb(230, 180, 0))
                    .name("Speed of light"),
            );
            if curve.critical_time_delta > 0.0 {
                plot_ui.vline(
                    VLine::new(curve.critical_time_delta.log10())
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .name("Critical time"),
                );
            }

            let speed = separation.distance() / separation.time_delta();
            if separation.time_delta() > 0.0 && speed > 0.0 {
                plot_ui.points(
                    Points::new(vec![[separation.time_delta().log10(), speed.log10()]])
                        .radius(4.0)
                        .color(egui::Color32::from_rgb(210, 30, 30))
                        .name("Current input"),
                );
            }
        });
}
