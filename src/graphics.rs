use lightcone::model::constants::DIAGRAM_BOUNDS;
use lightcone::model::evaluator::CausalityResult;
use lightcone::model::interpolator::AnimationFrame;
use lightcone::model::params::Params;
use lightcone::model::report::Report;
use macroquad::prelude::*;
use ndarray::Array1;

const LIGHT_COLOR: Color = Color::new(1.0, 0.84, 0.0, 0.9);
const CAUSAL_COLOR: Color = Color::new(0.2, 0.8, 0.2, 0.9);
const NON_CAUSAL_COLOR: Color = Color::new(1.0, 0.0, 0.0, 0.9);
const RAY_WIDTH: f32 = 6.0;
const EVENT_RADIUS: f32 = 12.0;
const MARKER_RADIUS: f32 = 8.0;

/// Screen region the diagram is drawn into (the part not covered by the side panel).
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(side_panel_width: f32) -> Self {
        Self {
            width: (screen_width() - side_panel_width).max(1.0),
            height: screen_height(),
        }
    }

    fn scale(&self) -> (f32, f32) {
        let [x_min, x_max, y_min, y_max] = DIAGRAM_BOUNDS;
        (
            self.width / (x_max - x_min) as f32,
            self.height / (y_max - y_min) as f32,
        )
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for Array1<f64> {
    type Output = Vec2;
    fn to_screen(&self, viewport: &Viewport) -> Vec2 {
        [self[0], self[1]].to_screen(viewport)
    }
}

impl ToScreen for [f64; 2] {
    type Output = Vec2;
    fn to_screen(&self, viewport: &Viewport) -> Vec2 {
        let [x_min, _, _, y_max] = DIAGRAM_BOUNDS;
        let (scale_x, scale_y) = viewport.scale();
        // diagram y grows upwards
        vec2(
            (self[0] - x_min) as f32 * scale_x,
            (y_max - self[1]) as f32 * scale_y,
        )
    }
}

fn information_color(result: &CausalityResult) -> Color {
    if result.is_causal {
        CAUSAL_COLOR
    } else {
        NON_CAUSAL_COLOR
    }
}

pub fn draw_grid(viewport: &Viewport) {
    let [x_min, x_max, y_min, y_max] = DIAGRAM_BOUNDS;
    let grid_color = Color::from_rgba(180, 180, 180, 90);

    for x in (x_min.ceil() as i32)..=(x_max.floor() as i32) {
        let top = [x as f64, y_max].to_screen(viewport);
        let bottom = [x as f64, y_min].to_screen(viewport);
        draw_line(top.x, top.y, bottom.x, bottom.y, 1.0, grid_color);
    }
    for y in (y_min.ceil() as i32)..=(y_max.floor() as i32) {
        let left = [x_min, y as f64].to_screen(viewport);
        let right = [x_max, y as f64].to_screen(viewport);
        draw_line(left.x, left.y, right.x, right.y, 1.0, grid_color);
    }
}

fn draw_dashed_line(from: Vec2, to: Vec2, dash: f32, thickness: f32, color: Color) {
    let length = from.distance(to);
    if length == 0.0 {
        return;
    }
    let direction = (to - from) / length;
    let mut travelled = 0.0;
    while travelled < length {
        let start = from + direction * travelled;
        let end = from + direction * (travelled + dash).min(length);
        draw_line(start.x, start.y, end.x, end.y, thickness, color);
        travelled += dash * 2.0;
    }
}

/// Draws the events, the trajectory and both rays up to the current frame.
pub fn draw_diagram(
    viewport: &Viewport,
    params: &Params,
    result: &CausalityResult,
    frame: &AnimationFrame,
) {
    let origin = params.events.origin.pos.to_screen(viewport);
    let destination = params.events.destination.pos.to_screen(viewport);
    let light = frame.light_position.to_screen(viewport);
    let information = frame.information_position.to_screen(viewport);
    let info_color = information_color(result);

    draw_dashed_line(
        origin,
        destination,
        10.0,
        2.0,
        Color::from_rgba(0, 0, 0, 128),
    );

    // light first so the information ray sits on top where they overlap
    draw_line(origin.x, origin.y, light.x, light.y, RAY_WIDTH, LIGHT_COLOR);
    draw_line(
        origin.x,
        origin.y,
        information.x,
        information.y,
        RAY_WIDTH * 0.6,
        info_color,
    );

    draw_circle(light.x, light.y, MARKER_RADIUS, LIGHT_COLOR);
    draw_circle_lines(information.x, information.y, MARKER_RADIUS, 3.0, info_color);

    draw_circle(origin.x, origin.y, EVENT_RADIUS, RED);
    draw_circle(destination.x, destination.y, EVENT_RADIUS, BLUE);

    let font_size = 18.0;
    for (event, screen_pos) in [
        (&params.events.origin, origin),
        (&params.events.destination, destination),
    ] {
        let size = measure_text(&event.label, None, font_size as u16, 1.0);
        draw_text(
            &event.label,
            screen_pos.x - size.width / 2.0,
            screen_pos.y + EVENT_RADIUS + size.height + 4.0,
            font_size,
            DARKGRAY,
        );
    }
}

/// Status box in the top-left corner and the principle reminder in the bottom-right.
pub fn draw_caption(viewport: &Viewport, report: &Report, result: &CausalityResult) {
    let font_size = 20.0;
    let line_height = 24.0;
    let padding = 10.0;
    let caption = report.caption();
    let lines: Vec<&str> = caption.lines().collect();

    let box_width = lines
        .iter()
        .map(|line| measure_text(line, None, font_size as u16, 1.0).width)
        .fold(0.0_f32, f32::max)
        + padding * 2.0;
    let box_height = line_height * lines.len() as f32 + padding;

    draw_rectangle(
        padding,
        padding,
        box_width,
        box_height,
        Color::from_rgba(255, 255, 255, 230),
    );
    draw_rectangle_lines(
        padding,
        padding,
        box_width,
        box_height,
        2.0,
        information_color(result),
    );
    for (i, line) in lines.iter().enumerate() {
        draw_text(
            line,
            padding * 2.0,
            padding + line_height * (i as f32 + 1.0),
            font_size,
            BLACK,
        );
    }

    let principle = format!(
        "Principle: information <= speed of light (c = {})",
        report.speed_of_light
    );
    let size = measure_text(&principle, None, 16, 1.0);
    draw_text(
        &principle,
        viewport.width - size.width - padding,
        viewport.height - padding,
        16.0,
        DARKBLUE,
    );
}
