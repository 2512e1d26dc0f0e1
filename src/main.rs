use lightcone::model::params::Params;
use macroquad::prelude::*;

mod graphics;
mod ui;

const CONFIG_ENV: &str = "LIGHTCONE_CONFIG";

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Config path from the first CLI argument, then `LIGHTCONE_CONFIG`.
fn load_params() -> Params {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    let Some(path) = path else {
        return Params::default();
    };

    match Params::load_from_file(&path) {
        Ok(params) => params,
        Err(err) => {
            log::error!("failed to load config {}: {}, using defaults", path, err);
            Params::default()
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Causality Analyzer".to_owned(),
        window_width: 1280,
        window_height: 760,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let mut params = load_params();
    let mut ui_state = ui::UIState::new(&params);

    log::info!(
        "starting causality analyzer (c = {} m/s, d = {:e} m, t = {} s)",
        params.speed_of_light(),
        ui_state.separation().distance(),
        ui_state.separation().time_delta()
    );

    loop {
        let now = get_time() as f32;

        if is_key_pressed(KeyCode::Space) {
            ui_state.toggle_animation(now);
        }

        if ui_state.clock.tick() {
            log::trace!("animation wrapped");
        }

        clear_background(WHITE);

        let viewport = graphics::Viewport::new(ui_state.side_panel_width);
        let frame = params.interpolator().advance_pair(
            &params.events,
            ui_state.result(),
            ui_state.clock.progress(),
        );

        graphics::draw_grid(&viewport);
        graphics::draw_diagram(&viewport, &params, ui_state.result(), &frame);
        graphics::draw_caption(&viewport, &ui_state.report(), ui_state.result());

        ui::draw_ui(&mut ui_state, &mut params, now);
        ui::process_egui();

        ui_state.refresh(&params, now);

        next_frame().await;
    }
}
