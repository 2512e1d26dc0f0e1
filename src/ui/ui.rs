use egui_macroquad::egui;
use lightcone::model::animation::AnimationClock;
use lightcone::model::boundary::BoundaryCurve;
use lightcone::model::evaluator::{CausalityResult, Verdict};
use lightcone::model::event::SeparationInput;
use lightcone::model::event_log::{EventKind, EventLog};
use lightcone::model::params::Params;
use lightcone::model::report::{Report, format_speed};

pub struct UIState {
    pub side_panel_width: f32,
    /// Values bound to the input widgets; may be invalid until the next refresh.
    pub distance_input: f64,
    pub time_delta_input: f64,
    pub clock: AnimationClock,
    pub event_log: EventLog,
    pub show_events: bool,
    pub boundary: Option<BoundaryCurve>,
    separation: SeparationInput,
    result: CausalityResult,
    applied_speed_of_light: f64,
}

impl UIState {
    pub fn new(params: &Params) -> Self {
        let separation = params.separation().unwrap_or_else(|err| {
            log::warn!("initial separation rejected ({}), using defaults", err);
            SeparationInput::default()
        });
        let mut clock = params.clock().unwrap_or_else(|err| {
            log::warn!("{}, using default animation step", err);
            AnimationClock::default()
        });
        if params.auto_play {
            clock.resume();
        }

        let mut state = Self {
            side_panel_width: 340.0,
            distance_input: separation.distance(),
            time_delta_input: separation.time_delta(),
            clock,
            event_log: EventLog::new(params.event_log_capacity),
            show_events: true,
            boundary: None,
            separation,
            result: CausalityResult::INSTANTANEOUS,
            applied_speed_of_light: params.speed_of_light(),
        };
        state.recompute(params);
        state
    }

    pub fn result(&self) -> &CausalityResult {
        &self.result
    }

    pub fn separation(&self) -> &SeparationInput {
        &self.separation
    }

    pub fn report(&self) -> Report {
        Report::new(&self.result, self.applied_speed_of_light)
    }

    /// Picks up widget edits: validates the inputs and re-evaluates when
    /// either the separation or the speed of light changed.
    #[allow(clippy::float_cmp)]
    pub fn refresh(&mut self, params: &Params, now: f32) {
        let speed_of_light = params.speed_of_light();
        let mut changed = false;

        if speed_of_light != self.applied_speed_of_light {
            self.event_log.log(
                now,
                format!("Speed of light set to {} m/s", speed_of_light),
                EventKind::Config,
            );
            self.applied_speed_of_light = speed_of_light;
            changed = true;
        }

        if self.distance_input != self.separation.distance()
            || self.time_delta_input != self.separation.time_delta()
        {
            match SeparationInput::new(self.distance_input, self.time_delta_input) {
                Ok(separation) => {
                    self.separation = separation;
                    changed = true;
                }
                Err(err) => {
                    self.event_log
                        .log(now, format!("Input rejected: {}", err), EventKind::Rejected);
                    self.distance_input = self.separation.distance();
                    self.time_delta_input = self.separation.time_delta();
                }
            }
        }

        if changed {
            let previous = self.result.verdict();
            self.recompute(params);
            let current = self.result.verdict();
            if current != previous {
                let kind = match current {
                    Verdict::Causal => EventKind::Causal,
                    Verdict::NonCausal => EventKind::NonCausal,
                };
                self.event_log.log(
                    now,
                    format!(
                        "{} at {}",
                        current,
                        format_speed(self.result.required_speed)
                    ),
                    kind,
                );
            }
        }
    }

    fn recompute(&mut self, params: &Params) {
        let evaluator = params.evaluator();
        self.result = evaluator.evaluate_input(&self.separation);

        let (t_min, t_max) = BoundaryCurve::default_range(&evaluator, self.separation.distance());
        self.boundary = match BoundaryCurve::sample(
            &evaluator,
            self.separation.distance(),
            t_min,
            t_max,
            params.boundary_samples,
        ) {
            Ok(curve) => Some(curve),
            Err(err) => {
                log::warn!("boundary sweep skipped: {}", err);
                None
            }
        };
        log::debug!(
            "evaluated d = {} m, t = {} s -> {:?}",
            self.separation.distance(),
            self.separation.time_delta(),
            self.result
        );
    }

    pub fn toggle_animation(&mut self, now: f32) {
        self.clock.toggle();
        let description = if self.clock.is_running() {
            "Animation started"
        } else {
            "Animation paused"
        };
        self.event_log
            .log(now, description.to_owned(), EventKind::Animation);
    }
}

pub fn draw_ui(state: &mut UIState, params: &mut Params, now: f32) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::light();
        visuals.override_text_color = Some(egui::Color32::from_rgb(20, 20, 30));
        egui_ctx.set_visuals(visuals);

        super::panel::draw_side_panel(egui_ctx, state, params, now);

        if state.show_events {
            super::events::draw_events_panel(egui_ctx, &state.event_log);
        }
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
