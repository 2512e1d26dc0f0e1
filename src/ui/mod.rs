// UI module - egui panels around the diagram

mod events;
mod panel;
mod plot;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
