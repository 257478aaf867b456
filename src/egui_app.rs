//! egui front end: state, controller, presenter and renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
