//! Form rendering helpers shared by the step views

mod field_renderer;

pub use field_renderer::{draw_field, field_height};
