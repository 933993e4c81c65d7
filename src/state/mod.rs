//! Wizard state: the listing form, step controller, and supporting types

mod animation;
mod category;
mod field;
mod form_data;
mod photos;
mod quality;
mod tasks;
mod wizard;

pub use animation::*;
pub use category::*;
pub use field::*;
pub use form_data::*;
pub use photos::*;
pub use quality::*;
pub use tasks::*;
pub use wizard::*;
