//! One view per wizard step, plus the success screen

pub mod basics;
pub mod describe;
pub mod preview;
pub mod success;
pub mod title;
