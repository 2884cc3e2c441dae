//! Controller layer: session composition and scripted action replay.

pub mod orchestration;
pub mod session;
