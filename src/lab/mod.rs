//! Future Lab: 미래 냉각 아이디어를 히트 필드로 보여주는 미니 시뮬레이션.

pub mod ideas;
pub mod simulation;

pub use ideas::FutureIdea;
pub use simulation::{LabFrame, LabSim, FIELD_COLS, FIELD_ROWS, FRAME_DT};
