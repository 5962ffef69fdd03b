//! 냉각 스트레스 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면에서도 쓰기 쉽게 한다.

pub mod app;
pub mod arena;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod cooling;
pub mod i18n;
pub mod lab;
pub mod report;
pub mod ui_cli;
