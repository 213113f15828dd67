pub mod event;
pub mod service;
pub mod state;
