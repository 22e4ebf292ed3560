pub mod analysis;
pub mod cache;
pub mod classify;
pub mod effectiveness;
pub mod orchestrator;
pub mod retry;
