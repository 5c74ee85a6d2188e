pub mod analysis_context;
pub mod decorator;
