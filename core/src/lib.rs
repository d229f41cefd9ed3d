pub mod connectivity;
pub mod orchestrator;
pub mod pipeline;
pub mod probe;
pub mod report;
pub mod runner;
pub mod setup;
