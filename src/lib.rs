pub mod app;
pub mod generators;
pub mod graph;
pub mod solvers;
