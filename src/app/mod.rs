// Application layer: wires the CLI to the explorer and renders results.

pub mod commands;
pub mod progress;
pub mod render;
