pub mod autopilot;
pub mod pathfinder;
