pub mod chord; // Note names, chord qualities, progressions
pub mod config;
pub mod control; // Per-frame orchestration
pub mod engine; // Sound engine boundary
pub mod gesture;
pub mod landmarks;
pub mod mapping; // Gesture metrics -> synthesis parameters
pub mod trigger; // Cooldown-debounced events

pub use config::ControlConfig;
pub use control::{Controller, TickReport};
pub use engine::{AudioEngine, EngineCommand, EngineError, Percussion};
pub use landmarks::{HandFrame, LandmarkIndex, LandmarkPosition};
