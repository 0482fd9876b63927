//! Progress-driven visual state for the loading screen.
//!
//! Pure data layer: no browser or GPU dependencies, so everything here is
//! testable without a graphics context.

pub mod config;
pub mod controller;
pub mod error;
pub mod feed;
pub mod markers;

pub use config::{
    AmbientLight, BarConfig, CameraConfig, DirectionalLight, MarkerLayout, Rgb, SceneConfig,
    TitleConfig, SCENE_CONFIG,
};
pub use controller::ProgressVisualStateController;
pub use error::{FeedError, MarkerError};
pub use feed::{LoadProgress, SimulatedFeed};
pub use markers::{Emphasis, MarkerSet, DIM_OPACITY, EMPHASIZED_OPACITY, MARKER_COUNT};
