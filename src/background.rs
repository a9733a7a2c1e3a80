//! Decorative background effect: an animated dot field that is loaded lazily
//! behind the page, with a static gradient shown whenever it is not running.

mod cancel;
mod config;
#[cfg(feature = "hydrate")]
mod dots;
mod error;
mod lifecycle;
#[cfg(feature = "hydrate")]
mod timers;

pub use cancel::CancelToken;
pub use config::{BackgroundConfig, DotsOptions};
#[cfg(feature = "hydrate")]
pub use dots::{DotsEffect, DotsLibrary, DotsLoader};
pub use error::EffectError;
pub use lifecycle::{EffectHandle, EffectLifecycle, EffectLoader, LoadCallback, Phase, Scheduler};
#[cfg(feature = "hydrate")]
pub use timers::TimeoutScheduler;
