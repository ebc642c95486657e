//! Port definitions (trait abstractions) for the launch environment.
//!
//! The adapter only sees these traits, so tests can substitute the host
//! platform, the filesystem, the inherited environment and the toolkit's
//! context serialization.

mod context;
mod env;
mod location;

pub use context::{ContextSerializer, JsonContextSerializer, PipelineContext};
pub use env::{EnvProvider, SystemEnv};
pub use location::{LocationResolver, STARTUP_DIR, SystemLocator};

#[cfg(test)]
pub use context::MockContextSerializer;
#[cfg(test)]
pub use env::MockEnvProvider;
#[cfg(test)]
pub use location::MockLocationResolver;
