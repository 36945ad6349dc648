//! Domain Services

mod resolver;

pub use resolver::{collect_resolved, AssetResolver, PatternResolution};
