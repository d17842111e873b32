// Adapters layer: concrete dataset sources and report sinks.

pub mod sink;
pub mod source;
