// Domain layer: core models, the sample catalog and ports (interfaces).

pub mod model;
pub mod ports;
pub mod sample;
