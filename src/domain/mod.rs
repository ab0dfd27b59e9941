// Domain layer: canonical models and ports (interfaces).

pub mod model;
pub mod ports;
