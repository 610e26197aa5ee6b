// Domain layer: catalog models and ports (interfaces). No HTTP or config here.

pub mod model;
pub mod ports;
