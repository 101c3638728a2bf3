// Domain layer: core models, ports (interfaces) and the pure planning services.

pub mod model;
pub mod ports;

pub mod services;
