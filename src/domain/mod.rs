// Domain layer: entities, API transfer records and the ports the core depends on.

pub mod dto;
pub mod model;
pub mod ports;
