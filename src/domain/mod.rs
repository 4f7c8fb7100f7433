// Domain layer: the record shape and the ports the outer layers implement.

pub mod model;
pub mod ports;
