// Domain layer: write results and the ports the writer depends on.

pub mod model;
pub mod ports;
