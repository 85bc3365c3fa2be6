// Domain layer: form values, reports, and the ports the validator talks through.

pub mod model;
pub mod ports;
