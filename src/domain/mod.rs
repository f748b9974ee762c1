// Domain layer: request model, typed request bodies and ports. No transport code here.

pub mod model;
pub mod ports;
pub mod requests;
