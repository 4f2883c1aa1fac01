// Domain layer: check models and ports. Concrete DNS and config live in adapters/ and config/.

pub mod model;
pub mod ports;
