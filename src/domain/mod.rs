// Domain layer: result model and the stage contract. No regex here.

pub mod model;
pub mod ports;
