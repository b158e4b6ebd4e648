// Domain layer: entities, the resource descriptor and the repository/service ports.
// Nothing here performs I/O.

pub mod model;
pub mod ports;
pub mod resource;
pub mod wire;
