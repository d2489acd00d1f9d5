pub mod docker;
pub mod model;

pub use docker::{DockerEndpoint, DockerInventory};
