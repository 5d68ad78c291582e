//! Host side of the `vertcolor` vertex stage: the vertex-buffer layout the
//! stage binds against, a CPU reference executor and SPIR-V checks.

pub mod buffer;
pub mod config;
pub mod error;
pub mod logging;
pub mod spirv;
pub mod stage;
pub mod vertex;

pub use config::HostConfig;
pub use error::{Error, Result};
pub use stage::Executor;
pub use vertcolor_shader::{VertexOutput, VERTEX_ENTRY_POINT};
pub use vertex::Vertex;
