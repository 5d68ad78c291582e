//! SPIR-V build of `vertcolor-shader`.
//!
//! Building this crate needs the rust-gpu toolchain; `build.rs` exports the
//! module path through the `vertcolor_shader.spv` environment variable.

/// Path of the compiled module, as written by `spirv-builder`.
pub const SHADER_PATH: &str = env!("vertcolor_shader.spv");

/// Raw bytes of the compiled module.
pub const SHADER_BYTES: &[u8] = include_bytes!(env!("vertcolor_shader.spv"));
