#![cfg_attr(target_arch = "spirv", no_std)]
//! Position/color pass-through vertex stage.
//!
//! The same code is compiled to SPIR-V by `spirv-builder` and to the host
//! target, where [`vertex_stage`] is called directly by the reference executor.

pub use spirv_std::glam;
use spirv_std::{
    glam::{Vec3, Vec4},
    spirv,
};

/// Name of the vertex entry point in the compiled module.
pub const VERTEX_ENTRY_POINT: &str = "vert_main";

/// Input location of the `Position` attribute.
pub const POSITION_LOCATION: u32 = 0;
/// Input location of the `inColor` attribute.
pub const IN_COLOR_LOCATION: u32 = 1;
/// Output location of the `vertColor` varying.
pub const VERT_COLOR_LOCATION: u32 = 0;

/// Everything one invocation hands to the rasterizer.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug))]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub vert_color: Vec4,
}

/// Geometry is expected in clip space already, so w is fixed at 1.0 and no
/// transform is applied. The color is forwarded untouched.
pub fn vertex_stage(position: Vec3, in_color: Vec4) -> VertexOutput {
    VertexOutput {
        clip_position: position.extend(1.0),
        vert_color: in_color,
    }
}

// Input locations follow parameter order: position is 0, in_color is 1.
#[allow(dead_code)]
#[spirv(vertex)]
pub fn vert_main(
    position: Vec3,
    in_color: Vec4,
    #[spirv(position)] clip_position: &mut Vec4,
    vert_color: &mut Vec4,
) {
    let out = vertex_stage(position, in_color);
    *clip_position = out.clip_position;
    *vert_color = out.vert_color;
}
