//! CPU reference execution of the vertex stage.
//!
//! Each vertex is one invocation of [`vertcolor_shader::vertex_stage`]; no
//! invocation reads another's input or output.

use rayon::prelude::*;
use vertcolor_shader::{
    glam::{Vec3, Vec4},
    vertex_stage, VertexOutput,
};

use crate::vertex::Vertex;

pub fn invoke(vertex: &Vertex) -> VertexOutput {
    vertex_stage(
        Vec3::from_array(vertex.position),
        Vec4::from_array(vertex.color),
    )
}

/// Runs the stage in input order on the calling thread.
pub fn run(vertices: &[Vertex]) -> Vec<VertexOutput> {
    vertices.iter().map(invoke).collect()
}

/// Runs the stage on the rayon pool. Output order matches input order.
pub fn run_parallel(vertices: &[Vertex]) -> Vec<VertexOutput> {
    vertices.par_iter().map(invoke).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Executor {
    parallel: bool,
}

impl Executor {
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn execute(&self, vertices: &[Vertex]) -> Vec<VertexOutput> {
        log::debug!(
            "running vertex stage over {} vertices ({})",
            vertices.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );
        if self.parallel {
            run_parallel(vertices)
        } else {
            run(vertices)
        }
    }
}
