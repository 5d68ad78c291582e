use crate::{
    error::{Error, Result},
    vertex::Vertex,
};

/// Decodes tightly packed vertex records. The input may have any alignment.
pub fn vertices_from_bytes(bytes: &[u8]) -> Result<Vec<Vertex>> {
    if bytes.len() % Vertex::STRIDE != 0 {
        return Err(Error::VertexBuffer {
            len: bytes.len(),
            stride: Vertex::STRIDE,
        });
    }
    Ok(bytes
        .chunks_exact(Vertex::STRIDE)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

pub fn vertices_as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn triangle() -> Vec<Vertex> {
        vec![
            Vertex::new(Vec3::new(-0.5, -0.5, 0.0), Vec4::new(1.0, 0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(0.5, -0.5, 0.0), Vec4::new(0.0, 1.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(0.0, 0.5, 0.0), Vec4::new(0.0, 0.0, 1.0, 1.0)),
        ]
    }

    #[test]
    fn decodes_packed_records() {
        let vertices = triangle();
        let bytes = vertices_as_bytes(&vertices);
        assert_eq!(bytes.len(), 3 * 28);
        assert_eq!(vertices_from_bytes(bytes).unwrap(), vertices);
    }

    #[test]
    fn accepts_unaligned_input() {
        let vertices = triangle();
        let mut storage = vec![0u8];
        storage.extend_from_slice(vertices_as_bytes(&vertices));
        assert_eq!(vertices_from_bytes(&storage[1..]).unwrap(), vertices);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(vertices_from_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn rejects_partial_record() {
        let vertices = triangle();
        let bytes = vertices_as_bytes(&vertices);
        match vertices_from_bytes(&bytes[..bytes.len() - 4]) {
            Err(Error::VertexBuffer { len, stride }) => {
                assert_eq!(len, 80);
                assert_eq!(stride, 28);
            }
            other => panic!("expected vertex buffer error, got {:?}", other),
        }
    }
}
