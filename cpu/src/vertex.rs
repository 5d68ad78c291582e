use std::mem::{offset_of, size_of};

use ash::vk;
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use vertcolor_shader::{IN_COLOR_LOCATION, POSITION_LOCATION};

/// One vertex as laid out in a bound vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const STRIDE: usize = size_of::<Vertex>();

    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn color(&self) -> Vec4 {
        Vec4::from_array(self.color)
    }

    pub fn binding_description(binding: u32) -> vk::VertexInputBindingDescription {
        vk::VertexInputBindingDescription::default()
            .binding(binding)
            .stride(Self::STRIDE as u32)
            .input_rate(vk::VertexInputRate::VERTEX)
    }

    /// `Position` and `inColor`, in location order.
    pub fn attribute_descriptions(binding: u32) -> [vk::VertexInputAttributeDescription; 2] {
        [
            vk::VertexInputAttributeDescription::default()
                .binding(binding)
                .location(POSITION_LOCATION)
                .format(vk::Format::R32G32B32_SFLOAT)
                .offset(offset_of!(Vertex, position) as u32),
            vk::VertexInputAttributeDescription::default()
                .binding(binding)
                .location(IN_COLOR_LOCATION)
                .format(vk::Format::R32G32B32A32_SFLOAT)
                .offset(offset_of!(Vertex, color) as u32),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 28);
        assert_eq!(offset_of!(Vertex, position), 0);
        assert_eq!(offset_of!(Vertex, color), 12);
    }

    #[test]
    fn binding_matches_record() {
        let binding = Vertex::binding_description(2);
        assert_eq!(binding.binding, 2);
        assert_eq!(binding.stride, 28);
        assert_eq!(binding.input_rate, vk::VertexInputRate::VERTEX);
    }

    #[test]
    fn attributes_match_shader_interface() {
        let [position, color] = Vertex::attribute_descriptions(0);

        assert_eq!(position.location, 0);
        assert_eq!(position.binding, 0);
        assert_eq!(position.format, vk::Format::R32G32B32_SFLOAT);
        assert_eq!(position.offset, 0);

        assert_eq!(color.location, 1);
        assert_eq!(color.binding, 0);
        assert_eq!(color.format, vk::Format::R32G32B32A32_SFLOAT);
        assert_eq!(color.offset, 12);
    }

    #[test]
    fn accessors_round_trip_glam() {
        let v = Vertex::new(Vec3::new(1.0, -2.0, 3.5), Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(v.position, [1.0, -2.0, 3.5]);
        assert_eq!(v.color(), Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(v.position(), Vec3::new(1.0, -2.0, 3.5));
    }
}
