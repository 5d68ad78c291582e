use anyhow::{Context, Result};
use glam::{Vec3, Vec4};
use vertcolor::{buffer, logging, spirv, Executor, HostConfig, Vertex};

fn main() -> Result<()> {
    let config = HostConfig::from_env().context("failed to read configuration")?;
    logging::init_logging(config.logging.clone());

    let binding = Vertex::binding_description(0);
    log::info!(
        "binding {}: stride {} bytes, per-vertex",
        binding.binding,
        binding.stride
    );
    for attr in Vertex::attribute_descriptions(binding.binding) {
        log::info!(
            "  location {}: {:?} at offset {}",
            attr.location,
            attr.format,
            attr.offset
        );
    }

    let triangle = [
        Vertex::new(Vec3::new(-0.5, -0.5, 0.0), Vec4::new(1.0, 0.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(0.5, -0.5, 0.0), Vec4::new(0.0, 1.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(0.0, 0.5, 0.0), Vec4::new(0.0, 0.0, 1.0, 1.0)),
    ];
    let vertices = buffer::vertices_from_bytes(buffer::vertices_as_bytes(&triangle))
        .context("failed to decode vertex buffer")?;

    let executor = Executor::new(config.parallel);
    for (i, out) in executor.execute(&vertices).iter().enumerate() {
        log::info!(
            "vertex {}: clip {:?} color {:?}",
            i,
            out.clip_position.to_array(),
            out.vert_color.to_array()
        );
    }

    if let Some(path) = &config.spirv_path {
        let words = spirv::load_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        spirv::verify_vertex_module(&words, &config.entry_point)
            .with_context(|| format!("{} does not match the vertex interface", path.display()))?;
        log::info!("{} exposes vertex entry point `{}`", path.display(), config.entry_point);
    }

    #[cfg(feature = "embedded-spirv")]
    {
        let words = spirv::embedded_module().context("embedded module is malformed")?;
        spirv::verify_vertex_module(&words, &config.entry_point)
            .context("embedded module does not match the vertex interface")?;
        log::info!("embedded module: {} words", words.len());
    }

    Ok(())
}
