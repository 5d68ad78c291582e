//! Minimal SPIR-V inspection: enough to confirm a compiled module exposes
//! the vertex entry point the host binds against.

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use ash::util::read_spv;

use crate::error::{Error, Result};

pub const MAGIC: u32 = 0x0723_0203;
const HEADER_WORDS: usize = 5;
const OP_ENTRY_POINT: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionModel {
    Vertex,
    Fragment,
    GlCompute,
    Other(u32),
}

impl ExecutionModel {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => ExecutionModel::Vertex,
            4 => ExecutionModel::Fragment,
            5 => ExecutionModel::GlCompute,
            other => ExecutionModel::Other(other),
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            ExecutionModel::Vertex => 0,
            ExecutionModel::Fragment => 4,
            ExecutionModel::GlCompute => 5,
            ExecutionModel::Other(raw) => raw,
        }
    }
}

/// Splits a module into words, fixing up byte order when needed.
pub fn read_words(bytes: &[u8]) -> Result<Vec<u32>> {
    let words = read_spv(&mut Cursor::new(bytes)).map_err(|e| Error::Spirv(e.to_string()))?;
    if words.len() < HEADER_WORDS {
        return Err(Error::Spirv(format!(
            "module is {} words, shorter than the header",
            words.len()
        )));
    }
    if words[0] != MAGIC {
        return Err(Error::Spirv(format!("bad magic number {:#010x}", words[0])));
    }
    Ok(words)
}

/// Looks up an `OpEntryPoint` by its literal name.
pub fn find_entry_point(words: &[u32], name: &str) -> Result<ExecutionModel> {
    let mut cursor = HEADER_WORDS;
    while cursor < words.len() {
        let word_count = (words[cursor] >> 16) as usize;
        let opcode = words[cursor] & 0xffff;
        if word_count == 0 || cursor + word_count > words.len() {
            return Err(Error::Spirv(format!(
                "truncated instruction at word {}",
                cursor
            )));
        }
        if opcode == OP_ENTRY_POINT && word_count >= 4 {
            let operands = &words[cursor + 1..cursor + word_count];
            if literal_string(&operands[2..]) == name.as_bytes() {
                return Ok(ExecutionModel::from_raw(operands[0]));
            }
        }
        cursor += word_count;
    }
    Err(Error::EntryPointMissing(name.to_owned()))
}

/// Checks that `name` is present and is a vertex entry point.
pub fn verify_vertex_module(words: &[u32], name: &str) -> Result<()> {
    match find_entry_point(words, name)? {
        ExecutionModel::Vertex => {
            log::debug!("found vertex entry point `{}`", name);
            Ok(())
        }
        model => Err(Error::WrongExecutionModel {
            name: name.to_owned(),
            model: model.raw(),
        }),
    }
}

// Literal strings are nul-terminated UTF-8 packed little-endian into words.
fn literal_string(words: &[u32]) -> Vec<u8> {
    words
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .take_while(|&b| b != 0)
        .collect()
}

/// Relative paths are tried next to the executable first, then against the
/// working directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_relative() {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(path)));
        if let Some(candidate) = beside_exe.filter(|p| p.is_file()) {
            return candidate;
        }
    }
    path.to_path_buf()
}

pub fn load_file(path: &Path) -> Result<Vec<u32>> {
    let path = resolve_path(path);
    log::info!("loading SPIR-V module from {}", path.display());
    let bytes = std::fs::read(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    read_words(&bytes)
}

/// The module compiled by `vertcolor-spirv` at build time.
#[cfg(feature = "embedded-spirv")]
pub fn embedded_module() -> Result<Vec<u32>> {
    read_words(vertcolor_spirv::SHADER_BYTES)
}
