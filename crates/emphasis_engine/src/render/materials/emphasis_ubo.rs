//! Emphasis material uniform data for GPU upload

use bitflags::bitflags;

use super::emphasis_material::EmphasisMaterial;

bitflags! {
    /// Switches packed into [`EmphasisMaterialUBO::flags`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EmphasisFlags: u32 {
        /// Fill surfaces
        const FILL = 1;
        /// Draw edges
        const EDGES = 1 << 1;
        /// Draw backfaces
        const BACKFACES = 1 << 2;
    }
}

/// Emphasis material uniform data for GPU
///
/// Layout must match the emphasis uniform block in the ghost/highlight shaders.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisMaterialUBO {
    /// Fill color - RGB + fill alpha
    pub fill_color: [f32; 4],
    /// Edge color - RGB + edge alpha
    pub edge_color: [f32; 4],
    /// Edge width, unused, unused, unused
    pub edge_params: [f32; 4],
    /// [`EmphasisFlags`] bits, unused, unused, unused
    pub flags: [u32; 4],
}

impl EmphasisMaterialUBO {
    /// Snapshot a material's current values
    pub fn from_material(material: &EmphasisMaterial) -> Self {
        let fill = material.fill_color();
        let edge = material.edge_color();

        let mut flags = EmphasisFlags::empty();
        flags.set(EmphasisFlags::FILL, material.fill());
        flags.set(EmphasisFlags::EDGES, material.edges());
        flags.set(EmphasisFlags::BACKFACES, material.backfaces());

        Self {
            fill_color: [fill.x, fill.y, fill.z, material.fill_alpha()],
            edge_color: [edge.x, edge.y, edge.z, material.edge_alpha()],
            edge_params: [material.edge_width(), 0.0, 0.0, 0.0],
            flags: [flags.bits(), 0, 0, 0],
        }
    }

    /// Decoded switch bits
    pub const fn emphasis_flags(&self) -> EmphasisFlags {
        EmphasisFlags::from_bits_truncate(self.flags[0])
    }

    /// Get the size of this UBO in bytes
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }

    /// Get a byte slice of this UBO for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

// Safety: only f32 and u32 arrays, 64 bytes with no padding
unsafe impl bytemuck::Pod for EmphasisMaterialUBO {}
unsafe impl bytemuck::Zeroable for EmphasisMaterialUBO {}
