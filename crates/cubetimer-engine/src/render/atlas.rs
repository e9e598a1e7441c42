//! Glyph atlas: a single R8 coverage texture filled shelf by shelf.

use std::collections::HashMap;

use fontdue::layout::GlyphRasterConfig;

pub(super) const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1;

/// Row-based rectangle packer. Rectangles never move or get freed; a timer
/// only ever shows digits, a colon, a period and a few status words.
#[derive(Debug)]
pub(super) struct ShelfPacker {
    size: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub(super) fn new(size: u32) -> Self {
        Self {
            size,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
        }
    }

    /// Reserves a `w` x `h` slot, returning its top-left corner.
    pub(super) fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w + 2 * GLYPH_PADDING > self.size {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > self.size {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > self.size {
            return None;
        }

        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }
}

#[derive(Debug, Copy, Clone)]
pub(super) struct CachedGlyph {
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

pub(super) struct GlyphAtlas {
    texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    packer: ShelfPacker,
    cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    warned_full: bool,
}

impl GlyphAtlas {
    pub(super) fn new(device: &wgpu::Device) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("cubetimer glyph atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            packer: ShelfPacker::new(ATLAS_SIZE),
            cache: HashMap::new(),
            warned_full: false,
        }
    }

    /// Returns the atlas slot for `key`, rasterizing and uploading on first use.
    pub(super) fn glyph(
        &mut self,
        queue: &wgpu::Queue,
        key: GlyphRasterConfig,
        font: &fontdue::Font,
    ) -> Option<CachedGlyph> {
        if let Some(cached) = self.cache.get(&key) {
            return Some(*cached);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        let (w, h) = (metrics.width as u32, metrics.height as u32);
        if w == 0 || h == 0 {
            return None;
        }

        let Some((x, y)) = self.packer.allocate(w, h) else {
            if !self.warned_full {
                log::warn!("glyph atlas is full ({ATLAS_SIZE}x{ATLAS_SIZE}); some glyphs will be missing");
                self.warned_full = true;
            }
            return None;
        };

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x, y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let size = ATLAS_SIZE as f32;
        let cached = CachedGlyph {
            uv_min: [x as f32 / size, y as f32 / size],
            uv_max: [(x + w) as f32 / size, (y + h) as f32 / size],
        };
        self.cache.insert(key, cached);
        Some(cached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slot_is_padded() {
        let mut packer = ShelfPacker::new(64);
        assert_eq!(packer.allocate(10, 10), Some((1, 1)));
        assert_eq!(packer.allocate(10, 12), Some((12, 1)));
    }

    #[test]
    fn wraps_to_next_shelf_below_tallest_glyph() {
        let mut packer = ShelfPacker::new(32);
        assert_eq!(packer.allocate(20, 8), Some((1, 1)));
        // 22 + 20 + 1 > 32: new row starts below the 8px shelf.
        assert_eq!(packer.allocate(20, 4), Some((1, 10)));
    }

    #[test]
    fn reports_full_atlas() {
        let mut packer = ShelfPacker::new(16);
        assert!(packer.allocate(14, 14).is_some());
        assert_eq!(packer.allocate(14, 14), None);
    }

    #[test]
    fn rejects_glyph_wider_than_atlas() {
        let mut packer = ShelfPacker::new(16);
        assert_eq!(packer.allocate(15, 1), None);
    }
}
