use image::RgbaImage;

/// Longest side a preview texture may have: the display width, capped by
/// what the GPU accepts.
pub fn preview_side(max_texture_side: usize, preview_width: f32) -> u32 {
    let wanted = preview_width.ceil().max(1.0) as u32;
    let limit = u32::try_from(max_texture_side).unwrap_or(u32::MAX).max(1);
    wanted.min(limit)
}

/// Decodes an upload for display, shrunk so that neither side exceeds `max_side`.
pub fn decode_preview(bytes: &[u8], max_side: u32) -> Option<RgbaImage> {
    let decoded = image::load_from_memory(bytes).ok()?;

    let fitted = if decoded.width() > max_side || decoded.height() > max_side {
        decoded.thumbnail(max_side, max_side)
    } else {
        decoded
    };

    Some(fitted.to_rgba8())
}
