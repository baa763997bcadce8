use crate::foundation::{
    error::{AssetError, AssetResult},
    math::{mul_div255_u8, unpremul_u8},
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AssetResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AssetError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Convert premultiplied RGBA8 to straight alpha for PNG encoding.
pub fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = unpremul_u8(*c, a);
        }
    }
}

/// Drop the alpha channel of an opaque RGBA8 buffer.
pub fn rgba_to_rgb(data: &[u8]) -> AssetResult<Vec<u8>> {
    if !data.len().is_multiple_of(4) {
        return Err(AssetError::render("rgba_to_rgb expects rgba8 data"));
    }
    let mut out = Vec::with_capacity(data.len() / 4 * 3);
    for px in data.chunks_exact(4) {
        if px[3] != 255 {
            return Err(AssetError::render(
                "cannot drop alpha from a non-opaque pixel",
            ));
        }
        out.extend_from_slice(&px[..3]);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
