use std::io::Read;

use tracing::{debug, warn};

use crate::error::DecodeError;
use crate::frame::{Frame, Rect, Rgba};

/// Decode every frame of a GIF stream up front.
///
/// Frames keep their own rectangle and indices; no disposal compositing is
/// done. A frame without a local palette uses the global one, and the
/// frame's transparent index (if any) gets alpha 0.
pub fn decode_gif<R: Read>(reader: R) -> Result<Vec<Frame>, DecodeError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(reader)?;

    let global = decoder.global_palette().map(<[u8]>::to_vec);
    debug!(
        width = decoder.width(),
        height = decoder.height(),
        global_palette = global.as_ref().map_or(0, |p| p.len() / 3),
        "gif header"
    );

    let mut frames = Vec::new();
    while let Some(raw) = decoder.read_next_frame()? {
        let colors = raw
            .palette
            .as_deref()
            .or(global.as_deref())
            .ok_or(DecodeError::NoPalette(frames.len()))?;
        let palette = palette_from_rgb(colors, raw.transparent);

        if raw.left != 0 || raw.top != 0 {
            warn!(
                frame = frames.len(),
                left = raw.left,
                top = raw.top,
                "frame offset ignored, painting from the top-left corner"
            );
        }

        let rect = Rect {
            left: raw.left,
            top: raw.top,
            width: raw.width,
            height: raw.height,
        };
        let frame = Frame::new(
            rect,
            raw.width as usize,
            raw.buffer.to_vec(),
            palette,
            raw.delay,
        )?;
        frames.push(frame);
    }

    debug!(frames = frames.len(), "decoded gif");
    Ok(frames)
}

/// Expand packed RGB triplets, marking the transparent entry with alpha 0.
fn palette_from_rgb(rgb: &[u8], transparent: Option<u8>) -> Vec<Rgba> {
    rgb.chunks_exact(3)
        .enumerate()
        .map(|(i, c)| {
            let alpha = if transparent.map(usize::from) == Some(i) { 0 } else { 255 };
            Rgba::new(c[0], c[1], c[2], alpha)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    fn encode(global: &[u8], frames: &[gif::Frame<'_>]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut buf, 2, 2, global).unwrap();
            for f in frames {
                encoder.write_frame(f).unwrap();
            }
        }
        buf
    }

    #[test]
    fn frames_use_local_or_global_palette() {
        let global = [255, 0, 0, 0, 0, 255];
        let first = gif::Frame {
            width: 2,
            height: 2,
            delay: 7,
            transparent: Some(1),
            buffer: Cow::Borrowed(&[0, 1, 1, 0]),
            ..gif::Frame::default()
        };
        let second = gif::Frame {
            width: 2,
            height: 2,
            palette: Some(vec![0, 255, 0, 9, 9, 9]),
            buffer: Cow::Borrowed(&[1, 1, 0, 0]),
            ..gif::Frame::default()
        };
        let data = encode(&global, &[first, second]);

        let frames = decode_gif(data.as_slice()).unwrap();
        assert_eq!(frames.len(), 2);

        assert_eq!(frames[0].delay(), 7);
        assert_eq!(frames[0].palette()[0], Rgba::new(255, 0, 0, 255));
        assert_eq!(frames[0].palette()[1], Rgba::new(0, 0, 255, 0));
        assert_eq!(frames[0].pixels(), &[0, 1, 1, 0]);

        assert_eq!(frames[1].palette()[0], Rgba::opaque(0, 255, 0));
        assert_eq!(frames[1].palette()[1], Rgba::opaque(9, 9, 9));
        assert_eq!(frames[1].index_at(0, 0), 1);
        assert_eq!(frames[1].rect().width, 2);
        assert_eq!(frames[1].stride(), 2);
    }

    #[test]
    fn garbage_is_a_gif_error() {
        let err = decode_gif(&b"definitely not a gif"[..]).unwrap_err();
        assert!(matches!(err, DecodeError::Gif(_)));
    }

    #[test]
    fn transparent_index_marks_single_entry() {
        let palette = palette_from_rgb(&[1, 2, 3, 4, 5, 6, 7, 8, 9], Some(2));
        assert_eq!(
            palette,
            vec![
                Rgba::opaque(1, 2, 3),
                Rgba::opaque(4, 5, 6),
                Rgba::new(7, 8, 9, 0),
            ]
        );
        assert!(palette_from_rgb(&[1, 2, 3], None).iter().all(|c| c.a == 255));
    }
}
