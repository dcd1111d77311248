use gifterm_core::color::OutputMode;
use gifterm_core::grid::CellGrid;

/// Serialize the whole grid to an ANSI byte buffer.
/// Colors are only emitted when they differ from the previous cell.
pub fn render_grid(grid: &CellGrid, mode: OutputMode, buf: &mut Vec<u8>) {
    buf.clear();

    // Move cursor to top-left
    buf.extend_from_slice(b"\x1b[H");

    let mut prev_fg = None;
    let mut prev_bg = None;
    let mut utf8 = [0u8; 4];

    for (row, cells) in grid.rows().enumerate() {
        if row > 0 {
            buf.extend_from_slice(b"\r\n");
        }
        for cell in cells {
            let fg = mode.color_index(cell.fg);
            let bg = mode.color_index(cell.bg);

            if prev_fg != Some(fg) {
                write_fg(buf, fg);
                prev_fg = Some(fg);
            }
            if prev_bg != Some(bg) {
                write_bg(buf, bg);
                prev_bg = Some(bg);
            }

            buf.extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
        }
    }

    // Reset colors
    buf.extend_from_slice(b"\x1b[0m");
}

fn write_fg(buf: &mut Vec<u8>, color: Option<u8>) {
    match color {
        Some(n) => {
            buf.extend_from_slice(b"\x1b[38;5;");
            write_u8(buf, n);
            buf.push(b'm');
        }
        None => buf.extend_from_slice(b"\x1b[39m"),
    }
}

fn write_bg(buf: &mut Vec<u8>, color: Option<u8>) {
    match color {
        Some(n) => {
            buf.extend_from_slice(b"\x1b[48;5;");
            write_u8(buf, n);
            buf.push(b'm');
        }
        None => buf.extend_from_slice(b"\x1b[49m"),
    }
}

/// Fast integer-to-ASCII for u8 values (0-255), no allocation.
fn write_u8(buf: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        buf.push(b'0' + v / 100);
        buf.push(b'0' + (v / 10) % 10);
        buf.push(b'0' + v % 10);
    } else if v >= 10 {
        buf.push(b'0' + v / 10);
        buf.push(b'0' + v % 10);
    } else {
        buf.push(b'0' + v);
    }
}
