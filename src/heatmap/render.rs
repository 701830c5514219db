//! Heatmap image rendering
//!
//! Draws a players x turns chip matrix as a color-mapped grid with a title,
//! axis labels, light gridlines, and a "Chips" color bar. Labels need a
//! system font; when none of the known font paths exists the image is still
//! rendered, just without text.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fs;

use super::matrix::ChipMatrix;

const MARGIN_TOP: u32 = 44;
const MARGIN_BOTTOM: u32 = 52;
const MARGIN_LEFT: u32 = 68;
const COLORBAR_GAP: u32 = 28;
const COLORBAR_WIDTH: u32 = 22;
const MARGIN_RIGHT: u32 = COLORBAR_GAP + COLORBAR_WIDTH + 64;

const BG_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const GRID_COLOR: Rgb<u8> = Rgb([225, 225, 225]);
const FRAME_COLOR: Rgb<u8> = Rgb([120, 120, 120]);
const TEXT_COLOR: Rgb<u8> = Rgb([40, 40, 40]);

const TITLE_SCALE: f32 = 20.0;
const LABEL_SCALE: f32 = 16.0;
const TICK_SCALE: f32 = 12.0;

/// Font locations worth probing, most likely first.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load the first usable label font, if any.
pub fn load_label_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        if let Ok(bytes) = fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(bytes) {
                return Some(font);
            }
        }
    }
    None
}

/// Warm yellow-orange-red ramp (YlOrRd endpoints), `t` in 0..=1.
pub fn warm_color(t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        ([255.0, 255.0, 178.0], [254.0, 178.0, 76.0], t * 2.0)
    } else {
        ([254.0, 178.0, 76.0], [189.0, 0.0, 38.0], (t - 0.5) * 2.0)
    };
    let channel = |i: usize| (from[i] + (to[i] - from[i]) * local).round() as u8;
    Rgb([channel(0), channel(1), channel(2)])
}

/// Pixels per cell along one axis, sized so small matrices stay readable
/// and long games stay bounded.
fn cell_size(count: usize, target: u32, min: u32, max: u32) -> u32 {
    (target / count.max(1) as u32).clamp(min, max)
}

/// Render a players x turns matrix. Rows become heatmap rows (players),
/// columns become turns.
pub fn render_heatmap(matrix: &ChipMatrix, title: &str) -> RgbImage {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let cell_w = cell_size(cols, 1152, 3, 48);
    let cell_h = cell_size(rows, 768, 12, 48);
    let plot_w = cols as u32 * cell_w;
    let plot_h = rows as u32 * cell_h;
    let width = MARGIN_LEFT + plot_w + MARGIN_RIGHT;
    let height = MARGIN_TOP + plot_h + MARGIN_BOTTOM;

    let mut img = RgbImage::from_pixel(width, height, BG_COLOR);

    let (min, max) = value_range(matrix);
    let normalize = |value: u32| -> f32 {
        if max == min {
            0.5
        } else {
            (value - min) as f32 / (max - min) as f32
        }
    };

    // Cells
    for row in 0..rows {
        for col in 0..cols {
            let color = warm_color(normalize(matrix.get(row, col)));
            let x0 = MARGIN_LEFT + col as u32 * cell_w;
            let y0 = MARGIN_TOP + row as u32 * cell_h;
            for dy in 0..cell_h {
                for dx in 0..cell_w {
                    img.put_pixel(x0 + dx, y0 + dy, color);
                }
            }
        }
    }

    // Light gridlines on every cell boundary, outer border included
    for k in 0..=cols as u32 {
        let x = (MARGIN_LEFT + k * cell_w).min(width - 1);
        for y in MARGIN_TOP..MARGIN_TOP + plot_h {
            img.put_pixel(x, y, GRID_COLOR);
        }
    }
    for k in 0..=rows as u32 {
        let y = (MARGIN_TOP + k * cell_h).min(height - 1);
        for x in MARGIN_LEFT..=MARGIN_LEFT + plot_w {
            img.put_pixel(x, y, GRID_COLOR);
        }
    }

    draw_colorbar(&mut img, plot_h, width);

    if let Some(font) = load_label_font() {
        draw_labels(
            &mut img, &font, title, rows, cols, cell_w, cell_h, plot_w, plot_h, min, max,
        );
    }

    img
}

fn value_range(matrix: &ChipMatrix) -> (u32, u32) {
    let mut min = u32::MAX;
    let mut max = 0;
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            let v = matrix.get(row, col);
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

/// Vertical gradient bar at the right edge, high values on top.
fn draw_colorbar(img: &mut RgbImage, plot_h: u32, width: u32) {
    let x0 = width - MARGIN_RIGHT + COLORBAR_GAP;
    for dy in 0..plot_h {
        let t = if plot_h > 1 {
            1.0 - dy as f32 / (plot_h - 1) as f32
        } else {
            1.0
        };
        let color = warm_color(t);
        for dx in 0..COLORBAR_WIDTH {
            img.put_pixel(x0 + dx, MARGIN_TOP + dy, color);
        }
    }

    // Thin frame
    for dx in 0..COLORBAR_WIDTH {
        img.put_pixel(x0 + dx, MARGIN_TOP, FRAME_COLOR);
        img.put_pixel(x0 + dx, MARGIN_TOP + plot_h - 1, FRAME_COLOR);
    }
    for dy in 0..plot_h {
        img.put_pixel(x0, MARGIN_TOP + dy, FRAME_COLOR);
        img.put_pixel(x0 + COLORBAR_WIDTH - 1, MARGIN_TOP + dy, FRAME_COLOR);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    img: &mut RgbImage,
    font: &FontVec,
    title: &str,
    rows: usize,
    cols: usize,
    cell_w: u32,
    cell_h: u32,
    plot_w: u32,
    plot_h: u32,
    min: u32,
    max: u32,
) {
    let width = img.width();

    // Title, centered over the plot area
    let title_scale = PxScale::from(TITLE_SCALE);
    let (title_w, _) = text_size(title_scale, font, title);
    let title_x = (MARGIN_LEFT + plot_w / 2) as i32 - title_w as i32 / 2;
    draw_text_mut(img, TEXT_COLOR, title_x.max(0), 10, title_scale, font, title);

    // Axis labels
    let label_scale = PxScale::from(LABEL_SCALE);
    let (turn_w, turn_h) = text_size(label_scale, font, "Turn");
    draw_text_mut(
        img,
        TEXT_COLOR,
        (MARGIN_LEFT + plot_w / 2) as i32 - turn_w as i32 / 2,
        (MARGIN_TOP + plot_h + MARGIN_BOTTOM / 2) as i32 - turn_h as i32 / 2,
        label_scale,
        font,
        "Turn",
    );
    draw_text_vertical(
        img,
        font,
        label_scale,
        6,
        (MARGIN_TOP + plot_h / 2) as i32,
        "Player",
    );

    // Tick labels: every player row, and a thinned set of turn columns
    let tick_scale = PxScale::from(TICK_SCALE);
    if rows <= 40 {
        for row in 0..rows {
            let text = row.to_string();
            let (w, h) = text_size(tick_scale, font, &text);
            let y = MARGIN_TOP + row as u32 * cell_h + cell_h / 2;
            draw_text_mut(
                img,
                TEXT_COLOR,
                MARGIN_LEFT as i32 - w as i32 - 6,
                y as i32 - h as i32 / 2,
                tick_scale,
                font,
                &text,
            );
        }
    }
    let step = cols.div_ceil(16).max(1);
    for col in (0..cols).step_by(step) {
        let text = col.to_string();
        let (w, _) = text_size(tick_scale, font, &text);
        let x = MARGIN_LEFT + col as u32 * cell_w + cell_w / 2;
        draw_text_mut(
            img,
            TEXT_COLOR,
            x as i32 - w as i32 / 2,
            (MARGIN_TOP + plot_h + 6) as i32,
            tick_scale,
            font,
            &text,
        );
    }

    // Color bar label and range
    let bar_x = width - MARGIN_RIGHT + COLORBAR_GAP;
    draw_text_mut(
        img,
        TEXT_COLOR,
        bar_x as i32 - 4,
        (MARGIN_TOP / 2) as i32,
        label_scale,
        font,
        "Chips",
    );
    draw_text_mut(
        img,
        TEXT_COLOR,
        (bar_x + COLORBAR_WIDTH + 6) as i32,
        MARGIN_TOP as i32,
        tick_scale,
        font,
        &max.to_string(),
    );
    let (_, min_h) = text_size(tick_scale, font, &min.to_string());
    draw_text_mut(
        img,
        TEXT_COLOR,
        (bar_x + COLORBAR_WIDTH + 6) as i32,
        (MARGIN_TOP + plot_h) as i32 - min_h as i32,
        tick_scale,
        font,
        &min.to_string(),
    );
}

/// Stack characters vertically, a stand-in for rotated axis text.
fn draw_text_vertical(
    img: &mut RgbImage,
    font: &FontVec,
    scale: PxScale,
    x: i32,
    center_y: i32,
    text: &str,
) {
    let mut buf = [0u8; 4];
    let line_h = scale.y.ceil() as i32;
    let total = line_h * text.chars().count() as i32;
    let mut y = center_y - total / 2;
    for ch in text.chars() {
        let s = ch.encode_utf8(&mut buf);
        draw_text_mut(img, TEXT_COLOR, x, y, scale, font, s);
        y += line_h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_color_endpoints() {
        assert_eq!(warm_color(0.0), Rgb([255, 255, 178]));
        assert_eq!(warm_color(1.0), Rgb([189, 0, 38]));
        assert_eq!(warm_color(0.5), Rgb([254, 178, 76]));
        // Out-of-range input clamps instead of wrapping.
        assert_eq!(warm_color(-1.0), warm_color(0.0));
        assert_eq!(warm_color(2.0), warm_color(1.0));
    }

    #[test]
    fn test_cell_size_bounds() {
        assert_eq!(cell_size(1, 1152, 3, 48), 48);
        assert_eq!(cell_size(10_000, 1152, 3, 48), 3);
        assert!(cell_size(100, 1152, 3, 48) <= 48);
    }

    #[test]
    fn test_image_grows_with_matrix() {
        let small = ChipMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let wide =
            ChipMatrix::from_rows(&[vec![1, 2, 3, 4, 5, 6], vec![6, 5, 4, 3, 2, 1]]).unwrap();
        let img_small = render_heatmap(&small, "t");
        let img_wide = render_heatmap(&wide, "t");
        assert!(img_wide.width() > img_small.width());
        assert_eq!(img_wide.height(), img_small.height());
    }

    #[test]
    fn test_cells_use_value_scaled_colors() {
        // One row: 0 (range min) and 10 (range max).
        let m = ChipMatrix::from_rows(&[vec![0, 10]]).unwrap();
        let img = render_heatmap(&m, "t");

        let cell_w = cell_size(2, 1152, 3, 48);
        let cell_h = cell_size(1, 768, 12, 48);
        let low = *img.get_pixel(MARGIN_LEFT + cell_w / 2, MARGIN_TOP + cell_h / 2);
        let high = *img.get_pixel(MARGIN_LEFT + cell_w + cell_w / 2, MARGIN_TOP + cell_h / 2);
        assert_eq!(low, warm_color(0.0));
        assert_eq!(high, warm_color(1.0));
    }

    #[test]
    fn test_uniform_matrix_renders_midscale() {
        let m = ChipMatrix::from_rows(&[vec![4, 4], vec![4, 4]]).unwrap();
        let img = render_heatmap(&m, "t");
        let cell_w = cell_size(2, 1152, 3, 48);
        let cell_h = cell_size(2, 768, 12, 48);
        let px = *img.get_pixel(MARGIN_LEFT + cell_w / 2, MARGIN_TOP + cell_h / 2);
        assert_eq!(px, warm_color(0.5));
    }
}
