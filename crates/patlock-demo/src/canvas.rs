#![forbid(unsafe_code)]

//! Cell rasterization of the lock.
//!
//! Layout space is measured in terminal rows. A character cell is roughly
//! twice as tall as it is wide, so one layout unit spans
//! [`COLUMNS_PER_UNIT`] columns horizontally and one row vertically. The top
//! [`HEADER_ROWS`] rows hold the hint and status lines.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use patlock::{GridPoint, Point, PointState, Rect, Rgb, Segment};
use patlock::widgets::{PointVisual, SegmentVisual};

/// Rows reserved above the grid.
pub const HEADER_ROWS: u16 = 2;

/// Terminal columns per layout unit.
pub const COLUMNS_PER_UNIT: f64 = 2.0;

/// Colour for plain text.
pub const TEXT: Rgb = Rgb::new(0xE0, 0xE0, 0xE0);

const SELECTED_GLYPH: char = '█';
const IDLE_GLYPH: char = '▒';
const STROKE_GLYPH: char = '•';

/// Layout position of the center of cell `(column, row)`.
#[inline]
pub fn cell_to_layout(column: u16, row: u16) -> Point {
    Point::new(
        (f64::from(column) + 0.5) / COLUMNS_PER_UNIT,
        f64::from(row) + 0.5,
    )
}

/// Cell containing a layout position, if it has non-negative coordinates.
#[inline]
pub fn layout_to_cell(position: Point) -> Option<(u16, u16)> {
    let column = (position.x * COLUMNS_PER_UNIT).floor();
    let row = position.y.floor();
    let max = f64::from(u16::MAX);
    if !(column >= 0.0 && row >= 0.0) || column > max || row > max {
        return None;
    }
    Some((column as u16, row as u16))
}

/// The largest square below the header, centered horizontally.
pub fn grid_area(columns: u16, rows: u16) -> Rect {
    let width = f64::from(columns) / COLUMNS_PER_UNIT;
    let height = f64::from(rows.saturating_sub(HEADER_ROWS));
    let side = width.min(height);
    Rect::new(
        (width - side) / 2.0,
        f64::from(HEADER_ROWS) + (height - side) / 2.0,
        side,
        side,
    )
}

/// A coloured character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Character to print.
    pub ch: char,
    /// Foreground colour.
    pub color: Rgb,
}

/// A grid of optional glyphs, one per terminal cell.
#[derive(Debug, Clone)]
pub struct Canvas {
    columns: u16,
    rows: u16,
    cells: Vec<Option<Glyph>>,
}

impl Canvas {
    /// An empty canvas.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; usize::from(columns) * usize::from(rows)],
        }
    }

    fn index(&self, column: u16, row: u16) -> Option<usize> {
        (column < self.columns && row < self.rows)
            .then(|| usize::from(row) * usize::from(self.columns) + usize::from(column))
    }

    /// Glyph at `(column, row)`.
    pub fn get(&self, column: u16, row: u16) -> Option<Glyph> {
        self.index(column, row).and_then(|i| self.cells[i])
    }

    /// Set a cell. Out-of-bounds writes are dropped.
    pub fn put(&mut self, column: u16, row: u16, glyph: Glyph) {
        if let Some(i) = self.index(column, row) {
            self.cells[i] = Some(glyph);
        }
    }

    /// Write `text` starting at `(column, row)`, clipped to the canvas.
    pub fn text(&mut self, column: u16, row: u16, text: &str, color: Rgb) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            let Some(col) = column.checked_add(offset) else {
                break;
            };
            self.put(col, row, Glyph { ch, color });
        }
    }

    /// Mark every cell a segment passes through.
    pub fn stroke(&mut self, segment: Segment, glyph: Glyph) {
        if segment.is_degenerate() {
            if let Some((column, row)) = layout_to_cell(segment.start) {
                self.put(column, row, glyph);
            }
            return;
        }
        let span_columns = (segment.end.x - segment.start.x).abs() * COLUMNS_PER_UNIT;
        let span_rows = (segment.end.y - segment.start.y).abs();
        let steps = (span_columns.max(span_rows) * 2.0).ceil().max(1.0);
        let steps = steps.min(f64::from(u16::MAX)) as u32;
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            if let Some((column, row)) = layout_to_cell(segment.lerp(t)) {
                self.put(column, row, glyph);
            }
        }
    }

    /// Fill every cell whose center lies on the point's disc.
    ///
    /// A disc smaller than a cell still marks the cell holding its center.
    pub fn fill_disc(&mut self, point: &GridPoint, glyph: Glyph) {
        let bounds = point.bounds();
        let top_left = layout_to_cell(Point::new(bounds.x.max(0.0), bounds.y.max(0.0)));
        let bottom_right = layout_to_cell(Point::new(bounds.right(), bounds.bottom()));
        if let (Some((c0, r0)), Some((c1, r1))) = (top_left, bottom_right) {
            for row in r0..=r1.min(self.rows.saturating_sub(1)) {
                for column in c0..=c1.min(self.columns.saturating_sub(1)) {
                    if point.contains(cell_to_layout(column, row)) {
                        self.put(column, row, glyph);
                    }
                }
            }
        }
        if let Some((column, row)) = layout_to_cell(point.center) {
            self.put(column, row, glyph);
        }
    }

    /// Draw a connector.
    pub fn draw_segment(&mut self, visual: &SegmentVisual) {
        self.stroke(
            visual.segment,
            Glyph {
                ch: STROKE_GLYPH,
                color: visual.color,
            },
        );
    }

    /// Draw a grid point.
    pub fn draw_point(&mut self, visual: &PointVisual) {
        let ch = match visual.state {
            PointState::Selected => SELECTED_GLYPH,
            PointState::Idle => IDLE_GLYPH,
        };
        self.fill_disc(
            &visual.point,
            Glyph {
                ch,
                color: visual.color,
            },
        );
    }

    /// Emit the canvas to `out`, overwriting the whole screen.
    pub fn flush(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
        let mut current: Option<Rgb> = None;
        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row))?;
            for column in 0..self.columns {
                match self.get(column, row) {
                    Some(glyph) => {
                        if current != Some(glyph.color) {
                            let Rgb { r, g, b } = glyph.color;
                            queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                            current = Some(glyph.color);
                        }
                        queue!(out, Print(glyph.ch))?;
                    }
                    None => queue!(out, Print(' '))?,
                }
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patlock::{GridLayout, PointLabel};

    const DOT: Glyph = Glyph {
        ch: '*',
        color: TEXT,
    };

    #[test]
    fn cell_mapping_round_trips() {
        for (column, row) in [(0, 0), (1, 0), (17, 5), (79, 23)] {
            assert_eq!(layout_to_cell(cell_to_layout(column, row)), Some((column, row)));
        }
        assert_eq!(cell_to_layout(3, 2), Point::new(1.75, 2.5));
    }

    #[test]
    fn negative_positions_have_no_cell() {
        assert_eq!(layout_to_cell(Point::new(-0.1, 3.0)), None);
        assert_eq!(layout_to_cell(Point::new(3.0, -2.0)), None);
        assert_eq!(layout_to_cell(Point::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn grid_area_is_centered_below_header() {
        let area = grid_area(80, 24);
        assert_eq!(area.width, 22.0);
        assert_eq!(area.height, 22.0);
        assert_eq!(area.y, 2.0);
        assert_eq!(area.x, 9.0);
    }

    #[test]
    fn grid_area_on_tiny_terminal_is_empty() {
        assert!(grid_area(10, 1).is_empty());
    }

    #[test]
    fn text_is_clipped() {
        let mut canvas = Canvas::new(4, 1);
        canvas.text(1, 0, "hello", TEXT);
        assert_eq!(canvas.get(0, 0), None);
        assert_eq!(canvas.get(1, 0).map(|g| g.ch), Some('h'));
        assert_eq!(canvas.get(3, 0).map(|g| g.ch), Some('l'));
    }

    #[test]
    fn horizontal_stroke_covers_every_column() {
        let mut canvas = Canvas::new(20, 5);
        let segment = Segment::new(Point::new(1.25, 2.5), Point::new(6.25, 2.5));
        canvas.stroke(segment, DOT);
        for column in 2..=12 {
            assert_eq!(canvas.get(column, 2), Some(DOT), "column {column}");
        }
        assert_eq!(canvas.get(1, 2), None);
        assert_eq!(canvas.get(13, 2), None);
    }

    #[test]
    fn degenerate_stroke_marks_one_cell() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke(Segment::at(Point::new(2.25, 3.5)), DOT);
        assert_eq!(canvas.get(4, 3), Some(DOT));
        assert_eq!(canvas.cells.iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn disc_covers_its_center_cell() {
        let layout = GridLayout::compute(21.0, 3.0).with_origin(Point::new(0.0, 2.0));
        let point = layout.point(PointLabel::MIN);
        let mut canvas = Canvas::new(60, 30);
        canvas.fill_disc(&point, DOT);
        let (column, row) = layout_to_cell(point.center).unwrap();
        assert_eq!(canvas.get(column, row), Some(DOT));
        assert_eq!(canvas.get(column + 6, row), None);
    }

    #[test]
    fn flush_emits_glyphs() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put(1, 0, DOT);
        let mut out = Vec::new();
        canvas.flush(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('*'));
        assert!(text.contains("38;2;224;224;224"));
    }
}
