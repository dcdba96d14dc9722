//! Board rendering: pegs, bases and disks
//!
//! The board is painted into a fixed-size cell grid in board coordinates,
//! then each row is turned into a [`Line`] with runs of equal style merged
//! into one [`Span`]. The held disk is painted last so it floats above the
//! stacks, and the peg under it is tinted to show whether a drop would be
//! accepted.

use crate::game::GameState;
use crate::puzzle::constants::{BASE_ROW, BOARD_HEIGHT, BOARD_WIDTH};
use crate::puzzle::{Disk, Peg};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const POLE: char = '┃';
const BASE: char = '▀';

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            symbol: ' ',
            style: Style::default(),
        }
    }
}

/// Cell grid in board coordinates; writes outside it are dropped
struct Canvas {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Canvas {
    fn new(width: u16, height: u16) -> Self {
        Canvas {
            cells: vec![Cell::default(); width as usize * height as usize],
            width: width as i32,
            height: height as i32,
        }
    }

    fn put(&mut self, x: i32, y: i32, symbol: char, style: Style) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = Cell { symbol, style };
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = row.first().map(|c| c.style).unwrap_or_default();
                for cell in row {
                    if cell.style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = cell.style;
                    run.push(cell.symbol);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Render the board into `area`, which the caller sizes to the board
pub fn render_board(frame: &mut Frame, area: Rect, game: &GameState) {
    let mut canvas = Canvas::new(BOARD_WIDTH, BOARD_HEIGHT);

    // Peg under the held disk: green if it would take the disk, red if not
    let drop_hint = game.held().and_then(|held| {
        let (x, _) = held.disk.position();
        game.pegs()
            .iter()
            .position(|peg| peg.is_near(x))
            .map(|target| (target, game.pegs()[target].can_accept(&held.disk)))
    });

    for (index, peg) in game.pegs().iter().enumerate() {
        let pole_color = match drop_hint {
            Some((target, true)) if target == index => DEFAULT_THEME.success,
            Some((target, false)) if target == index => DEFAULT_THEME.error,
            _ => DEFAULT_THEME.wood,
        };
        paint_peg(&mut canvas, peg, pole_color);
    }

    for peg in game.pegs() {
        for disk in peg.disks() {
            paint_disk(&mut canvas, disk, Modifier::empty());
        }
    }

    if let Some(held) = game.held() {
        paint_disk(&mut canvas, &held.disk, Modifier::BOLD);
    }

    frame.render_widget(Paragraph::new(canvas.into_lines()), area);
}

fn paint_peg(canvas: &mut Canvas, peg: &Peg, pole_color: Color) {
    let pole_style = Style::default().fg(pole_color);
    let (top, bottom) = peg.pole_span();
    for y in top..=bottom {
        canvas.put(peg.anchor(), y, POLE, pole_style);
    }

    let base_style = Style::default().fg(DEFAULT_THEME.wood);
    let (left, right) = peg.base_span();
    for x in left..=right {
        canvas.put(x, BASE_ROW, BASE, base_style);
    }
}

fn paint_disk(canvas: &mut Canvas, disk: &Disk, modifier: Modifier) {
    let style = Style::default()
        .bg(disk.color())
        .fg(DEFAULT_THEME.disk_label)
        .add_modifier(modifier);
    let (centre, top) = disk.position();
    let label = char::from_digit(disk.rank() % 36, 36).unwrap_or('?');

    for row in top..top + disk.height() {
        for x in disk.left()..disk.left() + disk.width() {
            let symbol = if x == centre { label } else { ' ' };
            canvas.put(x, row, symbol, style);
        }
    }
}
