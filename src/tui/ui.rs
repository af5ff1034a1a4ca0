//! Rendering of the board, marks and win indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line},
    },
};

use super::app::App;
use crate::game::{Cell, Mark};
use crate::geometry::{Segment, grid_lines, mark_box, win_segment};

/// Draws the whole screen and records the board area on `app`.
pub fn draw(frame: &mut Frame, app: &mut App, max_width: u16, max_height: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new(app.game().players().title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(
        chunks[1],
        max_width.min(chunks[1].width),
        max_height.min(chunks[1].height),
    );
    app.set_board_area(board_area);
    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let surface = *app.game().surface();
    let engine = app.game().engine();
    let height = f64::from(surface.height());

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(surface.width())])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for segment in grid_lines(surface) {
                draw_segment(ctx, segment, height, Color::DarkGray);
            }

            for cell in Cell::all() {
                let Some(mark) = engine.board().mark_at(cell) else {
                    continue;
                };
                let b = mark_box(cell, surface);
                match mark {
                    Mark::X => {
                        let (left, top) = (b.origin.x, b.origin.y);
                        let (right, bottom) = (left + b.width, top + b.height);
                        ctx.draw(&Line::new(left, height - top, right, height - bottom, Color::Blue));
                        ctx.draw(&Line::new(left, height - bottom, right, height - top, Color::Blue));
                    }
                    Mark::O => {
                        let center = b.center();
                        ctx.draw(&Circle {
                            x: center.x,
                            y: height - center.y,
                            radius: b.width.min(b.height) / 2.0,
                            color: Color::Red,
                        });
                    }
                }
            }

            if let Some(line) = engine.outcome().win_line() {
                draw_segment(ctx, win_segment(line, surface), height, Color::Yellow);
            }
        });

    frame.render_widget(canvas, area);
}

/// Canvas y grows upwards, surface y grows downwards.
fn draw_segment(ctx: &mut Context<'_>, segment: Segment, height: f64, color: Color) {
    ctx.draw(&Line::new(
        segment.from.x,
        height - segment.from.y,
        segment.to.x,
        height - segment.to.y,
        color,
    ));
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
