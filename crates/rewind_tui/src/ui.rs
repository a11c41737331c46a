//! Stateless UI rendering.
//!
//! Everything drawn here comes from the library's view descriptions. The
//! returned hitboxes let the app turn mouse clicks back into intents.

use crate::app::{App, Hitbox};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{CellView, Intent, Mark, MoveEntry, Position};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns the clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> Vec<Hitbox> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and moves
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH * 3 + 6), Constraint::Min(24)])
        .split(chunks[1]);

    let mut hitboxes = draw_board(frame, body[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let status = Paragraph::new(app.game().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, side[0]);

    hitboxes.extend(draw_moves(frame, side[1], &app.game().moves()));

    let help = Paragraph::new("arrows/1-9 play  [ ] step  Home reset  n new  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    hitboxes
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<Hitbox> {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = app.game().board_view();
    let mut hitboxes = Vec::new();

    for (r, row) in board.rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let cell_area = Rect {
                x: inner.x + 1 + c as u16 * (CELL_WIDTH + 1),
                y: inner.y + r as u16 * CELL_HEIGHT,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
            if !fits(inner, cell_area) {
                continue;
            }

            let focused = Position::from_index(r * 3 + c) == Some(app.cursor());
            draw_cell(frame, cell_area, cell, focused);
            hitboxes.push(Hitbox {
                area: cell_area,
                intent: cell.click(),
            });
        }
    }

    hitboxes
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, focused: bool) {
    let mut style = match cell.value().mark() {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if cell.highlighted() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = if cell.text().is_empty() { "·" } else { cell.text() };
    let paragraph = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(text, style))])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, moves: &[MoveEntry]) -> Vec<Hitbox> {
    let block = Block::default().borders(Borders::ALL).title(" Moves ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = moves
        .iter()
        .take(inner.height as usize)
        .map(|entry| {
            let style = if *entry.selected() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(entry.description().clone(), style),
                Span::raw(" "),
                Span::styled(entry.location().clone(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let hitboxes = moves
        .iter()
        .take(lines.len())
        .enumerate()
        .map(|(i, entry)| Hitbox {
            area: Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            },
            intent: Intent::JumpTo(*entry.step()),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
    hitboxes
}

fn fits(outer: Rect, inner: Rect) -> bool {
    inner.right() <= outer.right() && inner.bottom() <= outer.bottom()
}
