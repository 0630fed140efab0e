//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Board, GameEngine, Player, Position, ScoreStore, Square};

use crate::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen and returns where each square was drawn.
pub fn draw<S: ScoreStore>(frame: &mut Frame, app: &App<S>) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Score bar
            Constraint::Length(3),                // Result
            Constraint::Min(BOARD_HEIGHT),        // Board
            Constraint::Length(1),                // Help
        ])
        .split(frame.area());

    draw_scores(frame, chunks[0], app.engine());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let areas = draw_board(frame, chunks[2], app.engine().board(), app.cursor());

    let help = Paragraph::new("arrows/enter or 1-9 or click: play   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

fn draw_scores<S: ScoreStore>(frame: &mut Frame, area: Rect, engine: &GameEngine<S>) {
    let score = engine.score();
    let line = Line::from(vec![
        Span::styled(
            format!("Player: {}", score.player_wins()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Computer: {}", score.computer_wins()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    let bar = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) -> [Rect; 9] {
    let [band] = Layout::vertical([Constraint::Length(BOARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(band);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                let cell = cols[col * 2];
                draw_cell(frame, cell, board, cursor, pos);
                areas[pos.to_index()] = cell;
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => {
            ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        }
        Square::Occupied(Player::O) => {
            ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        }
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text)
        .style(if pos == cursor { Style::default().bg(Color::White) } else { Style::default() })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
