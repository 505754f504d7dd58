//! TUI rendering with ratatui
//!
//! Board of guess rows, messages and status line.

use super::app::{App, MessageStyle};
use crate::core::{EvaluatedGuess, LetterFeedback};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_STYLE: Style = Style::new().fg(Color::Black).add_modifier(Modifier::BOLD);
const EMPTY_TILE_STYLE: Style = Style::new().fg(Color::DarkGray);
const TYPED_TILE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD OF THE DAY")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::Gray,
    }
}

fn guess_line(guess: &EvaluatedGuess) -> Line<'static> {
    let spans: Vec<Span> = guess
        .letters()
        .iter()
        .flat_map(|scored| {
            [
                Span::styled(
                    format!(" {} ", scored.letter),
                    TILE_STYLE.bg(feedback_color(scored.feedback)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn pending_line(typed: &str, word_length: usize) -> Line<'static> {
    let mut letters = typed.chars();
    let spans: Vec<Span> = (0..word_length)
        .flat_map(|_| {
            let tile = match letters.next() {
                Some(letter) => Span::styled(format!("[{letter}]"), TYPED_TILE_STYLE),
                None => Span::styled("[ ]", EMPTY_TILE_STYLE),
            };
            [tile, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

/// What one board row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BoardRow<'g> {
    Guess(&'g EvaluatedGuess),
    Pending,
    Empty,
}

/// Always `max_guesses` rows: guesses made, the row being typed, then blanks
///
/// The pending row only exists while input is enabled.
pub(super) fn board_rows<'g>(app: &'g App) -> Vec<BoardRow<'g>> {
    let history = app.session.history();

    (0..app.session.config().max_guesses())
        .map(|row| match history.get(row) {
            Some(guess) => BoardRow::Guess(guess),
            None if row == history.len() && app.input_enabled() => BoardRow::Pending,
            None => BoardRow::Empty,
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.session.config().word_length();

    let lines: Vec<Line> = board_rows(app)
        .into_iter()
        .flat_map(|row| {
            let line = match row {
                BoardRow::Guess(guess) => guess_line(guess),
                BoardRow::Pending => pending_line(app.input.as_str(), word_length),
                BoardRow::Empty => pending_line("", word_length),
            };
            [line, Line::from("")]
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.status() {
        GameStatus::Won => (
            " 🎉 Solved! | 'n' new game, 'q' quit ",
            String::new(),
            Color::Green,
        ),
        GameStatus::Lost => (
            " Out of guesses | 'n' new game, 'q' quit ",
            String::new(),
            Color::Red,
        ),
        GameStatus::InProgress => (
            " Type your guess | Enter to submit ",
            app.input.as_str().to_string(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let remaining = format!("Guesses left: {}", app.session.guesses_remaining());
    f.render_widget(
        Paragraph::new(remaining).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc/Ctrl-C: Quit | Backspace: Delete")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::WordList;
    use crate::game::FixedSecret;

    fn app(words: &WordList) -> App<'_> {
        App::new(
            GameConfig::default(),
            words,
            Box::new(FixedSecret::new("TESTS")),
        )
        .unwrap()
    }

    fn submit(app: &mut App, word: &str) {
        for c in word.chars() {
            app.type_char(c);
        }
        app.submit();
    }

    fn count(rows: &[BoardRow], wanted: fn(&BoardRow) -> bool) -> usize {
        rows.iter().filter(|row| wanted(row)).count()
    }

    #[test]
    fn board_at_start() {
        let words = WordList::from_words(["tests", "wrong"]);
        let app = app(&words);
        let rows = board_rows(&app);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], BoardRow::Pending);
        assert_eq!(count(&rows, |r| *r == BoardRow::Empty), 5);
    }

    #[test]
    fn board_keeps_size_after_each_guess() {
        let words = WordList::from_words(["tests", "wrong"]);
        let mut app = app(&words);

        for guessed in 1..6 {
            submit(&mut app, "wrong");
            let rows = board_rows(&app);
            assert_eq!(rows.len(), 6);
            assert_eq!(count(&rows, |r| matches!(r, BoardRow::Guess(_))), guessed);
            assert_eq!(rows[guessed], BoardRow::Pending);
        }
    }

    #[test]
    fn board_after_first_guess_win() {
        let words = WordList::from_words(["tests", "wrong"]);
        let mut app = app(&words);
        submit(&mut app, "tests");

        let rows = board_rows(&app);
        assert_eq!(rows.len(), 6);
        assert!(matches!(rows[0], BoardRow::Guess(g) if g.text() == "TESTS"));
        assert_eq!(count(&rows, |r| *r == BoardRow::Pending), 0);
        assert_eq!(count(&rows, |r| *r == BoardRow::Empty), 5);
    }

    #[test]
    fn board_after_loss() {
        let words = WordList::from_words(["tests", "wrong"]);
        let mut app = app(&words);
        for _ in 0..6 {
            submit(&mut app, "wrong");
        }

        let rows = board_rows(&app);
        assert_eq!(app.session.status(), GameStatus::Lost);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| matches!(r, BoardRow::Guess(_))));
    }

    #[test]
    fn board_follows_configured_budget() {
        let words = WordList::from_words(["tests"]);
        let app = App::new(
            GameConfig::new(5, 3).unwrap(),
            &words,
            Box::new(FixedSecret::new("TESTS")),
        )
        .unwrap();

        assert_eq!(board_rows(&app).len(), 3);
    }
}
