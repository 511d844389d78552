use crate::app::{AppMode, RenderState};
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HELP_TEXT: &str = "\
Paste or type names, IDs and company names on the left.

  Ctrl+S   split            Ctrl+Y   copy result
  Ctrl+L   clear            Ctrl+C   quit
  Esc      command deck

Commands:
  :s :split    :c :copy     :x :clear
  :d :dedupe   :t :trim     :q :quit
  @file.txt    @form.pdf    @@ clipboard

Press any key to close.";

/// Draw the whole screen for one frame.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    let editing = state.mode == AppMode::Editing;
    frame.render_widget(render_input_pane(&state.input, panes[0], editing), panes[0]);
    frame.render_widget(render_output_pane(&state.names, panes[1]), panes[1]);
    frame.render_widget(render_status_line(state), rows[1]);
    frame.render_widget(render_command_line(state.mode, &state.command_buffer), rows[2]);

    match state.mode {
        AppMode::Editing => frame.set_cursor_position(cursor_position(&state.input, panes[0])),
        AppMode::Command => {
            let x = rows[2].x + 1 + state.command_buffer.width() as u16;
            frame.set_cursor_position((x.min(rows[2].right().saturating_sub(1)), rows[2].y));
        }
        AppMode::Help => {
            let popup = centered(rows[0], 60, 16);
            frame.render_widget(Clear, popup);
            frame.render_widget(render_help(), popup);
        }
        AppMode::Quit => {}
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { colors::accent() } else { colors::dimmed() };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::background()))
}

fn inner_height(area: Rect) -> u16 {
    area.height.saturating_sub(2)
}

/// Lines scrolled off the top so the end of the input stays visible.
pub fn input_scroll(input: &str, inner_height: u16) -> u16 {
    let lines = input.split('\n').count() as u16;
    lines.saturating_sub(inner_height.max(1))
}

/// Terminal cell just after the last character of the input.
pub fn cursor_position(input: &str, area: Rect) -> (u16, u16) {
    let height = inner_height(area).max(1);
    let line_index = input.split('\n').count().saturating_sub(1) as u16;
    let last_line = input.rsplit('\n').next().unwrap_or("");

    let row = line_index - input_scroll(input, height);
    let col = (last_line.width() as u16).min(area.width.saturating_sub(3));

    (area.x + 1 + col, area.y + 1 + row.min(height - 1))
}

pub fn render_input_pane(input: &str, area: Rect, focused: bool) -> Paragraph<'_> {
    Paragraph::new(input)
        .style(Style::default().fg(colors::text()))
        .scroll((input_scroll(input, inner_height(area)), 0))
        .block(pane_block(" Input ".to_string(), focused))
}

pub fn render_output_pane(names: &[String], area: Rect) -> Paragraph<'static> {
    let lines: Vec<Line> = names.iter().map(|name| Line::from(name.clone())).collect();
    let scroll = (lines.len() as u16).saturating_sub(inner_height(area).max(1));
    let title = format!(" Names ({}) ", names.len());

    Paragraph::new(lines)
        .style(Style::default().fg(colors::text()))
        .scroll((scroll, 0))
        .block(pane_block(title, false))
}

pub fn render_status_line(state: &RenderState) -> Line<'static> {
    let status_style = if state.status.starts_with("Error") || state.status.starts_with("Unknown") {
        Style::default().fg(colors::error())
    } else {
        Style::default().fg(colors::accent()).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", state.options_summary()), Style::default().fg(colors::dimmed())),
        Span::styled(state.status.clone(), status_style),
    ])
}

pub fn render_command_line(mode: AppMode, buffer: &str) -> Line<'static> {
    match mode {
        AppMode::Command => Line::from(vec![
            Span::styled(">", Style::default().fg(colors::accent())),
            Span::styled(buffer.to_string(), Style::default().fg(colors::text())),
        ]),
        _ => Line::from(Span::styled(
            " Esc: commands · Ctrl+S: split · :h help",
            Style::default().fg(colors::dimmed()),
        )),
    }
}

pub fn render_help() -> Paragraph<'static> {
    Paragraph::new(HELP_TEXT)
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()))
        .block(pane_block(" Help ".to_string(), true))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state_with(names: &[&str]) -> RenderState {
        let mut state = RenderState::empty(AppMode::Editing);
        state.input = "john, mary".to_string();
        state.names = names.iter().map(|n| n.to_string()).collect();
        state.status = "Copied to clipboard".to_string();
        state
    }

    #[test]
    fn test_draw_shows_count_and_names() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let state = state_with(&["John", "Mary"]);
        terminal.draw(|frame| draw(frame, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Names (2)"));
        assert!(text.contains("John"));
        assert!(text.contains("Copied to clipboard"));
    }

    #[test]
    fn test_draw_help_popup() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = state_with(&[]);
        state.mode = AppMode::Help;
        terminal.draw(|frame| draw(frame, &state)).unwrap();

        assert!(screen_text(&terminal).contains("Commands:"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(4, 3)).unwrap();
        let state = state_with(&["John"]);
        terminal.draw(|frame| draw(frame, &state)).unwrap();
    }

    #[test]
    fn test_input_scroll() {
        assert_eq!(input_scroll("a\nb\nc", 5), 0);
        assert_eq!(input_scroll("a\nb\nc\nd", 2), 2);
    }

    #[test]
    fn test_cursor_position_end_of_input() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(cursor_position("", area), (1, 1));
        assert_eq!(cursor_position("john\nma", area), (3, 2));
    }

    #[test]
    fn test_cursor_position_counts_wide_chars() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(cursor_position("陈", area), (3, 1));
    }

    #[test]
    fn test_command_line_shows_buffer() {
        let line = render_command_line(AppMode::Command, ":split");
        assert_eq!(line.to_string(), ">:split");
    }
}
