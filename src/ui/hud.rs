use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the score line and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!("Score: {}", state.score()),
            Style::new().fg(theme.hud_score),
        ),
        Span::raw("   "),
        Span::styled(
            format!("High: {}", state.high_score()),
            Style::new().fg(theme.menu_footer),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Right),
        score_area,
    );

    play_area
}
