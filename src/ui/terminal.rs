use crate::app::{App, AppMode};
use crate::ui::keymap::key_to_app_event;
use crate::ui::theme::colors;
use crate::ui::view::{
    formula_prefix_width, render_formula_line, render_help_line, render_result,
    render_suggestion_lines,
};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Paragraph},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let render_tick = Duration::from_millis(1000 / 60);

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            // Fire a due suggestion lookup before going back to sleep
            app.tick(Instant::now());

            // Wake up for the next render frame, or sooner if a debounce
            // deadline lands before it
            let now = Instant::now();
            let mut poll_timeout = render_tick;
            if let Some(deadline) = app.next_deadline() {
                poll_timeout = poll_timeout.min(deadline.saturating_duration_since(now));
            }

            match event::poll(poll_timeout) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        app.handle_event(key_to_app_event(key), Instant::now());
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    // Propagate I/O errors instead of ignoring them
                    return Err(e);
                }
            }

            if last_tick.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_tick = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(area);

            let formula_box = Paragraph::new(render_formula_line(&state.tokens, &state.input))
                .block(
                    Block::bordered()
                        .title("Formula")
                        .border_style(Style::default().fg(colors::dimmed())),
                )
                .style(Style::default().bg(colors::background()));
            frame.render_widget(formula_box, chunks[0]);

            frame.render_widget(render_result(state.calculated_value), chunks[1]);
            frame.render_widget(Paragraph::new(render_help_line()), chunks[2]);

            // Dropdown overlay under the input position
            if state.suggestions.visible || state.suggestions.loading {
                let lines = render_suggestion_lines(&state.suggestions);
                if lines.is_empty() {
                    return;
                }

                let width: u16 = 30;
                let x = (chunks[0].x + 1 + formula_prefix_width(&state.tokens))
                    .min(area.width.saturating_sub(width));
                let y = chunks[0].y + chunks[0].height;
                let height = (lines.len() as u16).min(area.height.saturating_sub(y));
                if height == 0 || width > area.width {
                    return;
                }

                let dropdown_area = Rect {
                    x,
                    y,
                    width,
                    height,
                };
                frame.render_widget(Clear, dropdown_area);
                frame.render_widget(
                    Paragraph::new(lines).style(Style::default().bg(colors::background())),
                    dropdown_area,
                );
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
