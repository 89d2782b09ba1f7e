use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tariffsweep_core::SweepReport;

use crate::chart::render_report;
use crate::util::format::format_probability;

const HELP_TEXT: &str = "q/Esc: quit";

/// Full-screen view of the charted series
pub struct App {
    report: SweepReport,
    exit: bool,
}

impl App {
    pub fn new(report: SweepReport) -> Self {
        Self {
            report,
            exit: false,
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        tracing::debug!("chart view closed");
        Ok(())
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Charts
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        render_report(frame, chunks[0], &self.report);
        self.render_status_bar(frame, chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let summary = &self.report.summary;
        let content = Line::from(vec![
            Span::raw(format!(
                " {} cells, {} with b1 > b0, overall P = {} ",
                summary.total_cells,
                summary.filtered_cells,
                format_probability(summary.overall_probability()),
            )),
            Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc if key_event.modifiers.is_empty() => {
                self.exit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            _ => {}
        }
    }
}
