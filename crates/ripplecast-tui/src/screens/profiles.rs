//! Profiles screen — the active per-platform spread table.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use ripplecast_core::{Platform, ProfileTable};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct ProfilesScreen {
    focused: bool,
    profiles: ProfileTable,
    selected: usize,
}

impl ProfilesScreen {
    pub fn new(profiles: ProfileTable) -> Self {
        Self {
            focused: false,
            profiles,
            selected: 0,
        }
    }
}

impl Component for ProfilesScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1).min(Platform::ALL.len() - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => self.selected = Platform::ALL.len() - 1,
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Platform Profiles ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 4 || inner.width < 30 {
            return;
        }

        let header = Row::new(vec![
            Cell::from("Platform"),
            Cell::from("Reach / Share"),
            Cell::from("Share Rate"),
        ])
        .style(theme::table_header());

        let rows: Vec<Row<'_>> = self
            .profiles
            .iter()
            .enumerate()
            .map(|(i, (platform, profile))| {
                let (reach_min, reach_max) = profile.reach_per_share;
                let (rate_min, rate_max) = profile.share_rate;
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme::ELECTRIC_PURPLE)
                        .add_modifier(Modifier::BOLD)
                } else {
                    theme::table_row()
                };
                Row::new(vec![
                    Cell::from(platform.label()),
                    Cell::from(format!("{reach_min}\u{2013}{reach_max}")),
                    Cell::from(format!(
                        "{:.0}%\u{2013}{:.0}%",
                        rate_min * 100.0,
                        rate_max * 100.0
                    )),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(16),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .column_spacing(2);

        let table_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        frame.render_widget(table, table_area);

        let hints_area = Rect {
            y: inner.y + inner.height.saturating_sub(1),
            height: 1,
            ..inner
        };
        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("overrides via config file", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), hints_area);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "profiles"
    }
}
