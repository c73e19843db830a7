//! Calculator screen — control surface, results panel, and the radial
//! propagation canvas.
//!
//! Layout:
//! ┌─ Parameters ──────────┐ ┌─ Propagation ──────────────────────┐
//! │ field list + sliders  │ │ concentric rings + node scatter    │
//! ├─ Estimate ────────────┤ │ painted from the PropagationScene  │
//! │ reach / range / level │ │                                    │
//! └───────────────────────┘ └────────────────────────────────────┘
//!
//! Every edit goes through the calculator's clamping setters, then
//! recompute → scene regeneration → `ResultUpdated` for the status bar.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use ripplecast_core::model::{NETWORK_SIZE_STEP, SHARE_RATE_PERCENT_MAX, TIME_HORIZON_RANGE};
use ripplecast_core::scene::{CENTER_LABEL, CONNECTOR_OPACITY, SURFACE_HEIGHT};
use ripplecast_core::{Calculator, Platform, PropagationScene, fmt};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::slider;

// ── Control fields ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    InitialShares,
    ShareRate,
    TimeHorizon,
    Platform,
    NetworkSize,
}

impl Field {
    const ALL: [Field; 5] = [
        Self::InitialShares,
        Self::ShareRate,
        Self::TimeHorizon,
        Self::Platform,
        Self::NetworkSize,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::InitialShares => "Initial shares",
            Self::ShareRate => "Assumed share rate",
            Self::TimeHorizon => "Time horizon",
            Self::Platform => "Platform",
            Self::NetworkSize => "Network size",
        }
    }
}

// ── Screen state ─────────────────────────────────────────────────────

pub struct CalculatorScreen {
    focused: bool,
    calc: Calculator,
    scene: PropagationScene,
    rng: ChaCha8Rng,
    active_field: Field,
    /// Last canvas inner size in cells, for scene width derivation.
    last_canvas: Cell<(u16, u16)>,
}

impl CalculatorScreen {
    pub fn new(calc: Calculator) -> Self {
        let mut rng = ChaCha8Rng::from_os_rng();
        let scene = calc.scene(default_scene_width(), &mut rng);
        Self {
            focused: false,
            calc,
            scene,
            rng,
            active_field: Field::InitialShares,
            last_canvas: Cell::new((0, 0)),
        }
    }

    // ── Field navigation ─────────────────────────────────────────────

    fn focus_next(&mut self) {
        let pos = Field::ALL
            .iter()
            .position(|&f| f == self.active_field)
            .unwrap_or(0);
        self.active_field = Field::ALL[(pos + 1) % Field::ALL.len()];
    }

    fn focus_prev(&mut self) {
        let pos = Field::ALL
            .iter()
            .position(|&f| f == self.active_field)
            .unwrap_or(0);
        self.active_field = Field::ALL[(pos + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Apply one adjustment step to the active field. `step` is the
    /// magnitude for the count-like fields; selectors ignore it.
    fn adjust(&mut self, up: bool, step: u32) {
        let params = *self.calc.params();
        match self.active_field {
            Field::InitialShares => {
                let value = if up {
                    params.initial_shares.saturating_add(step)
                } else {
                    params.initial_shares.saturating_sub(step)
                };
                self.calc.set_initial_shares(value);
            }
            Field::ShareRate => {
                let value = if up {
                    params.share_rate_percent.saturating_add(1)
                } else {
                    params.share_rate_percent.saturating_sub(1)
                };
                self.calc.set_share_rate_percent(value);
            }
            Field::TimeHorizon => {
                let value = if up {
                    params
                        .time_horizon_hours
                        .saturating_add(1)
                        .min(*TIME_HORIZON_RANGE.end())
                } else {
                    params.time_horizon_hours.saturating_sub(1)
                };
                self.calc.set_time_horizon_hours(value);
            }
            Field::Platform => {
                let pos = Platform::ALL
                    .iter()
                    .position(|&p| p == params.platform)
                    .unwrap_or(0);
                let next = if up {
                    (pos + 1) % Platform::ALL.len()
                } else {
                    (pos + Platform::ALL.len() - 1) % Platform::ALL.len()
                };
                self.calc.set_platform(Platform::ALL[next]);
            }
            Field::NetworkSize => {
                if up {
                    self.calc.network_size_up();
                } else {
                    self.calc.network_size_down();
                }
            }
        }
    }

    /// Recompute the estimate, rebuild the scene, and hand the fresh
    /// result to the app loop for the status bar.
    fn recompute(&mut self) -> Action {
        let result = *self.calc.recompute();
        self.scene = self.calc.scene(self.scene_width(), &mut self.rng);
        Action::ResultUpdated(result)
    }

    /// Scene width in surface units, derived from the last canvas area.
    /// Braille dots are roughly square (2×4 per ~1:2 cell), so width
    /// scales as cols / (2 · rows) of the fixed surface height.
    fn scene_width(&self) -> f64 {
        let (cols, rows) = self.last_canvas.get();
        if cols == 0 || rows == 0 {
            return default_scene_width();
        }
        SURFACE_HEIGHT * f64::from(cols) / (2.0 * f64::from(rows))
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Parameters ")
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

        if inner.height < 2 || inner.width < 16 {
            return;
        }

        let params = self.calc.params();
        let track_width = usize::from(inner.width).saturating_sub(6).min(24);
        let mut lines: Vec<Line<'_>> = Vec::new();

        for field in Field::ALL {
            let active = field == self.active_field;
            let marker = if active { "\u{25b8} " } else { "  " };
            let label_style = if active {
                Style::default().fg(theme::NEON_CYAN)
            } else {
                Style::default().fg(theme::DIM_WHITE)
            };
            let value_style = if active {
                Style::default()
                    .fg(theme::NEON_CYAN)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::DIM_WHITE)
            };
            let marker_style = Style::default()
                .fg(theme::ELECTRIC_PURPLE)
                .add_modifier(Modifier::BOLD);

            lines.push(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(field.label(), label_style),
            ]));

            let value_line: Line<'_> = match field {
                Field::InitialShares => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        fmt::group_thousands(u64::from(params.initial_shares)),
                        value_style,
                    ),
                ]),
                Field::ShareRate => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        slider::track(
                            u32::from(params.share_rate_percent),
                            0,
                            u32::from(SHARE_RATE_PERCENT_MAX),
                            track_width,
                        ),
                        Style::default().fg(theme::BORDER_GRAY),
                    ),
                    Span::styled(format!(" {}%", params.share_rate_percent), value_style),
                    Span::styled(
                        " (label only)",
                        Style::default().fg(theme::ELECTRIC_YELLOW),
                    ),
                ]),
                Field::TimeHorizon => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        slider::track(
                            params.time_horizon_hours,
                            *TIME_HORIZON_RANGE.start(),
                            *TIME_HORIZON_RANGE.end(),
                            track_width,
                        ),
                        Style::default().fg(theme::BORDER_GRAY),
                    ),
                    Span::styled(
                        format!(" {}", fmt::hours_label(params.time_horizon_hours)),
                        value_style,
                    ),
                ]),
                Field::Platform => {
                    let arrow_style = if active {
                        Style::default().fg(theme::ELECTRIC_PURPLE)
                    } else {
                        Style::default().fg(theme::BORDER_GRAY)
                    };
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled("\u{25c2} ", arrow_style),
                        Span::styled(params.platform.label(), value_style),
                        Span::styled(" \u{25b8}", arrow_style),
                    ])
                }
                Field::NetworkSize => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        fmt::group_thousands(u64::from(params.network_size)),
                        value_style,
                    ),
                    Span::styled(
                        format!(" contacts (\u{b1}{NETWORK_SIZE_STEP})"),
                        theme::key_hint(),
                    ),
                ]),
            };
            lines.push(value_line);
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Estimate ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 || inner.width < 16 {
            return;
        }

        let result = self.calc.result();
        let label = Style::default().fg(theme::BORDER_GRAY);
        let val = Style::default().fg(theme::NEON_CYAN);

        let lines = vec![
            Line::from(vec![
                Span::styled(" Reach     ", label),
                Span::styled(fmt::group_thousands(result.central_reach), val.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled(" Range     ", label),
                Span::styled(
                    fmt::reach_range_label(result.min_reach, result.max_reach),
                    Style::default().fg(theme::DIM_WHITE),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Shares    ", label),
                Span::styled(fmt::group_thousands(result.total_shares), val),
            ]),
            Line::from(vec![
                Span::styled(" Platforms ", label),
                Span::styled(fmt::spread_label(result.platform_spread), val),
            ]),
            Line::from(vec![
                Span::styled(" Virality  ", label),
                Span::styled(
                    result.viral_level.label(),
                    Style::default()
                        .fg(theme::viral_color(result.viral_level))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(
                " Propagation  \u{b7}  {} generations ",
                self.calc.result().generations
            ))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 || inner.width < 8 {
            return;
        }
        self.last_canvas.set((inner.width, inner.height));

        let scene = &self.scene;
        let (cx, cy) = scene.center;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, scene.width.max(1.0)])
            .y_bounds([0.0, scene.height])
            .paint(|ctx| {
                // Rings, outer to inner, fading toward the edge
                for ring in &scene.rings {
                    if ring.radius > 0.0 {
                        ctx.draw(&Circle {
                            x: cx,
                            y: cy,
                            radius: ring.radius,
                            color: theme::fade(theme::RING_BASE, ring.stroke_opacity),
                        });
                    }
                }

                // Faint connectors behind the node dots
                for node in &scene.nodes {
                    ctx.draw(&CanvasLine {
                        x1: cx,
                        y1: cy,
                        x2: node.x,
                        y2: node.y,
                        color: theme::fade(theme::NODE_AMBER, CONNECTOR_OPACITY),
                    });
                }
                for node in &scene.nodes {
                    ctx.draw(&Circle {
                        x: node.x,
                        y: node.y,
                        radius: node.radius,
                        color: theme::fade(theme::NODE_AMBER, 1.0),
                    });
                }

                // Origin point and its fixed label
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: ripplecast_core::scene::CENTER_RADIUS,
                    color: theme::fade(theme::RING_BASE, 1.0),
                });
                ctx.print(
                    cx,
                    cy + 40.0,
                    Line::styled(
                        CENTER_LABEL.join(" "),
                        Style::default()
                            .fg(theme::DIM_WHITE)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            });

        frame.render_widget(canvas, inner);
    }
}

fn default_scene_width() -> f64 {
    SURFACE_HEIGHT * 2.0
}

// ── Component impl ───────────────────────────────────────────────────

impl Component for CalculatorScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        // Seed the status bar with the initial estimate.
        action_tx.send(Action::ResultUpdated(*self.calc.result()))?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            10
        } else {
            1
        };

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus_next();
                Ok(None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_prev();
                Ok(None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.adjust(true, step);
                Ok(Some(self.recompute()))
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.adjust(false, step);
                Ok(Some(self.recompute()))
            }
            // Explicit recompute trigger: same numbers, fresh node scatter
            KeyCode::Enter | KeyCode::Char('r') => Ok(Some(self.recompute())),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::Resize(_, _) = action {
            // Relayout the scene for the new surface width.
            self.scene = self.calc.scene(self.scene_width(), &mut self.rng);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let columns =
            Layout::horizontal([Constraint::Length(42), Constraint::Min(20)]).split(area);

        let left = Layout::vertical([
            Constraint::Min(16),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(columns[0]);

        self.render_controls(frame, left[0]);
        self.render_results(frame, left[1]);

        let hints = Line::from(vec![
            Span::styled(" \u{2191}/\u{2193} ", theme::key_hint_key()),
            Span::styled("field  ", theme::key_hint()),
            Span::styled("\u{2190}/\u{2192} ", theme::key_hint_key()),
            Span::styled("adjust  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("recompute", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), left[2]);

        self.render_canvas(frame, columns[1]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "calculator"
    }
}
