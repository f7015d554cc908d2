//! Ratatui presenter: applies engine commands to a local visual model and
//! renders it. Door rotations advance in `tick` and report their tokens back
//! to the caller once the target angle is reached.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::engine::commands::{
    AnimationToken, Command, FeedbackKind, Highlight, NextMode, Side,
};
use crate::engine::OPEN_ANGLE;

#[derive(Debug, Clone)]
pub struct DoorVisual {
    pub angle: f32,
    pub target: f32,
    pub speed: f32,
    pub token: Option<AnimationToken>,
    pub highlight: Highlight,
    pub left_label: String,
    pub right_label: String,
}

impl DoorVisual {
    fn new() -> Self {
        DoorVisual {
            angle: 0.0,
            target: 0.0,
            speed: 0.0,
            token: None,
            highlight: Highlight::Neutral,
            left_label: String::new(),
            right_label: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hud {
    pub progress: String,
    pub score: String,
    pub question_title: String,
    pub question_detail: String,
    pub left_option: String,
    pub right_option: String,
    pub feedback: String,
    pub feedback_kind: FeedbackKind,
    pub next_enabled: bool,
    pub next_label: String,
    pub next_mode: NextMode,
    pub summary_visible: bool,
    pub summary_text: String,
}

pub struct Presenter {
    pub doors: Vec<DoorVisual>,
    pub hud: Hud,
    pub focused: usize,
}

impl Presenter {
    pub fn new(door_count: usize) -> Self {
        Presenter {
            doors: (0..door_count).map(|_| DoorVisual::new()).collect(),
            hud: Hud {
                progress: String::new(),
                score: String::new(),
                question_title: String::new(),
                question_detail: String::new(),
                left_option: String::new(),
                right_option: String::new(),
                feedback: String::new(),
                feedback_kind: FeedbackKind::Info,
                next_enabled: false,
                next_label: String::new(),
                next_mode: NextMode::Level,
                summary_visible: false,
                summary_text: String::new(),
            },
            focused: 0,
        }
    }

    pub fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ResetDoorVisual { door } => {
                    let d = &mut self.doors[door];
                    d.angle = 0.0;
                    d.target = 0.0;
                    d.token = None;
                }
                Command::SetDoorLabel { door, side, text } => {
                    let d = &mut self.doors[door];
                    match side {
                        Side::Left => d.left_label = text,
                        Side::Right => d.right_label = text,
                    }
                }
                Command::SetDoorHighlight { door, highlight } => {
                    self.doors[door].highlight = highlight;
                }
                Command::AnimateDoorRotation { door, target_angle, speed, token } => {
                    let d = &mut self.doors[door];
                    d.target = target_angle;
                    d.speed = speed;
                    d.token = Some(token);
                }
                Command::FocusCamera { door } => {
                    self.focused = door;
                }
                Command::UpdateHud(update) => {
                    let hud = &mut self.hud;
                    if let Some(v) = update.progress {
                        hud.progress = v;
                    }
                    if let Some(v) = update.score {
                        hud.score = v;
                    }
                    if let Some(v) = update.question_title {
                        hud.question_title = v;
                    }
                    if let Some(v) = update.question_detail {
                        hud.question_detail = v;
                    }
                    if let Some(v) = update.left_option {
                        hud.left_option = v;
                    }
                    if let Some(v) = update.right_option {
                        hud.right_option = v;
                    }
                    if let Some((text, kind)) = update.feedback {
                        hud.feedback = text;
                        hud.feedback_kind = kind;
                    }
                    if let Some(next) = update.next_button {
                        hud.next_enabled = next.enabled;
                        hud.next_label = next.label;
                        hud.next_mode = next.mode;
                    }
                    if let Some(summary) = update.summary {
                        hud.summary_visible = summary.visible;
                        hud.summary_text = summary.text;
                    }
                }
            }
        }
    }

    /// Advance door rotations by `dt` seconds. Returns the tokens of
    /// animations that reached their target this tick.
    pub fn tick(&mut self, dt: f32) -> Vec<AnimationToken> {
        let mut completed = Vec::new();
        for door in &mut self.doors {
            let Some(token) = door.token else { continue };
            let step = door.speed * dt;
            if (door.target - door.angle).abs() <= step {
                door.angle = door.target;
                door.token = None;
                completed.push(token);
            } else if door.target > door.angle {
                door.angle += step;
            } else {
                door.angle -= step;
            }
        }
        completed
    }
}

pub fn draw_game(f: &mut Frame, presenter: &Presenter) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(4),
        ])
        .split(f.area());

    // Status bar
    let status = Line::from(vec![
        Span::styled(
            " DOOR GAUNTLET ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", presenter.hud.progress),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", presenter.hud.score),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    let status_block = Paragraph::new(status).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_block, chunks[0]);

    if presenter.hud.summary_visible {
        draw_summary(f, presenter, chunks[1]);
    } else {
        draw_doors(f, presenter, chunks[1]);
    }

    draw_question(f, presenter, chunks[2]);
    draw_feedback(f, presenter, chunks[3]);
}

fn draw_doors(f: &mut Frame, presenter: &Presenter, area: Rect) {
    let constraints: Vec<Constraint> = presenter
        .doors
        .iter()
        .map(|_| Constraint::Ratio(1, presenter.doors.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, door) in presenter.doors.iter().enumerate() {
        let color = match door.highlight {
            Highlight::Neutral => Color::Cyan,
            Highlight::Solved => Color::Green,
            Highlight::Wrong => Color::Red,
        };
        let focused = i == presenter.focused;
        let title = if focused {
            format!(" ▶ Door {} ◀ ", i + 1)
        } else {
            format!(" Door {} ", i + 1)
        };
        let mut border_style = Style::default().fg(color);
        if focused {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner = block.inner(columns[i]);
        f.render_widget(block, columns[i]);
        f.render_widget(door_art(door, inner, color), inner);
    }
}

/// The door panel narrows as it swings open; a fully open door reads as a
/// thin edge next to the empty frame.
fn door_art(door: &DoorVisual, area: Rect, color: Color) -> Paragraph<'static> {
    let width = area.width.saturating_sub(2).max(1) as usize;
    let panel_rows = area.height.saturating_sub(3) as usize;
    let openness = (door.angle / OPEN_ANGLE).clamp(0.0, 1.0);
    let panel_width = ((width as f32) * (1.0 - openness)).round().max(1.0) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..panel_rows {
        let panel = "█".repeat(panel_width);
        let gap = " ".repeat(width.saturating_sub(panel_width));
        lines.push(Line::from(Span::styled(
            format!("{panel}{gap}"),
            Style::default().fg(color),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("◄ {}", truncate(&door.left_label, width.saturating_sub(2))),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} ►", truncate(&door.right_label, width.saturating_sub(2))),
        Style::default().fg(Color::White),
    )));

    Paragraph::new(lines).alignment(Alignment::Center)
}

fn draw_question(f: &mut Frame, presenter: &Presenter, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let question = Paragraph::new(vec![
        Line::from(Span::styled(
            presenter.hud.question_title.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(presenter.hud.question_detail.clone()),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Question "))
    .wrap(Wrap { trim: false });
    f.render_widget(question, chunks[0]);

    let options = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Paragraph::new(presenter.hud.left_option.clone())
        .block(Block::default().borders(Borders::ALL).title(" ← Left "))
        .style(Style::default().fg(Color::White));
    f.render_widget(left, options[0]);

    let right = Paragraph::new(presenter.hud.right_option.clone())
        .block(Block::default().borders(Borders::ALL).title(" Right → "))
        .style(Style::default().fg(Color::White));
    f.render_widget(right, options[1]);
}

fn draw_feedback(f: &mut Frame, presenter: &Presenter, area: Rect) {
    let style = match presenter.hud.feedback_kind {
        FeedbackKind::Info => Style::default().fg(Color::Yellow),
        FeedbackKind::Success => Style::default().fg(Color::Green),
        FeedbackKind::Error => Style::default().fg(Color::Red),
    };
    let mut lines = vec![Line::from(presenter.hud.feedback.clone())];
    if presenter.hud.next_enabled {
        let symbol = match presenter.hud.next_mode {
            NextMode::Restart => "↻",
            NextMode::Final => "★",
            NextMode::Level | NextMode::LevelReady => "→",
        };
        lines.push(Line::from(Span::styled(
            format!("[Enter] {symbol} {}", presenter.hud.next_label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
    }
    let feedback = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Feedback "))
        .wrap(Wrap { trim: false })
        .style(style);
    f.render_widget(feedback, area);
}

fn draw_summary(f: &mut Frame, presenter: &Presenter, area: Rect) {
    let summary = Paragraph::new(presenter.hud.summary_text.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Summary ")
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    f.render_widget(summary, area);
}

pub fn draw_title_screen(f: &mut Frame, new_game_selected: bool) {
    let area = f.area();

    let title_art = r#"
    ╔══════════════════════════════════════════════╗
    ║                                              ║
    ║    D O O R   G A U N T L E T                 ║
    ║                                              ║
    ║    Three levels. Three doors each.           ║
    ║                                              ║
    ║    Every door asks a question with two       ║
    ║    answers, shuffled left and right.         ║
    ║                                              ║
    ║    Right answer  → the door swings open      ║
    ║    Wrong answer  → score -1, new question    ║
    ║                    on the same door          ║
    ║                                              ║
    ║    Clear the doors in order. A perfect       ║
    ║    run scores 9 / 9.                         ║
    ║                                              ║
    ╚══════════════════════════════════════════════╝
"#;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(19),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let title = Paragraph::new(title_art)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let new_game_style = if new_game_selected {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let new_game = Paragraph::new("  NEW GAME  ")
        .style(new_game_style)
        .alignment(Alignment::Center);
    f.render_widget(new_game, chunks[1]);

    let quit_style = if !new_game_selected {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let quit = Paragraph::new("  QUIT  ")
        .style(quit_style)
        .alignment(Alignment::Center);
    f.render_widget(quit, chunks[2]);

    let help = Paragraph::new("↑/↓ to select  •  ENTER to confirm  •  q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::commands::{HudUpdate, NextButton};

    #[test]
    fn test_tick_completes_animation_at_target() {
        let mut presenter = Presenter::new(2);
        let token = AnimationToken { door: 1, seq: 3 };
        presenter.apply(vec![Command::AnimateDoorRotation {
            door: 1,
            target_angle: 1.0,
            speed: 2.0,
            token,
        }]);

        assert!(presenter.tick(0.25).is_empty());
        assert!((presenter.doors[1].angle - 0.5).abs() < 1e-5);

        let done = presenter.tick(0.25);
        assert_eq!(done, vec![token]);
        assert_eq!(presenter.doors[1].angle, 1.0);
        assert!(presenter.doors[1].token.is_none());

        // Nothing left to report
        assert!(presenter.tick(0.25).is_empty());
    }

    #[test]
    fn test_new_animation_supersedes_previous_token() {
        let mut presenter = Presenter::new(1);
        let first = AnimationToken { door: 0, seq: 1 };
        let second = AnimationToken { door: 0, seq: 2 };
        presenter.apply(vec![Command::AnimateDoorRotation {
            door: 0,
            target_angle: 1.0,
            speed: 1.0,
            token: first,
        }]);
        presenter.apply(vec![Command::AnimateDoorRotation {
            door: 0,
            target_angle: 0.0,
            speed: 10.0,
            token: second,
        }]);
        // Only the superseding animation ever completes
        assert_eq!(presenter.tick(1.0), vec![second]);
    }

    #[test]
    fn test_hud_update_merges_partially() {
        let mut presenter = Presenter::new(1);
        presenter.apply(vec![Command::UpdateHud(HudUpdate {
            score: Some("Score 2".into()),
            feedback: Some(("hi".into(), FeedbackKind::Success)),
            ..Default::default()
        })]);
        presenter.apply(vec![Command::UpdateHud(HudUpdate {
            next_button: Some(NextButton {
                enabled: true,
                label: "Go".into(),
                mode: NextMode::LevelReady,
            }),
            ..Default::default()
        })]);
        assert_eq!(presenter.hud.score, "Score 2");
        assert_eq!(presenter.hud.feedback, "hi");
        assert!(presenter.hud.next_enabled);
        assert_eq!(presenter.hud.feedback_kind, FeedbackKind::Success);
    }

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 0), "");
    }
}
