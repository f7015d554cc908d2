mod engine;
mod quiz;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use engine::commands::Side;
use engine::Engine;
use ui::Presenter;

const TICK_RATE: Duration = Duration::from_millis(33);

enum AppState {
    TitleScreen,
    Running,
}

enum MenuOption {
    NewGame,
    Quit,
}

impl MenuOption {
    fn next(&self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::Quit,
            MenuOption::Quit => MenuOption::NewGame,
        }
    }
}

fn main() -> Result<()> {
    let campaign_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "campaigns/sovereignty".to_string());
    let campaign = quiz::load_campaign(Path::new(&campaign_dir))?;
    let door_count = campaign.doors_per_level();

    let seed: u64 = rand::rng().random();
    let mut engine = Engine::new(campaign, seed);
    let mut presenter = Presenter::new(door_count);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::TitleScreen;
    let mut menu_selection = MenuOption::NewGame;
    let mut last_tick = Instant::now();

    'game: loop {
        terminal.draw(|f| match state {
            AppState::TitleScreen => {
                ui::draw_title_screen(f, matches!(menu_selection, MenuOption::NewGame))
            }
            AppState::Running => ui::draw_game(f, &presenter),
        })?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match state {
                    AppState::TitleScreen => match key.code {
                        KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                            menu_selection = menu_selection.next();
                        }
                        KeyCode::Enter => match menu_selection {
                            MenuOption::NewGame => {
                                presenter.apply(engine.start());
                                state = AppState::Running;
                            }
                            MenuOption::Quit => break 'game,
                        },
                        KeyCode::Char('q') => break 'game,
                        _ => {}
                    },
                    AppState::Running => match key.code {
                        KeyCode::Left => {
                            let cmds = engine.submit_side(Side::Left);
                            presenter.apply(cmds);
                        }
                        KeyCode::Right => {
                            let cmds = engine.submit_side(Side::Right);
                            presenter.apply(cmds);
                        }
                        KeyCode::Enter => {
                            // The next-button when it is lit, otherwise a
                            // plain pick on the door in front of the player.
                            let cmds = if presenter.hud.next_enabled {
                                engine.next_clicked()
                            } else {
                                engine.door_picked(engine.current_door(), None)
                            };
                            presenter.apply(cmds);
                        }
                        KeyCode::Char(c @ '1'..='9') => {
                            let door = (c as u8 - b'1') as usize;
                            let cmds = engine.door_picked(door, None);
                            presenter.apply(cmds);
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break 'game,
                        _ => {}
                    },
                }
            }
        }

        // Advance door animations and feed completions back to the engine
        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();
        for token in presenter.tick(dt) {
            let cmds = engine.animation_complete(token);
            presenter.apply(cmds);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if engine.in_summary() {
        println!(
            "\nFinal score: {} / {}\n",
            engine.score(),
            engine.campaign().total_questions()
        );
    }

    Ok(())
}
