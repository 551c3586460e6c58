//! Marker CLI - Terminal host for the span annotation widget

mod app;
mod bridge;
mod cursor;
mod io;
mod ui;

use std::io::stdout;
use std::path::Path;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use marker_core::{Direction, SpanStore};

use app::{App, Focus, Mode};
use bridge::FileBridge;

fn main() -> Result<()> {
    // Get file path from args
    let args: Vec<String> = std::env::args().collect();
    let Some(file_path) = args.get(1) else {
        eprintln!("Usage: marker <file>");
        std::process::exit(2);
    };

    let config = io::load_session(file_path)?;
    let options = config.options;
    let title = Path::new(file_path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    let sink = io::marker_dir()?.join("spans.json");
    let store = SpanStore::new(config, Box::new(FileBridge::new(sink)));
    let mut app = App::new(store, options, title);
    app.set_status("Press 'v' to select text, '?' for help");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Clear status on any key
            app.clear_status();

            match app.mode {
                Mode::Normal => handle_normal_mode(app, key.code, key.modifiers),
                Mode::Visual => handle_visual_mode(app, key.code),
                Mode::LabelPicker => handle_label_picker(app, key.code),
                Mode::Help => {
                    app.mode = Mode::Normal;
                }
            }
        }
    }
    Ok(())
}

fn handle_normal_mode(app: &mut App, code: KeyCode, _modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.mode = Mode::Help,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            if app.focus == Focus::Editor {
                app.cursor.move_down();
            } else {
                app.next_span();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.focus == Focus::Editor {
                app.cursor.move_up();
            } else {
                app.prev_span();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.cursor.move_left();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.cursor.move_right();
        }
        KeyCode::Char('w') => {
            app.cursor.move_word_forward(app.store.text());
        }
        KeyCode::Char('b') => {
            app.cursor.move_word_back(app.store.text());
        }
        KeyCode::Char('g') => {
            app.cursor.move_to_top();
        }
        KeyCode::Char('G') => {
            app.cursor.move_to_bottom();
        }

        // Visual mode
        KeyCode::Char('v') => {
            if app.focus == Focus::Editor {
                app.enter_visual_mode();
            }
        }

        // Span actions (sidebar)
        KeyCode::Enter => {
            if app.focus == Focus::Sidebar {
                app.edit_selected_span();
            }
        }
        KeyCode::Char('d') => {
            if app.focus == Focus::Sidebar {
                app.remove_selected_span();
            }
        }
        KeyCode::Char('[') => {
            if app.focus == Focus::Sidebar {
                app.adjust_selected_span(true, Direction::Left);
            }
        }
        KeyCode::Char(']') => {
            if app.focus == Focus::Sidebar {
                app.adjust_selected_span(true, Direction::Right);
            }
        }
        KeyCode::Char('{') => {
            if app.focus == Focus::Sidebar {
                app.adjust_selected_span(false, Direction::Left);
            }
        }
        KeyCode::Char('}') => {
            if app.focus == Focus::Sidebar {
                app.adjust_selected_span(false, Direction::Right);
            }
        }

        // Focus toggle
        KeyCode::Tab => app.toggle_focus(),

        _ => {}
    }
}

fn handle_visual_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_visual_mode(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.cursor.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.cursor.move_right(),
        KeyCode::Char('w') => app.cursor.move_word_forward(app.store.text()),
        KeyCode::Char('b') => app.cursor.move_word_back(app.store.text()),
        KeyCode::Enter | KeyCode::Char('a') => {
            app.commit_selection();
        }
        _ => {}
    }
}

fn handle_label_picker(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_label_edit(),
        KeyCode::Char('j') | KeyCode::Down => app.pick_label(1),
        KeyCode::Char('k') | KeyCode::Up => app.pick_label(-1),
        KeyCode::Enter => app.approve_label(),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let index = c as usize - '1' as usize;
            if index < app.store.labels().labels().len() {
                app.pick_label(index as isize - app.picker_selected as isize);
            }
        }
        _ => {}
    }
}
