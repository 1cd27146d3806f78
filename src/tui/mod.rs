pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while the TUI is active to prevent output corrupting
    // the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick

    // Main loop: draw, then block on the next key or tick. Every mutation
    // completes (including its save) before the next event is read.
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Tab switching
                KeyCode::Tab => app.toggle_view(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => match app.current_view {
                    app::View::Entry => handle_entry_key(app, key),
                    app::View::Leaderboard => {}
                },
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

fn handle_entry_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Selector cycling
        KeyCode::Char('a') => app.next_angler(),
        KeyCode::Char('A') => app.previous_angler(),
        KeyCode::Char('s') => app.next_species(),
        KeyCode::Char('S') => app.previous_species(),

        // Length editing
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => app.push_length_char(c),
        KeyCode::Backspace => app.pop_length_char(),

        // Log the catch
        KeyCode::Enter => app.add_catch(),

        // Table navigation
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

        // Delete selected catch
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        _ => {}
    }
}
