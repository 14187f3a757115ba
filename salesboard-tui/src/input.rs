//! Keyboard input dispatch — global keys first, then panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, DateField, FilterSection, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Overview;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Filters;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Table;
            return;
        }
        KeyCode::Char('4') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('e') => {
            app.export();
            return;
        }
        KeyCode::Char('r') => {
            app.reset_filters();
            return;
        }
        KeyCode::Char('R') => {
            app.reload();
            return;
        }
        _ => {}
    }

    // Panel-specific keys.
    match app.active_panel {
        Panel::Overview => {} // display only
        Panel::Filters => handle_filters_key(app, key),
        Panel::Table => handle_table_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_filters_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            app.filter_section = match app.filter_section {
                FilterSection::Dates => FilterSection::Products,
                FilterSection::Countries => FilterSection::Dates,
                FilterSection::Products => FilterSection::Countries,
            };
        }
        KeyCode::Right => {
            app.filter_section = match app.filter_section {
                FilterSection::Dates => FilterSection::Countries,
                FilterSection::Countries => FilterSection::Products,
                FilterSection::Products => FilterSection::Dates,
            };
        }
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => match app.filter_section {
            FilterSection::Dates => {
                app.date_field = match app.date_field {
                    DateField::Start => DateField::End,
                    DateField::End => DateField::Start,
                };
            }
            FilterSection::Countries => app.toggle_country(),
            FilterSection::Products => app.toggle_product(),
        },
        // Date stepping: h/l by day, H/L by calendar month.
        KeyCode::Char('h') => {
            if app.filter_section == FilterSection::Dates {
                app.shift_date(-1, 0);
            }
        }
        KeyCode::Char('l') => {
            if app.filter_section == FilterSection::Dates {
                app.shift_date(1, 0);
            }
        }
        KeyCode::Char('H') => {
            if app.filter_section == FilterSection::Dates {
                app.shift_date(0, -1);
            }
        }
        KeyCode::Char('L') => {
            if app.filter_section == FilterSection::Dates {
                app.shift_date(0, 1);
            }
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_table(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_table(1),
        KeyCode::PageUp => app.scroll_table(-20),
        KeyCode::PageDown => app.scroll_table(20),
        KeyCode::Home => app.table_offset = 0,
        _ => {}
    }
}
