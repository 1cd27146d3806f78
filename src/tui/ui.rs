use crate::tui::app::{App, InputMode, View};
use crate::tui::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Entry form / leaderboard
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0]);
    render_tabs(frame, chunks[1], app);
    match app.current_view {
        View::Entry => render_entry_view(frame, chunks[2], app),
        View::Leaderboard => render_leaderboard(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(
        "Creel",
        Style::default().fg(theme::TITLE_COLOR).bold(),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = vec!["Catch Entry", "Leaderboard"];
    let selected = match app.current_view {
        View::Entry => 0,
        View::Leaderboard => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(Style::default().fg(theme::TITLE_COLOR).bold().reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_entry_view(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Selector form
        Constraint::Fill(1),   // Catch table
    ])
    .split(area);

    render_entry_form(frame, chunks[0], app);
    render_entry_table(frame, chunks[1], app);
}

fn render_entry_form(frame: &mut Frame, area: Rect, app: &App) {
    let angler_line = Line::from(vec![
        Span::styled("Angler  ", Style::default().fg(theme::MUTED)),
        Span::styled(
            format!("< {} >", app.current_angler()),
            Style::default().fg(theme::SELECTOR_ACTIVE).bold(),
        ),
        Span::styled(
            format!("   total {}", app.angler_total()),
            Style::default().fg(theme::MUTED),
        ),
    ]);
    let species_line = Line::from(vec![
        Span::styled("Species ", Style::default().fg(theme::MUTED)),
        Span::styled(
            format!("< {} >", app.current_species()),
            Style::default().fg(theme::SELECTOR_ACTIVE),
        ),
    ]);
    let length_line = Line::from(vec![
        Span::styled("Length  ", Style::default().fg(theme::MUTED)),
        Span::raw(format!("{}|", app.length_input)),
        Span::styled(" inches", Style::default().fg(theme::MUTED)),
    ]);
    let hint_line = Line::from(Span::styled(
        "a/A angler  s/S species  0-9 . length  Enter log catch",
        Style::default().fg(theme::INDEX_COLOR),
    ));

    let form = Paragraph::new(vec![angler_line, species_line, length_line, hint_line]);
    frame.render_widget(form, area);
}

fn render_entry_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let records = app.visible_records();

    if records.is_empty() {
        let empty_msg = Paragraph::new(format!("No catches for {}", app.current_angler()))
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index = format!("{}.", idx + 1);

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(index).style(Style::default().fg(theme::INDEX_COLOR)),
                Cell::from(record.species.clone()),
                Cell::from(format!("{}\"", record.length.display())),
                Cell::from(format!("{}", record.base)),
                Cell::from(format!("{}", record.bonus)),
                Cell::from(format!("{}", record.total)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),  // Index: "99."
        Constraint::Fill(1),    // Species
        Constraint::Length(8),  // Length
        Constraint::Length(6),  // Base
        Constraint::Length(6),  // Bonus
        Constraint::Length(6),  // Total
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Species", "Length", "Base", "Bonus", "Total"])
                .style(theme::HEADER_STYLE)
                .bottom_margin(1),
        )
        .row_highlight_style(theme::ROW_SELECTED);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_leaderboard(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.leaderboard();

    if board.is_empty() {
        let empty_msg = Paragraph::new("No anglers on the roster")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let max_score = board.iter().map(|e| e.score).max().unwrap_or(0);

    let rows: Vec<Row> = board
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let rank = format!("{}.", idx + 1);
            let score_color = theme::score_color(entry.score, max_score);
            let mut score_spans = vec![Span::styled(
                format!("{:>5} ", entry.score),
                Style::default().fg(score_color),
            )];
            score_spans.extend(score_bar(entry.score, max_score, 8).spans);
            let score_line = Line::from(score_spans);

            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(rank).style(Style::default().fg(theme::INDEX_COLOR)),
                Cell::from(entry.angler.clone()),
                Cell::from(score_line),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),  // Rank: "99."
        Constraint::Fill(1),    // Angler
        Constraint::Length(16), // Score + bar: "12345 ████░░░░"
    ];

    let table = Table::new(rows, widths).header(
        Row::new(vec!["#", "Angler", "Score"])
            .style(theme::HEADER_STYLE)
            .bottom_margin(1),
    );

    frame.render_widget(table, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        // Show flash message with color based on message type
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("No angler") {
            theme::FLASH_ERROR
        } else if msg.starts_with("Logged:") || msg.starts_with("Deleted:") {
            theme::FLASH_SUCCESS
        } else {
            Color::White
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let count = format!("{} catches", app.entries.len());

        // Build hints with colored shortcut keys
        let mut hint_spans = Vec::new();
        let hints: Vec<(&str, &str)> = match app.current_view {
            View::Entry => vec![
                ("Enter", ":log "),
                ("j/k", ":rows "),
                ("d", ":delete "),
                ("Tab", ":leaderboard "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            View::Leaderboard => vec![
                ("Tab", ":entry "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                hint_spans.push(Span::raw(" "));
            }
            hint_spans.push(Span::styled(
                *key,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            hint_spans.push(Span::raw(*label));
        }

        let mut spans = vec![
            Span::styled(count, Style::default().fg(theme::MUTED)),
            Span::raw("  "),
        ];
        spans.extend(hint_spans);
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

fn score_bar(score: i64, max_score: i64, width: usize) -> Line<'static> {
    let ratio = if max_score > 0 {
        (score as f64 / max_score as f64).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_color = theme::score_color(score, max_score);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(bar_color),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(theme::BAR_EMPTY),
        ));
    }

    Line::from(spans)
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(46, 15, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan).bold());
    let help_lines = vec![
        Line::from(vec![key("a / A         "), Span::raw("Next/previous angler")]),
        Line::from(vec![key("s / S         "), Span::raw("Next/previous species")]),
        Line::from(vec![key("0-9 .         "), Span::raw("Edit length")]),
        Line::from(vec![key("Backspace     "), Span::raw("Erase length digit")]),
        Line::from(vec![key("Enter         "), Span::raw("Log the catch")]),
        Line::from(vec![key("j / Down      "), Span::raw("Move down the table")]),
        Line::from(vec![key("k / Up        "), Span::raw("Move up the table")]),
        Line::from(vec![key("d             "), Span::raw("Delete selected catch")]),
        Line::from(vec![key("Tab           "), Span::raw("Toggle entry/leaderboard")]),
        Line::from(vec![key("?             "), Span::raw("Show/hide this help")]),
        Line::from(vec![key("q / Ctrl-c    "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
