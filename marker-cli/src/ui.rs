//! Terminal UI rendering for the Marker host

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span as UiSpan},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, Mode};

// Catppuccin Mocha colors
const SURFACE0: Color = Color::Rgb(49, 50, 68);
const SURFACE1: Color = Color::Rgb(69, 71, 90);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const RED: Color = Color::Rgb(243, 139, 168);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const GREEN: Color = Color::Rgb(166, 227, 161);
const BLUE: Color = Color::Rgb(137, 180, 250);
const MAUVE: Color = Color::Rgb(203, 166, 247);
const TEAL: Color = Color::Rgb(148, 226, 213);

/// Fallback palette cycled per label when the host configures no color
const LABEL_PALETTE: [Color; 6] = [RED, BLUE, GREEN, YELLOW, MAUVE, TEAL];

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_main_area(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Draw popups/overlays
    match app.mode {
        Mode::LabelPicker => draw_label_picker(frame, app),
        Mode::Help => draw_help(frame),
        _ => {}
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let span_count = app.store.spans().len();
    let current = if span_count > 0 {
        app.sidebar_selected + 1
    } else {
        0
    };

    let title_text = format!(" Marker - {} [{}/{}]", app.title, current, span_count);

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));
    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Editor
            Constraint::Length(32), // Sidebar
        ])
        .split(area);

    draw_editor(frame, app, chunks[0]);
    draw_sidebar(frame, app, chunks[1]);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let editor_style = if app.focus == Focus::Editor {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let mode_indicator = match app.mode {
        Mode::Visual => " [VISUAL]",
        _ => "",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(editor_style)
        .title(format!("Text{}", mode_indicator));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = app.store.text();
    let spans = app.store.ordered();
    let selection = app.selection();
    let cursor_offset = app.cursor.offset();
    let show_cursor = app.focus == Focus::Editor && matches!(app.mode, Mode::Normal | Mode::Visual);

    // Build styled lines, one addressable cell per character
    let mut lines: Vec<Line> = Vec::new();
    let mut line_spans: Vec<UiSpan> = Vec::new();
    let mut offset = 0;

    for line_text in text.as_str().lines() {
        line_spans.clear();

        for ch in line_text.chars() {
            let mut style = Style::default().fg(TEXT);

            if let Some(span) = spans.iter().find(|s| s.contains(offset)) {
                style = style
                    .fg(palette_color(app, &span.label))
                    .add_modifier(Modifier::UNDERLINED);
                if span.editing {
                    style = style.add_modifier(Modifier::ITALIC);
                }
            }

            if let Some((sel_start, sel_end)) = selection {
                if offset >= sel_start && offset <= sel_end {
                    style = style.bg(SURFACE1).add_modifier(Modifier::BOLD);
                }
            }

            if show_cursor && offset == cursor_offset {
                style = style.add_modifier(Modifier::REVERSED);
            }

            line_spans.push(UiSpan::styled(ch.to_string(), style));
            offset += 1;
        }

        // The newline itself is addressable; mark the cursor sitting on it
        if show_cursor && offset == cursor_offset {
            line_spans.push(UiSpan::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
        }
        offset += 1;

        lines.push(Line::from(line_spans.clone()));
    }

    // Scroll to keep the cursor row visible
    let (cursor_row, _) = app.cursor.row_col();
    let visible_height = inner.height as usize;
    let scroll_offset = if visible_height > 0 && cursor_row >= visible_height {
        cursor_row - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .scroll((scroll_offset as u16, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let sidebar_style = if app.focus == Focus::Sidebar {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let spans = app.store.ordered();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(sidebar_style)
        .title(format!("Spans ({})", spans.len()));

    let text = app.store.text();
    let items: Vec<ListItem> = spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let selected = i == app.sidebar_selected;
            let marker = if selected { ">" } else { " " };
            let editing = if span.editing { "*" } else { "" };

            let excerpt: String = text
                .slice(span.start, span.end)
                .chars()
                .take(18)
                .collect::<String>()
                .replace('\n', " ");

            let line = format!("{} [{}]{} \"{}\"", marker, span.label, editing, excerpt);

            let style = if selected {
                Style::default().fg(TEXT).bg(SURFACE1)
            } else {
                Style::default().fg(palette_color(app, &span.label))
            };

            ListItem::new(Line::from(UiSpan::styled(line, style)))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Visual => "VISUAL",
        Mode::LabelPicker => "LABEL",
        Mode::Help => "HELP",
    };

    let status = app.status_message.as_deref().unwrap_or("");
    let help_hint = "v select | Tab sidebar | d delete | ? help";

    let status_text = format!(
        " {} | {}",
        mode_str,
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar = Paragraph::new(status_text).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));
    frame.render_widget(status_bar, area);
}

fn draw_label_picker(frame: &mut Frame, app: &App) {
    let labels = app.store.labels().labels();
    let height = (labels.len() as u16 + 2).max(3);
    let area = centered_rect(40, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MAUVE))
        .title("Select Label (j/k, Enter)");

    if labels.is_empty() {
        let note = Paragraph::new("No labels configured")
            .style(Style::default().fg(SUBTEXT0))
            .block(block);
        frame.render_widget(note, area);
        return;
    }

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let selected = i == app.picker_selected;
            let marker = if selected { ">" } else { " " };
            let color = palette_color(app, label);
            let style = if selected {
                Style::default().fg(color).bg(SURFACE1)
            } else {
                Style::default().fg(color)
            };
            ListItem::new(format!("{} {}", marker, label)).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(62, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let heading = |s: &'static str| {
        Line::from(UiSpan::styled(
            s,
            Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        heading("Navigation"),
        Line::from("  h/j/k/l  Move cursor"),
        Line::from("  w/b      Next/prev word"),
        Line::from("  g/G      Go to top/bottom"),
        Line::from("  Tab      Toggle text/sidebar focus"),
        Line::from(""),
        heading("Spans"),
        Line::from("  v        Select text (then Enter to create)"),
        Line::from("  j/k      Pick span (sidebar)"),
        Line::from("  Enter    Edit span label (sidebar)"),
        Line::from("  d        Delete span (sidebar)"),
        Line::from("  [ / ]    Move span start left/right by word"),
        Line::from("  { / }    Move span end left/right by word"),
        Line::from(""),
        Line::from(UiSpan::styled(
            "Committed spans land in ~/.marker/spans.json on every change",
            Style::default().fg(SUBTEXT0),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, area);
}

/// Host-configured color for a label, or a stable default from the palette
fn palette_color(app: &App, label: &str) -> Color {
    if let Some(color) = app.store.labels().color_for(label) {
        if let Some(parsed) = parse_color(color) {
            return parsed;
        }
    }
    let labels = app.store.labels().labels();
    let idx = labels.iter().position(|l| l == label).unwrap_or(0);
    LABEL_PALETTE[idx % LABEL_PALETTE.len()]
}

/// Parse a host color string: `#rrggbb` or a basic named color
fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match value.to_lowercase().as_str() {
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        _ => None,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#f38ba8"), Some(Color::Rgb(0xf3, 0x8b, 0xa8)));
        assert_eq!(parse_color(" #000000 "), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_color("#xyzxyz"), None);
        assert_eq!(parse_color("#fff"), None);
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("mauve"), None);
    }
}
