//! Rendering - draws a `RenderState` into a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::app::focus::{Column, Region, Tab};
use crate::input::TextInput;
use crate::messages::RenderState;
use crate::models::Response;

const FOCUSED: Style = Style::new().fg(Color::Indexed(205));
const BLURRED: Style = Style::new().fg(Color::Indexed(240));
const PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);
const SELECTED_METHOD: Style = Style::new()
    .fg(Color::Indexed(15))
    .bg(Color::Indexed(5))
    .add_modifier(Modifier::BOLD);
const SELECTED_TAB: Style = Style::new()
    .fg(Color::Indexed(10))
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

const METHOD_WIDTH: u16 = 10;
const HEADER_KEY_WIDTH: usize = 17;
const HEADER_SEPARATOR: &str = ": ";
const CONTENT_PADDING: Padding = Padding::new(2, 0, 1, 0);

/// Draw the whole screen
pub fn draw(f: &mut Frame, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Method + URL
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Tab content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_request_line(f, state, chunks[0]);

    let titles: Vec<&str> = Tab::ALL.iter().map(Tab::title).collect();
    let tabs = render_tabs(&titles, state.focus.tab.index(), state.focus.region == Region::Tabs);
    f.render_widget(tabs, chunks[1]);

    match state.focus.tab {
        Tab::Headers => draw_headers(f, state, chunks[2]),
        Tab::Body => draw_body(f, state, chunks[2]),
        Tab::Response => draw_response(f, state, chunks[2]),
    }

    draw_status_bar(f, state, chunks[3]);
}

fn draw_request_line(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(METHOD_WIDTH), Constraint::Min(0)])
        .split(area);

    let method_style = if state.focus.region == Region::Method {
        SELECTED_METHOD
    } else {
        Style::default().fg(method_color(state.method.as_str()))
    };
    let method = Paragraph::new(state.method.as_str())
        .alignment(Alignment::Center)
        .style(method_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(method_style),
        );
    f.render_widget(method, chunks[0]);

    let url_style = if state.url.is_focused() { FOCUSED } else { BLURRED };
    let url = Paragraph::new(input_line(&state.url)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(url_style),
    );
    f.render_widget(url, chunks[1]);

    if state.url.is_focused() {
        place_cursor(f, chunks[1].inner(Margin::new(1, 1)), &state.url, 0, 0);
    }
}

fn draw_headers(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().padding(CONTENT_PADDING);
    let inner = block.inner(area);

    let focused = state.focus.focused_header();
    let row_style = |row: usize, column: Column| {
        if focused.is_some_and(|cell| cell.row == row && cell.column == column) {
            FOCUSED
        } else {
            Style::default()
        }
    };

    let lines: Vec<Line> = state
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let (key, key_style) = cell_text(&header.key);
            let (value, value_style) = cell_text(&header.value);
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", key, width = HEADER_KEY_WIDTH),
                    key_style.patch(row_style(i, Column::Key)),
                ),
                Span::raw(HEADER_SEPARATOR),
                Span::styled(value.to_string(), value_style.patch(row_style(i, Column::Value))),
            ])
        })
        .collect();

    // Keep the focused row on screen
    let focused_row = focused.map(|cell| cell.row).unwrap_or(0);
    let offset = focused_row.saturating_sub(inner.height.saturating_sub(1) as usize) as u16;

    f.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);

    if let Some(cell) = focused {
        if let Some(header) = state.headers.get(cell.row) {
            let input = header.cell(cell.column);
            let x_offset = match cell.column {
                Column::Key => 0,
                Column::Value => (HEADER_KEY_WIDTH + HEADER_SEPARATOR.len()) as u16,
            };
            let y_offset = (cell.row as u16).saturating_sub(offset);
            place_cursor(f, inner, input, x_offset, y_offset);
        }
    }
}

fn draw_body(f: &mut Frame, state: &RenderState, area: Rect) {
    let style = if state.body.is_focused() { FOCUSED } else { BLURRED };
    let title = if state.method.has_body() {
        " Body ".to_string()
    } else {
        format!(" Body (not sent with {}) ", state.method.as_str())
    };

    let body = Paragraph::new(input_line(&state.body)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(title),
    );
    f.render_widget(body, area);

    if state.body.is_focused() {
        place_cursor(f, area.inner(Margin::new(1, 1)), &state.body, 0, 0);
    }
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.is_loading { " [...]" } else { "" };
    let time_text = if state.response.time_ms > 0 {
        format!(" {}ms ", state.response.time_ms)
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focus.response_active() { FOCUSED } else { BLURRED })
        .title(format!(" Response{} ", loading))
        .title_bottom(Line::from(time_text).right_aligned())
        .padding(Padding::horizontal(1));

    let response = Paragraph::new(response_lines(&state.response))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.response_scroll, 0));
    f.render_widget(response, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match (state.focus.region, state.focus.tab) {
        _ if state.is_loading => " Loading... | Ctrl+C:quit ",
        (Region::Method, _) => " ←/→:method | Tab:next | Ctrl+C:quit ",
        (Region::Url, _) => " Tab:next | Ctrl+C:quit ",
        (Region::Tabs, Tab::Headers) => {
            " ↑/↓:field | Ctrl+N:add header | h/b/r:tabs | Ctrl+C:quit "
        }
        (Region::Tabs, Tab::Body) => " h/b/r:tabs | Tab:next | Ctrl+R:send | Ctrl+C:quit ",
        (Region::Tabs, Tab::Response) => " ↑/↓:scroll | h/b/r:tabs | Ctrl+C:quit ",
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

/// Value, or the placeholder when empty
fn input_line(input: &TextInput) -> Line<'static> {
    let (text, style) = cell_text(input);
    Line::from(Span::styled(text.to_string(), style))
}

fn cell_text(input: &TextInput) -> (&str, Style) {
    if input.value().is_empty() {
        (input.placeholder(), PLACEHOLDER)
    } else {
        (input.value(), Style::default())
    }
}

/// Put the terminal cursor inside `area`, if it fits
fn place_cursor(f: &mut Frame, area: Rect, input: &TextInput, x_offset: u16, y_offset: u16) {
    let column = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(x_offset).saturating_add(column);
    let y = area.y.saturating_add(y_offset);
    if area.width > 0 && y < area.bottom() {
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), y));
    }
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize, active: bool) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(BLURRED)
        .highlight_style(if active { SELECTED_TAB } else { Style::default() })
        .divider("    ")
}

/// Lines shown in the response tab; an error hides the body
pub fn response_lines(response: &Response) -> Vec<Line<'static>> {
    if let Some(err) = &response.error {
        return vec![Line::from(Span::styled(format!("Error: {}", err), FOCUSED))];
    }

    match pretty_json(&response.body) {
        Some(pretty) => highlight_json(&pretty),
        None => response
            .body
            .lines()
            .map(|line| Line::raw(line.to_string()))
            .collect(),
    }
}

/// Pretty-printed body, if it parses as JSON
pub fn pretty_json(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

/// Simple JSON syntax highlighting
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let (len, style) = match c {
            '"' => {
                let len = string_len(rest);
                let is_key = rest[len..].trim_start().starts_with(':');
                (len, Style::default().fg(if is_key { Color::Cyan } else { Color::Green }))
            }
            '{' | '}' | '[' | ']' => (1, Style::default().fg(Color::Yellow)),
            '-' | '0'..='9' => {
                let len = rest
                    .find(|ch: char| !(ch.is_ascii_digit() || "+-.eE".contains(ch)))
                    .unwrap_or(rest.len());
                (len, Style::default().fg(Color::Yellow))
            }
            _ => match ["true", "false", "null"].iter().find(|w| rest.starts_with(**w)) {
                Some(word) => (word.len(), Style::default().fg(Color::Magenta)),
                None => (c.len_utf8(), Style::default()),
            },
        };

        let piece = &rest[..len];
        match spans.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push_str(piece),
            _ => spans.push(Span::styled(piece.to_string(), style)),
        }
        rest = &rest[len..];
    }

    Line::from(spans)
}

/// Byte length of the string literal at the start of `s`, quotes included
fn string_len(s: &str) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return i + 1;
        }
    }
    s.len()
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}
