use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::Notice;
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER, STATUS_ERROR, STATUS_OK,
    STATUS_WARNING,
};
use crate::workflow::{InputPayload, Mode, SubmissionState, SummaryLength, ACCEPTED_EXTENSIONS};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const URL_PLACEHOLDER: &str = "https://example.com/article";
const TEXT_PLACEHOLDER: &str = "Type or paste the text to summarize";
const CURSOR: &str = "▏";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.endpoint()).widget(), header);
    frame.render_widget(Clear, body);
    render_form(frame, app, body);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn render_form(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if body.height == 0 {
        return;
    }
    let regions = form_regions(body);
    let state = app.workflow().state();

    render_tabs(frame, state.mode(), regions.tabs);
    render_input(frame, app, regions.input);
    frame.render_widget(
        Paragraph::new(length_line(state.summary_length())),
        regions.length,
    );
    frame.render_widget(Paragraph::new(status_line(app)), regions.status);
    render_result(frame, state.submission(), regions.result);
}

fn render_tabs(frame: &mut Frame<'_>, mode: Mode, area: Rect) {
    let titles = Mode::ALL.iter().map(|m| format!(" {} ", m.label()));
    let tabs = Tabs::new(titles)
        .select(mode.index())
        .style(Style::default().fg(HEADER_TEXT))
        .highlight_style(
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(tabs, area);
}

fn render_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.workflow().state();
    let editable = !state.is_busy();
    let border = if editable { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(format!(" {} ", state.mode().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let lines = input_lines(state.input(), &app.form().file_path, editable);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn input_lines<'a>(input: &'a InputPayload, file_path: &'a str, editable: bool) -> Vec<Line<'a>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let placeholder_style = Style::default().fg(PLACEHOLDER);
    let cursor = if editable { CURSOR } else { "" };

    match input {
        InputPayload::Text(text) if text.is_empty() => vec![Line::from(vec![
            Span::styled(cursor, text_style),
            Span::styled(TEXT_PLACEHOLDER, placeholder_style),
        ])],
        InputPayload::Text(text) => {
            let mut lines: Vec<Line> = text
                .split('\n')
                .map(|line| Line::styled(line, text_style))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled(cursor, text_style));
            }
            lines
        }
        InputPayload::Url(url) if url.is_empty() => vec![Line::from(vec![
            Span::styled(cursor, text_style),
            Span::styled(URL_PLACEHOLDER, placeholder_style),
        ])],
        InputPayload::Url(url) => vec![Line::from(vec![
            Span::styled(url.as_str(), text_style),
            Span::styled(cursor, text_style),
        ])],
        InputPayload::File(file) => {
            let selected = match file {
                Some(file) => Line::from(vec![
                    Span::styled("Selected: ", placeholder_style),
                    Span::styled(
                        format!("{} ({})", file.file_name(), format_size(file.len())),
                        Style::default().fg(STATUS_OK),
                    ),
                ]),
                None => Line::styled("No file selected", placeholder_style),
            };
            vec![
                Line::from(vec![
                    Span::styled("Path: ", placeholder_style),
                    Span::styled(file_path, text_style),
                    Span::styled(cursor, text_style),
                ]),
                Line::styled(
                    format!(
                        "Accepted: {}  (Enter to attach)",
                        ACCEPTED_EXTENSIONS.join(", ")
                    ),
                    placeholder_style,
                ),
                Line::from(""),
                selected,
            ]
        }
    }
}

fn length_line(selected: SummaryLength) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Summary length: ",
        Style::default().fg(PLACEHOLDER),
    )];
    for level in [SummaryLength::Short, SummaryLength::Medium, SummaryLength::Long] {
        let style = if level == selected {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", level.label()), style));
    }
    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    let submission = app.workflow().submission();
    if submission.is_in_flight() {
        let tick = app.form().animation_tick as usize;
        let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
        return Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Summarizing...", Style::default().fg(HEADER_TEXT)),
        ]);
    }
    if let Some(notice) = &app.form().notice {
        let color = match notice {
            Notice::Info(_) => STATUS_OK,
            Notice::Warning(_) => STATUS_WARNING,
            Notice::Error(_) => STATUS_ERROR,
        };
        return Line::styled(format!(" {}", notice.text()), Style::default().fg(color));
    }
    let hint = match submission {
        SubmissionState::Succeeded { .. } => " Done. Ctrl+Y copies the summary.",
        _ if app.workflow().state().can_submit() => " Ctrl+S to summarize.",
        _ => match app.workflow().mode() {
            Mode::Text => " Enter the text to summarize.",
            Mode::Url => " Enter the address of a web page.",
            Mode::File => " Type a file path and press Enter.",
        },
    };
    Line::styled(hint, Style::default().fg(PLACEHOLDER))
}

fn render_result(frame: &mut Frame<'_>, submission: &SubmissionState, area: Rect) {
    let (title, body, color) = match submission {
        SubmissionState::Failed { message, .. } => (" Error ", message.as_str(), STATUS_ERROR),
        SubmissionState::Succeeded { summary } => (" Summary ", summary.as_str(), STATUS_OK),
        SubmissionState::Idle | SubmissionState::InFlight { .. } => return,
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(HEADER_TEXT))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Human-readable byte count, e.g. `12.3 KB`.
fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}
