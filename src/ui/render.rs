use crate::config::DisplayConfig;
use crate::model::{RecordKind, Vehicle};
use crate::session::{Screen, StatusMessage};
use crate::ui::app::{App, Focus};
use crate::ui::auth::AuthField;
use crate::ui::footer::Footer;
use crate::ui::form::FormField;
use crate::ui::header::{Header, TITLE};
use crate::ui::layout::{centered_rect_by_size, layout_regions, panel_columns};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    match app.screen() {
        Screen::Auth => draw_auth(frame, app, body),
        Screen::Main => {
            let username = app.console().profile().map(|p| p.username.as_str());
            frame.render_widget(Header::new().widget(username), header);
            for (kind, column) in RecordKind::ALL.into_iter().zip(panel_columns(body)) {
                draw_panel(frame, app, kind, column);
            }
        }
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.screen(), app.focus()), footer);

    if let Some(error) = app.last_command_error() {
        let lines = vec![Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        ))];
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let popup = centered_rect_by_size(body, width.saturating_add(4), 3);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title("Error")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }
}

/// One list row for a vehicle, e.g. `MODEL X ---2020 ---¥56929.07[M] --- EV Tesla---`.
pub fn vehicle_row(vehicle: &Vehicle, display: &DisplayConfig) -> String {
    format!(
        "{} ---{} ---{} --- {} {}---",
        vehicle.name,
        vehicle.release_year,
        display.format_price(vehicle.price),
        vehicle.segment_name,
        vehicle.brand_name
    )
}

fn status_line(status: Option<&StatusMessage>) -> Line<'static> {
    match status {
        Some(message) => {
            let color = if message.is_failure() {
                STATUS_ERROR
            } else {
                STATUS_OK
            };
            Line::from(Span::styled(message.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(""),
    }
}

fn draw_auth(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let form = app.auth_form();
    let focused = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let normal = Style::default().fg(HEADER_TEXT);
    let marker = |active: bool| if active { "> " } else { "  " };
    let username_active = form.focused == AuthField::Username;

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}Username: {}", marker(username_active), form.username),
            if username_active { focused } else { normal },
        )),
        Line::from(Span::styled(
            format!("{}Password: {}", marker(!username_active), form.masked_password()),
            if username_active { normal } else { focused },
        )),
        Line::from(""),
        status_line(app.console().auth_status()),
    ];

    let area = centered_rect_by_size(body, 48, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(form.mode.title(), Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}

fn draw_panel(frame: &mut Frame<'_>, app: &App, kind: RecordKind, area: Rect) {
    let active = app.active_panel() == kind;
    let border = if active { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(kind.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_lines = form_lines(app, kind, active && app.focus() == Focus::Form);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(form_lines.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(status_line(app.console().panel_status(kind))),
        rows[0],
    );

    let staged = app.console().catalog().edited(kind);
    let form_title = if staged.is_new() {
        "New".to_string()
    } else {
        format!("Edit #{}", staged.id())
    };
    frame.render_widget(
        Paragraph::new(form_lines).block(
            Block::default()
                .title(form_title)
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        rows[1],
    );

    let items = list_rows(app, kind)
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let list = List::new(items).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(if active { Modifier::BOLD } else { Modifier::empty() }),
    );
    let mut state = ListState::default();
    if app.console().catalog().len(kind) > 0 {
        state.select(Some(app.selection(kind)));
    }
    frame.render_stateful_widget(list, rows[2], &mut state);
}

fn list_rows(app: &App, kind: RecordKind) -> Vec<String> {
    let catalog = app.console().catalog();
    match kind {
        RecordKind::Segment => catalog.segments().iter().map(|s| s.name.clone()).collect(),
        RecordKind::Brand => catalog.brands().iter().map(|b| b.name.clone()).collect(),
        RecordKind::Vehicle => catalog
            .vehicles()
            .iter()
            .map(|v| vehicle_row(v, app.display()))
            .collect(),
    }
}

fn form_lines(app: &App, kind: RecordKind, editing: bool) -> Vec<Line<'static>> {
    let catalog = app.console().catalog();
    let staged = catalog.edited(kind);
    let current = app.form_field(kind);

    let mut lines: Vec<Line<'static>> = FormField::for_kind(kind)
        .iter()
        .map(|&field| {
            let value = match field {
                FormField::Name => staged.name().to_string(),
                FormField::ReleaseYear => app.year_input().to_string(),
                FormField::Price => app.price_input().to_string(),
                FormField::Segment => choice_label(
                    catalog.segment(catalog.edited_vehicle().segment).map(|s| s.name.as_str()),
                ),
                FormField::Brand => choice_label(
                    catalog.brand(catalog.edited_vehicle().brand).map(|b| b.name.as_str()),
                ),
            };
            let focused = editing && field == current;
            let marker = if focused { "> " } else { "  " };
            let style = if focused {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Line::from(Span::styled(
                format!("{}{}: {}", marker, field.label(), value),
                style,
            ))
        })
        .collect();

    if !staged.is_submittable() {
        lines.push(Line::from(Span::styled(
            "  (incomplete)",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )));
    }
    lines
}

fn choice_label(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("◀ {} ▶", name),
        None => "◀ - ▶".to_string(),
    }
}
