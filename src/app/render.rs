use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use super::data::cell_text;
use super::{App, Route, TablePage, UiTheme, DASHBOARD_ITEMS};
use crate::kernel::services::ports::KeyValueStore;
use crate::kernel::CommitOutcome;

const MODAL_WIDTH: u16 = 48;

pub(super) fn render_app<S: KeyValueStore>(app: &App<S>, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let theme = app.theme();
    let route = app.route();
    let header = Line::from(vec![
        Span::styled(
            " colset ",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(route.path(), Style::default().fg(theme.muted_fg)),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    match app.page(route) {
        Some(page) => {
            render_page(page, theme, frame, chunks[1]);
            render_status(status_for_page(page), theme, frame, chunks[2]);
            if page.is_editing() {
                render_column_modal(page, theme, frame, chunks[1]);
            }
        }
        None => {
            render_dashboard(app.dashboard_selected(), theme, frame, chunks[1]);
            render_status(
                "←/→ choose · Enter open · q quit".to_string(),
                theme,
                frame,
                chunks[2],
            );
        }
    }
}

fn render_dashboard(selected: usize, theme: &UiTheme, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick the table you want to look at",
            Style::default().fg(theme.muted_fg),
        )),
        Line::default(),
    ];

    for (idx, route) in DASHBOARD_ITEMS.iter().enumerate() {
        let label = match route {
            Route::Table => "[1] Plain table",
            Route::ProTable => "[2] ProTable",
            Route::Dashboard => continue,
        };
        let style = if idx == selected {
            Style::default().fg(theme.selected_fg).bg(theme.selected_bg)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {label}  "), style)));
    }

    let height = (lines.len() as u16).min(area.height);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect::new(area.x, top, area.width, height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn render_page<S: KeyValueStore>(
    page: &TablePage<S>,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
) {
    let visible = page.visible_columns();
    let fields: Vec<_> = visible.iter().map(|col| page.field_of(col)).collect();

    let header = Row::new(visible.iter().enumerate().map(|(idx, col)| {
        let mut style = Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD);
        if idx == page.focus() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Cell::from(col.title.clone()).style(style)
    }));

    let rows = page.rows().iter().map(|record| {
        Row::new(
            fields
                .iter()
                .map(|field| Cell::from(cell_text(record, field.as_str()))),
        )
    });

    let widths: Vec<Constraint> = visible
        .iter()
        .map(|col| Constraint::Length(page.column_width(col)))
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", page.title())),
    );
    frame.render_widget(table, area);
}

fn render_column_modal<S: KeyValueStore>(
    page: &TablePage<S>,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
) {
    let rows = page.draft_rows();
    let height = (rows.len() as u16).saturating_add(4).min(area.height);
    let width = MODAL_WIDTH.min(area.width);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() + 2);
    lines.push(Line::from(Span::styled(
        "Reorder with Shift+↑/↓, Space toggles",
        Style::default().fg(theme.muted_fg),
    )));
    lines.push(Line::default());
    for (idx, row) in rows.iter().enumerate() {
        let mark = if row.visible { "[x]" } else { "[ ]" };
        let mut style = if row.visible {
            Style::default()
        } else {
            Style::default().fg(theme.hidden_fg)
        };
        if idx == page.modal_selected() {
            style = style.fg(theme.selected_fg).bg(theme.selected_bg);
        }
        lines.push(Line::from(Span::styled(
            format!("≡ {mark} {}", row.title),
            style,
        )));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Column settings "),
        ),
        popup,
    );
}

fn status_for_page<S: KeyValueStore>(page: &TablePage<S>) -> String {
    if page.is_editing() {
        return "↑/↓ select · Shift+↑/↓ move · Space show/hide · Enter done · Esc cancel"
            .to_string();
    }
    let mut status =
        "s columns · a add column · ←/→ focus · [/] width · Esc back".to_string();
    if page.last_commit() == Some(CommitOutcome::PersistFailed) {
        status.push_str(" · preferences not saved");
    }
    status
}

fn render_status(text: String, theme: &UiTheme, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(theme.muted_fg),
        ))),
        area,
    );
}
