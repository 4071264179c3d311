use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use safecal_core::service::renderer::RectShape;
use safecal_core::time::weekday_column;
use safecal_core::{days_in_month, render_cell, CellGeometry, Rgb, MONTH_NAMES};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
};

// Monday-first columns
const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / selectors
            Constraint::Min(10),   // Calendar + summary
            Constraint::Length(1), // Footer / help
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // App title
            Constraint::Min(1),     // Spacer
            Constraint::Length(30), // Month/year selector
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled(
        "SAFECAL",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let title = format!(" {} {} ", MONTH_NAMES[app.month0 as usize], app.year);
    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(THEME.text)),
        Span::styled(
            title,
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" > ", Style::default().fg(THEME.text)),
    ]);
    let nav = Paragraph::new(nav_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(header_block, main_layout[0]);

    // --- Main content split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75), // Calendar grid
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(25), // Summary panel
        ])
        .split(main_layout[1]);

    draw_calendar(frame, app, content_chunks[0]);
    draw_summary(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("MONTH: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("YEAR: ", Style::default().fg(THEME.muted)),
        Span::styled("↑/↓ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_calendar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Calendar ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 7 || inner.height < 3 {
        return;
    }

    let first = match NaiveDate::from_ymd_opt(app.year, app.month0 + 1, 1) {
        Some(d) => d,
        None => return,
    };
    let offset = weekday_column(first) as u16;
    let days = days_in_month(app.year, app.month0) as u16;
    if days == 0 {
        return;
    }
    let rows = (offset + days).div_ceil(7);

    // Cell size follows the frame, not a fixed constant.
    let cell_w = inner.width / 7;
    let cell_h = ((inner.height - 1) / rows).max(1);
    let x0 = inner.x + (inner.width - cell_w * 7) / 2;

    for (i, label) in WEEKDAY_LABELS.iter().enumerate() {
        let rect = Rect::new(x0 + i as u16 * cell_w, inner.y, cell_w, 1);
        let header = Paragraph::new(*label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(THEME.muted));
        frame.render_widget(header, rect);
    }

    for day in 1..=days {
        let slot = offset + day - 1;
        let col = slot % 7;
        let row = slot / 7;
        let cell = Rect::new(
            x0 + col * cell_w,
            inner.y + 1 + row * cell_h,
            cell_w,
            cell_h,
        );
        if cell.bottom() > inner.bottom() {
            continue;
        }
        draw_day_cell(frame, app, day as u32, cell);
    }
}

fn draw_day_cell(frame: &mut Frame, app: &App, day: u32, cell: Rect) {
    let label_rect = Rect::new(
        cell.x,
        (cell.y + cell.height / 2).min(cell.y + cell.height - 1),
        cell.width,
        1,
    );

    if let Some(point) = app.view.point_for_day(day) {
        let geom = CellGeometry {
            center_x: cell.width as f64 / 2.0,
            center_y: cell.height as f64 / 2.0,
            width: cell.width as f64,
            height: cell.height as f64,
        };
        let Some(scene) = render_cell(
            &geom,
            point.counts.incidents,
            point.counts.risks,
            day,
            &app.palette,
        ) else {
            // Non-numeric counts: the cell stays empty.
            return;
        };

        let upper = band_area(cell, &scene.incident_band.rect);
        let lower = band_area(cell, &scene.risk_band.rect);
        frame.render_widget(band_fill(scene.incident_band.fill), upper);
        frame.render_widget(band_fill(scene.risk_band.fill), lower);

        let label = Paragraph::new(scene.label.text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD));
        frame.render_widget(label, label_rect);
    } else {
        let label = Paragraph::new(format!("{:02}", day))
            .alignment(Alignment::Center)
            .style(Style::default().fg(THEME.muted));
        frame.render_widget(label, label_rect);
    }
}

// Scene rects are in cell-local units, one unit per terminal cell.
fn band_area(cell: Rect, shape: &RectShape) -> Rect {
    let x = cell.x + shape.x.round() as u16;
    let y = cell.y + shape.y.round() as u16;
    let width = (shape.width.round() as u16).clamp(1, cell.width);
    let height = (shape.height.round() as u16).max(1);
    Rect::new(x, y, width, height).intersection(cell)
}

fn band_fill(fill: Rgb) -> Block<'static> {
    Block::default().style(Style::default().bg(to_color(fill)))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Overview
            Constraint::Min(1),     // Legend
        ])
        .split(area);

    let summary = &app.view.summary;
    let info_text = vec![
        Line::from(vec![Span::styled(
            "Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Incidents: ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.0}", summary.total_incidents),
                Style::default()
                    .fg(to_color(app.palette.alert_incident))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Risks:     ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.0}", summary.total_risks),
                Style::default()
                    .fg(to_color(app.palette.alert_risk))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Alert days: ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{} inc / {} rsk", summary.incident_days, summary.risk_days),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Records:    ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{}", app.view.points.len()),
                Style::default().fg(THEME.text),
            ),
        ]),
    ];

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(info_block, chunks[0]);

    let legend_text = vec![
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(to_color(app.palette.alert_incident))),
            Span::styled("incidents > 0", Style::default().fg(THEME.muted)),
        ]),
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(to_color(app.palette.alert_risk))),
            Span::styled("risks > 0", Style::default().fg(THEME.muted)),
        ]),
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(to_color(app.palette.neutral))),
            Span::styled("clear", Style::default().fg(THEME.muted)),
        ]),
    ];
    let legend = Paragraph::new(legend_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Legend "),
    );
    frame.render_widget(legend, chunks[1]);
}
