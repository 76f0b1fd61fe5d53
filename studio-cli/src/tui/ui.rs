//! UI rendering using ratatui

use std::fmt::Write as _;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use studio_core::dashboard::DashboardSummary;
use studio_core::filters::{filter_bookings, filter_clients, filter_galleries, StatusFilter};
use studio_core::model::{format_date, format_money};
use studio_core::referrals::{
    pluralize_referrals, referral_pitch, referred_by, top_referrers, total_referrals,
};
use studio_core::{BookingStatus, GalleryStatus, SearchKind, View};

use super::app::{App, Mode};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
const SUCCESS: Color = Color::Green;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Sidebar (left) + main area (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(area);

    render_sidebar(frame, app, main_chunks[0]);

    let main_area_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with search hint
            Constraint::Min(10),   // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(main_chunks[1]);

    render_header(frame, app, main_area_chunks[0]);

    match app.view {
        View::Dashboard => render_dashboard(frame, app, main_area_chunks[1]),
        View::Clients => render_clients(frame, app, main_area_chunks[1]),
        View::Galleries => render_galleries(frame, app, main_area_chunks[1]),
        View::Bookings => render_bookings(frame, app, main_area_chunks[1]),
        View::Packages => render_packages(frame, app, main_area_chunks[1]),
        View::Referrals => render_referrals(frame, app, main_area_chunks[1]),
    }

    render_status_bar(frame, app, main_area_chunks[2]);

    if app.overlay.is_open() {
        render_search_overlay(frame, app);
    }
}

/// Sidebar with numbered views
fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            let style = if *view == app.view {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}", idx + 1, view.label()),
                style,
            )))
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", app.config.studio.name))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            app.view.label(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            "Search clients, galleries, bookings... (Ctrl+K)",
            Style::default().fg(DIM),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY))
        .title(format!(" {} ", app.config.studio.photographer))
        .title_style(Style::default().fg(SECONDARY));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let summary = DashboardSummary::build(&app.data);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    // Stat cards side by side
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, summary.cards.len().max(1) as u32);
            summary.cards.len()
        ])
        .split(chunks[0]);

    for (card, card_area) in summary.cards.iter().zip(card_areas.iter()) {
        let mut spans = vec![Span::styled(
            card.value.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(trend) = card.trend {
            spans.push(Span::styled(
                format!("  +{trend}%"),
                Style::default().fg(SUCCESS),
            ));
        }
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(SECONDARY))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), *card_area);
    }

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let date_format = app.config.ui.date_format.as_str();
    let bookings: Vec<ListItem> = summary
        .recent_bookings
        .iter()
        .map(|b| {
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(b.client_name.clone(), Style::default().fg(Color::White)),
                    Span::raw("  "),
                    Span::styled(b.status.label(), booking_status_style(b.status)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} • {} {}",
                        b.package_name,
                        format_date(b.date, date_format),
                        b.time
                    ),
                    Style::default().fg(DIM),
                )),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(bookings).block(titled_block(" Upcoming Bookings ", false)),
        lists[0],
    );

    let galleries: Vec<ListItem> = summary
        .recent_galleries
        .iter()
        .map(|g| {
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(g.title.clone(), Style::default().fg(Color::White)),
                    Span::raw("  "),
                    Span::styled(g.status.label(), gallery_status_style(g.status)),
                ]),
                Line::from(Span::styled(
                    format!("  {} • {} photos", g.client_name, g.image_count),
                    Style::default().fg(DIM),
                )),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(galleries).block(titled_block(" Recent Galleries ", false)),
        lists[1],
    );
}

fn render_clients(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let editing = app.mode == Mode::ClientFilter;
    let content = if editing {
        format!("{}|", app.client_query)
    } else if app.client_query.is_empty() {
        "Press 's' to search clients...".to_string()
    } else {
        app.client_query.clone()
    };
    let input_style = if editing || !app.client_query.is_empty() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(DIM)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(content, input_style))
            .block(titled_block(" Filter ", editing)),
        chunks[0],
    );

    let clients = filter_clients(&app.data.clients, &app.client_query);
    let title = format!(" Clients ({}) ", clients.len());
    let rows = clients
        .iter()
        .map(|c| {
            let mut detail = format!("{} • {} • {}", c.email, c.phone, format_money(c.total_spent));
            if c.referral_count > 0 {
                let _ = write!(detail, " • {}", pluralize_referrals(c.referral_count));
            }
            (c.name.clone(), detail)
        })
        .collect();

    render_rows(frame, app, chunks[1], &title, rows, "No clients found");
}

fn render_galleries(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let selected = match app.gallery_filter {
        StatusFilter::All => 0,
        StatusFilter::Only(status) => status_position(&GalleryStatus::ALL, status) + 1,
    };
    let titles = std::iter::once("All").chain(GalleryStatus::ALL.iter().map(|s| s.label()));
    render_filter_tabs(frame, chunks[0], titles, selected);

    let galleries = filter_galleries(&app.data.galleries, app.gallery_filter);
    let title = format!(" Galleries ({}) ", galleries.len());
    let rows = galleries
        .iter()
        .map(|g| {
            (
                format!("{}  [{}]", g.title, g.status.label()),
                format!("{} • {} photos", g.client_name, g.image_count),
            )
        })
        .collect();

    render_rows(frame, app, chunks[1], &title, rows, "No galleries found");
}

fn render_bookings(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let selected = match app.booking_filter {
        StatusFilter::All => 0,
        StatusFilter::Only(status) => status_position(&BookingStatus::ALL, status) + 1,
    };
    let titles = std::iter::once("All").chain(BookingStatus::ALL.iter().map(|s| s.label()));
    render_filter_tabs(frame, chunks[0], titles, selected);

    let date_format = app.config.ui.date_format.as_str();
    let bookings = filter_bookings(&app.data.bookings, app.booking_filter);
    let title = format!(" Bookings ({}) ", bookings.len());
    let rows = bookings
        .iter()
        .map(|b| {
            let mut detail = format!(
                "{} • {} {} • {}",
                b.package_name,
                format_date(b.date, date_format),
                b.time,
                b.location
            );
            if let Some(notes) = &b.notes {
                let _ = write!(detail, " • {notes}");
            }
            if let Some(hint) = b.reminder_hint() {
                let _ = write!(detail, " • {hint}");
            }
            (format!("{}  [{}]", b.client_name, b.status.label()), detail)
        })
        .collect();

    render_rows(frame, app, chunks[1], &title, rows, "No bookings found");
}

fn render_packages(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app
        .data
        .packages
        .iter()
        .map(|p| {
            let marker = if p.popular { "  ★ Most Popular" } else { "" };
            (
                format!("{}  {}{}", p.name, format_money(p.price), marker),
                format!("{} • {} • {}", p.duration, p.description, p.features.join(", ")),
            )
        })
        .collect();

    render_rows(frame, app, area, " Pricing Packages ", rows, "No packages");
}

fn render_referrals(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    let total = total_referrals(&app.data.clients);
    let program = Text::from(vec![
        Line::from(vec![
            Span::styled("Your referral code: ", Style::default().fg(DIM)),
            Span::styled(
                app.config.studio.referral_code.clone(),
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(referral_pitch(), Style::default().fg(Color::White))),
        Line::from(vec![
            Span::styled("Total referrals: ", Style::default().fg(DIM)),
            Span::styled(total.to_string(), Style::default().fg(SUCCESS)),
        ]),
    ]);
    frame.render_widget(
        Paragraph::new(program)
            .wrap(Wrap { trim: true })
            .block(titled_block(" Referral Program ", false)),
        chunks[0],
    );

    let rows = top_referrers(&app.data.clients)
        .iter()
        .map(|r| {
            let referred: Vec<&str> = referred_by(&app.data.clients, &r.client.id)
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            let mut detail = format!(
                "{} • {} earned",
                pluralize_referrals(r.referrals),
                format_money(r.earned)
            );
            if !referred.is_empty() {
                let _ = write!(detail, " • referred {}", referred.join(", "));
            }
            (format!("#{} {}", r.rank, r.client.name), detail)
        })
        .collect();

    render_rows(frame, app, chunks[1], " Top Referrers ", rows, "No referrals yet");
}

/// Two-line rows with the app's selection highlight
fn render_rows(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    rows: Vec<(String, String)>,
    empty: &str,
) {
    let block = titled_block(title, app.mode == Mode::Normal);

    if rows.is_empty() {
        let placeholder = ListItem::new(Line::from(Span::styled(
            format!("  {empty}"),
            Style::default().fg(DIM),
        )));
        frame.render_widget(List::new(vec![placeholder]).block(block), area);
        return;
    }

    // Two lines per row; keep the selection on screen
    let visible = (block.inner(area).height as usize / 2).max(1);
    let offset = app.selected_index.saturating_sub(visible - 1);
    let total = rows.len();

    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, (headline, detail))| {
            let style = if idx == app.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(headline, style)),
                Line::from(Span::styled(format!("  {detail}"), Style::default().fg(DIM))),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);

    if total > visible {
        let indicator = format!(" {}/{} ", app.selected_index + 1, total);
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(indicator.len() as u16 + 2),
            y: area.y,
            width: indicator.len() as u16 + 2,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(indicator).style(Style::default().fg(DIM)),
            indicator_area,
        );
    }
}

fn render_filter_tabs<'a>(
    frame: &mut Frame,
    area: Rect,
    titles: impl Iterator<Item = &'a str>,
    selected: usize,
) {
    let tabs = Tabs::new(titles.collect::<Vec<_>>())
        .block(titled_block(" Status (f) ", false))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => {
            Span::styled(" SEARCH ", Style::default().bg(Color::Magenta).fg(Color::Black))
        }
        Mode::ClientFilter => {
            Span::styled(" FILTER ", Style::default().bg(SUCCESS).fg(Color::Black))
        }
    };

    let help_text = match app.mode {
        Mode::Normal => "1-6:view  j/k:nav  /:search  f:status  s:filter  q:quit",
        Mode::Search => "Type to search  ↑/↓:nav  Enter:open  Esc:close",
        Mode::ClientFilter => "Type to filter  Enter:done  Esc:clear",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(HIGHLIGHT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Global search popup
fn render_search_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let results = app.overlay.results();
    let query = app.overlay.query();

    let body_rows = if results.is_empty() { 1 } else { results.len() };
    let width = 70.min(area.width.saturating_sub(4));
    let height = (body_rows as u16 + 5).min(area.height.saturating_sub(2));

    let popup_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: 2, // Near top like a command palette
        width,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Magenta)),
            Span::styled(format!("{query}|"), Style::default().fg(Color::White)),
        ])),
        chunks[0],
    );

    if query.trim().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Search clients, galleries, bookings...",
                Style::default().fg(DIM),
            )),
            chunks[1],
        );
        return;
    }

    if results.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("No results found for \"{query}\""),
                Style::default().fg(DIM),
            )),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let style = if idx == app.overlay.selected() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", kind_icon(result.kind)), style),
                Span::styled(result.title.clone(), style),
                Span::styled(format!("  {}", result.subtitle), Style::default().fg(DIM)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), chunks[1]);
}

fn titled_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { ACCENT } else { SECONDARY };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn kind_icon(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Client => "@",
        SearchKind::Gallery => "#",
        SearchKind::Booking => "◷",
    }
}

fn booking_status_style(status: BookingStatus) -> Style {
    let color = match status {
        BookingStatus::Pending => HIGHLIGHT,
        BookingStatus::Confirmed => SUCCESS,
        BookingStatus::Completed => ACCENT,
        BookingStatus::Cancelled => Color::Red,
    };
    Style::default().fg(color)
}

fn gallery_status_style(status: GalleryStatus) -> Style {
    let color = match status {
        GalleryStatus::Editing => HIGHLIGHT,
        GalleryStatus::Ready => SUCCESS,
        GalleryStatus::Delivered => ACCENT,
    };
    Style::default().fg(color)
}

fn status_position<S: PartialEq>(all: &[S], status: S) -> usize {
    all.iter().position(|s| *s == status).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use studio_core::{StudioConfig, StudioData};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(StudioData::builtin().unwrap(), StudioConfig::default())
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = app();
        for view in View::ALL {
            app.switch_view(view);
            let screen = draw(&app);
            assert!(screen.contains(view.label()), "{view} missing its label");
        }
    }

    #[test]
    fn test_overlay_shows_no_results_message() {
        let mut app = app();
        app.open_search();
        for c in "zzz".chars() {
            app.search_insert(c);
        }
        assert!(draw(&app).contains("No results found for \"zzz\""));
    }

    #[test]
    fn test_overlay_lists_hits() {
        let mut app = app();
        app.open_search();
        for c in "sarah".chars() {
            app.search_insert(c);
        }
        assert!(draw(&app).contains("Sarah Mitchell"));
    }
}
