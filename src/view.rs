//! Dashboard view: render model and ratatui widget.
//!
//! Layout (ready state):
//! ┌ header: title │ district │ clock │ system badge ──────────────────────┐
//! ├─ Dispositivos por Unidade ──────┬─ Média de Tráfego (Tempo Real) ─────┤
//! │ horizontal bars per site        │ Braille line over T-10 .. T-1       │
//! ├─ Gestores Responsáveis ─────────┴─────────────────────────────────────┤
//! │ site │ status │ manager │ contact link                                │
//! └───────────────────────────────────────────────────────────────────────┘
//!
//! [`DashboardView::from_state`] is a pure function of [`DashboardState`] and
//! drawing reads nothing else, so one state always produces one buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Cell, Chart, Dataset, GraphType, Paragraph,
    Row, Table, Widget,
};

use crate::aggregator::average_traffic;
use crate::generator::TRAFFIC_MAX;
use crate::models::{SiteState, SiteStatus, TrafficPoint};
use crate::poller::DashboardState;

pub const TITLE: &str = "MONITORING WIFI";
pub const DISTRICT: &str = "CDE 1 a 7";
pub const SYSTEM_BADGE: &str = "● Sistema Ativo";
pub const LOADING_TEXT: &str = "Iniciando NOC...";
pub const BAR_CHART_TITLE: &str = "Dispositivos por Unidade";
pub const LINE_CHART_TITLE: &str = "Média de Tráfego (Tempo Real)";
pub const TABLE_TITLE: &str = "Gestores Responsáveis";

const ACCENT: Color = Color::LightCyan;
const MUTED: Color = Color::Gray;

/// Outbound contact link for a manager's phone. The number is not validated.
pub fn contact_url(phone: &str) -> String {
    format!("https://wa.me/55{}", phone)
}

pub fn status_icon(state: SiteState) -> &'static str {
    match state {
        SiteState::Online => "✓",
        SiteState::Offline => "✗",
    }
}

fn status_style(state: SiteState) -> Style {
    match state {
        SiteState::Online => Style::default().fg(Color::Green),
        SiteState::Offline => Style::default().fg(Color::Red),
    }
}

/// One bar of the per-site device chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBar {
    pub name: String,
    pub total: i64,
}

/// One row of the manager contact table, keyed by site id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: u32,
    pub name: String,
    pub status: SiteState,
    pub manager: String,
    pub contact_url: String,
}

impl From<&SiteStatus> for ContactRow {
    fn from(site: &SiteStatus) -> Self {
        Self {
            id: site.id,
            name: site.name.clone(),
            status: site.status,
            manager: site.manager.clone(),
            contact_url: contact_url(&site.phone),
        }
    }
}

/// Everything drawn once a snapshot is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFrame {
    pub clock: String,
    pub bars: Vec<SiteBar>,
    pub line: Vec<TrafficPoint>,
    pub rows: Vec<ContactRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// No snapshot received yet; only the loading indicator is shown.
    Loading,
    Ready(DashboardFrame),
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let Some(snapshot) = state.snapshot.as_deref() else {
            return DashboardView::Loading;
        };
        DashboardView::Ready(DashboardFrame {
            clock: state.clock.clone(),
            bars: snapshot
                .iter()
                .map(|s| SiteBar {
                    name: s.name.clone(),
                    total: s.total,
                })
                .collect(),
            line: average_traffic(snapshot),
            rows: snapshot.iter().map(ContactRow::from).collect(),
        })
    }
}

impl Widget for &DashboardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            DashboardView::Loading => render_loading(area, buf),
            DashboardView::Ready(frame) => frame.render(area, buf),
        }
    }
}

fn render_loading(area: Rect, buf: &mut Buffer) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    Paragraph::new(Span::styled(
        LOADING_TEXT,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .centered()
    .render(middle, buf);
}

fn panel(title: &str) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
}

impl DashboardFrame {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        // table: one line per site plus borders and header
        let table_height = u16::try_from(self.rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(3);
        let [header, charts, table] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(table_height),
        ])
        .areas(area);
        let [bar_area, line_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(charts);

        self.render_header(header, buf);
        self.render_bar_chart(bar_area, buf);
        self.render_line_chart(line_area, buf);
        self.render_table(table, buf);
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        Line::from(vec![
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(DISTRICT, Style::default().fg(ACCENT)),
            Span::raw("   "),
            Span::styled(self.clock.as_str(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled(SYSTEM_BADGE, Style::default().fg(Color::Green)),
        ])
        .render(area, buf);
    }

    fn render_bar_chart(&self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .bars
            .iter()
            .map(|b| {
                Bar::default()
                    .label(Line::from(b.name.clone()))
                    .value(u64::try_from(b.total).unwrap_or(0))
                    .text_value(b.total.to_string())
            })
            .collect();

        BarChart::default()
            .block(panel(BAR_CHART_TITLE))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .bar_style(Style::default().fg(ACCENT))
            .value_style(Style::default().fg(Color::Black).bg(ACCENT))
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }

    fn render_line_chart(&self, area: Rect, buf: &mut Buffer) {
        let points: Vec<(f64, f64)> = self
            .line
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, f64::from(p.value)))
            .collect();
        let x_max = points.len().saturating_sub(1).max(1) as f64;
        let x_labels: Vec<String> = match (self.line.first(), self.line.last()) {
            (Some(first), Some(last)) => vec![first.label.clone(), last.label.clone()],
            _ => Vec::new(),
        };
        let y_max = f64::from(TRAFFIC_MAX);
        let y_labels = vec![
            "0".to_string(),
            (TRAFFIC_MAX / 2).to_string(),
            TRAFFIC_MAX.to_string(),
        ];

        let dataset = Dataset::default()
            .name("Média")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT))
            .data(&points);

        Chart::new(vec![dataset])
            .block(panel(LINE_CHART_TITLE))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(MUTED))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(MUTED))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            )
            .render(area, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("Escola").style(header_style),
            Cell::from("Status").style(header_style),
            Cell::from("Gestor").style(header_style),
            Cell::from("Contato").style(header_style),
        ]);
        let rows = self.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.name.clone()),
                Cell::from(format!("{} {}", status_icon(row.status), row.status.as_str()))
                    .style(status_style(row.status)),
                Cell::from(row.manager.clone()).style(Style::default().fg(MUTED)),
                Cell::from(row.contact_url.clone()),
            ])
        });
        let widths = [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(30),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(panel(TABLE_TITLE))
            .render(area, buf);
    }
}
