use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem,
    Paragraph, Row, Table,
};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::modules::dashboard::data::{
    balance_totals, format_currency, DealStatus, ForecastKind, StatCard, Trend,
};
use crate::modules::dashboard::{Dashboard, DashboardPanel};
use crate::theme::Palette;

use super::layout::{dashboard_areas, rect_inner, scroll_offset, task_list_area};
use super::widgets::sparkline::MiniSparkline;

pub fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let areas = dashboard_areas(area);
    let dashboard = &app.dashboard;
    let focused = (app.focus == Focus::Content).then_some(dashboard.active_panel);

    draw_title(f, areas.title, app, &palette);
    draw_stats(f, areas.stats, &dashboard.data.stats, &palette);
    draw_forecast(f, areas.forecast, dashboard, focused, &palette);
    draw_deal_type(f, areas.deal_type, dashboard, focused, &palette);
    draw_balance(f, areas.balance, dashboard, focused, &palette);
    draw_deals(f, areas.deals, dashboard, focused, &palette);
    draw_tasks(f, areas.tasks, dashboard, focused, &palette);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Span::styled(app.page_title().to_uppercase(), palette.title));
    let crumbs = Paragraph::new(Span::styled(app.breadcrumb().join(" > "), palette.text_muted))
        .alignment(Alignment::Right);
    f.render_widget(title, chunks[0]);
    f.render_widget(crumbs, chunks[1]);
}

/// Card border with the panel title and its dropdown value.
fn panel_block<'a>(
    panel: DashboardPanel,
    select: Option<&'a str>,
    focused: Option<DashboardPanel>,
    palette: &Palette,
) -> Block<'a> {
    let border_style = if focused == Some(panel) {
        palette.border_focused
    } else {
        palette.border
    };
    let mut title = vec![Span::styled(format!(" {} ", panel.title()), palette.title)];
    if let Some(label) = select {
        title.push(Span::styled(format!("[{label}] "), palette.text_muted));
    }
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(title))
}

fn draw_stats(f: &mut Frame, area: Rect, stats: &[StatCard], palette: &Palette) {
    if stats.is_empty() {
        return;
    }
    let count = u32::try_from(stats.len()).unwrap_or(u32::MAX);
    let constraints: Vec<Constraint> = stats.iter().map(|_| Constraint::Ratio(1, count)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in stats.iter().zip(chunks.iter()) {
        let (arrow, trend_style) = match card.trend {
            Trend::Positive => ("▲", palette.positive),
            Trend::Negative => ("▼", palette.negative),
        };
        let lines = vec![
            Line::from(Span::styled(card.title.to_uppercase(), palette.text_muted)),
            Line::from(vec![
                Span::styled(card.value, palette.title),
                Span::raw(" "),
                Span::styled(arrow, trend_style),
            ]),
        ];
        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).border_style(palette.border));
        f.render_widget(widget, *chunk);
    }
}

fn draw_forecast(
    f: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    focused: Option<DashboardPanel>,
    palette: &Palette,
) {
    let bars: Vec<Bar> = dashboard
        .data
        .forecast
        .iter()
        .map(|bar| {
            let color = match bar.kind {
                ForecastKind::Goal => palette.series_primary,
                ForecastKind::Pending => palette.series_secondary,
                ForecastKind::Revenue => palette.series_tertiary,
            };
            Bar::default()
                .label(Line::from(bar.name))
                .value(bar.value)
                .text_value(format_currency(bar.value))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel_block(
            DashboardPanel::Forecast,
            Some(dashboard.forecast_period.label()),
            focused,
            palette,
        ))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn draw_deal_type(
    f: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    focused: Option<DashboardPanel>,
    palette: &Palette,
) {
    let mut chart = BarChart::default()
        .block(panel_block(
            DashboardPanel::DealType,
            Some(dashboard.deal_type_period.label()),
            focused,
            palette,
        ))
        .bar_width(1)
        .bar_gap(0)
        .group_gap(2);

    for year in &dashboard.data.deal_types {
        let bars = [
            Bar::default()
                .value(year.pending)
                .text_value(String::new())
                .style(Style::default().fg(palette.series_secondary)),
            Bar::default()
                .value(year.loss)
                .text_value(String::new())
                .style(palette.negative),
            Bar::default()
                .value(year.won)
                .text_value(String::new())
                .style(palette.positive),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(year.year))
                .bars(&bars),
        );
    }
    f.render_widget(chart, area);
}

fn draw_balance(
    f: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    focused: Option<DashboardPanel>,
    palette: &Palette,
) {
    let block = panel_block(
        DashboardPanel::Balance,
        Some(dashboard.balance_period.label()),
        focused,
        palette,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    let months = &dashboard.data.balance;
    let totals = balance_totals(months);
    let summary = Line::from(vec![
        Span::styled("Revenue ", palette.text_muted),
        Span::styled(format_currency(totals.revenue), palette.positive),
        Span::styled("  Expenses ", palette.text_muted),
        Span::styled(format_currency(totals.expenses), palette.negative),
        Span::styled("  Profit Ratio ", palette.text_muted),
        Span::styled(format!("{:.1}%", totals.profit_ratio), palette.title),
    ]);
    f.render_widget(Paragraph::new(summary), chunks[0]);

    let profit: Vec<i64> = months
        .iter()
        .map(|m| m.revenue as i64 - m.expenses as i64)
        .collect();
    f.render_widget(
        MiniSparkline::new(&profit)
            .positive_style(palette.positive)
            .negative_style(palette.negative),
        chunks[1],
    );

    let revenue: Vec<(f64, f64)> = months
        .iter()
        .enumerate()
        .map(|(idx, m)| (idx as f64, m.revenue as f64))
        .collect();
    let expenses: Vec<(f64, f64)> = months
        .iter()
        .enumerate()
        .map(|(idx, m)| (idx as f64, m.expenses as f64))
        .collect();
    let y_max = months
        .iter()
        .map(|m| m.revenue.max(m.expenses))
        .max()
        .unwrap_or(1) as f64;
    let x_max = months.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = [months.first(), months.get(months.len() / 2), months.last()]
        .into_iter()
        .flatten()
        .map(|m| Span::styled(m.month, palette.text_muted))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Revenue")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(palette.positive)
            .data(&revenue),
        Dataset::default()
            .name("Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(palette.negative)
            .data(&expenses),
    ];
    let chart = Chart::new(datasets)
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("$0", palette.text_muted),
                    Span::styled(format_currency(y_max as u64), palette.text_muted),
                ]),
        );
    f.render_widget(chart, chunks[2]);
}

fn status_style(status: DealStatus, palette: &Palette) -> Style {
    match status {
        DealStatus::Won => palette.positive,
        DealStatus::Stuck => palette.negative,
        DealStatus::Negotiation => palette.warning,
        DealStatus::IntroCall | DealStatus::NewLead => palette.info,
    }
}

fn draw_deals(
    f: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    focused: Option<DashboardPanel>,
    palette: &Palette,
) {
    let header = Row::new(vec![
        "Name",
        "Last Contacted",
        "Sales Representative",
        "Status",
        "Deal Value",
    ])
    .style(palette.text_muted.add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = dashboard
        .data
        .deals
        .iter()
        .map(|deal| {
            Row::new(vec![
                Line::from(deal.name),
                Line::from(deal.last_contacted_label()),
                Line::from(vec![
                    Span::styled(format!("{} ", deal.representative.initials), palette.info),
                    Span::raw(deal.representative.name),
                ]),
                Line::from(Span::styled(
                    deal.status.label(),
                    status_style(deal.status, palette),
                )),
                Line::from(deal.value),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(18),
        Constraint::Percentage(28),
        Constraint::Percentage(16),
        Constraint::Percentage(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(
            DashboardPanel::Deals,
            Some(dashboard.deals_range.label()),
            focused,
            palette,
        ))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn draw_tasks(
    f: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    focused: Option<DashboardPanel>,
    palette: &Palette,
) {
    let block = panel_block(DashboardPanel::Tasks, None, focused, palette);
    f.render_widget(block, area);
    let inner = rect_inner(area);
    if inner.height == 0 {
        return;
    }

    let tasks = &dashboard.tasks;
    let summary = Rect { height: 1, ..inner };
    f.render_widget(
        Paragraph::new(Span::styled(tasks.remaining_label(), palette.text_muted)),
        summary,
    );

    let list_area = task_list_area(area);
    let offset = scroll_offset(tasks.selected, usize::from(list_area.height));
    let panel_focused = focused == Some(DashboardPanel::Tasks);
    let items: Vec<ListItem> = tasks
        .tasks()
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, task)| {
            let (check, style) = if task.completed {
                ("[x]", palette.text_muted.add_modifier(Modifier::CROSSED_OUT))
            } else {
                ("[ ]", Style::default())
            };
            let line = Line::from(vec![
                Span::raw(format!("{check} ")),
                Span::styled(task.description.as_str(), style),
                Span::styled(format!("  {}", task.due_label()), palette.text_muted),
            ]);
            let item = ListItem::new(line);
            if panel_focused && idx == tasks.selected {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();
    f.render_widget(List::new(items), list_area);
}
