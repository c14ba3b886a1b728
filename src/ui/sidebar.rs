use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::nav::{BadgeKind, Highlight, NavIcon, NavRow, NodeRow};
use crate::theme::Palette;

use super::layout::{rect_inner, scroll_offset};

pub fn icon_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Gauge => "◔",
        NavIcon::BarChart => "▥",
        NavIcon::Users => "☺",
        NavIcon::Cart => "⊞",
        NavIcon::Bitcoin => "₿",
        NavIcon::AppWindow => "▣",
        NavIcon::Image => "▨",
        NavIcon::Briefcase => "◫",
        NavIcon::Newspaper => "≡",
        NavIcon::Grid => "▦",
        NavIcon::Lock => "⊡",
        NavIcon::Files => "❐",
        NavIcon::Rocket => "➚",
        NavIcon::Component => "◈",
        NavIcon::Cube => "◧",
        NavIcon::Brick => "▤",
        NavIcon::Clipboard => "☰",
    }
}

fn row_style(row: &NodeRow, palette: &Palette) -> Style {
    match row.highlight {
        Highlight::Leaf => palette.nav_leaf_active,
        Highlight::Section => palette.nav_section_active,
        Highlight::None => palette.sidebar,
    }
}

fn node_line<'a>(row: &'a NodeRow, palette: &Palette) -> Line<'a> {
    let indent = "  ".repeat(row.depth);
    let marker = match (row.is_parent, row.expanded) {
        (true, true) => "▾ ",
        (true, false) => "▸ ",
        (false, _) if row.depth > 0 => "· ",
        (false, _) => "  ",
    };
    let mut spans = vec![
        Span::raw(indent),
        Span::raw(marker),
        Span::raw(format!("{} ", icon_glyph(row.icon))),
        Span::raw(row.label.as_str()),
    ];
    if let Some(badge) = row.badge.as_ref() {
        let style = match badge.kind {
            BadgeKind::New => palette.badge_new,
            BadgeKind::Hot => palette.badge_hot,
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", badge.text), style));
    }
    Line::from(spans)
}

pub fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let rows = app.sidebar.rows(app.location());
    let cursor = app.sidebar.cursor_index(&rows);
    let inner = rect_inner(area);
    let offset = scroll_offset(cursor.unwrap_or(0), usize::from(inner.height));

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, row)| {
            let (line, style) = match row {
                NavRow::Heading(label) => (
                    Line::from(Span::raw(label.as_str())),
                    palette.sidebar_heading,
                ),
                NavRow::Node(node) => (node_line(node, &palette), row_style(node, &palette)),
            };
            let style = if app.focus == Focus::Sidebar && Some(idx) == cursor {
                style.patch(palette.nav_cursor)
            } else {
                style
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let border_style = if app.focus == Focus::Sidebar {
        palette.border_focused
    } else {
        palette.border
    };
    let list = List::new(items).style(palette.sidebar).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", app.brand),
                palette.brand.add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}
