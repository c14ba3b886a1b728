//! Single-line sparkline for signed monthly values

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One cell per value, scaled against the largest magnitude. Values below
/// zero use the negative style.
pub struct MiniSparkline<'a> {
    data: &'a [i64],
    positive_style: Style,
    negative_style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [i64]) -> Self {
        Self {
            data,
            positive_style: Style::default(),
            negative_style: Style::default(),
        }
    }

    pub fn positive_style(mut self, style: Style) -> Self {
        self.positive_style = style;
        self
    }

    pub fn negative_style(mut self, style: Style) -> Self {
        self.negative_style = style;
        self
    }
}

/// Bar height index for `value` against `max`, in `0..=7`.
pub fn bar_level(value: i64, max: u64) -> usize {
    let max = max.max(1);
    let scaled = (value.unsigned_abs() as f64 / max as f64 * 7.0).round() as usize;
    scaled.min(7)
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }

        let max = self
            .data
            .iter()
            .map(|value| value.unsigned_abs())
            .max()
            .unwrap_or(1);

        // Most recent values win when the area is narrower than the data
        let visible = self.data.len().min(area.width as usize);
        let start = self.data.len() - visible;

        for (i, &value) in self.data[start..].iter().enumerate() {
            let x = area.x + i as u16;
            let style = if value < 0 {
                self.negative_style
            } else {
                self.positive_style
            };
            buf.get_mut(x, area.y)
                .set_char(BAR_CHARS[bar_level(value, max)])
                .set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_level_scales_by_magnitude() {
        assert_eq!(bar_level(0, 100), 0);
        assert_eq!(bar_level(100, 100), 7);
        assert_eq!(bar_level(-100, 100), 7);
        assert_eq!(bar_level(50, 100), 4);
        assert_eq!(bar_level(5, 0), 7);
    }

    #[test]
    fn test_render_keeps_latest_values() {
        let data = [1, 2, 3, -8];
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(&data).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), "▄");
        assert_eq!(buf.get(1, 0).symbol(), "█");
    }
}
