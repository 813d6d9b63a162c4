use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const BAR_GLYPH: char = '#';

/// Horizontal text bar chart; bars are scaled against the largest value.
#[derive(Debug, Clone)]
pub struct BarChart {
    bars: Vec<(String, Decimal)>,
    width: usize,
}

impl BarChart {
    pub fn new(width: usize) -> Self {
        Self {
            bars: Vec::new(),
            width: width.max(1),
        }
    }

    pub fn add_bar(&mut self, label: impl Into<String>, value: Decimal) {
        self.bars.push((label.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Number of glyphs drawn for `value`. Any positive value gets at least one.
    pub fn bar_length(&self, value: Decimal) -> usize {
        let max = self
            .bars
            .iter()
            .map(|(_, value)| *value)
            .max()
            .unwrap_or(Decimal::ZERO);
        if max <= Decimal::ZERO || value <= Decimal::ZERO {
            return 0;
        }
        let scaled = (value / max * Decimal::from(self.width)).round();
        scaled.to_usize().unwrap_or(self.width).clamp(1, self.width)
    }

    /// Renders one line per bar: label, bar, then the caption produced by
    /// `caption` for the value.
    pub fn render<F>(&self, caption: F) -> String
    where
        F: Fn(Decimal) -> String,
    {
        let label_width = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        self.bars
            .iter()
            .map(|(label, value)| {
                let bar: String = std::iter::repeat(BAR_GLYPH)
                    .take(self.bar_length(*value))
                    .collect();
                format!(
                    "{:<label_width$} | {:<bar_width$} {}",
                    label,
                    bar,
                    caption(*value),
                    label_width = label_width,
                    bar_width = self.width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
