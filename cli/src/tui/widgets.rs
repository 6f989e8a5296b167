// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};
use spinform_core::{DatePicker, NumericSegment, TimeColumn, TimePicker};

const CALENDAR_WIDTH: u16 = 22; // 7 columns of 2 + 6 gaps + 2 borders
const CLOCK_WIDTH: u16 = 13;
const CLOCK_ROWS: usize = 5;

/// The segments joined by the separator; empty ones show their placeholder token.
pub fn segments_line(
    segments: &[NumericSegment],
    separator: char,
    focused: Option<usize>,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(segments.len() * 2);
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(separator.to_string()).dark_gray());
        }

        let span = Span::raw(segment.display_text());
        let span = match segment.value() {
            Some(_) => span,
            None => span.dark_gray(),
        };
        spans.push(match focused == Some(i) {
            true => span.reversed(),
            false => span,
        });
    }
    Line::from(spans)
}

/// The column at which the segment at `index` starts.
pub fn segment_offset(segments: &[NumericSegment], index: usize) -> u16 {
    let width: usize = segments
        .iter()
        .take(index)
        .map(|s| s.kind().width() + 1)
        .sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Draws the month of the focused date as a popup right below `anchor`.
pub fn render_calendar(picker: &DatePicker, anchor: Rect, buf: &mut Buffer) {
    let grid = picker.grid();
    let focused = picker.focused();

    let mut lines = vec![Line::from(grid.week_start.labels().join(" ")).dark_gray()];
    for week in &grid.weeks {
        let mut spans = Vec::with_capacity(13);
        for (i, cell) in week.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(match cell {
                Some(d) if *d == focused => Span::raw(format!("{:>2}", d.day())).reversed(),
                Some(d) => Span::raw(format!("{:>2}", d.day())),
                None => Span::raw("  "),
            });
        }
        lines.push(Line::from(spans));
    }

    let title = Line::from(focused.strftime(" %B %Y ").to_string()).centered();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    render_popup(lines, title, anchor, CALENDAR_WIDTH, height, buf);
}

/// Draws the hour and minute lists around the selection as a popup right below `anchor`.
pub fn render_clock(picker: &TimePicker, anchor: Rect, buf: &mut Buffer) {
    let (hour, minute) = picker.selection();
    let hours: Vec<u32> = picker.hours().collect();
    let minutes: Vec<u32> = picker.minutes().collect();
    let hours = window(&hours, hour, CLOCK_ROWS);
    let minutes = window(&minutes, minute, CLOCK_ROWS);

    let cell = |v: Option<&u32>, selected: u32, focused: bool| match v {
        Some(v) if *v == selected && focused => Span::raw(format!("{v:02}")).reversed(),
        Some(v) if *v == selected => Span::raw(format!("{v:02}")).bold(),
        Some(v) => Span::raw(format!("{v:02}")),
        None => Span::raw("  "),
    };

    let lines: Vec<Line> = (0..CLOCK_ROWS)
        .map(|row| {
            Line::from(vec![
                Span::raw("  "),
                cell(hours.get(row), hour, picker.column() == TimeColumn::Hour),
                Span::raw(" : ").dark_gray(),
                cell(minutes.get(row), minute, picker.column() == TimeColumn::Minute),
            ])
        })
        .collect();

    let title = Line::from(" Time ").centered();
    let height = u16::try_from(CLOCK_ROWS + 2).unwrap_or(u16::MAX);
    render_popup(lines, title, anchor, CLOCK_WIDTH, height, buf);
}

fn render_popup(
    lines: Vec<Line<'static>>,
    title: Line<'static>,
    anchor: Rect,
    width: u16,
    height: u16,
    buf: &mut Buffer,
) {
    let area = Rect::new(anchor.x, anchor.y.saturating_add(1), width, height).intersection(buf.area);
    if area.is_empty() {
        return;
    }

    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .title(title)
        .blue();
    Clear.render(area, buf);
    Paragraph::new(lines).block(block).white().render(area, buf);
}

/// At most `size` entries of `values`, keeping `selected` near the middle.
fn window(values: &[u32], selected: u32, size: usize) -> &[u32] {
    let index = values.iter().position(|v| *v == selected).unwrap_or(0);
    let start = index
        .saturating_sub(size / 2)
        .min(values.len().saturating_sub(size));
    let end = (start + size).min(values.len());
    &values[start..end]
}

#[cfg(test)]
mod tests {
    use spinform_core::{OverlayManager, SegmentKind, WeekStart};

    use super::*;

    #[test]
    fn window_keeps_selection_centered() {
        let values: Vec<u32> = (0..24).collect();
        assert_eq!(window(&values, 0, 5), [0, 1, 2, 3, 4]);
        assert_eq!(window(&values, 10, 5), [8, 9, 10, 11, 12]);
        assert_eq!(window(&values, 23, 5), [19, 20, 21, 22, 23]);
        assert_eq!(window(&[0, 30], 30, 5), [0, 30]);
    }

    #[test]
    fn segment_offsets_include_separators() {
        let segments = [
            NumericSegment::new(SegmentKind::Month),
            NumericSegment::new(SegmentKind::Day),
            NumericSegment::new(SegmentKind::Year),
        ];
        assert_eq!(segment_offset(&segments, 0), 0);
        assert_eq!(segment_offset(&segments, 1), 3);
        assert_eq!(segment_offset(&segments, 2), 6);
    }

    #[test]
    fn segments_line_shows_placeholders() {
        let mut segments = [
            NumericSegment::new(SegmentKind::Hour),
            NumericSegment::new(SegmentKind::Minute),
        ];
        segments[0].set_value(Some(9));
        let line = segments_line(&segments, ':', Some(1));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "09:mm");
    }

    #[test]
    fn calendar_popup_shows_focused_month() {
        let mut overlays = OverlayManager::new();
        let mut picker = DatePicker::new(&mut overlays, WeekStart::Sunday, (1, 9999));
        picker.open(&mut overlays, jiff::civil::date(2023, 12, 25));

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 12));
        render_calendar(&picker, Rect::new(0, 0, 10, 1), &mut buf);
        let row = |y: u16| -> String {
            (0..CALENDAR_WIDTH)
                .map(|x| buf[(x, y)].symbol().to_owned())
                .collect()
        };
        assert!(row(1).contains("December 2023"));
        assert!(row(2).contains("Su Mo Tu We Th Fr Sa"));
        assert!(row(3).contains(" 1  2"));
    }
}
