//! Drawing the table, paginator and count overlay with crossterm.

use std::io;
use std::io::Write;

use artic_lib::model::Column;
use artic_lib::table::TableState;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Attribute;
use crossterm::style::Color;
use crossterm::style::Print;
use crossterm::style::ResetColor;
use crossterm::style::SetAttribute;
use crossterm::style::SetForegroundColor;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;
use unicode_width::UnicodeWidthChar;

/// Width of the checkbox column, including its trailing gap.
const CHECKBOX_WIDTH: usize = 4;
/// Width of each date column, including its trailing gap.
const DATE_WIDTH: usize = 11;
/// Rows taken by the title, header, paginator and help lines.
const CHROME_ROWS: u16 = 5;

/// Frontend-only view state that is not part of the table model.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub cursor: usize,
    pub count_buffer: String,
    pub page_link_size: usize,
}

/// Column widths for a terminal `width`. Text columns share what the
/// checkbox and date columns leave over.
pub fn column_widths(width: u16) -> Vec<(Column, usize)> {
    let fixed = CHECKBOX_WIDTH + 2 * DATE_WIDTH;
    let flexible = (width as usize).saturating_sub(fixed);
    let text = (flexible / 4).max(8);

    Column::ALL
        .iter()
        .map(|&column| match column {
            Column::DateStart | Column::DateEnd => (column, DATE_WIDTH),
            _ => (column, text),
        })
        .collect()
}

/// Cuts `text` to at most `width` terminal cells, padding with spaces.
/// Newlines become spaces and an ellipsis marks a cut.
pub fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let mut out = String::new();
    let mut used = 0;
    let total: usize = flat.chars().map(|c| c.width().unwrap_or(0)).sum();

    if total <= width {
        out.push_str(&flat);
        used = total;
    } else {
        for c in flat.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
    }

    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// The paginator line as segments, each flagged whether it is an active
/// control: first, prev, page links, next, last, then the counts.
pub fn paginator_segments(state: &TableState, link_size: usize) -> Vec<(String, bool)> {
    let paginator = state.paginator();
    let back = paginator.can_go_back();
    let forward = paginator.can_go_forward();

    let mut segments = vec![("«".to_string(), back), ("  ‹  ".to_string(), back)];
    for p in paginator.page_links(link_size) {
        if p == state.page() {
            segments.push((format!("[{p}] "), true));
        } else {
            segments.push((format!("{p} "), true));
        }
    }
    segments.push((" ›  ".to_string(), forward));
    segments.push(("»".to_string(), forward));
    segments.push((
        format!(
            "    Page {} of {} · {} records · {} selected",
            state.page(),
            paginator.page_count(),
            state.total_records(),
            state.selected().len()
        ),
        true,
    ));
    segments
}

/// Number of table rows that fit in a terminal of `height`.
pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(CHROME_ROWS) as usize
}

/// Draws one full frame.
pub fn draw(
    out: &mut impl Write,
    state: &TableState,
    view: &ViewState,
    (width, height): (u16, u16),
) -> io::Result<()> {
    let width_cells = width as usize;
    let columns = column_widths(width);

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let status = if state.is_bulk_running() {
        "  selecting…"
    } else if state.is_loading() {
        "  loading…"
    } else {
        ""
    };
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(fit(&format!("Artworks{status}"), width_cells)),
        SetAttribute(Attribute::Reset)
    )?;

    let mut header = fit("[▾]", CHECKBOX_WIDTH);
    for (column, w) in &columns {
        header.push_str(&fit(column.header(), *w));
    }
    queue!(
        out,
        MoveTo(0, 1),
        SetAttribute(Attribute::Underlined),
        Print(fit(&header, width_cells)),
        SetAttribute(Attribute::Reset)
    )?;

    for (i, row) in state.rows().iter().take(visible_rows(height)).enumerate() {
        let checkbox = if state.is_row_selected(i) { "[x]" } else { "[ ]" };
        let mut line = fit(checkbox, CHECKBOX_WIDTH);
        for (column, w) in &columns {
            line.push_str(&fit(&row.cell(*column), *w));
        }

        queue!(out, MoveTo(0, 2 + i as u16))?;
        if i == view.cursor {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(out, Print(fit(&line, width_cells)), SetAttribute(Attribute::Reset))?;
    }

    let footer = height.saturating_sub(3);
    queue!(out, MoveTo(0, footer))?;

    let mut used = 0;
    for (text, active) in paginator_segments(state, view.page_link_size) {
        let w = text.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>();
        let room = width_cells.saturating_sub(used);
        if room == 0 {
            break;
        }
        if !active {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        let shown = if w > room { fit(&text, room) } else { text };
        queue!(out, Print(shown), SetAttribute(Attribute::Reset))?;
        used += w.min(room);
    }

    queue!(
        out,
        MoveTo(0, footer + 1),
        SetForegroundColor(Color::DarkGrey),
        Print(fit(
            "space select · a select page · n select first N · ←/→ page · home/end first/last · q quit",
            width_cells
        )),
        ResetColor
    )?;

    if state.is_overlay_open() {
        draw_overlay(out, view, width)?;
    }

    out.flush()
}

fn draw_overlay(out: &mut impl Write, view: &ViewState, width: u16) -> io::Result<()> {
    let inner = 34;
    let x = 1;
    let field = format!(" Select rows… {}▏", view.count_buffer);
    let lines = [
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{}│", fit(&field, inner)),
        format!("│{}│", fit(" Enter submit · Esc close", inner)),
        format!("└{}┘", "─".repeat(inner)),
    ];

    if (width as usize) < inner + 2 + x as usize {
        return Ok(());
    }
    for (i, line) in lines.iter().enumerate() {
        queue!(
            out,
            MoveTo(x, 2 + i as u16),
            SetForegroundColor(Color::Cyan),
            Print(line),
            ResetColor
        )?;
    }
    Ok(())
}
