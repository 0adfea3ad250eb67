use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::UnicodeWidthChar;

use crate::domain::model::{Entry, NavItem};
use crate::domain::primitive::PromptIdentity;
use crate::infrastructure::tui::widgets::layout::text_width;
use crate::usecase::session_usecase::SessionUsecase;

const USER_STYLE: Style = Style::new().fg(Color::Rgb(74, 246, 38)).add_modifier(Modifier::BOLD);
const HOST_STYLE: Style = Style::new().fg(Color::Cyan);
const SYMBOL_STYLE: Style = Style::new().fg(Color::White);
const OUTPUT_STYLE: Style = Style::new().fg(Color::Gray);

/// Sizes the runner needs to turn scroll requests into line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportMetrics {
    pub max_scroll: usize,
    pub page: usize,
}

/// The rows of content a viewport `height` lines tall shows when scrolled
/// `offset` lines up from the bottom.
struct Window {
    lines: Vec<Line<'static>>,
    /// Index of the first shown line.
    top: usize,
    max_scroll: usize,
    offset: usize,
}

fn visible_window(lines: Vec<Line<'static>>, height: usize, offset: usize) -> Window {
    let max_scroll = lines.len().saturating_sub(height);
    let offset = offset.min(max_scroll);
    let top = max_scroll - offset;
    let lines = lines.into_iter().skip(top).take(height).collect();
    Window {
        lines,
        top,
        max_scroll,
        offset,
    }
}

/// Split a string into chunks no wider than `width` display columns.
/// An empty string yields one empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    lines.push(current);
    lines
}

/// Prompt-decorated line(s): `user@host:~$ text`, wrapped to `width`.
fn prompt_lines(identity: &PromptIdentity, text: &str, width: usize) -> Vec<Line<'static>> {
    let prefix = format!("{identity} ");
    let full = format!("{prefix}{text}");
    let mut chunks = wrap(&full, width).into_iter();
    let mut lines = Vec::new();

    if let Some(first) = chunks.next() {
        if let Some(rest) = first.strip_prefix(&prefix) {
            lines.push(Line::from(vec![
                Span::styled(identity.user.clone(), USER_STYLE),
                Span::styled(identity.host.clone(), HOST_STYLE),
                Span::styled(identity.symbol.clone(), SYMBOL_STYLE),
                Span::raw(" "),
                Span::styled(rest.to_string(), Style::default().fg(Color::White)),
            ]));
        } else {
            lines.push(Line::styled(first, USER_STYLE));
        }
    }
    lines.extend(chunks.map(|c| Line::styled(c, Style::default().fg(Color::White))));
    lines
}

/// Every visible line of the scrollback followed by the live input line.
pub fn content_lines(session: &SessionUsecase, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in session.entries() {
        match entry {
            Entry::Prompt(text) => lines.extend(prompt_lines(session.prompt(), text, width)),
            Entry::Output(reveal) => {
                for line in reveal.lines() {
                    lines.extend(wrap(line, width).into_iter().map(|c| Line::styled(c, OUTPUT_STYLE)));
                }
            }
        }
    }
    lines.extend(prompt_lines(session.prompt(), session.input(), width));
    lines
}

/// Rects of the nav shortcuts laid out left to right as `[label]`.
/// Items that do not fit on the row are left out.
pub fn nav_item_rects(area: Rect, items: &[NavItem]) -> Vec<Rect> {
    let mut rects = Vec::new();
    let mut x = area.x;
    let right = area.right();
    for item in items {
        let width = text_width(&item.label).saturating_add(2);
        if x.saturating_add(width) > right {
            break;
        }
        rects.push(Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width).saturating_add(1);
    }
    rects
}

/// Index of the nav item under `(x, y)`, if any.
pub fn nav_item_at(panel: Rect, items: &[NavItem], x: u16, y: u16) -> Option<usize> {
    let (nav_area, _) = split_panel(panel, !items.is_empty());
    let nav_area = nav_area?;
    nav_item_rects(nav_area, items)
        .iter()
        .position(|r| r.contains(Position::new(x, y)))
}

/// Inner panel split into the optional nav row and the scrollback area.
fn split_panel(panel: Rect, has_nav: bool) -> (Option<Rect>, Rect) {
    let inner = panel_block("").inner(panel);
    if !has_nav {
        return (None, inner);
    }
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).split(inner);
    (Some(rows[0]), rows[2])
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &SessionUsecase,
    nav: &[NavItem],
    title: &str,
) -> ViewportMetrics {
    let block_title = format!(" {title} ");
    let block = panel_block(&block_title);
    frame.render_widget(block, area);

    let (nav_area, content_area) = split_panel(area, !nav.is_empty());

    if let Some(nav_area) = nav_area {
        for (rect, item) in nav_item_rects(nav_area, nav).into_iter().zip(nav) {
            let label = Line::from(vec![
                Span::styled("[", Style::default().fg(Color::DarkGray)),
                Span::styled(item.label.clone(), Style::default().fg(Color::Cyan)),
                Span::styled("]", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(label), rect);
        }
    }

    let width = content_area.width as usize;
    let visible = content_area.height as usize;
    let window = visible_window(content_lines(session, width), visible, session.scroll_offset());
    let shown = window.lines.len();
    let max_scroll = window.max_scroll;

    frame.render_widget(Paragraph::new(window.lines), content_area);

    if max_scroll > 0 {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(window.top);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            content_area,
            &mut scrollbar_state,
        );
    }

    // Cursor sits after the input text, only while the input line is on screen.
    if window.offset == 0 && visible > 0 {
        let prompt_text = format!("{} {}", session.prompt(), session.input());
        let last = wrap(&prompt_text, width).pop().unwrap_or_default();
        let row = shown.saturating_sub(1) as u16;
        let col = text_width(&last).min(content_area.width.saturating_sub(1));
        frame.set_cursor_position((content_area.x + col, content_area.y + row));
    }

    ViewportMetrics {
        max_scroll,
        page: visible.saturating_sub(1).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::domain::model::{Command, Profile};

    fn make_session() -> SessionUsecase {
        let profile = Profile {
            title: "t".to_string(),
            prompt: PromptIdentity::new("rohit", "@portfolio", ":~$"),
            boot_lines: Vec::new(),
            commands: vec![Command::new("about", &["line one", "line two"])],
            nav: Vec::new(),
            card_front: Vec::new(),
            card_back: Vec::new(),
        };
        SessionUsecase::new(&profile)
    }

    fn make_nav() -> Vec<NavItem> {
        vec![NavItem::new("about", "about"), NavItem::new("help", "help")]
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16, width: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // =========================================================================
    // Tests: wrap
    // =========================================================================

    #[test]
    fn wrap_short_text_is_single_line() {
        assert_eq!(wrap("abc", 10), vec!["abc"]);
    }

    #[test]
    fn wrap_splits_at_width() {
        assert_eq!(wrap("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn wrap_empty_text_keeps_blank_line() {
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn wrap_counts_wide_chars_as_two_columns() {
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }

    // =========================================================================
    // Tests: content_lines
    // =========================================================================

    #[test]
    fn content_lines_for_empty_session_is_only_input_line() {
        let session = make_session();
        let lines = content_lines(&session, 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "rohit@portfolio:~$ ");
    }

    #[test]
    fn content_lines_render_newlines_as_separate_lines() {
        let mut session = make_session();
        session.submit("about");
        session.finish_all();

        let lines = content_lines(&session, 80);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec![
                "rohit@portfolio:~$ about",
                "line one",
                "line two",
                "rohit@portfolio:~$ ",
            ]
        );
    }

    #[test]
    fn prompt_line_decorates_user_host_and_symbol() {
        let identity = PromptIdentity::new("rohit", "@portfolio", ":~$");
        let lines = prompt_lines(&identity, "help", 80);
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "rohit");
        assert_eq!(spans[0].style, USER_STYLE);
        assert_eq!(spans[1].content, "@portfolio");
        assert_eq!(spans[2].content, ":~$");
        assert_eq!(spans[4].content, "help");
    }

    #[test]
    fn prompt_line_wraps_long_text() {
        let identity = PromptIdentity::new("u", "@h", "$");
        let lines = prompt_lines(&identity, "abcdefgh", 6);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["u@h$ a", "bcdefg", "h"]);
    }

    // =========================================================================
    // Tests: visible_window
    // =========================================================================

    fn numbered_lines(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(i.to_string())).collect()
    }

    #[test]
    fn visible_window_follows_bottom() {
        let window = visible_window(numbered_lines(10), 4, 0);
        let texts: Vec<String> = window.lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["6", "7", "8", "9"]);
        assert_eq!(window.top, 6);
        assert_eq!(window.max_scroll, 6);
    }

    #[test]
    fn visible_window_clamps_offset() {
        let window = visible_window(numbered_lines(10), 4, 50);
        assert_eq!(window.offset, 6);
        assert_eq!(window.top, 0);
        assert_eq!(line_text(&window.lines[0]), "0");
    }

    #[test]
    fn visible_window_short_content_fits() {
        let window = visible_window(numbered_lines(2), 4, 3);
        assert_eq!(window.lines.len(), 2);
        assert_eq!(window.max_scroll, 0);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn visible_window_reaches_lines_past_u16_range() {
        let window = visible_window(numbered_lines(70_000), 3, 0);
        let texts: Vec<String> = window.lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["69997", "69998", "69999"]);
        assert_eq!(window.top, 69_997);
    }

    // =========================================================================
    // Tests: nav
    // =========================================================================

    #[test]
    fn nav_item_rects_are_bracketed_widths() {
        let rects = nav_item_rects(Rect::new(2, 1, 40, 1), &make_nav());
        assert_eq!(rects, vec![Rect::new(2, 1, 7, 1), Rect::new(10, 1, 6, 1)]);
    }

    #[test]
    fn nav_item_rects_drop_items_that_do_not_fit() {
        let rects = nav_item_rects(Rect::new(0, 0, 10, 1), &make_nav());
        assert_eq!(rects.len(), 1);
    }

    #[test]
    fn nav_item_at_hits_item_inside_panel_border() {
        let panel = Rect::new(0, 0, 40, 20);
        let nav = make_nav();
        // Inner area starts at (1, 1).
        assert_eq!(nav_item_at(panel, &nav, 1, 1), Some(0));
        assert_eq!(nav_item_at(panel, &nav, 9, 1), Some(1));
        assert_eq!(nav_item_at(panel, &nav, 8, 1), None);
        assert_eq!(nav_item_at(panel, &nav, 1, 2), None);
    }

    #[test]
    fn nav_item_rects_use_display_width_for_wide_labels() {
        let nav = vec![NavItem::new("日本", "about"), NavItem::new("help", "help")];
        let rects = nav_item_rects(Rect::new(0, 0, 40, 1), &nav);
        assert_eq!(rects, vec![Rect::new(0, 0, 6, 1), Rect::new(7, 0, 6, 1)]);
    }

    #[test]
    fn nav_item_rects_skip_oversized_label() {
        let nav = vec![NavItem::new("x".repeat(70_000), "about")];
        assert!(nav_item_rects(Rect::new(0, 0, 40, 1), &nav).is_empty());
    }

    #[test]
    fn nav_item_at_without_items_is_none() {
        assert_eq!(nav_item_at(Rect::new(0, 0, 40, 20), &[], 1, 1), None);
    }

    // =========================================================================
    // Tests: render
    // =========================================================================

    #[test]
    fn render_shows_nav_title_and_prompt() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let session = make_session();
        let nav = make_nav();

        terminal
            .draw(|frame| {
                render(frame, Rect::new(0, 0, 40, 10), &session, &nav, "terminal");
            })
            .unwrap();

        assert!(row_text(&terminal, 0, 40).contains("terminal"));
        assert!(row_text(&terminal, 1, 40).contains("[about] [help]"));
        assert!(row_text(&terminal, 3, 40).contains("rohit@portfolio:~$"));
    }

    #[test]
    fn render_follows_bottom_when_content_overflows() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut session = make_session();
        for _ in 0..3 {
            session.submit("about");
            session.finish_all();
        }

        let mut metrics = ViewportMetrics::default();
        terminal
            .draw(|frame| {
                metrics = render(frame, Rect::new(0, 0, 40, 6), &session, &[], "t");
            })
            .unwrap();

        // 10 content lines in a 4-line viewport.
        assert_eq!(metrics.max_scroll, 6);
        assert_eq!(metrics.page, 3);
        assert!(row_text(&terminal, 4, 40).contains("rohit@portfolio:~$"));
        assert!(row_text(&terminal, 3, 40).contains("line two"));
    }

    #[test]
    fn render_respects_scroll_offset() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut session = make_session();
        for _ in 0..3 {
            session.submit("about");
            session.finish_all();
        }
        session.scroll_up(6, 6);

        terminal
            .draw(|frame| {
                render(frame, Rect::new(0, 0, 40, 6), &session, &[], "t");
            })
            .unwrap();

        assert!(row_text(&terminal, 1, 40).contains("rohit@portfolio:~$ about"));
        assert!(row_text(&terminal, 2, 40).contains("line one"));
    }
}
