//! Scrollable terminal viewer for a rendered document.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use toolhub_markdown_engine::{
    InlineSpan, RenderNode, RenderedBlock, RenderedDocument,
    render::text::{BULLET, CODE_INDENT, QUOTE_BAR},
};

struct App {
    lines: Vec<Line<'static>>,
    scroll: usize,
    page_height: usize,
}

impl App {
    fn new(doc: &RenderedDocument) -> Self {
        Self {
            lines: document_lines(doc),
            scroll: 0,
            page_height: 1,
        }
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    fn scroll_down(&mut self, by: usize) {
        self.scroll = (self.scroll + by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }
}

pub fn run(doc: &RenderedDocument) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(doc);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(app.page_height),
                KeyCode::PageUp => app.scroll_up(app.page_height),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll = app.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows
    app.page_height = usize::from(chunks[0].height.saturating_sub(2)).max(1);

    let content = Paragraph::new(app.lines.clone())
        .block(Block::default().borders(Borders::ALL).title("toolhub-markdown"))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(app.scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Lays the document out as styled terminal lines.
fn document_lines(doc: &RenderedDocument) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for block in &doc.blocks {
        match block {
            RenderedBlock::Code { label, text, .. } => {
                if !label.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("[{label}]"),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                let code = Style::default().fg(Color::Yellow);
                lines.extend(
                    text.split('\n')
                        .map(|l| Line::from(Span::styled(format!("{CODE_INDENT}{l}"), code))),
                );
            }
            RenderedBlock::Paragraph { nodes } => {
                for node in nodes {
                    push_node(&mut lines, node);
                }
            }
        }
    }
    lines
}

fn push_node(lines: &mut Vec<Line<'static>>, node: &RenderNode) {
    match node {
        RenderNode::Heading { level, text } => {
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if *level == 1 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let spans = inline_spans(text)
                .into_iter()
                .map(|s| s.patch_style(style))
                .collect::<Vec<_>>();
            lines.push(Line::from(spans));
        }
        RenderNode::BlockQuote { text } => {
            let mut spans = vec![Span::styled(QUOTE_BAR, dim())];
            spans.extend(inline_spans(text));
            lines.push(Line::from(spans));
        }
        RenderNode::TableRow { cells } => {
            let mut spans = vec![];
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" | ", dim()));
                }
                spans.extend(inline_spans(cell));
            }
            lines.push(Line::from(spans));
        }
        RenderNode::List { items } => {
            for item in items {
                let mut spans = vec![Span::raw(BULLET)];
                spans.extend(inline_spans(item));
                lines.push(Line::from(spans));
            }
        }
        RenderNode::Spacer => lines.push(Line::default()),
        RenderNode::Paragraph { text } => lines.push(Line::from(inline_spans(text))),
    }
}

fn inline_spans(spans: &[InlineSpan]) -> Vec<Span<'static>> {
    let mut out = vec![];
    for span in spans {
        match span {
            InlineSpan::Text(s) => out.push(Span::raw(s.clone())),
            InlineSpan::Bold(s) => out.push(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            InlineSpan::Italic(s) => out.push(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            InlineSpan::Code(s) => {
                out.push(Span::styled(s.clone(), Style::default().fg(Color::Yellow)))
            }
            InlineSpan::Link { label, url } => {
                out.push(Span::styled(
                    label.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                out.push(Span::styled(format!(" ({url})"), dim()));
            }
        }
    }
    out
}
