use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use tracing::{debug, info};

use crate::domain::model::{BootSequence, MatrixRain, Profile, ProfileCard, Splitter};
use crate::infrastructure::tui::input::{InputHandler, InputMode, KeyOutcome, ScrollRequest};
use crate::infrastructure::tui::widgets::layout::{self, LayoutAreas};
use crate::infrastructure::tui::widgets::terminal_view::{self, ViewportMetrics};
use crate::infrastructure::tui::widgets::{boot_view, card_view, matrix_view, status_bar};
use crate::interface_adapter::controller::tui_controller::{AppAction, TuiController};
use crate::shared::error::AppError;

/// How long to wait for input before advancing the animations again.
const POLL_INTERVAL: Duration = Duration::from_millis(16);
/// Lines moved per mouse wheel notch.
const WHEEL_LINES: usize = 3;

/// Startup switches decided by the CLI.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub show_boot: bool,
    pub rain_seed: u32,
}

/// Visual effects owned by the event loop, one controller object each.
struct Effects {
    boot: BootSequence,
    rain: MatrixRain,
    splitter: Splitter,
    card: ProfileCard,
}

impl Effects {
    fn new(profile: &Profile, options: RunOptions) -> Self {
        let boot_lines = if options.show_boot {
            profile.boot_lines.clone()
        } else {
            Vec::new()
        };
        Self {
            boot: BootSequence::new(boot_lines),
            rain: MatrixRain::new(options.rain_seed),
            splitter: Splitter::new(),
            card: ProfileCard::new(),
        }
    }
}

/// Main TUI event loop.
///
/// Initializes crossterm raw mode + alternate screen + mouse capture, runs
/// the advance -> draw -> poll loop, and restores the terminal on exit.
pub fn run(mut controller: TuiController, profile: &Profile, options: RunOptions) -> anyhow::Result<()> {
    // === Initialization ===
    enable_raw_mode().map_err(AppError::Tui)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)
        .map_err(AppError::Tui)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut effects = Effects::new(profile, options);
    let mode = if effects.boot.is_finished() {
        InputMode::Prompt
    } else {
        InputMode::Booting
    };
    let mut input_handler = InputHandler::new(mode);
    info!(boot = mode == InputMode::Booting, "starting TUI");

    // === Main loop ===
    let result = main_loop(
        &mut terminal,
        &mut controller,
        profile,
        &mut input_handler,
        &mut effects,
    );

    // === Cleanup (always runs) ===
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = terminal.show_cursor();
    info!("TUI stopped");

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut TuiController,
    profile: &Profile,
    input_handler: &mut InputHandler,
    effects: &mut Effects,
) -> anyhow::Result<()> {
    let mut should_quit = false;
    let mut metrics = ViewportMetrics::default();
    let mut last_tick = Instant::now();

    while !should_quit {
        // 1. Advance every timed effect by the wall-clock time since the last pass
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;

        effects.boot.advance(elapsed);
        if effects.boot.is_finished() && input_handler.mode() == InputMode::Booting {
            input_handler.set_mode(InputMode::Prompt);
            info!("boot sequence finished");
        }
        effects.rain.advance(elapsed);
        controller.dispatch(AppAction::Advance(elapsed));

        // 2. Layout from the current terminal size
        let full: Rect = terminal.size()?.into();
        let areas = layout::compute_layout(full, effects.splitter.visual_width(full.width));
        effects.rain.resize(areas.visual.width, areas.visual.height);

        // 3. Draw
        terminal.draw(|frame| {
            if !effects.boot.is_finished() {
                boot_view::render(frame, frame.area(), &effects.boot);
                return;
            }
            status_bar::render(
                frame,
                areas.status_bar,
                &profile.title,
                &Local::now().naive_local(),
            );
            matrix_view::render(frame, areas.visual, &effects.rain);
            if let Some(card_area) = card_view::card_area(areas.visual, profile) {
                card_view::render(frame, card_area, profile, &effects.card);
            }
            render_splitter(frame, areas.splitter, effects.splitter.is_dragging());
            metrics = terminal_view::render(
                frame,
                areas.terminal,
                controller.usecase(),
                &profile.nav,
                &terminal_title(controller),
            );
        })?;

        // 4. Poll for events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(outcome) = input_handler.handle_key(key) {
                        should_quit = handle_outcome(outcome, controller, effects, metrics);
                    }
                }
                Event::Mouse(mouse) if effects.boot.is_finished() => {
                    handle_mouse(mouse, controller, profile, effects, &areas, metrics);
                }
                Event::Paste(text) => {
                    for action in input_handler.paste_chars(&text) {
                        controller.dispatch(action);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Panel title: `user@host: ~`, plus the queue length while commands wait.
fn terminal_title(controller: &TuiController) -> String {
    let session = controller.usecase();
    let prompt = session.prompt();
    match session.pending() {
        0 => format!("{}{}: ~", prompt.user, prompt.host),
        n => format!("{}{}: ~ ({n} queued)", prompt.user, prompt.host),
    }
}

fn render_splitter(frame: &mut Frame, area: Rect, dragging: bool) {
    let color = if dragging { Color::Cyan } else { Color::DarkGray };
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        if let Some(cell) = buf.cell_mut(Position::new(area.x, y)) {
            cell.set_char('┃').set_style(Style::default().fg(color));
        }
    }
}

/// Apply a translated key. Returns `true` when the app should quit.
fn handle_outcome(
    outcome: KeyOutcome,
    controller: &mut TuiController,
    effects: &mut Effects,
    metrics: ViewportMetrics,
) -> bool {
    match outcome {
        KeyOutcome::Action(AppAction::Quit) => return true,
        KeyOutcome::Action(AppAction::SkipBoot) => {
            effects.boot.skip();
            info!("boot sequence skipped");
        }
        KeyOutcome::Action(AppAction::FlipCard) => {
            effects.card.flip();
            debug!(flipped = effects.card.is_flipped(), "card flipped");
        }
        KeyOutcome::Action(action) => controller.dispatch(action),
        KeyOutcome::Scroll(request) => controller.dispatch(scroll_action(request, metrics)),
    }
    false
}

/// Resolve a viewport-relative scroll request against the last drawn viewport.
fn scroll_action(request: ScrollRequest, metrics: ViewportMetrics) -> AppAction {
    match request {
        ScrollRequest::LineUp => AppAction::ScrollUp {
            lines: 1,
            max: metrics.max_scroll,
        },
        ScrollRequest::LineDown => AppAction::ScrollDown(1),
        ScrollRequest::PageUp => AppAction::ScrollUp {
            lines: metrics.page,
            max: metrics.max_scroll,
        },
        ScrollRequest::PageDown => AppAction::ScrollDown(metrics.page),
    }
}

fn handle_mouse(
    mouse: MouseEvent,
    controller: &mut TuiController,
    profile: &Profile,
    effects: &mut Effects,
    areas: &LayoutAreas,
    metrics: ViewportMetrics,
) {
    let (x, y) = (mouse.column, mouse.row);
    let pos = Position::new(x, y);
    let card_area = card_view::card_area(areas.visual, profile);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.hits_splitter(x, y) {
                effects.splitter.press(x, areas.splitter.x);
            } else if let Some(index) = terminal_view::nav_item_at(areas.terminal, &profile.nav, x, y) {
                let command = profile.nav[index].command.clone();
                debug!(%command, "nav shortcut clicked");
                controller.dispatch(AppAction::RunCommand(command));
            } else if card_area.is_some_and(|r| r.contains(pos)) {
                effects.card.flip();
                debug!(flipped = effects.card.is_flipped(), "card flipped");
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let body_width = areas.status_bar.width;
            effects.splitter.drag_to(x, areas.visual.x, body_width);
        }
        MouseEventKind::Up(MouseButton::Left) => effects.splitter.release(),
        MouseEventKind::Moved => match card_area {
            Some(r) if r.contains(pos) => {
                effects.card.pointer_move(x - r.x, y - r.y, r.width, r.height);
            }
            _ => effects.card.pointer_leave(),
        },
        MouseEventKind::ScrollUp if areas.terminal.contains(pos) => {
            controller.dispatch(AppAction::ScrollUp {
                lines: WHEEL_LINES,
                max: metrics.max_scroll,
            });
        }
        MouseEventKind::ScrollDown if areas.terminal.contains(pos) => {
            controller.dispatch(AppAction::ScrollDown(WHEEL_LINES));
        }
        _ => {}
    }
}
