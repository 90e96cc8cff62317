//! Application loop and screen routing.

use std::io;
use std::mem;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Tabs};
use ratatui::{DefaultTerminal, Frame};

use crate::catalog::Catalog;
use crate::effects::EffectRunner;
use crate::filter::FilterCache;
use crate::model::{CategoryFilter, Job};
use crate::state::{Action, AppState, Tab, reduce};
use crate::summary::{Summarizer, TextGenerator};

use super::screens::{ConnectScreen, ExploreScreen, ScheduleScreen, detail};
use super::theme::{self, AMBER, CategoryStyle};

/// How long to wait for a key before checking for background results.
const TICK: Duration = Duration::from_millis(100);

/// Runs the TUI event loop until the user quits.
pub fn run<G: TextGenerator + 'static>(
    catalog: Catalog,
    summarizer: Summarizer<G>,
) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(catalog, summarizer).event_loop(&mut terminal);
    ratatui::restore();
    result
}

struct App<G> {
    catalog: Arc<Catalog>,
    state: AppState,
    cache: FilterCache,
    explore: ExploreScreen,
    schedule: ScheduleScreen,
    connect: ConnectScreen,
    runner: EffectRunner<G>,
    rx: Receiver<Action>,
}

impl<G: TextGenerator + 'static> App<G> {
    fn new(catalog: Catalog, summarizer: Summarizer<G>) -> Self {
        let catalog = Arc::new(catalog);
        let (tx, rx) = mpsc::channel();
        Self {
            runner: EffectRunner::new(Arc::clone(&catalog), summarizer, tx),
            catalog,
            state: AppState::default(),
            cache: FilterCache::new(),
            explore: ExploreScreen::default(),
            schedule: ScheduleScreen::default(),
            connect: ConnectScreen::default(),
            rx,
        }
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            let jobs = self.cache.jobs(&self.catalog.jobs, &self.state.filter());
            self.explore.clamp(jobs.len());
            terminal.draw(|frame| self.render(frame, &jobs))?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.on_key(key) == Flow::Quit
            {
                return Ok(());
            }

            while let Ok(action) = self.rx.try_recv() {
                self.dispatch(action);
            }
        }
    }

    /// Run `action` through the reducer and start whatever it asks for.
    fn dispatch(&mut self, action: Action) {
        let leaving = self.state.tab;
        let (state, effect) = reduce(mem::take(&mut self.state), action);
        self.state = state;

        if self.state.tab != leaving {
            self.leave(leaving);
        }
        if let Some(effect) = effect {
            self.runner.run(effect);
        }
    }

    /// Drop the per-visit state of a tab being left.
    fn leave(&mut self, tab: Tab) {
        match tab {
            Tab::Explore => self.explore.stop_editing(),
            Tab::Schedule => {}
            Tab::Connect => self.connect.close(),
        }
    }

    fn visible_jobs(&mut self) -> Vec<&Job> {
        self.cache.jobs(&self.catalog.jobs, &self.state.filter())
    }

    fn on_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        // The overlay captures input until dismissed.
        if self.state.selected_job_id().is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.dispatch(Action::ClearSelection),
                KeyCode::Char('q') => return Flow::Quit,
                _ => {}
            }
            return Flow::Continue;
        }

        if self.state.tab == Tab::Explore && self.explore.is_editing() {
            match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.dispatch(Action::SetSearch(String::new()));
                }
                KeyCode::Char(c) => self.dispatch(Action::PushSearchChar(c)),
                KeyCode::Backspace => self.dispatch(Action::PopSearchChar),
                KeyCode::Enter | KeyCode::Esc => self.explore.stop_editing(),
                code => return self.on_navigation_key(code),
            }
            return Flow::Continue;
        }

        if self.state.tab == Tab::Connect && self.connect.is_typing() {
            match key.code {
                KeyCode::Char(c) => self.connect.on_char(c),
                KeyCode::Backspace => self.connect.on_backspace(),
                KeyCode::Enter => self.connect.send(),
                KeyCode::Esc => self.connect.close(),
                code => return self.on_navigation_key(code),
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Char('1') => self.switch_to(Tab::Explore),
            KeyCode::Char('2') => self.switch_to(Tab::Schedule),
            KeyCode::Char('3') => self.switch_to(Tab::Connect),
            code => self.on_navigation_key(code),
        }
    }

    fn switch_to(&mut self, tab: Tab) -> Flow {
        self.dispatch(Action::SwitchTab(tab));
        Flow::Continue
    }

    /// Keys that never produce text: tab cycling and per-screen movement.
    fn on_navigation_key(&mut self, code: KeyCode) -> Flow {
        if code == KeyCode::Tab {
            return self.switch_to(self.state.tab.next());
        }
        match self.state.tab {
            Tab::Explore => self.on_explore_key(code),
            Tab::Schedule => self.on_schedule_key(code),
            Tab::Connect => self.on_connect_key(code),
        }
        Flow::Continue
    }

    fn on_explore_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('/') => self.explore.start_editing(),
            KeyCode::Char('c') => self.dispatch(Action::CycleCategory),
            KeyCode::Char('a') => self.dispatch(Action::SetCategory(CategoryFilter::All)),
            KeyCode::Char('r') => self.dispatch(Action::RefreshStarted),
            KeyCode::Up | KeyCode::Char('k') => self.explore.move_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.visible_jobs().len();
                self.explore.move_down(len);
            }
            KeyCode::Enter => {
                let jobs = self.cache.jobs(&self.catalog.jobs, &self.state.filter());
                if let Some(action) = self.explore.select(&jobs) {
                    self.dispatch(action);
                }
            }
            _ => {}
        }
    }

    fn on_schedule_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.schedule.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.schedule.move_down(self.state.trips.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(action) = self.schedule.select(&self.state.trips) {
                    self.dispatch(action);
                }
            }
            _ => {}
        }
    }

    fn on_connect_key(&mut self, code: KeyCode) {
        let count = self.catalog.conversations.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.connect.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.connect.move_down(count),
            KeyCode::Enter => self.connect.open(count),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, jobs: &[&Job]) {
        let [header, tabs, body, help] = Layout::vertical([
            Constraint::Length(3), // title and filters
            Constraint::Length(1), // tabs
            Constraint::Min(0),    // screen
            Constraint::Length(1), // help
        ])
        .areas(frame.area());

        self.render_header(frame, header);

        let selected = Tab::ALL
            .iter()
            .position(|t| *t == self.state.tab)
            .unwrap_or(0);
        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{} {}", i + 1, t.label()));
        frame.render_widget(
            Tabs::new(titles)
                .select(selected)
                .style(theme::muted())
                .highlight_style(theme::accent())
                .padding(" ", " "),
            tabs,
        );

        match self.state.tab {
            Tab::Explore => self.explore.render(frame, body, jobs, &self.state),
            Tab::Schedule => self.schedule.render(frame, body, &self.state),
            Tab::Connect => self
                .connect
                .render(frame, body, &self.catalog.conversations),
        }

        if let Some(overlay) = &self.state.overlay {
            detail::render(frame, body, self.catalog.job(&overlay.job_id), overlay);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.help_text(), theme::muted()))),
            help,
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let search_style = if self.explore.is_editing() {
            theme::highlight()
        } else {
            theme::normal()
        };
        let cursor = if self.explore.is_editing() { "█" } else { "" };

        let category = match self.state.category {
            CategoryFilter::All => Span::styled("ALL", theme::normal()),
            CategoryFilter::Only(c) => {
                let style = CategoryStyle::of(c);
                Span::styled(style.label, style.style())
            }
        };

        let mut spans = vec![
            Span::styled("GRIDWORK", theme::accent()),
            Span::styled("   / ", theme::muted()),
            Span::styled(format!("{}{cursor}", self.state.search), search_style),
            Span::styled("   category ", theme::muted()),
            category,
        ];
        if self.state.availability.immediate {
            spans.push(Span::styled("   ASAP ONLY", Style::default().fg(AMBER)));
        }
        if let Some(trip) = self.state.active_trip() {
            spans.push(Span::styled(
                format!("   @ {}", trip.destination),
                theme::muted(),
            ));
        }

        let title = Paragraph::new(Line::from(spans))
            .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, area);
    }

    fn help_text(&self) -> &'static str {
        if self.state.overlay.is_some() {
            return " esc/⏎ close  q quit";
        }
        match self.state.tab {
            Tab::Explore if self.explore.is_editing() => " type to search  ^u clear  ⏎/esc done",
            Tab::Explore => {
                " / search  c category  a all  r rescan  ↑↓ navigate  ⏎ intel  tab switch  q quit"
            }
            Tab::Schedule => " ↑↓ navigate  ⏎/space toggle or activate  tab switch  q quit",
            Tab::Connect if self.connect.is_typing() => " type a message  ⏎ send  esc back",
            Tab::Connect => " ↑↓ navigate  ⏎ open  tab switch  q quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}
