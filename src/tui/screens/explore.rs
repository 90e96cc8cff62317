//! Explore screen: the job map beside the filtered job list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::catalog::GRID_CENTER;
use crate::map::{self, DEFAULT_ZOOM, Marker, Viewport};
use crate::model::Job;
use crate::state::{Action, AppState};
use crate::tui::theme::{self, AMBER, CategoryStyle, LIME};

/// Shown when no job passes the filter.
pub const EMPTY_STATE: &str = "No signal in sector";

/// Cursor over the filtered list, plus whether the search box has focus.
#[derive(Debug, Default)]
pub struct ExploreScreen {
    selected: usize,
    editing: bool,
}

impl ExploreScreen {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep the cursor on a row after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Open the job under the cursor.
    pub fn select(&self, jobs: &[&Job]) -> Option<Action> {
        jobs.get(self.selected)
            .map(|job| Action::SelectJob(job.id.clone()))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, jobs: &[&Job], state: &AppState) {
        let [map_area, list_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);

        self.render_map(frame, map_area, jobs, state);
        self.render_list(frame, list_area, jobs);
    }

    fn render_map(&self, frame: &mut Frame, area: Rect, jobs: &[&Job], state: &AppState) {
        let viewport = state
            .active_trip()
            .map_or(Viewport::new(GRID_CENTER, DEFAULT_ZOOM), Viewport::for_trip);

        let title = match (state.refreshing, state.active_trip()) {
            (true, _) => " SCANNING SECTOR... ".to_string(),
            (false, Some(trip)) => format!(" {} ", trip.destination.to_uppercase()),
            (false, None) => " GRID ".to_string(),
        };
        let block = Block::bordered()
            .title(Span::styled(title, theme::accent()))
            .border_style(theme::muted());

        // Terminal cells are about twice as tall as they are wide.
        let inner = block.inner(area);
        let aspect = if inner.width == 0 {
            1.0
        } else {
            f64::from(inner.height) * 2.0 / f64::from(inner.width)
        };

        let mut markers = map::markers(jobs.iter().copied());
        markers.retain(|m| viewport.contains(m.position, aspect));
        let highlighted = jobs.get(self.selected()).map(|job| job.id.as_str());
        let dimmed = state.refreshing;

        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            .x_bounds(viewport.lng_bounds())
            .y_bounds(viewport.lat_bounds(aspect))
            .paint(move |ctx| {
                let center = viewport.center;
                ctx.print(center.lng, center.lat, Span::styled("+", theme::muted()));

                for marker in &markers {
                    if Some(marker.job_id.as_str()) != highlighted {
                        let span = marker_span(marker, false, dimmed);
                        ctx.print(marker.position.lng, marker.position.lat, span);
                    }
                }

                // Drawn last so it sits on top.
                if let Some(marker) = markers
                    .iter()
                    .find(|m| Some(m.job_id.as_str()) == highlighted)
                {
                    let span = marker_span(marker, true, dimmed);
                    ctx.print(marker.position.lng, marker.position.lat, span);
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, jobs: &[&Job]) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" SIGNALS ({}) ", jobs.len()),
                theme::accent(),
            ))
            .border_style(theme::muted())
            .padding(Padding::horizontal(1));

        if jobs.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(EMPTY_STATE, theme::highlight())),
                Line::from(Span::styled(
                    "Widen the search or change category.",
                    theme::muted(),
                )),
            ])
            .centered()
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = jobs.iter().copied().map(job_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_symbol("› ")
            .highlight_style(theme::highlight());

        let mut list_state = ListState::default().with_selected(Some(self.selected()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

fn job_item(job: &Job) -> ListItem<'static> {
    let style = CategoryStyle::of(job.category);

    let mut headline = vec![
        Span::styled(format!("{} ", job.icon), style.style()),
        Span::styled(job.title.clone(), style.style().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", job.pay_label()), Style::default().fg(LIME)),
    ];
    if job.is_immediate {
        headline.push(Span::styled("  NOW", Style::default().fg(AMBER)));
    }

    let detail = Line::from(Span::styled(
        format!(
            "   {} · {} · {}",
            job.company,
            job.distance_label(),
            job.shift_start()
        ),
        theme::muted(),
    ));

    ListItem::new(vec![Line::from(headline), detail])
}

/// A marker's glyph in its category colour. The cursor's marker is bold
/// and keeps its colour while a rescan dims the rest.
fn marker_span(marker: &Marker, highlighted: bool, dimmed: bool) -> Span<'static> {
    let style = if highlighted {
        CategoryStyle::of(marker.category)
            .style()
            .add_modifier(Modifier::BOLD)
    } else if dimmed {
        theme::muted()
    } else {
        CategoryStyle::of(marker.category).style()
    };
    Span::styled(marker.glyph.clone(), style)
}
