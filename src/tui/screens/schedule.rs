//! Schedule screen: availability toggles, trips, and the mission log.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::catalog::MISSION_LOG;
use crate::model::{Availability, AvailabilityFlag, Trip};
use crate::state::{Action, AppState};
use crate::tui::theme::{self, AMBER, LIME};

/// A cursor over the four availability flags followed by the trips.
#[derive(Debug, Default)]
pub struct ScheduleScreen {
    selected: usize,
}

impl ScheduleScreen {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self, trip_count: usize) {
        if self.selected + 1 < AvailabilityFlag::ALL.len() + trip_count {
            self.selected += 1;
        }
    }

    /// Toggle the flag or activate the trip under the cursor.
    pub fn select(&self, trips: &[Trip]) -> Option<Action> {
        match AvailabilityFlag::ALL.get(self.selected) {
            Some(flag) => Some(Action::ToggleAvailability(*flag)),
            None => trips
                .get(self.selected - AvailabilityFlag::ALL.len())
                .map(|trip| Action::ActivateTrip(trip.id.clone())),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let mut lines = vec![section("AVAILABILITY")];
        lines.extend(self.availability_lines(&state.availability));
        lines.push(Line::from(""));
        lines.push(section("TRIPS"));
        lines.extend(self.trip_lines(&state.trips));

        let planner = Paragraph::new(lines).block(
            Block::bordered()
                .title(Span::styled(" PLANNER ", theme::accent()))
                .border_style(theme::muted())
                .padding(Padding::new(1, 1, 1, 0)),
        );
        frame.render_widget(planner, left);

        let log = Paragraph::new(mission_lines()).block(
            Block::bordered()
                .title(Span::styled(" MISSION LOG ", theme::accent()))
                .border_style(theme::muted())
                .padding(Padding::new(1, 1, 1, 0)),
        );
        frame.render_widget(log, right);
    }

    fn row_style(&self, row: usize) -> (&'static str, Style) {
        if row == self.selected() {
            ("› ", theme::highlight())
        } else {
            ("  ", theme::normal())
        }
    }

    fn availability_lines(&self, availability: &Availability) -> Vec<Line<'static>> {
        AvailabilityFlag::ALL
            .iter()
            .enumerate()
            .map(|(row, flag)| {
                let (pointer, style) = self.row_style(row);
                let (mark, mark_style) = if availability.get(*flag) {
                    ("[■] ", Style::default().fg(LIME))
                } else {
                    ("[ ] ", theme::muted())
                };
                Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(mark, mark_style),
                    Span::styled(flag.label(), style),
                ])
            })
            .collect()
    }

    fn trip_lines(&self, trips: &[Trip]) -> Vec<Line<'static>> {
        trips
            .iter()
            .enumerate()
            .map(|(i, trip)| {
                let (pointer, style) = self.row_style(AvailabilityFlag::ALL.len() + i);
                let mut spans = vec![
                    Span::styled(pointer, style),
                    Span::styled(trip.destination.clone(), style),
                    Span::styled(
                        format!("  {} - {}", trip.start_date, trip.end_date),
                        theme::muted(),
                    ),
                ];
                if trip.is_active {
                    spans.push(Span::styled("  ACTIVE", theme::accent()));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, theme::muted()))
}

fn mission_lines() -> Vec<Line<'static>> {
    MISSION_LOG
        .iter()
        .flat_map(|entry| {
            let (status, status_style) = if entry.confirmed {
                ("CONFIRMED", Style::default().fg(LIME))
            } else {
                ("PENDING", Style::default().fg(AMBER))
            };
            [
                Line::from(vec![
                    Span::styled(entry.title, theme::highlight()),
                    Span::styled(format!("  {status}"), status_style),
                ]),
                Line::from(Span::styled(entry.when, theme::muted())),
                Line::from(""),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::seed_trips;
    use crate::state::{Tab, reduce};

    #[test]
    fn first_rows_toggle_availability() {
        let trips = seed_trips();
        let mut screen = ScheduleScreen::default();
        assert!(matches!(
            screen.select(&trips),
            Some(Action::ToggleAvailability(AvailabilityFlag::Morning))
        ));
        for _ in 0..3 {
            screen.move_down(trips.len());
        }
        assert!(matches!(
            screen.select(&trips),
            Some(Action::ToggleAvailability(AvailabilityFlag::Immediate))
        ));
    }

    #[test]
    fn rows_after_flags_activate_trips() {
        let trips = seed_trips();
        let mut screen = ScheduleScreen::default();
        for _ in 0..10 {
            screen.move_down(trips.len());
        }
        assert_eq!(screen.selected(), 5);
        match screen.select(&trips) {
            Some(Action::ActivateTrip(id)) => assert_eq!(id, "t2"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn activating_from_schedule_returns_to_explore() {
        let trips = seed_trips();
        let mut screen = ScheduleScreen::default();
        for _ in 0..5 {
            screen.move_down(trips.len());
        }
        let (state, _) = reduce(AppState::default(), Action::SwitchTab(Tab::Schedule));
        let (state, _) = reduce(state, screen.select(&trips).unwrap());
        assert_eq!(state.tab, Tab::Explore);
        assert_eq!(state.active_trip().map(|t| t.id.as_str()), Some("t2"));
    }

    #[test]
    fn without_trips_cursor_stops_at_flags() {
        let mut screen = ScheduleScreen::default();
        for _ in 0..10 {
            screen.move_down(0);
        }
        assert_eq!(screen.selected(), 3);
        assert!(screen.select(&[]).is_some());
    }

    #[test]
    fn mission_log_lists_every_entry() {
        let text: String = mission_lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Cyber-Barista Shift"));
        assert!(text.contains("CONFIRMED"));
        assert!(text.contains("Security Sentinel Interview"));
        assert!(text.contains("PENDING"));
    }
}
