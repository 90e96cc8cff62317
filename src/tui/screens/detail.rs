//! Job detail overlay, drawn over whichever screen opened it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::model::Job;
use crate::state::{Overlay, SummaryStatus};
use crate::tui::theme::{self, AMBER, CategoryStyle, LIME, MAGENTA};

/// `High Energy` renders as `#HIGHENERGY`.
pub fn tag_label(tag: &str) -> String {
    let compact: String = tag.split_whitespace().collect();
    format!("#{}", compact.to_uppercase())
}

pub fn render(frame: &mut Frame, area: Rect, job: Option<&Job>, overlay: &Overlay) {
    let popup = popup_area(area);

    let accent = job.map_or(theme::accent(), |j| {
        CategoryStyle::of(j.category).style()
    });
    let block = Block::bordered()
        .title(Span::styled(" INTEL ", accent.add_modifier(Modifier::BOLD)))
        .title_bottom(Span::styled(" esc/⏎ close ", theme::muted()))
        .border_style(accent)
        .padding(Padding::new(2, 2, 1, 0));

    let lines = match job {
        Some(job) => detail_lines(job, overlay),
        None => vec![Line::from(Span::styled(
            format!("Job {} is no longer on the grid.", overlay.job_id),
            theme::muted(),
        ))],
    };

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn popup_area(area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn detail_lines(job: &Job, overlay: &Overlay) -> Vec<Line<'static>> {
    let style = CategoryStyle::of(job.category);
    let label = |text: &'static str| Span::styled(text, theme::muted());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", job.icon), style.style()),
            Span::styled(
                job.title.clone(),
                style.style().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(job.company.clone(), theme::normal()),
            Span::styled("  ·  ", theme::muted()),
            Span::styled(style.label, style.style()),
        ]),
        Line::from(""),
        Line::from(vec![
            label("PAY      "),
            Span::styled(job.pay_label(), Style::default().fg(LIME)),
            label("   SPOTS "),
            Span::styled(job.spots.to_string(), theme::normal()),
        ]),
        Line::from(vec![
            label("SHIFT    "),
            Span::styled(job.shift.clone(), theme::normal()),
        ]),
        Line::from(vec![
            label("NODE     "),
            Span::styled(
                format!("{} ({})", job.address, job.distance_label()),
                theme::normal(),
            ),
        ]),
        Line::from(vec![
            label("COMMS    "),
            Span::styled(job.contact_number.clone(), theme::normal()),
        ]),
    ];

    if job.is_immediate {
        lines.push(Line::from(Span::styled(
            "IMMEDIATE START",
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(job.description.clone(), theme::normal())));
    lines.push(Line::from(
        job.tags
            .iter()
            .map(|t| Span::styled(format!("{} ", tag_label(t)), Style::default().fg(MAGENTA)))
            .collect::<Vec<_>>(),
    ));

    lines.push(Line::from(""));
    let summary_style = match overlay.summary {
        SummaryStatus::Pending => theme::muted().add_modifier(Modifier::ITALIC),
        SummaryStatus::Ready(_) | SummaryStatus::Degraded { .. } => theme::accent(),
    };
    lines.push(Line::from(vec![
        label("AI BRIEF "),
        Span::styled(overlay.summary.display_text().to_string(), summary_style),
    ]));

    lines
}
