//! Connect screen: contact list and one open conversation.
//!
//! Sent messages are echoed locally and live only as long as the
//! conversation stays open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph, Wrap};
use uuid::Uuid;

use crate::model::{Conversation, Message, Presence};
use crate::tui::theme::{self, CYAN, LIME, MAGENTA};

pub const PLACEHOLDER: &str = "The city is full of opportunities and people ready to build \
    together. Choose a node on the left to start a conversation.";

/// Sender id on locally written messages.
const LOCAL_SENDER: &str = "me";

#[derive(Debug, Default)]
pub struct ConnectScreen {
    selected: usize,
    open: Option<usize>,
    input: String,
    sent: Vec<Message>,
}

impl ConnectScreen {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the open conversation.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Keys go to the input buffer while a conversation is open.
    pub fn is_typing(&self) -> bool {
        self.open.is_some()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn sent(&self) -> &[Message] {
        &self.sent
    }

    /// The cursor stays on the open conversation until it is closed.
    pub fn move_up(&mut self) {
        if !self.is_typing() && self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self, count: usize) {
        if !self.is_typing() && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    /// Open the conversation under the cursor.
    pub fn open(&mut self, count: usize) {
        if self.selected < count {
            self.open = Some(self.selected);
        }
    }

    /// Close the conversation, dropping the draft and everything sent.
    pub fn close(&mut self) {
        self.open = None;
        self.input.clear();
        self.sent.clear();
    }

    pub fn on_char(&mut self, c: char) {
        if self.is_typing() {
            self.input.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Echo the draft into the open conversation. Blank drafts are ignored.
    pub fn send(&mut self) {
        let text = self.input.trim();
        if !self.is_typing() || text.is_empty() {
            return;
        }
        let message = Message {
            id: Uuid::new_v4().to_string(),
            sender_id: LOCAL_SENDER.to_string(),
            text: text.to_string(),
            timestamp: jiff::Zoned::now().strftime("%I:%M %p").to_string(),
            is_me: true,
        };
        tracing::debug!(id = %message.id, "echoed local message");
        self.sent.push(message);
        self.input.clear();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, conversations: &[Conversation]) {
        let [list_area, thread_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(area);

        self.render_contacts(frame, list_area, conversations);

        match self.open_index().and_then(|i| conversations.get(i)) {
            Some(conversation) => self.render_thread(frame, thread_area, conversation),
            None => {
                let placeholder = Paragraph::new(Span::styled(PLACEHOLDER, theme::muted()))
                    .wrap(Wrap { trim: true })
                    .centered()
                    .block(
                        Block::bordered()
                            .border_style(theme::muted())
                            .padding(Padding::new(2, 2, 2, 0)),
                    );
                frame.render_widget(placeholder, thread_area);
            }
        }
    }

    fn render_contacts(&self, frame: &mut Frame, area: Rect, conversations: &[Conversation]) {
        let items: Vec<ListItem> = conversations
            .iter()
            .map(|c| {
                let dot = match c.status {
                    Presence::Online => Span::styled("● ", Style::default().fg(LIME)),
                    Presence::Offline => Span::styled("○ ", theme::muted()),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        dot,
                        Span::styled(format!("{} ", c.avatar), theme::normal()),
                        Span::styled(c.name.clone(), theme::highlight()),
                    ]),
                    Line::from(Span::styled(format!("   {}", c.role), theme::muted())),
                    Line::from(Span::styled(format!("   {}", c.last_message), theme::muted())),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(Span::styled(" NODES ", theme::accent()))
                    .border_style(theme::muted()),
            )
            .highlight_symbol("› ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.selected()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_thread(&self, frame: &mut Frame, area: Rect, conversation: &Conversation) {
        let [messages_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let lines: Vec<Line> = conversation
            .messages
            .iter()
            .chain(self.sent())
            .flat_map(message_lines)
            .collect();

        // Keep the newest messages in view.
        let visible = usize::from(messages_area.height.saturating_sub(2));
        let scroll = u16::try_from(lines.len().saturating_sub(visible)).unwrap_or(u16::MAX);

        let title = format!(" {} · {} ", conversation.name, conversation.role);
        let thread = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::bordered()
                    .title(Span::styled(title, theme::accent()))
                    .border_style(theme::muted())
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(thread, messages_area);

        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(CYAN)),
            Span::styled(self.input().to_string(), theme::highlight()),
            Span::styled("█", theme::muted()),
        ]))
        .block(
            Block::bordered()
                .title_bottom(Span::styled(" ⏎ send  esc back ", theme::muted()))
                .border_style(theme::muted()),
        );
        frame.render_widget(input, input_area);
    }
}

fn message_lines(message: &Message) -> [Line<'static>; 2] {
    let (who, color) = if message.is_me {
        ("YOU", MAGENTA)
    } else {
        ("THEM", CYAN)
    };
    [
        Line::from(vec![
            Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", message.timestamp), theme::muted()),
        ]),
        Line::from(Span::styled(message.text.clone(), theme::normal())),
    ]
}
