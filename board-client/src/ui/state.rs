use crate::common::{AboutUsContent, MessageDocument};

pub const ABOUT_US_ERROR: &str = "Failed to fetch About Us data";
pub const MESSAGES_ERROR: &str = "Failed to fetch messages";
pub const SAVE_ERROR: &str = "Failed to save message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Messages,
    AboutUs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutUsState {
    Loading,
    Failed(String),
    Loaded(AboutUsContent),
}

/// A mounted "About Us" view. Only answers carrying its ticket may update it.
#[derive(Debug, Clone)]
pub struct AboutUsView {
    pub ticket: u64,
    pub state: AboutUsState,
}

/// A mounted message list.
#[derive(Debug, Clone)]
pub struct MessagesView {
    pub ticket: u64,
    pub loading: bool,
    pub messages: Vec<MessageDocument>,
    pub error: Option<String>,
}

/// UI-local state.
pub struct AppState {
    pub page: Page,
    pub about_us: Option<AboutUsView>,
    pub messages: Option<MessagesView>,
    pub name_input: String,
    pub input_text: String,
    next_ticket: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Messages,
            about_us: None,
            messages: None,
            name_input: String::new(),
            input_text: String::new(),
            next_ticket: 1,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    /// Switch pages, unmounting the old view. Returns the ticket of the
    /// freshly mounted view, or `None` if the page did not change.
    pub fn navigate(&mut self, page: Page) -> Option<u64> {
        if self.page == page && self.is_mounted(page) {
            return None;
        }
        self.about_us = None;
        self.messages = None;
        self.page = page;
        Some(match page {
            Page::Messages => self.mount_messages(),
            Page::AboutUs => self.mount_about_us(),
        })
    }

    fn is_mounted(&self, page: Page) -> bool {
        match page {
            Page::Messages => self.messages.is_some(),
            Page::AboutUs => self.about_us.is_some(),
        }
    }

    pub fn mount_about_us(&mut self) -> u64 {
        let ticket = self.take_ticket();
        self.about_us = Some(AboutUsView {
            ticket,
            state: AboutUsState::Loading,
        });
        ticket
    }

    pub fn mount_messages(&mut self) -> u64 {
        let ticket = self.take_ticket();
        self.messages = Some(MessagesView {
            ticket,
            loading: true,
            messages: Vec::new(),
            error: None,
        });
        ticket
    }

    fn about_us_for(&mut self, ticket: u64) -> Option<&mut AboutUsView> {
        self.about_us.as_mut().filter(|view| view.ticket == ticket)
    }

    fn messages_for(&mut self, ticket: u64) -> Option<&mut MessagesView> {
        self.messages.as_mut().filter(|view| view.ticket == ticket)
    }

    /// Returns false when the answer is stale and was dropped.
    pub fn about_us_loaded(&mut self, ticket: u64, content: AboutUsContent) -> bool {
        let Some(view) = self.about_us_for(ticket) else {
            log::debug!("Dropping stale About Us response (ticket {ticket})");
            return false;
        };
        if view.state != AboutUsState::Loading {
            return false;
        }
        view.state = AboutUsState::Loaded(content);
        true
    }

    pub fn about_us_failed(&mut self, ticket: u64, reason: &str) -> bool {
        let Some(view) = self.about_us_for(ticket) else {
            log::debug!("Dropping stale About Us failure (ticket {ticket}): {reason}");
            return false;
        };
        log::error!("Error fetching About Us data: {reason}");
        if view.state != AboutUsState::Loading {
            return false;
        }
        view.state = AboutUsState::Failed(ABOUT_US_ERROR.to_string());
        true
    }

    pub fn messages_loaded(&mut self, ticket: u64, messages: Vec<MessageDocument>) -> bool {
        let Some(view) = self.messages_for(ticket) else {
            log::debug!("Dropping stale message list (ticket {ticket})");
            return false;
        };
        view.loading = false;
        view.messages = messages;
        view.error = None;
        true
    }

    pub fn messages_failed(&mut self, ticket: u64, reason: &str) -> bool {
        let Some(view) = self.messages_for(ticket) else {
            log::debug!("Dropping stale message list failure (ticket {ticket}): {reason}");
            return false;
        };
        log::error!("Error fetching messages: {reason}");
        view.loading = false;
        view.error = Some(MESSAGES_ERROR.to_string());
        true
    }

    /// Append a saved message to the list if it is showing.
    pub fn push_message(&mut self, message: MessageDocument) {
        if let Some(view) = self.messages.as_mut() {
            view.messages.push(message);
            view.error = None;
        }
    }

    pub fn save_failed(&mut self, reason: &str) {
        log::error!("Error saving message: {reason}");
        if let Some(view) = self.messages.as_mut() {
            view.error = Some(SAVE_ERROR.to_string());
        }
    }
}
