//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`Notice`] - Feedback for blocked actions
//! - [`AppMessage`] - Messages delivered through the App's channel
//!
//! The App owns a [`TaskManager`]. Every key press resolves to a
//! [`Command`](crate::input::Command), the command runs against the
//! manager, and the manager's observers report the change back through the
//! message channel, where the App picks up fresh statistics for its
//! counters. Rendering reads the App and never mutates it.

mod actions;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Notice, NoticeLevel, NOTICE_TTL_TICKS};

use tokio::sync::mpsc;

use crate::animation::StatCounters;
use crate::config::{Preferences, Theme};
use crate::input::{InputField, KeybindingConfig};
use crate::manager::TaskManager;
use crate::observer::{ChannelObserver, LogObserver};

/// Longest accepted priority field input
const PRIORITY_FIELD_MAX_CHARS: usize = 4;

/// Main application state
pub struct App {
    /// Owner of the task store; the only way tasks change
    pub manager: TaskManager,
    /// Current display mode
    pub theme: Theme,
    /// Component receiving typed keys
    pub focus: Focus,
    /// Pending task text
    pub text_input: InputField,
    /// Pending priority; empty means the default priority
    pub priority_input: InputField,
    /// Index of the selected task in the list
    pub selected: usize,
    /// Whether the detailed statistics panel is visible
    pub show_stats: bool,
    /// Whether the clear-all confirmation dialog is open
    pub confirming_clear: bool,
    /// Feedback for the last blocked action
    pub notice: Option<Notice>,
    /// Animated header counters
    pub counters: StatCounters,
    /// Key → command tables
    pub keybindings: KeybindingConfig,
    /// Animation tick counter
    pub tick_count: u64,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Dirty flag: set when state changed since the last draw
    pub needs_redraw: bool,
    /// Receiver for observer messages
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    /// Build the App from preferences, seeding sample tasks if enabled.
    pub fn new(prefs: Preferences) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme = prefs.theme;
        let seed = prefs.seed_samples;

        let mut manager = TaskManager::new(prefs);
        manager.subscribe(LogObserver);
        manager.subscribe(ChannelObserver::new(message_tx));

        let mut app = Self {
            manager,
            theme,
            focus: Focus::default(),
            text_input: InputField::new(),
            priority_input: InputField::with_max_chars(PRIORITY_FIELD_MAX_CHARS),
            selected: 0,
            show_stats: false,
            confirming_clear: false,
            notice: None,
            counters: StatCounters::default(),
            keybindings: KeybindingConfig::new(),
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
            message_rx,
        };

        if seed {
            let added = app.manager.seed_samples();
            tracing::info!("Seeded {} sample tasks", added);
        }
        app.drain_messages();
        app
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Process every queued observer message.
    ///
    /// Returns how many messages were handled.
    pub fn drain_messages(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.message_rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::TasksChanged { event, stats } => {
                tracing::trace!(?event, "Retargeting counters");
                self.counters.retarget(&stats);
                self.clamp_selection();
            }
        }
    }

    /// Advance animations and expire the notice.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.counters.step() {
            self.mark_dirty();
        }

        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(self.tick_count))
        {
            self.notice = None;
            self.mark_dirty();
        }
    }

    /// Whether anything is still animating.
    pub fn is_animating(&self) -> bool {
        !self.counters.is_settled()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
