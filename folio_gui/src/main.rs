//! # Folio GUI Application
//!
//! The portfolio page rendered with Iced: category filter buttons, the
//! staggered 3-2-2 project grid and a fallback message when nothing matches.
//!
//! Usage: `folio_gui [settings.toml]`
//!
//! ## Timers
//!
//! Selecting a card starts an expiry `Task` that sleeps for the configured
//! delay and then reports its ticket back. The task's abort handle is kept
//! in an [`expiry::ExpiryTimer`]; a new selection, an explicit clear, or
//! dropping the app aborts it. `PortfolioPage::expire` also ignores tickets
//! that are no longer current.

mod expiry;
mod logger;
mod ui;

use std::path::Path;
use std::time::{Duration, Instant};

use iced::widget::{column, container, rule, scrollable};
use iced::{window, Element, Length, Subscription, Task};
use tracing::{debug, error, info};

use folio_core::catalog::Catalog;
use folio_core::{Category, ExpiryTicket, PageSettings, PortfolioPage};

use crate::expiry::ExpiryTimer;

/// Longest row, used to bound the reveal animation
const MAX_ROW_CARDS: usize = 3;

fn main() -> iced::Result {
    logger::init_logger();

    let settings = load_settings(std::env::args().nth(1).as_deref());

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size((1280.0, 900.0))
        .run()
}

fn load_settings(path: Option<&str>) -> PageSettings {
    let Some(path) = path else {
        return PageSettings::default();
    };

    match PageSettings::load(Path::new(path)) {
        Ok(settings) => {
            info!(path, "using settings file");
            settings
        }
        Err(e) => {
            error!(path, error = %e, "failed to load settings, using defaults");
            PageSettings::default()
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// A filter button was pressed
    CategorySelected(Category),
    /// A card reported a selection
    SelectProject(String),
    /// An expiry task finished sleeping
    SelectionExpired(ExpiryTicket),
    ClearSelection,
    ToggleReducedMotion,
    /// Animation frame while cards are still being revealed
    Frame(Instant),
}

/// Application state
pub struct App {
    page: PortfolioPage,
    /// The one pending expiry task
    expiry_timer: ExpiryTimer,
    /// When the current grid started revealing
    reveal_started: Instant,
    /// Latest frame time
    now: Instant,
    /// Shown in the status bar when the catalog could not be loaded
    load_error: Option<String>,
}

impl App {
    fn new(settings: PageSettings) -> (Self, Task<Message>) {
        let (catalog, load_error) = match settings.load_catalog() {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                error!(error = %e, "failed to load catalog, falling back to built-in projects");
                let fallback = Catalog::embedded().unwrap_or_else(|_| Catalog::empty());
                (fallback, Some(e.to_string()))
            }
        };

        info!(projects = catalog.len(), "portfolio loaded");

        let now = Instant::now();
        let app = App {
            page: PortfolioPage::with_catalog(catalog, &settings),
            expiry_timer: ExpiryTimer::new(),
            reveal_started: now,
            now,
            load_error,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Folio - {}", self.page.category())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(category) => {
                if self.page.set_category(category) {
                    self.restart_reveal();
                }
                Task::none()
            }
            Message::SelectProject(slug) => {
                match self.page.select(slug, Instant::now()) {
                    Some(ticket) => self.schedule_expiry(ticket),
                    None => Task::none(),
                }
            }
            Message::SelectionExpired(ticket) => {
                self.expiry_timer.finished(ticket);
                self.page.expire(ticket);
                Task::none()
            }
            Message::ClearSelection => {
                self.page.clear_selection();
                self.expiry_timer.cancel();
                Task::none()
            }
            Message::ToggleReducedMotion => {
                let mut motion = *self.page.motion();
                motion.reduced_motion = !motion.reduced_motion;
                debug!(reduced_motion = motion.reduced_motion, "motion preference changed");
                self.page.set_motion(motion);
                self.restart_reveal();
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Start the expiry task for `ticket`, aborting the previous one first.
    fn schedule_expiry(&mut self, ticket: ExpiryTicket) -> Task<Message> {
        let delay = ticket.remaining(Instant::now());
        let (timer, handle) = Task::perform(tokio::time::sleep(delay), move |_| {
            Message::SelectionExpired(ticket)
        })
        .abortable();

        self.expiry_timer.replace(ticket, handle.abort_on_drop());
        timer
    }

    fn restart_reveal(&mut self) {
        let now = Instant::now();
        self.reveal_started = now;
        self.now = now;
    }

    /// Time since the grid started revealing
    fn reveal_elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.reveal_started)
    }

    fn is_revealing(&self) -> bool {
        self.reveal_elapsed() < self.page.motion().total_duration(MAX_ROW_CARDS)
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_revealing() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let view = self.page.view();

        let grid = ui::project_grid::view_grid(&view.grid, self.reveal_elapsed());
        let shown: usize = view.grid.rows().iter().map(|r| r.cards.len()).sum();

        let content = column![
            ui::header::view_header(self.page.motion().reduced_motion),
            ui::filter_bar::view_filter_bar(&view.categories),
            rule::horizontal(1),
            scrollable(grid).height(Length::Fill),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(
                shown,
                self.page.catalog().len(),
                self.page.active_slug(),
                self.load_error.as_deref(),
            ),
        ]
        .spacing(12);

        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
