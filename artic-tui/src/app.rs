//! The event loop: key presses and finished fetches drive the table state.
//!
//! Fetches run as spawned tasks and report back over a channel, so the
//! table state is only ever touched from this loop.

use std::io;
use std::io::Stdout;

use artic_lib::PageSource;
use artic_lib::api::Page;
use artic_lib::error::Error;
use artic_lib::model::ArtworkId;
use artic_lib::model::ArtworkRow;
use artic_lib::selector::CrossPageSelector;
use artic_lib::table::BulkOutcome;
use artic_lib::table::LoadOutcome;
use artic_lib::table::LoadTicket;
use artic_lib::table::TableState;
use crossterm::cursor;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal;
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::error::AppError;
use crate::input::Action;
use crate::input::action_for;
use crate::input::edit_count;
use crate::render;
use crate::render::ViewState;

/// Results coming back from spawned fetch tasks.
#[derive(Debug)]
enum Message {
    PageLoaded(LoadTicket, Result<Page<ArtworkRow>, Error>),
    BulkSelected(Result<Option<Vec<ArtworkId>>, Error>),
}

/// Puts the terminal into raw alternate-screen mode and restores it on drop.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub struct App<S> {
    source: S,
    selector: CrossPageSelector,
    state: TableState,
    view: ViewState,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    quit: bool,
}

impl<S> App<S>
where
    S: PageSource + Clone + 'static,
{
    pub fn new(source: S, selector: CrossPageSelector, page_link_size: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            selector,
            state: TableState::new(),
            view: ViewState {
                page_link_size,
                ..Default::default()
            },
            tx,
            rx,
            quit: false,
        }
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = TerminalGuard::new()?;
        let mut events = EventStream::new();

        let ticket = self.state.reload();
        self.spawn_load(ticket);

        while !self.quit {
            let size = terminal::size()?;
            render::draw(&mut terminal.stdout, &self.state, &self.view, size)?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(action) = action_for(key, self.state.is_overlay_open()) {
                            self.handle(action);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log::error!("Event stream error: {}", e);
                        return Err(e.into());
                    }
                    None => break,
                },
                Some(message) = self.rx.recv() => self.receive(message),
            }
        }

        log::info!("Quit requested");
        Ok(())
    }

    fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::CursorUp => self.view.cursor = self.view.cursor.saturating_sub(1),
            Action::CursorDown => {
                let last = self.state.rows().len().saturating_sub(1);
                self.view.cursor = (self.view.cursor + 1).min(last);
            }
            Action::ToggleRow => {
                self.state.toggle_row(self.view.cursor);
            }
            Action::SelectPage => {
                self.state.select_page();
            }
            Action::FirstPage => self.navigate(TableState::first_page),
            Action::PrevPage => self.navigate(TableState::prev_page),
            Action::NextPage => self.navigate(TableState::next_page),
            Action::LastPage => self.navigate(TableState::last_page),
            Action::Reload => {
                let ticket = self.state.reload();
                self.spawn_load(ticket);
            }
            Action::ToggleOverlay => self.state.toggle_overlay(),
            Action::CloseOverlay => self.state.close_overlay(),
            Action::CountDigit(_) | Action::CountBackspace => {
                let count = edit_count(&mut self.view.count_buffer, action);
                self.state.set_count_input(count);
            }
            Action::SubmitCount => self.spawn_bulk_select(),
        }
    }

    fn navigate(&mut self, transition: fn(&mut TableState) -> Option<LoadTicket>) {
        if let Some(ticket) = transition(&mut self.state) {
            self.view.cursor = 0;
            self.spawn_load(ticket);
        }
    }

    fn receive(&mut self, message: Message) {
        match message {
            Message::PageLoaded(ticket, result) => {
                if let LoadOutcome::Applied(rows) = self.state.complete_load(ticket, result) {
                    self.view.cursor = self.view.cursor.min(rows.saturating_sub(1));
                }
            }
            Message::BulkSelected(result) => {
                if let BulkOutcome::Applied(count) = self.state.finish_bulk_select(result) {
                    log::info!("{} artworks selected", count);
                }
            }
        }
    }

    fn spawn_load(&self, ticket: LoadTicket) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_page(ticket.page()).await;
            let _ = tx.send(Message::PageLoaded(ticket, result));
        });
    }

    fn spawn_bulk_select(&mut self) {
        let Some(count) = self.state.begin_bulk_select() else {
            log::debug!("ignoring submit: no positive count or a selection is running");
            return;
        };

        let source = self.source.clone();
        let selector = self.selector;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = selector.select_first(&source, Some(count)).await;
            let _ = tx.send(Message::BulkSelected(result));
        });
    }
}
