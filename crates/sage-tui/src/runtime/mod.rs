//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Async effect handlers send their completion `UiEvent`s to `inbox_tx`;
//! the runtime drains `inbox_rx` each frame. No per-operation receivers.

mod handlers;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sage_core::backend::BackendClient;
use sage_core::config::Config;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame duration while a request is in flight (spinner animation).
const ACTIVE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(50);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing is
/// happening.
const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(150);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: BackendClient,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, entering the alternate screen.
    pub fn new(config: Config, session_id: String) -> Result<Self> {
        // Set up panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let client = BackendClient::new(config.backend_url.clone(), session_id.clone())?;
        let state = AppState::new(config, session_id);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Renders are batched to tick cadence; input and backend
                // events mark the frame dirty as well so feedback is
                // immediate on the next draw.
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                let state = &mut self.state;
                self.terminal.draw(|frame| render::render(state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Drain inbox - all async results arrive here.
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let tick_interval = if self.state.tui.thread.pending {
            ACTIVE_POLL_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block on terminal input until the next tick is due, unless there
        // is already work to process.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking).
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect handler; its resulting event lands in the
    /// inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce(BackendClient) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let _ = tx.send(f(client).await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::SendChat { message } => {
                self.spawn_effect(move |client| handlers::send_chat(client, message));
            }
            UiEffect::AddToCart {
                product_id,
                product_name,
                price,
                image,
                quantity,
            } => {
                self.spawn_effect(move |client| {
                    handlers::add_to_cart(client, product_id, product_name, price, image, quantity)
                });
            }
            UiEffect::RemoveFromCart { product_id } => {
                self.spawn_effect(move |client| handlers::remove_from_cart(client, product_id));
            }
            UiEffect::FetchCart => {
                self.spawn_effect(handlers::fetch_cart);
            }
            UiEffect::Checkout { shipping } => {
                self.spawn_effect(move |client| handlers::checkout(client, shipping));
            }
            UiEffect::ExportPdf => {
                let export_dir = self.state.tui.config.export_dir();
                let open_after = self.state.tui.config.open_exports;
                self.spawn_effect(move |client| {
                    handlers::export_pdf(client, export_dir, open_after)
                });
            }
            UiEffect::Login { email, password } => {
                self.spawn_effect(move |client| handlers::login(client, email, password));
            }
            UiEffect::Signup {
                email,
                username,
                password,
            } => {
                self.spawn_effect(move |client| handlers::signup(client, email, username, password));
            }
            UiEffect::VirtualTryOn {
                product_id,
                image_path,
            } => {
                let export_dir = self.state.tui.config.export_dir();
                self.spawn_effect(move |client| {
                    handlers::virtual_tryon(client, product_id, image_path, export_dir)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
