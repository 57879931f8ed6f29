//! Glue code tying the runtime, providers, and terminal UI together.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time;
use tracing::{debug, info, warn};

use battle_content::TopicPool;
use battle_core::{BattleEvent, Difficulty, PcgRng};
use runtime::providers::text::sanitize_topic;
use runtime::{
    DescriptionProvider, DescriptionRequest, FallbackArtProvider, FallbackDescriptionProvider,
    FallbackTopicProvider, Runtime, RuntimeHandle, SessionEvent, TopicProvider, TopicRequest,
    fallback_description, resolve_assets, with_fallback,
};

use crate::config::{CliConfig, Content};
use crate::input::{self, BattleCommand, ModalCommand, TitleCommand};
use crate::presentation::terminal::{self, Tui};
use crate::presentation::ui::{self, RenderContext};
use crate::state::{BattleView, Screen, TitleState, TopicModal};

const FRAME_INTERVAL_MS: u64 = 16;

/// One running battle session.
struct Session {
    runtime: Runtime,
    handle: RuntimeHandle,
    events: broadcast::Receiver<SessionEvent>,
}

/// What woke the event loop.
enum Tick {
    Runtime(std::result::Result<SessionEvent, RecvError>),
    Frame,
}

pub struct App {
    config: CliConfig,
    content: Content,
    screen: Screen,
    difficulty: Difficulty,
    battle: Option<BattleView>,
    session: Option<Session>,
    descriptions: FallbackDescriptionProvider,
    art: FallbackArtProvider,
    topics: FallbackTopicProvider,
    should_quit: bool,
}

impl App {
    pub fn new(config: CliConfig, content: Content) -> Self {
        let difficulty = content.battle.difficulty;
        Self {
            config,
            content,
            screen: Screen::Title(TitleState::new(difficulty)),
            difficulty,
            battle: None,
            session: None,
            descriptions: FallbackDescriptionProvider,
            art: FallbackArtProvider,
            topics: FallbackTopicProvider::default(),
            should_quit: false,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        info!("CLI client starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        self.render(&mut terminal)?;

        while !self.should_quit {
            let tick = {
                let events = self.session.as_mut().map(|session| &mut session.events);
                tokio::select! {
                    result = next_event(events) => Tick::Runtime(result),
                    _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => Tick::Frame,
                }
            };

            let redraw = match tick {
                Tick::Runtime(result) => self.handle_runtime_event(result).await,
                Tick::Frame => self.handle_input_tick(&mut terminal).await?,
            };
            if redraw {
                self.render(&mut terminal)?;
            }
        }

        if let Some(session) = self.session.take() {
            let Session {
                runtime, handle, ..
            } = session;
            drop(handle);
            if let Err(e) = runtime.shutdown().await {
                warn!("Runtime shutdown failed: {}", e);
            }
        }

        terminal::restore()?;
        info!("CLI client exiting");

        Ok(())
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            screen: &self.screen,
            battle: self.battle.as_ref(),
        };
        terminal.draw(|frame| ui::render(frame, &ctx))?;
        Ok(())
    }

    /// Apply a runtime event to the battle view. Returns whether to redraw.
    async fn handle_runtime_event(
        &mut self,
        result: std::result::Result<SessionEvent, RecvError>,
    ) -> bool {
        match result {
            Ok(event) => {
                if let BattleEvent::BattleEnded { winner } = &event.event {
                    info!("Battle finished, winner: {}", winner);
                }
                match self.battle.as_mut() {
                    Some(view) => {
                        let applied = view.apply(&event);
                        if !applied {
                            debug!("Dropped event from epoch {}", event.epoch);
                        }
                        applied
                    }
                    None => false,
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Dropped {} battle events, resyncing", skipped);
                self.resync().await;
                true
            }
            Err(RecvError::Closed) => {
                warn!("Event stream closed");
                self.session = None;
                false
            }
        }
    }

    /// Catch the view up with the worker after missing events.
    async fn resync(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        match session.handle.query_snapshot().await {
            Ok(snapshot) => {
                if let Some(view) = self.battle.as_mut() {
                    view.sync(&snapshot);
                }
            }
            Err(e) => warn!("Failed to query snapshot: {}", e),
        }
    }

    /// Drain pending terminal input. Returns whether to redraw.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut redraw = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key, terminal).await?;
                    redraw = true;
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
            if self.should_quit {
                break;
            }
        }
        Ok(redraw)
    }

    async fn handle_key(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<()> {
        match &mut self.screen {
            Screen::Title(title) => match input::title_command(key) {
                TitleCommand::PreviousDifficulty => title.previous(),
                TitleCommand::NextDifficulty => title.next(),
                TitleCommand::Start => {
                    self.difficulty = title.difficulty;
                    self.screen = Screen::TopicModal(TopicModal::default());
                }
                TitleCommand::Quit => self.should_quit = true,
                TitleCommand::None => {}
            },
            Screen::TopicModal(modal) => match input::modal_command(key) {
                ModalCommand::Insert(ch) => modal.insert(ch),
                ModalCommand::Backspace => modal.backspace(),
                ModalCommand::Submit => {
                    if let Some(topic) = modal.submit() {
                        self.start_battle(topic).await?;
                    }
                }
                ModalCommand::RandomTopic => {
                    modal.suggest(TopicPool::Random.pick(&PcgRng, rand::random()));
                }
                ModalCommand::WebTopic => {
                    modal.loading = true;
                    modal.error = None;
                    let url = modal.input.trim().to_owned();
                    self.render(terminal)?;
                    let topic = self.web_topic(url).await;
                    if let Screen::TopicModal(modal) = &mut self.screen {
                        modal.suggest(topic);
                    }
                }
                ModalCommand::Cancel => {
                    self.screen = if self.battle.is_some() {
                        Screen::Battle
                    } else {
                        Screen::Title(TitleState::new(self.difficulty))
                    };
                }
                ModalCommand::None => {}
            },
            Screen::Battle => self.handle_battle_key(key).await,
        }
        Ok(())
    }

    async fn handle_battle_key(&mut self, key: KeyEvent) {
        let Some(view) = self.battle.as_mut() else {
            return;
        };

        let index = match input::battle_command(key) {
            BattleCommand::UseMove(index) => index,
            BattleCommand::UseSelected => view.selected_move,
            BattleCommand::CursorUp => return view.select_previous(),
            BattleCommand::CursorDown => return view.select_next(),
            BattleCommand::NewTopic => {
                self.screen = Screen::TopicModal(TopicModal::default());
                return;
            }
            BattleCommand::Quit => {
                self.should_quit = true;
                return;
            }
            BattleCommand::None => return,
        };

        let Some(session) = self.session.as_ref() else {
            return;
        };
        view.selected_move = index.min(view.player.moves.len().saturating_sub(1));
        match session.handle.select_move(index).await {
            Ok(()) => {}
            Err(e) if e.is_rejection() => debug!("Ignored move {}: {}", index, e),
            Err(e) => warn!("Failed to send move: {}", e),
        }
    }

    /// Start the first battle, or reset the running session onto a new topic.
    async fn start_battle(&mut self, topic: String) -> Result<()> {
        let roster = self.content.roster.clone();

        let epoch_snapshot = match self.session.as_ref() {
            Some(session) => {
                session.handle.reset(topic.clone()).await?;
                session.handle.query_snapshot().await?
            }
            None => {
                let runtime = Runtime::builder()
                    .config(
                        self.config
                            .runtime_config(&self.content.battle, self.difficulty),
                    )
                    .roster(roster.clone())
                    .topic(topic.clone())
                    .build()?;
                info!(
                    "Battle session started (seed {}, difficulty {})",
                    runtime.game_seed(),
                    self.difficulty
                );
                let handle = runtime.handle();
                let events = handle.subscribe();
                let snapshot = handle.query_snapshot().await?;
                self.session = Some(Session {
                    runtime,
                    handle,
                    events,
                });
                snapshot
            }
        };

        let mut view = match self.battle.take() {
            Some(mut view) => {
                view.topic.clone_from(&topic);
                view.sync(&epoch_snapshot);
                view
            }
            None => BattleView::new(&roster, self.difficulty, topic.as_str(), &epoch_snapshot),
        };

        let timeout = self.config.provider_timeout;
        let request = DescriptionRequest {
            topic: topic.clone(),
        };
        view.description = with_fallback(
            "description",
            timeout,
            async {
                self.descriptions
                    .describe(&request)
                    .await
                    .map(|response| response.description)
            },
            || fallback_description(&topic),
        )
        .await;
        view.assets = resolve_assets(
            &self.art,
            timeout,
            &roster.player.name,
            &roster.enemy.name,
            &topic,
        )
        .await;

        self.battle = Some(view);
        self.screen = Screen::Battle;
        Ok(())
    }

    /// Ask the topic provider for a topic, falling back to the web pool.
    async fn web_topic(&self, url: String) -> String {
        let request = TopicRequest { url };
        let topic = with_fallback(
            "topic",
            self.config.provider_timeout,
            async {
                self.topics
                    .topic_from_page(&request)
                    .await
                    .map(|response| response.topic)
            },
            || self.topics.pick(),
        )
        .await;

        let topic = sanitize_topic(&topic);
        if topic.is_empty() {
            self.topics.pick()
        } else {
            topic
        }
    }
}

/// Next event from the session, or never when no battle has started.
async fn next_event(
    events: Option<&mut broadcast::Receiver<SessionEvent>>,
) -> std::result::Result<SessionEvent, RecvError> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
