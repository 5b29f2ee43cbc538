//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::BotCommand;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying bot status, chart, and logs.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The backend the application is connected to.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Worker events that arrive while the splash screen is up. The
    /// initial status fetch lands here; replayed into the dashboard on
    /// transition so it is not lost.
    splash_buffer: Vec<WorkerEvent>,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sends start/stop commands to the commander worker.
    command_sender: mpsc::Sender<BotCommand>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Whether to enable background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        command_sender: mpsc::Sender<BotCommand>,
        shutdown_sender: broadcast::Sender<()>,
        with_background_color: bool,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            splash_buffer: Vec::new(),
            event_receiver,
            command_sender,
            shutdown_sender,
            with_background_color,
        }
    }

    /// Routes a worker event to the current screen. Events received
    /// before the dashboard exists are buffered, not dropped.
    fn queue_event(&mut self, event: WorkerEvent) {
        match &mut self.current_screen {
            Screen::Splash => self.splash_buffer.push(event),
            Screen::Dashboard(state) => state.add_event(event),
        }
    }

    /// Switches to the dashboard, replaying anything buffered during
    /// the splash screen.
    fn enter_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.with_background_color,
        );
        for event in self.splash_buffer.drain(..) {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.queue_event(event);
        }

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => match key.code {
                        // The guard mirrors the disabled-button contract:
                        // a command is only sent when the action is
                        // available for the last confirmed status.
                        KeyCode::Char('s') if state.can_start() => {
                            send_command(state, &app.command_sender, BotCommand::Start);
                        }
                        KeyCode::Char('x') if state.can_stop() => {
                            send_command(state, &app.command_sender, BotCommand::Stop);
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Hands a command to the commander worker. The queue is small; if it
/// is full the keypress is surfaced in the activity panel instead of
/// vanishing.
fn send_command(
    state: &mut DashboardState,
    sender: &mpsc::Sender<BotCommand>,
    command: BotCommand,
) {
    if sender.try_send(command).is_err() {
        state.add_to_activity_log(WorkerEvent::commander_with_level(
            format!("{:?} command dropped - command queue full", command),
            EventType::Error,
            LogLevel::Warn,
        ));
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
