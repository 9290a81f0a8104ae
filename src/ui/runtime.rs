use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::from_config(config);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .context("failed to draw frame")?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "resize");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("exiting");
    Ok(())
}
