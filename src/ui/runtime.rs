use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::workflow::{SummaryLength, Workflow};
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive form until the user quits.
///
/// `workflow` must be fresh; `length` is applied before the first frame.
pub fn run(config: &Config, mut workflow: Workflow, length: SummaryLength) -> io::Result<()> {
    let endpoint = config
        .service
        .endpoint_url()
        .map(|url| url.to_string())
        .unwrap_or_default();
    workflow.set_summary_length(length);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));
    let mut app = App::new(workflow, endpoint);
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_ms = tick_rate.as_millis() as u64, "Terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => app.on_tick(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}
