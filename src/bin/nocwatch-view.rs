// Terminal dashboard: polls the status feed and redraws on every update

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use nocwatch::config::AppConfig;
use nocwatch::logging;
use nocwatch::poller::{Poller, PollerConfig};
use nocwatch::source::HttpSource;
use nocwatch::tui::{self, Tui};
use nocwatch::view::DashboardView;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::load()?;
    let client = &app_config.client;
    let _log_guard = logging::init_file(&client.log_file);

    let source = HttpSource::new(&client.base_url, client.request_timeout())?;
    tracing::info!(url = %source.url(), "Polling status feed");

    tui::install_panic_hook();
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let poller = Poller::activate(Arc::new(source), PollerConfig::from(client));
    let mut updates = poller.subscribe();
    let mut events = EventStream::new();

    let result = loop {
        let view = DashboardView::from_state(&updates.borrow_and_update());
        if let Err(e) = terminal.draw(&view) {
            break Err(e);
        }

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        tracing::info!("Quit requested");
                        break Ok(());
                    }
                }
                // resize and other events just redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => break Err(e.into()),
                None => break Ok(()),
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received shutdown signal");
                break Ok(());
            }
        }
    };

    terminal.exit();
    // Aborts any fetch still waiting on the network.
    poller.shutdown().await;
    result
}
