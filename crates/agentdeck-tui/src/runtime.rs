use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;

use agentdeck_core::PendingReply;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Main event loop: draws, then waits on whichever source fires first,
/// whether a terminal event, a simulated reply whose timer elapsed, or the tick.
pub async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut reply_rx: UnboundedReceiver<PendingReply>,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // ~10fps tick drives the typing spinner and status-message expiry
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    // Second Ctrl+C - quit immediately
                                    app.quit();
                                } else {
                                    // First Ctrl+C - set pending (statusbar shows warning)
                                    app.pending_quit = true;
                                }
                            } else {
                                // Any other key clears pending quit state
                                app.pending_quit = false;
                                handle_key(app, key);
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => app.scroll_up(3),
                            MouseEventKind::ScrollDown => app.scroll_down(3),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }

            // A simulated reply's delay elapsed - append it to the transcript
            Some(reply) = reply_rx.recv() => {
                app.store.deliver_reply(reply);
                app.scroll_to_bottom();
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    // Deterministic teardown: no reply timer may outlive the event loop
    app.store.cancel_pending_replies();

    Ok(())
}
