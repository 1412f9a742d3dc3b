//! Live-update layer.
//!
//! Two long-lived WebSocket connections (notifications and chat preview) run
//! as independent tasks, outside the bootstrap request/response cycle, and
//! forward inbound frames over a channel. Nothing is opened without a token.

use std::fmt;

use futures::StreamExt;
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::models::NotificationPush;

/// Buffer size for the live event channel.
const CHANNEL_BUFFER_SIZE: usize = 32;

#[derive(Error, Debug)]
pub enum LiveError {
    #[error("Invalid page origin: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveChannel {
    Notifications,
    ChatPreview,
}

impl LiveChannel {
    pub const ALL: [LiveChannel; 2] = [LiveChannel::Notifications, LiveChannel::ChatPreview];

    pub fn path(&self) -> &'static str {
        match self {
            LiveChannel::Notifications => "/ws/notifications/",
            LiveChannel::ChatPreview => "/ws/chats/preview/",
        }
    }

    /// Turn a text frame into an event. Only notification frames that are
    /// not valid JSON are dropped.
    fn decode(&self, text: &str) -> Option<LiveEvent> {
        match self {
            LiveChannel::Notifications => match serde_json::from_str::<Value>(text) {
                Ok(frame) => Some(LiveEvent::Notification(NotificationPush::from_frame(&frame))),
                Err(e) => {
                    debug!(error = %e, "Ignoring malformed notification frame");
                    None
                }
            },
            LiveChannel::ChatPreview => Some(LiveEvent::ChatPreview(text.to_string())),
        }
    }
}

impl fmt::Display for LiveChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveChannel::Notifications => f.write_str("notifications"),
            LiveChannel::ChatPreview => f.write_str("chat_preview"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent {
    Notification(NotificationPush),
    /// Raw chat preview frame; not rendered anywhere yet
    ChatPreview(String),
}

/// WebSocket URL for `channel` on the page's host, carrying the token as a
/// query credential.
pub fn socket_url(origin: &str, channel: LiveChannel, token: &str) -> Result<String, LiveError> {
    let url = Url::parse(origin).map_err(|e| LiveError::InvalidOrigin(format!("{origin}: {e}")))?;
    let host = url
        .host_str()
        .ok_or_else(|| LiveError::InvalidOrigin(format!("{origin}: no host")))?;
    let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();

    Ok(format!(
        "{scheme}://{host}{port}{}?token={}",
        channel.path(),
        urlencoding::encode(token)
    ))
}

/// Handle to the running live sockets. Dropping it stops them.
pub struct LiveFeed {
    events: mpsc::Receiver<LiveEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl LiveFeed {
    /// Open both sockets. Returns `None` without a token: no connection is
    /// attempted at all.
    pub fn start(origin: &str, token: Option<&str>) -> Option<Self> {
        let token = token.filter(|t| !t.is_empty())?;
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let mut tasks = Vec::new();
        for channel in LiveChannel::ALL {
            match socket_url(origin, channel, token) {
                Ok(url) => tasks.push(tokio::spawn(run_socket(url, channel, tx.clone()))),
                Err(e) => warn!(%channel, error = %e, "Live socket not initialized"),
            }
        }

        Some(Self { events: rx, tasks })
    }

    /// Next inbound event; `None` once both sockets have closed.
    pub async fn next_event(&mut self) -> Option<LiveEvent> {
        self.events.recv().await
    }

    pub fn connection_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn shutdown(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_socket(url: String, channel: LiveChannel, tx: mpsc::Sender<LiveEvent>) {
    let mut stream = match connect_async(url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(e) => {
            warn!(%channel, error = %e, "Live socket not initialized");
            return;
        }
    };
    info!(%channel, "Live socket connected");

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                if let Some(event) = channel.decode(&text) {
                    if tx.send(event).await.is_err() {
                        debug!(%channel, "Live event receiver dropped");
                        break;
                    }
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(%channel, error = %e, "Live socket error");
                break;
            }
        }
    }

    debug!(%channel, "Live socket closed");
}
