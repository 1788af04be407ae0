use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};

use crate::{EngineEvent, EventSink, SocketEvent};

/// Runs the chat socket until it closes or fails.
///
/// One task per socket. Outbound frames arrive on `outbound`; everything the
/// server does is reported through `sink`. The transport's ordering holds: no
/// message event is emitted after `Closed` or `Errored`.
pub(crate) async fn run_socket<S: EventSink>(
    url: String,
    mut outbound: UnboundedReceiver<String>,
    sink: S,
) {
    let (ws_stream, _) = match connect_async(&url).await {
        Ok(connected) => connected,
        Err(err) => {
            warn!("Socket connect to {} failed: {}", url, err);
            sink.emit(EngineEvent::Socket(SocketEvent::Errored {
                message: err.to_string(),
            }));
            return;
        }
    };

    info!("Socket connected to {}", url);
    sink.emit(EngineEvent::Socket(SocketEvent::Opened));

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            outgoing = outbound.recv() => {
                let Some(text) = outgoing else {
                    // Command side is gone; say goodbye and stop.
                    let _ = write.send(WsMessage::Close(None)).await;
                    return;
                };
                debug!("Transmitting {} bytes", text.len());
                if let Err(err) = write.send(WsMessage::Text(text)).await {
                    warn!("Socket send failed: {}", err);
                    sink.emit(EngineEvent::Socket(SocketEvent::Errored {
                        message: err.to_string(),
                    }));
                    return;
                }
            }
            incoming = read.next() => {
                match incoming {
                    Some(Ok(WsMessage::Text(text))) => {
                        sink.emit(EngineEvent::Socket(SocketEvent::MessageReceived(text)));
                    }
                    Some(Ok(WsMessage::Ping(data))) => {
                        let _ = write.send(WsMessage::Pong(data)).await;
                    }
                    Some(Ok(WsMessage::Close(_))) | None => {
                        info!("Socket closed");
                        sink.emit(EngineEvent::Socket(SocketEvent::Closed));
                        return;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        warn!("Socket read failed: {}", err);
                        sink.emit(EngineEvent::Socket(SocketEvent::Errored {
                            message: err.to_string(),
                        }));
                        return;
                    }
                }
            }
        }
    }
}
