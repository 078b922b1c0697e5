//! MQTT session loop and the message-to-store pipeline.
//!
//! Connects to the broker, subscribes to the device topic once the
//! broker acknowledges the connection, and records every accepted
//! payload. Rejected payloads are logged and dropped with no observable
//! effect on the store. Connection failures end the session; the outer
//! loop rebuilds the client after a fixed delay (the transport's own
//! retry governs anything finer-grained -- no custom backoff).

use std::sync::Arc;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};

use acmon_core::{normalize, RejectReason, TelemetryStore};

use crate::config::IngestConfig;

/// Delay before rebuilding the MQTT client after a session ends.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Event-loop channel capacity. Generous for the expected ~1 msg/sec.
const EVENT_LOOP_CAPACITY: usize = 64;

/// Normalize one raw publish payload and record it.
///
/// Returns the assigned sequence number on acceptance. On rejection the
/// store is untouched: no snapshot mutation, no counter increment, no
/// history append.
pub fn handle_publish(store: &TelemetryStore, payload: &[u8]) -> Result<u64, RejectReason> {
    let values = normalize(payload)?;
    Ok(store.record(values))
}

/// Run the ingestion service indefinitely.
///
/// Never returns under normal operation; the task lives as long as the
/// process. Nothing on this path panics or propagates an error out of
/// the loop.
pub async fn run(config: IngestConfig, store: Arc<TelemetryStore>) {
    loop {
        tracing::info!(
            host = %config.broker_host,
            port = config.broker_port,
            topic = %config.topic,
            "Connecting to MQTT broker"
        );

        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(config.keep_alive_secs));

        let (client, eventloop) = AsyncClient::new(options, EVENT_LOOP_CAPACITY);
        run_session(&client, eventloop, &config, &store).await;

        tracing::warn!("MQTT session ended, reconnecting");
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

/// Drive one MQTT session until the connection fails.
async fn run_session(
    client: &AsyncClient,
    mut eventloop: EventLoop,
    config: &IngestConfig,
    store: &TelemetryStore,
) {
    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!(topic = %config.topic, "MQTT connected, subscribing");
                if let Err(e) = client.subscribe(&config.topic, QoS::AtMostOnce).await {
                    tracing::error!(error = %e, "Subscribe request failed");
                    break;
                }
            }
            Ok(Event::Incoming(Packet::SubAck(_))) => {
                tracing::info!(topic = %config.topic, "Subscription acknowledged");
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                match handle_publish(store, &publish.payload) {
                    Ok(sequence_number) => {
                        tracing::debug!(sequence_number, "Recorded reading");
                    }
                    Err(reason) => {
                        // Rejected payloads are dropped; ingestion continues.
                        tracing::debug!(%reason, "Dropped payload");
                    }
                }
            }
            Ok(_) => {
                // Pings, acks for our own packets -- nothing to do.
            }
            Err(e) => {
                tracing::error!(error = %e, "MQTT connection error");
                break;
            }
        }
    }
}
