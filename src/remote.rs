//! MQTT client for receiving scope overlay text
//!
//! Connects to an MQTT broker and subscribes to a topic.
//! Messages received are traced onto the scope as a text overlay.

use rumqttc::{Client, Event, MqttOptions, Packet, QoS};
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const DEFAULT_PORT: u16 = 1883;
const DEFAULT_TOPIC: &str = "beamtrace";
const DEFAULT_TTL: f32 = 30.0;

/// An overlay message with text and time-to-live in seconds
#[derive(Debug, Clone)]
pub struct ScopeMessage {
    pub text: String,
    pub ttl: f32,
}

/// JSON format for incoming messages (optional)
#[derive(Deserialize)]
struct JsonMessage {
    text: String,
    #[serde(default = "default_ttl")]
    ttl: f32,
}

fn default_ttl() -> f32 {
    DEFAULT_TTL
}

/// MQTT client that receives messages in a background thread
pub struct RemoteText {
    receiver: Receiver<ScopeMessage>,
    _thread: thread::JoinHandle<()>,
}

impl RemoteText {
    /// Connect to the broker and subscribe. Fails immediately if the broker
    /// is unreachable.
    pub fn new(host: &str, topic: &str) -> Result<Self, String> {
        let topic = if topic.is_empty() { DEFAULT_TOPIC } else { topic };

        let mut options = MqttOptions::new("beamtrace", host, DEFAULT_PORT);
        options.set_keep_alive(Duration::from_secs(30));

        let (client, mut connection) = Client::new(options, 10);

        client
            .subscribe(topic, QoS::AtMostOnce)
            .map_err(|e| format!("Failed to subscribe to topic '{}': {}", topic, e))?;

        // Poll once to fail fast if the broker is unreachable
        match connection.iter().next() {
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                return Err(format!(
                    "Failed to connect to MQTT broker at {}:{} - {}",
                    host, DEFAULT_PORT, e
                ));
            }
            None => {
                return Err(format!(
                    "Failed to connect to MQTT broker at {}:{} - connection closed",
                    host, DEFAULT_PORT
                ));
            }
        }

        let (sender, receiver) = mpsc::channel();
        let topic_owned = topic.to_string();

        let handle = thread::spawn(move || {
            Self::message_loop(connection, sender, &topic_owned);
        });

        eprintln!(
            "MQTT: Connected to {}:{}, subscribed to '{}'",
            host, DEFAULT_PORT, topic
        );

        Ok(Self {
            receiver,
            _thread: handle,
        })
    }

    fn message_loop(
        mut connection: rumqttc::Connection,
        sender: Sender<ScopeMessage>,
        topic: &str,
    ) {
        for event in connection.iter() {
            match event {
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    if publish.topic != topic {
                        continue;
                    }
                    let Ok(text) = String::from_utf8(publish.payload.to_vec()) else {
                        continue;
                    };
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    // Try to parse as JSON, fall back to plain text
                    let msg = match serde_json::from_str::<JsonMessage>(text) {
                        Ok(json) => ScopeMessage {
                            text: json.text,
                            ttl: json.ttl,
                        },
                        Err(_) => ScopeMessage {
                            text: text.to_string(),
                            ttl: DEFAULT_TTL,
                        },
                    };
                    if sender.send(msg).is_err() {
                        // Main thread gone, exit
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("MQTT error: {}", e);
                    // Keep iterating, the connection may recover
                }
            }
        }
    }

    /// Poll for the latest message (non-blocking).
    /// Returns the most recent message if any arrived, discarding older ones.
    pub fn poll(&self) -> Option<ScopeMessage> {
        let mut latest = None;
        while let Ok(msg) = self.receiver.try_recv() {
            latest = Some(msg);
        }
        latest
    }

    /// Default MQTT topic
    pub fn default_topic() -> &'static str {
        DEFAULT_TOPIC
    }
}
