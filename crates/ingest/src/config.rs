/// MQTT transport configuration loaded from environment variables.
///
/// All fields default to the public development broker the devices
/// publish to; production deployments override via environment.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Broker hostname (default: `broker.emqx.io`).
    pub broker_host: String,
    /// Broker port (default: `1883`).
    pub broker_port: u16,
    /// The single device topic to subscribe to (default: `esp32/sensor_data`).
    pub topic: String,
    /// MQTT client identifier (default: `acmon-<pid>`).
    pub client_id: String,
    /// Keep-alive interval in seconds (default: `60`).
    pub keep_alive_secs: u64,
}

impl IngestConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default             |
    /// |------------------------|---------------------|
    /// | `MQTT_BROKER_HOST`     | `broker.emqx.io`    |
    /// | `MQTT_BROKER_PORT`     | `1883`              |
    /// | `MQTT_TOPIC`           | `esp32/sensor_data` |
    /// | `MQTT_CLIENT_ID`       | `acmon-<pid>`       |
    /// | `MQTT_KEEP_ALIVE_SECS` | `60`                |
    pub fn from_env() -> Self {
        let broker_host =
            std::env::var("MQTT_BROKER_HOST").unwrap_or_else(|_| "broker.emqx.io".into());

        let broker_port: u16 = std::env::var("MQTT_BROKER_PORT")
            .unwrap_or_else(|_| "1883".into())
            .parse()
            .expect("MQTT_BROKER_PORT must be a valid u16");

        let topic = std::env::var("MQTT_TOPIC").unwrap_or_else(|_| "esp32/sensor_data".into());

        let client_id = std::env::var("MQTT_CLIENT_ID")
            .unwrap_or_else(|_| format!("acmon-{}", std::process::id()));

        let keep_alive_secs: u64 = std::env::var("MQTT_KEEP_ALIVE_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("MQTT_KEEP_ALIVE_SECS must be a valid u64");

        Self {
            broker_host,
            broker_port,
            topic,
            client_id,
            keep_alive_secs,
        }
    }
}
