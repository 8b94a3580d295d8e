use std::time::Duration;

/// How often the table draws while polling is active.
pub const DRAW_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How long a transient error banner stays visible before it hides itself.
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(3);
