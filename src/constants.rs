pub const API_NAME: &str = "[dealership-api]";

/// Cookie carrying the session id issued at login.
pub const SESSION_COOKIE: &str = "sessionid";

/// Label used whenever the sentiment service gives no usable answer.
pub const DEFAULT_SENTIMENT: &str = "neutral";

/// Dealer listing selector meaning "every state".
pub const ALL_STATES: &str = "All";
