
#[cfg(debug_assertions)]
pub fn lead_webhook_url() -> &'static str {
    // Local request bin while developing
    option_env!("LEAD_WEBHOOK_URL").unwrap_or("http://localhost:3001/lead")
}

// Release builds must be pointed at the third-party webhook explicitly.
#[cfg(not(debug_assertions))]
pub fn lead_webhook_url() -> &'static str {
    env!("LEAD_WEBHOOK_URL", "set LEAD_WEBHOOK_URL to the lead webhook for release builds")
}

pub const CONTACT_EMAIL: &str = "info@innovatexlabs.com";
