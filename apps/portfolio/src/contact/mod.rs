// Contact form: validation, notification chain (rich → simple → manual email).
// All outbound calls go through webhook_client; no direct HTTP here.

pub mod dispatcher;
pub mod handlers;
pub mod mailto;
pub mod models;
pub mod notify;
pub mod validation;
