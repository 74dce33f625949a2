use crate::{OutputForm, RateDate, RateError};

/// Optional hook notified about each resolution.
///
/// Every method has an empty default so implementations only override what
/// they care about.
pub trait ResolveObserver: Send + Sync {
    fn on_request(&self, code: &str, date: RateDate, form: Option<OutputForm>) {
        let _ = (code, date, form);
    }

    fn on_resolved(&self, code: &str, date: RateDate) {
        let _ = (code, date);
    }

    fn on_error(&self, code: &str, date: RateDate, error: &RateError) {
        let _ = (code, date, error);
    }
}

/// Observer forwarding resolution events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn on_request(&self, code: &str, date: RateDate, form: Option<OutputForm>) {
        match form {
            Some(form) => tracing::info!(code, %date, %form, "fetching currency rate"),
            None => tracing::info!(code, %date, "fetching currency info"),
        }
    }

    fn on_resolved(&self, code: &str, date: RateDate) {
        tracing::debug!(code, %date, "currency rate resolved");
    }

    fn on_error(&self, code: &str, date: RateDate, error: &RateError) {
        tracing::warn!(code, %date, error_code = error.code(), %error, "currency rate resolution failed");
    }
}

/// Observer keeping a readable log of every event, for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    events: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingObserver {
    fn push(&self, event: String) {
        self.events.lock().expect("not poisoned").push(event);
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().expect("not poisoned").clone()
    }
}

#[cfg(test)]
impl ResolveObserver for RecordingObserver {
    fn on_request(&self, code: &str, _date: RateDate, form: Option<OutputForm>) {
        self.push(format!("request {code} {form:?}"));
    }

    fn on_resolved(&self, code: &str, _date: RateDate) {
        self.push(format!("resolved {code}"));
    }

    fn on_error(&self, code: &str, _date: RateDate, error: &RateError) {
        self.push(format!("error {code} {}", error.code()));
    }
}
