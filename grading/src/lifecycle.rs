//! Loading / error / ready lifecycle shared by every data-backed widget.
//!
//! DESIGN
//! ======
//! The view state is a single tagged enum so "error and data at once" cannot
//! be represented. Each fetch is stamped with a [`RequestToken`]; only the
//! most recently issued token may settle the view, so a slow response to a
//! superseded request is dropped instead of overwriting newer data.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Rendered state of an asynchronously loaded value.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// No fetch has been issued (e.g. the identifying prop is absent).
    Idle,
    /// A fetch is in flight. `previous` keeps the last ready value on refresh.
    Loading { previous: Option<T> },
    /// The latest fetch failed with a display-ready message.
    Error(String),
    /// The latest fetch succeeded.
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Identifies one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A [`ViewState`] plus the bookkeeping that rejects stale responses.
#[derive(Clone, Debug, PartialEq)]
pub struct AsyncView<T> {
    state: ViewState<T>,
    latest: u64,
}

impl<T> Default for AsyncView<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            latest: 0,
        }
    }
}

impl<T> AsyncView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Enter `Loading` and return the token the response must present.
    ///
    /// Ready data is carried into `Loading { previous }` until the new
    /// result lands; an error is cleared.
    pub fn begin(&mut self) -> RequestToken {
        let previous = match std::mem::take(&mut self.state) {
            ViewState::Ready(data) => Some(data),
            ViewState::Loading { previous } => previous,
            ViewState::Idle | ViewState::Error(_) => None,
        };
        self.latest += 1;
        self.state = ViewState::Loading { previous };
        RequestToken(self.latest)
    }

    /// Apply a fetch outcome. Returns `false` when the token was superseded
    /// and the outcome was discarded.
    pub fn settle(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if token.0 != self.latest {
            log::debug!("discarding stale response: token={} latest={}", token.0, self.latest);
            return false;
        }
        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            Err(message) => ViewState::Error(message),
        };
        true
    }

    /// Return to `Idle`, invalidating any in-flight request.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = ViewState::Idle;
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, ViewState::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Data to display: the ready value, or the value retained during refresh.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Ready(data) | ViewState::Loading { previous: Some(data) } => Some(data),
            _ => None,
        }
    }

    /// Ready value only; `None` while loading even if previous data is held.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}
