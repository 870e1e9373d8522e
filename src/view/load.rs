use std::future::Future;

use crate::{
    error::{Error, GatewayError},
    view::state::StateCell,
};

/// Identifies one load issued by a page.
///
/// Tokens increase monotonically per state; a result carrying a token other than the
/// latest issued one is stale and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Message displayed in place of the data
    Failed(String),
}

/// Loading state of a page-level fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadState<T> {
    token: RequestToken,
    status: LoadStatus<T>,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            token: RequestToken::default(),
            status: LoadStatus::Idle,
        }
    }
}

impl<T> LoadState<T> {
    pub fn status(&self) -> &LoadStatus<T> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            LoadStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Issues a new token, invalidating any load still in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.token = self.token.next();
        self.status = LoadStatus::Loading;
        self.token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.token == token
    }

    /// Stores the result of the load identified by `token`.
    ///
    /// # Returns
    /// - `true` - The result was stored
    /// - `false` - The token is stale and the result was dropped
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, GatewayError>) -> bool {
        if !self.is_current(token) {
            return false;
        }

        self.status = match result {
            Ok(data) => LoadStatus::Loaded(data),
            Err(err) => LoadStatus::Failed(Error::from(err).into_display_message()),
        };

        true
    }
}

/// Runs `fetch` and stores its result, unless another load started in the meantime.
pub async fn load_into<T, C, F>(cell: &mut C, fetch: F) -> bool
where
    C: StateCell<LoadState<T>>,
    F: Future<Output = Result<T, GatewayError>>,
{
    let token = cell.update(|state| state.begin());
    let result = fetch.await;

    cell.update(|state| state.resolve(token, result))
}
