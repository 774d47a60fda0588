//! Observable fetch state for user lookups.
//!
//! A [`UserStateStream`] owns a single current [`FetchState`] and publishes it
//! through a `tokio::sync::watch` channel. Presentation code subscribes to the
//! channel and renders whatever value is current; it starts new fetches with
//! the `begin_*` methods, which return immediately.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use github_client::{Error, User, UserService};
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

/// The state of one fetch stream.
///
/// Exactly one state is current at a time. A stream starts out `Loading` and
/// returns to `Loading` whenever a new fetch begins, so consumers must be
/// prepared to see `Loading` again after any other state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState {
    /// A fetch is in flight
    Loading,
    /// The user list was fetched and contains at least one user
    SuccessList(Vec<User>),
    /// A single user profile was fetched
    SuccessUser(User),
    /// The fetch failed; the message is fit for display
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns `true` for every state other than `Loading`.
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Error> for FetchState {
    fn from(value: Error) -> Self {
        FetchState::Error(value.to_string())
    }
}

impl From<Result<Vec<User>, Error>> for FetchState {
    fn from(value: Result<Vec<User>, Error>) -> Self {
        match value {
            Ok(users) if users.is_empty() => FetchState::from(Error::Empty),
            Ok(users) => FetchState::SuccessList(users),
            Err(e) => FetchState::from(e),
        }
    }
}

impl From<Result<User, Error>> for FetchState {
    fn from(value: Result<User, Error>) -> Self {
        match value {
            Ok(user) => FetchState::SuccessUser(user),
            Err(e) => FetchState::from(e),
        }
    }
}

/// A fetch stream driven by a [`UserService`].
///
/// Each `begin_*` call resets the state to `Loading` and spawns the request on
/// the Tokio runtime. Requests are never cancelled. When fetches overlap, only
/// the result of the most recently started one is published; results of
/// superseded fetches are dropped when they arrive.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use github_client::{ClientConfig, UserClient};
/// use user_browser_core::{FetchState, UserStateStream};
///
/// # async fn example() -> Result<(), github_client::Error> {
/// let client = UserClient::new(ClientConfig::from_env()?)?;
/// let stream = UserStateStream::new(Arc::new(client));
///
/// stream.begin_fetch_all_users();
/// match stream.settled().await {
///     FetchState::SuccessList(users) => println!("{} users", users.len()),
///     FetchState::Error(message) => eprintln!("{}", message),
///     _ => {}
/// }
/// # Ok(())
/// # }
/// ```
pub struct UserStateStream {
    service: Arc<dyn UserService>,
    publisher: StatePublisher,
}

impl UserStateStream {
    /// Creates a stream whose initial state is `Loading`.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        let (sender, _) = watch::channel(FetchState::Loading);
        Self {
            service,
            publisher: StatePublisher {
                sender: Arc::new(sender),
                generation: Arc::new(AtomicU64::new(0)),
            },
        }
    }

    /// Returns a new reader of the stream's state.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.publisher.sender.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn current(&self) -> FetchState {
        self.publisher.sender.borrow().clone()
    }

    /// Waits until the current state is no longer `Loading` and returns it.
    pub async fn settled(&self) -> FetchState {
        let mut receiver = self.subscribe();
        let state = match receiver.wait_for(FetchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.current(),
        };
        state
    }

    /// Starts fetching the user list.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn begin_fetch_all_users(&self) {
        let service = Arc::clone(&self.service);
        self.begin_fetch("fetch_all_users", async move {
            FetchState::from(service.fetch_all_users().await)
        });
    }

    /// Starts fetching the profile of `login`.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn begin_fetch_user(&self, login: &str) {
        let service = Arc::clone(&self.service);
        let login = login.to_string();
        self.begin_fetch("fetch_user_by_username", async move {
            FetchState::from(service.fetch_user_by_username(&login).await)
        });
    }

    fn begin_fetch<F>(&self, operation: &'static str, fetch: F)
    where
        F: Future<Output = FetchState> + Send + 'static,
    {
        let generation = self.publisher.reset();
        debug!(operation, generation, "Starting fetch");

        let publisher = self.publisher.clone();
        tokio::spawn(async move {
            let state = fetch.await;
            publisher.publish(operation, generation, state);
        });
    }
}

/// The single writer of a stream's state.
///
/// Generations are only read and written while the watch channel's value is
/// locked, so a reset and a publish can never interleave.
#[derive(Clone)]
struct StatePublisher {
    sender: Arc<watch::Sender<FetchState>>,
    generation: Arc<AtomicU64>,
}

impl StatePublisher {
    /// Sets the state to `Loading` and returns the generation of the new fetch.
    fn reset(&self) -> u64 {
        let mut generation = 0;
        self.sender.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::Loading;
        });
        generation
    }

    /// Publishes `state` unless a newer fetch has started since `generation` began.
    fn publish(&self, operation: &'static str, generation: u64, state: FetchState) {
        let outcome = describe(&state);
        let published = self.sender.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = state;
            true
        });

        if !published {
            debug!(
                operation,
                generation, outcome, "Discarding result of superseded fetch"
            );
        } else if outcome == "error" {
            warn!(operation, generation, "Fetch finished with an error");
        } else {
            info!(operation, generation, outcome, "Fetch finished");
        }
    }
}

fn describe(state: &FetchState) -> &'static str {
    match state {
        FetchState::Loading => "loading",
        FetchState::SuccessList(_) => "user_list",
        FetchState::SuccessUser(_) => "user",
        FetchState::Error(_) => "error",
    }
}
