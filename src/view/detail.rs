//! Detail page view-model.
//!
//! A detail page fetches one primary entity by ID, then optionally a secondary
//! (enrichment) value derived from it: a rocket's launches, or a launch's rocket.
//! Every load is keyed by a [`RequestToken`]; navigating to another ID while a load is
//! in flight makes the older load's results stale and they are dropped.

use std::future::Future;

use dioxus_logger::tracing;

use crate::{
    error::{Error, GatewayError},
    gateway::{HttpTransport, SpaceXGateway},
    model::{launch::LaunchDto, rocket::RocketDto},
    service::{LaunchService, RocketService},
    view::{load::RequestToken, state::StateCell},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Idle,
    PrimaryLoading,
    SecondaryLoading,
    Resolved,
    NotFound,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailState<P, S> {
    phase: DetailPhase,
    token: RequestToken,
    id: Option<String>,
    primary: Option<P>,
    secondary: Option<S>,
    message: Option<String>,
}

pub type RocketDetail = DetailState<RocketDto, Vec<LaunchDto>>;
pub type LaunchDetail = DetailState<LaunchDto, RocketDto>;

impl<P, S> Default for DetailState<P, S> {
    fn default() -> Self {
        Self {
            phase: DetailPhase::Idle,
            token: RequestToken::default(),
            id: None,
            primary: None,
            secondary: None,
            message: None,
        }
    }
}

impl<P, S> DetailState<P, S> {
    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// ID of the entity the latest load was issued for
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn primary(&self) -> Option<&P> {
        self.primary.as_ref()
    }

    pub fn secondary(&self) -> Option<&S> {
        self.secondary.as_ref()
    }

    /// Message shown on the not found card
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Nothing to show yet, the page renders its loading indicator
    pub fn primary_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Idle | DetailPhase::PrimaryLoading)
    }

    pub fn secondary_loading(&self) -> bool {
        self.phase == DetailPhase::SecondaryLoading
    }

    pub fn not_found(&self) -> bool {
        self.phase == DetailPhase::NotFound
    }

    /// Primary shown but no enrichment to go with it: none referenced, or its fetch failed
    pub fn secondary_unavailable(&self) -> bool {
        self.phase == DetailPhase::Resolved && self.secondary.is_none()
    }

    /// Restarts the state machine for `id`, invalidating any load in flight.
    pub fn begin(&mut self, id: &str) -> RequestToken {
        self.token = self.token.next();
        self.phase = DetailPhase::PrimaryLoading;
        self.id = Some(id.to_string());
        self.primary = None;
        self.secondary = None;
        self.message = None;

        self.token
    }

    /// Stores the primary entity.
    ///
    /// # Arguments
    /// - `token` - Token of the load the entity belongs to
    /// - `entity` - Primary entity
    /// - `has_secondary` - Whether an enrichment fetch follows
    ///
    /// # Returns
    /// - `true` - The entity was stored
    /// - `false` - The token is stale, nothing changed
    pub fn primary_found(&mut self, token: RequestToken, entity: P, has_secondary: bool) -> bool {
        if token != self.token || self.phase != DetailPhase::PrimaryLoading {
            return false;
        }

        self.primary = Some(entity);
        self.phase = if has_secondary {
            DetailPhase::SecondaryLoading
        } else {
            DetailPhase::Resolved
        };

        true
    }

    /// Moves to the not found state after the primary fetch failed.
    pub fn primary_failed(&mut self, token: RequestToken, err: GatewayError) -> bool {
        if token != self.token || self.phase != DetailPhase::PrimaryLoading {
            return false;
        }

        self.message = Some(Error::from(err).into_display_message());
        self.phase = DetailPhase::NotFound;

        true
    }

    /// Stores the enrichment result, `None` when it could not be loaded.
    pub fn secondary_resolved(&mut self, token: RequestToken, secondary: Option<S>) -> bool {
        if token != self.token || self.phase != DetailPhase::SecondaryLoading {
            return false;
        }

        self.secondary = secondary;
        self.phase = DetailPhase::Resolved;

        true
    }
}

impl RocketDetail {
    /// First `limit` launches flown by the rocket, in API order
    pub fn launch_preview(&self, limit: usize) -> &[LaunchDto] {
        self.secondary
            .as_deref()
            .map(|launches| &launches[..launches.len().min(limit)])
            .unwrap_or_default()
    }

    /// Whether the preview leaves launches out, enabling "View All Launches"
    pub fn has_more_launches(&self, limit: usize) -> bool {
        self.secondary
            .as_ref()
            .is_some_and(|launches| launches.len() > limit)
    }
}

/// Loads a primary entity and its enrichment into `cell`.
///
/// `fetch_secondary` is called with the primary entity and returns the enrichment
/// fetch, or `None` when the entity has nothing to enrich. An enrichment failure is
/// logged and degrades to "no secondary data".
///
/// # Returns
/// - `true` - The load ran to completion and its results were stored
/// - `false` - Another load started in the meantime, results were dropped
pub async fn load_detail<P, S, C, FP, FS, FutS>(
    cell: &mut C,
    id: &str,
    fetch_primary: FP,
    fetch_secondary: FS,
) -> bool
where
    C: StateCell<DetailState<P, S>>,
    FP: Future<Output = Result<P, GatewayError>>,
    FS: FnOnce(&P) -> Option<FutS>,
    FutS: Future<Output = Result<S, GatewayError>>,
{
    let token = cell.update(|state| state.begin(id));

    let primary = match fetch_primary.await {
        Ok(primary) => primary,
        Err(err) => return cell.update(|state| state.primary_failed(token, err)),
    };

    let secondary = fetch_secondary(&primary);
    let has_secondary = secondary.is_some();

    if !cell.update(|state| state.primary_found(token, primary, has_secondary)) {
        tracing::debug!(id = %id, "Dropping stale detail response");

        return false;
    }

    let Some(secondary) = secondary else {
        return true;
    };

    let secondary = match secondary.await {
        Ok(secondary) => Some(secondary),
        Err(err) => {
            tracing::warn!(id = %id, "Failed to load related data: {}", err);

            None
        }
    };

    cell.update(|state| state.secondary_resolved(token, secondary))
}

/// Loads a rocket, then every launch it flew.
pub async fn load_rocket_detail<T, C>(cell: &mut C, gateway: &SpaceXGateway<T>, id: &str) -> bool
where
    T: HttpTransport,
    C: StateCell<RocketDetail>,
{
    let rocket_service = RocketService::new(gateway);
    let launch_service = LaunchService::new(gateway);

    load_detail(
        cell,
        id,
        rocket_service.get_rocket(id),
        |rocket: &RocketDto| {
            let rocket_id = rocket.id.clone();

            Some(async move { launch_service.get_launches_by_rocket(&rocket_id).await })
        },
    )
    .await
}

/// Loads a launch, then the rocket it flew on when it references one.
pub async fn load_launch_detail<T, C>(cell: &mut C, gateway: &SpaceXGateway<T>, id: &str) -> bool
where
    T: HttpTransport,
    C: StateCell<LaunchDetail>,
{
    let rocket_service = RocketService::new(gateway);
    let launch_service = LaunchService::new(gateway);

    load_detail(
        cell,
        id,
        launch_service.get_launch(id),
        |launch: &LaunchDto| {
            launch
                .rocket
                .clone()
                .map(|rocket_id| async move { rocket_service.get_rocket(&rocket_id).await })
        },
    )
    .await
}
