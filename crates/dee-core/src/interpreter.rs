use crate::config::DeeConfig;
use crate::error::{ConfigError, Result};
use crate::ledger::SessionState;
use crate::router::{Action, Outcome, Request, Route, find_route, routes_for};

/// Result of one successful turn: the state to carry forward, what to say,
/// and which route fired (`None` for the unrecognized fallback).
#[derive(Debug)]
pub struct Turn {
    pub state: SessionState,
    pub outcome: Outcome,
    pub action: Option<Action>,
}

/// Stateless dispatcher. Session state is threaded through [`Interpreter::step`]
/// by the caller; the interpreter itself never holds any.
#[derive(Debug)]
pub struct Interpreter {
    config: DeeConfig,
    routes: Vec<Route>,
}

impl Interpreter {
    pub fn new(config: DeeConfig) -> std::result::Result<Self, ConfigError> {
        let config = config.validated()?;
        let routes = routes_for(config.persona);
        Ok(Self { config, routes })
    }

    pub fn config(&self) -> &DeeConfig {
        &self.config
    }

    /// Route table in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Fresh ledger seeded with the persona's base constraints.
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.config.persona.voice().base_constraints.iter().copied())
    }

    /// Process one line of input against `state`.
    ///
    /// On `Err` the handler's work is discarded and `state` is still the
    /// current ledger; nothing was half-applied.
    pub fn step(&self, state: &SessionState, raw: &str) -> Result<Turn> {
        let input = normalize(raw);
        let Some(route) = find_route(&self.routes, &input) else {
            tracing::debug!(input = %input, "no route matched");
            return Ok(Turn {
                state: state.clone(),
                outcome: Outcome::Reply(self.config.persona.voice().unrecognized.to_string()),
                action: None,
            });
        };

        tracing::debug!(trigger = route.trigger, action = ?route.action, "route matched");
        let request = Request {
            input: &input,
            config: &self.config,
            routes: &self.routes,
        };
        let effect = (route.handler)(&request, state)?;
        Ok(Turn {
            state: effect.next.unwrap_or_else(|| state.clone()),
            outcome: effect.outcome,
            action: Some(route.action),
        })
    }
}

/// Trim and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
