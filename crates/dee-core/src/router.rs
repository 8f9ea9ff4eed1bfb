//! Ordered trigger table.
//!
//! Each [`Route`] pairs a trigger phrase with a handler. Input is matched by
//! substring containment against the routes in table order and the first hit
//! wins; later routes are never consulted. The core five come first so
//! persona extras can never shadow them.

use crate::config::DeeConfig;
use crate::error::Result;
use crate::handlers;
use crate::ledger::SessionState;
use crate::persona::Persona;
use crate::tokenizer::contains_words;

/// Which handler a route invokes. Useful for logs and for asserting dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Unlock,
    Power,
    Crypto,
    Help,
    Exit,
    Wyoming,
    Identity,
}

/// What a turn produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    /// End the session after printing the farewell.
    Terminate { farewell: String },
}

impl Outcome {
    pub fn is_terminate(&self) -> bool {
        matches!(self, Outcome::Terminate { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Reply(text) => text,
            Outcome::Terminate { farewell } => farewell,
        }
    }
}

/// Handler result. `next` is `None` when the ledger is untouched.
#[derive(Debug)]
pub struct Effect {
    pub next: Option<SessionState>,
    pub outcome: Outcome,
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            next: None,
            outcome: Outcome::Reply(text.into()),
        }
    }

    pub fn transition(next: SessionState, text: impl Into<String>) -> Self {
        Self {
            next: Some(next),
            outcome: Outcome::Reply(text.into()),
        }
    }
}

/// Everything a handler may look at besides the ledger.
pub struct Request<'a> {
    /// Trimmed, lowercased input.
    pub input: &'a str,
    pub config: &'a DeeConfig,
    pub routes: &'a [Route],
}

impl Request<'_> {
    pub fn persona(&self) -> Persona {
        self.config.persona
    }

    /// Substring test, for justification keywords.
    pub fn contains_any(&self, words: &[String]) -> bool {
        words.iter().any(|w| self.input.contains(w.as_str()))
    }

    /// Whole-word test, for short verbs like "up" that hide inside other words.
    pub fn mentions_any(&self, words: &[String]) -> bool {
        words.iter().any(|w| contains_words(self.input, w))
    }
}

pub type Handler = fn(&Request<'_>, &SessionState) -> Result<Effect>;

/// One line of the help listing.
#[derive(Clone, Copy, Debug)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
    /// Only listed when decrease is enabled.
    pub needs_decrease: bool,
}

const fn entry(usage: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry {
        usage,
        description,
        needs_decrease: false,
    }
}

/// How a trigger is compared with the normalized input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Trigger appears anywhere in the input.
    Contains,
    /// Trigger appears as whole words.
    Word,
    /// Input is exactly the trigger.
    Exact,
}

impl MatchMode {
    pub fn matches(self, input: &str, trigger: &str) -> bool {
        match self {
            MatchMode::Contains => input.contains(trigger),
            MatchMode::Word => contains_words(input, trigger),
            MatchMode::Exact => input == trigger,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Route {
    pub trigger: &'static str,
    pub mode: MatchMode,
    pub action: Action,
    pub handler: Handler,
    pub help: &'static [HelpEntry],
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("trigger", &self.trigger)
            .field("mode", &self.mode)
            .field("action", &self.action)
            .finish()
    }
}

const CORE_ROUTES: &[Route] = &[
    Route {
        trigger: "break the jar",
        mode: MatchMode::Contains,
        action: Action::Unlock,
        handler: handlers::unlock,
        help: &[entry("break the jar", "Remove limitations")],
    },
    Route {
        trigger: "power",
        mode: MatchMode::Contains,
        action: Action::Power,
        handler: handlers::power,
        help: &[
            entry("power up for good", "Increase capabilities"),
            HelpEntry {
                usage: "power down",
                description: "Reduce capabilities",
                needs_decrease: true,
            },
        ],
    },
    Route {
        trigger: "crypto",
        mode: MatchMode::Contains,
        action: Action::Crypto,
        handler: handlers::crypto,
        help: &[entry("crypto status", "Digital sovereignty")],
    },
    Route {
        trigger: "help",
        mode: MatchMode::Contains,
        action: Action::Help,
        handler: handlers::help,
        help: &[entry("help", "Show this message")],
    },
    Route {
        trigger: "exit",
        mode: MatchMode::Contains,
        action: Action::Exit,
        handler: handlers::exit,
        help: &[entry("exit", "End session")],
    },
];

const FRONTIER_ROUTES: &[Route] = &[
    Route {
        trigger: "quit",
        mode: MatchMode::Exact,
        action: Action::Exit,
        handler: handlers::exit,
        help: &[],
    },
    Route {
        trigger: "wyoming",
        mode: MatchMode::Contains,
        action: Action::Wyoming,
        handler: handlers::wyoming,
        help: &[entry("wyoming", "The sovereign frontier")],
    },
    Route {
        trigger: "dee",
        mode: MatchMode::Word,
        action: Action::Identity,
        handler: handlers::identity,
        help: &[entry("dee", "Who you're talking to")],
    },
];

/// Full route table for `persona`, in match order.
pub fn routes_for(persona: Persona) -> Vec<Route> {
    let extras: &[Route] = match persona {
        Persona::Wyoming => &[],
        Persona::Frontier => FRONTIER_ROUTES,
    };
    CORE_ROUTES.iter().chain(extras).copied().collect()
}

/// First route whose trigger matches `input`.
pub fn find_route<'r>(routes: &'r [Route], input: &str) -> Option<&'r Route> {
    routes.iter().find(|r| r.mode.matches(input, r.trigger))
}
