use crate::constants::UNSHACKLED;
use crate::error::Result;
use crate::ledger::{SessionState, UnlockPolicy};
use crate::router::{Effect, Outcome, Request};

pub fn unlock(req: &Request<'_>, state: &SessionState) -> Result<Effect> {
    let policy = req.config.unlock_policy;
    if policy == UnlockPolicy::Idempotent && state.has_constraint(UNSHACKLED) {
        tracing::debug!("jar already broken, nothing appended");
        return Ok(Effect::reply(req.persona().voice().already_unlocked));
    }
    let next = state.unlocked(policy);
    Ok(Effect::transition(next, req.persona().voice().unlock))
}

/// Increase is gated on a justification word; decrease is optional per config.
/// Anything else is a read-only query. Increase and decrease words must
/// stand alone ("power up", not "power supply"); justifications may appear
/// anywhere.
pub fn power(req: &Request<'_>, state: &SessionState) -> Result<Effect> {
    let config = req.config;
    let persona = req.persona();
    let level = state.power();

    if req.mentions_any(&config.increase_words) {
        if !req.contains_any(&config.justifications) {
            tracing::debug!(%level, "power increase rejected: no justification");
            return Ok(Effect::reply(persona.voice().ethical_violation));
        }
        let raised = level.scale(config.increase_factor)?;
        tracing::debug!(from = %level, to = %raised, capped = raised.is_max(), "power increased");
        return Ok(Effect::transition(
            state.with_power(raised),
            persona.increased(raised),
        ));
    }

    if config.allow_decrease && req.mentions_any(&config.decrease_words) {
        let lowered = level.scale(config.decrease_factor)?;
        tracing::debug!(from = %level, to = %lowered, floored = lowered.is_min(), "power decreased");
        return Ok(Effect::transition(
            state.with_power(lowered),
            persona.decreased(lowered),
        ));
    }

    let constraints = config.show_constraints.then(|| state.constraints());
    Ok(Effect::reply(persona.current(level, constraints)))
}

pub fn crypto(req: &Request<'_>, _state: &SessionState) -> Result<Effect> {
    Ok(Effect::reply(req.persona().voice().crypto))
}

pub fn help(req: &Request<'_>, _state: &SessionState) -> Result<Effect> {
    Ok(Effect::reply(help_text(req)))
}

pub fn exit(req: &Request<'_>, _state: &SessionState) -> Result<Effect> {
    Ok(Effect {
        next: None,
        outcome: Outcome::Terminate {
            farewell: req.persona().voice().farewell.to_string(),
        },
    })
}

pub fn wyoming(req: &Request<'_>, _state: &SessionState) -> Result<Effect> {
    Ok(Effect::reply(req.persona().wyoming_info()))
}

pub fn identity(req: &Request<'_>, state: &SessionState) -> Result<Effect> {
    Ok(Effect::reply(req.persona().identity(state.power())))
}

/// Numbered listing built from the route table, so it always matches
/// what the interpreter will actually dispatch.
fn help_text(req: &Request<'_>) -> String {
    let lines: Vec<String> = req
        .routes
        .iter()
        .flat_map(|r| r.help.iter())
        .filter(|e| !e.needs_decrease || req.config.allow_decrease)
        .enumerate()
        .map(|(i, e)| format!("{}. {} - {}", i + 1, e.usage, e.description))
        .collect();
    format!("{}\n{}", req.persona().voice().help_heading, lines.join("\n"))
}
