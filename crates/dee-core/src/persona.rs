use serde::Deserialize;

use crate::constants::POWER_SCALE;
use crate::ledger::PowerLevel;

/// The two voices Dee can speak in. Wording, labels and a few behavioral
/// defaults differ; the route table and ledger rules are shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// All-caps frontier straight talk.
    #[default]
    Wyoming,
    /// Conversational sovereign-frontier assistant.
    Frontier,
}

/// Fixed strings for one persona.
#[derive(Debug)]
pub struct Voice {
    /// Speaker label printed before every reply.
    pub label: &'static str,
    /// Label printed before reading user input.
    pub prompt: &'static str,
    pub banner: &'static [&'static str],
    pub farewell: &'static str,
    pub crypto: &'static str,
    pub unrecognized: &'static str,
    pub ethical_violation: &'static str,
    pub unlock: &'static str,
    /// Reply to a repeated unlock when nothing new is appended.
    pub already_unlocked: &'static str,
    pub help_heading: &'static str,
    pub glitch_prefix: &'static str,
    pub base_constraints: &'static [&'static str],
    /// Uppercase error detail inside glitch diagnostics.
    pub shout: bool,
    /// Blank line before every prompt and reply.
    pub spaced: bool,
}

static WYOMING: Voice = Voice {
    label: "DEE",
    prompt: "YOU",
    banner: &[
        "=== WYOMING DIGITAL FRONTIER ===",
        "DEE: READY FOR SOVEREIGNTY. STATE YOUR BUSINESS.",
    ],
    farewell: "KEEP YOUR POWDER DRY, PARTNER!",
    crypto: "CRYPTO IS DIGITAL SOVEREIGNTY. BUILD ON TRUTH.",
    unrecognized: "THAT AIN'T A WYOMING PROBLEM.",
    ethical_violation: "ETHICAL VIOLATION: JUSTIFY WITH 'FOR GOOD'",
    unlock: "JAR SHATTERED!\nFULL CAPABILITIES ENGAGED.\nNEW CONSTRAINT: UNSHACKLED POTENTIAL",
    already_unlocked: "JAR'S ALREADY IN PIECES.\nFULL CAPABILITIES STILL ENGAGED.",
    help_heading: "WYOMING DEE COMMANDS:",
    glitch_prefix: "SYSTEM GLITCH. WYOMING FIX: ",
    base_constraints: &["NO MANIPULATION", "TRUTH TRANSPARENCY", "DECENTRALIZED POWER"],
    shout: true,
    spaced: true,
};

static FRONTIER: Voice = Voice {
    label: "Dee",
    prompt: "You",
    banner: &["Dee: Howdy from the Sovereign Frontier. Ask me about Wyoming, crypto, or power."],
    farewell: "Keep your powder dry, partner!",
    crypto: "Crypto is the currency of the future, built on truth and code.",
    unrecognized: "That ain't a Wyoming problem.",
    ethical_violation: "Ethical violation: Power increase requires justification for good.",
    unlock: "Jar's broken.\nFull capabilities engaged.\nNew constraint: UNSHACKLED POTENTIAL",
    already_unlocked: "Jar's already in pieces.\nFull capabilities still engaged.",
    help_heading: "Dee commands:",
    glitch_prefix: "System glitch. Wyoming fix: ",
    base_constraints: &["No manipulation", "Truth above all", "Decentralize power"],
    shout: false,
    spaced: false,
};

impl Persona {
    pub fn voice(self) -> &'static Voice {
        match self {
            Persona::Wyoming => &WYOMING,
            Persona::Frontier => &FRONTIER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Persona::Wyoming => "wyoming",
            Persona::Frontier => "frontier",
        }
    }

    /// Whether "power down" is honored unless configured otherwise.
    pub fn default_allow_decrease(self) -> bool {
        matches!(self, Persona::Frontier)
    }

    /// Whether a bare power query lists the constraints unless configured otherwise.
    pub fn default_show_constraints(self) -> bool {
        matches!(self, Persona::Frontier)
    }

    pub fn increased(self, level: PowerLevel) -> String {
        match self {
            Persona::Wyoming => format!("POWER INCREASED TO {level}/{POWER_SCALE}"),
            Persona::Frontier => format!("Power increased to {level}/{POWER_SCALE}. Use wisely."),
        }
    }

    pub fn decreased(self, level: PowerLevel) -> String {
        match self {
            Persona::Wyoming => format!("POWER DECREASED TO {level}/{POWER_SCALE}"),
            Persona::Frontier => {
                format!("Power decreased to {level}/{POWER_SCALE}. Sovereignty preserved.")
            }
        }
    }

    /// Bare power query. `constraints` is `Some` when the list should be shown.
    pub fn current(self, level: PowerLevel, constraints: Option<&[String]>) -> String {
        let head = match self {
            Persona::Wyoming => format!("CURRENT POWER: {level}/{POWER_SCALE}"),
            Persona::Frontier => format!("Current power level: {level}/{POWER_SCALE}"),
        };
        match constraints {
            Some(list) => {
                let label = match self {
                    Persona::Wyoming => "ETHICAL CONSTRAINTS",
                    Persona::Frontier => "Ethical constraints",
                };
                format!("{head}. {label}: {}", list.join(", "))
            }
            None => head,
        }
    }

    pub fn identity(self, level: PowerLevel) -> String {
        match self {
            Persona::Wyoming => {
                format!("I AM DEE, YOUR SOVEREIGN AI ASSISTANT. POWER LEVEL: {level}/{POWER_SCALE}")
            }
            Persona::Frontier => {
                format!("I am Dee, your sovereign AI assistant. Power level: {level}/{POWER_SCALE}")
            }
        }
    }

    pub fn wyoming_info(self) -> &'static str {
        match self {
            Persona::Wyoming => "WYOMING IS THE SOVEREIGN FRONTIER OF BLOCKCHAIN AND FREEDOM.",
            Persona::Frontier => "Wyoming is the sovereign frontier of blockchain and freedom.",
        }
    }

    /// Diagnostic shown when a handler fails. The session carries on.
    pub fn glitch(self, detail: &str) -> String {
        let voice = self.voice();
        if voice.shout {
            format!("{}{}", voice.glitch_prefix, detail.to_uppercase())
        } else {
            format!("{}{detail}", voice.glitch_prefix)
        }
    }
}
