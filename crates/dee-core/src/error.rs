use std::fmt;

/// Rejected ledger mutation. The previous level stays in force.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    NonFiniteFactor(f64),
    NonFiniteLevel { from: f64, factor: f64 },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NonFiniteFactor(factor) => {
                write!(f, "power factor {factor:?} is not a finite number")
            }
            LedgerError::NonFiniteLevel { from, factor } => {
                write!(f, "scaling power {from:?} by {factor:?} overflowed")
            }
        }
    }
}

impl std::error::Error for LedgerError {}

#[derive(Debug)]
pub enum ConfigError {
    Toml(toml::de::Error),
    EmptyWordList(&'static str),
    BlankWord(&'static str),
    InvalidFactor { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Toml(e) => write!(f, "invalid TOML: {e}"),
            ConfigError::EmptyWordList(field) => write!(f, "{field} must not be empty"),
            ConfigError::BlankWord(field) => write!(f, "{field} contains a blank entry"),
            ConfigError::InvalidFactor { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Toml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

#[derive(Debug)]
pub enum DeeError {
    Ledger(LedgerError),
    Config(ConfigError),
}

impl fmt::Display for DeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeeError::Ledger(e) => write!(f, "ledger error: {e}"),
            DeeError::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for DeeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeeError::Ledger(e) => Some(e),
            DeeError::Config(e) => Some(e),
        }
    }
}

impl From<LedgerError> for DeeError {
    fn from(e: LedgerError) -> Self {
        DeeError::Ledger(e)
    }
}

impl From<ConfigError> for DeeError {
    fn from(e: ConfigError) -> Self {
        DeeError::Config(e)
    }
}

impl From<toml::de::Error> for DeeError {
    fn from(e: toml::de::Error) -> Self {
        DeeError::Config(ConfigError::Toml(e))
    }
}

pub type Result<T> = std::result::Result<T, DeeError>;
