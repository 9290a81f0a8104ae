use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of a counter control, shared by every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlId {
    Decrement,
    Increment,
}

impl ControlId {
    pub const ALL: [ControlId; 2] = [ControlId::Decrement, ControlId::Increment];

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::Decrement => "decrement-button",
            ControlId::Increment => "increment-button",
        }
    }

    /// Text shown on the control.
    pub fn caption(&self) -> &'static str {
        match self {
            ControlId::Decrement => "-",
            ControlId::Increment => "+",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown control identifier '{0}'")]
pub struct UnknownControl(pub String);

impl FromStr for ControlId {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

/// A user-activatable element carrying free-form `data-*` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    id: ControlId,
    data: BTreeMap<String, String>,
}

impl Control {
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            data: BTreeMap::new(),
        }
    }

    pub fn decrement() -> Self {
        Self::new(ControlId::Decrement)
    }

    pub fn increment() -> Self {
        Self::new(ControlId::Increment)
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Activation handler. Receives the control that triggered the event.
pub type Handler = Rc<dyn Fn(&Control)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for id in ControlId::ALL {
            assert_eq!(id.as_str().parse::<ControlId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "reset-button".parse::<ControlId>().unwrap_err();
        assert_eq!(err, UnknownControl("reset-button".to_string()));
        assert_eq!(err.to_string(), "unknown control identifier 'reset-button'");
    }

    #[test]
    fn data_attributes_are_looked_up_by_key() {
        let control = Control::increment().with_data("delta", "+1");
        assert_eq!(control.data("delta"), Some("+1"));
        assert_eq!(control.data("missing"), None);
        assert_eq!(control.id(), ControlId::Increment);
    }
}
