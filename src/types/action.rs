use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Read, Action::Create, Action::Update, Action::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// The status code a handler answers with once the action was allowed and
    /// performed.
    pub fn success_code(self) -> u16 {
        match self {
            Action::Read | Action::Update => 200,
            Action::Create => 201,
            Action::Delete => 204,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    /// Accepts the action names and the HTTP methods handlers usually map
    /// them from.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" | "get" | "head" | "list" => Ok(Action::Read),
            "create" | "post" => Ok(Action::Create),
            "update" | "put" | "patch" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            _ => Err(format!("unknown action '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!("read".parse::<Action>().unwrap(), Action::Read);
        assert_eq!("GET".parse::<Action>().unwrap(), Action::Read);
        assert_eq!("post".parse::<Action>().unwrap(), Action::Create);
        assert_eq!("patch".parse::<Action>().unwrap(), Action::Update);
        assert_eq!("Delete".parse::<Action>().unwrap(), Action::Delete);

        assert!("publish".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_success_code() {
        assert_eq!(Action::Read.success_code(), 200);
        assert_eq!(Action::Create.success_code(), 201);
        assert_eq!(Action::Update.success_code(), 200);
        assert_eq!(Action::Delete.success_code(), 204);
    }
}
