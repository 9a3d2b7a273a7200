use serde::{Deserialize, Serialize};
use std::fmt;

/// The two pages the shell can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageRoute {
    Landing,
    NotFound,
}

impl fmt::Display for PageRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRoute::Landing => write!(f, "landing"),
            PageRoute::NotFound => write!(f, "not-found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Starting,
    Running,
    ShuttingDown,
}
