//! Explicit per-user session state.
//!
//! A [`Session`] is created once per invocation and passed to whatever needs
//! to know who is scanning. The only thing it currently decides is whether
//! the premium detail (risk level, feature breakdown, report) is shown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub username: String,
    pub tier: Tier,
}

impl Session {
    /// Starts a session for `username`; premium if it is listed in `premium_users`.
    pub fn start(username: impl Into<String>, premium_users: &[String]) -> Self {
        let username = username.into();
        let tier = if premium_users.iter().any(|u| *u == username) {
            Tier::Premium
        } else {
            Tier::Free
        };
        tracing::debug!(username = %username, ?tier, "session started");
        Self { username, tier }
    }

    pub fn is_premium(&self) -> bool {
        self.tier == Tier::Premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_user() {
        let premium = vec!["premium_user".to_string()];
        assert!(Session::start("premium_user", &premium).is_premium());
        assert_eq!(Session::start("alice", &premium).tier, Tier::Free);
    }

    #[test]
    fn test_match_is_exact() {
        let premium = vec!["premium_user".to_string()];
        assert!(!Session::start("Premium_User", &premium).is_premium());
        assert!(!Session::start("premium_user ", &premium).is_premium());
    }
}
