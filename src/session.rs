//! Explicit user session, passed to whatever needs credentials.
//!
//! Login and logout are pure transitions consuming the old value and
//! returning the next one; there is no ambient session state and no
//! persistence. The backend issues and validates tokens; this type only
//! carries them.

use chrono::NaiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated {
        id: Uuid,
        email: String,
        token: String,
        issued_at: NaiveDateTime,
    },
}

impl Session {
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Attach an identity and a backend-issued token, returning the
    /// authenticated session. Logging in over an existing session
    /// replaces it.
    pub fn login(self, email: &str, token: &str, issued_at: NaiveDateTime) -> Self {
        Self::Authenticated {
            id: Uuid::new_v4(),
            email: email.to_string(),
            token: token.to_string(),
            issued_at,
        }
    }

    /// Drop the identity, returning the anonymous session.
    pub fn logout(self) -> Self {
        Self::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Anonymous => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email, .. } => Some(email),
            Self::Anonymous => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn eight_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn anonymous_has_no_identity() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.bearer_token().is_none());
        assert!(session.email().is_none());
    }

    #[test]
    fn login_returns_an_authenticated_session() {
        let session = Session::anonymous().login("reception@clinic.test", "tok-123", eight_am());
        assert!(session.is_authenticated());
        assert_eq!(session.email(), Some("reception@clinic.test"));
        assert_eq!(session.bearer_token(), Some("tok-123"));
    }

    #[test]
    fn logout_returns_anonymous() {
        let session = Session::anonymous()
            .login("reception@clinic.test", "tok-123", eight_am())
            .logout();
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn relogin_replaces_the_identity() {
        let session = Session::anonymous()
            .login("reception@clinic.test", "tok-123", eight_am())
            .login("admin@clinic.test", "tok-456", eight_am());
        assert_eq!(session.email(), Some("admin@clinic.test"));
        assert_eq!(session.bearer_token(), Some("tok-456"));
    }

    #[test]
    fn sessions_are_plain_values() {
        let a = Session::anonymous();
        let b = a.clone();
        assert_eq!(a, b);
        // Transitions on the clone do not touch the original.
        let _c = b.login("reception@clinic.test", "tok-123", eight_am());
        assert_eq!(a, Session::Anonymous);
    }
}
