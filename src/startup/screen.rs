//! First-screen decision ("remember me").

use std::fmt;

use crate::prefs::SessionPrefs;

/// Where the app opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartScreen {
    Login,
    Home { username: String },
}

impl StartScreen {
    /// Open on home only when the flags say logged in and a name was saved.
    pub fn from_session(prefs: &SessionPrefs) -> Self {
        match prefs.remembered_user() {
            Some(username) => StartScreen::Home {
                username: username.to_string(),
            },
            None => StartScreen::Login,
        }
    }
}

impl fmt::Display for StartScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartScreen::Login => write!(f, "login"),
            StartScreen::Home { username } => write!(f, "home ({})", username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remembered_user_opens_home() {
        let screen = StartScreen::from_session(&SessionPrefs::logged_in("maria"));
        assert_eq!(
            screen,
            StartScreen::Home {
                username: "maria".to_string()
            }
        );
        assert_eq!(screen.to_string(), "home (maria)");
    }

    #[test]
    fn test_missing_or_partial_flags_open_login() {
        assert_eq!(
            StartScreen::from_session(&SessionPrefs::default()),
            StartScreen::Login
        );

        let no_name = SessionPrefs {
            is_logged_in: true,
            username: None,
        };
        assert_eq!(StartScreen::from_session(&no_name), StartScreen::Login);
        assert_eq!(StartScreen::Login.to_string(), "login");
    }
}
