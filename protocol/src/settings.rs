use std::collections::BTreeMap;

use learnly_core::{Difficulty, MatchSession, MathQuiz};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::MiniApp;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Malformed settings document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

fn enabled_by_default() -> bool {
    true
}

fn lenient_difficulty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Difficulty, D::Error> {
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().map(Difficulty::from_label).unwrap_or_default())
}

/// One mini-app's parental settings. Missing fields mean enabled on easy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Difficulty,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            difficulty: Difficulty::Easy,
        }
    }
}

/// What the host does when a mini-app is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionStart {
    /// Turned off by the parent, the host closes the screen.
    Disabled,
    Play(Difficulty),
}

impl AppSettings {
    pub const fn session_start(&self) -> SessionStart {
        if self.enabled {
            SessionStart::Play(self.difficulty)
        } else {
            SessionStart::Disabled
        }
    }

    pub fn match_session(&self) -> Option<MatchSession> {
        match self.session_start() {
            SessionStart::Play(difficulty) => Some(MatchSession::for_difficulty(difficulty)),
            SessionStart::Disabled => None,
        }
    }

    pub fn math_quiz(&self) -> Option<MathQuiz> {
        match self.session_start() {
            SessionStart::Play(difficulty) => Some(MathQuiz::new(difficulty)),
            SessionStart::Disabled => None,
        }
    }
}

/// Every mini-app entry for one child, keyed by [`MiniApp::key`].
///
/// Entries are read one by one: a malformed entry is dropped and reads as the default, the others still apply.
/// Unknown keys are kept but ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChildSettings {
    apps: BTreeMap<String, AppSettings>,
}

impl<'de> Deserialize<'de> for ChildSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut apps = BTreeMap::new();
        for (key, value) in raw {
            match serde_json::from_value::<AppSettings>(value) {
                Ok(settings) => {
                    apps.insert(key, settings);
                }
                Err(err) => log::warn!("Malformed settings for {:?}, using default: {}", key, err),
            }
        }
        Ok(Self { apps })
    }
}

impl ChildSettings {
    /// Fails only when the document itself is not a JSON object of entries.
    pub fn parse(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        for key in settings.apps.keys() {
            if MiniApp::from_key(key).is_none() {
                log::debug!("Ignoring settings for unknown mini-app {:?}", key);
            }
        }
        Ok(settings)
    }

    /// Parses `json`, falling back to defaults for every app when the document is malformed.
    pub fn load_or_default(json: &str) -> Self {
        match Self::parse(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to load app settings, using default: {}", err);
                Self::default()
            }
        }
    }

    pub fn app(&self, app: MiniApp) -> AppSettings {
        self.apps.get(app.key()).copied().unwrap_or_default()
    }

    pub fn set(&mut self, app: MiniApp, settings: AppSettings) {
        self.apps.insert(app.key().to_owned(), settings);
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
