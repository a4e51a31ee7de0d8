use crate::models::{LocalState, Mood, MoodTheme, Preferences, PreferencesUpdate, Theme};

pub fn mood_theme_for(mood: &str) -> MoodTheme {
    match Mood::parse(mood) {
        Some(Mood::Amazing) => MoodTheme::Joy,
        Some(Mood::Good) => MoodTheme::Peaceful,
        Some(Mood::Bad) => MoodTheme::Sad,
        Some(Mood::Terrible) => MoodTheme::Angry,
        Some(Mood::Okay) | None => MoodTheme::Calm,
    }
}

pub fn toggled(theme: Theme) -> Theme {
    match theme {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    }
}

pub fn current(state: &LocalState) -> Preferences {
    Preferences {
        theme: state.theme,
        mood_theme: state.mood_theme,
    }
}

/// An explicit `moodTheme` wins over one derived from `mood`.
pub fn apply_update(state: &mut LocalState, update: &PreferencesUpdate) -> Preferences {
    if let Some(theme) = update.theme {
        state.theme = theme;
    }
    if let Some(mood) = update.mood.as_deref() {
        state.mood_theme = mood_theme_for(mood);
    }
    if let Some(mood_theme) = update.mood_theme {
        state.mood_theme = mood_theme;
    }
    current(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moods_map_to_themes() {
        assert_eq!(mood_theme_for("amazing"), MoodTheme::Joy);
        assert_eq!(mood_theme_for("terrible"), MoodTheme::Angry);
        assert_eq!(mood_theme_for("whatever"), MoodTheme::Calm);
    }

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(toggled(Theme::Light), Theme::Dark);
        assert_eq!(toggled(toggled(Theme::Light)), Theme::Light);
    }

    #[test]
    fn update_prefers_explicit_mood_theme() {
        let mut state = LocalState::default();
        let prefs = apply_update(
            &mut state,
            &PreferencesUpdate {
                theme: Some(Theme::Dark),
                mood_theme: Some(MoodTheme::Sad),
                mood: Some("amazing".to_string()),
            },
        );
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.mood_theme, MoodTheme::Sad);
        assert_eq!(state.mood_theme, MoodTheme::Sad);
    }
}
