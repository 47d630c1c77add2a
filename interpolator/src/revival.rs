use crate::statics::{AWAKENED_ICON, LOCKED_ICON, REVIVAL_LOCKED_MARKER, REVIVAL_UNLOCKED_MARKER};

/// Which variant of the revival booster text to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevivalState {
    Locked,
    Awakened,
}

impl RevivalState {
    pub fn from_available(available: bool) -> Self {
        if available {
            RevivalState::Awakened
        } else {
            RevivalState::Locked
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            RevivalState::Locked => REVIVAL_LOCKED_MARKER,
            RevivalState::Awakened => REVIVAL_UNLOCKED_MARKER,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RevivalState::Locked => format!("{LOCKED_ICON} LOCKED:"),
            RevivalState::Awakened => format!("{AWAKENED_ICON} AWAKENED:"),
        }
    }

    /// Keeps the description entries carrying this state's marker, with the
    /// first marker in each swapped for the display label.
    pub fn select<S: AsRef<str>>(&self, description: &[S]) -> Vec<String> {
        let (marker, label) = (self.marker(), self.label());
        description
            .iter()
            .map(|entry| entry.as_ref())
            .filter(|entry| entry.contains(marker))
            .map(|entry| entry.replacen(marker, &label, 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DESCRIPTION: [&str; 4] = [
        "Revives the troop once per battle.",
        "REVIVAL BOOSTER LOCKED: Max all skills to revive.",
        "REVIVAL BOOSTER UNLOCKED: Revive with 30% HP.",
        "REVIVAL BOOSTER UNLOCKED: Gains 10% Firepower after revival.",
    ];

    #[rstest]
    fn locked_variant() {
        assert_eq!(
            RevivalState::Locked.select(&DESCRIPTION),
            vec!["🔒 LOCKED: Max all skills to revive.".to_string()]
        );
    }

    #[rstest]
    fn awakened_variants_keep_order() {
        assert_eq!(
            RevivalState::Awakened.select(&DESCRIPTION),
            vec![
                "🌟 AWAKENED: Revive with 30% HP.".to_string(),
                "🌟 AWAKENED: Gains 10% Firepower after revival.".to_string(),
            ]
        );
    }

    #[rstest]
    #[case(true, RevivalState::Awakened)]
    #[case(false, RevivalState::Locked)]
    fn state_from_availability(#[case] available: bool, #[case] state: RevivalState) {
        assert_eq!(RevivalState::from_available(available), state);
    }

    #[rstest]
    fn unmarked_description_selects_nothing() {
        assert!(RevivalState::Awakened.select(&["plain text"]).is_empty());
    }
}
