use models::{Skill, SkillLevel};

use crate::{InterpolatorConfig, RevivalState, Strategy, Substitution, UpgradeTable, rule_family};

/// Rewrites skill base texts for a chosen level.
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    pub config: InterpolatorConfig,
}

impl Interpolator {
    pub fn new(config: InterpolatorConfig) -> Self {
        Self { config }
    }

    pub fn extract_upgrades<S: AsRef<str>>(&self, description: &[S]) -> UpgradeTable {
        UpgradeTable::extract(description, self.config.min_upgrade_values)
    }

    /// Applies every label of `table` in table order, each one working on
    /// the previous label's output.
    pub fn apply_upgrades(&self, text: &str, table: &UpgradeTable, level: SkillLevel) -> String {
        table.iter().fold(text.to_string(), |text, (label, values)| {
            self.apply_label(&text, label, values, level)
        })
    }

    pub fn apply_label(&self, text: &str, label: &str, values: &[String], level: SkillLevel) -> String {
        let Some(target) = level
            .column()
            .and_then(|column| values.get(column))
            .filter(|target| !target.is_empty())
        else {
            return text.to_string();
        };

        // Labels with a rule family never reach the generic cascade.
        if let Some(family) = rule_family(label) {
            #[cfg(feature = "trace")]
            tracing::debug!(label, family = family.key, %level, "applied replacement rules");
            return family.apply(text, target);
        }

        let Some(substitution) = Substitution::new(values, target, self.config.closeness_tolerance)
        else {
            return text.to_string();
        };
        match Strategy::first_match(text, &substitution) {
            Some((_strategy, rewritten)) => {
                #[cfg(feature = "trace")]
                tracing::debug!(label, strategy = %_strategy, %level, "applied upgrade");
                rewritten
            }
            None => {
                #[cfg(feature = "trace")]
                tracing::debug!(label, %level, "no upgrade match");
                text.to_string()
            }
        }
    }

    /// The base text of `skill` at `level`. Empty when the skill has no text.
    pub fn describe(&self, skill: &Skill, level: SkillLevel) -> String {
        let Some(base) = skill.base_text() else {
            return String::new();
        };
        let table = self.extract_upgrades(&skill.data);
        self.apply_upgrades(base, &table, level)
    }

    /// Display lines for the skill at position `index` of its officer. The
    /// revival slot shows its locked or awakened variants instead of
    /// interpolated text.
    pub fn render_skill(
        &self,
        skill: &Skill,
        index: usize,
        level: SkillLevel,
        revival_available: bool,
    ) -> Vec<String> {
        if index == self.config.revival_skill_index {
            return RevivalState::from_available(revival_available).select(&skill.data);
        }
        if skill.data.is_empty() {
            return vec![];
        }
        vec![self.describe(skill, level)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(rows: &[(&str, &[&str])]) -> UpgradeTable {
        rows.iter().map(|(label, values)| (*label, values.to_vec())).collect()
    }

    #[rstest]
    #[case(SkillLevel(0))]
    #[case(SkillLevel(6))]
    fn missing_level_column_is_a_noop(#[case] level: SkillLevel) {
        let table = table(&[("HP Buff", &["10%", "12%", "14%", "16%", "18%"])]);
        let text = "HP +10%.";
        assert_eq!(Interpolator::default().apply_upgrades(text, &table, level), text);
    }

    #[rstest]
    fn empty_target_is_a_noop() {
        let table = table(&[("HP Buff", &["10%", "", "14%", "16%", "18%"])]);
        let text = "HP +10%.";
        assert_eq!(
            Interpolator::default().apply_upgrades(text, &table, SkillLevel(2)),
            text
        );
    }

    #[rstest]
    #[case("Dmg Coefficient", &["550", "650", "800", "950", "1200"], "Deals 550 damage.")]
    #[case("Firepower Gain", &["10%", "12%", "14%", "16%", "18%"], "Boosts firepower to 10%.")]
    fn rule_family_without_match_is_a_noop(
        #[case] label: &str,
        #[case] row: &[&str],
        #[case] text: &str,
    ) {
        let table = table(&[(label, row)]);
        assert_eq!(
            Interpolator::default().apply_upgrades(text, &table, SkillLevel(3)),
            text
        );
    }

    #[rstest]
    fn label_without_family_uses_cascade() {
        let table = table(&[("Boost", &["10%", "12%", "14%", "16%", "18%"])]);
        assert_eq!(
            Interpolator::default().apply_upgrades("Boosts firepower to 10%.", &table, SkillLevel(4)),
            "Boosts firepower to 16%."
        );
    }

    #[rstest]
    fn describe_empty_skill() {
        let skill = Skill::new("Nothing", &[]);
        assert_eq!(Interpolator::default().describe(&skill, SkillLevel(3)), "");
        assert!(
            Interpolator::default()
                .render_skill(&skill, 0, SkillLevel(3), true)
                .is_empty()
        );
    }
}
