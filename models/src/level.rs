use serde::Deserialize;

/// One-based skill level. Level 1 selects the first column of an upgrade row.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SkillLevel(pub u8);

impl SkillLevel {
    pub fn column(&self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBounds {
    pub min: u8,
    pub max: u8,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

impl LevelBounds {
    pub fn level(&self, value: u8) -> anyhow::Result<SkillLevel> {
        if value < self.min || value > self.max {
            anyhow::bail!("level {value} outside {}..={}", self.min, self.max);
        }
        Ok(SkillLevel(value))
    }

    pub fn clamp(&self, value: i32) -> SkillLevel {
        SkillLevel(value.clamp(self.min as i32, self.max as i32) as u8)
    }
}

/// Per-skill levels of one officer in a formation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLevels {
    levels: Vec<SkillLevel>,
    bounds: LevelBounds,
}

impl SkillLevels {
    pub fn new(total_skills: usize, bounds: LevelBounds) -> Self {
        Self {
            levels: vec![SkillLevel(bounds.min); total_skills],
            bounds,
        }
    }

    pub fn get(&self, index: usize) -> Option<SkillLevel> {
        self.levels.get(index).copied()
    }

    pub fn set(&mut self, index: usize, value: u8) -> anyhow::Result<()> {
        let level = self.bounds.level(value)?;
        let slot = self
            .levels
            .get_mut(index)
            .ok_or(anyhow::anyhow!("no skill at index {index}"))?;
        *slot = level;
        Ok(())
    }

    /// Moves a skill up or down, saturating at the level bounds.
    pub fn adjust(&mut self, index: usize, delta: i32) -> Option<SkillLevel> {
        let bounds = self.bounds;
        let slot = self.levels.get_mut(index)?;
        *slot = bounds.clamp(slot.0 as i32 + delta);
        Some(*slot)
    }

    /// True once every skill ahead of `revival_index` is maxed out.
    pub fn revival_available(&self, revival_index: usize) -> bool {
        (0..revival_index).all(|i| self.get(i) == Some(SkillLevel(self.bounds.max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(5, false)]
    #[case(6, true)]
    fn level_validation(#[case] value: u8, #[case] rejected: bool) {
        assert_eq!(LevelBounds::default().level(value).is_err(), rejected);
    }

    #[rstest]
    fn column_is_zero_based() {
        assert_eq!(SkillLevel(1).column(), Some(0));
        assert_eq!(SkillLevel(5).column(), Some(4));
        assert_eq!(SkillLevel(0).column(), None);
    }

    #[rstest]
    fn new_levels_start_at_minimum() {
        let levels = SkillLevels::new(5, LevelBounds::default());
        assert!((0..5).all(|i| levels.get(i) == Some(SkillLevel(1))));
        assert_eq!(levels.get(5), None);
    }

    #[rstest]
    #[case(1, 2)]
    #[case(-3, 1)]
    #[case(10, 5)]
    fn adjust_saturates(#[case] delta: i32, #[case] expected: u8) {
        let mut levels = SkillLevels::new(5, LevelBounds::default());
        assert_eq!(levels.adjust(0, delta), Some(SkillLevel(expected)));
    }

    #[rstest]
    fn revival_needs_all_prior_skills_maxed() {
        let mut levels = SkillLevels::new(5, LevelBounds::default());
        assert!(!levels.revival_available(4));
        for i in 0..3 {
            levels.set(i, 5).unwrap();
        }
        assert!(!levels.revival_available(4));
        levels.set(3, 5).unwrap();
        assert!(levels.revival_available(4));
    }

    #[rstest]
    fn set_rejects_out_of_range() {
        let mut levels = SkillLevels::new(5, LevelBounds::default());
        assert!(levels.set(0, 9).is_err());
        assert!(levels.set(7, 2).is_err());
    }
}
