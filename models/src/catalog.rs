use crate::{Officer, Skill};

/// Officer data as shipped in `officer.json`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub officers: Vec<Officer>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let officers: Vec<Officer> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("invalid officer json: {e}"))?;
        Ok(Self { officers })
    }

    pub fn officer(&self, name: &str) -> anyhow::Result<&Officer> {
        self.officers
            .iter()
            .find(|o| o.name == name)
            .ok_or(anyhow::anyhow!("no officer named '{name}'"))
    }

    pub fn skill(&self, officer: &str, skill: &str) -> anyhow::Result<&Skill> {
        self.officer(officer)?.skill(skill)
    }
}
