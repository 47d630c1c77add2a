use serde::Deserialize;

/// A named officer ability. `data[0]` is the base text, the remaining
/// entries carry the upgrade preview block and revival variants.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub data: Vec<String>,
}

impl Skill {
    pub fn new<S: ToString>(name: S, data: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            data: data.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn base_text(&self) -> Option<&str> {
        self.data.first().map(String::as_str)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Officer {
    pub name: String,
    #[serde(default, rename = "jn")]
    pub skills: Vec<Skill>,
}

impl Officer {
    pub fn skill(&self, name: &str) -> anyhow::Result<&Skill> {
        self.skills
            .iter()
            .find(|s| s.name == name)
            .ok_or(anyhow::anyhow!("officer {} has no skill '{name}'", self.name))
    }
}
