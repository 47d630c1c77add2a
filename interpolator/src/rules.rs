use regex::Regex;

/// A labelled rewrite: every match of `pattern` is replaced by `template`
/// after `{value}` is swapped for the level value. Templates may use `${n}`
/// capture references.
#[derive(Debug)]
pub struct ReplacementRule {
    pub pattern: Regex,
    pub template: &'static str,
}

impl ReplacementRule {
    fn new(pattern: &str, template: &'static str) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
            template,
        }
    }

    pub fn apply(&self, text: &str, value: &str) -> String {
        let replacement = self.template.replace("{value}", &value.replace('$', "$$"));
        self.pattern
            .replace_all(text, replacement.as_str())
            .into_owned()
    }
}

#[derive(Debug)]
pub struct RuleFamily {
    pub key: &'static str,
    pub rules: Vec<ReplacementRule>,
}

impl RuleFamily {
    /// Runs every rule of the family in order over the running text.
    pub fn apply(&self, text: &str, value: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(&text, value))
    }
}

const NUMBER: &str = r"([0-9]+(?:\.[0-9]+)?%?)";

fn prefixed(prefix: &str) -> String {
    format!("({prefix}){NUMBER}")
}

lazy_static::lazy_static! {
    pub static ref REPLACEMENT_RULES: Vec<RuleFamily> = vec![
        RuleFamily {
            key: "Dmg Coefficient",
            rules: vec![
                ReplacementRule::new(r"\(Dmg Coefficient\s*[0-9]+(?:\.[0-9]+)?\)", "(Dmg Coefficient {value})"),
                ReplacementRule::new(r"Dmg Coefficient\s*[0-9]+(?:\.[0-9]+)?", "Dmg Coefficient {value}"),
            ],
        },
        RuleFamily {
            key: "Healing Coefficient",
            rules: vec![
                ReplacementRule::new(r"\(Healing Coefficient\s*[0-9]+(?:\.[0-9]+)?\)", "(Healing Coefficient {value})"),
                ReplacementRule::new(r"Healing Coefficient\s*[0-9]+(?:\.[0-9]+)?", "Healing Coefficient {value}"),
            ],
        },
        RuleFamily {
            key: "Dmg Resist",
            rules: vec![
                ReplacementRule::new(&prefixed(r"Dmg Resist by\s*"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Blast Dmg Resist by\s*"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Tank Dmg Resist\+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Dmg Resist\s*\+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Additional Tank Dmg Resist\+"), "${1}{value}"),
            ],
        },
        RuleFamily {
            key: "Load Speed",
            rules: vec![
                ReplacementRule::new(&prefixed(r"Load Speed\s+by\s+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Load Speed\s+Buff:\s*"), "${1}{value}"),
                ReplacementRule::new(&format!(r"(Load Speed)(\+){NUMBER}"), "${1}+{value}"),
            ],
        },
        RuleFamily {
            key: "Attack Dmg",
            rules: vec![
                ReplacementRule::new(&prefixed(r"Attack Dmg of his Troop by\s*"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Attack Dmg by\s*"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Attack Dmg\s*\+"), "${1}{value}"),
            ],
        },
        RuleFamily {
            key: "Firepower",
            rules: vec![
                ReplacementRule::new(
                    &prefixed(r"Firepower of all friendly Ground Forces within [0-9]+ Map Grids by\s*"),
                    "${1}{value}",
                ),
                ReplacementRule::new(&prefixed(r"Firepower by\s*"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Troop Firepower\s*\+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Firepower\s*\+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Artillery Firepower\s*\+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Infantry Firepower\s*\+"), "${1}{value}"),
            ],
        },
        RuleFamily {
            key: "Durability",
            rules: vec![
                ReplacementRule::new(&prefixed(r"Tank Durability by\s*"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Durability\s*\+"), "${1}{value}"),
            ],
        },
        RuleFamily {
            key: "Kill Radius",
            rules: vec![
                ReplacementRule::new(&prefixed(r"Artillery Kill Radius\s*\+"), "${1}{value}"),
                ReplacementRule::new(&prefixed(r"Kill Radius\s*\+"), "${1}{value}"),
            ],
        },
    ];
}

/// First family whose key occurs in `label`.
pub fn rule_family(label: &str) -> Option<&'static RuleFamily> {
    REPLACEMENT_RULES.iter().find(|family| label.contains(family.key))
}
