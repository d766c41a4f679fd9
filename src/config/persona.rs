//! Judge persona configuration structures

use serde::Deserialize;

/// Tone a persona rules in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Witty,
    Dramatic,
    Upbeat,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Formal, Tone::Witty, Tone::Dramatic, Tone::Upbeat];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Witty => "witty",
            Tone::Dramatic => "dramatic",
            Tone::Upbeat => "upbeat",
        }
    }
}

/// Judge persona
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonaConfig {
    pub name: String,
    pub tone: Tone,
    /// Relative draw weight when the court is convened
    pub weight: f64,
    /// Opening line of every ruling delivered in this persona
    pub prefix: String,
}

impl PersonaConfig {
    pub fn new(name: &str, tone: Tone, weight: f64, prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            tone,
            weight,
            prefix: prefix.to_string(),
        }
    }
}

/// Built-in personas of Judge AstraLex
pub fn default_personas() -> Vec<PersonaConfig> {
    vec![
        PersonaConfig::new("Stern", Tone::Formal, 0.4, "Hear ye, the Court decrees:"),
        PersonaConfig::new("Sarcastic", Tone::Witty, 0.3, "Oh, really? The Court sighs:"),
        PersonaConfig::new("Poetic", Tone::Dramatic, 0.2, "In the stars’ grand verse:"),
        PersonaConfig::new("Cheerful", Tone::Upbeat, 0.1, "Huzzah! The Court proclaims:"),
    ]
}
