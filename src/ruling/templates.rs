//! Ruling templates keyed by (category, tone)

use crate::config::{Category, Tone};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Pieces a template is filled with
#[derive(Debug, Clone, Copy)]
pub struct RulingParts<'a> {
    pub prefix: &'a str,
    pub article: &'a str,
    pub category: Category,
    pub penalty: &'a str,
}

/// Produces the body of a ruling, up to and including the penalty sentence
pub type BodyFn = fn(&RulingParts<'_>) -> String;

/// One entry of the template table
#[derive(Clone, Copy)]
pub struct Template {
    pub body: BodyFn,
    pub closing: &'static str,
}

impl Template {
    pub fn render(&self, parts: &RulingParts<'_>) -> String {
        format!("{} {}", (self.body)(parts), self.closing)
    }
}

fn property_body(p: &RulingParts<'_>) -> String {
    format!(
        "{} By {}, the offense of {} disruption is noted. The court orders you to {}.",
        p.prefix, p.article, p.category, p.penalty
    )
}

fn ethics_body(p: &RulingParts<'_>) -> String {
    format!(
        "{} Under {}, ethical breaches demand scrutiny. You shall {}.",
        p.prefix, p.article, p.penalty
    )
}

fn interpersonal_body(p: &RulingParts<'_>) -> String {
    format!(
        "{} Per {}, discord among stars is forbidden. The court mandates you {}.",
        p.prefix, p.article, p.penalty
    )
}

fn technology_body(p: &RulingParts<'_>) -> String {
    format!(
        "{} By {}, tech tampering disrupts the cosmos. You are ordered to {}.",
        p.prefix, p.article, p.penalty
    )
}

fn unknown_body(p: &RulingParts<'_>) -> String {
    format!(
        "{} Under {}, ambiguous grievances perplex the Court. You must {}.",
        p.prefix, p.article, p.penalty
    )
}

/// Body and closings per category; closings follow `Tone::ALL` order
const CATEGORY_TEMPLATES: [(Category, BodyFn, [&str; 4]); 5] = [
    (
        Category::Property,
        property_body,
        [
            "Cease such antics, or face the Void!",
            "Next time, keep your space cows tethered!",
            "Thus, harmony restores the cosmic herd!",
            "Let’s keep the galaxy moo-ving smoothly!",
        ],
    ),
    (
        Category::Ethics,
        ethics_body,
        [
            "Reflect on your duties, citizen!",
            "Really, cloning without consent? Tsk tsk!",
            "Seek wisdom in the stars’ light!",
            "Let’s clone some good vibes instead!",
        ],
    ),
    (
        Category::Interpersonal,
        interpersonal_body,
        [
            "Foster peace, or answer to the Court!",
            "Stop rebooting their coffee maker, you rogue!",
            "Let love guide your cosmic dance!",
            "Hug it out, space pals!",
        ],
    ),
    (
        Category::Technology,
        technology_body,
        [
            "Respect the circuits of justice!",
            "Hacking the holodeck again? Seriously?",
            "Code flows smoothly in starlight!",
            "Let’s debug with a smile!",
        ],
    ),
    (
        Category::Unknown,
        unknown_body,
        [
            "Clarify your plea next time!",
            "What even is this problem? Stars above!",
            "Mysteries veil the cosmic truth!",
            "Let’s sort this out with a cosmic grin!",
        ],
    ),
];

/// Global template table
static TEMPLATES: Lazy<AHashMap<(Category, Tone), Template>> = Lazy::new(|| {
    let mut table = AHashMap::with_capacity(CATEGORY_TEMPLATES.len() * Tone::ALL.len());
    for (category, body, closings) in CATEGORY_TEMPLATES {
        for (tone, closing) in Tone::ALL.into_iter().zip(closings) {
            table.insert((category, tone), Template { body, closing });
        }
    }
    table
});

/// Look up the template for a category and tone
///
/// Falls back to the unknown-category template for the same tone.
pub fn template_for(category: Category, tone: Tone) -> Option<&'static Template> {
    TEMPLATES
        .get(&(category, tone))
        .or_else(|| TEMPLATES.get(&(Category::Unknown, tone)))
}

/// Render a ruling for the given category and tone
pub fn render(category: Category, tone: Tone, parts: &RulingParts<'_>) -> Option<String> {
    template_for(category, tone).map(|t| t.render(parts))
}
