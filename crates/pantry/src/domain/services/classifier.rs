//! Attribute Classifier
//!
//! Maps a tag or location name to a colour and emoji using ordered
//! pattern rules. The first rule whose pattern occurs anywhere in the
//! lower-cased, trimmed name wins; later rules are never consulted.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::entities::AttributeDefaults;
use crate::domain::value_objects::AttributeKind;

/// Colour and emoji assigned to an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStyle {
    pub color: String,
    pub emoji: String,
}

struct AttributeRule {
    pattern: Regex,
    color: &'static str,
    emoji: &'static str,
}

type RuleSpec = (&'static str, &'static str, &'static str);

const TAG_RULES: &[RuleSpec] = &[
    (r"frozen|freez|ice cream|mražen", "#06b6d4", "🧊"),
    (r"dairy|milk|cheese|yogh?urt|butter|cream|mléč|mlék|sýr", "#3b82f6", "🥛"),
    (r"meat|beef|pork|chicken|turkey|bacon|sausage|\bham\b|maso|protein", "#ef4444", "🥩"),
    (r"fish|seafood|salmon|tuna|shrimp|ryb", "#0ea5e9", "🐟"),
    (r"vegetable|veggie|\bveg\b|salad|greens|zelenin", "#22c55e", "🥦"),
    (r"fruit|berr|apple|banana|citrus|ovoc", "#f97316", "🍎"),
    (r"bread|bak|grain|cereal|pasta|rice|flour|pečiv|chléb", "#d97706", "🍞"),
    (r"drink|beverage|juice|coffee|\btea\b|soda|water|nápoj", "#8b5cf6", "🥤"),
    (r"wine|beer|spirit|alcohol|víno|pivo", "#7c3aed", "🍷"),
    (r"snack|chips|candy|sweet|chocolate|dessert|cookie|sladk", "#ec4899", "🍫"),
    (r"spice|herb|condiment|sauce|season|koření", "#b45309", "🧂"),
    (r"\bcan(s|ned)?\b|\btin(s|ned)?\b|preserv|konzerv", "#64748b", "🥫"),
    (r"breakfast|snídan", "#facc15", "🍳"),
    (r"organic|healthy|vegan|vegetarian|gluten|\bbio\b|low-fat|vitamin", "#16a34a", "🌱"),
    (r"clean|detergent|soap|household|hygien|toilet|drogerie", "#14b8a6", "🧽"),
];

const LOCATION_RULES: &[RuleSpec] = &[
    (r"freez|mrazák|mrazni", "#0891b2", "🧊"),
    (r"fridge|refrigerator|cooler|lednic|chladni", "#38bdf8", "❄️"),
    (r"wine|cellar|sklep", "#7f1d1d", "🍷"),
    (r"pantry|larder|spíž|spiz", "#a16207", "🥫"),
    (r"spice", "#b45309", "🧂"),
    (r"bread", "#d97706", "🍞"),
    (r"fruit|bowl", "#f97316", "🍎"),
    (r"cupboard|cabinet|closet|shel(f|ves)|skříň|polic", "#92400e", "🗄️"),
    (r"drawer|šuplík", "#78716c", "🗃️"),
    (r"counter|kitchen|kuchyň|kuchyn", "#f59e0b", "🍽️"),
    (r"garage|garáž", "#475569", "🚗"),
    (r"basement|storage|attic|sklad|půda", "#57534e", "📦"),
    (r"bath|koupeln", "#06b6d4", "🛁"),
    (r"garden|shed|balcony|zahrad", "#65a30d", "🌿"),
];

fn compile(specs: &[RuleSpec]) -> Vec<AttributeRule> {
    specs
        .iter()
        .map(|(pattern, color, emoji)| AttributeRule {
            pattern: Regex::new(pattern).expect("attribute rule pattern must compile"),
            color,
            emoji,
        })
        .collect()
}

static TAG_RULESET: LazyLock<Vec<AttributeRule>> = LazyLock::new(|| compile(TAG_RULES));
static LOCATION_RULESET: LazyLock<Vec<AttributeRule>> =
    LazyLock::new(|| compile(LOCATION_RULES));

fn rules_for(kind: AttributeKind) -> &'static [AttributeRule] {
    match kind {
        AttributeKind::Tag => &TAG_RULESET,
        AttributeKind::Location => &LOCATION_RULESET,
    }
}

/// Classify a tag or location name.
///
/// Falls back to `defaults`, or to the neutral gray/tag pair when the
/// caller has no configuration.
pub fn classify(
    name: &str,
    kind: AttributeKind,
    defaults: Option<&AttributeDefaults>,
) -> AttributeStyle {
    let normalized = name.trim().to_lowercase();

    if let Some(rule) = rules_for(kind)
        .iter()
        .find(|rule| rule.pattern.is_match(&normalized))
    {
        return AttributeStyle {
            color: rule.color.to_string(),
            emoji: rule.emoji.to_string(),
        };
    }

    let fallback = defaults.cloned().unwrap_or_default();
    AttributeStyle {
        color: fallback.color,
        emoji: fallback.emoji,
    }
}
