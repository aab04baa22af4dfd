//! Locale-keyed display text.
//!
//! The engine deals only in stable identifiers (`SafetyTier::as_key`,
//! `WarningKind::as_key`, source name keys); every human-readable string
//! lives here, in the presentation layer. Unknown keys fall back to the key
//! itself so a missing entry is visible rather than a crash.

use caffeine_core::Locale;

/// Badge label for a safety tier key
pub fn tier_label<'a>(locale: Locale, key: &'a str) -> &'a str {
    let known = match (locale, key) {
        (Locale::En, "tier.safe") => "SAFE",
        (Locale::En, "tier.moderate") => "MODERATE",
        (Locale::En, "tier.high") => "HIGH",
        (Locale::En, "tier.excessive") => "EXCESSIVE",
        (Locale::En, "tier.dangerous") => "DANGEROUS",
        (Locale::Es, "tier.safe") => "SEGURO",
        (Locale::Es, "tier.moderate") => "MODERADO",
        (Locale::Es, "tier.high") => "ALTO",
        (Locale::Es, "tier.excessive") => "EXCESIVO",
        (Locale::Es, "tier.dangerous") => "PELIGROSO",
        _ => "",
    };

    if known.is_empty() {
        key
    } else {
        known
    }
}

/// Advisory message for a warning key
pub fn warning_message<'a>(locale: Locale, key: &'a str) -> &'a str {
    let known = match (locale, key) {
        (Locale::En, "warning.pregnancy_overage") => {
            "You are over the 200 mg pregnancy guideline for today."
        }
        (Locale::En, "warning.youth_limit") => {
            "You are close to the recommended limit for your age."
        }
        (Locale::En, "warning.above_daily_limit") => {
            "Total intake is above your personal daily limit."
        }
        (Locale::En, "warning.sleep_disruption") => {
            "Caffeine still active this late in the day may disrupt sleep."
        }
        (Locale::En, "warning.heart_strain") => {
            "Very high active caffeine can cause palpitations; avoid further intake."
        }
        (Locale::En, "warning.dehydration") => {
            "High caffeine totals act as a diuretic; remember to drink water."
        }
        (Locale::Es, "warning.pregnancy_overage") => {
            "Has superado la pauta de 200 mg durante el embarazo."
        }
        (Locale::Es, "warning.youth_limit") => {
            "Estás cerca del límite recomendado para tu edad."
        }
        (Locale::Es, "warning.above_daily_limit") => {
            "La ingesta total supera tu límite diario personal."
        }
        (Locale::Es, "warning.sleep_disruption") => {
            "La cafeína activa a esta hora puede alterar el sueño."
        }
        (Locale::Es, "warning.heart_strain") => {
            "Un nivel muy alto de cafeína activa puede causar palpitaciones; evita más consumo."
        }
        (Locale::Es, "warning.dehydration") => {
            "Mucha cafeína tiene efecto diurético; recuerda beber agua."
        }
        _ => "",
    };

    if known.is_empty() {
        key
    } else {
        known
    }
}

/// Display name for a catalog source key
pub fn source_name<'a>(locale: Locale, name_key: &'a str) -> &'a str {
    let known = match (locale, name_key) {
        (Locale::En, "source.espresso") => "Espresso",
        (Locale::En, "source.coffee_brewed") => "Brewed coffee",
        (Locale::En, "source.coffee_instant") => "Instant coffee",
        (Locale::En, "source.cold_brew") => "Cold brew",
        (Locale::En, "source.decaf_coffee") => "Decaf coffee",
        (Locale::En, "source.black_tea") => "Black tea",
        (Locale::En, "source.green_tea") => "Green tea",
        (Locale::En, "source.matcha") => "Matcha",
        (Locale::En, "source.energy_drink") => "Energy drink",
        (Locale::En, "source.energy_drink_large") => "Energy drink (large)",
        (Locale::En, "source.cola") => "Cola",
        (Locale::En, "source.dark_chocolate") => "Dark chocolate",
        (Locale::En, "source.caffeine_pill") => "Caffeine tablet",
        (Locale::Es, "source.espresso") => "Espresso",
        (Locale::Es, "source.coffee_brewed") => "Café de filtro",
        (Locale::Es, "source.coffee_instant") => "Café instantáneo",
        (Locale::Es, "source.cold_brew") => "Café en frío",
        (Locale::Es, "source.decaf_coffee") => "Café descafeinado",
        (Locale::Es, "source.black_tea") => "Té negro",
        (Locale::Es, "source.green_tea") => "Té verde",
        (Locale::Es, "source.matcha") => "Matcha",
        (Locale::Es, "source.energy_drink") => "Bebida energética",
        (Locale::Es, "source.energy_drink_large") => "Bebida energética (grande)",
        (Locale::Es, "source.cola") => "Refresco de cola",
        (Locale::Es, "source.dark_chocolate") => "Chocolate negro",
        (Locale::Es, "source.caffeine_pill") => "Comprimido de cafeína",
        _ => "",
    };

    if known.is_empty() {
        name_key
    } else {
        known
    }
}
