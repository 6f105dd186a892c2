//! Brand care and usage tips
//!
//! Fixed tip copy keyed by manufacturer. Pure lookup, no computation;
//! unknown brands fall back per the configured policy.

use crate::TipFallback;

/// Placeholder returned for unknown brands under [`TipFallback::Placeholder`]
pub const NO_TIPS_PLACEHOLDER: &str = "No tips available for this brand.";

static APPLE: &[&str] = &[
    "📱 Always use a soft microfiber cloth to clean your MacBook screen and keyboard.",
    "🔒 Regularly back up your data with Time Machine or iCloud.",
    "🌡️ Avoid exposing your MacBook to extreme temperatures to preserve battery life.",
];

static HP: &[&str] = &[
    "🌀 Keep the laptop vents clear to prevent overheating.",
    "🔄 Regularly update your HP software to ensure better performance.",
    "❄️ Use an HP recommended laptop cooler for extended use to maintain optimal performance.",
];

static ACER: &[&str] = &[
    "💡 Use Acer’s built-in care tools for battery health management.",
    "🧹 Clean the keyboard and screen with a soft cloth regularly.",
    "⚖️ Avoid putting heavy pressure on your Acer laptop to prevent screen damage.",
];

static ASUS: &[&str] = &[
    "🔧 Ensure your Asus laptop runs its regular diagnostics for better performance.",
    "🧹 Regularly clean the fans to avoid dust buildup and overheating.",
    "🔋 Adjust screen brightness to save battery when not plugged in.",
];

static DELL: &[&str] = &[
    "🔋 Use Dell's Power Manager to improve battery life.",
    "🌬️ Keep your Dell laptop in a well-ventilated area to prevent heating.",
    "🔄 Make use of Dell SupportAssist for updates and maintenance.",
];

static LENOVO: &[&str] = &[
    "🔧 Use Lenovo Vantage for driver and software updates.",
    "🔋 Periodically check your Lenovo laptop's battery health.",
    "🧹 Keep your laptop's cooling vents clean to avoid overheating.",
];

static CHUWI: &[&str] = &[
    "🧹 Clean the device gently with a soft cloth.",
    "🛠️ Update Chuwi drivers for optimal performance.",
    "🌬️ Ensure proper ventilation to prevent overheating during long usage.",
];

static MSI: &[&str] = &[
    "⚙️ Use MSI Dragon Center to adjust performance settings for gaming.",
    "🧹 Regularly clean your laptop’s fans to prevent overheating.",
    "❄️ Use a cooling pad for better thermal performance when gaming.",
];

static MICROSOFT: &[&str] = &[
    "🔄 Use Windows Update to keep your Surface running smoothly.",
    "🔋 Always charge your Microsoft laptop when the battery goes below 20%.",
    "🧼 Clean the Surface screen using a microfiber cloth to prevent scratches.",
];

static TOSHIBA: &[&str] = &[
    "🖥️ Ensure you have updated your Toshiba laptop drivers.",
    "💧 Do not expose the laptop to moisture or extreme temperatures.",
    "🔋 Use Toshiba's eco-mode to extend battery life.",
];

static PLACEHOLDER: &[&str] = &[NO_TIPS_PLACEHOLDER];

/// Care tips for a brand
///
/// Known brands return their fixed three-tip sequence; anything else
/// returns the fallback for the configured policy.
pub fn care_tips(company: &str, fallback: TipFallback) -> &'static [&'static str] {
    let known = match company {
        "Apple" => Some(APPLE),
        "HP" => Some(HP),
        "Acer" => Some(ACER),
        "Asus" => Some(ASUS),
        "Dell" => Some(DELL),
        "Lenovo" => Some(LENOVO),
        "Chuwi" => Some(CHUWI),
        "MSI" => Some(MSI),
        "Microsoft" => Some(MICROSOFT),
        "Toshiba" => Some(TOSHIBA),
        _ => None,
    };

    match known {
        Some(tips) => tips,
        None => match fallback {
            TipFallback::Empty => &[],
            TipFallback::Placeholder => PLACEHOLDER,
        },
    }
}

/// Brands that have tip entries, in presentation order
pub fn brands_with_tips() -> [&'static str; 10] {
    [
        "Apple",
        "HP",
        "Acer",
        "Asus",
        "Dell",
        "Lenovo",
        "Chuwi",
        "MSI",
        "Microsoft",
        "Toshiba",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_brand() {
        let tips = care_tips("Apple", TipFallback::Empty);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].contains("microfiber"));
    }

    #[test]
    fn test_known_brand_ignores_fallback() {
        assert_eq!(
            care_tips("Dell", TipFallback::Empty),
            care_tips("Dell", TipFallback::Placeholder)
        );
    }

    #[test]
    fn test_unknown_brand_empty() {
        assert!(care_tips("Google", TipFallback::Empty).is_empty());
    }

    #[test]
    fn test_unknown_brand_placeholder() {
        let tips = care_tips("Google", TipFallback::Placeholder);
        assert_eq!(tips, &[NO_TIPS_PLACEHOLDER]);
    }

    #[test]
    fn test_all_listed_brands_have_three_tips() {
        for brand in brands_with_tips() {
            assert_eq!(
                care_tips(brand, TipFallback::Empty).len(),
                3,
                "{} should have exactly three tips",
                brand
            );
        }
    }
}
