//! Pure projections from a [`NetworkIdentity`] onto the dashboard's cards.
//!
//! All fallback handling for absent upstream fields is centralized here so
//! the templates only ever see ready-to-print strings.

use serde::Serialize;

use crate::models::NetworkIdentity;

const UNKNOWN: &str = "Unknown";

/// One card in the info grid. Secondary and tertiary lines may be empty;
/// the template skips empty lines.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

fn or_unknown(field: Option<&str>) -> String {
    field
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn or_empty(field: Option<&str>) -> String {
    field.unwrap_or_default().to_string()
}

/// Primary IP line for the hero section.
pub fn ip_display(ip: Option<&str>) -> String {
    or_unknown(ip)
}

/// First whitespace-delimited token of the organization string.
pub fn provider_primary(org: Option<&str>) -> String {
    org.and_then(|o| o.split_whitespace().next())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// The part after the first `/` of an IANA timezone name, or the whole
/// string when no `/` is present.
pub fn timezone_primary(timezone: Option<&str>) -> String {
    match timezone.filter(|s| !s.is_empty()) {
        Some(tz) => tz.split_once('/').map_or(tz, |(_, rest)| rest).to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// First comma-delimited token of the languages string.
pub fn languages_primary(languages: Option<&str>) -> String {
    languages
        .and_then(|l| l.split(',').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// ASN line with the literal `AS` prefix. An absent ASN renders "Unknown"
/// rather than a bare prefix.
pub fn asn_display(asn: Option<&str>) -> String {
    match asn.filter(|s| !s.is_empty()) {
        Some(asn) => format!("AS{asn}"),
        None => UNKNOWN.to_string(),
    }
}

/// The badge says "IPv4" only for the literal upstream value "IPv4";
/// anything else is labeled "IPv6".
pub fn version_label(version: Option<&str>) -> &'static str {
    if version == Some("IPv4") {
        "IPv4"
    } else {
        "IPv6"
    }
}

fn location_secondary(identity: &NetworkIdentity) -> String {
    let parts: Vec<&str> = [
        identity.region.as_deref(),
        identity.country_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect();
    parts.join(", ")
}

fn utc_display(offset: Option<&str>) -> String {
    match offset.filter(|s| !s.is_empty()) {
        Some(offset) => format!("UTC {offset}"),
        None => String::new(),
    }
}

/// Assembles the six info cards for the loaded layout.
pub fn info_cards(identity: &NetworkIdentity) -> Vec<InfoCard> {
    vec![
        InfoCard {
            icon: "📍",
            title: "Location",
            primary: or_unknown(identity.city.as_deref()),
            secondary: location_secondary(identity),
            tertiary: or_empty(identity.postal.as_deref()),
        },
        InfoCard {
            icon: "🌍",
            title: "Country",
            primary: or_unknown(identity.country_name.as_deref()),
            secondary: or_empty(identity.country_code.as_deref()),
            tertiary: or_empty(identity.continent_code.as_deref()),
        },
        InfoCard {
            icon: "🏢",
            title: "Internet Provider",
            primary: provider_primary(identity.org.as_deref()),
            secondary: or_empty(identity.org.as_deref()),
            tertiary: asn_display(identity.asn.as_deref()),
        },
        InfoCard {
            icon: "🕐",
            title: "Timezone",
            primary: timezone_primary(identity.timezone.as_deref()),
            secondary: or_empty(identity.timezone.as_deref()),
            tertiary: utc_display(identity.utc_offset.as_deref()),
        },
        InfoCard {
            icon: "💰",
            title: "Currency",
            primary: or_unknown(identity.currency.as_deref()),
            secondary: or_empty(identity.currency_name.as_deref()),
            tertiary: or_empty(identity.currency_symbol.as_deref()),
        },
        InfoCard {
            icon: "🗣️",
            title: "Languages",
            primary: languages_primary(identity.languages.as_deref()),
            secondary: or_empty(identity.languages.as_deref()),
            tertiary: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_identity() -> NetworkIdentity {
        NetworkIdentity {
            ip: Some("8.8.8.8".into()),
            version: Some("IPv4".into()),
            city: Some("Mountain View".into()),
            region: Some("California".into()),
            country_name: Some("United States".into()),
            country_code: Some("US".into()),
            continent_code: Some("NA".into()),
            postal: Some("94043".into()),
            org: Some("GOOGLE LLC".into()),
            asn: Some("15169".into()),
            timezone: Some("America/Los_Angeles".into()),
            utc_offset: Some("-0800".into()),
            currency: Some("USD".into()),
            currency_name: Some("Dollar".into()),
            currency_symbol: Some("$".into()),
            languages: Some("en-US,es-US,haw,fr".into()),
        }
    }

    #[test]
    fn provider_primary_is_first_token() {
        assert_eq!(provider_primary(Some("GOOGLE LLC")), "GOOGLE");
        assert_eq!(provider_primary(Some("Single")), "Single");
    }

    #[test]
    fn provider_primary_falls_back_to_unknown() {
        assert_eq!(provider_primary(None), "Unknown");
        assert_eq!(provider_primary(Some("")), "Unknown");
        assert_eq!(provider_primary(Some("   ")), "Unknown");
    }

    #[test]
    fn timezone_primary_takes_part_after_slash() {
        assert_eq!(timezone_primary(Some("America/Los_Angeles")), "Los_Angeles");
        // only the first slash splits
        assert_eq!(timezone_primary(Some("America/Argentina/Ushuaia")), "Argentina/Ushuaia");
    }

    #[test]
    fn timezone_primary_without_slash_is_whole_string() {
        assert_eq!(timezone_primary(Some("UTC")), "UTC");
        assert_eq!(timezone_primary(None), "Unknown");
    }

    #[test]
    fn languages_primary_is_first_comma_token() {
        assert_eq!(languages_primary(Some("en-US,es-US")), "en-US");
        assert_eq!(languages_primary(Some("fi")), "fi");
        assert_eq!(languages_primary(None), "Unknown");
        assert_eq!(languages_primary(Some("")), "Unknown");
    }

    #[test]
    fn asn_has_literal_prefix_or_unknown() {
        assert_eq!(asn_display(Some("15169")), "AS15169");
        assert_eq!(asn_display(None), "Unknown");
        assert_eq!(asn_display(Some("")), "Unknown");
    }

    #[test]
    fn version_label_matches_ipv4_literally() {
        assert_eq!(version_label(Some("IPv4")), "IPv4");
        assert_eq!(version_label(Some("IPv6")), "IPv6");
        assert_eq!(version_label(Some("ipv4")), "IPv6");
        assert_eq!(version_label(None), "IPv6");
    }

    #[test]
    fn full_identity_projects_every_card_line() {
        let cards = info_cards(&full_identity());
        assert_eq!(cards.len(), 6);

        let location = &cards[0];
        assert_eq!(location.primary, "Mountain View");
        assert_eq!(location.secondary, "California, United States");
        assert_eq!(location.tertiary, "94043");

        let country = &cards[1];
        assert_eq!(country.primary, "United States");
        assert_eq!(country.secondary, "US");
        assert_eq!(country.tertiary, "NA");

        let provider = &cards[2];
        assert_eq!(provider.primary, "GOOGLE");
        assert_eq!(provider.secondary, "GOOGLE LLC");
        assert_eq!(provider.tertiary, "AS15169");

        let timezone = &cards[3];
        assert_eq!(timezone.primary, "Los_Angeles");
        assert_eq!(timezone.secondary, "America/Los_Angeles");
        assert_eq!(timezone.tertiary, "UTC -0800");

        let currency = &cards[4];
        assert_eq!(currency.primary, "USD");
        assert_eq!(currency.secondary, "Dollar");
        assert_eq!(currency.tertiary, "$");

        let languages = &cards[5];
        assert_eq!(languages.primary, "en-US");
        assert_eq!(languages.secondary, "en-US,es-US,haw,fr");
    }

    #[test]
    fn missing_org_yields_unknown_provider_lines() {
        let identity = NetworkIdentity {
            org: None,
            asn: None,
            ..full_identity()
        };
        let provider = &info_cards(&identity)[2];
        assert_eq!(provider.primary, "Unknown");
        assert_eq!(provider.secondary, "");
        assert_eq!(provider.tertiary, "Unknown");
    }

    #[test]
    fn empty_identity_renders_fallbacks_only() {
        let cards = info_cards(&NetworkIdentity::default());
        for card in &cards {
            assert!(!card.primary.is_empty(), "{} primary must not be blank", card.title);
        }
        assert_eq!(cards[0].primary, "Unknown");
        assert_eq!(cards[0].secondary, "");
        assert_eq!(cards[3].primary, "Unknown");
        assert_eq!(cards[3].tertiary, "");
    }
}
