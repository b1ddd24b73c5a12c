//! Data model for the fetched IP identity record.

use serde::{Deserialize, Serialize};

/// The geolocation/IP record returned by ipapi.co.
///
/// Every field is optional: the upstream API omits fields freely and nothing
/// here is validated or normalized. Fallbacks are applied at render time
/// only. A new fetch always produces a whole new record, never a partial
/// merge.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub ip: Option<String>,
    pub version: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub country_code: Option<String>,
    pub continent_code: Option<String>,
    pub postal: Option<String>,
    pub org: Option<String>,
    pub asn: Option<String>,
    pub timezone: Option<String>,
    pub utc_offset: Option<String>,
    pub currency: Option<String>,
    pub currency_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub languages: Option<String>,
}
