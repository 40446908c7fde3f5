use serde::{Deserialize, Serialize};

/// Country as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryView {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub region: Option<String>,
}

/// Presenter for stored countries.
pub fn present_country(c: models::country::Model) -> CountryView {
    CountryView { name: c.name, alpha2: c.alpha2, alpha3: c.alpha3, region: c.region }
}
