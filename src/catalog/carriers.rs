//! Carrier tokens

use super::catalog_id;

catalog_id!(
    /// A carrier account token, e.g. `usps` or `fedex`
    Carrier
);

#[allow(missing_docs)]
impl Carrier {
    pub const AUSTRALIA_POST: Self = Self::from_static("australia_post");
    pub const ASENDIA_US: Self = Self::from_static("asendia_us");
    pub const CANADA_POST: Self = Self::from_static("canada_post");
    pub const DEUTSCHE_POST: Self = Self::from_static("deutsche_post");
    pub const DHL_GERMANY: Self = Self::from_static("dhl_germany");
    pub const DHL_ECOMMERCE: Self = Self::from_static("dhl_ecommerce");
    pub const DHL_EXPRESS: Self = Self::from_static("dhl_express");
    pub const FEDEX: Self = Self::from_static("fedex");
    pub const GLS_DE: Self = Self::from_static("gls_de");
    pub const GLS_FR: Self = Self::from_static("gls_fr");
    pub const HERMES_UK: Self = Self::from_static("hermes_uk");
    pub const LASERSHIP: Self = Self::from_static("lasership");
    pub const MONDIAL_RELAY: Self = Self::from_static("mondial_relay");
    pub const NEWGISTICS: Self = Self::from_static("newgistics");
    pub const ONTRAC: Self = Self::from_static("ontrac");
    pub const PUROLATOR: Self = Self::from_static("purolator");
    pub const RR_DONNELLEY: Self = Self::from_static("rr_donnelley");
    pub const UPS: Self = Self::from_static("ups");
    pub const USPS: Self = Self::from_static("usps");
}

impl Carrier {
    /// Every carrier token the service publishes
    pub const ALL: [Carrier; 19] = [
        Self::AUSTRALIA_POST,
        Self::ASENDIA_US,
        Self::CANADA_POST,
        Self::DEUTSCHE_POST,
        Self::DHL_GERMANY,
        Self::DHL_ECOMMERCE,
        Self::DHL_EXPRESS,
        Self::FEDEX,
        Self::GLS_DE,
        Self::GLS_FR,
        Self::HERMES_UK,
        Self::LASERSHIP,
        Self::MONDIAL_RELAY,
        Self::NEWGISTICS,
        Self::ONTRAC,
        Self::PUROLATOR,
        Self::RR_DONNELLEY,
        Self::UPS,
        Self::USPS,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_carriers_are_unique() {
        let all = Carrier::ALL;
        let unique: HashSet<_> = all.iter().map(Carrier::as_str).collect();
        assert_eq!(unique.len(), all.len());
    }
}
