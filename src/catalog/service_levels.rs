//! Carrier service level tokens

use super::catalog_id;

catalog_id!(
    /// A carrier service level, e.g. `usps_priority`
    ServiceLevel
);

#[allow(missing_docs)]
impl ServiceLevel {
    // USPS
    /// Priority Mail
    pub const USPS_PRIORITY: Self = Self::from_static("usps_priority");
    /// Priority Mail Express
    pub const USPS_PRIORITY_EXPRESS: Self = Self::from_static("usps_priority_express");
    /// First Class mail/package
    pub const USPS_FIRST: Self = Self::from_static("usps_first");
    /// Parcel Select
    pub const USPS_PARCEL_SELECT: Self = Self::from_static("usps_parcel_select");
    /// Media Mail, only for existing Shippo
    /// customers with grandfathered Media Mail option.
    pub const USPS_MEDIA_MAIL: Self = Self::from_static("usps_media_mail");
    pub const USPS_PRIORITY_MAIL_INTERNATIONAL: Self = Self::from_static("usps_priority_mail_international");
    pub const USPS_PRIORITY_MAIL_EXPRESS: Self = Self::from_static("usps_priority_mail_express");
    pub const USPS_FIRST_CLASS_PACKAGE: Self = Self::from_static("usps_first_class_package");

    // Fedex
    pub const FEDEX_GROUND: Self = Self::from_static("fedex_ground");
    pub const FEDEX_HOME_DELIVERY: Self = Self::from_static("fedex_home_delivery");
    pub const FEDEX_SMART_POST: Self = Self::from_static("fedex_smart_post");
    pub const FEDEX_2_DAY: Self = Self::from_static("fedex_2_day");
    pub const FEDEX_2_DAY_AM: Self = Self::from_static("fedex_2_day_am");
    pub const FEDEX_EXPRESS_SAVER: Self = Self::from_static("fedex_express_saver");
    pub const FEDEX_STANDARD_OVERNIGHT: Self = Self::from_static("fedex_standard_overnight");
    pub const FEDEX_PRIORITY_OVERNIGHT: Self = Self::from_static("fedex_priority_overnight");
    pub const FEDEX_FIRST_OVERNIGHT: Self = Self::from_static("fedex_first_overnight");
    pub const FEDEX_INTERNATIONAL_ECONOMY: Self = Self::from_static("fedex_international_economy");
    pub const FEDEX_INTERNATIONAL_PRIORITY: Self = Self::from_static("fedex_international_priority");
    pub const FEDEX_INTERNATIONAL_FIRST: Self = Self::from_static("fedex_international_first");
    pub const FEDEX_EUROPE_FIRST_INTERNATIONAL: Self = Self::from_static("fedex_europe_first_international");

    // UPS
    pub const UPS_STANDARD: Self = Self::from_static("ups_standard");
    pub const UPS_GROUND: Self = Self::from_static("ups_ground");
    pub const UPS_SAVER: Self = Self::from_static("ups_saver");
    pub const UPS_3_DAY_SELECT: Self = Self::from_static("ups_3_day_select");
    pub const UPS_SECOND_DAY_AIR: Self = Self::from_static("ups_second_day_air");
    pub const UPS_SECOND_DAY_AIR_AM: Self = Self::from_static("ups_second_day_air_am");
    pub const UPS_NEXT_DAY_AIR: Self = Self::from_static("ups_next_day_air");
    pub const UPS_NEXT_DAY_AIR_SAVER: Self = Self::from_static("ups_next_day_air_saver");
    pub const UPS_NEXT_DAY_AIR_EARLY_AM: Self = Self::from_static("ups_next_day_air_early_am");
    pub const UPS_MAIL_INNOVATIONS_DOMESTIC: Self = Self::from_static("ups_mail_innovations_domestic");
    pub const UPS_SUREPOST: Self = Self::from_static("ups_surepost");
    pub const UPS_SUREPOST_LIGHTWEIGHT: Self = Self::from_static("ups_surepost_lightweight");
    pub const UPS_EXPRESS: Self = Self::from_static("ups_express");
    pub const UPS_EXPRESS_PLUS: Self = Self::from_static("ups_express_plus");
    pub const UPS_EXPEDITED: Self = Self::from_static("ups_expedited");

    // Asendia
    pub const ASENDIA_US_PRIORITY_TRACKED: Self = Self::from_static("asendia_us_priority_tracked");
    pub const ASENDIA_US_PRIORITY_INTERNATIONAL: Self = Self::from_static("asendia_us_priority_international");
    pub const ASENDIA_US_PRIORITY_INTERNATIONAL_PRIORITY_AIRMAIL: Self = Self::from_static("asendia_us_priority_international_priority_airmail");
    pub const ASENDIA_US_PRIORITY_INTERNATIONAL_SURFACE_AIRLIFT: Self = Self::from_static("asendia_us_priority_international_surface_airlift");
    pub const ASENDIA_US_PRIORITY_MAIL_INTERNATIONAL: Self = Self::from_static("asendia_us_priority_mail_international");
    pub const ASENDIA_US_PRIORITY_MAIL_EXPRESS_INTERNATIONAL: Self = Self::from_static("asendia_us_priority_mail_express_international");
    pub const ASENDIA_US_EPACKET: Self = Self::from_static("asendia_us_epacket");
    pub const ASENDIA_US_OTHER: Self = Self::from_static("asendia_us_other");

    // AustraliaPost
    pub const AUSTRALIA_POST_EXPRESS_POST: Self = Self::from_static("australia_post_express_post");
    pub const AUSTRALIA_POST_PARCEL_POST: Self = Self::from_static("australia_post_parcel_post");

    // CanadaPost
    pub const CANADA_POST_REGULAR_PARCEL: Self = Self::from_static("canada_post_regular_parcel");
    pub const CANADA_POST_EXPEDITED_PARCEL: Self = Self::from_static("canada_post_expedited_parcel");
    pub const CANADA_POST_PRIORITY: Self = Self::from_static("canada_post_priority");
    pub const CANADA_POST_XPRESS_POST: Self = Self::from_static("canada_post_xpress_post");
    pub const CANADA_POST_XPRESS_POST_INTERNATIONAL: Self = Self::from_static("canada_post_xpress_post_international");
    pub const CANADA_POST_XPRESS_POST_USA: Self = Self::from_static("canada_post_xpress_post_usa");
    pub const CANADA_POST_TRACKED_PACKET_USA: Self = Self::from_static("canada_post_tracked_packet_usa");
    pub const CANADA_POST_TRACKED_PACKET_INTERNATIONAL: Self = Self::from_static("canada_post_tracked_packet_international");
    pub const CANADA_POST_SMALL_PACKET_INTERNATIONAL_AIR: Self = Self::from_static("canada_post_small_packet_international_air");

    // Purolator
    pub const PUROLATOR_GROUND: Self = Self::from_static("purolator_ground");
    pub const PUROLATOR_GROUND9_AM: Self = Self::from_static("purolator_ground9_am");
    pub const PUROLATOR_GROUND1030_AM: Self = Self::from_static("purolator_ground1030_am");
    pub const PUROLATOR_GROUND_DISTRIBUTION: Self = Self::from_static("purolator_ground_distribution");
    pub const PUROLATOR_GROUND_EVENING: Self = Self::from_static("purolator_ground_evening");
    pub const PUROLATOR_GROUND_US: Self = Self::from_static("purolator_ground_us");
    pub const PUROLATOR_EXPRESS: Self = Self::from_static("purolator_express");
    pub const PUROLATOR_EXPRESS9_AM: Self = Self::from_static("purolator_express9_am");
    pub const PUROLATOR_EXPRESS1030_AM: Self = Self::from_static("purolator_express1030_am");
    pub const PUROLATOR_EXPRESS_EVENING: Self = Self::from_static("purolator_express_evening");
    pub const PUROLATOR_EXPRESS_US9_AM: Self = Self::from_static("purolator_express_us9_am");
    pub const PUROLATOR_EXPRESS_US1030_AM: Self = Self::from_static("purolator_express_us1030_am");
    pub const PUROLATOR_EXPRESS_US1200: Self = Self::from_static("purolator_express_us1200");
    pub const PUROLATOR_EXPRESS_INTERNATIONAL: Self = Self::from_static("purolator_express_international");
    pub const PUROLATOR_EXPRESS_INTERNATIONAL9_AM: Self = Self::from_static("purolator_express_international9_am");
    pub const PUROLATOR_EXPRESS_INTERNATIONAL1030_AM: Self = Self::from_static("purolator_express_international1030_am");
    pub const PUROLATOR_EXPRESS_INTERNATIONAL1200: Self = Self::from_static("purolator_express_international1200");

    // DHL Express
    pub const DHL_EXPRESS_DOMESTIC_EXPRESS_DOC: Self = Self::from_static("dhl_express_domestic_express_doc");
    pub const DHL_EXPRESS_ECONOMY_SELECT_DOC: Self = Self::from_static("dhl_express_economy_select_doc");
    pub const DHL_EXPRESS_WORLDWIDE_NONDOC: Self = Self::from_static("dhl_express_worldwide_nondoc");
    pub const DHL_EXPRESS_WORLDWIDE_DOC: Self = Self::from_static("dhl_express_worldwide_doc");
    pub const DHL_EXPRESS_WORLDWIDE: Self = Self::from_static("dhl_express_worldwide");
    pub const DHL_EXPRESS_BREAK_BULK_EXPRESS_DOC: Self = Self::from_static("dhl_express_break_bulk_express_doc");
    pub const DHL_EXPRESS_BREAK_BULK_EXPRESS_9_00_NONDOC: Self = Self::from_static("dhl_express_break_bulk_express_9_00_nondoc");
    pub const DHL_EXPRESS_ECONOMY_SELECT_NONDOC: Self = Self::from_static("dhl_express_economy_select_nondoc");
    pub const DHL_EXPRESS_BREAK_BULK_ECONOMY_DOC: Self = Self::from_static("dhl_express_break_bulk_economy_doc");
    pub const DHL_EXPRESS_EXPRESS_9_00_DOC: Self = Self::from_static("dhl_express_express_9_00_doc");
    pub const DHL_EXPRESS_EXPRESS_10_30_DOC: Self = Self::from_static("dhl_express_express_10_30_doc");
    pub const DHL_EXPRESS_EXPRESS_10_30_NONDOC: Self = Self::from_static("dhl_express_express_10_30_nondoc");
    pub const DHL_EXPRESS_EXPRESS_12_00_DOC: Self = Self::from_static("dhl_express_express_12_00_doc");
    pub const DHL_EXPRESS_EUROPACK_NONDOC: Self = Self::from_static("dhl_express_europack_nondoc");
    pub const DHL_EXPRESS_EXPRESS_ENVELOPE_DOC: Self = Self::from_static("dhl_express_express_envelope_doc");
    pub const DHL_EXPRESS_EXPRESS_12_00_NONDOC: Self = Self::from_static("dhl_express_express_12_00_nondoc");
    pub const DHL_EXPRESS_WORLDWIDE_B2C_DOC: Self = Self::from_static("dhl_express_worldwide_b2c_doc");
    pub const DHL_EXPRESS_WORLDWIDE_B2C_NONDOC: Self = Self::from_static("dhl_express_worldwide_b2c_nondoc");
    pub const DHL_EXPRESS_EXPRESS_EASY_NONDOC: Self = Self::from_static("dhl_express_express_easy_nondoc");

    // DHL eCommerce
    pub const DHL_ECOMMERCE_MARKETING_PARCEL_EXPEDITED: Self = Self::from_static("dhl_ecommerce_marketing_parcel_expedited");
    pub const DHL_ECOMMERCE_GLOBALMAIL_BUSINESS_IPS: Self = Self::from_static("dhl_ecommerce_globalmail_business_ips");
    pub const DHL_ECOMMERCE_PARCEL_INTERNATIONAL_DIRECT: Self = Self::from_static("dhl_ecommerce_parcel_international_direct");
    pub const DHL_ECOMMERCE_PARCELS_EXPEDITED_MAX: Self = Self::from_static("dhl_ecommerce_parcels_expedited_max");
    pub const DHL_ECOMMERCE_BPM_GROUND: Self = Self::from_static("dhl_ecommerce_bpm_ground");
    pub const DHL_ECOMMERCE_PRIORITY_EXPEDITED: Self = Self::from_static("dhl_ecommerce_priority_expedited");
    pub const DHL_ECOMMERCE_GLOBALMAIL_PACKET_IPA: Self = Self::from_static("dhl_ecommerce_globalmail_packet_ipa");
    pub const DHL_ECOMMERCE_GLOBALMAIL_PACKET_ISAL: Self = Self::from_static("dhl_ecommerce_globalmail_packet_isal");
    pub const DHL_ECOMMERCE_MARKETING_PARCEL_GROUND: Self = Self::from_static("dhl_ecommerce_marketing_parcel_ground");
    pub const DHL_ECOMMERCE_FIRST_CLASS_PARCEL_EXPEDITED: Self = Self::from_static("dhl_ecommerce_first_class_parcel_expedited");
    pub const DHL_ECOMMERCE_GLOBALMAIL_BUSINESS_PRIORITY: Self = Self::from_static("dhl_ecommerce_globalmail_business_priority");
    pub const DHL_ECOMMERCE_PARCELS_EXPEDITED: Self = Self::from_static("dhl_ecommerce_parcels_expedited");
    pub const DHL_ECOMMERCE_GLOBALMAIL_BUSINESS_ISAL: Self = Self::from_static("dhl_ecommerce_globalmail_business_isal");
    pub const DHL_ECOMMERCE_PARCEL_PLUS_EXPEDITED_MAX: Self = Self::from_static("dhl_ecommerce_parcel_plus_expedited_max");
    pub const DHL_ECOMMERCE_GLOBALMAIL_PACKET_PLUS: Self = Self::from_static("dhl_ecommerce_globalmail_packet_plus");
    pub const DHL_ECOMMERCE_PARCELS_GROUND: Self = Self::from_static("dhl_ecommerce_parcels_ground");
    pub const DHL_ECOMMERCE_EXPEDITED: Self = Self::from_static("dhl_ecommerce_expedited");
    pub const DHL_ECOMMERCE_PARCEL_PLUS_GROUND: Self = Self::from_static("dhl_ecommerce_parcel_plus_ground");
    pub const DHL_ECOMMERCE_PARCEL_INTERNATIONAL_STANDARD: Self = Self::from_static("dhl_ecommerce_parcel_international_standard");
    pub const DHL_ECOMMERCE_BPM_EXPEDITED: Self = Self::from_static("dhl_ecommerce_bpm_expedited");
    pub const DHL_ECOMMERCE_PARCEL_INTERNATIONAL_EXPEDITED: Self = Self::from_static("dhl_ecommerce_parcel_international_expedited");
    pub const DHL_ECOMMERCE_GLOBALMAIL_PACKET_PRIORITY: Self = Self::from_static("dhl_ecommerce_globalmail_packet_priority");
    pub const DHL_ECOMMERCE_EASY_RETURN_LIGHT: Self = Self::from_static("dhl_ecommerce_easy_return_light");
    pub const DHL_ECOMMERCE_PARCEL_PLUS_EXPEDITED: Self = Self::from_static("dhl_ecommerce_parcel_plus_expedited");
    pub const DHL_ECOMMERCE_GLOBALMAIL_BUSINESS_STANDARD: Self = Self::from_static("dhl_ecommerce_globalmail_business_standard");
    pub const DHL_ECOMMERCE_GROUND: Self = Self::from_static("dhl_ecommerce_ground");
    pub const DHL_ECOMMERCE_GLOBALMAIL_PACKET_STANDARD: Self = Self::from_static("dhl_ecommerce_globalmail_packet_standard");

    // DHL Germany
    pub const DHL_PAKET_BUSINESS: Self = Self::from_static("dhl_paket_business");
    pub const DHL_WELTPAKET_BUSINESS: Self = Self::from_static("dhl_weltpaket_business");
    pub const DHL_EUROPAKET_BUSINESS: Self = Self::from_static("dhl_europaket_business");

    // Deutsche Post
    pub const DEUTSCHE_POST_POSTKARTE: Self = Self::from_static("deutsche_post_postkarte");
    pub const DEUTSCHE_POST_STANDARDBRIEF: Self = Self::from_static("deutsche_post_standardbrief");
    pub const DEUTSCHE_POST_KOMPAKBRIEF: Self = Self::from_static("deutsche_post_kompakbrief");
    pub const DEUTSCHE_POST_GROSSBRIEF: Self = Self::from_static("deutsche_post_grossbrief");
    pub const DEUTSCHE_POST_MAXIBRIEF: Self = Self::from_static("deutsche_post_maxibrief");
    pub const DEUTSCHE_POST_MAXIBRIEF_PLUS: Self = Self::from_static("deutsche_post_maxibrief_plus");

    // GLS Germany
    pub const GLS_DEUTSCHLAND_BUSINESS_PARCEL: Self = Self::from_static("gls_deutschland_business_parcel");

    // GLS France
    pub const GLS_FRANCE_BUSINESS_PARCEL: Self = Self::from_static("gls_france_business_parcel");

    // Mondial Relay
    pub const MONDIAL_RELAY_POINTRELAIS: Self = Self::from_static("mondial_relay_pointrelais");

    // Parcelforce
    pub const PARCELFORCE_EXPRESS48: Self = Self::from_static("parcelforce_express48");
    pub const PARCELFORCE_EXPRESS24: Self = Self::from_static("parcelforce_express24");
    pub const PARCELFORCE_EXPRESSAM: Self = Self::from_static("parcelforce_expressam");

    // RR Donnelley
    pub const RR_DONNELLEY_DOMESTIC_ECONOMY_PARCEL: Self = Self::from_static("rr_donnelley_domestic_economy_parcel");
    pub const RR_DONNELLEY_DOMESTIC_PRIORITY_PARCEL: Self = Self::from_static("rr_donnelley_domestic_priority_parcel");
    pub const RR_DONNELLEY_DOMESTIC_PARCEL_BPM: Self = Self::from_static("rr_donnelley_domestic_parcel_bpm");
    pub const RR_DONNELLEY_PRIORITY_DOMESTIC_PRIORITY_PARCEL_BPM: Self = Self::from_static("rr_donnelley_priority_domestic_priority_parcel_bpm");
    pub const RR_DONNELLEY_PRIORITY_PARCEL_DELCON: Self = Self::from_static("rr_donnelley_priority_parcel_delcon");
    pub const RR_DONNELLEY_PRIORITY_PARCEL_NONDELCON: Self = Self::from_static("rr_donnelley_priority_parcel_nondelcon");
    pub const RR_DONNELLEY_ECONOMY_PARCEL: Self = Self::from_static("rr_donnelley_economy_parcel");
    pub const RR_DONNELLEY_IPA: Self = Self::from_static("rr_donnelley_ipa");
    pub const RR_DONNELLEY_COURIER: Self = Self::from_static("rr_donnelley_courier");
    pub const RR_DONNELLEY_ISAL: Self = Self::from_static("rr_donnelley_isal");
    pub const RR_DONNELLEY_EPACKET: Self = Self::from_static("rr_donnelley_epacket");
    pub const RR_DONNELLEY_PMI: Self = Self::from_static("rr_donnelley_pmi");
    pub const RR_DONNELLEY_EMI: Self = Self::from_static("rr_donnelley_emi");

    // Newgistics
    pub const NEWGISTICS_PARCEL_SELECT_LIGHTWEIGHT: Self = Self::from_static("newgistics_parcel_select_lightweight");
    pub const NEWGISTICS_PARCEL_SELECT: Self = Self::from_static("newgistics_parcel_select");
    pub const NEWGISTICS_PRIORITY_MAIL: Self = Self::from_static("newgistics_priority_mail");
    pub const NEWGISTICS_FIRST_CLASS_MAIL: Self = Self::from_static("newgistics_first_class_mail");

    // OnTrac
    pub const ONTRAC_GROUND: Self = Self::from_static("ontrac_ground");
    pub const ONTRAC_SUNRISE_GOLD: Self = Self::from_static("ontrac_sunrise_gold");
    pub const ONTRAC_SUNRISE: Self = Self::from_static("ontrac_sunrise");

    // Lasership
    pub const LASERSHIP_ROUTED_DELIVERY: Self = Self::from_static("lasership_routed_delivery");

    // UberRush
    pub const UBER_ON_DEMAND: Self = Self::from_static("uber_on_demand");

    // Hermes UK
    pub const HERMES_UK_PARCELSHOP: Self = Self::from_static("hermes_uk_parcelshop");
    pub const HERMES_UK_HOME_DELIVERY: Self = Self::from_static("hermes_uk_home_delivery");
}
