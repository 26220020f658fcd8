//! Predefined parcel templates
//!
//! A template fixes the parcel dimensions for rating; the weight still has
//! to be supplied. Dimensions are noted on each constant.

use super::catalog_id;

catalog_id!(
    /// Carrier-defined parcel packaging
    ParcelTemplate
);

#[allow(missing_docs)]
impl ParcelTemplate {
    // FedEx
    /// 15.81 x 12.94 x 10.19 in
    pub const FEDEX_BOX_10KG: Self = Self::from_static("FedEx_Box_10kg");
    /// 54.80 x 42.10 x 33.50 in
    pub const FEDEX_BOX_25KG: Self = Self::from_static("FedEx_Box_25kg");
    /// 11.88 x 11.00 x 10.75 in
    pub const FEDEX_BOX_EXTRA_LARGE_1: Self = Self::from_static("FedEx_Box_Extra_Large_1");
    /// 15.75 x 14.13 x 6.00 in
    pub const FEDEX_BOX_EXTRA_LARGE_2: Self = Self::from_static("FedEx_Box_Extra_Large_2");
    /// 17.50 x 12.38 x 3.00 in
    pub const FEDEX_BOX_LARGE_1: Self = Self::from_static("FedEx_Box_Large_1");
    /// 11.25 x 8.75 x 7.75 in
    pub const FEDEX_BOX_LARGE_2: Self = Self::from_static("FedEx_Box_Large_2");
    /// 13.25 x 11.50 x 2.38 in
    pub const FEDEX_BOX_MEDIUM_1: Self = Self::from_static("FedEx_Box_Medium_1");
    /// 11.25 x 8.75 x 4.38 in
    pub const FEDEX_BOX_MEDIUM_2: Self = Self::from_static("FedEx_Box_Medium_2");
    /// 12.38 x 10.88 x 1.50 in
    pub const FEDEX_BOX_SMALL_1: Self = Self::from_static("FedEx_Box_Small_1");
    /// 11.25 x 8.75 x 4.38 in
    pub const FEDEX_BOX_SMALL_2: Self = Self::from_static("FedEx_Box_Small_2");
    /// 12.50 x 9.50 x 0.80 in
    pub const FEDEX_ENVELOPE: Self = Self::from_static("FedEx_Envelope");
    /// 11.75 x 14.75 x 2.00 in
    pub const FEDEX_PADDED_PAK: Self = Self::from_static("FedEx_Padded_Pak");
    /// 15.50 x 12.00 x 0.80 in
    pub const FEDEX_PAK_1: Self = Self::from_static("FedEx_Pak_1");
    /// 12.75 x 10.25 x 0.80 in
    pub const FEDEX_PAK_2: Self = Self::from_static("FedEx_Pak_2");
    /// 38.00 x 6.00 x 6.00 in
    pub const FEDEX_TUBE: Self = Self::from_static("FedEx_Tube");
    /// 17.50 x 20.75 x 2.00 in
    pub const FEDEX_XL_PAK: Self = Self::from_static("FedEx_XL_Pak");

    // UPS
    /// 410.00 x 335.00 x 265.00 mm
    pub const UPS_BOX_10KG: Self = Self::from_static("UPS_Box_10kg");
    /// 484.00 x 433.00 x 350.00 mm
    pub const UPS_BOX_25KG: Self = Self::from_static("UPS_Box_25kg");
    /// 460.00 x 315.00 x 95.00 mm
    pub const UPS_EXPRESS_BOX: Self = Self::from_static("UPS_Express_Box");
    /// 18.00 x 13.00 x 3.00 in
    pub const UPS_EXPRESS_BOX_LARGE: Self = Self::from_static("UPS_Express_Box_Large");
    /// 15.00 x 11.00 x 3.00 in
    pub const UPS_EXPRESS_BOX_MEDIUM: Self = Self::from_static("UPS_Express_Box_Medium");
    /// 13.00 x 11.00 x 2.00 in
    pub const UPS_EXPRESS_BOX_SMALL: Self = Self::from_static("UPS_Express_Box_Small");
    /// 12.50 x 9.50 x 2.00 in
    pub const UPS_EXPRESS_ENVELOPE: Self = Self::from_static("UPS_Express_Envelope");
    /// 14.75 x 11.50 x 2.00 in
    pub const UPS_EXPRESS_HARD_PAK: Self = Self::from_static("UPS_Express_Hard_Pak");
    /// 15.00 x 9.50 x 2.00 in
    pub const UPS_EXPRESS_LEGAL_ENVELOPE: Self = Self::from_static("UPS_Express_Legal_Envelope");
    /// 16.00 x 12.75 x 2.00 in
    pub const UPS_EXPRESS_PAK: Self = Self::from_static("UPS_Express_Pak");
    /// 970.00 x 190.00 x 165.00 mm
    pub const UPS_EXPRESS_TUBE: Self = Self::from_static("UPS_Express_Tube");
    /// 17.25 x 12.75 x 2.00 in
    pub const UPS_LABORATORY_PAK: Self = Self::from_static("UPS_Laboratory_Pak");
    /// 0.00 x 0.00 x 0.00 in
    /// BPM (Mail Innovations - Domestic & International)
    pub const UPS_MI_BPM: Self = Self::from_static("UPS_MI_BPM");
    /// 0.00 x 0.00 x 0.00 in
    /// BPM Flat (Mail Innovations - Domestic & International)
    pub const UPS_MI_BPM_FLAT: Self = Self::from_static("UPS_MI_BPM_Flat");
    /// 0.00 x 0.00 x 0.00 in
    /// BPM Parcel (Mail Innovations - Domestic & International)
    pub const UPS_MI_BPM_PARCEL: Self = Self::from_static("UPS_MI_BPM_Parcel");
    /// 0.00 x 0.00 x 0.00 in
    /// First Class (Mail Innovations - Domestic only)
    pub const UPS_MI_FIRST_CLASS: Self = Self::from_static("UPS_MI_First_Class");
    /// 0.00 x 0.00 x 0.00 in
    /// Flat (Mail Innovations - Domestic only)
    pub const UPS_MI_FLAT: Self = Self::from_static("UPS_MI_Flat");
    /// 0.00 x 0.00 x 0.00 in
    /// Irregular (Mail Innovations - Domestic only)
    pub const UPS_MI_IRREGULAR: Self = Self::from_static("UPS_MI_Irregular");
    /// 0.00 x 0.00 x 0.00 in
    /// Machinable (Mail Innovations - Domestic only)
    pub const UPS_MI_MACHINABLE: Self = Self::from_static("UPS_MI_Machinable");
    /// 0.00 x 0.00 x 0.00 in
    /// Media Mail (Mail Innovations - Domestic only)
    pub const UPS_MI_MEDIA_MAIL: Self = Self::from_static("UPS_MI_MEDIA_MAIL");
    /// 0.00 x 0.00 x 0.00 in
    /// Parcel Post (Mail Innovations - Domestic only)
    pub const UPS_MI_PARCEL_POST: Self = Self::from_static("UPS_MI_Parcel_Post");
    /// 0.00 x 0.00 x 0.00 in
    /// Priority (Mail Innovations - Domestic only)
    pub const UPS_MI_PRIORITY: Self = Self::from_static("UPS_MI_Priority");
    /// 0.00 x 0.00 x 0.00 in
    /// Standard Flat (Mail Innovations - Domestic only)
    pub const UPS_MI_STANDARD_FLAT: Self = Self::from_static("UPS_MI_Standard_Flat");
    /// 14.75 x 11.00 x 2.00 in
    /// Pad Pak
    pub const UPS_PAD_PAK: Self = Self::from_static("UPS_Pad_Pak");
    /// 120.00 x 80.00 x 200.00 cm
    /// Pallet
    pub const UPS_PALLET: Self = Self::from_static("UPS_Pallet");

    // USPS
    /// 12.50 x 9.50 x 0.75 in
    pub const USPS_FLAT_RATE_CARDBOARD_ENVELOPE: Self = Self::from_static("USPS_FlatRateCardboardEnvelope");
    /// 12.50 x 9.50 x 0.75 in
    pub const USPS_FLAT_RATE_ENVELOPE: Self = Self::from_static("USPS_FlatRateEnvelope");
    /// 10.00 x 7.00 x 0.75 in
    pub const USPS_FLAT_RATE_GIFT_CARD_ENVELOPE: Self = Self::from_static("USPS_FlatRateGiftCardEnvelope");
    /// 15.00 x 9.50 x 0.75 in
    pub const USPS_FLAT_RATE_LEGAL_ENVELOPE: Self = Self::from_static("USPS_FlatRateLegalEnvelope");
    /// 12.50 x 9.50 x 1.00 in
    pub const USPS_FLAT_RATE_PADDED_ENVELOPE: Self = Self::from_static("USPS_FlatRatePaddedEnvelope");
    /// 10.00 x 5.00 x 0.75 in
    pub const USPS_FLAT_RATE_WINDOW_ENVELOPE: Self = Self::from_static("USPS_FlatRateWindowEnvelope");
    /// 0.00 x 0.00 x 0.00 in
    pub const USPS_IRREGULAR_PARCEL: Self = Self::from_static("USPS_IrregularParcel");
    /// 24.06 x 11.88 x 3.13 in
    pub const USPS_LARGE_FLAT_RATE_BOARD_GAME_BOX: Self = Self::from_static("USPS_LargeFlatRateBoardGameBox");
    /// 12.25 x 12.25 x 6.00 in
    pub const USPS_LARGE_FLAT_RATE_BOX: Self = Self::from_static("USPS_LargeFlatRateBox");
    /// 12.25 x 12.25 x 6.00 in
    pub const USPS_APO_FLAT_RATE_BOX: Self = Self::from_static("USPS_APOFlatRateBox");
    /// 9.60 x 6.40 x 2.20 in
    pub const USPS_LARGE_VIDEO_FLAT_RATE_BOX: Self = Self::from_static("USPS_LargeVideoFlatRateBox");
    /// 11.25 x 8.75 x 6.00 in
    pub const USPS_MEDIUM_FLAT_RATE_BOX1: Self = Self::from_static("USPS_MediumFlatRateBox1");
    /// 14.00 x 12.00 x 3.50 in
    pub const USPS_MEDIUM_FLAT_RATE_BOX2: Self = Self::from_static("USPS_MediumFlatRateBox2");
    /// 10.13 x 7.13 x 5.00 in
    pub const USPS_REGIONAL_RATE_BOX_A1: Self = Self::from_static("USPS_RegionalRateBoxA1");
    /// 13.06 x 11.06 x 2.50 in
    pub const USPS_REGIONAL_RATE_BOX_A2: Self = Self::from_static("USPS_RegionalRateBoxA2");
    /// 12.25 x 10.50 x 5.50 in
    pub const USPS_REGIONAL_RATE_BOX_B1: Self = Self::from_static("USPS_RegionalRateBoxB1");
    /// 16.25 x 14.50 x 3.00 in
    pub const USPS_REGIONAL_RATE_BOX_B2: Self = Self::from_static("USPS_RegionalRateBoxB2");
    /// 8.69 x 5.44 x 1.75 in
    pub const USPS_SMALL_FLAT_RATE_BOX: Self = Self::from_static("USPS_SmallFlatRateBox");
    /// 10.00 x 6.00 x 4.00 in
    pub const USPS_SMALL_FLAT_RATE_ENVELOPE: Self = Self::from_static("USPS_SmallFlatRateEnvelope");

    // DHL eCommerce
    /// 10.00 x 10.00 x 10.00 in
    /// Irregular Shipment
    pub const DHL_ECOMMERCE_IRREGULAR: Self = Self::from_static("DHLeC_Irregular");
    /// 27.00 x 17.00 x 17.00 in
    /// Flats
    pub const DHL_ECOMMERCE_SM_FLATS: Self = Self::from_static("DHLeC_SM_Flats");
}
