//! Vendor-defined value types and enumeration tables for `pass.json`.
//!
//! The `PK*` identifier strings are an external Apple contract; the tables
//! below reproduce them verbatim from the PassKit documentation.

use serde_json::{Map, Value};

/// Barcode symbology, rendered as the vendor identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeFormat {
    Qr,
    Pdf417,
    Aztec,
    Code128,
}

impl BarcodeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            BarcodeFormat::Qr => "PKBarcodeFormatQR",
            BarcodeFormat::Pdf417 => "PKBarcodeFormatPDF417",
            BarcodeFormat::Aztec => "PKBarcodeFormatAztec",
            BarcodeFormat::Code128 => "PKBarcodeFormatCode128",
        }
    }
}

/// Transit kind shown on a boarding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitType {
    Air,
    Boat,
    Bus,
    Generic,
    Train,
}

impl TransitType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitType::Air => "PKTransitTypeAir",
            TransitType::Boat => "PKTransitTypeBoat",
            TransitType::Bus => "PKTransitTypeBus",
            TransitType::Generic => "PKTransitTypeGeneric",
            TransitType::Train => "PKTransitTypeTrain",
        }
    }
}

/// Horizontal alignment of a field's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Natural,
}

impl TextAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlignment::Left => "PKTextAlignmentLeft",
            TextAlignment::Center => "PKTextAlignmentCenter",
            TextAlignment::Right => "PKTextAlignmentRight",
            TextAlignment::Natural => "PKTextAlignmentNatural",
        }
    }
}

/// Display style for a date or time field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    None,
    Short,
    Medium,
    Long,
    Full,
}

impl DateStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DateStyle::None => "PKDateStyleNone",
            DateStyle::Short => "PKDateStyleShort",
            DateStyle::Medium => "PKDateStyleMedium",
            DateStyle::Long => "PKDateStyleLong",
            DateStyle::Full => "PKDateStyleFull",
        }
    }
}

/// Display style for a numeric field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Decimal,
    Percent,
    Scientific,
    SpellOut,
}

impl NumberStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberStyle::Decimal => "PKNumberStyleDecimal",
            NumberStyle::Percent => "PKNumberStylePercent",
            NumberStyle::Scientific => "PKNumberStyleScientific",
            NumberStyle::SpellOut => "PKNumberStyleSpellOut",
        }
    }
}

/// Data detector applied to a back-field's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDetectorType {
    PhoneNumber,
    Link,
    Address,
    CalendarEvent,
}

impl DataDetectorType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataDetectorType::PhoneNumber => "PKDataDetectorTypePhoneNumber",
            DataDetectorType::Link => "PKDataDetectorTypeLink",
            DataDetectorType::Address => "PKDataDetectorTypeAddress",
            DataDetectorType::CalendarEvent => "PKDataDetectorTypeCalendarEvent",
        }
    }
}

macro_rules! enum_into_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Value {
                    Value::String(value.as_str().to_owned())
                }
            }
        )*
    };
}

enum_into_value!(
    BarcodeFormat,
    TransitType,
    TextAlignment,
    DateStyle,
    NumberStyle,
    DataDetectorType,
);

/// Barcode displayed on the pass.
#[derive(Debug, Clone)]
pub struct Barcode {
    pub message: String,
    pub format: BarcodeFormat,
    pub alt_text: Option<String>,
    /// Text encoding of `message`; Apple's default is `iso-8859-1`.
    pub message_encoding: String,
}

impl Barcode {
    pub fn new(message: impl Into<String>, format: BarcodeFormat) -> Self {
        Self {
            message: message.into(),
            format,
            alt_text: None,
            message_encoding: "iso-8859-1".to_owned(),
        }
    }

    /// Human-readable text shown near the barcode.
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_message_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.message_encoding = encoding.into();
        self
    }
}

impl From<Barcode> for Value {
    fn from(barcode: Barcode) -> Value {
        let mut map = Map::new();
        map.insert("format".to_owned(), barcode.format.into());
        map.insert("message".to_owned(), Value::String(barcode.message));
        if let Some(alt_text) = barcode.alt_text {
            map.insert("altText".to_owned(), Value::String(alt_text));
        }
        map.insert(
            "messageEncoding".to_owned(),
            Value::String(barcode.message_encoding),
        );
        Value::Object(map)
    }
}

/// NFC payload transmitted when the pass is presented.
#[derive(Debug, Clone)]
pub struct Nfc {
    pub message: String,
    pub encryption_public_key: Option<String>,
}

impl Nfc {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            encryption_public_key: None,
        }
    }

    pub fn with_encryption_public_key(mut self, key: impl Into<String>) -> Self {
        self.encryption_public_key = Some(key.into());
        self
    }
}

impl From<Nfc> for Value {
    fn from(nfc: Nfc) -> Value {
        let mut map = Map::new();
        map.insert("message".to_owned(), Value::String(nfc.message));
        if let Some(key) = nfc.encryption_public_key {
            map.insert("encryptionPublicKey".to_owned(), Value::String(key));
        }
        Value::Object(map)
    }
}

/// iBeacon region where the pass becomes relevant.
#[derive(Debug, Clone)]
pub struct Beacon {
    pub proximity_uuid: String,
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub relevant_text: Option<String>,
}

impl Beacon {
    pub fn new(proximity_uuid: impl Into<String>) -> Self {
        Self {
            proximity_uuid: proximity_uuid.into(),
            major: None,
            minor: None,
            relevant_text: None,
        }
    }

    pub fn with_major(mut self, major: u32) -> Self {
        self.major = Some(major);
        self
    }

    pub fn with_minor(mut self, minor: u32) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn with_relevant_text(mut self, text: impl Into<String>) -> Self {
        self.relevant_text = Some(text.into());
        self
    }
}

impl From<Beacon> for Value {
    fn from(beacon: Beacon) -> Value {
        let mut map = Map::new();
        map.insert(
            "proximityUUID".to_owned(),
            Value::String(beacon.proximity_uuid),
        );
        if let Some(major) = beacon.major {
            map.insert("major".to_owned(), major.into());
        }
        if let Some(minor) = beacon.minor {
            map.insert("minor".to_owned(), minor.into());
        }
        if let Some(text) = beacon.relevant_text {
            map.insert("relevantText".to_owned(), Value::String(text));
        }
        Value::Object(map)
    }
}

/// Geographic location where the pass becomes relevant.
#[derive(Debug, Clone)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub relevant_text: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            relevant_text: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_relevant_text(mut self, text: impl Into<String>) -> Self {
        self.relevant_text = Some(text.into());
        self
    }
}

impl From<Location> for Value {
    fn from(location: Location) -> Value {
        let mut map = Map::new();
        map.insert("latitude".to_owned(), location.latitude.into());
        map.insert("longitude".to_owned(), location.longitude.into());
        if let Some(altitude) = location.altitude {
            map.insert("altitude".to_owned(), altitude.into());
        }
        if let Some(text) = location.relevant_text {
            map.insert("relevantText".to_owned(), Value::String(text));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_barcode_format_table() {
        assert_eq!(BarcodeFormat::Qr.as_str(), "PKBarcodeFormatQR");
        assert_eq!(BarcodeFormat::Pdf417.as_str(), "PKBarcodeFormatPDF417");
        assert_eq!(BarcodeFormat::Aztec.as_str(), "PKBarcodeFormatAztec");
        assert_eq!(BarcodeFormat::Code128.as_str(), "PKBarcodeFormatCode128");
    }

    #[test]
    fn test_transit_type_table() {
        assert_eq!(TransitType::Air.as_str(), "PKTransitTypeAir");
        assert_eq!(TransitType::Boat.as_str(), "PKTransitTypeBoat");
        assert_eq!(TransitType::Bus.as_str(), "PKTransitTypeBus");
        assert_eq!(TransitType::Generic.as_str(), "PKTransitTypeGeneric");
        assert_eq!(TransitType::Train.as_str(), "PKTransitTypeTrain");
    }

    #[test]
    fn test_style_tables() {
        assert_eq!(TextAlignment::Natural.as_str(), "PKTextAlignmentNatural");
        assert_eq!(DateStyle::Medium.as_str(), "PKDateStyleMedium");
        assert_eq!(NumberStyle::SpellOut.as_str(), "PKNumberStyleSpellOut");
        assert_eq!(
            DataDetectorType::CalendarEvent.as_str(),
            "PKDataDetectorTypeCalendarEvent"
        );
    }

    #[test]
    fn test_barcode_defaults() {
        let barcode = Barcode::new("123456789", BarcodeFormat::Qr);
        assert_eq!(
            Value::from(barcode),
            json!({
                "format": "PKBarcodeFormatQR",
                "message": "123456789",
                "messageEncoding": "iso-8859-1",
            })
        );
    }

    #[test]
    fn test_barcode_alt_text() {
        let barcode = Barcode::new("m", BarcodeFormat::Code128).with_alt_text("m");
        let value = Value::from(barcode);
        assert_eq!(value["altText"], "m");
    }

    #[test]
    fn test_nfc_optional_key_omitted() {
        assert_eq!(Value::from(Nfc::new("hello")), json!({ "message": "hello" }));
        assert_eq!(
            Value::from(Nfc::new("hello").with_encryption_public_key("pk")),
            json!({ "message": "hello", "encryptionPublicKey": "pk" })
        );
    }

    #[test]
    fn test_beacon_and_location_keys() {
        assert_eq!(
            Value::from(Beacon::new("uuid-1").with_major(7)),
            json!({ "proximityUUID": "uuid-1", "major": 7 })
        );
        assert_eq!(
            Value::from(Location::new(55.75, 37.61).with_relevant_text("near")),
            json!({ "latitude": 55.75, "longitude": 37.61, "relevantText": "near" })
        );
    }
}
