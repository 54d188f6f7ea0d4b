//! Fluent builder for the `pass.json` document.
//!
//! # Responsibilities
//! - Group the documented key sets into section scopes
//! - Seed mandatory protocol constants (`formatVersion`)
//! - Serialize the accumulated document once, camelCase and null-free
//!
//! # Design Decisions
//! - Flat section structs composing the root instead of a builder class
//!   hierarchy; every scope is closed with `finish()` and the root's
//!   terminal is `build()`
//! - Style scopes own their fragment and install it under the style key on
//!   close, so an untouched style still serializes as `{}`

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::document::Document;
use super::fields::FieldsBuilder;
use super::values::{Barcode, Beacon, Location, Nfc, TransitType};

/// Root builder for a pass document.
///
/// Section methods open a scope over the documented key group; `build()`
/// serializes everything accumulated so far.
///
/// ```
/// use passkit_gateway::pass::{Barcode, BarcodeFormat, PassBuilder};
///
/// let pass = PassBuilder::new()
///     .standard()
///         .description("Coupon")
///         .organization_name("Acme")
///         .pass_type_identifier("pass.com.acme.coupon")
///         .serial_number("E5982H-I2")
///         .team_identifier("A1B2C3D4E5")
///         .finish()
///     .coupon()
///         .primary_fields()
///             .add("offer").label("Any purchase").value("25%")
///             .finish()
///         .finish()
///         .finish()
///     .visual_appearance()
///         .barcode(Barcode::new("E5982H-I2", BarcodeFormat::Qr))
///         .finish()
///     .build();
///
/// assert_eq!(pass["formatVersion"], 1);
/// ```
#[derive(Debug, Default)]
pub struct PassBuilder {
    doc: Document,
}

impl PassBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    /// Required identification keys. Seeds the mandatory `formatVersion = 1`.
    pub fn standard(mut self) -> StandardBuilder {
        self.doc.set("FormatVersion", 1);
        StandardBuilder { root: self }
    }

    pub fn associated_app(self) -> AssociatedAppBuilder {
        AssociatedAppBuilder { root: self }
    }

    pub fn companion_app(self) -> CompanionAppBuilder {
        CompanionAppBuilder { root: self }
    }

    pub fn expiration(self) -> ExpirationBuilder {
        ExpirationBuilder { root: self }
    }

    pub fn relevance(self) -> RelevanceBuilder {
        RelevanceBuilder { root: self }
    }

    pub fn boarding_pass(self) -> StyleBuilder {
        StyleBuilder::open(self, "BoardingPass")
    }

    pub fn coupon(self) -> StyleBuilder {
        StyleBuilder::open(self, "Coupon")
    }

    pub fn event_ticket(self) -> StyleBuilder {
        StyleBuilder::open(self, "EventTicket")
    }

    pub fn generic(self) -> StyleBuilder {
        StyleBuilder::open(self, "Generic")
    }

    pub fn store_card(self) -> StyleBuilder {
        StyleBuilder::open(self, "StoreCard")
    }

    pub fn visual_appearance(self) -> VisualAppearanceBuilder {
        VisualAppearanceBuilder { root: self }
    }

    pub fn web_service(self) -> WebServiceBuilder {
        WebServiceBuilder { root: self }
    }

    pub fn nfc_keys(self) -> NfcKeysBuilder {
        NfcKeysBuilder { root: self }
    }

    /// Escape hatch: store a raw value under the camelCase form of `name`.
    pub fn set_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.doc.set(name, value);
        self
    }

    /// Escape hatch: append a raw value to the sequence under the camelCase
    /// form of `name`.
    pub fn append_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.doc.append(name, value);
        self
    }

    /// Serialize the accumulated document, dropping null entries.
    pub fn build(self) -> Value {
        self.doc.into_value()
    }
}

/// Required top-level identification keys.
#[derive(Debug)]
pub struct StandardBuilder {
    root: PassBuilder,
}

impl StandardBuilder {
    /// Brief description shown by accessibility technologies.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.root.doc.set("Description", description.into());
        self
    }

    pub fn organization_name(mut self, name: impl Into<String>) -> Self {
        self.root.doc.set("OrganizationName", name.into());
        self
    }

    pub fn pass_type_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.root.doc.set("PassTypeIdentifier", identifier.into());
        self
    }

    pub fn serial_number(mut self, serial: impl Into<String>) -> Self {
        self.root.doc.set("SerialNumber", serial.into());
        self
    }

    pub fn team_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.root.doc.set("TeamIdentifier", identifier.into());
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// Keys linking the pass to an associated iOS app.
#[derive(Debug)]
pub struct AssociatedAppBuilder {
    root: PassBuilder,
}

impl AssociatedAppBuilder {
    /// URL the associated app is launched with; key `appLaunchURL`.
    pub fn app_launch_url(mut self, url: impl Into<String>) -> Self {
        self.root.doc.set("AppLaunchURL", url.into());
        self
    }

    /// Append an App Store item identifier; the first installable one is used.
    pub fn associated_store_identifier(mut self, identifier: u64) -> Self {
        self.root.doc.append("AssociatedStoreIdentifiers", identifier);
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// Keys for a paired watchOS companion app.
#[derive(Debug)]
pub struct CompanionAppBuilder {
    root: PassBuilder,
}

impl CompanionAppBuilder {
    /// Arbitrary JSON handed to the companion app.
    pub fn user_info(mut self, info: impl Into<Value>) -> Self {
        self.root.doc.set("UserInfo", info);
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// Expiration keys.
#[derive(Debug)]
pub struct ExpirationBuilder {
    root: PassBuilder,
}

impl ExpirationBuilder {
    pub fn expiration_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.root.doc.set("ExpirationDate", date.to_rfc3339());
        self
    }

    pub fn voided(mut self, voided: bool) -> Self {
        self.root.doc.set("Voided", voided);
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// Keys controlling when and where the pass surfaces on the lock screen.
#[derive(Debug)]
pub struct RelevanceBuilder {
    root: PassBuilder,
}

impl RelevanceBuilder {
    /// Append a beacon region to `beacons`.
    pub fn beacon(mut self, beacon: Beacon) -> Self {
        self.root.doc.append("Beacons", beacon);
        self
    }

    /// Append a location to `locations`.
    pub fn location(mut self, location: Location) -> Self {
        self.root.doc.append("Locations", location);
        self
    }

    /// Maximum distance in meters at which `locations` entries are relevant.
    pub fn max_distance(mut self, meters: u32) -> Self {
        self.root.doc.set("MaxDistance", meters);
        self
    }

    pub fn relevant_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.root.doc.set("RelevantDate", date.to_rfc3339());
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// One of the five mutually-exclusive pass layout kinds.
///
/// The scope owns its fragment; `finish()` installs it under the style key.
#[derive(Debug)]
pub struct StyleBuilder {
    root: PassBuilder,
    key: &'static str,
    doc: Document,
}

impl StyleBuilder {
    fn open(root: PassBuilder, key: &'static str) -> Self {
        Self {
            root,
            key,
            doc: Document::new(),
        }
    }

    pub fn auxiliary_fields(self) -> FieldsBuilder {
        FieldsBuilder::new(self, "AuxiliaryFields")
    }

    pub fn back_fields(self) -> FieldsBuilder {
        FieldsBuilder::new(self, "BackFields")
    }

    pub fn header_fields(self) -> FieldsBuilder {
        FieldsBuilder::new(self, "HeaderFields")
    }

    pub fn primary_fields(self) -> FieldsBuilder {
        FieldsBuilder::new(self, "PrimaryFields")
    }

    pub fn secondary_fields(self) -> FieldsBuilder {
        FieldsBuilder::new(self, "SecondaryFields")
    }

    /// Boarding passes only.
    pub fn transit_type(mut self, transit_type: TransitType) -> Self {
        self.doc.set("TransitType", transit_type);
        self
    }

    /// Escape hatch: store a raw value inside the style object.
    pub fn set_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.doc.set(name, value);
        self
    }

    /// Escape hatch: append a raw value to a sequence inside the style object.
    pub fn append_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.doc.append(name, value);
        self
    }

    /// Close the style scope and install the fragment under the style key.
    pub fn finish(mut self) -> PassBuilder {
        self.root.doc.set(self.key, self.doc);
        self.root
    }
}

/// Color, text, and barcode keys.
#[derive(Debug)]
pub struct VisualAppearanceBuilder {
    root: PassBuilder,
}

impl VisualAppearanceBuilder {
    /// Legacy single-barcode key, used by iOS 8 and earlier.
    pub fn barcode(mut self, barcode: Barcode) -> Self {
        self.root.doc.set("Barcode", barcode);
        self
    }

    /// Append to `barcodes`; the first format the device supports is shown.
    pub fn add_barcode(mut self, barcode: Barcode) -> Self {
        self.root.doc.append("Barcodes", barcode);
        self
    }

    /// Background color, as a CSS-style rgb triple, e.g. `rgb(23, 187, 82)`.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.root.doc.set("BackgroundColor", color.into());
        self
    }

    pub fn foreground_color(mut self, color: impl Into<String>) -> Self {
        self.root.doc.set("ForegroundColor", color.into());
        self
    }

    /// Groups passes with the same style, identifier, and grouping key.
    pub fn grouping_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.root.doc.set("GroupingIdentifier", identifier.into());
        self
    }

    pub fn label_color(mut self, color: impl Into<String>) -> Self {
        self.root.doc.set("LabelColor", color.into());
        self
    }

    pub fn logo_text(mut self, text: impl Into<String>) -> Self {
        self.root.doc.set("LogoText", text.into());
        self
    }

    pub fn suppress_strip_shine(mut self, suppress: bool) -> Self {
        self.root.doc.set("SuppressStripShine", suppress);
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// Keys wiring the pass to its update web service.
#[derive(Debug)]
pub struct WebServiceBuilder {
    root: PassBuilder,
}

impl WebServiceBuilder {
    /// Token the device presents back in the `Authorization` header.
    pub fn authentication_token(mut self, token: impl Into<String>) -> Self {
        self.root.doc.set("AuthenticationToken", token.into());
        self
    }

    /// Base URL of the update web service; key `webServiceURL`.
    pub fn web_service_url(mut self, url: impl Into<String>) -> Self {
        self.root.doc.set("WebServiceURL", url.into());
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}

/// NFC keys.
#[derive(Debug)]
pub struct NfcKeysBuilder {
    root: PassBuilder,
}

impl NfcKeysBuilder {
    pub fn nfc(mut self, nfc: Nfc) -> Self {
        self.root.doc.set("Nfc", nfc);
        self
    }

    pub fn finish(self) -> PassBuilder {
        self.root
    }
}
