//! Fluent assembly of the `pass.json` document.
//!
//! # Responsibilities
//! - Build the nested pass description incrementally via scoped sections
//! - Serialize once: camelCase keys, nulls omitted, insertion order kept
//! - Carry the vendor-defined value types and `PK*` enumeration tables

mod builder;
mod document;
mod fields;
mod values;

pub use builder::{
    AssociatedAppBuilder, CompanionAppBuilder, ExpirationBuilder, NfcKeysBuilder, PassBuilder,
    RelevanceBuilder, StandardBuilder, StyleBuilder, VisualAppearanceBuilder, WebServiceBuilder,
};
pub use fields::{FieldBuilder, FieldsBuilder};
pub use values::{
    Barcode, BarcodeFormat, Beacon, DataDetectorType, DateStyle, Location, Nfc, NumberStyle,
    TextAlignment, TransitType,
};
