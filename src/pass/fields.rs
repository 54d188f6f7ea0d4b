//! Field-collection and field builders for style sections.
//!
//! A field collection is a named ordered list of label/value objects inside
//! a style block (`headerFields`, `primaryFields`, `secondaryFields`,
//! `auxiliaryFields`, `backFields`). `add(key)` opens a new field object
//! seeded with its mandatory `key`; closing the field appends it to the
//! collection in insertion order.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::builder::StyleBuilder;
use super::document::Document;
use super::values::{DataDetectorType, DateStyle, NumberStyle, TextAlignment};

/// One named field collection within a style scope.
#[derive(Debug)]
pub struct FieldsBuilder {
    style: StyleBuilder,
    collection: &'static str,
}

impl FieldsBuilder {
    pub(crate) fn new(style: StyleBuilder, collection: &'static str) -> Self {
        Self { style, collection }
    }

    /// Open a new field object seeded with the mandatory `key`.
    pub fn add(self, key: impl Into<String>) -> FieldBuilder {
        let mut doc = Document::new();
        doc.set("Key", key.into());
        FieldBuilder { fields: self, doc }
    }

    /// Close the collection scope.
    pub fn finish(self) -> StyleBuilder {
        self.style
    }
}

/// A single field object, scoped to the collection that opened it.
#[derive(Debug)]
pub struct FieldBuilder {
    fields: FieldsBuilder,
    doc: Document,
}

impl FieldBuilder {
    /// Label text displayed next to the value.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.doc.set("Label", label.into());
        self
    }

    /// Field value; a string or a number.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.doc.set("Value", value);
        self
    }

    /// Date field value, rendered RFC 3339 with its offset.
    pub fn date_value(mut self, date: DateTime<FixedOffset>) -> Self {
        self.doc.set("Value", date.to_rfc3339());
        self
    }

    /// HTML-ish attributed variant of the value; supports `<a>` tags.
    pub fn attributed_value(mut self, value: impl Into<Value>) -> Self {
        self.doc.set("AttributedValue", value);
        self
    }

    /// Format string for the change notification; must contain `%@`.
    pub fn change_message(mut self, message: impl Into<String>) -> Self {
        self.doc.set("ChangeMessage", message.into());
        self
    }

    /// ISO 4217 currency code; mutually exclusive with `number_style`.
    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.doc.set("CurrencyCode", code.into());
        self
    }

    /// Append a detector to `dataDetectorTypes`; back fields only.
    pub fn data_detector_type(mut self, detector: DataDetectorType) -> Self {
        self.doc.append("DataDetectorTypes", detector);
        self
    }

    pub fn date_style(mut self, style: DateStyle) -> Self {
        self.doc.set("DateStyle", style);
        self
    }

    pub fn time_style(mut self, style: DateStyle) -> Self {
        self.doc.set("TimeStyle", style);
        self
    }

    pub fn ignores_time_zone(mut self, ignores: bool) -> Self {
        self.doc.set("IgnoresTimeZone", ignores);
        self
    }

    /// Display the date value relative to now instead of absolute.
    pub fn is_relative(mut self, relative: bool) -> Self {
        self.doc.set("IsRelative", relative);
        self
    }

    pub fn number_style(mut self, style: NumberStyle) -> Self {
        self.doc.set("NumberStyle", style);
        self
    }

    pub fn text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.doc.set("TextAlignment", alignment);
        self
    }

    /// Close this field and append it to its collection.
    pub fn finish(self) -> FieldsBuilder {
        let FieldBuilder { fields, doc } = self;
        let FieldsBuilder { style, collection } = fields;
        FieldsBuilder {
            style: style.append_value(collection, doc),
            collection,
        }
    }

    /// Shortcut: close this field and open the next one.
    pub fn add(self, key: impl Into<String>) -> FieldBuilder {
        self.finish().add(key)
    }
}
