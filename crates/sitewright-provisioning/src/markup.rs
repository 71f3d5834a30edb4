//! Field-definition markup handling.
//!
//! Declared fields arrive as raw markup strings in the site's native
//! field-definition schema. Before submission the engine captures the
//! `InternalName`/`DisplayName` attribute pair and rewrites the display
//! name to the internal name, so the field is created under a stable,
//! non-localizable title and renamed to the declared display name in a
//! separate update. Creating directly under the display name makes the
//! remote service derive internals from it in ways a later rename cannot
//! undo.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

/// Errors raised while preparing field markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The markup is not well-formed.
    #[error("field markup is not well-formed: {0}")]
    Parse(String),

    /// The markup contains no element.
    #[error("field markup has no root element")]
    NoRootElement,

    /// The root element lacks a required attribute.
    #[error("field markup is missing the {0} attribute")]
    MissingAttribute(&'static str),
}

/// A field definition ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedField {
    /// Stable internal name of the field.
    pub internal_name: String,
    /// Declared display name, applied after creation.
    pub display_name: String,
    /// The markup with its display-name attribute set to the internal
    /// name.
    pub markup: String,
}

/// Parse a field definition, capture its name pair and rewrite the
/// display-name attribute to the internal name.
pub fn prepare_field_markup(markup: &str) -> Result<PreparedField, MarkupError> {
    let mut reader = Reader::from_str(markup);
    let mut writer = Writer::new(Vec::new());

    let mut internal_name: Option<String> = None;
    let mut display_name: Option<String> = None;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if !saw_root => {
                saw_root = true;
                let rewritten = rewrite_root(&e, &mut internal_name, &mut display_name)?;
                writer
                    .write_event(Event::Start(rewritten))
                    .map_err(|e| MarkupError::Parse(e.to_string()))?;
            }
            Ok(Event::Empty(e)) if !saw_root => {
                saw_root = true;
                let rewritten = rewrite_root(&e, &mut internal_name, &mut display_name)?;
                writer
                    .write_event(Event::Empty(rewritten))
                    .map_err(|e| MarkupError::Parse(e.to_string()))?;
            }
            Ok(Event::Eof) => break,
            Ok(event) => {
                writer
                    .write_event(event)
                    .map_err(|e| MarkupError::Parse(e.to_string()))?;
            }
            Err(e) => return Err(MarkupError::Parse(e.to_string())),
        }
    }

    if !saw_root {
        return Err(MarkupError::NoRootElement);
    }

    let internal_name = internal_name.ok_or(MarkupError::MissingAttribute("InternalName"))?;
    let display_name = display_name.ok_or(MarkupError::MissingAttribute("DisplayName"))?;
    let markup = String::from_utf8(writer.into_inner())
        .map_err(|e| MarkupError::Parse(e.to_string()))?;

    Ok(PreparedField {
        internal_name,
        display_name,
        markup,
    })
}

/// Capture the name pair from the root element and rebuild it with the
/// display-name attribute pointing at the internal name.
fn rewrite_root(
    element: &BytesStart<'_>,
    internal_name: &mut Option<String>,
    display_name: &mut Option<String>,
) -> Result<BytesStart<'static>, MarkupError> {
    let mut name_attr: Option<String> = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| MarkupError::Parse(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| MarkupError::Parse(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| MarkupError::Parse(e.to_string()))?;

        match key {
            "InternalName" => *internal_name = Some(value.to_string()),
            "Name" => name_attr = Some(value.to_string()),
            "DisplayName" => *display_name = Some(value.to_string()),
            _ => {}
        }
    }

    // The name pair is carried as InternalName or, on older definitions,
    // as Name.
    if internal_name.is_none() {
        *internal_name = name_attr;
    }

    let internal = internal_name
        .as_deref()
        .ok_or(MarkupError::MissingAttribute("InternalName"))?;

    let element_name = std::str::from_utf8(element.name().as_ref())
        .map_err(|e| MarkupError::Parse(e.to_string()))?
        .to_string();
    let mut rewritten = BytesStart::new(element_name);

    for attr in element.attributes() {
        let attr = attr.map_err(|e| MarkupError::Parse(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| MarkupError::Parse(e.to_string()))?;
        if key == "DisplayName" {
            rewritten.push_attribute(("DisplayName", internal));
        } else {
            let value = attr
                .unescape_value()
                .map_err(|e| MarkupError::Parse(e.to_string()))?;
            rewritten.push_attribute((key, value.as_ref()));
        }
    }

    Ok(rewritten)
}
