//! Extension traits for parsing raw bodies into structured data.

use std::collections::BTreeMap;

use error_stack::{report, ResultExt};
use quick_xml::{events::Event, Reader};
use serde::de::DeserializeOwned;

use crate::errors::{CustomResult, ParsingError};

const FLAT_XML: &str = "flat XML document";

pub trait ByteSliceExt {
    /// Parses a JSON body into `T`, tagging failures with the target type name.
    fn parse_struct<T: DeserializeOwned>(
        &self,
        type_name: &'static str,
    ) -> CustomResult<T, ParsingError>;
}

impl ByteSliceExt for [u8] {
    fn parse_struct<T: DeserializeOwned>(
        &self,
        type_name: &'static str,
    ) -> CustomResult<T, ParsingError> {
        serde_json::from_slice(self).change_context(ParsingError::StructParseFailure(type_name))
    }
}

pub trait XmlExt {
    /// Reads a flat XML document into a field map: each element below the
    /// root becomes one entry, keyed by its tag name. The root element's own
    /// name is not inspected. Self-closing elements map to empty strings.
    fn parse_flat_xml(&self) -> CustomResult<BTreeMap<String, String>, ParsingError>;
}

impl XmlExt for str {
    fn parse_flat_xml(&self) -> CustomResult<BTreeMap<String, String>, ParsingError> {
        let mut reader = Reader::from_str(self);
        reader.trim_text(true);

        let mut fields = BTreeMap::new();
        let mut depth = 0usize;
        let mut current_name: Option<String> = None;
        let mut current_text = String::new();

        loop {
            let event = reader
                .read_event()
                .change_context(ParsingError::StructParseFailure(FLAT_XML))?;
            match event {
                Event::Start(start) => {
                    depth += 1;
                    if depth > 1 {
                        current_name =
                            Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                        current_text.clear();
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .change_context(ParsingError::StructParseFailure(FLAT_XML))?;
                    current_text.push_str(&text);
                }
                Event::CData(data) => {
                    current_text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
                Event::End(_) => {
                    if depth > 1 {
                        if let Some(name) = current_name.take() {
                            fields.insert(name, std::mem::take(&mut current_text));
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Empty(empty) => {
                    if depth >= 1 {
                        fields.insert(
                            String::from_utf8_lossy(empty.name().as_ref()).into_owned(),
                            String::new(),
                        );
                    }
                }
                Event::Eof => {
                    if depth != 0 {
                        return Err(report!(ParsingError::StructParseFailure(FLAT_XML)));
                    }
                    break;
                }
                _ => {}
            }
        }

        Ok(fields)
    }
}
