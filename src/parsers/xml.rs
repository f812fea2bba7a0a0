//! Event-based XML parsing into [`XmlElement`] trees.

use crate::error::ParseErrorKind;
use crate::model::XmlElement;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse XML text into its root element.
///
/// Character data of an element is concatenated across child elements and
/// trimmed; whitespace-only text becomes `None`. Comments, processing
/// instructions and the declaration are skipped.
pub fn parse_xml(content: &str) -> Result<XmlElement, ParseErrorKind> {
    if content.trim().is_empty() {
        return Err(ParseErrorKind::EmptyDocument);
    }

    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    // Open elements with their accumulated character data.
    let mut stack: Vec<(XmlElement, String)> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(invalid(&reader, "multiple root elements"));
                }
                stack.push((start_element(e)?, String::new()));
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                attach(element, &mut stack, &mut root)
                    .map_err(|msg| invalid(&reader, msg))?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| invalid(&reader, &err.to_string()))?;
                match stack.last_mut() {
                    Some((_, buffer)) => buffer.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(invalid(&reader, "text outside the root element")),
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e);
                match stack.last_mut() {
                    Some((_, buffer)) => buffer.push_str(&text),
                    None => return Err(invalid(&reader, "CDATA outside the root element")),
                }
            }
            Ok(Event::End(_)) => {
                let Some((mut element, buffer)) = stack.pop() else {
                    return Err(invalid(&reader, "unexpected closing tag"));
                };
                let trimmed = buffer.trim();
                element.text = (!trimmed.is_empty()).then(|| trimmed.to_string());
                attach(element, &mut stack, &mut root)
                    .map_err(|msg| invalid(&reader, msg))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ParseErrorKind::InvalidXml(format!(
                    "{e} at position {}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    if let Some((open, _)) = stack.last() {
        return Err(ParseErrorKind::InvalidXml(format!(
            "unclosed element <{}>",
            open.tag
        )));
    }
    root.ok_or_else(|| ParseErrorKind::InvalidXml("no root element".to_string()))
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, ParseErrorKind> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut element = XmlElement::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| ParseErrorKind::InvalidXml(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| ParseErrorKind::InvalidXml(err.to_string()))?
            .into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}

/// Attach a finished element to its parent, or make it the root.
fn attach(
    element: XmlElement,
    stack: &mut [(XmlElement, String)],
    root: &mut Option<XmlElement>,
) -> Result<(), &'static str> {
    match stack.last_mut() {
        Some((parent, _)) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_some() => Err("multiple root elements"),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn invalid(reader: &Reader<&[u8]>, message: &str) -> ParseErrorKind {
    ParseErrorKind::InvalidXml(format!(
        "{message} at position {}",
        reader.buffer_position()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree() {
        let root = parse_xml(
            r#"<?xml version="1.0"?>
<letter lang="en" id="7">
  <to>Alice &amp; Bob</to>
  <body>
    <p>Hello</p>
    <p/>
  </body>
</letter>"#,
        )
        .expect("valid xml");

        assert_eq!(root.tag, "letter");
        let keys: Vec<_> = root.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["lang", "id"]);
        assert_eq!(root.text, None);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].text.as_deref(), Some("Alice & Bob"));
        assert_eq!(root.children[1].children.len(), 2);
        assert_eq!(root.children[1].children[1].text, None);
    }

    #[test]
    fn test_cdata_is_text() {
        let root = parse_xml("<a><![CDATA[x < y]]></a>").expect("valid xml");
        assert_eq!(root.text.as_deref(), Some("x < y"));
    }

    #[test]
    fn test_mismatched_tags() {
        assert!(matches!(
            parse_xml("<a><b></a></b>"),
            Err(ParseErrorKind::InvalidXml(_))
        ));
    }

    #[test]
    fn test_unclosed_element() {
        let err = parse_xml("<a><b></b>").expect_err("unclosed root");
        assert!(matches!(err, ParseErrorKind::InvalidXml(ref m) if m.contains("<a>")));
    }

    #[test]
    fn test_multiple_roots() {
        assert!(parse_xml("<a/><b/>").is_err());
        assert!(parse_xml("<a></a><b></b>").is_err());
    }

    #[test]
    fn test_text_outside_root() {
        assert!(parse_xml("<a/>trailing").is_err());
        assert!(parse_xml("not xml").is_err());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_xml(""), Err(ParseErrorKind::EmptyDocument));
    }
}
