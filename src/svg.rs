//! Locating the path expression inside an SVG document.

use std::str;

use log::trace;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};

use crate::error::Error;

const SVG_NAMESPACE: &[u8] = b"http://www.w3.org/2000/svg";

fn is_svg_element(namespace: Option<&[u8]>, e: &BytesStart, name: &[u8]) -> bool {
    namespace == Some(SVG_NAMESPACE) && e.local_name() == name
}

/// Replace literal tabs and line breaks in an attribute value with spaces.
fn normalize_whitespace(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

/// Return the unescaped, whitespace-normalized `d` attribute of a `path`
/// element.
fn path_data(e: &BytesStart) -> Result<String, Error> {
    e.attributes()
        .filter_map(Result::ok)
        .find_map(|attr: Attribute| {
            if attr.key == b"d" {
                attr.unescaped_value()
                    .ok()
                    .and_then(|v| str::from_utf8(&v).map(normalize_whitespace).ok())
            } else {
                None
            }
        })
        .ok_or_else(|| Error::NotFound("`path` element has no `d` attribute".into()))
}

/// Find the path expression of the shape stored in an SVG document.
///
/// The shape is the first SVG `path` element directly inside the first SVG
/// `g` element directly below the root element.
pub fn find_path_data(svg: &str) -> Result<String, Error> {
    trace!("find_path_data");

    let mut reader = quick_xml::Reader::from_str(svg);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut ns_buf = Vec::new();

    // Number of currently open elements
    let mut depth = 0_usize;
    let mut in_group = false;

    loop {
        match reader.read_namespaced_event(&mut buf, &mut ns_buf) {
            Ok((ns, Event::Start(ref e))) => {
                if !in_group && depth == 1 && is_svg_element(ns, e, b"g") {
                    trace!("find_path_data: Entering group");
                    in_group = true;
                } else if in_group && depth == 2 && is_svg_element(ns, e, b"path") {
                    trace!("find_path_data: Found path element");
                    return path_data(e);
                }
                depth += 1;
            }
            Ok((ns, Event::Empty(ref e))) => {
                if !in_group && depth == 1 && is_svg_element(ns, e, b"g") {
                    return Err(Error::NotFound("no `path` element in group".into()));
                } else if in_group && depth == 2 && is_svg_element(ns, e, b"path") {
                    trace!("find_path_data: Found path element");
                    return path_data(e);
                }
            }
            Ok((_, Event::End(_))) => {
                depth = depth.saturating_sub(1);
                if in_group && depth == 1 {
                    return Err(Error::NotFound("no `path` element in group".into()));
                }
            }
            Ok((_, Event::Eof)) => {
                trace!("find_path_data: EOF");
                break;
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(format!("Error when parsing XML: {}", e))),
        }

        buf.clear();
    }

    if in_group {
        Err(Error::NotFound("no `path` element in group".into()))
    } else {
        Err(Error::NotFound("no `g` element below the root element".into()))
    }
}
