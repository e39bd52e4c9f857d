//! JSON serializer over the element snapshot

use crate::markup::ast::{snapshot_from_element, Element, ElementError, ElementResult};

pub fn serialize(element: &Element) -> ElementResult<String> {
    let snapshot = snapshot_from_element(element);
    serde_json::to_string_pretty(&snapshot)
        .map_err(|err| ElementError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::{ElementSnapshot, Image, Text};

    #[test]
    fn test_text_json() {
        let text: Element = Text::new("p", "Hi").unwrap().into();
        let json = serialize(&text).unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "node_type": "Text",
          "label": "p",
          "attributes": {
            "content": "Hi",
            "visibility": "visible"
          },
          "children": []
        }
        "###);
    }

    #[test]
    fn test_json_parses_back_into_snapshot() {
        let image: Element = Image::new("x.jpg").into();
        let json = serialize(&image).unwrap();
        let parsed: ElementSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot_from_element(&image));
    }
}
