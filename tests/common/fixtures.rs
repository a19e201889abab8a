//! Test document and ramp fixtures.

use bandramp::{build_ramp, Color, Document, Element, Segment};

pub const GREEN: Color = Color::new(0, 255, 0);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const RED: Color = Color::new(255, 0, 0);

/// Green to yellow to red, `bands` per segment
pub fn traffic_light_ramp(bands: usize) -> Vec<Color> {
    build_ramp(&[
        Segment::new(GREEN, YELLOW, bands).unwrap(),
        Segment::new(YELLOW, RED, bands).unwrap(),
    ])
}

/// A document with one marked element per value, plus an unmarked element
pub fn document_with_values(marker: &str, values: &[&str]) -> Document {
    let mut elements: Vec<Element> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut element = Element::with_attribute(marker, v);
            element.id = Some(format!("cell-{}", i));
            element
        })
        .collect();
    elements.push(Element::with_attribute("class", "legend"));
    Document::new(elements)
}
