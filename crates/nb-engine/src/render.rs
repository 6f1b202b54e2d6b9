use nb_core::{Identity, NumBurstError};

use crate::scanner::scan_markers;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(usize),
}

/// Template split once into literal text and identity slots, so every render
/// is a single pass over the pristine template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRenderer {
    segments: Vec<Segment>,
    arity: usize,
}

impl TemplateRenderer {
    /// Markers whose identity is not in `identities` stay as literal text.
    pub fn new(template: &str, identities: &[Identity]) -> Self {
        let mut segments = Vec::new();
        let mut cursor = 0usize;
        for marker in scan_markers(template) {
            let slot = identities
                .iter()
                .position(|identity| *identity == marker.identity);
            let Some(slot) = slot else {
                continue;
            };
            if marker.span.start > cursor {
                segments.push(Segment::Literal(
                    template[cursor..marker.span.start].to_string(),
                ));
            }
            segments.push(Segment::Slot(slot));
            cursor = marker.span.end;
        }
        if cursor < template.len() {
            segments.push(Segment::Literal(template[cursor..].to_string()));
        }

        Self {
            segments,
            arity: identities.len(),
        }
    }

    pub fn render(&self, values: &[i64]) -> Result<String, NumBurstError> {
        let mut out = String::new();
        self.render_into(values, &mut out)?;
        Ok(out)
    }

    /// Appends the rendered document to `out`.
    pub fn render_into(&self, values: &[i64], out: &mut String) -> Result<(), NumBurstError> {
        if values.len() != self.arity {
            return Err(NumBurstError::new(
                "RENDER_ARITY",
                format!(
                    "Combination has {} values but template has {} identities.",
                    values.len(),
                    self.arity
                ),
            ));
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(index) => out.push_str(&values[*index].to_string()),
            }
        }
        Ok(())
    }
}
