use crossterm::style::{Color, Stylize};
use nb_core::Identity;
use nb_engine::scan_markers;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

pub(crate) fn identity_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

fn paint(text: &str, index: usize, color: bool) -> String {
    if color {
        text.with(identity_color(index)).to_string()
    } else {
        text.to_string()
    }
}

/// Template text with each identity's markers highlighted, followed by the
/// identity legend.
pub(crate) fn format_preview(template: &str, identities: &[Identity], color: bool) -> String {
    let mut out = String::from("Template preview:\n");
    let mut cursor = 0usize;
    for marker in scan_markers(template) {
        out.push_str(&template[cursor..marker.span.start]);
        let text = &template[marker.span.clone()];
        match identities
            .iter()
            .position(|identity| *identity == marker.identity)
        {
            Some(index) => out.push_str(&paint(text, index, color)),
            None => out.push_str(text),
        }
        cursor = marker.span.end;
    }
    out.push_str(&template[cursor..]);

    out.push_str("\n\nIdentities:\n");
    for (index, identity) in identities.iter().enumerate() {
        out.push_str("  ");
        out.push_str(&paint(&identity.marker(), index, color));
        out.push('\n');
    }
    out
}
