//! Annotated reconstruction of classified text
//!
//! The renderer partitions the original text back into literal fragments,
//! each annotated as plain or with its span's category. Concatenating the
//! fragments in order reproduces the input exactly; how an annotation is
//! visually realized is the presentation layer's business.

use super::lexeme::LexemeCategory;
use super::table::LexemeTable;

/// How a fragment of the reconstruction is annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Unclassified text between or around accepted spans.
    Plain,
    /// Text covered by an accepted span.
    Lexeme(LexemeCategory),
}

/// One literal piece of the source text with its annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'t> {
    pub text: &'t str,
    pub kind: FragmentKind,
}

/// Partition `text` into annotated fragments.
///
/// Spans are walked in ascending start order. The plain gap strictly between
/// consecutive spans is emitted only when non-empty; the tail after the last
/// span is always emitted, so empty input yields a single empty plain
/// fragment and the concatenation of every fragment reproduces `text` byte
/// for byte.
pub fn fragments<'t>(text: &'t str, table: &mut LexemeTable) -> Vec<Fragment<'t>> {
    let mut out = Vec::with_capacity(table.len() * 2 + 1);
    let mut cursor = 0;

    for span in table.ordered_view() {
        if span.start > cursor {
            out.push(Fragment {
                text: &text[cursor..span.start],
                kind: FragmentKind::Plain,
            });
        }
        out.push(Fragment {
            text: &text[span.range()],
            kind: FragmentKind::Lexeme(span.category),
        });
        cursor = span.end();
    }

    out.push(Fragment {
        text: &text[cursor..],
        kind: FragmentKind::Plain,
    });
    out
}
