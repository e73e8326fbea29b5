//! Renders a sequence of extensions as a bracketed list, e.g. ` [SSE2,AVX512_VL,386]`

use std::{borrow::Borrow, fmt::Display};

use crate::Arch;

/// Renders `archs` as a comma-separated list between brackets, preceded by a space.
///
/// Extensions keep their input order and duplicates are kept. An empty sequence renders as an
/// empty string, without brackets.
pub fn archs_to_string<I>(archs: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<Arch>,
{
    let mut s = String::new();
    for arch in archs {
        s += if s.is_empty() { " [" } else { "," };
        s += arch.borrow().to_str();
    }
    if !s.is_empty() {
        s += "]";
    }
    s
}

/// [`Display`] adapter over a slice of extensions, formatted the same way as [`archs_to_string`]
#[derive(Copy, Clone, Debug)]
pub struct ArchList<'a>(pub &'a [Arch]);

impl Display for ArchList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return Ok(());
        };
        write!(f, " [{first}")?;
        for arch in rest {
            write!(f, ",{arch}")?;
        }
        write!(f, "]")
    }
}
