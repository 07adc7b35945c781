// fixcol_core/src/domain.rs
use std::collections::HashSet;

use crate::error::{FixcolError, Result};

/// One column of a layout: `width` characters taken from the record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDefinition {
    /// 1-based ordinal. Owned by the layout's ordering, see [`LayoutDefinition::renumber`].
    pub position: u32,
    pub name: String,
    pub width: usize,
}

impl FieldDefinition {
    pub fn new(position: u32, name: impl Into<String>, width: usize) -> Self {
        Self {
            position,
            name: name.into(),
            width,
        }
    }

    /// Unnamed, zero-width field; what a freshly added row holds.
    pub fn blank(position: u32) -> Self {
        Self::new(position, String::new(), 0)
    }

    /// Width as typed by a user. Anything that is not a non-negative integer becomes 0.
    pub fn parse_width(text: &str) -> usize {
        text.trim().parse::<usize>().unwrap_or(0)
    }
}

/// A named, ordered set of fields ("tab").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutDefinition {
    pub label: String,
    pub fields: Vec<FieldDefinition>,
}

impl LayoutDefinition {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_blank_field(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: vec![FieldDefinition::blank(1)],
        }
    }

    pub fn push_field(&mut self, field: FieldDefinition) {
        self.fields.push(field);
    }

    /// Insert at `index` (clamped to the end). Positions are left untouched.
    pub fn insert_field(&mut self, index: usize, field: FieldDefinition) {
        let at = index.min(self.fields.len());
        self.fields.insert(at, field);
    }

    /// Remove the field currently holding `position`. Positions are left untouched.
    pub fn remove_field(&mut self, position: u32) -> Option<FieldDefinition> {
        let idx = self.fields.iter().position(|f| f.position == position)?;
        Some(self.fields.remove(idx))
    }

    pub fn field_mut(&mut self, position: u32) -> Option<&mut FieldDefinition> {
        self.fields.iter_mut().find(|f| f.position == position)
    }

    /// Rewrite positions to 1..=n following the current order.
    pub fn renumber(&mut self) {
        for (i, f) in self.fields.iter_mut().enumerate() {
            f.position = i as u32 + 1;
        }
    }

    pub fn total_width(&self) -> Option<usize> {
        total_width(&self.fields)
    }

    pub fn has_header(&self) -> bool {
        has_header(&self.fields)
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Sum of all widths, or `None` when it does not fit in a `usize`.
pub fn total_width(fields: &[FieldDefinition]) -> Option<usize> {
    fields.iter().try_fold(0usize, |acc, f| acc.checked_add(f.width))
}

/// A header row is written when at least one field is named.
pub fn has_header(fields: &[FieldDefinition]) -> bool {
    fields.iter().any(|f| !f.name.is_empty())
}

/// Labels must be non-empty and unique before a save or conversion.
/// The store itself does not check this; callers do.
pub fn validate_labels(layouts: &[LayoutDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for l in layouts {
        if l.label.is_empty() {
            return Err(FixcolError::InvalidLabels("empty label".into()));
        }
        if !seen.insert(l.label.as_str()) {
            return Err(FixcolError::InvalidLabels(format!(
                "duplicate label \"{}\"",
                l.label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(widths: &[usize]) -> LayoutDefinition {
        let mut l = LayoutDefinition::new("t");
        for (i, w) in widths.iter().enumerate() {
            l.push_field(FieldDefinition::new(i as u32 + 1, "", *w));
        }
        l
    }

    #[test]
    fn insert_then_renumber() {
        let mut l = layout(&[1, 2, 3]);
        l.insert_field(1, FieldDefinition::blank(0));
        assert_eq!(l.fields[1].position, 0);
        l.renumber();
        let pos: Vec<u32> = l.fields.iter().map(|f| f.position).collect();
        assert_eq!(pos, vec![1, 2, 3, 4]);
        assert_eq!(l.fields[2].width, 2);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut l = layout(&[1]);
        l.insert_field(10, FieldDefinition::new(0, "x", 4));
        assert_eq!(l.fields.last().map(|f| f.width), Some(4));
    }

    #[test]
    fn remove_then_renumber() {
        let mut l = layout(&[1, 2, 3]);
        let gone = l.remove_field(2).expect("field 2");
        assert_eq!(gone.width, 2);
        assert!(l.remove_field(9).is_none());
        l.renumber();
        let got: Vec<(u32, usize)> = l.fields.iter().map(|f| (f.position, f.width)).collect();
        assert_eq!(got, vec![(1, 1), (2, 3)]);
    }

    #[test]
    fn widths_and_header() {
        let mut l = layout(&[3, 2]);
        assert_eq!(l.total_width(), Some(5));
        assert!(!l.has_header());
        l.fields[1].name = "b".into();
        assert!(l.has_header());
        assert_eq!(l.header_names(), vec!["", "b"]);
    }

    #[test]
    fn oversized_widths_do_not_wrap() {
        let l = layout(&[usize::MAX, usize::MAX, 2]);
        assert_eq!(l.total_width(), None);
        assert_eq!(layout(&[usize::MAX, 0]).total_width(), Some(usize::MAX));
    }

    #[test]
    fn parse_width_coerces_bad_input() {
        assert_eq!(FieldDefinition::parse_width("12"), 12);
        assert_eq!(FieldDefinition::parse_width(" 7 "), 7);
        assert_eq!(FieldDefinition::parse_width("-3"), 0);
        assert_eq!(FieldDefinition::parse_width("abc"), 0);
        assert_eq!(FieldDefinition::parse_width(""), 0);
    }

    #[test]
    fn blank_layout_has_one_field() {
        let l = LayoutDefinition::with_blank_field("Custom");
        assert_eq!(l.fields, vec![FieldDefinition::blank(1)]);
    }

    #[test]
    fn labels_must_be_unique_and_non_empty() {
        let ok = vec![LayoutDefinition::new("a"), LayoutDefinition::new("b")];
        assert!(validate_labels(&ok).is_ok());

        let dup = vec![LayoutDefinition::new("a"), LayoutDefinition::new("a")];
        assert!(matches!(
            validate_labels(&dup),
            Err(FixcolError::InvalidLabels(_))
        ));

        let empty = vec![LayoutDefinition::new("")];
        assert!(validate_labels(&empty).is_err());
    }
}
