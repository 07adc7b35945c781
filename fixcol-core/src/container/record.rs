use serde::{Deserialize, Serialize};

use crate::domain::{FieldDefinition, LayoutDefinition};

/// On-disk shape of one field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    #[serde(rename = "No")]
    pub no: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Digit")]
    pub digit: i64,
}

/// On-disk shape of one layout file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRecord {
    #[serde(rename = "Header")]
    pub header: String,
    #[serde(rename = "Contents")]
    pub contents: Vec<FieldRecord>,
}

impl From<&FieldDefinition> for FieldRecord {
    fn from(f: &FieldDefinition) -> Self {
        Self {
            no: i64::from(f.position),
            name: f.name.clone(),
            digit: f.width as i64,
        }
    }
}

impl From<FieldRecord> for FieldDefinition {
    fn from(r: FieldRecord) -> Self {
        Self {
            position: u32::try_from(r.no).unwrap_or(0),
            name: r.name,
            width: usize::try_from(r.digit).unwrap_or(0),
        }
    }
}

impl From<&LayoutDefinition> for LayoutRecord {
    fn from(l: &LayoutDefinition) -> Self {
        Self {
            header: l.label.clone(),
            contents: l.fields.iter().map(FieldRecord::from).collect(),
        }
    }
}

impl From<LayoutRecord> for LayoutDefinition {
    fn from(r: LayoutRecord) -> Self {
        Self {
            label: r.header,
            fields: r.contents.into_iter().map(FieldDefinition::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_pascal_case_keys() {
        let mut l = LayoutDefinition::new("tab");
        l.push_field(FieldDefinition::new(1, "id", 4));
        let json = serde_json::to_string(&LayoutRecord::from(&l)).unwrap();
        assert_eq!(
            json,
            r#"{"Header":"tab","Contents":[{"No":1,"Name":"id","Digit":4}]}"#
        );
    }

    #[test]
    fn negative_digit_clamps_to_zero() {
        let r: LayoutRecord = serde_json::from_str(
            r#"{"Header":"x","Contents":[{"No":1,"Name":"a","Digit":-2}]}"#,
        )
        .unwrap();
        let l = LayoutDefinition::from(r);
        assert_eq!(l.fields[0].width, 0);
    }

    #[test]
    fn missing_keys_are_rejected() {
        let r = serde_json::from_str::<LayoutRecord>(r#"{"Header":"x"}"#);
        assert!(r.is_err());
    }
}
