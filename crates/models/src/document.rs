//! The contact document: every contact keyed by its canonical id string.
//!
//! Entries keep the order in which they were inserted (or read from disk),
//! so a load/save cycle reproduces the file byte for byte.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contact::{ContactId, ContactRecord};
use crate::sort::{SortField, SortOrder};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDocument {
    entries: Vec<(ContactId, ContactRecord)>,
}

impl ContactDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: ContactId) -> Option<&ContactRecord> {
        self.position(id).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, id: ContactId) -> Option<&mut ContactRecord> {
        self.position(id).map(move |i| &mut self.entries[i].1)
    }

    /// Insert or replace. A new id is appended; an existing one keeps its slot.
    pub fn insert(&mut self, id: ContactId, record: ContactRecord) -> Option<ContactRecord> {
        match self.position(id) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, record)),
            None => {
                self.entries.push((id, record));
                None
            }
        }
    }

    pub fn remove(&mut self, id: ContactId) -> Option<ContactRecord> {
        self.position(id).map(|i| self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactId, &ContactRecord)> {
        self.entries.iter().map(|(id, rec)| (*id, rec))
    }

    /// Records ordered by `field`. The sort is stable in both directions:
    /// equal keys stay in document order.
    pub fn sorted_by(&self, field: SortField, order: SortOrder) -> Vec<ContactRecord> {
        let mut records: Vec<ContactRecord> = self.entries.iter().map(|(_, r)| r.clone()).collect();
        match order {
            SortOrder::Asc => records.sort_by(|a, b| field.key(a).cmp(field.key(b))),
            SortOrder::Desc => records.sort_by(|a, b| field.key(b).cmp(field.key(a))),
        }
        records
    }

    /// Human-readable JSON, four-space indent.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == id)
    }
}

impl Serialize for ContactDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(&id.to_string(), record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContactDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = ContactDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of canonical contact ids to {name, phone} records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();
        while let Some((key, record)) = access.next_entry::<String, ContactRecord>()? {
            let id = ContactId::from_canonical_key(&key).map_err(de::Error::custom)?;
            if !seen.insert(id) {
                return Err(de::Error::custom(format!("duplicate contact key {key:?}")));
            }
            entries.push((id, record));
        }
        Ok(ContactDocument { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, phone: &str) -> ContactRecord {
        ContactRecord { name: name.into(), phone: phone.into() }
    }

    fn id(raw: i64) -> ContactId {
        ContactId::new(raw).unwrap()
    }

    #[test]
    fn keeps_file_order() {
        let raw = br#"{"9": {"name": "Zed", "phone": "3"}, "2": {"name": "Amy", "phone": "1"}}"#;
        let doc = ContactDocument::from_json_slice(raw).expect("parse");
        let ids: Vec<u64> = doc.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, vec![9, 2]);

        let written = doc.to_pretty_json().expect("encode");
        let text = String::from_utf8(written).unwrap();
        assert!(text.find("\"9\"").unwrap() < text.find("\"2\"").unwrap());
        assert!(text.contains("\n    \"9\": {\n        \"name\": \"Zed\""));
    }

    #[test]
    fn rejects_structural_damage() {
        for raw in [
            r#"{"01": {"name": "a", "phone": "1"}}"#,
            r#"{"abc": {"name": "a", "phone": "1"}}"#,
            r#"{"0": {"name": "a", "phone": "1"}}"#,
            r#"{"1": {"name": "a"}}"#,
            r#"{"1": {"name": "a", "phone": "1", "email": "a@example.com"}}"#,
            r#"{"1": {"name": "a", "phone": "1"}, "1": {"name": "b", "phone": "2"}}"#,
            r#"[]"#,
        ] {
            assert!(ContactDocument::from_json_slice(raw.as_bytes()).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn insert_replace_remove() {
        let mut doc = ContactDocument::new();
        assert!(doc.insert(id(1), rec("Ann", "1")).is_none());
        assert!(doc.insert(id(2), rec("Bob", "2")).is_none());
        let old = doc.insert(id(1), rec("Ann", "9")).expect("replaced");
        assert_eq!(old.phone, "1");
        assert_eq!(doc.iter().next().unwrap().0, id(1));

        assert_eq!(doc.remove(id(1)).unwrap().name, "Ann");
        assert!(doc.remove(id(1)).is_none());
        assert_eq!(doc.len(), 1);
        assert!(doc.contains(id(2)));
    }

    #[test]
    fn sort_is_stable_both_ways() {
        let mut doc = ContactDocument::new();
        doc.insert(id(1), rec("Bea", "2"));
        doc.insert(id(2), rec("Al", "2"));
        doc.insert(id(3), rec("Cy", "1"));

        let asc = doc.sorted_by(SortField::Phone, SortOrder::Asc);
        let names: Vec<&str> = asc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cy", "Bea", "Al"]);

        let desc = doc.sorted_by(SortField::Phone, SortOrder::Desc);
        let names: Vec<&str> = desc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Al", "Cy"]);

        let by_name = doc.sorted_by(SortField::Name, SortOrder::Desc);
        assert_eq!(by_name[0].name, "Cy");
        assert_eq!(by_name.len(), doc.len());
    }
}
