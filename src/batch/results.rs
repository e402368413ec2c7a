//! Query results keyed by address.

use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};

use crate::upstream::types::{AirdropRecord, RewardRecord};

/// Reward and airdrop data for one address.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CombinedResult {
    reward: RewardRecord,
    airdrop: AirdropRecord,
}

impl CombinedResult {
    pub fn new(reward: RewardRecord, airdrop: AirdropRecord) -> Self {
        Self { reward, airdrop }
    }

    pub fn reward(&self) -> &RewardRecord {
        &self.reward
    }

    pub fn airdrop(&self) -> &AirdropRecord {
        &self.airdrop
    }
}

/// Insertion-ordered map from address to [`CombinedResult`].
///
/// Re-inserting an address replaces its value in place; the address keeps
/// the position of its first insertion.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    entries: Vec<(String, CombinedResult)>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous value for the address.
    pub fn insert(&mut self, address: String, result: CombinedResult) -> Option<CombinedResult> {
        match self.index.get(&address) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, result)),
            None => {
                self.index.insert(address.clone(), self.entries.len());
                self.entries.push((address, result));
                None
            }
        }
    }

    pub fn get(&self, address: &str) -> Option<&CombinedResult> {
        self.index.get(address).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.index.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Addresses in insertion order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(address, _)| address.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CombinedResult)> {
        self.entries.iter().map(|(address, result)| (address.as_str(), result))
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(balance: &str) -> CombinedResult {
        let reward: RewardRecord =
            serde_json::from_value(serde_json::json!({ "balance": balance })).unwrap();
        let airdrop: AirdropRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        CombinedResult::new(reward, airdrop)
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut set = ResultSet::new();
        set.insert("c".into(), result("1"));
        set.insert("a".into(), result("2"));
        set.insert("b".into(), result("3"));
        assert_eq!(set.addresses().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut set = ResultSet::new();
        set.insert("a".into(), result("1"));
        set.insert("b".into(), result("2"));
        let previous = set.insert("a".into(), result("9"));

        assert_eq!(previous.unwrap().reward().balance, "1");
        assert_eq!(set.len(), 2);
        assert_eq!(set.addresses().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.get("a").unwrap().reward().balance, "9");
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut set = ResultSet::new();
        set.insert("z".into(), result("1"));
        set.insert("y".into(), result("2"));
        let json = serde_json::to_string(&set).unwrap();

        let z = json.find("\"z\"").unwrap();
        let y = json.find("\"y\"").unwrap();
        assert!(z < y);
        assert!(json.contains("\"jagerBNB\":\"0\""));
    }
}
