use crate::anchor::Anchor;
use crate::error::{Error, Result};
use crate::store::AnchorStore;

/// Anchors kept in a `Vec`, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    anchors: Vec<Anchor>,
    last_id: i64,
}

impl MemoryStore {
    fn position(&self, key: &str) -> Option<usize> {
        self.anchors.iter().position(|anchor| anchor.key == key)
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.last_id += 1;
        self.anchors.push(Anchor {
            id: self.last_id,
            key: key.to_string(),
            value: value.to_string(),
        });
    }
}

impl AnchorStore for MemoryStore {
    fn create(&mut self, key: &str, value: &str) -> Result<()> {
        if self.position(key).is_some() {
            return Err(Error::Uniqueness(key.to_string()));
        }

        self.insert(key, value);
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Anchor> {
        self.position(key)
            .map(|index| self.anchors[index].clone())
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    fn read_all(&self) -> Result<Vec<Anchor>> {
        Ok(self.anchors.clone())
    }

    fn update(&mut self, anchor: &Anchor) -> Result<()> {
        let index = self
            .position(&anchor.key)
            .ok_or_else(|| Error::NotFound(anchor.key.clone()))?;

        let stored = &mut self.anchors[index];
        stored.key.clone_from(&anchor.key);
        stored.value.clone_from(&anchor.value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let index = self
            .position(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;

        self.anchors.remove(index);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.anchors.clear();
        Ok(())
    }

    fn import(&mut self, anchors: &[Anchor]) -> Result<usize> {
        let mut inserted = 0;

        for anchor in anchors {
            if self.position(&anchor.key).is_none() {
                self.insert(&anchor.key, &anchor.value);
                inserted += 1;
            }
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_survive_deletes() {
        let mut store = MemoryStore::default();
        store.create("a", "1").unwrap();
        store.create("b", "2").unwrap();
        store.delete("a").unwrap();
        store.create("c", "3").unwrap();

        let ids: Vec<i64> = store.read_all().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_update_keeps_id() {
        let mut store = MemoryStore::default();
        store.create("hello", "world").unwrap();
        let before = store.read("hello").unwrap();

        store.update(&Anchor::new("hello", "goodbye")).unwrap();

        let after = store.read("hello").unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.value, "goodbye");
    }
}
