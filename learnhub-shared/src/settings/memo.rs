/// Single-entry cache that recomputes only when its key changes.
#[derive(Debug, Clone, Default)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K: PartialEq, V> Memo<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let stale = self.entry.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| {
            let value = compute(&key);
            (key, value)
        });
        value
    }
}
