/// Copy of the broker symbol universe at one cache epoch.
///
/// Callers own this copy; a concurrent refresh never changes it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UniverseSnapshot {
    /// Broker-native names in the order the broker listed them.
    pub symbols: Vec<String>,
    /// Cache epoch the copy was taken from. Bumped on every replacement.
    pub epoch: u64,
}

impl UniverseSnapshot {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}
