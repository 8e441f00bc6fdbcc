use super::prefs::ColumnPrefs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistPrefs {
        storage_key: String,
        prefs: ColumnPrefs,
    },
}
