use game_core::{BaseWeaponData, WeaponOracle, WeaponTable, WeaponTag};

/// Weapon content loaded from `weapons.ron`.
#[derive(Debug, Clone, Default)]
pub struct WeaponOracleImpl {
    table: WeaponTable,
}

impl WeaponOracleImpl {
    pub fn new(table: WeaponTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &WeaponTable {
        &self.table
    }
}

impl WeaponOracle for WeaponOracleImpl {
    fn base_data(&self, tag: WeaponTag) -> Option<BaseWeaponData> {
        self.table.base_data(tag)
    }

    fn tags(&self) -> Vec<WeaponTag> {
        self.table.tags()
    }
}
