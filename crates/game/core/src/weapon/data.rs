/// Immutable per-weapon content, shared by every instance of that weapon.
///
/// - `area`: size of the attack or projectile
/// - `speed`: projectile speed
/// - `duration`: how long an attack lasts
/// - `cooldown`: seconds before the attack triggers again
/// - `proj_interval`: delay between extra projectiles within one volley
/// - `hit_delay`: seconds before the same enemy can be hit again
/// - `amount`: projectiles per volley
/// - `pierce`: enemies hit before the projectile is spent
/// - `limit`: projectiles allowed on screen
/// - `rarity`: informational weight carried from content
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseWeaponData {
    pub name: String,
    pub damage: f32,
    pub speed: f32,
    pub area: f32,
    pub cooldown: f32,
    pub duration: f32,
    pub proj_interval: f32,
    pub hit_delay: f32,
    pub knockback: f32,
    pub crit_chance: f32,
    pub crit_multi: f32,
    pub amount: i32,
    pub pierce: i32,
    pub limit: i32,
    pub wall_block: bool,
    pub rarity: u32,
}

impl BaseWeaponData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_damage(mut self, damage: f32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_cooldown(mut self, cooldown: f32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_area(mut self, area: f32) -> Self {
        self.area = area;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_proj_interval(mut self, proj_interval: f32) -> Self {
        self.proj_interval = proj_interval;
        self
    }
}

impl Default for BaseWeaponData {
    fn default() -> Self {
        Self {
            name: String::new(),
            damage: 1.0,
            speed: 1.0,
            area: 1.0,
            cooldown: 1.0,
            duration: 1.0,
            proj_interval: 0.1,
            hit_delay: 0.5,
            knockback: 1.0,
            crit_chance: 0.0,
            crit_multi: 2.0,
            amount: 1,
            pierce: 1,
            limit: 0,
            wall_block: false,
            rarity: 1,
        }
    }
}
