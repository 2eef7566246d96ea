use once_cell::sync::Lazy;
use serde::Serialize;

pub const MAX_LEVEL: u32 = 99;

/// XP_TABLE[l] is the cumulative XP required to reach level `l + 1`.
/// Entry 0 is zero; entry 98 is the requirement for the level cap.
static XP_TABLE: Lazy<[u64; MAX_LEVEL as usize]> = Lazy::new(|| {
    let mut table = [0u64; MAX_LEVEL as usize];
    let mut sum = 0f64;
    for level in 1..MAX_LEVEL as usize {
        let i = level as f64;
        sum += (i + 150.0 * 2f64.powf(i / 10.0)).floor();
        table[level] = (sum / 4.0).floor() as u64;
    }
    table
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub level: u32,
    pub xp_to_next_level: f64,
    pub progress: f64,
}

/// Map experience points onto the 1..=99 level curve.
///
/// Negative or NaN input behaves like zero XP. Once the cap is reached the
/// result is `level = 99` with no progress and nothing left to earn.
pub fn level_from_xp(xp: f64) -> LevelStats {
    let xp = if xp.is_nan() || xp < 0.0 { 0.0 } else { xp };

    for level in 1..MAX_LEVEL {
        let next_level_xp = XP_TABLE[level as usize] as f64;
        if xp < next_level_xp {
            let current_level_xp = XP_TABLE[level as usize - 1] as f64;
            return LevelStats {
                level,
                xp_to_next_level: next_level_xp - xp,
                progress: (xp - current_level_xp) / (next_level_xp - current_level_xp),
            };
        }
    }

    LevelStats {
        level: MAX_LEVEL,
        xp_to_next_level: 0.0,
        progress: 0.0,
    }
}

/// Cumulative XP needed to reach `level`, clamped to 1..=99
pub fn xp_for_level(level: u32) -> u64 {
    let level = level.clamp(1, MAX_LEVEL);
    XP_TABLE[level as usize - 1]
}
