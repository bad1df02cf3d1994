/// # Quirks
/// Interpreters disagree on a handful of instructions. The original COSMAC VIP interpreter
/// and the later CHIP-48/SUPER-CHIP ones each have ROMs that depend on their behavior.
///
/// The default is the modern behavior most ROMs expect:
/// - SHR/SHL shift Vx in place and ignore Vy
/// - FX55/FX65 leave I where it was
/// - DRW clips sprites at the screen edges
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY6/8XYE set Vx to the shifted value of Vy instead of shifting Vx.
    pub shift_uses_vy: bool,
    /// FX55/FX65 leave I pointing one past the last byte they touched.
    pub load_store_increments_i: bool,
    /// DRW wraps pixels that run off the edge around to the other side.
    /// Neither preset does this, but plenty of older emulators did and some ROMs
    /// were tuned on them.
    pub wrap_sprites: bool,
}

impl Quirks {
    pub fn modern() -> Self {
        Self::default()
    }

    pub fn cosmac_vip() -> Self {
        Quirks {
            shift_uses_vy: true,
            load_store_increments_i: true,
            wrap_sprites: false,
        }
    }
}
