/// Number of dihedral orientations a level can be shown in.
pub const ORIENTATION_COUNT: u32 = 8;

/// Characters of each identifier fed into the orientation hash.
pub const ID_PREFIX_LEN: usize = 8;
