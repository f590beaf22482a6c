//! Lithology color table and per-hole fallback colors

/// Known lithology names and their display colors (hex)
pub const LITHOLOGY_COLORS: &[(&str, &str)] = &[
    ("GRANITE", "#FF6B6B"),
    ("DIORITE", "#EE5A6F"),
    ("GABBRO", "#4A5568"),
    ("BASALT", "#2D3748"),
    ("ANDESITE", "#718096"),
    ("RHYOLITE", "#FCA5A5"),
    ("SANDSTONE", "#F6E05E"),
    ("SHALE", "#A0AEC0"),
    ("LIMESTONE", "#E2E8F0"),
    ("MUDSTONE", "#805AD5"),
    ("CONGLOMERATE", "#D69E2E"),
    ("SCHIST", "#48BB78"),
    ("GNEISS", "#38A169"),
    ("QUARTZITE", "#F7FAFC"),
    ("SLATE", "#2C5282"),
    ("MARBLE", "#E2E8F0"),
    ("ORE", "#F59E0B"),
    ("QUARTZ_VEIN", "#FFFFFF"),
    ("SULFIDES", "#FCD34D"),
    ("OXIDE", "#DC2626"),
    ("MASSIVE_SULFIDE", "#B91C1C"),
    ("ALTERED", "#EC4899"),
    ("WEATHERED", "#BE185D"),
    ("FRESH", "#047857"),
    ("UNKNOWN", "#94A3B8"),
    ("NO_RECOVERY", "#1E293B"),
];

/// Per-hole fallback palette, indexed by a hash of the hole id
const HOLE_PALETTE: &[[u8; 3]] = &[
    [230, 25, 75],
    [60, 180, 75],
    [255, 225, 25],
    [0, 130, 200],
    [245, 130, 48],
    [145, 30, 180],
    [70, 240, 240],
    [240, 50, 230],
    [210, 245, 60],
    [250, 190, 212],
    [0, 128, 128],
    [220, 190, 255],
];

/// Parse a `#RRGGBB` hex color
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#')?;
    // Byte-length alone is not enough: a multi-byte character would make
    // the digit slices fall off a char boundary
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Color for a recognized lithology name, case- and whitespace-insensitive.
///
/// Returns `None` for unrecognized names; callers choose their own fallback
/// (the geometry builder falls back to the hole's default color).
pub fn lithology_lookup(name: &str) -> Option<[u8; 3]> {
    let normalized = name.trim().to_uppercase();
    LITHOLOGY_COLORS
        .iter()
        .find(|(key, _)| *key == normalized)
        .and_then(|(_, hex)| hex_to_rgb(hex))
}

/// Color for any lithology name, with the `UNKNOWN` table entry as fallback
pub fn lithology_color(name: &str) -> [u8; 3] {
    lithology_lookup(name)
        .or_else(|| lithology_lookup("UNKNOWN"))
        .unwrap_or([0, 0, 0])
}

/// Deterministic default color for a hole, stable across runs and sessions.
///
/// FNV-1a over the hole id selects an entry from a fixed palette, so the
/// same hole always renders in the same color.
pub fn hole_color(hole_id: &str) -> [u8; 3] {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in hole_id.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    HOLE_PALETTE[(hash % HOLE_PALETTE.len() as u64) as usize]
}
