//! Application constants for the AQDEF codec
//!
//! This module contains the DFQ wire constants, K-key prefixes the parser skips,
//! binary measured-value layouts and the distinguished hierarchy K-keys.

// =============================================================================
// DFQ Wire Format
// =============================================================================

/// Record terminator used when writing DFQ
pub const LINE_SEPARATOR: &str = "\r\n";

/// Separator between the K-key (with index) and its value
pub const VALUES_SEPARATOR: &str = " ";

/// Separator between fields of one characteristic on a binary line (DC4)
pub const MEASURED_VALUES_DATA_SEPARATOR: char = '\u{14}';

/// Separator between characteristics on a binary line (SI)
pub const MEASURED_VALUES_CHARACTERISTIC_SEPARATOR: char = '\u{0F}';

/// Header K-key carrying the total number of characteristics
pub const TOTAL_CHARACTERISTIC_COUNT_KEY: &str = "K0100";

/// Part K-key written without value to introduce a part that has no written values
pub const PART_SWITCH_KEY: &str = "K1001";

/// Length of a K-key at the start of a keyed record
pub const KKEY_LENGTH: usize = 5;

/// Default text encoding of DFQ input
pub const DEFAULT_ENCODING: &str = "utf-8";

/// File extensions recognized as DFQ when scanning directories
pub const DFQ_FILE_EXTENSIONS: &[&str] = &["dfq", "dfd", "dfx"];

// =============================================================================
// Parser Line Filters
// =============================================================================

/// Keyed records that carry informational counts only
///
/// A line is skipped when it starts with one of these keys followed by a
/// space or a `/`.
pub const IGNORED_KEYS: &[&str] = &["K0100", "K100", "K0101", "K101"];

/// Proprietary Q-DAS K-keys that are skipped entirely
pub const PROPRIETARY_QDAS_KEYS: &[&str] = &["K1998", "K2998", "K2999", "K5098", "K5080"];

// =============================================================================
// Binary Measured-Value Layouts
// =============================================================================

/// Field layouts of a characteristic packet on a binary line
pub mod binary_layout {
    /// Placeholder for a field position that carries no K-key
    pub const IGNORED: &str = "ignore";

    /// Field order for variable characteristics
    pub const VARIABLE: &[&str] = &[
        "K0001", "K0002", "K0004", "K0005", "K0006", "K0007", "K0008", "K0010", "K0011", "K0012",
    ];

    /// Field order for attributive characteristics and error log sheets
    pub const ATTRIBUTIVE: &[&str] = &[
        "K0020", "K0021", IGNORED, "K0002", "K0004", "K0005", "K0006", "K0007", "K0008", "K0010",
        "K0011", "K0012",
    ];

    /// K-key holding the characteristic type
    pub const CHARACTERISTIC_TYPE_KEY: &str = "K2004";

    /// Characteristic types recorded in the attributive layout
    /// (1 = attributive, 5 and 6 = error log sheet)
    pub const ATTRIBUTIVE_TYPES: &[i32] = &[1, 5, 6];

    /// Packets with more fields than this are attributive when K2004 is absent
    pub const VARIABLE_MAX_FIELDS: usize = 10;
}

// =============================================================================
// Hierarchy K-keys
// =============================================================================

/// K-keys with a fixed meaning in the hierarchy
pub mod hierarchy_keys {
    /// Node referring to a part; value is the part index
    pub const PART_NODE: &str = "K5111";

    /// Node referring to a characteristic; value is the characteristic index
    pub const CHARACTERISTIC_NODE: &str = "K5112";

    /// Node referring to a group; value is the group index
    pub const GROUP_NODE: &str = "K5113";

    /// Binding of a child node under a parent node
    pub const NODE_BINDING: &str = "K5103";

    /// Binding of a leaf characteristic under a parent node
    pub const CHARACTERISTIC_BINDING: &str = "K5102";

    /// Simple encoding: the characteristic becomes a parent node
    pub const SIMPLE_PARENT: &str = "K2030";

    /// Simple encoding: the characteristic is bound under a parent node
    pub const SIMPLE_CHILD: &str = "K2031";
}

// =============================================================================
// K-key Sorting
// =============================================================================

/// Sort-key rewrites that place attribute value keys right after K0001
pub const SORT_REWRITES: &[(&str, &str)] = &[("K0020", "K0001.20"), ("K0021", "K0001.21")];

/// Number of dead weak references tolerated in the K-key cache before a purge
pub const KKEY_CACHE_PURGE_THRESHOLD: usize = 4096;
