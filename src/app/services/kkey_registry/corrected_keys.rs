//! Corrections of the default K-key table
//!
//! Fixes wrong defaults and adds keys the reference database doesn't know about.

use super::definition::KeyDefinition;
use crate::app::models::DataType;
use crate::app::services::converters::ConverterKind;

pub const CORRECTED_KEYS: &[KeyDefinition] = &[
    // measured value
    KeyDefinition::new("K0001", "WVWERT", DataType::Decimal).respects_decimal(),
    // target / nominal
    KeyDefinition::new("K2100", "MEZIELWERT", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2101", "MENENNMAS", DataType::Decimal).respects_decimal(),
    // limits
    KeyDefinition::new("K2110", "MEUGW", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2111", "MEOGW", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2114", "MEUGSCHROTT", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2115", "MEOGSCHROTT", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2116", "MENORMISTUN", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2117", "MENORMISTOB", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2130", "MEPLAUSIUN", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K2131", "MEPLAUSIOB", DataType::Decimal).respects_decimal(),
    KeyDefinition::new("K0005", "WV0005", DataType::IntegerList).converter(ConverterKind::EventIds),
    KeyDefinition::new("K0006", "WVCHARGE", DataType::String).converter(ConverterKind::Charge),
    KeyDefinition::new("K1017", "TE_1017", DataType::Boolean).converter(ConverterKind::Boolean),
    // relative allowances; only the absolute limits K2110/K2111 are stored
    KeyDefinition::new("K2112", "?K2112?", DataType::Decimal).not_saved().respects_decimal(),
    KeyDefinition::new("K2113", "?K2113?", DataType::Decimal).not_saved().respects_decimal(),
    KeyDefinition::new("K0020", "?K0020?", DataType::Integer)
        .converter(ConverterKind::SubgroupSize)
        .not_saved(),
    KeyDefinition::new("K0011", "WV0011", DataType::String),
    KeyDefinition::new("K1000", "TETEIL", DataType::Integer).not_saved(),
    KeyDefinition::new("K2000", "MEMERKMAL", DataType::Integer).not_saved(),
    KeyDefinition::new("K0021", "?K0021?", DataType::Integer).not_saved(),
    KeyDefinition::new("K1040", "?K1040?", DataType::Integer).length(5).not_saved(),
    KeyDefinition::new("K2008", "MEPRUEFORT", DataType::Integer),
    KeyDefinition::new("K2015", "MEGLMITT", DataType::Integer).length(3),
    KeyDefinition::new("K2023", "?K2023?", DataType::Integer).length(3).not_saved(),
    KeyDefinition::new("K2031", "MEUPPERMERKMAL", DataType::Integer).length(5),
    KeyDefinition::new("K2076", "MEPRUEFBEGINND", DataType::Date),
    KeyDefinition::new("K2080", "MEMASSN", DataType::Integer).length(5),
    KeyDefinition::new("K2143", "MEEINHREL", DataType::String).length(20),
    KeyDefinition::new("K2144", "MEADDFAKREL", DataType::Decimal),
    KeyDefinition::new("K2145", "MEMULFAKREL", DataType::Decimal),
    KeyDefinition::new("K2437", "MEPRUEFENDED", DataType::Date),
    KeyDefinition::new("K0054", "WV0054", DataType::String).length(32),
    KeyDefinition::new("K0055", "WV0055", DataType::String).length(32),
    KeyDefinition::new("K0056", "WV0056", DataType::String).length(32),
    KeyDefinition::new("K0057", "WV0057", DataType::String).length(32),
    KeyDefinition::new("K0058", "WV0058", DataType::String).length(32),
    KeyDefinition::new("K0059", "WV0059", DataType::String).length(32),
    KeyDefinition::new("K0060", "WV0060", DataType::String).length(32),
    KeyDefinition::new("K0061", "WV0061", DataType::Integer).length(10),
    KeyDefinition::new("K0062", "WV0062", DataType::Integer).length(10),
    KeyDefinition::new("K0063", "WV0063", DataType::Integer).length(10),
    KeyDefinition::new("K0080", "WV0080", DataType::String).length(64),
    KeyDefinition::new("K0081", "WV0081", DataType::Integer).length(5),
    KeyDefinition::new("K5001", "MEMERKNR", DataType::String).length(20),
    KeyDefinition::new("K5002", "MEMERKBEZ", DataType::String).length(80),
    KeyDefinition::new("K5003", "MEKURZBEZ", DataType::String).length(20),
    KeyDefinition::new("K5007", "?K5007?", DataType::String).length(20).not_saved(),
    KeyDefinition::new("K5045", "?K5045?", DataType::String).length(80).not_saved(),
    KeyDefinition::new("K5090", "?K5090?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K5101", "?K5101?", DataType::Integer).not_saved(),
    KeyDefinition::new("K5102", "?K5102?", DataType::Integer).not_saved(),
    KeyDefinition::new("K5103", "?K5103?", DataType::Integer).not_saved(),
    KeyDefinition::new("K5111", "?K5111?", DataType::Integer).not_saved(),
    KeyDefinition::new("K5112", "?K5112?", DataType::Integer).not_saved(),
    KeyDefinition::new("K5113", "?K5113?", DataType::Integer).not_saved(),
    KeyDefinition::new("K8006", "?K8006?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8007", "?K8007?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8010", "?K8010?", DataType::String).not_saved(),
    KeyDefinition::new("K8011", "?K8011?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8012", "?K8012?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8013", "?K8013?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8014", "?K8014?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8015", "?K8015?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8106", "?K8106?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8107", "?K8107?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8110", "?K8110?", DataType::String).not_saved(),
    KeyDefinition::new("K8111", "?K8111?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8112", "?K8112?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8113", "?K8113?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8114", "?K8114?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8115", "?K8115?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8503", "METRANSART", DataType::Integer).length(3).not_saved(),
    KeyDefinition::new("K8505", "?K8505?", DataType::Integer).length(5).not_saved(),
    KeyDefinition::new("K8524", "?K8524?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K8525", "?K8525?", DataType::Decimal).not_saved(),
    KeyDefinition::new("K1800", "?K1800?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1801", "?K1801?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1802", "?K1802?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1810", "?K1810?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1811", "?K1811?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1812", "?K1812?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1820", "?K1820?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1821", "?K1821?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1822", "?K1822?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1830", "?K1830?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1831", "?K1831?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1832", "?K1832?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1840", "?K1840?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1841", "?K1841?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1842", "?K1842?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1850", "?K1850?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1851", "?K1851?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1852", "?K1852?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1860", "?K1860?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1861", "?K1861?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1862", "?K1862?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1870", "?K1870?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1871", "?K1871?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1872", "?K1872?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1880", "?K1880?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1881", "?K1881?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1882", "?K1882?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K1890", "?K1890?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K1891", "?K1891?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K1892", "?K1892?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2800", "?K2800?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2801", "?K2801?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2802", "?K2802?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2810", "?K2810?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2811", "?K2811?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2812", "?K2812?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2820", "?K2820?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2821", "?K2821?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2822", "?K2822?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2830", "?K2830?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2831", "?K2831?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2832", "?K2832?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2840", "?K2840?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2841", "?K2841?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2842", "?K2842?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2850", "?K2850?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2851", "?K2851?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2852", "?K2852?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2860", "?K2860?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2861", "?K2861?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2862", "?K2862?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2870", "?K2870?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2871", "?K2871?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2872", "?K2872?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2880", "?K2880?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2881", "?K2881?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2882", "?K2882?", DataType::String).length(255).not_saved(),
    KeyDefinition::new("K2890", "?K2890?", DataType::String).length(50).not_saved(),
    KeyDefinition::new("K2891", "?K2891?", DataType::String).length(1).not_saved(),
    KeyDefinition::new("K2892", "?K2892?", DataType::String).length(255).not_saved(),
];
