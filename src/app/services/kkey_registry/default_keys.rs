//! Default K-key table
//!
//! Generated from the Q-DAS reference database. Rows are applied in order, so a key
//! listed twice keeps its last definition (K2448).

use super::definition::KeyDefinition;
use crate::app::models::DataType;

pub const DEFAULT_KEYS: &[KeyDefinition] = &[
    KeyDefinition::new("K1001", "TETEILNR", DataType::String).length(30),
    KeyDefinition::new("K1002", "TEBEZEICH", DataType::String).length(80),
    KeyDefinition::new("K1010", "TEDPFLICHT", DataType::Integer).length(3),
    KeyDefinition::new("K1900", "TEBEM", DataType::String).length(255),
    KeyDefinition::new("K1021", "TEHERSTELLERNR", DataType::String).length(20),
    KeyDefinition::new("K1022", "TEHERSTELLERBEZ", DataType::String).length(80),
    KeyDefinition::new("K1031", "TEWERKSTOFFNR", DataType::String).length(20),
    KeyDefinition::new("K1032", "TEWERKSTOFFBEZ", DataType::String).length(40),
    KeyDefinition::new("K1041", "TEZEICHNUNGNR", DataType::String).length(30),
    KeyDefinition::new("K1042", "TEZEICHNUNGAEND", DataType::String).length(20),
    KeyDefinition::new("K1043", "TEZEICHNUNGINDEX", DataType::String).length(40),
    KeyDefinition::new("K1053", "TEAUFTRAGSTR", DataType::String).length(40),
    KeyDefinition::new("K1051", "TEAUFTRAGGBNR", DataType::String).length(20),
    KeyDefinition::new("K1052", "TEAUFTRAGGBBEZ", DataType::String).length(40),
    KeyDefinition::new("K1061", "TEKUNDENR", DataType::String).length(20),
    KeyDefinition::new("K1062", "TEKUNDEBEZ", DataType::String).length(40),
    KeyDefinition::new("K1071", "TELIEFERANTNR", DataType::String).length(20),
    KeyDefinition::new("K1072", "TELIEFERANTBEZ", DataType::String).length(40),
    KeyDefinition::new("K1201", "TEPREINRNR", DataType::String).length(24),
    KeyDefinition::new("K1202", "TEPREINRBEZ", DataType::String).length(40),
    KeyDefinition::new("K1203", "TEPRGRUNDBEZ", DataType::String).length(80),
    KeyDefinition::new("K1204", "TEPRBEGINNSTR", DataType::String).length(40),
    KeyDefinition::new("K1205", "TEPRENDESTR", DataType::String).length(40),
    KeyDefinition::new("K1003", "TEKURZBEZEICH", DataType::String).length(20),
    KeyDefinition::new("K1004", "TEAENDSTAND", DataType::String).length(20),
    KeyDefinition::new("K1005", "TEERZEUGNIS", DataType::String).length(40),
    KeyDefinition::new("K1081", "TEMASCHINENR", DataType::String).length(24),
    KeyDefinition::new("K1082", "TEMASCHINEBEZ", DataType::String).length(40),
    KeyDefinition::new("K1085", "TEMASCHINEORT", DataType::String).length(40),
    KeyDefinition::new("K1086", "TEARBEITSGANG", DataType::String).length(40),
    KeyDefinition::new("K1100", "TEBEREICH", DataType::String).length(40),
    KeyDefinition::new("K1101", "TEABT", DataType::String).length(40),
    KeyDefinition::new("K1206", "TEPRPLATZ", DataType::String).length(40),
    KeyDefinition::new("K1207", "TEPPLANERST", DataType::String),
    KeyDefinition::new("K1023", "TEHERSTELLERKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1033", "TEWERKSTOFFKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1044", "TEZEICHNUNGKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1054", "TEAUFTRAGGBKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1063", "TEKUNDEKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1073", "TELIEFERANTKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1083", "TEMASCHINEKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1208", "TEPREINRKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1007", "TENRKURZ", DataType::String).length(20),
    KeyDefinition::new("K1102", "TEWERKSTATT", DataType::String).length(40),
    KeyDefinition::new("K1211", "TENORMNR", DataType::String).length(20),
    KeyDefinition::new("K1212", "TENORMBEZ", DataType::String).length(40),
    KeyDefinition::new("K1215", "TENORMAL", DataType::Integer).length(5),
    KeyDefinition::new("K1008", "TETYP", DataType::String).length(20),
    KeyDefinition::new("K1009", "TECODE", DataType::String).length(20),
    KeyDefinition::new("K1011", "TEVARIANTE", DataType::String).length(20),
    KeyDefinition::new("K1012", "TESACHNRZUS", DataType::String).length(20),
    KeyDefinition::new("K1013", "TESACHNRIDX", DataType::String).length(20),
    KeyDefinition::new("K1014", "TETEILIDENT", DataType::String).length(20),
    KeyDefinition::new("K1103", "TEKOSTST", DataType::String).length(40),
    KeyDefinition::new("K1104", "TESCHICHT", DataType::String).length(20),
    KeyDefinition::new("K1110", "TEBESTNR", DataType::String).length(20),
    KeyDefinition::new("K1111", "TEWARENEINNR", DataType::String).length(20),
    KeyDefinition::new("K1112", "TEWUERFEL", DataType::String),
    KeyDefinition::new("K1113", "TEPOSITION", DataType::String),
    KeyDefinition::new("K1114", "TEVORRICHT", DataType::String),
    KeyDefinition::new("K1115", "TEFERTDAT", DataType::String),
    KeyDefinition::new("K1209", "TEPRUEFART", DataType::String).length(20),
    KeyDefinition::new("K1230", "TEMESSRAUM", DataType::String).length(40),
    KeyDefinition::new("K1231", "TEMESSPROGNR", DataType::String).length(20),
    KeyDefinition::new("K1232", "TEMESSPROGVER", DataType::String).length(20),
    KeyDefinition::new("K1223", "TEPRUEFERKEY", DataType::Integer).length(5),
    KeyDefinition::new("K1221", "TEPRUEFERNR", DataType::String).length(20),
    KeyDefinition::new("K1222", "TEPRUEFERNAME", DataType::String).length(40),
    KeyDefinition::new("K1016", "TEZSB_1016", DataType::String).length(30),
    KeyDefinition::new("K1350", "TEREPORTFILE_1350", DataType::String).length(50),
    KeyDefinition::new("K1045", "TE_1045", DataType::String).length(20),
    KeyDefinition::new("K1046", "TE_1046", DataType::String).length(60),
    KeyDefinition::new("K1047", "TE_1047", DataType::String).length(20),
    KeyDefinition::new("K1300", "TE_1300", DataType::Integer),
    KeyDefinition::new("K1301", "TE_1301", DataType::Integer).length(5),
    KeyDefinition::new("K1302", "TE_1302", DataType::String).length(40),
    KeyDefinition::new("K1311", "TE_1311", DataType::String).length(40),
    KeyDefinition::new("K1341", "TE_1341", DataType::String).length(20),
    KeyDefinition::new("K1342", "TE_1342", DataType::String).length(40),
    KeyDefinition::new("K1343", "TE_1343", DataType::String).length(20),
    KeyDefinition::new("K1303", "TEWERK", DataType::String).length(40),
    KeyDefinition::new("K1210", "TEMESSTYP", DataType::Integer).length(5),
    KeyDefinition::new("K1344", "TE_1344", DataType::String).length(40),
    KeyDefinition::new("K1015", "TE_1015", DataType::Integer).length(3),
    KeyDefinition::new("K1017", "TE_1017", DataType::Integer).length(3),
    KeyDefinition::new("K1087", "TE_1087", DataType::String),
    KeyDefinition::new("K1018", "TE_1018", DataType::Integer),
    KeyDefinition::new("K1401", "TE_1401", DataType::Integer),
    KeyDefinition::new("K1402", "TE_1402", DataType::Integer),
    KeyDefinition::new("K1403", "TE_1403", DataType::Integer),
    KeyDefinition::new("K1404", "TE_1404", DataType::Integer),
    KeyDefinition::new("K1405", "TE_1405", DataType::Integer),
    KeyDefinition::new("K1407", "TE_1407", DataType::Integer),
    KeyDefinition::new("K1408", "TE_1408", DataType::Integer),
    KeyDefinition::new("K1410", "TE_1410", DataType::String),
    KeyDefinition::new("K1411", "TE_1411", DataType::Integer),
    KeyDefinition::new("K1091", "TE_1091", DataType::String),
    KeyDefinition::new("K1092", "TE_1092", DataType::String),
    KeyDefinition::new("K1105", "TE_1105", DataType::String),
    KeyDefinition::new("K1106", "TE_1106", DataType::String),
    KeyDefinition::new("K1107", "TE_1107", DataType::String),
    KeyDefinition::new("K1108", "TE_1108", DataType::String),
    KeyDefinition::new("K1304", "TE_1304", DataType::String),
    KeyDefinition::new("K1048", "TE_1048", DataType::String),
    KeyDefinition::new("K0001", "WVWERTNR", DataType::Decimal).length(22),
    KeyDefinition::new("K0002", "WVATTRIBUT", DataType::Integer).length(5),
    KeyDefinition::new("K0008", "WVPRUEFER", DataType::Integer).length(10),
    KeyDefinition::new("K0012", "WVPRUEFMIT", DataType::Integer).length(10),
    KeyDefinition::new("K0010", "WVMASCHINE", DataType::Integer).length(10),
    KeyDefinition::new("K0007", "WVNEST", DataType::Integer).length(10),
    KeyDefinition::new("K0004", "WVDATZEIT", DataType::Date),
    KeyDefinition::new("K0006", "WVCHARGE", DataType::String).length(14),
    KeyDefinition::new("K0053", "WVAUFTRAG", DataType::String).length(20),
    KeyDefinition::new("K0031", "WV0031", DataType::Integer),
    KeyDefinition::new("K0034", "WV0034", DataType::Integer),
    KeyDefinition::new("K0009", "WV0009", DataType::String).length(255),
    KeyDefinition::new("K0014", "WV0014", DataType::String).length(40),
    KeyDefinition::new("K0015", "WV0015", DataType::Integer).length(5),
    KeyDefinition::new("K0016", "WV0016", DataType::String),
    KeyDefinition::new("K0017", "WV0017", DataType::String),
    KeyDefinition::new("K0097", "WV0097", DataType::Uuid),
    KeyDefinition::new("K2001", "MEMERKNR", DataType::String).length(20),
    KeyDefinition::new("K2002", "MEMERKBEZ", DataType::String).length(80),
    KeyDefinition::new("K2101", "MENENNMAS", DataType::Decimal).length(22),
    KeyDefinition::new("K2120", "MEARTUGW", DataType::Integer).length(3),
    KeyDefinition::new("K2121", "MEARTOGW", DataType::Integer).length(3),
    KeyDefinition::new("K2240", "MEARTPLAUSIUNT", DataType::Integer),
    KeyDefinition::new("K2241", "MEARTPLAUSIOB", DataType::Integer),
    KeyDefinition::new("K2110", "MEUGW", DataType::Decimal).length(22),
    KeyDefinition::new("K2111", "MEOGW", DataType::Decimal).length(22),
    KeyDefinition::new("K2504", "MEFSK", DataType::Integer).length(3),
    KeyDefinition::new("K2163", "MEFEHLKOST", DataType::Decimal).length(22),
    KeyDefinition::new("K2006", "MEDPFLICHT", DataType::Integer).length(5),
    KeyDefinition::new("K2141", "MEEINHEIT", DataType::Integer).length(5),
    KeyDefinition::new("K2022", "MEAUFLOES", DataType::Integer).length(5),
    KeyDefinition::new("K2013", "MEKLASSENW", DataType::Decimal).length(22),
    KeyDefinition::new("K2311", "MEFERTARTNR", DataType::String).length(20),
    KeyDefinition::new("K2312", "MEFERTART", DataType::String).length(40),
    KeyDefinition::new("K2405", "MEPRUEFMIT", DataType::Integer).length(5),
    KeyDefinition::new("K2403", "MEPMGRUPPET", DataType::String).length(80),
    KeyDefinition::new("K2402", "MEPRUEFMITT", DataType::String).length(80),
    KeyDefinition::new("K2401", "MEPRUEFMITNRT", DataType::String).length(40),
    KeyDefinition::new("K2041", "MEERFART", DataType::Integer).length(3),
    KeyDefinition::new("K2305", "MEMASCHINE", DataType::Integer).length(5),
    KeyDefinition::new("K2900", "MEBEMERK", DataType::String).length(255),
    KeyDefinition::new("K2205", "MEUMFSTICH", DataType::Integer).length(5),
    KeyDefinition::new("K2220", "MEANZPRUEF", DataType::Integer).length(5),
    KeyDefinition::new("K2221", "MEANZWIED", DataType::Integer).length(5),
    KeyDefinition::new("K2205", "MEANZTEILE", DataType::Integer).length(5),
    KeyDefinition::new("K2021", "MEFORMEL", DataType::String).length(255),
    KeyDefinition::new("K2024", "METRANSPA", DataType::Decimal).length(22),
    KeyDefinition::new("K2025", "METRANSPB", DataType::Decimal).length(22),
    KeyDefinition::new("K2026", "METRANSPC", DataType::Decimal).length(22),
    KeyDefinition::new("K2027", "METRANSPD", DataType::Decimal).length(22),
    KeyDefinition::new("K2502", "MEAUSWART", DataType::Integer).length(3),
    KeyDefinition::new("K2202", "MEAUSWTYP", DataType::Integer).length(3),
    KeyDefinition::new("K2004", "MEMERKART", DataType::Integer).length(5),
    KeyDefinition::new("K2011", "MEVERTFORM", DataType::Integer).length(5),
    KeyDefinition::new("K2130", "MEPLAUSIUN", DataType::Decimal).length(22),
    KeyDefinition::new("K2131", "MEPLAUSIOB", DataType::Decimal).length(22),
    KeyDefinition::new("K2201", "MEPROSTREU", DataType::Decimal).length(22),
    KeyDefinition::new("K2217", "MENORMISTSTR", DataType::String).length(80),
    KeyDefinition::new("K2213", "MENORMIST", DataType::Decimal).length(22),
    KeyDefinition::new("K2211", "MENORMNR", DataType::String).length(40),
    KeyDefinition::new("K2212", "MENORMBEZ", DataType::String).length(40),
    KeyDefinition::new("K2007", "MESTEUERB", DataType::Integer).length(5),
    KeyDefinition::new("K2060", "MEEREIGKAT", DataType::String).length(50),
    KeyDefinition::new("K2005", "MEMERKKLASSE", DataType::Integer).length(5),
    KeyDefinition::new("K2009", "MEUNTERSART", DataType::Integer),
    KeyDefinition::new("K2234", "MEANZORDKLASSE", DataType::Integer),
    KeyDefinition::new("K2503", "MEAUTOERKENNUNG", DataType::Integer).length(3),
    KeyDefinition::new("K2501", "MEATTR", DataType::Integer).length(3),
    KeyDefinition::new("K2072", "METRANSFEINGA", DataType::Decimal).length(22),
    KeyDefinition::new("K2071", "METRANSFEINGB", DataType::Decimal).length(22),
    KeyDefinition::new("K2045", "MEERFKANAL", DataType::String).length(20),
    KeyDefinition::new("K2046", "MEERFSUBKANAL", DataType::String).length(20),
    KeyDefinition::new("K2012", "MENACHARBEIT", DataType::Integer),
    KeyDefinition::new("K2100", "MEZIELWERT", DataType::Decimal).length(22),
    KeyDefinition::new("K2102", "MEPMAX", DataType::Decimal).length(22),
    KeyDefinition::new("K2142", "MEEINHEITTEXT", DataType::String).length(20),
    KeyDefinition::new("K2160", "MELOSUMFANG", DataType::Integer).length(5),
    KeyDefinition::new("K2161", "MEKOSTENNACHARBEIT", DataType::Decimal).length(22),
    KeyDefinition::new("K2162", "MEKOSTENAUSSCHUSS", DataType::Decimal).length(22),
    KeyDefinition::new("K2301", "MEMASCHNR", DataType::String).length(20),
    KeyDefinition::new("K2302", "MEMASCHBEZ", DataType::String).length(40),
    KeyDefinition::new("K2303", "MEABT", DataType::String).length(40),
    KeyDefinition::new("K2304", "MESTANDORT", DataType::String).length(40),
    KeyDefinition::new("K2320", "MEAUFTRNR", DataType::String).length(20),
    KeyDefinition::new("K2323", "MEAUFTRAGGEBNR", DataType::Integer).length(5),
    KeyDefinition::new("K2321", "MEAUFTRAGGEBNRT", DataType::String).length(20),
    KeyDefinition::new("K2322", "MEAUFTRAGGEB", DataType::String).length(40),
    KeyDefinition::new("K2410", "MEPRUEFORTT", DataType::String).length(40),
    KeyDefinition::new("K2411", "MEPRUEFBEGINN", DataType::String).length(80),
    KeyDefinition::new("K2412", "MEPRUEFENDE", DataType::String).length(80),
    KeyDefinition::new("K2423", "MEPRUEFER", DataType::Integer).length(5),
    KeyDefinition::new("K2421", "MEPRUEFERNR", DataType::String).length(20),
    KeyDefinition::new("K2422", "MEPRUEFERNAME", DataType::String).length(40),
    KeyDefinition::new("K2901", "MEPRUEFBEDING", DataType::String).length(80),
    KeyDefinition::new("K2019", "MEPRUEFMITNR", DataType::Integer),
    KeyDefinition::new("K2030", "MEAUGROUP", DataType::Integer).length(5),
    KeyDefinition::new("K2151", "METOLERANZTEXT", DataType::String).length(20),
    KeyDefinition::new("K2333", "MEWERKSTCK", DataType::Integer).length(5),
    KeyDefinition::new("K2332", "MEWERKSTCKTEXT", DataType::String).length(40),
    KeyDefinition::new("K2404", "MEPMAUFLOES", DataType::Decimal).length(22),
    KeyDefinition::new("K2215", "MENORMAL", DataType::Integer).length(5),
    KeyDefinition::new("K2214", "MENORMALTEMP", DataType::Decimal).length(22),
    KeyDefinition::new("K2331", "MEWERKSTCKNR", DataType::String).length(20),
    KeyDefinition::new("K2003", "MEKURZBEZ", DataType::String).length(20),
    KeyDefinition::new("K2114", "MEUGSCHROTT", DataType::Decimal).length(22),
    KeyDefinition::new("K2115", "MEOGSCHROTT", DataType::Decimal).length(22),
    KeyDefinition::new("K2225", "MECG", DataType::Decimal).length(22),
    KeyDefinition::new("K2226", "MECGK", DataType::Decimal).length(22),
    KeyDefinition::new("K2227", "MEABWGC", DataType::Decimal).length(22),
    KeyDefinition::new("K2243", "MEZEICHN", DataType::String).length(80),
    KeyDefinition::new("K2313", "MEFERTARTKEY", DataType::Integer).length(5),
    KeyDefinition::new("K2406", "MEPMHERST", DataType::String).length(40),
    KeyDefinition::new("K2042", "MEERFNR", DataType::Integer).length(5),
    KeyDefinition::new("K2043", "MEERFNAME", DataType::String).length(40),
    KeyDefinition::new("K2044", "MEERFINDEX", DataType::Integer).length(5),
    KeyDefinition::new("K2047", "MEANFINDEX", DataType::Integer).length(3),
    KeyDefinition::new("K2051", "MEINTERFACE", DataType::Integer).length(3),
    KeyDefinition::new("K2052", "MEBAUD", DataType::Integer).length(5),
    KeyDefinition::new("K2053", "MEIRQ", DataType::Integer).length(3),
    KeyDefinition::new("K2054", "MEPARITY", DataType::Integer).length(3),
    KeyDefinition::new("K2055", "MEDATA", DataType::Integer).length(3),
    KeyDefinition::new("K2056", "MESTOP", DataType::Integer).length(3),
    KeyDefinition::new("K2061", "MEPZPKAT", DataType::Integer).length(5),
    KeyDefinition::new("K2152", "METOLERANZCALC", DataType::Decimal).length(22),
    KeyDefinition::new("K2306", "MEBEREICH", DataType::String).length(40),
    KeyDefinition::new("K2307", "MEPTM", DataType::String).length(40),
    KeyDefinition::new("K2341", "MEPPLANNRT", DataType::String).length(20),
    KeyDefinition::new("K2342", "MEPPLAN", DataType::String).length(40),
    KeyDefinition::new("K2343", "MEPPLANDAT", DataType::String).length(20),
    KeyDefinition::new("K2344", "MEPPLANERST", DataType::String).length(40),
    KeyDefinition::new("K2407", "MESPCNR", DataType::String).length(20),
    KeyDefinition::new("K2408", "MESPCHERST", DataType::String).length(20),
    KeyDefinition::new("K2409", "MESPCTYP", DataType::String).length(20),
    KeyDefinition::new("K2116", "MENORMISTUN", DataType::Decimal),
    KeyDefinition::new("K2117", "MENORMISTOB", DataType::Decimal),
    KeyDefinition::new("K2216", "MENORMALSERNR", DataType::String).length(20),
    KeyDefinition::new("K2415", "MEPRUEFMITSERNR", DataType::String).length(20),
    KeyDefinition::new("K2416", "MEANZGERAET", DataType::String).length(40),
    KeyDefinition::new("K2261", "MEREFTEILNRSTR", DataType::String).length(40),
    KeyDefinition::new("K2262", "MEREFTEILBEZ", DataType::String).length(40),
    KeyDefinition::new("K2263", "MEREFTEILIST", DataType::Decimal).length(22),
    KeyDefinition::new("K2264", "MEREFTEILTEMP", DataType::Decimal).length(22),
    KeyDefinition::new("K2265", "MEREFTEILNR", DataType::Integer).length(3),
    KeyDefinition::new("K2266", "MEREFTEILSERNR", DataType::String).length(40),
    KeyDefinition::new("K2271", "MEKALTEILUNRSTR", DataType::String),
    KeyDefinition::new("K2272", "MEKALTEILUBEZ", DataType::String),
    KeyDefinition::new("K2273", "MEKALTEILUIST", DataType::Decimal),
    KeyDefinition::new("K2274", "MEKALTEILUTEMP", DataType::Decimal),
    KeyDefinition::new("K2275", "MEKALTEILUNR", DataType::Integer),
    KeyDefinition::new("K2276", "MEKALTEILUSERNR", DataType::String),
    KeyDefinition::new("K2281", "MEKALTEILMNRSTR", DataType::String).length(40),
    KeyDefinition::new("K2282", "MEKALTEILMBEZ", DataType::String).length(40),
    KeyDefinition::new("K2283", "MEKALTEILMIST", DataType::Decimal).length(22),
    KeyDefinition::new("K2284", "MEKALTEILMTEMP", DataType::Decimal).length(22),
    KeyDefinition::new("K2285", "MEKALTEILMNR", DataType::Integer).length(3),
    KeyDefinition::new("K2286", "MEKALTEILMSERNR", DataType::String).length(40),
    KeyDefinition::new("K2291", "MEKALTEILONRSTR", DataType::String),
    KeyDefinition::new("K2292", "MEKALTEILOBEZ", DataType::String),
    KeyDefinition::new("K2293", "MEKALTEILOIST", DataType::Decimal),
    KeyDefinition::new("K2294", "MEKALTEILOTEMP", DataType::Decimal),
    KeyDefinition::new("K2295", "MEKALTEILONR", DataType::Integer),
    KeyDefinition::new("K2296", "MEKALTEILOSERNR", DataType::String),
    KeyDefinition::new("K2048", "MEUEBERKAN", DataType::Integer).length(3),
    KeyDefinition::new("K2090", "MEMERKCODE", DataType::String).length(40),
    KeyDefinition::new("K2091", "MEMERKINDEX", DataType::String).length(20),
    KeyDefinition::new("K2092", "MEMERKTEXT", DataType::String).length(50),
    KeyDefinition::new("K2093", "MEBEARBZUST", DataType::String).length(80),
    KeyDefinition::new("K2095", "MEELEMCODE", DataType::String).length(40),
    KeyDefinition::new("K2096", "MEELEMINDEX", DataType::String).length(20),
    KeyDefinition::new("K2097", "MEELEMTEXT", DataType::String).length(50),
    KeyDefinition::new("K2098", "MEELEMADR", DataType::String).length(20),
    KeyDefinition::new("K2074", "MECALIBADD", DataType::Decimal).length(22),
    KeyDefinition::new("K2075", "MECALIBMULT", DataType::Decimal).length(22),
    KeyDefinition::new("K2105", "MEANZNIAUSGEF", DataType::Integer).length(5),
    KeyDefinition::new("K2203", "MEGCKONVART", DataType::Integer),
    KeyDefinition::new("K2222", "MEANZREF", DataType::Integer).length(5),
    KeyDefinition::new("K2244", "MEREFPKTX", DataType::Integer).length(5),
    KeyDefinition::new("K2245", "MEREFPKTY", DataType::Integer).length(5),
    KeyDefinition::new("K2246", "MEREFPKTZ", DataType::Integer).length(5),
    KeyDefinition::new("K2430", "ME_2430", DataType::Integer).length(5),
    KeyDefinition::new("K2432", "ME_2432", DataType::Integer).length(5),
    KeyDefinition::new("K2434", "ME_2434", DataType::Integer).length(5),
    KeyDefinition::new("K2436", "ME_2436", DataType::String).length(10),
    KeyDefinition::new("K2438", "ME_2438", DataType::String).length(10),
    KeyDefinition::new("K2440", "ME_2440", DataType::String).length(40),
    KeyDefinition::new("K2442", "ME_2442", DataType::String).length(12),
    KeyDefinition::new("K2444", "ME_2444", DataType::String).length(40),
    KeyDefinition::new("K2448", "ME_2446", DataType::String).length(40),
    KeyDefinition::new("K2448", "ME_2448", DataType::String).length(40),
    KeyDefinition::new("K2073", "ME_2073", DataType::Decimal).length(22),
    KeyDefinition::new("K2107", "ME_2107", DataType::Decimal),
    KeyDefinition::new("K2170", "ME_2170", DataType::Decimal).length(22),
    KeyDefinition::new("K2171", "ME_2171", DataType::Decimal).length(22),
    KeyDefinition::new("K2172", "ME_2172", DataType::Decimal).length(22),
    KeyDefinition::new("K2173", "ME_2173", DataType::Decimal).length(22),
    KeyDefinition::new("K2228", "ME_2228", DataType::Decimal).length(22),
    KeyDefinition::new("K2229", "ME_2229", DataType::Decimal),
    KeyDefinition::new("K2230", "ME_2230", DataType::Decimal),
    KeyDefinition::new("K2231", "ME_2231", DataType::Decimal),
    KeyDefinition::new("K2232", "ME_2232", DataType::Decimal),
    KeyDefinition::new("K2233", "ME_2233", DataType::Decimal).length(22),
    KeyDefinition::new("K2235", "ME_2235", DataType::Decimal).length(22),
    KeyDefinition::new("K2236", "ME_2236", DataType::Decimal).length(22),
    KeyDefinition::new("K2016", "ME_2016", DataType::Integer).length(3),
    KeyDefinition::new("K8500", "MEUMFPROZ", DataType::Integer).length(5),
    KeyDefinition::new("K8501", "MEGLEITSTUMF", DataType::Integer).length(3),
    KeyDefinition::new("K8502", "MESTIFREQT", DataType::String).length(40),
    KeyDefinition::new("K8504", "MESTIFREQ", DataType::Integer).length(5),
    KeyDefinition::new("K8510", "MECP", DataType::Decimal).length(22),
    KeyDefinition::new("K8511", "MECPK", DataType::Decimal).length(22),
    KeyDefinition::new("K8520", "MEVORGCP", DataType::Decimal).length(22),
    KeyDefinition::new("K8521", "MEVORGCPK", DataType::Decimal).length(22),
    KeyDefinition::new("K8522", "MECPFIX", DataType::Decimal).length(22),
    KeyDefinition::new("K8523", "MECPKFIX", DataType::Decimal).length(22),
    KeyDefinition::new("K8530", "ME_8530", DataType::Integer).length(5),
    KeyDefinition::new("K8531", "ME_8531", DataType::Decimal).length(22),
    KeyDefinition::new("K8532", "ME_8532", DataType::Decimal).length(22),
    KeyDefinition::new("K8540", "ME_8540", DataType::Integer).length(5),
    KeyDefinition::new("K8600", "MEKORRSTRAT", DataType::Integer).length(3),
    KeyDefinition::new("K8610", "MEUKG", DataType::Decimal).length(22),
    KeyDefinition::new("K8611", "MEOKG", DataType::Decimal).length(22),
    KeyDefinition::new("K8612", "MEPUFFERSIZE", DataType::Integer).length(3),
    KeyDefinition::new("K8613", "MEKORRZIEL", DataType::Decimal).length(22),
];
