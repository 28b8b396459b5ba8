//! Procedure paths, `/<package>.<Service>/<Method>`.

pub const GET_CURRENT_USER: &str = "/healthrecords.v1.UserService/GetCurrentUser";

pub const CREATE_WEIGHT_ENTRY: &str = "/healthrecords.v1.WeightService/CreateWeightEntry";
pub const GET_WEIGHT_ENTRY: &str = "/healthrecords.v1.WeightService/GetWeightEntry";
pub const LIST_WEIGHT_ENTRIES: &str = "/healthrecords.v1.WeightService/ListWeightEntries";
pub const DELETE_WEIGHT_ENTRY: &str = "/healthrecords.v1.WeightService/DeleteWeightEntry";

pub const CREATE_BLOOD_PRESSURE_READING: &str =
    "/healthrecords.v1.BloodPressureService/CreateBloodPressureReading";
pub const LIST_BLOOD_PRESSURE_READINGS: &str =
    "/healthrecords.v1.BloodPressureService/ListBloodPressureReadings";
pub const DELETE_BLOOD_PRESSURE_READING: &str =
    "/healthrecords.v1.BloodPressureService/DeleteBloodPressureReading";

pub const LIST_ARTICLES: &str = "/healthrecords.v1.ArticleService/ListArticles";
pub const GET_ARTICLE: &str = "/healthrecords.v1.ArticleService/GetArticle";

pub const ALL: [&str; 10] = [
    GET_CURRENT_USER,
    CREATE_WEIGHT_ENTRY,
    GET_WEIGHT_ENTRY,
    LIST_WEIGHT_ENTRIES,
    DELETE_WEIGHT_ENTRY,
    CREATE_BLOOD_PRESSURE_READING,
    LIST_BLOOD_PRESSURE_READINGS,
    DELETE_BLOOD_PRESSURE_READING,
    LIST_ARTICLES,
    GET_ARTICLE,
];

/// Label for per-procedure metrics. Paths outside [`ALL`] share one
/// bucket so request paths cannot mint new metric names.
pub fn metric_label(procedure: &str) -> &'static str {
    ALL.into_iter()
        .find(|known| *known == procedure)
        .map(|known| known.trim_start_matches('/'))
        .unwrap_or(UNKNOWN_LABEL)
}

pub const UNKNOWN_LABEL: &str = "unknown";

/// Method segment of a procedure path, for compact log lines
pub fn method_name(procedure: &str) -> &str {
    procedure.rsplit('/').next().unwrap_or(procedure)
}
