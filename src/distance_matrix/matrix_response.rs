use serde::Deserialize;

// API: https://developers.google.com/maps/documentation/distance-matrix/distance-matrix#DistanceMatrixResponse
#[derive(Debug, Deserialize)]
pub struct MatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<Row>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Row {
    pub elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
pub struct Element {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}
