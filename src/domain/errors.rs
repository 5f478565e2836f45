/// Simplified error system - gestures never fail, only setup and drawing can.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ConfigurationError(String),
    RenderingError(String),
    SurfaceUnavailable(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ConfigurationError(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::SurfaceUnavailable(msg) => write!(f, "Surface Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
