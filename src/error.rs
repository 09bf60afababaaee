use thiserror::Error;

/// Preconditions that stop a scene or effect from starting.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing mount element #{0}")]
    MissingMount(&'static str),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("gpu error: {0}")]
    Gpu(String),
    #[error("audio error: {0}")]
    Audio(String),
}

impl FxError {
    pub fn dom(e: wasm_bindgen::JsValue) -> Self {
        FxError::Dom(format!("{:?}", e))
    }
}
