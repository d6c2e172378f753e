use thiserror::Error;

/// Failures surfaced by the hub outside of the GPU stack.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("decoded image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("model parse failed: {0}")]
    Model(#[from] gltf::Error),
    #[error("model has no triangle meshes")]
    EmptyModel,
    #[error("fetch {path} failed with status {status}")]
    Fetch { path: String, status: u16 },
    #[error("missing #{0} in document")]
    MissingElement(String),
}
