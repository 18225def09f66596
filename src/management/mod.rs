mod credentials;
mod output;

pub use credentials::CLIENT_ID_KEY;
pub use credentials::CLIENT_SECRET_KEY;
pub use credentials::CredentialError;
pub use credentials::CredentialManager;
pub use output::resolve_output_path;
pub use output::write_image;
