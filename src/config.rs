/// Base URL of the backend that places demo calls.
///
/// Set `BACKEND_URL` at build time to point at a deployed backend;
/// otherwise the local development server is assumed.
pub fn default_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:8000")
}
