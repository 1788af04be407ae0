use anyhow::bail;

const DEFAULT_SERVER: &str = "127.0.0.1:8000";
const DEFAULT_SESSION_ID: &str = "web-user-123";

/// Runtime settings for the shell.
///
/// The defaults reproduce the original single-user page: a local backend and
/// a fixed session identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Chat/upload backend as `host:port`.
    pub server: String,
    pub session_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            session_id: DEFAULT_SESSION_ID.to_string(),
        }
    }
}

impl Settings {
    pub fn from_args(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut settings = Settings::default();
        let mut args = args.peekable();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => match args.next() {
                    Some(server) => settings.server = server,
                    None => bail!("--server needs a host:port value"),
                },
                "--session" => match args.next() {
                    Some(session_id) => settings.session_id = session_id,
                    None => bail!("--session needs a value"),
                },
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(settings)
    }

    pub fn upload_endpoint(&self) -> String {
        format!("http://{}/upload-pdf", self.server)
    }

    /// Resolves a server-relative download endpoint against the backend.
    pub fn download_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else if endpoint.starts_with('/') {
            format!("http://{}{}", self.server, endpoint)
        } else {
            format!("http://{}/{}", self.server, endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Settings> {
        Settings::from_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn defaults_match_the_original_page() {
        let settings = parse(&[]).unwrap();
        assert_eq!(settings.server, "127.0.0.1:8000");
        assert_eq!(settings.session_id, "web-user-123");
        assert_eq!(settings.upload_endpoint(), "http://127.0.0.1:8000/upload-pdf");
    }

    #[test]
    fn flags_override_defaults() {
        let settings =
            parse(&["--server", "chat.example:9000", "--session", "alice"]).unwrap();
        assert_eq!(settings.server, "chat.example:9000");
        assert_eq!(settings.session_id, "alice");
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse(&["--wat"]).is_err());
        assert!(parse(&["--server"]).is_err());
    }

    #[test]
    fn download_url_resolves_relative_endpoints() {
        let settings = parse(&[]).unwrap();
        assert_eq!(
            settings.download_url("/download-csv/out.csv"),
            "http://127.0.0.1:8000/download-csv/out.csv"
        );
        assert_eq!(
            settings.download_url("https://cdn.example/out.csv"),
            "https://cdn.example/out.csv"
        );
    }
}
