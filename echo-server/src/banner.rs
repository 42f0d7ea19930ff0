//! Startup banner printed to the operator's console.

use crate::config::Config;

/// Usage instructions plus the URL the server answers on.
pub fn banner(config: &Config) -> String {
    let url = config.url();
    let rule = "=".repeat(50);
    format!(
        "
╔════════════════════════════════════════╗
║  HTTP Echo Test Server                 ║
╚════════════════════════════════════════╝

Server running on: {url}

Test with your HTTP client:
  1. Select Protocol: HTTP
  2. Select Method: POST (or any of GET, PUT, DELETE, PATCH, OPTIONS)
  3. Enter URL: {url}/api/test
  4. Enter JSON message
  5. Send and compare the echoed envelope

Press Ctrl+C to stop server
{rule}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_url_and_how_to_stop() {
        let text = banner(&Config::default());
        assert!(text.contains("Server running on: http://localhost:8080"));
        assert!(text.contains("http://localhost:8080/api/test"));
        assert!(text.contains("Press Ctrl+C to stop server"));
    }
}
