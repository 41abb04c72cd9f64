//! Generate command implementation.
//!
//! Merges flags with the optional style file, runs the pipeline, and reports
//! the result.

use crate::config::StyleConfig;
use crate::error::{QrError, Result};
use crate::output::Printer;
use crate::pipeline::{generate, QrRequest};
use crate::types::Colour;

use super::Cli;

/// Build a request from flags, falling back to the style file, then to builtin defaults.
pub fn resolve_request(cli: Cli) -> Result<QrRequest> {
    let config = match &cli.config {
        Some(path) => StyleConfig::load(path)?,
        None => StyleConfig::default(),
    };

    let data = cli.data.ok_or_else(|| QrError::Parse {
        message: "No data to encode".to_string(),
        help: Some("Pass the text, URL, phone number, or email as the first argument".to_string()),
    })?;

    let mut request = QrRequest::new(data);

    if let Some(mode) = cli.mode.or(config.mode) {
        request.mode = mode;
    }
    if let Some(out) = cli.out.or(config.out) {
        request.out = out;
    }
    if let Some(size) = cli.size.or(config.size) {
        request.box_size = size;
    }
    if let Some(fill) = cli.fill.or(config.fill) {
        request.fill = Colour::parse(&fill)?;
    }
    if let Some(bg) = cli.bg.or(config.bg) {
        request.background = Colour::parse(&bg)?;
    }

    request.logo = cli.logo.or(config.logo);
    request.frame = !cli.no_frame && config.frame.unwrap_or(true);
    request.auto_style = cli.auto_style || config.auto_style.unwrap_or(false);

    Ok(request)
}

pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let request = resolve_request(cli)?;
    let generated = generate(&request)?;
    let rendered = &generated.rendered;

    if let Some(style) = &rendered.style {
        printer.info(&format!(
            "Logo colour {} matched {} ({})",
            style.sampled, style.fill.name, style.fill.colour
        ));
    }

    for warning in rendered.warnings.iter() {
        printer.warning(warning);
    }

    printer.ok(&format!("Saved QR code to {}", generated.path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use crate::render::EcLevel;
    use crate::types::PayloadMode;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn cli(data: &str) -> Cli {
        Cli {
            data: Some(data.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let request = resolve_request(cli("hello")).unwrap();
        assert_eq!(request, QrRequest::new("hello"));
        assert_eq!(request.out, PathBuf::from("qr.png"));
        assert_eq!(request.box_size, 10);
        assert_eq!(request.ec_level(), EcLevel::M);
    }

    #[test]
    fn test_flags_applied() {
        let args = Cli {
            out: Some(PathBuf::from("phone.png")),
            size: Some(4),
            fill: Some("navy".to_string()),
            bg: Some("#FFFDF0".to_string()),
            mode: Some(PayloadMode::Tel),
            no_frame: true,
            ..cli("+61412345678")
        };

        let request = resolve_request(args).unwrap();
        assert_eq!(request.out, PathBuf::from("phone.png"));
        assert_eq!(request.box_size, 4);
        assert_eq!(request.fill, Colour::rgb(0, 0, 128));
        assert_eq!(request.background, Colour::rgb(0xFF, 0xFD, 0xF0));
        assert_eq!(request.mode, PayloadMode::Tel);
        assert!(!request.frame);
    }

    #[test]
    fn test_invalid_colour_is_fatal() {
        let args = Cli {
            fill: Some("blurple-ish".to_string()),
            ..cli("x")
        };
        assert!(matches!(
            resolve_request(args).unwrap_err(),
            QrError::Parse { .. }
        ));
    }

    #[test]
    fn test_style_file_fills_gaps() {
        let dir = tempdir().unwrap();
        let style = dir.path().join("style.yaml");
        fs::write(
            &style,
            "size: 6\nfill: teal\nframe: false\nauto_style: true\nlogo: logo.png\nmode: url\n",
        )
        .unwrap();

        let args = Cli {
            config: Some(style),
            size: Some(8),
            ..cli("example.com")
        };
        let request = resolve_request(args).unwrap();

        // Flag wins over the file
        assert_eq!(request.box_size, 8);
        // File wins over defaults
        assert_eq!(request.fill, Colour::rgb(0x0F, 0x76, 0x6E));
        assert!(!request.frame);
        assert!(request.auto_style);
        assert_eq!(request.mode, PayloadMode::Url);
        assert_eq!(request.logo, Some(dir.path().join("logo.png")));
        assert_eq!(request.ec_level(), EcLevel::H);
    }

    #[test]
    fn test_missing_data() {
        assert!(resolve_request(Cli::default()).is_err());
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("cli.png");
        let args = Cli {
            out: Some(out.clone()),
            ..cli("hello")
        };

        run(args, &Printer::plain()).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn test_run_with_missing_logo_still_succeeds() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("degraded.png");
        let args = Cli {
            out: Some(out.clone()),
            logo: Some(dir.path().join("nope.png")),
            auto_style: true,
            ..cli("hello")
        };

        run(args, &Printer::plain()).unwrap();
        assert!(out.exists());
    }
}
