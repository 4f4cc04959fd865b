// AgentDeck - core/export.rs
//
// JSON export and plain-text clipboard reports for agent responses.
// Core layer: writes to any Write trait object.

use crate::core::model::AgentResponse;
use crate::util::error::ExportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// On-disk shape of an exported response. The flattened response
/// contributes the `agent` and `result` keys.
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    app: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    response: &'a AgentResponse,
}

/// Export one response as pretty-printed JSON.
pub fn export_json<W: Write>(
    response: &AgentResponse,
    generated_at: DateTime<Utc>,
    mut writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    let doc = ExportDocument {
        app: crate::util::constants::APP_NAME,
        version: crate::util::constants::APP_VERSION,
        generated_at,
        response,
    };
    serde_json::to_writer_pretty(&mut writer, &doc).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(agent = ?response.kind(), path = %export_path.display(), "Response exported");
    Ok(())
}

/// Render a response as a plain-text report suitable for the clipboard.
pub fn text_report(response: &AgentResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", response.kind().label());
    let _ = writeln!(out, "{}", "=".repeat(response.kind().label().len()));

    match response {
        AgentResponse::Narrative(r) => {
            let _ = writeln!(out, "{}", r.headline);
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", r.story);
            let _ = writeln!(out);
            let _ = writeln!(out, "Key messages:");
            for m in &r.key_messages {
                let _ = writeln!(out, "  - {m}");
            }
            let _ = writeln!(out, "Tone: {}", r.tone);
        }
        AgentResponse::Compliance(r) => {
            let _ = writeln!(out, "Verdict: {} (score {}/100)", r.verdict.label(), r.score);
            for issue in &r.issues {
                let _ = writeln!(out, "  [{}] {}", issue.severity.label(), issue.finding);
                let _ = writeln!(out, "        -> {}", issue.suggestion);
            }
        }
        AgentResponse::Segmentation(r) => {
            for s in &r.segments {
                let _ = writeln!(out, "{} ({}%)", s.name, s.share_pct);
                let _ = writeln!(out, "  Traits:   {}", s.traits.join(", "));
                let _ = writeln!(out, "  Channels: {}", s.channels.join(", "));
            }
        }
        AgentResponse::Competitor(r) => {
            for c in &r.competitors {
                let _ = writeln!(out, "{} ({}% share)", c.name, c.market_share_pct);
                let _ = writeln!(out, "  Strengths:  {}", c.strengths.join(", "));
                let _ = writeln!(out, "  Weaknesses: {}", c.weaknesses.join(", "));
            }
            let _ = writeln!(out, "Opportunities:");
            for o in &r.opportunities {
                let _ = writeln!(out, "  - {o}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::canned_response;
    use crate::core::model::AgentKind;
    use std::path::PathBuf;

    #[test]
    fn test_export_json_includes_envelope() {
        let response = canned_response(AgentKind::Compliance);
        let mut buf = Vec::new();
        export_json(&response, Utc::now(), &mut buf, &PathBuf::from("out.json")).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["app"], "AgentDeck");
        assert_eq!(value["agent"], "compliance");
        assert_eq!(value["result"]["verdict"], "needs_review");
        assert_eq!(value["result"]["issues"].as_array().unwrap().len(), 3);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_text_report_headers_match_agent() {
        for kind in AgentKind::all() {
            let report = text_report(&canned_response(*kind));
            assert!(report.starts_with(kind.label()));
        }
    }

    #[test]
    fn test_segmentation_report_lists_every_segment() {
        let report = text_report(&canned_response(AgentKind::Segmentation));
        assert!(report.contains("Value Seekers (38%)"));
        assert!(report.contains("Loyal Regulars (35%)"));
    }
}
