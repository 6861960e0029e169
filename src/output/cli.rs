use super::{ScanOutput, UrlScanView};
use crate::model::{ContentVerdict, Verdict};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FeatureRow {
    #[tabled(rename = "Feature")]
    feature: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Check")]
    check: String,
    #[tabled(rename = "Result")]
    result: String,
}

pub fn print_cli_table(output: &ScanOutput) -> Result<()> {
    println!("{}", render_cli(output));
    Ok(())
}

/// Renders the human-readable output for a whole invocation.
pub fn render_cli(output: &ScanOutput) -> String {
    let mut out = String::new();

    if let Some(view) = &output.url_scan {
        out.push_str(&render_url_scan(view));
        if !view.is_detailed() {
            out.push_str("\nUpgrade to Premium for detailed analysis & report download\n");
        }
    }

    if let Some(verdict) = &output.content {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_content(verdict));
    }

    out
}

fn render_url_scan(view: &UrlScanView) -> String {
    let mut out = String::new();

    out.push_str(&format!("URL: {}\n", view.url));
    out.push_str(&format!("{}\n", transport_hint(&view.url)));
    out.push('\n');

    let headline = if view.is_trusted {
        "Trusted official website (domain-based check)".to_string()
    } else {
        match view.verdict {
            Verdict::Phishing => format!(
                "\x1b[31mPhishing detected\x1b[0m ({})",
                percent(view.confidence)
            ),
            Verdict::Safe => format!("\x1b[32mSafe URL\x1b[0m ({})", percent(view.confidence)),
        }
    };
    out.push_str(&headline);
    out.push('\n');

    let (Some(risk), Some(probability), Some(features)) =
        (view.risk_level, view.probability, view.features)
    else {
        return out;
    };

    out.push('\n');
    out.push_str("Premium Analysis\n");
    out.push_str(&format!("  Risk Level: {}\n", format_risk_level(risk)));
    out.push_str(&format!("  Phishing Probability: {}\n", percent(probability)));
    out.push('\n');

    let rows: Vec<FeatureRow> = features
        .breakdown()
        .into_iter()
        .map(|(label, value)| FeatureRow {
            feature: label.to_string(),
            value,
        })
        .collect();
    out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    out.push('\n');

    if let Some(action) = view.recommended_action {
        out.push_str(&format!("\nRecommended Action: {}\n", action));
    }

    out
}

fn render_content(verdict: &ContentVerdict) -> String {
    let mut out = String::new();

    let headline = match verdict {
        ContentVerdict::Unreachable { reason } => {
            format!("\x1b[33m{}\x1b[0m ({})", verdict.message(), reason)
        }
        ContentVerdict::Suspicious(_) => format!("\x1b[31m{}\x1b[0m", verdict.message()),
        ContentVerdict::Normal(_) => format!("\x1b[32m{}\x1b[0m", verdict.message()),
    };
    out.push_str(&headline);
    out.push('\n');

    if let Some(findings) = verdict.findings() {
        let rows = vec![
            FindingRow {
                check: "Title".to_string(),
                result: or_dash(&truncate(findings.title.trim(), 50)),
            },
            FindingRow {
                check: "Description".to_string(),
                result: or_dash(&truncate(findings.description.trim(), 50)),
            },
            FindingRow {
                check: "Keyword hits".to_string(),
                result: findings.keyword_hits.to_string(),
            },
            FindingRow {
                check: "Password field".to_string(),
                result: if findings.has_password_field { "yes" } else { "no" }.to_string(),
            },
        ];
        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    out
}

fn transport_hint(url: &str) -> &'static str {
    if url.to_lowercase().starts_with("https") {
        "HTTPS detected - encrypted connection"
    } else {
        "HTTP detected - unencrypted, higher risk"
    }
}

fn format_risk_level(level: crate::model::RiskLevel) -> String {
    use crate::model::RiskLevel;
    match level {
        RiskLevel::High => format!("\x1b[31m{}\x1b[0m", level),
        RiskLevel::Medium => format!("\x1b[33m{}\x1b[0m", level),
        RiskLevel::Low => format!("\x1b[32m{}\x1b[0m", level),
    }
}

fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract;
    use crate::model::{ContentFindings, RiskLevel, ScanResult};
    use crate::session::{Session, Tier};
    use chrono::Utc;

    fn result(is_trusted: bool, probability: f64) -> ScanResult {
        let url = "https://www.paytm.com/login";
        ScanResult {
            url: url.to_string(),
            is_trusted,
            probability,
            verdict: if is_trusted {
                Verdict::Safe
            } else {
                Verdict::from_probability(probability)
            },
            risk_level: RiskLevel::from_probability(probability),
            features: extract(url),
            scanned_at: Utc::now(),
        }
    }

    fn session(tier: Tier) -> Session {
        Session {
            username: "tester".to_string(),
            tier,
        }
    }

    #[test]
    fn test_free_output_prompts_upgrade() {
        let s = session(Tier::Free);
        let output = ScanOutput::new(&s).with_url_scan(&result(false, 0.9), &s);
        let text = render_cli(&output);
        assert!(text.contains("Phishing detected"));
        assert!(text.contains("90.00%"));
        assert!(text.contains("Upgrade to Premium"));
        assert!(!text.contains("Premium Analysis"));
    }

    #[test]
    fn test_premium_output_has_breakdown() {
        let s = session(Tier::Premium);
        let output = ScanOutput::new(&s).with_url_scan(&result(false, 0.3), &s);
        let text = render_cli(&output);
        assert!(text.contains("Safe URL"));
        assert!(text.contains("70.00%"));
        assert!(text.contains("Premium Analysis"));
        assert!(text.contains("Low Risk"));
        assert!(text.contains("Suspicious Count"));
        assert!(text.contains("URL looks safe"));
        assert!(!text.contains("Upgrade to Premium"));
    }

    #[test]
    fn test_trusted_headline() {
        let s = session(Tier::Free);
        let output = ScanOutput::new(&s).with_url_scan(&result(true, 0.95), &s);
        let text = render_cli(&output);
        assert!(text.contains("Trusted official website"));
        assert!(text.contains("HTTPS detected"));
    }

    #[test]
    fn test_content_output() {
        let s = session(Tier::Free);
        let output = ScanOutput::new(&s).with_content(ContentVerdict::Suspicious(
            ContentFindings {
                title: "Login".to_string(),
                description: String::new(),
                keyword_hits: 1,
                has_password_field: true,
            },
        ));
        let text = render_cli(&output);
        assert!(text.contains("Suspicious website content detected (score: 1)"));
        assert!(text.contains("Password field"));
    }

    #[test]
    fn test_unreachable_output() {
        let s = session(Tier::Free);
        let output = ScanOutput::new(&s).with_content(ContentVerdict::Unreachable {
            reason: "HTTP status 404".to_string(),
        });
        let text = render_cli(&output);
        assert!(text.contains("Cannot reach this website"));
        assert!(text.contains("HTTP status 404"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ääääääääää", 6), "äää...");
    }
}
